use crate::error::{HitoriError, HitoriResult};
use serde::{Deserialize, Serialize};

/// State of a single cell. The puzzle value survives shading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Kept(u32),
    Shaded(u32),
}

impl Cell {
    #[inline(always)]
    pub fn value(self) -> u32 {
        match self {
            Cell::Kept(v) | Cell::Shaded(v) => v,
        }
    }

    #[inline(always)]
    pub fn is_shaded(self) -> bool {
        matches!(self, Cell::Shaded(_))
    }

    #[inline(always)]
    pub fn is_kept(self) -> bool {
        matches!(self, Cell::Kept(_))
    }

    #[inline(always)]
    pub fn toggled(self) -> Self {
        match self {
            Cell::Kept(v) => Cell::Shaded(v),
            Cell::Shaded(v) => Cell::Kept(v),
        }
    }

    /// Positive for kept cells, negative for shaded ones.
    pub fn signed(self) -> i64 {
        match self {
            Cell::Kept(v) => v as i64,
            Cell::Shaded(v) => -(v as i64),
        }
    }
}

/// Square puzzle grid, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i64>>", into = "Vec<Vec<i64>>")]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds an unshaded puzzle from positive values.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> HitoriResult<Self> {
        let signed = rows
            .into_iter()
            .map(|row| row.into_iter().map(i64::from).collect())
            .collect();
        Self::from_signed_rows(signed)
    }

    /// Builds a grid from the signed encoding: `v` is kept, `-v` is shaded.
    pub fn from_signed_rows(rows: Vec<Vec<i64>>) -> HitoriResult<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(HitoriError::Empty);
        }

        let mut cells = Vec::with_capacity(size * size);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(HitoriError::NonSquare);
            }
            for &raw in row {
                let value = u32::try_from(raw.unsigned_abs())
                    .ok()
                    .filter(|&v| v > 0)
                    .ok_or_else(|| HitoriError::Parse {
                        line: r + 1,
                        token: raw.to_string(),
                    })?;
                cells.push(if raw > 0 {
                    Cell::Kept(value)
                } else {
                    Cell::Shaded(value)
                });
            }
        }

        Ok(Self { size, cells })
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.size + col]
    }

    #[inline(always)]
    pub fn is_shaded(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_shaded()
    }

    /// Flips one cell between kept and shaded.
    #[inline(always)]
    pub fn toggle(&mut self, row: usize, col: usize) {
        let idx = row * self.size + col;
        self.cells[idx] = self.cells[idx].toggled();
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    pub fn column(&self, col: usize) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().skip(col).step_by(self.size).copied()
    }

    /// In-bounds orthogonal neighbours of a cell.
    pub fn neighbours(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
        let n = self.size;
        let up = (row > 0).then(|| (row - 1, col));
        let down = (row + 1 < n).then(|| (row + 1, col));
        let left = (col > 0).then(|| (row, col - 1));
        let right = (col + 1 < n).then(|| (row, col + 1));
        [up, down, left, right].into_iter().flatten()
    }

    pub fn has_shaded_neighbour(&self, row: usize, col: usize) -> bool {
        self.neighbours(row, col)
            .any(|(r, c)| self.is_shaded(r, c))
    }

    pub fn shaded_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_shaded()).count()
    }

    pub fn shaded_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_shaded())
            .map(|(i, _)| (i / self.size, i % self.size))
            .collect()
    }

    pub fn to_signed_rows(&self) -> Vec<Vec<i64>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|c| c.signed()).collect())
            .collect()
    }
}

impl TryFrom<Vec<Vec<i64>>> for Grid {
    type Error = HitoriError;

    fn try_from(rows: Vec<Vec<i64>>) -> Result<Self, Self::Error> {
        Grid::from_signed_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<i64>> {
    fn from(grid: Grid) -> Self {
        grid.to_signed_rows()
    }
}
