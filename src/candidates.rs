use crate::error::{HitoriError, HitoriResult};
use crate::grid::Grid;
use fastrand::Rng;

/// Cells whose value repeats somewhere in their row or column.
///
/// Built once from the puzzle values. Only these cells can ever take part in a
/// conflict, so only these cells are worth toggling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    coords: Vec<(usize, usize)>,
}

impl CandidateSet {
    pub fn from_grid(grid: &Grid) -> Self {
        let n = grid.size();
        let mut coords = Vec::new();
        for r in 0..n {
            for c in 0..n {
                if has_duplicate(grid, r, c) {
                    coords.push((r, c));
                }
            }
        }
        Self { coords }
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.coords.binary_search(&(row, col)).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.coords.iter().copied()
    }

    /// Uniform draw over the set.
    pub fn pick(&self, rng: &mut Rng) -> HitoriResult<(usize, usize)> {
        if self.coords.is_empty() {
            return Err(HitoriError::EmptyCandidates);
        }
        Ok(self.coords[rng.usize(0..self.coords.len())])
    }
}

fn has_duplicate(grid: &Grid, row: usize, col: usize) -> bool {
    let value = grid.get(row, col).value();
    (0..grid.size()).any(|k| {
        (k != col && grid.get(row, k).value() == value)
            || (k != row && grid.get(k, col).value() == value)
    })
}
