//! Conflict scoring.
//!
//! A conflict is every kept occurrence of a value beyond the first one in the
//! same row or column. Rows and columns are counted independently, so a cell can
//! contribute to both.

use crate::grid::{Cell, Grid};

/// Counts repeats among the kept cells of one line. `buf` is scratch space.
fn line_repeats<I>(cells: I, buf: &mut Vec<u32>) -> u32
where
    I: Iterator<Item = Cell>,
{
    buf.clear();
    buf.extend(cells.filter(|c| c.is_kept()).map(Cell::value));
    buf.sort_unstable();
    buf.windows(2).filter(|w| w[0] == w[1]).count() as u32
}

pub fn row_conflicts(grid: &Grid) -> u32 {
    let mut buf = Vec::with_capacity(grid.size());
    (0..grid.size())
        .map(|r| line_repeats(grid.row(r).iter().copied(), &mut buf))
        .sum()
}

pub fn column_conflicts(grid: &Grid) -> u32 {
    let mut buf = Vec::with_capacity(grid.size());
    (0..grid.size())
        .map(|c| line_repeats(grid.column(c), &mut buf))
        .sum()
}

pub fn full_score(grid: &Grid) -> u32 {
    row_conflicts(grid) + column_conflicts(grid)
}

/// Conflicts in one row plus conflicts in one column.
pub fn cross_score(grid: &Grid, row: usize, col: usize) -> u32 {
    let mut buf = Vec::with_capacity(grid.size());
    line_repeats(grid.row(row).iter().copied(), &mut buf) + line_repeats(grid.column(col), &mut buf)
}

/// Toggles `(row, col)` and returns how much the full score changed.
///
/// Only the cell's row and column can change, so the difference of their cross
/// scores equals the difference of full scores.
pub fn toggle_delta(grid: &mut Grid, row: usize, col: usize) -> i64 {
    let before = cross_score(grid, row, col) as i64;
    grid.toggle(row, col);
    let after = cross_score(grid, row, col) as i64;
    after - before
}
