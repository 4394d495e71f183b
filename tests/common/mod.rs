#![allow(dead_code)]

use hitori::config::{BudgetParams, SolverConfig};
use hitori::grid::Grid;

/// Every shading without conflicts disconnects the kept cells.
pub const UNSOLVABLE_3X3: [[u32; 3]; 3] = [[1, 1, 2], [2, 1, 1], [1, 2, 2]];

pub const PUZZLE_3X3: [[u32; 3]; 3] = [[2, 2, 1], [1, 3, 2], [3, 1, 1]];

pub const PUZZLE_4X4: [[u32; 4]; 4] = [[1, 1, 2, 3], [2, 3, 3, 1], [3, 2, 1, 4], [4, 1, 4, 2]];

pub const PUZZLE_5X5: [[u32; 5]; 5] = [
    [3, 1, 3, 2, 4],
    [1, 2, 4, 3, 5],
    [2, 2, 3, 5, 1],
    [5, 4, 1, 1, 2],
    [4, 3, 5, 1, 1],
];

/// Latin square: nothing to shade.
pub const SOLVED_4X4: [[u32; 4]; 4] = [[1, 2, 3, 4], [2, 3, 4, 1], [3, 4, 1, 2], [4, 1, 2, 3]];

pub fn grid<const N: usize>(rows: [[u32; N]; N]) -> Grid {
    Grid::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
}

pub fn signed<const N: usize>(rows: [[i64; N]; N]) -> Grid {
    Grid::from_signed_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
}

/// Default schedule with a trial cap so a test can never spin forever.
pub fn bounded_config(max_trials: u64) -> SolverConfig {
    SolverConfig {
        budget: BudgetParams {
            max_trials: Some(max_trials),
            max_seconds: None,
        },
        ..Default::default()
    }
}

/// Values of a grid with shading ignored.
pub fn values(grid: &Grid) -> Vec<u32> {
    grid.cells().iter().map(|c| c.value()).collect()
}
