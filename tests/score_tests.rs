mod common;

use common::*;
use hitori::score::{column_conflicts, cross_score, full_score, row_conflicts, toggle_delta};
use rstest::rstest;

#[test]
fn test_latin_square_has_no_conflicts() {
    let g = grid(SOLVED_4X4);
    assert_eq!(row_conflicts(&g), 0);
    assert_eq!(column_conflicts(&g), 0);
    assert_eq!(full_score(&g), 0);
}

#[test]
fn test_rows_and_columns_are_counted_independently() {
    // Each row and each column repeats exactly one value once.
    let g = grid(UNSOLVABLE_3X3);
    assert_eq!(row_conflicts(&g), 3);
    assert_eq!(column_conflicts(&g), 3);
    assert_eq!(full_score(&g), 6);
}

#[test]
fn test_every_repeat_beyond_the_first_counts() {
    let g = grid([[7, 7, 7], [1, 2, 3], [2, 3, 1]]);
    // Row 0: two extra sevens. Columns: 7,1,2 / 7,2,3 / 7,3,1 are clean.
    assert_eq!(row_conflicts(&g), 2);
    assert_eq!(column_conflicts(&g), 0);
}

#[test]
fn test_shaded_cells_are_ignored() {
    let g = signed([[1, -1, 2], [2, 1, 1], [1, 2, 2]]);
    assert_eq!(row_conflicts(&g), 2);
    assert_eq!(column_conflicts(&g), 2);
    assert_eq!(full_score(&g), 4);
}

#[test]
fn test_values_larger_than_the_grid_are_scored() {
    let g = grid([[100, 100], [3, 4_000_000]]);
    assert_eq!(full_score(&g), 1);
}

#[rstest]
#[case(0, 0, 2)] // row 0 has one extra 1, column 0 has one extra 1
#[case(1, 0, 2)] // row 1 has one extra 1, column 0 has one extra 1
#[case(1, 2, 2)] // row 1 has one extra 1, column 2 has one extra 2
fn test_cross_score(#[case] row: usize, #[case] col: usize, #[case] expected: u32) {
    let g = grid(UNSOLVABLE_3X3);
    assert_eq!(cross_score(&g, row, col), expected);
}

#[test]
fn test_toggle_delta_matches_full_rescan() {
    let mut g = grid(PUZZLE_5X5);
    for r in 0..5 {
        for c in 0..5 {
            let before = full_score(&g) as i64;
            let delta = toggle_delta(&mut g, r, c);
            let after = full_score(&g) as i64;
            assert_eq!(after - before, delta, "delta mismatch at ({}, {})", r, c);
        }
    }
}

#[test]
fn test_toggle_delta_leaves_cell_toggled() {
    let mut g = grid(PUZZLE_3X3);
    let delta = toggle_delta(&mut g, 0, 0);
    assert!(g.is_shaded(0, 0));
    // Shading one of the two 2s in row 0 removes that row conflict.
    assert_eq!(delta, -1);

    let back = toggle_delta(&mut g, 0, 0);
    assert!(!g.is_shaded(0, 0));
    assert_eq!(back, 1);
}
