use crate::candidates::CandidateSet;
use crate::config::MoveStrategy;
use crate::connectivity;
use crate::grid::Grid;
use crate::score;
use fastrand::Rng;

/// A single applied toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    /// Change of the full score caused by the toggle.
    pub delta: i64,
    /// The toggle shaded the cell (as opposed to restoring it).
    pub shaded: bool,
}

/// A kept cell may be shaded only when no neighbour is shaded. Shaded cells can
/// always be restored.
#[inline(always)]
pub fn is_eligible(grid: &Grid, row: usize, col: usize) -> bool {
    grid.is_shaded(row, col) || !grid.has_shaded_neighbour(row, col)
}

/// Toggles one random candidate of `grid` in place.
///
/// Draws are repeated until an eligible cell is found, at most `max_resamples`
/// times. With [`MoveStrategy::ImmediateValidate`] a toggle that breaks
/// connectivity is undone and counts as a failed draw. Returns `None` (grid
/// untouched) when the draws run out or the candidate set is empty.
pub fn propose(
    grid: &mut Grid,
    candidates: &CandidateSet,
    strategy: MoveStrategy,
    max_resamples: usize,
    rng: &mut Rng,
) -> Option<Move> {
    for _ in 0..max_resamples {
        let (row, col) = candidates.pick(rng).ok()?;
        if !is_eligible(grid, row, col) {
            continue;
        }

        let shaded = !grid.is_shaded(row, col);
        let delta = score::toggle_delta(grid, row, col);

        if strategy == MoveStrategy::ImmediateValidate && !connectivity::is_feasible(grid) {
            grid.toggle(row, col);
            continue;
        }

        return Some(Move {
            row,
            col,
            delta,
            shaded,
        });
    }
    None
}
