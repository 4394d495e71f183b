use crate::grid::Grid;

/// True when two edge-adjacent cells are both shaded.
pub fn has_adjacent_shaded(grid: &Grid) -> bool {
    let n = grid.size();
    for r in 0..n {
        for c in 0..n {
            if !grid.is_shaded(r, c) {
                continue;
            }
            if (r + 1 < n && grid.is_shaded(r + 1, c)) || (c + 1 < n && grid.is_shaded(r, c + 1)) {
                return true;
            }
        }
    }
    false
}

/// Number of cells reached by a depth-first walk through kept cells.
///
/// The walk starts at (0,0), or at (1,0) when (0,0) is shaded. Every reached
/// cell is counted, shaded ones included, but only kept cells expand to their
/// neighbours.
pub fn reachable_count(grid: &Grid) -> usize {
    let n = grid.size();
    let start = if n < 2 || !grid.is_shaded(0, 0) {
        (0, 0)
    } else {
        (1, 0)
    };

    let mut visited = vec![false; n * n];
    let mut stack = Vec::with_capacity(n * n);
    visited[start.0 * n + start.1] = true;
    stack.push(start);
    let mut count = 0;

    while let Some((r, c)) = stack.pop() {
        count += 1;
        if grid.is_shaded(r, c) {
            continue;
        }
        for (nr, nc) in grid.neighbours(r, c) {
            let idx = nr * n + nc;
            if !visited[idx] {
                visited[idx] = true;
                stack.push((nr, nc));
            }
        }
    }
    count
}

/// No adjacent shaded cells and every cell reached from the start.
pub fn is_feasible(grid: &Grid) -> bool {
    !has_adjacent_shaded(grid) && reachable_count(grid) == grid.size() * grid.size()
}
