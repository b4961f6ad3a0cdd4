use std::collections::HashSet;

use super::{ParentMap, SearchResult, reconstruct_path};
use crate::maze::{Cell, Coord, Grid};

/// Depth-first search over an explicit stack.
///
/// Neighbors are pushed in down, right, left, up order, so the last one pushed
/// (up) is explored first. A popped cell that was already visited is dropped.
pub fn solve_dfs(grid: &Grid, start: Coord) -> SearchResult {
    let mut stack = vec![start];
    let mut on_stack = HashSet::from([start]);
    let mut seen = HashSet::new();
    let mut parents = ParentMap::from([(start, None)]);
    let mut visited = Vec::new();

    while let Some(current) = stack.pop() {
        on_stack.remove(&current);
        // Never taken while pushes skip cells already seen or on the stack
        if !seen.insert(current) {
            continue;
        }

        visited.push(current);
        if grid[current] == Cell::Target {
            tracing::debug!("[dfs] target found at {} after {} visits", current, visited.len());
            return SearchResult {
                solution: reconstruct_path(current, &parents),
                visited,
            };
        }

        for neighbor in grid.passable_neighbors(current) {
            if !seen.contains(&neighbor) && on_stack.insert(neighbor) {
                parents.insert(neighbor, Some(current));
                stack.push(neighbor);
            }
        }
    }

    tracing::debug!("[dfs] stack exhausted after {} visits", visited.len());
    SearchResult {
        visited,
        solution: Vec::new(),
    }
}
