use std::collections::{HashSet, VecDeque};

use super::{ParentMap, SearchResult, reconstruct_path};
use crate::maze::{Cell, Coord, Grid};

/// Breadth-first search. Cells are recorded as visited when dequeued, and a
/// cell is enqueued at most once, so the path found is a shortest one.
pub fn solve_bfs(grid: &Grid, start: Coord) -> SearchResult {
    let mut queue = VecDeque::from([start]);
    // Cells that have been enqueued at some point, visited or not
    let mut discovered = HashSet::from([start]);
    let mut parents = ParentMap::from([(start, None)]);
    let mut visited = Vec::new();

    while let Some(current) = queue.pop_front() {
        visited.push(current);
        if grid[current] == Cell::Target {
            tracing::debug!("[bfs] target found at {} after {} visits", current, visited.len());
            return SearchResult {
                solution: reconstruct_path(current, &parents),
                visited,
            };
        }

        for neighbor in grid.passable_neighbors(current) {
            if discovered.insert(neighbor) {
                parents.insert(neighbor, Some(current));
                queue.push_back(neighbor);
            }
        }
    }

    tracing::debug!("[bfs] frontier exhausted after {} visits", visited.len());
    SearchResult {
        visited,
        solution: Vec::new(),
    }
}
