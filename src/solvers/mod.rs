mod astar;
mod bfs;
mod dfs;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{
    error::{MazeError, Result},
    maze::{Coord, Grid, START},
};
pub use astar::{AStarMode, solve_astar};
pub use bfs::solve_bfs;
pub use dfs::solve_dfs;

/// Maps each discovered cell to the cell that discovered it.
/// The start maps to `None`.
pub type ParentMap = HashMap<Coord, Option<Coord>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Solver {
    Bfs,
    Dfs,
    AStar(AStarMode),
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::AStar(AStarMode::SkipDuplicates) => write!(f, "A* Search"),
            Solver::AStar(AStarMode::UpdateInPlace) => write!(f, "A* Search (update in place)"),
        }
    }
}

/// Output of one search: the order cells were expanded in, and the path
/// from start to target (empty if the target was never reached).
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub visited: Vec<Coord>,
    pub solution: Vec<Coord>,
}

impl SearchResult {
    pub fn found(&self) -> bool {
        !self.solution.is_empty()
    }

    /// Number of moves along the solution.
    pub fn path_len(&self) -> Option<usize> {
        self.solution.len().checked_sub(1)
    }
}

/// Walks parent pointers back from `terminal` and returns the path in
/// start-to-terminal order.
pub fn reconstruct_path(terminal: Coord, parents: &ParentMap) -> Vec<Coord> {
    let mut path = vec![terminal];
    let mut child = terminal;
    while let Some(&Some(parent)) = parents.get(&child) {
        path.push(parent);
        child = parent;
    }
    path.reverse();
    path
}

/// Searches from the fixed start cell.
pub fn solve(grid: &Grid, solver: Solver) -> Result<SearchResult> {
    solve_from(grid, START, solver)
}

/// Searches from an explicit start cell, which must lie inside the grid.
pub fn solve_from(grid: &Grid, start: Coord, solver: Solver) -> Result<SearchResult> {
    if grid.size() == 0 {
        return Err(MazeError::EmptyGrid);
    }
    if !grid.is_in_bounds(start) {
        return Err(MazeError::OutOfBounds {
            coord: start,
            size: grid.size(),
        });
    }

    let result = match solver {
        Solver::Bfs => solve_bfs(grid, start),
        Solver::Dfs => solve_dfs(grid, start),
        Solver::AStar(mode) => solve_astar(grid, start, mode),
    };
    tracing::debug!(
        "[solve] {} visited {} cells, solution has {} cells",
        solver,
        result.visited.len(),
        result.solution.len()
    );
    Ok(result)
}
