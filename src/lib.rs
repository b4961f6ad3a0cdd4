//! Grid maze generation and search traces.
//!
//! [`generators::generate`] carves a deterministic maze, [`solvers::solve`]
//! runs BFS, DFS or A* over it and returns the expansion order together with
//! the solution path, and [`playback::Playback`] replays that result one
//! frame at a time for an animator.

pub mod error;
pub mod generators;
pub mod library;
pub mod maze;
pub mod playback;
pub mod render;
pub mod session;
pub mod solvers;

pub use error::{MazeError, Result};
pub use generators::{Seed, generate, generate_with_seed};
pub use maze::{Cell, Coord, EditMode, Grid, START, edit_cell};
pub use solvers::{AStarMode, SearchResult, Solver, solve, solve_from};
