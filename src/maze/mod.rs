mod cell;
mod coord;
mod grid;

use serde::{Deserialize, Serialize};

pub use cell::Cell;
pub use coord::Coord;
pub use grid::Grid;

use crate::error::Result;

/// Fixed start cell, just inside the top-left corner of the border.
pub const START: Coord = Coord::new(1, 1);

/// Unit offsets as `(d_row, d_col)` in the order every solver expands them:
/// down, right, left, up.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(1, 0), (0, 1), (0, -1), (-1, 0)];

/// How a click on a cell changes the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditMode {
    /// Flip a wall to open or an open cell to a wall.
    ToggleWall,
    /// Move the target to this cell.
    SetTarget,
}

/// Checks if `(row, col)` lies inside a `size`x`size` grid.
pub fn is_valid(row: isize, col: isize, size: usize) -> bool {
    row >= 0 && col >= 0 && (row as usize) < size && (col as usize) < size
}

/// Returns an edited copy of `grid`, leaving the original untouched.
pub fn edit_cell(grid: &Grid, coord: Coord, mode: EditMode) -> Result<Grid> {
    let mut edited = grid.clone();
    edited.edit(coord, mode)?;
    Ok(edited)
}
