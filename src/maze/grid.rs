use serde::{Serialize, Serializer};
use std::{fmt, str::FromStr};

use super::{Cell, Coord, EditMode, NEIGHBOR_OFFSETS, START};
use crate::error::{MazeError, Result};

/// Square matrix of cells stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    data: Box<[Cell]>,
    size: usize,
}

impl Grid {
    /// Creates a `size`x`size` grid with every cell set to `cell`.
    pub fn filled(size: usize, cell: Cell) -> Self {
        let data = vec![cell; size * size].into_boxed_slice();
        Grid { data, size }
    }

    /// Builds a grid from explicit rows. Rows must be non-empty and form a square.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 || rows[0].is_empty() {
            return Err(MazeError::EmptyGrid);
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != size)
        {
            return Err(MazeError::RaggedGrid {
                row,
                expected: size,
                found,
            });
        }
        let data = rows.into_iter().flatten().collect::<Vec<_>>().into_boxed_slice();
        Ok(Grid { data, size })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    pub fn is_boundary(&self, coord: Coord) -> bool {
        coord.row == 0 || coord.col == 0 || coord.row == self.size - 1 || coord.col == self.size - 1
    }

    fn ravel_index(&self, coord: Coord) -> usize {
        coord.row * self.size + coord.col
    }

    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.is_in_bounds(coord)
            .then(|| self.data[self.ravel_index(coord)])
    }

    /// Overwrites a cell. Panics if `coord` is out of bounds, like slice indexing.
    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        let idx = self.ravel_index(coord);
        self.data[idx] = cell;
    }

    /// In-bounds orthogonal neighbors in search order: down, right, left, up.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(move |&(d_row, d_col)| coord.offset(d_row, d_col, self.size))
    }

    /// Neighbors a search may step onto (anything but a wall).
    pub fn passable_neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.neighbors(coord)
            .filter(move |&c| self[c].is_passable())
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(|(i, &cell)| (Coord::new(i / self.size, i % self.size), cell))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.data.chunks(self.size)
    }

    /// First target cell in row-major order.
    pub fn find_target(&self) -> Option<Coord> {
        self.cells()
            .find(|&(_, cell)| cell == Cell::Target)
            .map(|(coord, _)| coord)
    }

    pub fn target_count(&self) -> usize {
        self.data.iter().filter(|&&cell| cell == Cell::Target).count()
    }

    /// Applies an edit in place and reports whether the grid changed.
    ///
    /// The start cell and any target cell are never edited. Setting a target
    /// first turns every existing target back into an open cell.
    pub fn edit(&mut self, coord: Coord, mode: EditMode) -> Result<bool> {
        let cell = self.get(coord).ok_or(MazeError::OutOfBounds {
            coord,
            size: self.size,
        })?;
        if coord == START || cell == Cell::Target {
            return Ok(false);
        }

        match mode {
            EditMode::ToggleWall => {
                let toggled = match cell {
                    Cell::Wall => Cell::Open,
                    _ => Cell::Wall,
                };
                self.set(coord, toggled);
            }
            EditMode::SetTarget => {
                self.data
                    .iter_mut()
                    .filter(|c| **c == Cell::Target)
                    .for_each(|c| *c = Cell::Open);
                self.set(coord, Cell::Target);
            }
        }
        tracing::debug!("[edit] {:?} at {} ({:?} -> {:?})", mode, coord, cell, self[coord]);
        Ok(true)
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.data[self.ravel_index(index)]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = MazeError;

    /// Parses the text form: one line per row using `#`, `.` and `E`.
    /// Blank lines and surrounding whitespace are ignored.
    fn from_str(s: &str) -> Result<Self> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, symbol)| {
                        Cell::from_symbol(symbol)
                            .ok_or(MazeError::UnknownCellSymbol { symbol, row, col })
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Grid::from_rows(rows)
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(
            self.rows()
                .map(|row| row.iter().map(|c| c.symbol()).collect::<String>()),
        )
    }
}
