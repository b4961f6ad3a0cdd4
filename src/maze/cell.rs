use serde::{Deserialize, Serialize};
use std::fmt;

/// State of one grid cell.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Wall,
    Open,
    Target,
}

impl Cell {
    /// Symbol used by the grid text form.
    pub const fn symbol(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Open => '.',
            Cell::Target => 'E',
        }
    }

    pub const fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '#' => Some(Cell::Wall),
            '.' => Some(Cell::Open),
            'E' => Some(Cell::Target),
            _ => None,
        }
    }

    /// Whether a search may step onto this cell.
    pub const fn is_passable(self) -> bool {
        !matches!(self, Cell::Wall)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
