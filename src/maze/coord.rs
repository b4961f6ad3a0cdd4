use serde::{Deserialize, Serialize};
use std::fmt;

/// A grid position as `(row, col)`, both 0-indexed.
///
/// Coordinates are plain values: two coordinates are the same cell iff both
/// components are equal, which makes them usable as `HashMap` keys for the
/// per-search parent and cost maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// Moves by a signed offset, returning `None` if the result leaves a
    /// `size`x`size` grid.
    pub fn offset(self, d_row: isize, d_col: isize, size: usize) -> Option<Coord> {
        let row = self.row as isize + d_row;
        let col = self.col as isize + d_col;
        super::is_valid(row, col, size).then(|| Coord::new(row as usize, col as usize))
    }

    /// Number of unit steps between two cells ignoring walls.
    pub fn manhattan(self, other: Coord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Cell halfway between `self` and `other`.
    pub fn midpoint(self, other: Coord) -> Coord {
        Coord::new((self.row + other.row) / 2, (self.col + other.col) / 2)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_stays_in_bounds() {
        let c = Coord::new(0, 2);
        assert_eq!(c.offset(-1, 0, 5), None);
        assert_eq!(c.offset(1, 0, 5), Some(Coord::new(1, 2)));
        assert_eq!(c.offset(0, 2, 5), Some(Coord::new(0, 4)));
        assert_eq!(c.offset(0, 3, 5), None);
    }

    #[test]
    fn test_manhattan_and_midpoint() {
        let a = Coord::new(1, 1);
        let b = Coord::new(1, 3);
        assert_eq!(a.manhattan(b), 2);
        assert_eq!(b.manhattan(a), 2);
        assert_eq!(a.midpoint(b), Coord::new(1, 2));
    }
}
