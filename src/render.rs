use crossterm::{
    queue,
    style::{self, Color, StyledContent, Stylize},
};
use std::{fmt, io::Write};

use crate::{
    maze::{Cell, Coord, Grid, START},
    playback::Overlay,
};

/// What a single grid position looks like on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Open,
    Start,
    Target,
    Visited,
    Path,
}

impl Tile {
    /// The width of each tile when rendered, in character widths.
    pub const WIDTH: u16 = 2;

    /// Picks the tile for `coord`. Walls and the target always win over
    /// search marks, and the start stays visible even once visited.
    pub fn at(grid: &Grid, overlay: &Overlay, coord: Coord) -> Tile {
        match grid[coord] {
            Cell::Wall => Tile::Wall,
            Cell::Target => Tile::Target,
            Cell::Open if coord == START => Tile::Start,
            Cell::Open if overlay.path.contains(&coord) => Tile::Path,
            Cell::Open if overlay.visited.contains(&coord) => Tile::Visited,
            Cell::Open => Tile::Open,
        }
    }

    fn styled(self) -> StyledContent<&'static str> {
        match self {
            Tile::Wall => "⬜".with(Color::White),
            Tile::Open => "  ".with(Color::Reset),
            Tile::Start => "🟩".with(Color::Green),
            Tile::Target => "🟥".with(Color::Red),
            Tile::Visited => "* ".with(Color::Blue),
            Tile::Path => "🟨".with(Color::Yellow),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = self.styled();

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Tile::WIDTH as usize,
                "Each tile must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// Writes the grid with the overlay on top, one terminal line per row.
pub fn draw<W: Write>(out: &mut W, grid: &Grid, overlay: &Overlay) -> std::io::Result<()> {
    for row in 0..grid.size() {
        for col in 0..grid.size() {
            let tile = Tile::at(grid, overlay, Coord::new(row, col));
            queue!(out, style::Print(tile))?;
        }
        queue!(out, style::Print("\n"))?;
    }
    out.flush()
}
