pub mod lcg;
mod recur_backtrack;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    error::{MazeError, Result},
    maze::{Cell, Coord, Grid, START},
};
use lcg::Lcg;
use recur_backtrack::recursive_backtrack;

/// Smallest maze with at least one room besides the start.
pub const MIN_SIZE: usize = 5;
pub const MAX_SIZE: usize = 255;
pub const DEFAULT_SIZE: usize = 19;

/// Where the carving PRNG gets its initial state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seed {
    /// Seed with the maze size, so each size has exactly one maze.
    #[default]
    Size,
    /// Seed with an explicit value.
    Fixed(u64),
    /// Seed from the thread RNG.
    Entropy,
}

impl Seed {
    fn resolve(self, size: usize) -> u64 {
        match self {
            Seed::Size => size as u64,
            Seed::Fixed(seed) => seed,
            Seed::Entropy => {
                let seed = rand::rng().random_range(0..lcg::MODULUS);
                tracing::info!("[generate] drew seed {} from entropy", seed);
                seed
            }
        }
    }
}

/// Checks that `size` is odd and within [`MIN_SIZE`]..=[`MAX_SIZE`].
pub fn validate_size(size: usize) -> Result<()> {
    if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
        return Err(MazeError::SizeOutOfRange {
            size,
            min: MIN_SIZE,
            max: MAX_SIZE,
        });
    }
    if size % 2 == 0 {
        return Err(MazeError::EvenSize { size });
    }
    Ok(())
}

/// Target cell of a freshly generated maze: the room in the bottom-right corner.
pub fn default_target(size: usize) -> Coord {
    Coord::new(size - 2, size - 2)
}

/// Generates the maze for `size`. The same size always yields the same grid.
pub fn generate(size: usize) -> Result<Grid> {
    generate_with_seed(size, Seed::Size)
}

/// Generates a `size`x`size` maze with the given seeding policy.
///
/// The maze is carved completely before the start and target are stamped, so
/// both always land on carved rooms and the target is reachable from the start.
pub fn generate_with_seed(size: usize, seed: Seed) -> Result<Grid> {
    validate_size(size)?;
    let seed = seed.resolve(size);
    let mut rng = Lcg::new(seed);

    let mut grid = Grid::filled(size, Cell::Wall);
    grid.set(START, Cell::Open);
    recursive_backtrack(&mut grid, START, &mut rng);

    grid.set(START, Cell::Open);
    grid.set(default_target(size), Cell::Target);

    tracing::debug!("[generate] carved {}x{} maze with seed {}", size, size, seed);
    Ok(grid)
}
