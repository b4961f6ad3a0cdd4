use crate::{
    error::Result,
    generators::{Seed, generate_with_seed, validate_size},
    library::MazeLibrary,
    maze::{Coord, EditMode, Grid},
    playback::{DEFAULT_DELAY_MS, Playback, clamp_delay},
    solvers::{SearchResult, Solver, solve},
};

/// Name shown for a maze that came straight from the generator.
pub const GENERATED_NAME: &str = "Random Maze";

/// Everything a front end needs to drive the visualizer: the current maze,
/// the chosen algorithm and speed, the last search and the saved mazes.
pub struct Session {
    /// The maze being shown
    grid: Grid,
    /// Side length used for the next generation
    size: usize,
    /// Seeding policy used for every generation
    seed: Seed,
    /// Display name of the current maze
    name: String,
    solver: Solver,
    /// Per-step playback delay in milliseconds
    delay_ms: u64,
    /// Result of the last search on the current grid, dropped on any change
    result: Option<SearchResult>,
    library: MazeLibrary,
}

impl Session {
    /// Starts a session on the maze generated for `size`.
    pub fn new(size: usize) -> Result<Self> {
        Self::with_seed(size, Seed::Size)
    }

    pub fn with_seed(size: usize, seed: Seed) -> Result<Self> {
        let grid = generate_with_seed(size, seed)?;
        Ok(Session {
            grid,
            size,
            seed,
            name: GENERATED_NAME.to_string(),
            solver: Solver::Bfs,
            delay_ms: DEFAULT_DELAY_MS,
            result: None,
            library: MazeLibrary::new(),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn solver(&self) -> Solver {
        self.solver
    }

    /// Picking an algorithm discards the previous search.
    pub fn set_solver(&mut self, solver: Solver) {
        self.solver = solver;
        self.reset();
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn set_delay_ms(&mut self, delay_ms: u64) {
        self.delay_ms = clamp_delay(delay_ms);
    }

    pub fn result(&self) -> Option<&SearchResult> {
        self.result.as_ref()
    }

    pub fn library(&self) -> &MazeLibrary {
        &self.library
    }

    /// Drops the last search result.
    pub fn reset(&mut self) {
        self.result = None;
    }

    /// Replaces the grid with a freshly generated maze of the current size.
    pub fn regenerate(&mut self) -> Result<()> {
        let grid = generate_with_seed(self.size, self.seed)?;
        self.replace(grid, GENERATED_NAME.to_string());
        Ok(())
    }

    /// Changes the maze size and regenerates. On error nothing changes.
    pub fn resize(&mut self, size: usize) -> Result<()> {
        validate_size(size)?;
        self.size = size;
        self.regenerate()
    }

    /// Edits the current grid. Any change invalidates the last search.
    pub fn edit(&mut self, coord: Coord, mode: EditMode) -> Result<bool> {
        let changed = self.grid.edit(coord, mode)?;
        if changed {
            self.reset();
        }
        Ok(changed)
    }

    /// Runs the selected algorithm on the current grid and keeps the result.
    pub fn solve(&mut self) -> Result<&SearchResult> {
        let result = solve(&self.grid, self.solver)?;
        tracing::info!(
            "[session] {} on {:?}: {} visits, found = {}",
            self.solver,
            self.name,
            result.visited.len(),
            result.found()
        );
        Ok(&*self.result.insert(result))
    }

    /// Replay of the last search at the current delay.
    pub fn playback(&self) -> Option<Playback> {
        self.result
            .as_ref()
            .map(|result| Playback::new(result, self.delay_ms))
    }

    /// Saves the current grid to the library and takes on the saved name.
    pub fn save(&mut self) -> String {
        let name = self.library.save(&self.grid).to_string();
        self.name.clone_from(&name);
        name
    }

    /// Loads a saved grid by name.
    pub fn load(&mut self, name: &str) -> Result<()> {
        let grid = self.library.get(name)?.clone();
        self.size = grid.size();
        self.replace(grid, name.to_string());
        Ok(())
    }

    fn replace(&mut self, grid: Grid, name: String) {
        tracing::debug!("[session] switching to {:?}", name);
        self.grid = grid;
        self.name = name;
        self.reset();
    }
}
