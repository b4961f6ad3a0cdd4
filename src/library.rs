use serde::Serialize;

use crate::{
    error::{MazeError, Result},
    maze::Grid,
};

/// A named copy of a grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub name: String,
    pub grid: Grid,
}

/// In-memory list of saved mazes, in save order.
///
/// Entries are never deduplicated or evicted; saving the same grid twice
/// stores it twice.
#[derive(Debug, Default, Clone)]
pub struct MazeLibrary {
    entries: Vec<Snapshot>,
}

impl MazeLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves a copy of `grid` as "Custom Maze N", N being the new entry count.
    /// Returns the name given.
    pub fn save(&mut self, grid: &Grid) -> &str {
        let name = format!("Custom Maze {}", self.entries.len() + 1);
        self.save_as(name, grid)
    }

    pub fn save_as(&mut self, name: impl Into<String>, grid: &Grid) -> &str {
        self.entries.push(Snapshot {
            name: name.into(),
            grid: grid.clone(),
        });
        let saved = &self.entries[self.entries.len() - 1];
        tracing::debug!("[library] saved {:?} ({} entries)", saved.name, self.entries.len());
        &saved.name
    }

    /// Most recently saved grid with this name.
    pub fn get(&self, name: &str) -> Result<&Grid> {
        self.entries
            .iter()
            .rev()
            .find(|snapshot| snapshot.name == name)
            .map(|snapshot| &snapshot.grid)
            .ok_or_else(|| MazeError::UnknownSnapshot {
                name: name.to_string(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
