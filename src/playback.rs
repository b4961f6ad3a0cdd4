//! Step-by-step replay of a finished search.
//!
//! The search itself runs to completion up front; a [`Playback`] only walks a
//! cursor over its already computed frames, so an animator can pause, step
//! back and forth, or be dropped at any time without touching the result.

use serde::{Deserialize, Serialize};
use std::{collections::HashSet, time::Duration};

use crate::{maze::Coord, solvers::SearchResult};

pub const MIN_DELAY_MS: u64 = 10;
pub const MAX_DELAY_MS: u64 = 200;
pub const DEFAULT_DELAY_MS: u64 = 40;

/// Clamps a per-step delay to [`MIN_DELAY_MS`]..=[`MAX_DELAY_MS`].
pub fn clamp_delay(delay_ms: u64) -> u64 {
    delay_ms.clamp(MIN_DELAY_MS, MAX_DELAY_MS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frame {
    /// A cell expanded by the search
    Visit(Coord),
    /// A cell on the solution path
    Path(Coord),
}

/// Cells revealed so far, split by kind.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Overlay {
    pub visited: HashSet<Coord>,
    pub path: HashSet<Coord>,
}

pub struct Playback {
    /// All visits in order, followed by the solution path in order
    frames: Vec<Frame>,
    /// Number of frames revealed. Always between 0 and frames.len()
    position: usize,
    /// Time to wait between two frames
    delay: Duration,
}

impl Playback {
    pub fn new(result: &SearchResult, delay_ms: u64) -> Self {
        let frames = result
            .visited
            .iter()
            .copied()
            .map(Frame::Visit)
            .chain(result.solution.iter().copied().map(Frame::Path))
            .collect();
        Playback {
            frames,
            position: 0,
            delay: Duration::from_millis(clamp_delay(delay_ms)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn set_delay(&mut self, delay_ms: u64) {
        self.delay = Duration::from_millis(clamp_delay(delay_ms));
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_finished(&self) -> bool {
        self.position == self.frames.len()
    }

    /// Reveals the next frame.
    pub fn step_forward(&mut self) -> Option<Frame> {
        let frame = *self.frames.get(self.position)?;
        self.position += 1;
        Some(frame)
    }

    /// Hides the most recently revealed frame and returns it.
    pub fn step_backward(&mut self) -> Option<Frame> {
        self.position = self.position.checked_sub(1)?;
        self.frames.get(self.position).copied()
    }

    /// Jumps so that exactly `position` frames are revealed (clamped to the end).
    pub fn seek(&mut self, position: usize) {
        self.position = position.min(self.frames.len());
    }

    pub fn finish(&mut self) {
        self.position = self.frames.len();
    }

    /// Cells revealed up to the current position.
    pub fn overlay(&self) -> Overlay {
        let mut overlay = Overlay::default();
        for frame in &self.frames[..self.position] {
            match *frame {
                Frame::Visit(coord) => overlay.visited.insert(coord),
                Frame::Path(coord) => overlay.path.insert(coord),
            };
        }
        overlay
    }
}

impl Iterator for Playback {
    type Item = Frame;

    fn next(&mut self) -> Option<Self::Item> {
        self.step_forward()
    }
}
