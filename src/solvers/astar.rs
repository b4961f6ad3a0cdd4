use serde::{Deserialize, Serialize};
use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap},
};

use super::{ParentMap, SearchResult, reconstruct_path};
use crate::maze::{Cell, Coord, Grid};

/// What A* does when a cell already in the open set is reached more cheaply.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AStarMode {
    /// Record the cheaper cost and parent but leave the queued entry at its
    /// old priority.
    #[default]
    SkipDuplicates,
    /// Re-key the queued entry with the cheaper priority. The entry keeps its
    /// original insertion number for tie-breaking.
    UpdateInPlace,
}

/// Entry in the open set. Field order matters: entries are ordered by `f`,
/// then by insertion number, so equal-`f` entries leave in insertion order.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct OpenEntry {
    /// Estimated total cost through this cell (`g + h`)
    f: usize,
    /// Insertion number, lower wins ties
    seq: u64,
    coord: Coord,
    /// Cost from the start when this entry was queued
    g: usize,
}

/// A* with the Manhattan distance to the target as heuristic.
///
/// The target is located by a row-major scan before searching; without one
/// the search returns an empty result straight away.
pub fn solve_astar(grid: &Grid, start: Coord, mode: AStarMode) -> SearchResult {
    let Some(target) = grid.find_target() else {
        tracing::debug!("[astar] grid has no target, nothing to search");
        return SearchResult::default();
    };
    let heuristic = |coord: Coord| coord.manhattan(target);

    // Using Reverse to turn the max-heap into a min-heap
    let mut heap = BinaryHeap::from([Reverse(OpenEntry {
        f: heuristic(start),
        seq: 0,
        coord: start,
        g: 0,
    })]);
    // Cells currently in the open set, with the insertion number of their entry
    let mut open = HashMap::from([(start, 0u64)]);
    let mut next_seq = 1u64;
    let mut g_score = HashMap::from([(start, 0usize)]);
    let mut parents = ParentMap::from([(start, None)]);
    let mut visited = Vec::new();

    while let Some(Reverse(entry)) = heap.pop() {
        let current = entry.coord;
        if mode == AStarMode::UpdateInPlace {
            // Superseded by a cheaper entry for the same cell
            let is_live = open.get(&current) == Some(&entry.seq) && g_score[&current] == entry.g;
            if !is_live {
                continue;
            }
        }
        open.remove(&current);

        visited.push(current);
        if grid[current] == Cell::Target {
            tracing::debug!("[astar] target found at {} after {} visits", current, visited.len());
            return SearchResult {
                solution: reconstruct_path(current, &parents),
                visited,
            };
        }

        let tentative_g = g_score[&current] + 1;
        for neighbor in grid.passable_neighbors(current) {
            let is_cheaper = g_score
                .get(&neighbor)
                .is_none_or(|&existing| tentative_g < existing);
            if !is_cheaper {
                continue;
            }
            parents.insert(neighbor, Some(current));
            g_score.insert(neighbor, tentative_g);
            let f = tentative_g + heuristic(neighbor);

            let seq = match (open.get(&neighbor).copied(), mode) {
                (None, _) => {
                    let seq = next_seq;
                    next_seq += 1;
                    open.insert(neighbor, seq);
                    seq
                }
                (Some(_), AStarMode::SkipDuplicates) => continue,
                (Some(seq), AStarMode::UpdateInPlace) => seq,
            };
            heap.push(Reverse(OpenEntry {
                f,
                seq,
                coord: neighbor,
                g: tentative_g,
            }));
        }
    }

    tracing::debug!("[astar] open set exhausted after {} visits", visited.len());
    SearchResult {
        visited,
        solution: Vec::new(),
    }
}
