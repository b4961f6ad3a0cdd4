#![allow(dead_code)]

use std::collections::{HashMap, HashSet, VecDeque};

use mazesearch::{Coord, Grid, START};

/// Shortest distance in moves from the start to every reachable cell,
/// computed independently of the crate's solvers.
pub fn distances(grid: &Grid) -> HashMap<Coord, usize> {
    let mut dist = HashMap::from([(START, 0)]);
    let mut queue = VecDeque::from([START]);
    while let Some(current) = queue.pop_front() {
        let d = dist[&current];
        let (row, col) = (current.row as isize, current.col as isize);
        for (r, c) in [(row - 1, col), (row + 1, col), (row, col - 1), (row, col + 1)] {
            if r < 0 || c < 0 {
                continue;
            }
            let next = Coord::new(r as usize, c as usize);
            match grid.get(next) {
                Some(cell) if cell.is_passable() && !dist.contains_key(&next) => {
                    dist.insert(next, d + 1);
                    queue.push_back(next);
                }
                _ => {}
            }
        }
    }
    dist
}

/// Cells reachable from the start.
pub fn reachable(grid: &Grid) -> HashSet<Coord> {
    distances(grid).into_keys().collect()
}

pub fn coords(pairs: &[(usize, usize)]) -> Vec<Coord> {
    pairs.iter().map(|&p| Coord::from(p)).collect()
}
