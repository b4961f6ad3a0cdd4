mod common;

use proptest::prelude::*;
use std::collections::HashSet;

use common::distances;
use mazesearch::{
    AStarMode, Coord, EditMode, Grid, START, Solver, generate,
    generators::{MIN_SIZE, default_target},
    solve,
};

fn odd_size() -> impl Strategy<Value = usize> {
    (MIN_SIZE / 2..=20usize).prop_map(|half| half * 2 + 1)
}

fn edit_mode() -> impl Strategy<Value = EditMode> {
    prop_oneof![
        4 => Just(EditMode::ToggleWall),
        1 => Just(EditMode::SetTarget),
    ]
}

/// A generated maze with a handful of random edits applied, which opens
/// loops, adds dead ends and sometimes cuts the target off.
fn edited_maze() -> impl Strategy<Value = Grid> {
    odd_size().prop_flat_map(|size| {
        prop::collection::vec((1..size - 1, 1..size - 1, edit_mode()), 0..24).prop_map(
            move |edits| {
                let mut grid = generate(size).unwrap();
                for (row, col, mode) in edits {
                    grid.edit(Coord::new(row, col), mode).unwrap();
                }
                grid
            },
        )
    })
}

const SOLVERS: [Solver; 4] = [
    Solver::Bfs,
    Solver::Dfs,
    Solver::AStar(AStarMode::SkipDuplicates),
    Solver::AStar(AStarMode::UpdateInPlace),
];

proptest! {
    #[test]
    fn generate_is_deterministic(size in odd_size()) {
        prop_assert_eq!(generate(size).unwrap(), generate(size).unwrap());
    }

    #[test]
    fn generated_target_is_reachable(size in odd_size()) {
        let grid = generate(size).unwrap();
        prop_assert!(distances(&grid).contains_key(&default_target(size)));
    }

    #[test]
    fn edits_keep_a_single_target(grid in edited_maze()) {
        prop_assert_eq!(grid.target_count(), 1);
        prop_assert!(grid[START].is_passable());
    }

    #[test]
    fn bfs_finds_shortest_path(grid in edited_maze()) {
        let result = solve(&grid, Solver::Bfs).unwrap();
        let target = grid.find_target().unwrap();
        let expected = distances(&grid).get(&target).copied();
        prop_assert_eq!(result.path_len(), expected);
    }

    #[test]
    fn astar_matches_bfs_length(grid in edited_maze()) {
        let bfs = solve(&grid, Solver::Bfs).unwrap();
        for mode in [AStarMode::SkipDuplicates, AStarMode::UpdateInPlace] {
            let astar = solve(&grid, Solver::AStar(mode)).unwrap();
            prop_assert_eq!(astar.path_len(), bfs.path_len());
        }
    }

    #[test]
    fn solutions_are_connected_paths(grid in edited_maze()) {
        let target = grid.find_target().unwrap();
        for solver in SOLVERS {
            let result = solve(&grid, solver).unwrap();
            if result.solution.is_empty() {
                continue;
            }
            prop_assert_eq!(result.solution.first(), Some(&START));
            prop_assert_eq!(result.solution.last(), Some(&target));
            for pair in result.solution.windows(2) {
                prop_assert_eq!(pair[0].manhattan(pair[1]), 1);
            }
            let visited = result.visited.iter().collect::<HashSet<_>>();
            prop_assert!(result.solution.iter().all(|c| visited.contains(c)));
        }
    }

    #[test]
    fn unreachable_target_explores_component(grid in edited_maze()) {
        let reachable = distances(&grid);
        let target = grid.find_target().unwrap();
        if reachable.contains_key(&target) {
            return Ok(());
        }
        for solver in [Solver::Bfs, Solver::Dfs] {
            let result = solve(&grid, solver).unwrap();
            prop_assert!(result.solution.is_empty());
            let visited = result.visited.iter().copied().collect::<HashSet<_>>();
            prop_assert_eq!(visited.len(), result.visited.len());
            prop_assert_eq!(visited, reachable.keys().copied().collect::<HashSet<_>>());
        }
    }
}
