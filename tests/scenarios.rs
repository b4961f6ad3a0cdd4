mod common;

use std::collections::HashSet;

use common::{coords, reachable};
use mazesearch::{
    AStarMode, Cell, Coord, EditMode, Grid, START, SearchResult, Solver, edit_cell, generate,
    solve,
};

const MAZE_11: &str = "
    ###########
    #.#.......#
    #.###.###.#
    #.#...#...#
    #.#.#####.#
    #.#.....#.#
    #.#####.#.#
    #.......#.#
    #########.#
    #........E#
    ###########";

const SOLVERS: [Solver; 4] = [
    Solver::Bfs,
    Solver::Dfs,
    Solver::AStar(AStarMode::SkipDuplicates),
    Solver::AStar(AStarMode::UpdateInPlace),
];

fn shortest_path_11() -> Vec<Coord> {
    coords(&[
        (1, 1),
        (2, 1),
        (3, 1),
        (4, 1),
        (5, 1),
        (6, 1),
        (7, 1),
        (7, 2),
        (7, 3),
        (7, 4),
        (7, 5),
        (7, 6),
        (7, 7),
        (6, 7),
        (5, 7),
        (5, 6),
        (5, 5),
        (5, 4),
        (5, 3),
        (4, 3),
        (3, 3),
        (3, 4),
        (3, 5),
        (2, 5),
        (1, 5),
        (1, 6),
        (1, 7),
        (1, 8),
        (1, 9),
        (2, 9),
        (3, 9),
        (4, 9),
        (5, 9),
        (6, 9),
        (7, 9),
        (8, 9),
        (9, 9),
    ])
}

#[test]
fn test_generate_11_is_fixed() {
    let expected: Grid = MAZE_11.parse().unwrap();
    assert_eq!(generate(11).unwrap(), expected);
}

#[test]
fn test_bfs_on_generated_11() {
    let grid = generate(11).unwrap();
    let result = solve(&grid, Solver::Bfs).unwrap();

    let mut visited = shortest_path_11()[..26].to_vec();
    visited.extend(coords(&[
        (1, 4),
        (1, 7),
        (1, 3),
        (1, 8),
        (1, 9),
        (2, 9),
        (3, 9),
        (4, 9),
        (3, 8),
        (5, 9),
        (3, 7),
        (6, 9),
        (7, 9),
        (8, 9),
        (9, 9),
    ]));
    assert_eq!(result.visited, visited);
    assert_eq!(result.visited[0], START);
    assert_eq!(result.solution, shortest_path_11());
    assert_eq!(result.solution.last(), Some(&Coord::new(9, 9)));
}

#[test]
fn test_dfs_on_generated_11() {
    let grid = generate(11).unwrap();
    let result = solve(&grid, Solver::Dfs).unwrap();

    let mut visited = shortest_path_11()[..25].to_vec();
    visited.extend(coords(&[
        (1, 4),
        (1, 3),
        (1, 6),
        (1, 7),
        (1, 8),
        (1, 9),
        (2, 9),
        (3, 9),
        (3, 8),
        (3, 7),
        (4, 9),
        (5, 9),
        (6, 9),
        (7, 9),
        (8, 9),
        (9, 9),
    ]));
    assert_eq!(result.visited, visited);
    // The maze is a tree, so the only path is also the shortest one
    assert_eq!(result.solution, shortest_path_11());
}

#[test]
fn test_astar_on_generated_11() {
    let grid = generate(11).unwrap();
    for mode in [AStarMode::SkipDuplicates, AStarMode::UpdateInPlace] {
        let result = solve(&grid, Solver::AStar(mode)).unwrap();
        // Every expansion lies on the path, so A* explores nothing else
        assert_eq!(result.visited, shortest_path_11());
        assert_eq!(result.solution, shortest_path_11());
    }
}

#[test]
fn test_enclosed_target_is_not_found() {
    let grid = generate(11).unwrap();
    let grid = edit_cell(&grid, Coord::new(8, 9), EditMode::ToggleWall).unwrap();
    let grid = edit_cell(&grid, Coord::new(9, 8), EditMode::ToggleWall).unwrap();
    assert_eq!(grid[Coord::new(9, 9)], Cell::Target);

    let component = reachable(&grid);
    assert!(!component.contains(&Coord::new(9, 9)));

    for solver in SOLVERS {
        let result = solve(&grid, solver).unwrap();
        assert!(result.solution.is_empty(), "{} found a walled-off target", solver);
        let visited = result.visited.iter().copied().collect::<HashSet<_>>();
        assert_eq!(visited.len(), result.visited.len(), "{} repeated a cell", solver);
        assert_eq!(visited, component, "{} explored the wrong cells", solver);
    }
}

#[test]
fn test_target_less_grid() {
    let grid: Grid = "#####\n#...#\n#.#.#\n#...#\n#####".parse().unwrap();
    assert_eq!(grid.target_count(), 0);

    for solver in [Solver::Bfs, Solver::Dfs] {
        let result = solve(&grid, solver).unwrap();
        assert!(!result.found());
        assert_eq!(
            result.visited.iter().copied().collect::<HashSet<_>>(),
            reachable(&grid)
        );
    }
    for mode in [AStarMode::SkipDuplicates, AStarMode::UpdateInPlace] {
        assert_eq!(
            solve(&grid, Solver::AStar(mode)).unwrap(),
            SearchResult::default()
        );
    }
}

#[test]
fn test_toggling_start_is_noop() {
    let grid = generate(11).unwrap();
    assert_eq!(edit_cell(&grid, START, EditMode::ToggleWall).unwrap(), grid);
    assert_eq!(edit_cell(&grid, START, EditMode::SetTarget).unwrap(), grid);
}

#[test]
fn test_moved_target_is_found() {
    let grid = generate(11).unwrap();
    let grid = edit_cell(&grid, Coord::new(3, 3), EditMode::SetTarget).unwrap();
    assert_eq!(grid.target_count(), 1);
    for solver in SOLVERS {
        let result = solve(&grid, solver).unwrap();
        assert_eq!(result.solution.first(), Some(&START));
        assert_eq!(result.solution.last(), Some(&Coord::new(3, 3)));
        assert_eq!(result.visited.last(), Some(&Coord::new(3, 3)));
    }
}
