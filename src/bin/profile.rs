use std::time::Instant;

use mazesearch::{
    AStarMode, Solver,
    generators::{MAX_SIZE, generate},
    solve,
};

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10);

    let started = Instant::now();
    let grid = generate(MAX_SIZE)?;
    println!("generate({}) took {:?}", MAX_SIZE, started.elapsed());

    for solver in [
        Solver::Bfs,
        Solver::Dfs,
        Solver::AStar(AStarMode::SkipDuplicates),
        Solver::AStar(AStarMode::UpdateInPlace),
    ] {
        let started = Instant::now();
        let mut visited = 0;
        for _ in 0..num_iters {
            visited = solve(&grid, solver)?.visited.len();
        }
        println!(
            "{}: {} visits, {:?} per run over {} runs",
            solver,
            visited,
            started.elapsed() / num_iters.max(1) as u32,
            num_iters
        );
    }
    Ok(())
}
