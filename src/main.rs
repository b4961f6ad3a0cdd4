use std::{io::Write, path::PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::Level;

use mazesearch::{
    AStarMode, Coord, EditMode, Grid, Seed, SearchResult, Solver,
    generators::DEFAULT_SIZE,
    playback::{DEFAULT_DELAY_MS, Playback},
    render, session::Session,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Algorithm {
    Bfs,
    Dfs,
    Astar,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum QueueMode {
    /// Leave queued cells at their first priority
    Skip,
    /// Re-key queued cells when a cheaper route is found
    Update,
}

/// Generate a maze, search it, and show what the search explored.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Side length of the maze (odd, 5 to 255)
    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Search algorithm
    #[arg(short, long, value_enum, default_value_t = Algorithm::Bfs)]
    algorithm: Algorithm,

    /// How A* treats cells already in its open set
    #[arg(long, value_enum, default_value_t = QueueMode::Skip)]
    astar_mode: QueueMode,

    /// Seed the generator with this value instead of the size
    #[arg(long, conflicts_with = "random")]
    seed: Option<u64>,

    /// Seed the generator from system entropy
    #[arg(long)]
    random: bool,

    /// Toggle a wall at ROW,COL before searching (repeatable)
    #[arg(long = "wall", value_name = "ROW,COL", value_parser = parse_coord)]
    walls: Vec<Coord>,

    /// Move the target to ROW,COL before searching
    #[arg(long, value_name = "ROW,COL", value_parser = parse_coord)]
    target: Option<Coord>,

    /// Only reveal the first N playback frames
    #[arg(long)]
    frames: Option<usize>,

    /// Per-step delay reported for playback, in milliseconds (10 to 200)
    #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
    delay: u64,

    /// Print the grid and search result as JSON instead of drawing them
    #[arg(long)]
    json: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct Report<'a> {
    name: &'a str,
    solver: String,
    grid: &'a Grid,
    #[serde(flatten)]
    result: &'a SearchResult,
}

fn parse_coord(s: &str) -> Result<Coord, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {:?}", s))?;
    let row = row.trim().parse::<usize>().map_err(|e| e.to_string())?;
    let col = col.trim().parse::<usize>().map_err(|e| e.to_string())?;
    Ok(Coord::new(row, col))
}

/// Set up the tracing subscriber. The returned guard must stay alive for
/// buffered file logs to be flushed.
fn init_logging(
    verbose: u8,
    log_file: Option<&PathBuf>,
) -> anyhow::Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let builder = tracing_subscriber::fmt().with_max_level(level);

    match log_file {
        Some(path) => {
            let directory = path.parent().filter(|p| !p.as_os_str().is_empty());
            let file_name = path
                .file_name()
                .with_context(|| format!("log file path {:?} has no file name", path))?;
            let appender = tracing_appender::rolling::never(
                directory.unwrap_or_else(|| std::path::Path::new(".")),
                file_name,
            );
            let (writer, guard) = tracing_appender::non_blocking(appender);
            builder.with_writer(writer).with_ansi(false).init();
            Ok(Some(guard))
        }
        None => {
            builder.with_writer(std::io::stderr).init();
            Ok(None)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _guard = init_logging(args.verbose, args.log_file.as_ref())?;

    let seed = match (args.seed, args.random) {
        (Some(seed), _) => Seed::Fixed(seed),
        (None, true) => Seed::Entropy,
        (None, false) => Seed::Size,
    };
    let solver = match args.algorithm {
        Algorithm::Bfs => Solver::Bfs,
        Algorithm::Dfs => Solver::Dfs,
        Algorithm::Astar => Solver::AStar(match args.astar_mode {
            QueueMode::Skip => AStarMode::SkipDuplicates,
            QueueMode::Update => AStarMode::UpdateInPlace,
        }),
    };

    let mut session = Session::with_seed(args.size, seed)
        .with_context(|| format!("could not generate a maze of size {}", args.size))?;
    session.set_solver(solver);
    session.set_delay_ms(args.delay);

    for coord in &args.walls {
        session
            .edit(*coord, EditMode::ToggleWall)
            .with_context(|| format!("could not toggle wall at {}", coord))?;
    }
    if let Some(coord) = args.target {
        session
            .edit(coord, EditMode::SetTarget)
            .with_context(|| format!("could not move target to {}", coord))?;
    }

    let result = session.solve()?.clone();
    let mut stdout = std::io::stdout();

    if args.json {
        let report = Report {
            name: session.name(),
            solver: solver.to_string(),
            grid: session.grid(),
            result: &result,
        };
        serde_json::to_writer_pretty(&mut stdout, &report)?;
        writeln!(stdout)?;
        return Ok(());
    }

    let mut playback = Playback::new(&result, session.delay_ms());
    match args.frames {
        Some(frames) => playback.seek(frames),
        None => playback.finish(),
    }
    render::draw(&mut stdout, session.grid(), &playback.overlay())?;

    writeln!(
        stdout,
        "{} ({}x{}): {}",
        solver,
        session.size(),
        session.size(),
        match result.path_len() {
            Some(moves) => format!("target reached in {} moves", moves),
            None => "no path to the target".to_string(),
        }
    )?;
    writeln!(
        stdout,
        "visited {} cells, showing frame {}/{} at {} ms per step",
        result.visited.len(),
        playback.position(),
        playback.len(),
        playback.delay().as_millis()
    )?;
    Ok(())
}
