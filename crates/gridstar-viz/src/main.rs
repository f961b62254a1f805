//! `gridstar`: find and draw an A* path on an occupancy grid.
//!
//! Run: cargo run --bin gridstar -- --size 20 --start 0,0 --goal 19,19 --obstacles 80
//!
//! Anything not given on the command line is asked for on stdin.

use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::Parser;
use crossterm::{cursor, queue};
use gridstar_core::{Grid, Point};
use gridstar_paths::{PathFinder, Search, Step};
use gridstar_viz::{
    Canvas, Prompter, Scenario, ScenarioDraft, VizConfig, VizError, clear_endpoints, init_logging,
    paint, parse_point, redraw_rows, summary,
};

#[derive(Parser, Debug)]
#[command(name = "gridstar", about = "A* pathfinding on a grid, drawn in the terminal")]
struct Args {
    /// JSON scenario file (dimensions, endpoints, obstacles).
    #[arg(long, conflicts_with_all = ["size", "start", "goal", "obstacles"])]
    scenario: Option<PathBuf>,

    /// JSON display/search config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Side length of a square grid.
    #[arg(long)]
    size: Option<i32>,

    /// Start cell as `x,y`.
    #[arg(long, value_parser = parse_point)]
    start: Option<Point>,

    /// Goal cell as `x,y`.
    #[arg(long, value_parser = parse_point)]
    goal: Option<Point>,

    /// Number of random obstacle draws.
    #[arg(long)]
    obstacles: Option<usize>,

    /// Seed for the obstacle draws.
    #[arg(long)]
    seed: Option<u64>,

    /// Print glyphs instead of coloured cells.
    #[arg(long)]
    plain: bool,

    /// Redraw the explored area after every expansion, pausing this many
    /// milliseconds between frames.
    #[arg(long, value_name = "MS")]
    animate: Option<u64>,
}

impl Args {
    fn draft(&self) -> ScenarioDraft {
        ScenarioDraft {
            size: self.size,
            start: self.start,
            goal: self.goal,
            obstacles: self.obstacles,
            seed: self.seed,
        }
    }
}

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Warning: logging disabled: {e}");
    }

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), VizError> {
    let mut config = match &args.config {
        Some(path) => VizConfig::load(path)?,
        None => VizConfig::default(),
    };
    config.plain |= args.plain;

    let scenario = match &args.scenario {
        Some(path) => Scenario::load(path)?,
        None => {
            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), io::stdout());
            args.draft().complete(&mut prompter)?
        }
    };
    let (start, goal) = (scenario.start, scenario.goal);

    let mut grid = scenario.build_grid()?;
    if clear_endpoints(&mut grid, start, goal)? {
        println!("Start or Goal node is blocked. Adjusting obstacles.");
    }

    let finder = PathFinder::with_config(&grid, config.search);
    let mut search = finder.begin(start, goal)?;
    let mut out = io::stdout().lock();

    if let Some(ms) = args.animate {
        let blank = Canvas::compose(&grid, search.explored(), &[], start, goal);
        match redraw_rows(&blank) {
            Some(rows) => animate(&mut search, &grid, &config, rows, ms, &mut out)?,
            None => log::warn!("gridstar: grid too tall to animate, drawing the result only"),
        }
    }

    let result = search.run()?;
    log::info!(
        "gridstar: {:?}, {} cells explored, {} expansions",
        result.outcome,
        result.explored.len(),
        result.stats.expansions
    );

    let canvas = Canvas::from_result(&grid, &result, start, goal);
    paint(&canvas, &config, &mut out)?;
    writeln!(out, "{}", summary(&result))?;
    Ok(())
}

/// Redraw the explored area in place after every expansion until the search
/// stops, leaving the cursor where the final picture should go.
fn animate<W: Write>(
    search: &mut Search<'_>,
    grid: &Grid,
    config: &VizConfig,
    rows: u16,
    ms: u64,
    out: &mut W,
) -> Result<(), VizError> {
    let (start, goal) = (search.start(), search.goal());
    let mut drawn = false;
    while !search.phase().is_terminal() {
        if !matches!(search.step()?, Step::Expanded(_)) {
            continue;
        }
        if drawn {
            queue!(out, cursor::MoveUp(rows))?;
        }
        let frame = Canvas::compose(grid, search.explored(), &[], start, goal);
        paint(&frame, config, out)?;
        drawn = true;
        thread::sleep(Duration::from_millis(ms));
    }
    if drawn {
        queue!(out, cursor::MoveUp(rows))?;
    }
    Ok(())
}
