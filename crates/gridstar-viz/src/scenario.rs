//! Search inputs: grid dimensions, endpoints and obstacles.
//!
//! A [`Scenario`] comes either from a JSON file or from a [`ScenarioDraft`]
//! whose missing values are asked for on the terminal. Building the grid
//! places explicit obstacles first, then random ones.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use gridstar_core::{Grid, GridError, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::VizError;
use crate::prompt::Prompter;

/// Everything needed to set up one search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub width: i32,
    pub height: i32,
    pub start: Point,
    pub goal: Point,
    /// Cells blocked before any random obstacles are drawn.
    #[serde(default)]
    pub blocked: Vec<Point>,
    /// Number of random obstacle draws.
    #[serde(default)]
    pub random_obstacles: usize,
    /// Seed for the obstacle draws; random if absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Scenario {
    /// A square grid of side `size` with no obstacles.
    pub fn square(size: i32, start: Point, goal: Point) -> Self {
        Self {
            width: size,
            height: size,
            start,
            goal,
            blocked: Vec::new(),
            random_obstacles: 0,
            seed: None,
        }
    }

    /// Read a scenario from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, VizError> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Parse a scenario from a JSON string.
    pub fn from_json(s: &str) -> Result<Self, VizError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Build the occupancy grid: explicit obstacles, then random draws.
    ///
    /// Fails if the dimensions are not positive or an explicit obstacle lies
    /// outside the grid. Endpoints are not validated here.
    pub fn build_grid(&self) -> Result<Grid, VizError> {
        let mut grid = Grid::from_blocked(self.width, self.height, self.blocked.iter().copied())?;
        if self.random_obstacles > 0 {
            let mut rng = match self.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_rng(&mut rand::rng()),
            };
            let placed = place_random_obstacles(
                &mut grid,
                self.start,
                self.goal,
                self.random_obstacles,
                &mut rng,
            );
            log::debug!(
                "scenario: {placed} of {} random obstacles landed on free cells",
                self.random_obstacles
            );
        }
        Ok(grid)
    }
}

/// Draw `count` uniformly random cells and block them, skipping any draw
/// that hits `start` or `goal`. Repeated draws of one cell block it once.
///
/// Returns how many cells went from free to blocked.
pub fn place_random_obstacles(
    grid: &mut Grid,
    start: Point,
    goal: Point,
    count: usize,
    rng: &mut impl Rng,
) -> usize {
    let mut placed = 0;
    for _ in 0..count {
        let p = Point::new(
            rng.random_range(0..grid.width()),
            rng.random_range(0..grid.height()),
        );
        if p == start || p == goal {
            continue;
        }
        if grid.is_free(p) && grid.set_blocked(p, true).is_ok() {
            placed += 1;
        }
    }
    placed
}

/// Unblock `start` and `goal` if they are blocked in-bounds cells.
///
/// This is the setup side of the endpoint contract: the search itself
/// rejects blocked endpoints instead of fixing them. Out-of-bounds endpoints
/// are left for the search to report. Returns whether anything changed.
pub fn clear_endpoints(grid: &mut Grid, start: Point, goal: Point) -> Result<bool, GridError> {
    let mut cleared = false;
    for p in [start, goal] {
        if grid.in_bounds(p) && grid.blocked(p)? {
            grid.set_blocked(p, false)?;
            log::warn!("scenario: endpoint {p} was blocked, clearing it");
            cleared = true;
        }
    }
    Ok(cleared)
}

/// A partially specified square scenario, typically from the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScenarioDraft {
    pub size: Option<i32>,
    pub start: Option<Point>,
    pub goal: Option<Point>,
    pub obstacles: Option<usize>,
    pub seed: Option<u64>,
}

impl ScenarioDraft {
    /// Ask for every missing value, in the order size, start, goal,
    /// obstacle count.
    pub fn complete<R: BufRead, W: Write>(
        self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Scenario, VizError> {
        let size = match self.size {
            Some(s) => s,
            None => {
                prompter.ask("Enter Grid Size (e.g., 50 for a 50x50 grid):")?;
                prompter.read("grid size")?
            }
        };
        let start = match self.start {
            Some(p) => p,
            None => {
                prompter.ask("Enter Start Node (x, y):")?;
                prompter.read_point("start node")?
            }
        };
        let goal = match self.goal {
            Some(p) => p,
            None => {
                prompter.ask("Enter Goal Node (x, y):")?;
                prompter.read_point("goal node")?
            }
        };
        let obstacles = match self.obstacles {
            Some(n) => n,
            None => {
                prompter.ask("Enter the number of random obstacles:")?;
                prompter.read("obstacle count")?
            }
        };
        Ok(Scenario {
            random_obstacles: obstacles,
            seed: self.seed,
            ..Scenario::square(size, start, goal)
        })
    }
}
