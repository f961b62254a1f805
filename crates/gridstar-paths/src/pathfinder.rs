use std::collections::BTreeSet;

use gridstar_core::{Grid, Point};

use crate::config::SearchConfig;
use crate::distance::manhattan;
use crate::error::{Endpoint, EndpointFault, SearchError};
use crate::frontier::Frontier;
use crate::path::reconstruct;
use crate::state::SearchState;
use crate::traits::Pather;

/// How a finished search ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The goal was popped from the frontier; the path is non-empty.
    Found,
    /// The frontier ran dry first; no path exists.
    Exhausted,
}

/// Control-flow phase of a single [`Search`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchPhase {
    Ready,
    Running,
    Found,
    Exhausted,
}

impl SearchPhase {
    /// Whether the search has stopped.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Found | Self::Exhausted)
    }
}

/// What one call to [`Search::step`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Popped a stale duplicate entry for this cell and dropped it.
    Discarded(Point),
    /// Closed this cell and relaxed its neighbors.
    Expanded(Point),
    /// The goal was popped. Returned again on every later call.
    Found,
    /// The frontier is empty. Returned again on every later call.
    Exhausted,
}

/// Counters collected during one search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Entries popped from the frontier, stale ones included.
    pub pops: usize,
    /// Stale entries dropped without expansion.
    pub stale: usize,
    /// Cells closed and expanded.
    pub expansions: usize,
    /// Entries pushed onto the frontier.
    pub pushes: usize,
    /// Largest frontier size seen.
    pub frontier_peak: usize,
}

/// The result of a completed search.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub outcome: Outcome,
    /// Start to goal inclusive, or empty when exhausted.
    pub path: Vec<Point>,
    /// Every cell popped from the frontier (stale pops excluded).
    pub explored: BTreeSet<Point>,
    /// Closed cells in expansion order.
    pub expanded: Vec<Point>,
    pub stats: SearchStats,
}

impl SearchResult {
    /// Whether a path was found.
    #[inline]
    pub fn found(&self) -> bool {
        self.outcome == Outcome::Found
    }

    /// Number of moves along the path, or `None` if no path exists.
    #[inline]
    pub fn cost(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// One A* run from `start` to `goal` over a borrowed grid.
///
/// The grid is read only. All per-run state (node table, frontier, explored
/// set) is owned here and dropped with the search, so nothing leaks between
/// runs on the same grid.
pub struct Search<'g> {
    grid: &'g Grid,
    start: Point,
    goal: Point,
    goal_idx: usize,
    state: SearchState,
    frontier: Frontier,
    nbuf: Vec<Point>,
    explored: BTreeSet<Point>,
    expanded: Vec<Point>,
    path: Vec<Point>,
    stats: SearchStats,
    phase: SearchPhase,
}

impl<'g> Search<'g> {
    /// Validate the endpoints and queue the start cell.
    ///
    /// Fails with [`SearchError::InvalidEndpoint`] if either endpoint is out
    /// of bounds or blocked; the start is checked first.
    pub fn new(
        grid: &'g Grid,
        start: Point,
        goal: Point,
        config: SearchConfig,
    ) -> Result<Self, SearchError> {
        let start_idx = check_endpoint(grid, Endpoint::Start, start)?;
        let goal_idx = check_endpoint(grid, Endpoint::Goal, goal)?;

        let mut state = SearchState::new(grid.len());
        let mut frontier = Frontier::new(config.tie_break);

        let h = manhattan(start, goal);
        let node = state.node_mut(start_idx);
        node.g = 0;
        node.h = h;
        frontier.push(start_idx, node.f(), h);

        log::debug!(
            "astar: searching {start} -> {goal} on {}x{} grid",
            grid.width(),
            grid.height()
        );

        Ok(Self {
            grid,
            start,
            goal,
            goal_idx,
            state,
            frontier,
            nbuf: Vec::with_capacity(4),
            explored: BTreeSet::new(),
            expanded: Vec::new(),
            path: Vec::new(),
            stats: SearchStats {
                pushes: 1,
                ..SearchStats::default()
            },
            phase: SearchPhase::Ready,
        })
    }

    /// Start cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Goal cell.
    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Current phase.
    #[inline]
    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// Cells popped so far.
    #[inline]
    pub fn explored(&self) -> &BTreeSet<Point> {
        &self.explored
    }

    /// Best known cost from the start to `p`, if `p` has been discovered.
    pub fn cost_to(&self, p: Point) -> Option<u32> {
        let node = self.state.node(self.grid.index(p)?);
        node.discovered().then_some(node.g)
    }

    /// Pop one frontier entry and act on it.
    pub fn step(&mut self) -> Result<Step, SearchError> {
        match self.phase {
            SearchPhase::Found => return Ok(Step::Found),
            SearchPhase::Exhausted => return Ok(Step::Exhausted),
            SearchPhase::Ready => self.phase = SearchPhase::Running,
            SearchPhase::Running => {}
        }

        let Some(entry) = self.frontier.pop() else {
            self.finish(SearchPhase::Exhausted);
            return Ok(Step::Exhausted);
        };
        self.stats.pops += 1;

        let ci = entry.idx;
        let cp = self.grid.point(ci);
        let current = *self.state.node(ci);

        // Lazy deletion: a later, cheaper entry for this cell superseded
        // this one, or the cell is already final.
        if current.closed || current.f() != entry.f {
            self.stats.stale += 1;
            log::trace!("astar: drop stale {cp} f={}", entry.f);
            return Ok(Step::Discarded(cp));
        }

        self.explored.insert(cp);

        if ci == self.goal_idx {
            self.path = reconstruct(self.grid, &self.state, ci)?;
            self.finish(SearchPhase::Found);
            return Ok(Step::Found);
        }

        self.state.node_mut(ci).closed = true;
        self.expanded.push(cp);
        self.stats.expansions += 1;
        log::trace!(
            "astar: expand {cp} g={} h={} open={}",
            current.g,
            current.h,
            self.frontier.len()
        );

        let tentative_g = current.g + 1;
        self.nbuf.clear();
        self.grid.neighbors(cp, &mut self.nbuf);
        for &np in &self.nbuf {
            let Some(ni) = self.grid.index(np) else {
                continue;
            };
            let n = self.state.node_mut(ni);
            if n.closed || tentative_g >= n.g {
                continue;
            }
            if !n.discovered() {
                n.h = manhattan(np, self.goal);
            }
            n.g = tentative_g;
            n.parent = Some(ci);
            self.frontier.push(ni, n.f(), n.h);
            self.stats.pushes += 1;
        }

        Ok(Step::Expanded(cp))
    }

    /// Step until the search stops and return its result.
    pub fn run(mut self) -> Result<SearchResult, SearchError> {
        while !self.phase.is_terminal() {
            self.step()?;
        }
        Ok(self.into_result())
    }

    /// Consume the search and return what it has gathered so far.
    ///
    /// A search that has not reached [`SearchPhase::Found`] reports
    /// [`Outcome::Exhausted`] with an empty path.
    pub fn into_result(self) -> SearchResult {
        let outcome = match self.phase {
            SearchPhase::Found => Outcome::Found,
            _ => Outcome::Exhausted,
        };
        SearchResult {
            outcome,
            path: self.path,
            explored: self.explored,
            expanded: self.expanded,
            stats: SearchStats {
                frontier_peak: self.frontier.peak(),
                ..self.stats
            },
        }
    }

    fn finish(&mut self, phase: SearchPhase) {
        self.phase = phase;
        log::debug!(
            "astar: {:?} {} -> {} after {} expansions ({} pops, {} stale, path {} cells)",
            phase,
            self.start,
            self.goal,
            self.stats.expansions,
            self.stats.pops,
            self.stats.stale,
            self.path.len()
        );
    }
}

fn check_endpoint(grid: &Grid, endpoint: Endpoint, p: Point) -> Result<usize, SearchError> {
    let fault = match grid.index(p) {
        None => EndpointFault::OutOfBounds,
        Some(i) if grid.is_free(p) => return Ok(i),
        Some(_) => EndpointFault::Blocked,
    };
    Err(SearchError::InvalidEndpoint {
        endpoint,
        point: p,
        fault,
    })
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Shortest-path finder over a borrowed occupancy grid.
///
/// Cheap to create; each [`search`](Self::search) call is an independent
/// run with fresh state.
#[derive(Copy, Clone, Debug)]
pub struct PathFinder<'g> {
    grid: &'g Grid,
    config: SearchConfig,
}

impl<'g> PathFinder<'g> {
    /// Create a finder with the default configuration.
    pub fn new(grid: &'g Grid) -> Self {
        Self::with_config(grid, SearchConfig::default())
    }

    /// Create a finder with an explicit configuration.
    pub fn with_config(grid: &'g Grid, config: SearchConfig) -> Self {
        Self { grid, config }
    }

    /// The grid being searched.
    #[inline]
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    /// Begin a search without running it, for callers that want to step.
    pub fn begin(&self, start: Point, goal: Point) -> Result<Search<'g>, SearchError> {
        Search::new(self.grid, start, goal, self.config)
    }

    /// Compute the shortest path from `start` to `goal`.
    ///
    /// Returns an empty path with [`Outcome::Exhausted`] when the goal is
    /// unreachable, and `[start]` when `start == goal`.
    pub fn search(&self, start: Point, goal: Point) -> Result<SearchResult, SearchError> {
        self.begin(start, goal)?.run()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn result_round_trip() {
        let grid = Grid::new(3, 2).unwrap();
        let res = PathFinder::new(&grid)
            .search(Point::new(0, 0), Point::new(2, 1))
            .unwrap();
        let json = serde_json::to_string(&res).unwrap();
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, res);
    }
}
