//! A* shortest-path search on 4-connected occupancy grids.
//!
//! The engine takes a borrowed [`Grid`](gridstar_core::Grid), a start and a
//! goal, and returns the optimal path together with every cell the search
//! explored:
//!
//! ```
//! use gridstar_core::{Grid, Point};
//! use gridstar_paths::PathFinder;
//!
//! let grid = Grid::new(5, 5).unwrap();
//! let result = PathFinder::new(&grid)
//!     .search(Point::new(0, 0), Point::new(4, 4))
//!     .unwrap();
//! assert_eq!(result.cost(), Some(8));
//! ```
//!
//! | Piece | Role |
//! |---|---|
//! | [`manhattan`] | admissible, consistent heuristic |
//! | [`Pather`] | neighbor enumeration; `Grid` yields east/south/west/north free cells |
//! | `SearchState` | per-cell g, h and predecessor in a flat index-keyed table |
//! | `Frontier` | binary heap with lazy deletion of stale entries |
//! | [`Search`] | one run of the loop, steppable for animation |
//! | [`PathFinder`] | runs a [`Search`] to completion |
//!
//! Moves are unit cost and axis aligned only.

mod config;
mod distance;
mod error;
mod frontier;
mod neighbors;
mod path;
mod pathfinder;
mod state;
mod traits;

pub use config::{SearchConfig, TieBreak};
pub use distance::manhattan;
pub use error::{Endpoint, EndpointFault, SearchError};
pub use pathfinder::{Outcome, PathFinder, Search, SearchPhase, SearchResult, SearchStats, Step};
pub use state::UNDISCOVERED;
pub use traits::Pather;
