//! **gridstar-core**: occupancy grid and geometry types.
//!
//! This crate provides the inputs of the gridstar search engine: integer
//! [`Point`]s, half-open [`Range`]s and the boolean occupancy [`Grid`] that a
//! search reads from. Nothing here knows about search state; see
//! `gridstar-paths` for that.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::{Point, Range, RangeIter};
pub use grid::Grid;
