use std::fmt;

use gridstar_core::Point;

/// Which end of a search an [`SearchError::InvalidEndpoint`] refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

/// Why an endpoint was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EndpointFault {
    OutOfBounds,
    Blocked,
}

/// Errors reported by a search.
///
/// A search that finds no path is not an error; it ends with
/// [`Outcome::Exhausted`](crate::Outcome::Exhausted) and an empty path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Start or goal is outside the grid or on a blocked cell. Nothing was
    /// searched.
    InvalidEndpoint {
        endpoint: Endpoint,
        point: Point,
        fault: EndpointFault,
    },
    /// Predecessor links loop back on themselves. Indicates a bug in the
    /// relaxation step.
    PredecessorCycle { at: Point },
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

impl fmt::Display for EndpointFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => f.write_str("out of bounds"),
            Self::Blocked => f.write_str("blocked"),
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEndpoint {
                endpoint,
                point,
                fault,
            } => write!(f, "invalid {endpoint} {point}: {fault}"),
            Self::PredecessorCycle { at } => {
                write!(f, "predecessor cycle detected at {at}")
            }
        }
    }
}

impl std::error::Error for SearchError {}
