use std::fmt;
use std::io;

use gridstar_core::GridError;
use gridstar_paths::SearchError;

/// Errors surfaced by the setup and visualization layer.
#[derive(Debug)]
pub enum VizError {
    Grid(GridError),
    Search(SearchError),
    Io(io::Error),
    Json(serde_json::Error),
    /// A token could not be parsed as the expected value.
    Input { what: &'static str, token: String },
    /// Input ended before a required value was read.
    MissingInput { what: &'static str },
}

impl fmt::Display for VizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "{e}"),
            Self::Search(e) => write!(f, "search: {e}"),
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Json(e) => write!(f, "json: {e}"),
            Self::Input { what, token } => write!(f, "invalid {what}: {token:?}"),
            Self::MissingInput { what } => write!(f, "input ended before {what} was given"),
        }
    }
}

impl std::error::Error for VizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Search(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Input { .. } | Self::MissingInput { .. } => None,
        }
    }
}

impl From<GridError> for VizError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<SearchError> for VizError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<io::Error> for VizError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for VizError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstar_core::Point;
    use gridstar_paths::{Endpoint, EndpointFault};

    #[test]
    fn wraps_search_errors() {
        let e: VizError = SearchError::InvalidEndpoint {
            endpoint: Endpoint::Start,
            point: Point::new(0, 0),
            fault: EndpointFault::Blocked,
        }
        .into();
        assert_eq!(e.to_string(), "search: invalid start (0, 0): blocked");
        assert!(std::error::Error::source(&e).is_some());
    }

    #[test]
    fn input_errors_quote_the_token() {
        let e = VizError::Input {
            what: "grid size",
            token: "ten".to_string(),
        };
        assert_eq!(e.to_string(), "invalid grid size: \"ten\"");
    }
}
