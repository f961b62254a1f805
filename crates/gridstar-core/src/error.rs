use std::fmt;

use crate::geom::Point;

/// Errors raised by [`Grid`](crate::Grid) construction and access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate outside `[0, width) x [0, height)` was accessed.
    OutOfBounds { point: Point, width: i32, height: i32 },
    /// Width or height was not a positive integer.
    InvalidDimensions { width: i32, height: i32 },
    /// A text map has lines of different widths.
    InconsistentSize { line: i32, expected: i32, found: i32 },
    /// A text map contains a character other than `#` or `.`.
    InvalidRune { ch: char, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                point,
                width,
                height,
            } => write!(f, "grid: {point} is outside a {width}x{height} grid"),
            Self::InvalidDimensions { width, height } => {
                write!(f, "grid: dimensions must be positive, got {width}x{height}")
            }
            Self::InconsistentSize {
                line,
                expected,
                found,
            } => write!(
                f,
                "grid: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "grid: invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}
