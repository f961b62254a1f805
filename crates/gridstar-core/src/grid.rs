//! The occupancy [`Grid`]: a fixed-size 2D map of free and blocked cells.
//!
//! A `Grid` is plain owned data (`Send + Sync`), so one grid can be shared
//! read-only by any number of concurrent searches. Mutation goes through
//! `&mut self`, which the borrow checker keeps apart from running searches.

use crate::error::GridError;
use crate::geom::{Point, Range};

/// A 2D boolean occupancy map covering `[0, width) x [0, height)`.
///
/// Cells are stored in row-major order, so the linear index of `(x, y)` is
/// `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    blocked: Vec<bool>,
}

impl Grid {
    /// Create a grid with every cell free.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            blocked: vec![false; width as usize * height as usize],
        })
    }

    /// Create a grid with the given cells blocked.
    ///
    /// Fails with [`GridError::OutOfBounds`] on the first coordinate that
    /// lies outside the grid.
    pub fn from_blocked(
        width: i32,
        height: i32,
        blocked: impl IntoIterator<Item = Point>,
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(width, height)?;
        for p in blocked {
            grid.set_blocked(p, true)?;
        }
        Ok(grid)
    }

    /// Parse a text map where `#` is blocked and `.` is free.
    ///
    /// Every line must have the same width. Surrounding whitespace of the
    /// whole string is trimmed, and so is leading indentation on each line.
    pub fn from_ascii(s: &str) -> Result<Self, GridError> {
        let mut rows: Vec<&str> = Vec::new();
        for line in s.trim().lines() {
            rows.push(line.trim());
        }
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |r| r.chars().count() as i32);
        let mut grid = Self::new(width, height)?;
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count() as i32;
            if found != width {
                return Err(GridError::InconsistentSize {
                    line: y as i32,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                match ch {
                    '#' => grid.set_blocked(pos, true)?,
                    '.' => {}
                    _ => return Err(GridError::InvalidRune { ch, pos }),
                }
            }
        }
        Ok(grid)
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The bounding range `[0, width) x [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.blocked.len()
    }

    /// Always `false`: a grid has positive dimensions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }

    /// Whether `p` lies inside the grid. Never fails.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// Linear index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.in_bounds(p) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Convert a linear index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Whether the cell at `p` is blocked.
    pub fn blocked(&self, p: Point) -> Result<bool, GridError> {
        let i = self.checked_index(p)?;
        Ok(self.blocked[i])
    }

    /// Whether `p` is in bounds and not blocked.
    #[inline]
    pub fn is_free(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| !self.blocked[i])
    }

    /// Mark the cell at `p` as blocked or free.
    pub fn set_blocked(&mut self, p: Point, blocked: bool) -> Result<(), GridError> {
        let i = self.checked_index(p)?;
        self.blocked[i] = blocked;
        Ok(())
    }

    /// Iterate over blocked cells in row-major order.
    pub fn blocked_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.blocked
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b)
            .map(|(i, _)| self.point(i))
    }

    /// Number of blocked cells.
    pub fn count_blocked(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }

    fn checked_index(&self, p: Point) -> Result<usize, GridError> {
        self.index(p).ok_or(GridError::OutOfBounds {
            point: p,
            width: self.width,
            height: self.height,
        })
    }
}

// The wire form lists blocked cells instead of the raw bitmap, and goes back
// through `from_blocked` so a deserialized grid is always well formed.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    width: i32,
    height: i32,
    #[serde(default)]
    blocked: Vec<Point>,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GridRepr {
            width: self.width,
            height: self.height,
            blocked: self.blocked_cells().collect(),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = GridRepr::deserialize(deserializer)?;
        Grid::from_blocked(repr.width, repr.height, repr.blocked).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_size() {
        let g = Grid::new(10, 5).unwrap();
        assert_eq!((g.width(), g.height()), (10, 5));
        assert_eq!(g.len(), 50);
        assert_eq!(g.bounds(), Range::new(0, 0, 10, 5));
        assert_eq!(g.count_blocked(), 0);
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert_eq!(
            Grid::new(0, 3),
            Err(GridError::InvalidDimensions {
                width: 0,
                height: 3
            })
        );
        assert!(Grid::new(4, -1).is_err());
    }

    #[test]
    fn blocked_out_of_bounds_fails() {
        let g = Grid::new(3, 3).unwrap();
        assert_eq!(g.blocked(Point::new(2, 2)), Ok(false));
        assert_eq!(
            g.blocked(Point::new(3, 0)),
            Err(GridError::OutOfBounds {
                point: Point::new(3, 0),
                width: 3,
                height: 3
            })
        );
        assert!(g.blocked(Point::new(0, -1)).is_err());
        assert!(!g.in_bounds(Point::new(-1, 0)));
        assert!(!g.is_free(Point::new(0, 3)));
    }

    #[test]
    fn set_and_query() {
        let mut g = Grid::new(4, 4).unwrap();
        g.set_blocked(Point::new(1, 2), true).unwrap();
        assert_eq!(g.blocked(Point::new(1, 2)), Ok(true));
        assert!(!g.is_free(Point::new(1, 2)));
        g.set_blocked(Point::new(1, 2), false).unwrap();
        assert!(g.is_free(Point::new(1, 2)));
        assert!(g.set_blocked(Point::new(4, 4), true).is_err());
    }

    #[test]
    fn index_round_trips_through_point() {
        let g = Grid::new(7, 3).unwrap();
        for p in g.bounds() {
            let i = g.index(p).unwrap();
            assert_eq!(g.point(i), p);
        }
        assert_eq!(g.index(Point::new(2, 1)), Some(9));
        assert_eq!(g.index(Point::new(7, 0)), None);
    }

    #[test]
    fn from_blocked_rejects_outside_cells() {
        let g = Grid::from_blocked(3, 3, [Point::new(0, 1), Point::new(2, 1)]).unwrap();
        assert_eq!(
            g.blocked_cells().collect::<Vec<_>>(),
            vec![Point::new(0, 1), Point::new(2, 1)]
        );
        assert!(Grid::from_blocked(3, 3, [Point::new(5, 5)]).is_err());
    }

    #[test]
    fn parse_ascii_map() {
        let g = Grid::from_ascii(
            "
            ..#
            ###
            ...",
        )
        .unwrap();
        assert_eq!((g.width(), g.height()), (3, 3));
        assert_eq!(g.count_blocked(), 4);
        assert_eq!(g.blocked(Point::new(2, 0)), Ok(true));
        assert_eq!(g.blocked(Point::new(0, 2)), Ok(false));
    }

    #[test]
    fn parse_ascii_errors() {
        assert_eq!(
            Grid::from_ascii("...\n.."),
            Err(GridError::InconsistentSize {
                line: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            Grid::from_ascii(".@."),
            Err(GridError::InvalidRune {
                ch: '@',
                pos: Point::new(1, 0)
            })
        );
        assert!(Grid::from_ascii("").is_err());
    }

    #[test]
    fn grid_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Grid>();
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::from_blocked(4, 2, [Point::new(1, 0), Point::new(3, 1)]).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn deserialize_validates_cells() {
        let bad = r#"{"width":2,"height":2,"blocked":[{"x":2,"y":0}]}"#;
        assert!(serde_json::from_str::<Grid>(bad).is_err());
    }
}
