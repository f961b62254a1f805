//! Cell coordinates and rectangular cell ranges.
//!
//! X grows right, Y grows down, so a grid of width `w` and height `h` covers
//! `[0, w) x [0, h)`.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

/// A cell coordinate. Two points are the same cell iff both coordinates match.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Unit moves in expansion order: east, south, west, north.
    pub const CARDINALS: [Point; 4] = [
        Point::new(1, 0),
        Point::new(0, 1),
        Point::new(-1, 0),
        Point::new(0, -1),
    ];

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four cells one move away, in [`CARDINALS`](Self::CARDINALS)
    /// order. Some may lie outside any given grid.
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        Self::CARDINALS.map(|d| self + d)
    }

    /// Whether `other` is exactly one move away.
    #[inline]
    pub fn is_adjacent_4(self, other: Point) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

// Row-major, so ordered sets of cells print and compare top to bottom.
impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Cells `min <= p < max` on both axes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Range spanned by two corners, given in either order.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Number of cells covered.
    #[inline]
    pub fn len(self) -> usize {
        let w = self.max.x - self.min.x;
        let h = self.max.y - self.min.y;
        w.max(0) as usize * h.max(0) as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Every cell, row by row.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            next: 0,
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

/// Row-major iterator over a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    next: usize,
}

impl Iterator for RangeIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next >= self.range.len() {
            return None;
        }
        let w = (self.range.max.x - self.range.min.x) as usize;
        let p = self.range.min + Point::new((self.next % w) as i32, (self.next / w) as i32);
        self.next += 1;
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.range.len().saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_4_order_is_east_south_west_north() {
        let p = Point::new(5, 5);
        assert_eq!(
            p.neighbors_4(),
            [
                Point::new(6, 5),
                Point::new(5, 6),
                Point::new(4, 5),
                Point::new(5, 4),
            ]
        );
    }

    #[test]
    fn adjacency() {
        let p = Point::new(2, 2);
        for n in p.neighbors_4() {
            assert!(p.is_adjacent_4(n));
        }
        assert!(!p.is_adjacent_4(p));
        assert!(!p.is_adjacent_4(Point::new(3, 3)));
        assert!(!p.is_adjacent_4(Point::new(4, 2)));
    }

    #[test]
    fn points_order_row_major() {
        let mut pts = vec![Point::new(1, 1), Point::new(0, 1), Point::new(2, 0)];
        pts.sort();
        assert_eq!(pts, vec![Point::new(2, 0), Point::new(0, 1), Point::new(1, 1)]);
        assert_eq!(Point::new(-3, 4).to_string(), "(-3, 4)");
    }

    #[test]
    fn range_corners_in_any_order() {
        let r = Range::new(3, 2, 0, 0);
        assert_eq!(r, Range::new(0, 0, 3, 2));
        assert_eq!(r.len(), 6);
    }

    #[test]
    fn range_iterates_row_major() {
        let r = Range::new(1, 1, 4, 3);
        let pts: Vec<_> = r.iter().collect();
        assert_eq!(r.iter().len(), 6);
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Point::new(1, 1));
        assert_eq!(pts[2], Point::new(3, 1));
        assert_eq!(pts[3], Point::new(1, 2));
        assert_eq!(pts[5], Point::new(3, 2));
    }

    #[test]
    fn empty_range_yields_nothing() {
        let r = Range::new(2, 0, 2, 5);
        assert!(r.is_empty());
        assert_eq!(r.iter().count(), 0);
        assert_eq!(r.iter().len(), 0);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn point_serializes_as_struct() {
        let json = serde_json::to_string(&Point::new(3, -7)).unwrap();
        assert_eq!(json, r#"{"x":3,"y":-7}"#);
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Point::new(3, -7));
    }
}
