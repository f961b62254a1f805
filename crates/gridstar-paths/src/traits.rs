use gridstar_core::Point;

/// Neighbor enumeration for a searchable map.
pub trait Pather {
    /// Append the cells reachable from `p` in one unit-cost move to `buf`.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}
