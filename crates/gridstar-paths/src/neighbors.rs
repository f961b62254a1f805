use gridstar_core::{Grid, Point};

use crate::traits::Pather;

/// Axis-aligned moves onto in-bounds free cells, in the fixed order east,
/// south, west, north. The order only affects iteration, never which path
/// cost is found.
impl Pather for Grid {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&n| self.is_free(n)));
    }
}
