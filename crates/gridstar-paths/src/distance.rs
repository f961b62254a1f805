use gridstar_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Exact for unit-cost 4-connected moves on an empty grid, so it never
/// overestimates and drops by at most 1 per step.
#[inline]
pub fn manhattan(a: Point, b: Point) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Point::new(1, 5);
        let b = Point::new(4, 1);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(manhattan(b, a), 7);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn manhattan_is_consistent_across_one_step() {
        let goal = Point::new(3, -2);
        let p = Point::new(-1, 4);
        for n in p.neighbors_4() {
            assert!(manhattan(p, goal) <= 1 + manhattan(n, goal));
        }
    }
}
