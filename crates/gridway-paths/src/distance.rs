use gridway_core::Point;

/// Manhattan (L1) distance between two points.
///
/// The heuristic used by [`AStar::find_path`](crate::AStar::find_path):
/// for 4-directional unit-cost movement it never overestimates the true
/// remaining cost.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Point::new(0, 0), Point::new(2, 2)), 4);
        assert_eq!(manhattan(Point::new(3, 1), Point::new(1, 4)), 5);
        assert_eq!(manhattan(Point::new(5, 5), Point::new(5, 5)), 0);
    }
}
