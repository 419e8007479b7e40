use pathviz_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Admissible and consistent for 4-directional unit-cost movement, so A*
/// guided by it finds optimal paths.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_basics() {
        assert_eq!(manhattan(Point::new(0, 0), Point::new(4, 4)), 8);
        assert_eq!(manhattan(Point::new(4, 4), Point::new(0, 0)), 8);
        assert_eq!(manhattan(Point::new(-2, 1), Point::new(1, -1)), 5);
        assert_eq!(manhattan(Point::new(3, 3), Point::new(3, 3)), 0);
    }
}
