use pathviz_core::Point;

/// Manhattan (L1) distance between two points.
///
/// With 4-directional movement and uniform edge weight this is the length
/// of any wall-free shortest path, counted in steps.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
