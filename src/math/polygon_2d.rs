use super::Point2;

/// Signed cross product of the two edge vectors of a vertex triple:
/// `(p2 - p1) × (p3 - p2)`.
///
/// The sign encodes the turn direction at `p2` for the ring's winding;
/// zero means the three points are collinear (or an edge has zero length).
#[must_use]
pub fn triple_cross(p1: &Point2, p2: &Point2, p3: &Point2) -> f64 {
    let v1 = (p2.x - p1.x, p2.y - p1.y);
    let v2 = (p3.x - p2.x, p3.y - p2.y);
    v1.0 * v2.1 - v1.1 * v2.0
}

/// Midpoint of the segment from `a` to `b`.
#[must_use]
pub fn midpoint(a: &Point2, b: &Point2) -> Point2 {
    Point2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Bearing of the edge from `a` to `b`, as `atan2(dy, dx)` in radians.
#[must_use]
pub fn edge_bearing(a: &Point2, b: &Point2) -> f64 {
    (b.y - a.y).atan2(b.x - a.x)
}
