use crate::error::{OperationError, Result};
use crate::math::intersect_2d::segment_segment_intersect_2d;
use crate::math::Point2;

/// A closed polygon boundary: an ordered point sequence whose first point
/// equals its last.
///
/// A ring is owned by whichever pass currently holds it; smoothing passes
/// produce a new `Ring` instead of mutating in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    points: Vec<Point2>,
}

impl Ring {
    /// Creates a ring from a closed point sequence.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if fewer than 4 points are
    /// provided or the first point does not equal the last.
    pub fn new(points: Vec<Point2>) -> Result<Self> {
        if points.len() < 4 {
            return Err(OperationError::InvalidInput(format!(
                "a closed ring requires at least 4 points, got {}",
                points.len()
            ))
            .into());
        }
        if points.first() != points.last() {
            return Err(
                OperationError::InvalidInput("ring is not closed (first != last)".to_owned())
                    .into(),
            );
        }
        Ok(Self { points })
    }

    /// Number of points, including the closing duplicate.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed ring; provided for slice-like symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All points, closing duplicate included.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Point at `index`, wrapping modulo the ring length.
    ///
    /// Triple indices range over all but the final wrap-around triple, which
    /// is resolved by the closure step; the modulo accessor lets the forward
    /// pass and its lookahead reach past the closing duplicate.
    #[must_use]
    pub fn point(&self, index: usize) -> Point2 {
        self.points[index % self.points.len()]
    }

    /// The consecutive triple starting at `index`, wrapping modulo the ring
    /// length.
    #[must_use]
    pub fn triple(&self, index: usize) -> (Point2, Point2, Point2) {
        (
            self.point(index),
            self.point(index + 1),
            self.point(index + 2),
        )
    }

    /// Consumes the ring, returning its points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point2> {
        self.points
    }
}

/// The construction used to derive one smoothed point: the segment from an
/// anchor (edge midpoint or concave vertex) to the computed offset point.
///
/// Diagnostic output for external rendering; also the geometry the merge
/// step tests for crossings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetSegment {
    pub anchor: Point2,
    pub offset: Point2,
}

impl OffsetSegment {
    /// Creates a construction segment from anchor to offset point.
    #[must_use]
    pub fn new(anchor: Point2, offset: Point2) -> Self {
        Self { anchor, offset }
    }

    /// Bounded intersection with another construction segment.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Point2> {
        segment_segment_intersect_2d(&self.anchor, &self.offset, &other.anchor, &other.offset)
            .map(|(pt, _t, _u)| pt)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 10.0),
            Point2::new(10.0, 10.0),
            Point2::new(10.0, 0.0),
            Point2::new(0.0, 0.0),
        ]
    }

    #[test]
    fn new_accepts_closed_ring() {
        let ring = Ring::new(square()).unwrap();
        assert_eq!(ring.len(), 5);
        assert!(!ring.is_empty());
    }

    #[test]
    fn new_rejects_short_sequence() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 0.0),
        ];
        assert!(Ring::new(pts).is_err());
    }

    #[test]
    fn new_rejects_open_sequence() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        assert!(Ring::new(pts).is_err());
    }

    #[test]
    fn point_wraps_modulo_length() {
        let ring = Ring::new(square()).unwrap();
        assert_eq!(ring.point(5), ring.point(0));
        assert_eq!(ring.point(7), ring.point(2));
    }

    #[test]
    fn triple_wraps_past_closing_point() {
        let ring = Ring::new(square()).unwrap();
        let (p1, p2, p3) = ring.triple(3);
        assert_eq!(p1, Point2::new(10.0, 0.0));
        assert_eq!(p2, Point2::new(0.0, 0.0));
        assert_eq!(p3, Point2::new(0.0, 0.0));
    }

    #[test]
    fn offset_segment_intersect() {
        let a = OffsetSegment::new(Point2::new(0.0, 0.0), Point2::new(2.0, 2.0));
        let b = OffsetSegment::new(Point2::new(2.0, 0.0), Point2::new(0.0, 2.0));
        let pt = a.intersect(&b).unwrap();
        assert!((pt.x - 1.0).abs() < 1e-9);
        assert!((pt.y - 1.0).abs() < 1e-9);

        let c = OffsetSegment::new(Point2::new(5.0, 5.0), Point2::new(6.0, 5.0));
        assert!(a.intersect(&c).is_none());
    }
}
