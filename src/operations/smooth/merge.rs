use crate::geometry::OffsetSegment;
use crate::math::Point2;

/// Collapses the last two emitted points into one where two consecutive
/// concave constructions cross.
///
/// If `current` intersects the previous construction segment, the two offset
/// points they produced (the last two entries of `points`) are replaced by
/// the single intersection point. Returns whether a collapse happened.
pub fn collapse_if_crossing(
    prev: Option<&OffsetSegment>,
    current: &OffsetSegment,
    points: &mut Vec<Point2>,
) -> bool {
    let Some(prev) = prev else {
        return false;
    };
    let Some(hit) = current.intersect(prev) else {
        return false;
    };
    if points.len() < 2 {
        return false;
    }
    points.truncate(points.len() - 2);
    points.push(hit);
    true
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn crossing_segments_collapse_to_intersection() {
        let prev = OffsetSegment::new(Point2::new(0.0, 0.0), Point2::new(2.0, 2.0));
        let current = OffsetSegment::new(Point2::new(2.0, 0.0), Point2::new(0.0, 2.0));
        let mut points = vec![
            Point2::new(-1.0, -1.0),
            prev.offset,
            current.offset,
        ];
        assert!(collapse_if_crossing(Some(&prev), &current, &mut points));
        assert_eq!(points.len(), 2);
        assert!((points[1].x - 1.0).abs() < 1e-9);
        assert!((points[1].y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn disjoint_segments_leave_points_unchanged() {
        let prev = OffsetSegment::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0));
        let current = OffsetSegment::new(Point2::new(0.0, 5.0), Point2::new(1.0, 5.0));
        let mut points = vec![prev.offset, current.offset];
        assert!(!collapse_if_crossing(Some(&prev), &current, &mut points));
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn no_previous_segment_is_a_no_op() {
        let current = OffsetSegment::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
        let mut points = vec![current.offset];
        assert!(!collapse_if_crossing(None, &current, &mut points));
        assert_eq!(points.len(), 1);
    }
}
