use crate::error::{OperationError, Result, RingsmoothError};
use crate::geometry::{OffsetSegment, Ring};
use crate::math::polygon_2d::triple_cross;
use crate::math::Point2;

use super::classify::{classify, Section, SectionKind};
use super::merge::collapse_if_crossing;
use super::offset::{concave_offset, convex_offset};
use super::pass::PassOutput;

/// Resolves the wrap-around triple and re-closes the smoothed ring.
///
/// The forward walk never visits the triple spanning the closing duplicate:
/// `p1` = second-to-last ring point, `p2` = last (== first), `p3` = second.
/// This step reconciles that triple against whatever state the walk left
/// behind and trims the redundant points the seam would otherwise carry.
///
/// Branches on the seam classification, the last and first recorded section
/// kinds, and whether the seam offset merged with the carried-over
/// construction; any reconciliation that cannot be applied to the emitted
/// sequence fails with `OperationError::ClosureState` rather than returning
/// a malformed ring.
// Seam and collinearity checks are exact by convention, not epsilon-based.
#[allow(clippy::float_cmp)]
pub(super) fn close(
    ring: &Ring,
    offset_dist: f64,
    out: PassOutput,
) -> Result<(Vec<Point2>, Vec<OffsetSegment>)> {
    let PassOutput {
        mut points,
        mut segments,
        record,
        pending,
    } = out;

    let n = ring.len();
    let p1 = ring.point(n - 2);
    let p2 = ring.point(n - 1);
    let p3 = ring.point(1);

    let last_kind = record
        .last()
        .ok_or_else(|| closure_state("no sections recorded by the forward pass"))?;

    if last_kind != SectionKind::Concave {
        points.push(p1);
    }

    match classify(&p1, &p2, &p3) {
        Section::Convex => {
            if last_kind != SectionKind::Concave {
                let (pt, seg) = convex_offset(&p1, &p2, offset_dist)?;
                points.push(pt);
                segments.push(seg);
            }
            reclose(&mut points)?;
        }
        Section::Concave => {
            let (pt, seg) = concave_offset(&p1, &p2, &p3, offset_dist)?;
            points.push(pt);
            segments.push(seg);
            collapse_if_crossing(pending.as_ref(), &seg, &mut points);

            // Seam comparison is exact, matching the merge detection the
            // branch structure is defined over.
            let merged = points.last() != Some(&pt);
            let first_kind = record
                .first()
                .ok_or_else(|| closure_state("no sections recorded by the forward pass"))?;

            if merged {
                if first_kind == SectionKind::Concave {
                    let head_hit = segments.first().and_then(|head| seg.intersect(head));
                    if let Some(hit) = head_hit {
                        reseat_seam_at(&mut points, hit)?;
                    } else {
                        replace_first_with_last(&mut points)?;
                    }
                } else {
                    replace_first_with_last(&mut points)?;
                    // The merged seam already holds this corner; a strictly
                    // convex first section leaves a redundant anchor and
                    // construction line behind. Collinear first sections
                    // keep theirs.
                    if first_triple_cross(ring) != 0.0 {
                        drop_redundant_head(&mut points, &mut segments)?;
                    }
                }
            } else {
                replace_first_with_last(&mut points)?;
                if first_kind != SectionKind::Concave && first_triple_cross(ring) != 0.0 {
                    drop_redundant_head(&mut points, &mut segments)?;
                }
            }
        }
        Section::Collinear => {
            reclose(&mut points)?;
        }
    }

    Ok((points, segments))
}

/// Cross product of the ring's first triple, re-derived from the ring itself
/// (the record only keeps the binary concave state). Exact-zero convention.
fn first_triple_cross(ring: &Ring) -> f64 {
    triple_cross(&ring.point(0), &ring.point(1), &ring.point(2))
}

/// Appends the first output point again so the sequence closes.
fn reclose(points: &mut Vec<Point2>) -> Result<()> {
    let first = *points
        .first()
        .ok_or_else(|| closure_state("cannot reclose an empty output sequence"))?;
    points.push(first);
    Ok(())
}

/// Overwrites the first output point with the last, closing the seam on the
/// freshly computed (or merged) offset point.
fn replace_first_with_last(points: &mut [Point2]) -> Result<()> {
    let last = *points
        .last()
        .ok_or_else(|| closure_state("cannot close an empty output sequence"))?;
    points[0] = last;
    Ok(())
}

/// Seam merged into the first construction segment: drop the stale first
/// point, land the seam on the head intersection, and drop the point made
/// redundant by it.
fn reseat_seam_at(points: &mut Vec<Point2>, hit: Point2) -> Result<()> {
    if points.len() < 3 {
        return Err(closure_state(
            "output collapsed below the points the seam reconciliation must drop",
        ));
    }
    points.remove(0);
    let last = points.len() - 1;
    points[last] = hit;
    points.remove(1);
    Ok(())
}

/// Removes the second output point and the first construction segment, both
/// redundant once the seam carries the first corner.
fn drop_redundant_head(points: &mut Vec<Point2>, segments: &mut Vec<OffsetSegment>) -> Result<()> {
    if points.len() < 2 || segments.is_empty() {
        return Err(closure_state(
            "output collapsed below the points the seam reconciliation must drop",
        ));
    }
    points.remove(1);
    segments.remove(0);
    Ok(())
}

fn closure_state(msg: &str) -> RingsmoothError {
    OperationError::ClosureState(msg.to_owned()).into()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::smooth::pass::walk;

    fn close_ring(points: Vec<Point2>, dist: f64) -> Result<(Vec<Point2>, Vec<OffsetSegment>)> {
        let ring = Ring::new(points)?;
        let out = walk(&ring, dist)?;
        close(&ring, dist, out)
    }

    #[test]
    fn convex_seam_emits_offset_and_recloses() {
        // Clockwise square: seam triple is convex, previous section convex.
        let (points, segments) = close_ring(
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(0.0, 10.0),
                Point2::new(10.0, 10.0),
                Point2::new(10.0, 0.0),
                Point2::new(0.0, 0.0),
            ],
            1.0,
        )
        .unwrap();
        assert_eq!(points.len(), 9);
        assert_eq!(segments.len(), 4);
        assert_eq!(points.first(), points.last());
        // Seam offset: bottom edge midpoint shifted to (5,-1).
        assert!((points[7].x - 5.0).abs() < 1e-9);
        assert!((points[7].y + 1.0).abs() < 1e-9);
    }

    #[test]
    fn collinear_seam_recloses_without_offset() {
        // Pentagon with a redundant midpoint on the bottom edge placed so
        // the wrap triple ((10,0),(5,0),(0,0)) is exactly collinear.
        let (points, segments) = close_ring(
            vec![
                Point2::new(5.0, 0.0),
                Point2::new(0.0, 0.0),
                Point2::new(0.0, 10.0),
                Point2::new(10.0, 10.0),
                Point2::new(10.0, 0.0),
                Point2::new(5.0, 0.0),
            ],
            1.0,
        )
        .unwrap();
        // Four convex offsets from the forward walk, none from the seam.
        assert_eq!(segments.len(), 4);
        assert_eq!(points.first(), points.last());
        assert_eq!(points.first().copied(), Some(Point2::new(5.0, 0.0)));
        // The collinear seam still carries its anchor through.
        assert_eq!(points[points.len() - 2], Point2::new(10.0, 0.0));
    }

    #[test]
    fn concave_seam_without_merge_closes_on_seam_offset() {
        // Reverse-winding square: every section concave, seam concave, no
        // constructions cross at offset 1.
        let sqrt2_2 = std::f64::consts::FRAC_1_SQRT_2;
        let (points, _segments) = close_ring(
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 0.0),
                Point2::new(10.0, 10.0),
                Point2::new(0.0, 10.0),
                Point2::new(0.0, 0.0),
            ],
            1.0,
        )
        .unwrap();
        // Inset square: four bisector points, closed on the seam offset.
        assert_eq!(points.len(), 5);
        assert_eq!(points.first(), points.last());
        assert!((points[0].x - sqrt2_2).abs() < 1e-9);
        assert!((points[0].y - sqrt2_2).abs() < 1e-9);
        assert!((points[1].x - (10.0 - sqrt2_2)).abs() < 1e-9);
    }

    #[test]
    fn concave_seam_merge_with_convex_first_drops_redundant_head() {
        // Notched square rotated so the notch shoulders straddle the seam:
        // the last forward triple and the wrap triple are both concave and
        // their bisector segments cross, while the first triple is strictly
        // convex. The seam lands on the merged intersection and the
        // now-redundant second point and head construction are dropped.
        let (points, _segments) = close_ring(
            vec![
                Point2::new(4.0, 4.0),
                Point2::new(3.0, 0.0),
                Point2::new(0.0, 0.0),
                Point2::new(0.0, 10.0),
                Point2::new(10.0, 10.0),
                Point2::new(10.0, 0.0),
                Point2::new(7.0, 0.0),
                Point2::new(6.0, 4.0),
                Point2::new(4.0, 4.0),
            ],
            2.0,
        )
        .unwrap();
        assert_eq!(points.first(), points.last());
        // Seam point is the bisector intersection between the shoulders.
        let first = points[0];
        assert!((first.x - 5.0).abs() < 1e-6);
        assert!((first.y - 2.7192).abs() < 1e-3);
        // The stale anchor (4,4) no longer appears.
        assert!(!points.iter().any(|p| (p.x - 4.0).abs() < 1e-9
            && (p.y - 4.0).abs() < 1e-9));
    }

    #[test]
    fn oversized_offset_collapse_fails_loudly() {
        // Reverse-winding square at offset 8: every adjacent pair of
        // bisector constructions crosses at the center, the output collapses
        // to fewer points than the seam reconciliation must drop.
        let result = close_ring(
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 0.0),
                Point2::new(10.0, 10.0),
                Point2::new(0.0, 10.0),
                Point2::new(0.0, 0.0),
            ],
            8.0,
        );
        assert!(result.is_err());
    }
}
