use crate::error::Result;
use crate::geometry::{OffsetSegment, Ring};
use crate::math::Point2;

use super::classify::{classify, Section, SectionKind, SectionRecord};
use super::merge::collapse_if_crossing;
use super::offset::{concave_offset, convex_offset};

/// Everything one forward walk leaves behind for the closure step.
#[derive(Debug)]
pub(super) struct PassOutput {
    /// The in-progress (still open) smoothed point sequence.
    pub points: Vec<Point2>,
    /// Construction segments emitted so far, in walk order.
    pub segments: Vec<OffsetSegment>,
    /// Classification record keyed by triple index.
    pub record: SectionRecord,
    /// The construction segment of the most recent unbroken concave run,
    /// if the walk ended inside one.
    pub pending: Option<OffsetSegment>,
}

/// Walks every vertex triple of the ring except the wrap-around one.
///
/// Triple indices run from 0 to `len - 3` inclusive; the final triple that
/// wraps past the closing duplicate belongs to the closure step. Per triple:
/// the anchor `p1` is emitted unless the previous triple was concave (which
/// already consumed it), then the triple is classified and offset. A concave
/// triple whose lookahead shows a convex successor emits `p3` directly and
/// skips the next index, avoiding a duplicate vertex at the transition.
pub(super) fn walk(ring: &Ring, offset_dist: f64) -> Result<PassOutput> {
    let n = ring.len();
    let mut points: Vec<Point2> = Vec::with_capacity(n * 2);
    let mut segments: Vec<OffsetSegment> = Vec::new();
    let mut record = SectionRecord::with_capacity(n);
    let mut pending: Option<OffsetSegment> = None;
    let mut skip_next = false;

    for i in 0..n - 2 {
        if skip_next {
            // Recorded as not concave without re-deriving.
            record.push(SectionKind::NotConcave);
            skip_next = false;
            continue;
        }

        let (p1, p2, p3) = ring.triple(i);

        let prev_concave = i > 0 && record.get(i - 1) == Some(SectionKind::Concave);
        if !prev_concave {
            points.push(p1);
        }

        let section = classify(&p1, &p2, &p3);
        match section {
            Section::Convex => {
                let (pt, seg) = convex_offset(&p1, &p2, offset_dist)?;
                points.push(pt);
                segments.push(seg);
                pending = None;
            }
            Section::Concave => {
                let (pt, seg) = concave_offset(&p1, &p2, &p3, offset_dist)?;
                points.push(pt);
                segments.push(seg);

                if prev_concave {
                    collapse_if_crossing(pending.as_ref(), &seg, &mut points);
                }
                pending = Some(seg);

                // Lookahead: a convex successor would re-derive p3 as its
                // anchor; emit it here and skip that index instead.
                if i != n - 3 && classify(&p2, &p3, &ring.point(i + 3)) == Section::Convex {
                    skip_next = true;
                    points.push(p3);
                }
            }
            Section::Collinear => {
                pending = None;
            }
        }
        record.push(SectionKind::from(section));
    }

    Ok(PassOutput {
        points,
        segments,
        record,
        pending,
    })
}
