use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::{GeometryError, Result};
use crate::geometry::OffsetSegment;
use crate::math::polygon_2d::{edge_bearing, midpoint};
use crate::math::{Point2, TOLERANCE};

/// Offset point for a convex corner: the midpoint of the edge `(p1, p2)`
/// shifted by `offset_dist` along the edge's left-hand perpendicular
/// (`bearing + π/2`).
///
/// Returns the offset point and its construction segment (midpoint → point).
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if the edge has zero length.
pub fn convex_offset(p1: &Point2, p2: &Point2, offset_dist: f64) -> Result<(Point2, OffsetSegment)> {
    check_edge(p1, p2)?;

    let cent = midpoint(p1, p2);
    let bear = edge_bearing(p1, p2);

    let dx = offset_dist * (bear + FRAC_PI_2).cos();
    let dy = offset_dist * (bear + FRAC_PI_2).sin();
    let offset_point = Point2::new(cent.x + dx, cent.y + dy);

    Ok((offset_point, OffsetSegment::new(cent, offset_point)))
}

/// Offset point for a concave corner: the middle vertex `p2` shifted by
/// `offset_dist` along the bisector of the two edge bearings, rotated to
/// point away from the polygon interior for the assumed winding.
///
/// Returns the offset point and its construction segment (`p2` → point).
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if either edge has zero length.
pub fn concave_offset(
    p1: &Point2,
    p2: &Point2,
    p3: &Point2,
    offset_dist: f64,
) -> Result<(Point2, OffsetSegment)> {
    check_edge(p1, p2)?;
    check_edge(p2, p3)?;

    let angle1 = edge_bearing(p1, p2);
    let angle2 = edge_bearing(p2, p3);
    let mut bisector = (angle1 + angle2) / 2.0 - FRAC_PI_2;

    // Flip when the second bearing exceeds the first, so the offset points
    // away from the interior for the assumed winding.
    if angle2 > angle1 {
        bisector += PI;
    }

    let offset_point = Point2::new(
        p2.x + offset_dist * bisector.cos(),
        p2.y + offset_dist * bisector.sin(),
    );

    Ok((offset_point, OffsetSegment::new(*p2, offset_point)))
}

/// Rejects zero-length edges, whose bearing is ill-defined.
fn check_edge(a: &Point2, b: &Point2) -> Result<()> {
    let len_sq = (b.x - a.x).powi(2) + (b.y - a.y).powi(2);
    if len_sq < TOLERANCE * TOLERANCE {
        return Err(GeometryError::Degenerate(format!(
            "zero-length edge between ({}, {}) and ({}, {})",
            a.x, a.y, b.x, b.y
        ))
        .into());
    }
    Ok(())
}
