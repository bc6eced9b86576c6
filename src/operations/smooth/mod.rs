mod classify;
mod closure;
mod merge;
mod offset;
mod pass;

pub use classify::{classify, Section};
pub use offset::{concave_offset, convex_offset};

use crate::error::{OperationError, Result};
use crate::geometry::{OffsetSegment, Ring};
use crate::math::TOLERANCE;

/// Iteratively smooths a closed polygon outline.
///
/// Each iteration walks every vertex triple of the ring, replacing convex
/// corners with a perpendicular offset of the leading edge's midpoint and
/// concave corners with a bisector offset of the middle vertex, merging
/// offset points where consecutive concave constructions cross, and
/// reconciling the wrap-around seam back into a closed ring. The offset
/// distance shrinks by the reduction factor after every iteration, so the
/// outline rounds progressively.
#[derive(Debug)]
pub struct IterativeSmoothing2D {
    ring: Ring,
    offset_dist: f64,
    reduction: f64,
    iterations: u32,
}

/// The final smoothed ring plus, per iteration, the construction segments
/// used to derive its points (diagnostic output for external rendering).
#[derive(Debug)]
pub struct SmoothingResult {
    pub ring: Ring,
    pub constructions: Vec<Vec<OffsetSegment>>,
}

impl IterativeSmoothing2D {
    /// Creates a new smoothing operation.
    #[must_use]
    pub fn new(ring: Ring, offset_dist: f64, reduction: f64, iterations: u32) -> Self {
        Self {
            ring,
            offset_dist,
            reduction,
            iterations,
        }
    }

    /// Executes the smoothing run.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if the iteration count is zero, the
    ///   reduction factor is outside `(0, 1]`, or the offset distance is
    ///   negative or non-finite
    /// - `GeometryError::Degenerate` if an offset construction meets an
    ///   exactly-zero-length edge
    /// - `OperationError::ClosureState` if a seam reconciliation cannot be
    ///   applied to the emitted sequence (the run aborts rather than
    ///   returning a partially closed ring)
    pub fn execute(&self) -> Result<SmoothingResult> {
        if self.iterations == 0 {
            return Err(
                OperationError::InvalidInput("at least 1 iteration is required".to_owned()).into(),
            );
        }
        if !(self.reduction > 0.0 && self.reduction <= 1.0) {
            return Err(OperationError::InvalidInput(format!(
                "reduction factor {} is outside (0, 1]",
                self.reduction
            ))
            .into());
        }
        if !self.offset_dist.is_finite() || self.offset_dist < 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "offset distance {} must be finite and non-negative",
                self.offset_dist
            ))
            .into());
        }

        let mut ring = self.ring.clone();
        let mut offset_dist = self.offset_dist;
        let mut constructions = Vec::with_capacity(self.iterations as usize);

        for _ in 0..self.iterations {
            let (next, segments) = smooth_ring(&ring, offset_dist)?;
            constructions.push(segments);
            ring = next;
            offset_dist *= self.reduction;
        }

        Ok(SmoothingResult {
            ring,
            constructions,
        })
    }
}

/// Runs one smoothing pass (forward walk + seam closure) over a ring.
///
/// A zero offset distance is a no-op: the input ring is returned unchanged
/// with no construction segments.
///
/// # Errors
///
/// See [`IterativeSmoothing2D::execute`]; additionally propagates
/// `OperationError::InvalidInput` if the pass output is no longer a valid
/// closed ring.
pub fn smooth_ring(ring: &Ring, offset_dist: f64) -> Result<(Ring, Vec<OffsetSegment>)> {
    if offset_dist.abs() < TOLERANCE {
        return Ok((ring.clone(), Vec::new()));
    }

    let out = pass::walk(ring, offset_dist)?;
    let (points, segments) = closure::close(ring, offset_dist, out)?;
    Ok((Ring::new(points)?, segments))
}
