//! # Proximity
//!
//! Trait and implementations for measuring how far apart two points are.
//!
//! All metrics work on the full i64 range without overflow: axis
//! differences are taken with `abs_diff` and widened to `u128`.
//! Lower values always mean closer.

use super::Point;

/// Trait for measuring distance between points on the grid
pub trait Proximity: Send + Sync {
    /// Compute the distance between two points
    fn proximity(&self, a: &Point, b: &Point) -> u128;

    /// Name of this metric (for debugging/config)
    fn name(&self) -> &'static str;
}

/// Absolute per-axis differences
fn axis_deltas(a: &Point, b: &Point) -> (u128, u128) {
    (
        u128::from(a.x().abs_diff(b.x())),
        u128::from(a.y().abs_diff(b.y())),
    )
}

// ============================================================================
// IMPLEMENTATIONS
// ============================================================================

/// Chebyshev (L∞) distance
///
/// The larger of the two axis differences. Points within distance `d`
/// form a square of side `2d + 1` around the center.
///
/// This is the metric behind [`Point::get_neighbors`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Chebyshev;

impl Proximity for Chebyshev {
    fn proximity(&self, a: &Point, b: &Point) -> u128 {
        let (dx, dy) = axis_deltas(a, b);
        dx.max(dy)
    }

    fn name(&self) -> &'static str {
        "chebyshev"
    }
}

/// Manhattan (L1) distance
///
/// Sum of absolute differences along each axis.
#[derive(Clone, Copy, Debug, Default)]
pub struct Manhattan;

impl Proximity for Manhattan {
    fn proximity(&self, a: &Point, b: &Point) -> u128 {
        let (dx, dy) = axis_deltas(a, b);
        dx + dy
    }

    fn name(&self) -> &'static str {
        "manhattan"
    }
}

/// Squared Euclidean distance
///
/// Same ordering as Euclidean without the square root.
/// Saturates at `u128::MAX` for points at opposite corners of the i64 range.
#[derive(Clone, Copy, Debug, Default)]
pub struct EuclideanSquared;

impl Proximity for EuclideanSquared {
    fn proximity(&self, a: &Point, b: &Point) -> u128 {
        let (dx, dy) = axis_deltas(a, b);
        (dx * dx).saturating_add(dy * dy)
    }

    fn name(&self) -> &'static str {
        "euclidean_squared"
    }
}
