//! # Near Port
//!
//! Trait for finding related points.
//!
//! Implemented by index adapters (Flat, ...).

use crate::core::{Point, PointResult};

/// Trait for finding points close to a query
///
/// Index adapters implement this trait.
pub trait Near: Send + Sync {
    /// Find the k closest points to query
    ///
    /// Returns points sorted by distance (closest first). Ties keep
    /// insertion order.
    fn near(&self, query: &Point, k: usize) -> Vec<Point>;

    /// Find all points within a distance threshold, in insertion order
    ///
    /// Fails with `InvalidArgument` when `threshold <= 0`.
    fn within(&self, query: &Point, threshold: i64) -> PointResult<Vec<Point>>;

    /// Add a point to the index
    fn add(&mut self, point: Point);

    /// Get the number of indexed points
    fn len(&self) -> usize;

    /// Check if the index is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
