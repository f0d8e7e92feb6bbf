//! # Configuration
//!
//! Index configuration - choose how distance is measured.
//!
//! Everything is configurable, not hardcoded:
//! - Proximity metric
//! - Whether coincident points count as "within" a query

use super::proximity::{Chebyshev, Proximity};
use std::sync::Arc;

/// Configuration for point indexes
#[derive(Clone)]
pub struct IndexConfig {
    /// Metric used to rank and filter points
    pub proximity: Arc<dyn Proximity>,

    /// Whether points at the query's exact location are returned by range queries
    ///
    /// Off by default, matching [`crate::Point::get_neighbors`].
    pub include_coincident: bool,
}

impl IndexConfig {
    /// Create the default configuration (Chebyshev, coincident points excluded)
    pub fn new() -> Self {
        Self {
            proximity: Arc::new(Chebyshev),
            include_coincident: false,
        }
    }

    /// Set a custom proximity metric
    pub fn with_proximity<P: Proximity + 'static>(mut self, proximity: P) -> Self {
        self.proximity = Arc::new(proximity);
        self
    }

    /// Set coincident-point behavior
    pub fn with_coincident(mut self, include: bool) -> Self {
        self.include_coincident = include;
        self
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for IndexConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexConfig")
            .field("proximity", &self.proximity.name())
            .field("include_coincident", &self.include_coincident)
            .finish()
    }
}
