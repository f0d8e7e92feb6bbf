//! # Core Domain
//!
//! Pure math, no I/O. The foundation of the crate.
//!
//! This module contains the fundamental types and operations:
//! - `Point` - A location on the integer grid
//! - `PointError` - Parse and argument failures
//! - `Collinearity` - Axis relationship between two points
//! - `Proximity` - Trait for measuring distance
//! - `IndexConfig` - Settings for point indexes
//!
//! ## Design Principles
//!
//! - All functions are pure (deterministic, no side effects)
//! - No I/O operations
//! - Fully testable in isolation

mod point;
mod error;
pub mod collinear;
pub mod proximity;
pub mod config;

// Re-exports
pub use point::Point;
pub use error::{PointError, PointResult};
pub use collinear::Collinearity;
pub use config::IndexConfig;
