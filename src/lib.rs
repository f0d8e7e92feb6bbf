//! # gridpoint
//!
//! Immutable points on the 64-bit integer grid.
//!
//! ## Overview
//!
//! A [`Point`] is a plain `(x, y)` value with:
//!
//! - **Parsing**: `"<int>,<int>"` with optional whitespace, and `Display` back
//! - **Structural equality and hashing**: a stable 32-bit `hash_code`
//! - **Queries** over caller-supplied points: exact-location counts,
//!   axis collinearity reports, and neighbors within a square radius
//!
//! On top of the value type sit pluggable [proximity](crate::core::proximity) metrics and a
//! brute-force [`FlatIndex`] implementing the [`Near`] port.
//!
//! ## Usage
//!
//! ```rust
//! use gridpoint::{FlatIndex, Near, Point, PointError};
//!
//! let center: Point = "3, 3".parse()?;
//! let others = [Point::new(3, 4), Point::new(6, 6), Point::new(5, 2)];
//!
//! assert_eq!(center.get_neighbors(2, &others)?, vec![Point::new(3, 4), Point::new(5, 2)]);
//! assert_eq!(center.get_collinear_point_coordinates(&others), r#"(3,4,"X")"#);
//!
//! let index = FlatIndex::from_points(others);
//! assert_eq!(index.within(&center, 2)?, center.get_neighbors(2, index.points())?);
//! # Ok::<(), PointError>(())
//! ```

pub mod core;
pub mod ports;
pub mod adapters;

// Re-exports for convenience
pub use self::core::{Collinearity, IndexConfig, Point, PointError, PointResult};
pub use adapters::index::FlatIndex;
pub use ports::Near;
