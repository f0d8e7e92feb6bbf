//! # Index Adapters
//!
//! Implementations of the Near port for different index backends.
//!
//! Available adapters:
//! - `FlatIndex` - Brute force search (exact, O(n) per query)

mod flat;

pub use flat::FlatIndex;
