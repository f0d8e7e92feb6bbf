//! # Ports
//!
//! Trait definitions for adapters. Contracts only, no implementations.
//!
//! - Ports define WHAT operations are needed
//! - Adapters define HOW they're implemented
//!
//! The CORE doesn't know about adapters.

mod near;

pub use near::Near;
