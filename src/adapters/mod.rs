//! Adapters - Swappable implementations of port interfaces

pub mod index;
