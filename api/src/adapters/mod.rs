//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod jupiter;

pub use jupiter::JupiterClient;
