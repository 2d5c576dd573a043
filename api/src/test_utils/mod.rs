//! Test utilities
//!
//! Manual mock implementations and JSON fixtures for unit testing.
//!
//! The fixtures mirror the loose shapes Jupiter actually returns: aliased
//! keys, blank entries, and items missing fields the normalizer defaults.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
