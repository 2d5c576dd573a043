//! Domain layer
//!
//! Contains pure data types with no I/O.
//! - `entities`: Token metadata, content records, feed pages
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
