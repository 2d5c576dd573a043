//! Application layer
//!
//! Contains the feed normalizer and the services that feed it.
//! Services fetch raw payloads through ports; the normalizer is pure.

pub mod content_service;
pub mod normalizer;
pub mod resolvers;
pub mod token_service;

pub use content_service::ContentService;
pub use token_service::TokenService;
