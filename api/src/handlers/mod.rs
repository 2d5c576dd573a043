//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod content;
pub mod tokens;

pub use content::{get_content_feed, get_token_content};
pub use tokens::search_tokens;
