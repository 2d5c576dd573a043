//! Domain entities
//!
//! Normalized shapes handed to HTTP callers. Raw upstream payloads stay
//! as `serde_json::Value` until the normalizer resolves them.

pub mod content;
pub mod token;

pub use content::{
    ContentKind, ContentRecord, ContentStatus, FeedPage, TypeFilter, JUPITER_AUTHOR,
    UNKNOWN_AUTHOR,
};
pub use token::{mint_prefix, TokenListing, TokenMetadata, DEFAULT_DECIMALS};
