//! Token data client port trait
//!
//! Defines the interface for fetching raw token payloads from Jupiter.
//! Responses are returned as untyped JSON; shape reconciliation happens
//! in the application layer.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::JupiterError;

/// Port for the upstream token-data API
#[async_trait]
pub trait TokenDataClient: Send + Sync {
    /// Trending "cooking" tokens with their VRFD content embedded
    async fn fetch_cooking_tokens(&self) -> Result<Value, JupiterError>;

    /// VRFD content for the given mints
    async fn fetch_content(&self, mints: &[String]) -> Result<Value, JupiterError>;

    /// Search tokens by name, symbol, or mint address
    async fn search_tokens(&self, query: &str) -> Result<Value, JupiterError>;
}
