//! Content service
//!
//! Fetches raw VRFD payloads from the token data client and hands them
//! to the normalizer. Upstream failures propagate; shape problems do not.

use std::sync::Arc;

use chrono::Utc;

use super::normalizer::{assemble, flatten_content, payload_items};
use crate::domain::entities::{ContentRecord, FeedPage, TypeFilter};
use crate::domain::ports::TokenDataClient;
use crate::error::JupiterError;

/// Service for building the content feed
pub struct ContentService<TC>
where
    TC: TokenDataClient + ?Sized,
{
    client: Arc<TC>,
}

impl<TC> ContentService<TC>
where
    TC: TokenDataClient + ?Sized,
{
    pub fn new(client: Arc<TC>) -> Self {
        Self { client }
    }

    /// One page of the feed built from trending "cooking" tokens
    pub async fn get_content_feed(
        &self,
        page: u32,
        filter: &TypeFilter,
    ) -> Result<FeedPage, JupiterError> {
        let raw = self.client.fetch_cooking_tokens().await?;
        let items = payload_items(raw);
        tracing::debug!("Fetched {} cooking tokens", items.len());

        Ok(assemble(&items, page, filter))
    }

    /// All VRFD content for specific mints, unpaginated
    pub async fn get_content(&self, mints: &[String]) -> Result<Vec<ContentRecord>, JupiterError> {
        let mints: Vec<String> = mints
            .iter()
            .map(|m| m.trim())
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .collect();

        if mints.is_empty() {
            return Ok(Vec::new());
        }

        let raw = self.client.fetch_content(&mints).await?;
        let items = payload_items(raw);

        Ok(flatten_content(&items, Utc::now()))
    }
}
