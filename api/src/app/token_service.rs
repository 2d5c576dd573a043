//! Token service
//!
//! Token search against Jupiter, normalized into `TokenListing`s.

use std::sync::Arc;

use serde_json::Value;

use super::resolvers::{first_str, resolve_decimals, resolve_name, resolve_symbol};
use crate::domain::entities::TokenListing;
use crate::domain::ports::TokenDataClient;
use crate::error::JupiterError;

/// Service for token lookups
pub struct TokenService<TC>
where
    TC: TokenDataClient + ?Sized,
{
    client: Arc<TC>,
}

impl<TC> TokenService<TC>
where
    TC: TokenDataClient + ?Sized,
{
    pub fn new(client: Arc<TC>) -> Self {
        Self { client }
    }

    /// Search tokens by name, symbol, or mint address
    pub async fn search(&self, query: &str) -> Result<Vec<TokenListing>, JupiterError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let raw = self.client.search_tokens(query).await?;
        Ok(listing_items(raw).iter().filter_map(token_listing).collect())
    }
}

/// Search responses come back as an array or as an object keyed by mint.
/// Object values keep the upstream key order.
fn listing_items(raw: Value) -> Vec<Value> {
    match raw {
        Value::Array(items) => items,
        Value::Object(map) => map.into_iter().map(|(_, item)| item).collect(),
        _ => Vec::new(),
    }
}

/// Map one search hit; `id` is Jupiter's name for the mint here
fn token_listing(item: &Value) -> Option<TokenListing> {
    let mint = first_str(item, &["id", "mint"])?;

    Some(TokenListing {
        mint: mint.to_string(),
        name: resolve_name(item, mint),
        symbol: resolve_symbol(item, mint),
        decimals: resolve_decimals(item),
        logo_uri: first_str(item, &["icon", "logoURI"]).map(str::to_string),
        tags: item.get("tags").and_then(Value::as_array).map(|tags| {
            tags.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        }),
        organic_score: item.get("organicScore").and_then(Value::as_f64),
        market_cap: item.get("marketCap").and_then(Value::as_f64),
        holders: ["holders", "holderCount"]
            .iter()
            .find_map(|key| item.get(*key).and_then(Value::as_u64)),
    })
}
