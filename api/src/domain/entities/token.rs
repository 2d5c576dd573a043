//! Token domain entities
//!
//! Normalized token metadata derived from loosely-shaped Jupiter payloads.

use serde::{Deserialize, Serialize};

/// Decimals assumed when upstream omits them (SPL token convention)
pub const DEFAULT_DECIMALS: u8 = 9;

/// Metadata for a single mint, as exposed in the feed's `tokensMap`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub mint: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    #[serde(rename = "logoURI", skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
}

/// A token returned by search, with upstream ranking fields passed through
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenListing {
    pub mint: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    #[serde(rename = "logoURI", skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organic_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holders: Option<u64>,
}

/// First `len` characters of a mint address
pub fn mint_prefix(mint: &str, len: usize) -> String {
    mint.chars().take(len).collect()
}
