//! Field resolvers for loosely-shaped Jupiter payloads
//!
//! Upstream items name the same field several ways and mix value types.
//! Each resolver takes the raw JSON value, tries an ordered list of
//! candidate keys, and falls back to a fixed default. None of them fail.

use serde_json::Value;

use crate::domain::entities::{mint_prefix, ContentKind, DEFAULT_DECIMALS, UNKNOWN_AUTHOR};

/// First candidate key holding a non-empty string
///
/// Empty strings count as absent, so `""` under `name` still falls
/// through to `symbol`.
pub fn first_str<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| value.get(*key).and_then(Value::as_str))
        .find(|s| !s.is_empty())
}

/// First candidate key holding a non-empty trimmed string
fn first_text(value: &Value, keys: &[&str]) -> Option<String> {
    let raw = first_str(value, keys)?;
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub fn resolve_mint(item: &Value) -> Option<&str> {
    first_str(item, &["mint"])
}

/// `name`, else `symbol`, else the first 8 characters of the mint
pub fn resolve_name(item: &Value, mint: &str) -> String {
    first_str(item, &["name", "symbol"])
        .map(str::to_string)
        .unwrap_or_else(|| mint_prefix(mint, 8))
}

/// `symbol`, else the first 4 characters of the mint
pub fn resolve_symbol(item: &Value, mint: &str) -> String {
    first_str(item, &["symbol"])
        .map(str::to_string)
        .unwrap_or_else(|| mint_prefix(mint, 4))
}

/// Non-negative integer `decimals`, numeric strings included; else 9
pub fn resolve_decimals(item: &Value) -> u8 {
    let decimals = match item.get("decimals") {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    };

    decimals
        .and_then(|d| u8::try_from(d).ok())
        .unwrap_or(DEFAULT_DECIMALS)
}

pub fn resolve_logo(item: &Value) -> Option<String> {
    first_str(item, &["logoURI", "icon", "image"]).map(str::to_string)
}

/// Body text of a free-form entry: `content`, else `text`, trimmed
///
/// Returns `None` when the resolved body is blank.
pub fn resolve_body(entry: &Value) -> Option<String> {
    first_text(entry, &["content", "text"])
}

/// Body of an AI summary object: `summaryFull`, else `summaryShort`, trimmed
pub fn resolve_summary_body(summary: &Value) -> Option<String> {
    first_text(summary, &["summaryFull", "summaryShort"])
}

/// Author of a free-form entry
///
/// `submittedBy` may be a user object (`username` is used) or a plain name.
pub fn resolve_author(entry: &Value) -> String {
    let author = match entry.get("submittedBy") {
        Some(user @ Value::Object(_)) => first_str(user, &["username"]),
        Some(Value::String(name)) if !name.is_empty() => Some(name.as_str()),
        _ => None,
    };

    author.unwrap_or(UNKNOWN_AUTHOR).to_string()
}

/// `contentType`, else `type`, else text. Unrecognized kinds read as text.
pub fn resolve_kind(entry: &Value) -> ContentKind {
    first_str(entry, &["contentType", "type"])
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_default()
}

/// Upstream id: `contentId`, else `id`. Numeric ids are stringified.
pub fn resolve_content_id(entry: &Value) -> Option<String> {
    ["contentId", "id"]
        .iter()
        .find_map(|key| match entry.get(*key) {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        })
}

/// `url`, else `source`
pub fn resolve_source_url(entry: &Value) -> Option<String> {
    first_str(entry, &["url", "source"]).map(str::to_string)
}

/// String entries of `citations`, in order; anything else is dropped
pub fn resolve_citations(value: &Value) -> Vec<String> {
    value
        .get("citations")
        .and_then(Value::as_array)
        .map(|citations| {
            citations
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// First candidate timestamp key, else `now`
pub fn resolve_timestamp(value: &Value, keys: &[&str], now: &str) -> String {
    first_str(value, keys).unwrap_or(now).to_string()
}
