//! Feed normalizer
//!
//! Turns a raw cooking-tokens payload into one page of the VRFD content
//! feed. Everything here is synchronous and allocation-local: each call
//! builds its own token index and record list, so concurrent requests
//! never observe each other.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use super::resolvers::{
    resolve_author, resolve_body, resolve_citations, resolve_content_id, resolve_decimals,
    resolve_kind, resolve_logo, resolve_mint, resolve_name, resolve_source_url,
    resolve_summary_body, resolve_symbol, resolve_timestamp,
};
use crate::domain::entities::{
    ContentKind, ContentRecord, ContentStatus, FeedPage, TokenMetadata, TypeFilter,
    JUPITER_AUTHOR,
};

/// Records per feed page
pub const PAGE_SIZE: usize = 50;

/// Reduce an upstream response to its list of items
///
/// Accepts a bare array or an object wrapping the array under `data`.
/// Any other shape is treated as an empty payload.
pub fn payload_items(raw: Value) -> Vec<Value> {
    match raw {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Per-pass token index with first-write-wins inserts
#[derive(Debug, Default)]
pub struct TokenIndex {
    tokens: BTreeMap<String, TokenMetadata>,
}

impl TokenIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register metadata unless the mint is already known.
    /// Returns whether the entry was inserted.
    pub fn register(&mut self, metadata: TokenMetadata) -> bool {
        if self.tokens.contains_key(&metadata.mint) {
            return false;
        }
        self.tokens.insert(metadata.mint.clone(), metadata);
        true
    }

    pub fn into_map(self) -> BTreeMap<String, TokenMetadata> {
        self.tokens
    }
}

/// State for a single normalization pass
///
/// Holds the "now" timestamp used for missing dates and the counter
/// behind generated record ids, which only need to be unique per pass.
pub struct Normalizer {
    now: String,
    generated_ids: usize,
}

impl Normalizer {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            generated_ids: 0,
        }
    }

    /// Token metadata for one raw item, or `None` when it has no mint
    pub fn extract_metadata(&self, item: &Value) -> Option<TokenMetadata> {
        let mint = resolve_mint(item)?;

        Some(TokenMetadata {
            mint: mint.to_string(),
            name: resolve_name(item, mint),
            symbol: resolve_symbol(item, mint),
            decimals: resolve_decimals(item),
            logo_uri: resolve_logo(item),
        })
    }

    /// All content records carried by one raw item
    ///
    /// Free-form entries come first in upstream order, then the token
    /// summary, then the news digest.
    pub fn extract_content(&mut self, mint: &str, item: &Value) -> Vec<ContentRecord> {
        let mut records = Vec::new();

        if let Some(entries) = item.get("contents").and_then(Value::as_array) {
            for entry in entries {
                if let Some(record) = self.entry_record(mint, entry) {
                    records.push(record);
                }
            }
        }

        if let Some(summary) = item.get("tokenSummary") {
            records.extend(self.summary_record(mint, summary, ContentKind::Summary));
        }

        if let Some(news) = item.get("newsSummary") {
            records.extend(self.summary_record(mint, news, ContentKind::News));
        }

        records
    }

    fn entry_record(&mut self, mint: &str, entry: &Value) -> Option<ContentRecord> {
        let body = resolve_body(entry)?;
        let id = match resolve_content_id(entry) {
            Some(id) => id,
            None => self.next_id(mint),
        };

        Some(ContentRecord {
            id,
            mint: mint.to_string(),
            kind: resolve_kind(entry),
            body,
            author: resolve_author(entry),
            source_url: resolve_source_url(entry),
            citations: resolve_citations(entry),
            status: ContentStatus::Approved,
            created_at: resolve_timestamp(entry, &["postedAt", "createdAt"], &self.now),
            updated_at: resolve_timestamp(entry, &["updatedAt"], &self.now),
        })
    }

    fn summary_record(
        &self,
        mint: &str,
        summary: &Value,
        kind: ContentKind,
    ) -> Option<ContentRecord> {
        if !summary.is_object() {
            return None;
        }
        let body = resolve_summary_body(summary)?;
        let id = match kind {
            ContentKind::News => format!("{}-news-summary", mint),
            _ => format!("{}-token-summary", mint),
        };
        let updated_at = resolve_timestamp(summary, &["updatedAt"], &self.now);

        Some(ContentRecord {
            id,
            mint: mint.to_string(),
            kind,
            body,
            author: JUPITER_AUTHOR.to_string(),
            source_url: None,
            citations: resolve_citations(summary),
            status: ContentStatus::Approved,
            created_at: updated_at.clone(),
            updated_at,
        })
    }

    fn next_id(&mut self, mint: &str) -> String {
        self.generated_ids += 1;
        format!("{}-content-{}", mint, self.generated_ids)
    }
}

/// Flatten the content of every item that carries a mint, unfiltered
pub fn flatten_content(items: &[Value], now: DateTime<Utc>) -> Vec<ContentRecord> {
    let mut normalizer = Normalizer::new(now);

    items
        .iter()
        .filter_map(|item| resolve_mint(item).map(|mint| (mint, item)))
        .flat_map(|(mint, item)| normalizer.extract_content(mint, item))
        .collect()
}

/// Build one page of the content feed from raw cooking-token items
pub fn assemble(items: &[Value], page: u32, filter: &TypeFilter) -> FeedPage {
    assemble_at(items, page, filter, Utc::now())
}

/// [`assemble`] with an explicit clock, for reproducible output
pub fn assemble_at(
    items: &[Value],
    page: u32,
    filter: &TypeFilter,
    now: DateTime<Utc>,
) -> FeedPage {
    let mut normalizer = Normalizer::new(now);
    let mut tokens = TokenIndex::new();
    let mut merged = Vec::new();

    for item in items {
        let Some(mint) = resolve_mint(item) else {
            tracing::debug!("Skipping cooking item without a mint");
            continue;
        };

        if let Some(metadata) = normalizer.extract_metadata(item) {
            tokens.register(metadata);
        }

        merged.extend(
            normalizer
                .extract_content(mint, item)
                .into_iter()
                .filter(|record| filter.matches(record.kind)),
        );
    }

    let (data, has_more) = paginate(merged, page);
    let tokens_map = tokens.into_map();
    tracing::debug!(
        "Assembled feed page {} (type={}): {} records, {} tokens, has_more={}",
        page.max(1),
        filter,
        data.len(),
        tokens_map.len(),
        has_more
    );

    FeedPage {
        data,
        has_more,
        tokens_map,
    }
}

/// Slice one 1-based page out of `records`. Page 0 reads as page 1.
fn paginate(records: Vec<ContentRecord>, page: u32) -> (Vec<ContentRecord>, bool) {
    let page = page.max(1) as usize;
    let start = (page - 1).saturating_mul(PAGE_SIZE);
    let end = page.saturating_mul(PAGE_SIZE);
    let has_more = end < records.len();

    let data = records.into_iter().skip(start).take(PAGE_SIZE).collect();
    (data, has_more)
}
