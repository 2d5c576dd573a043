//! Content domain entities
//!
//! VRFD content records flattened out of the cooking-tokens payload,
//! plus the paginated feed page handed back to HTTP callers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::TokenMetadata;

/// Author used for records Jupiter generates itself (summaries, news)
pub const JUPITER_AUTHOR: &str = "jupiter";

/// Author used when upstream gives nothing usable
pub const UNKNOWN_AUTHOR: &str = "unknown";

/// Kind of content record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    #[default]
    Text,
    Tweet,
    Summary,
    News,
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentKind::Text => write!(f, "text"),
            ContentKind::Tweet => write!(f, "tweet"),
            ContentKind::Summary => write!(f, "summary"),
            ContentKind::News => write!(f, "news"),
        }
    }
}

impl std::str::FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(ContentKind::Text),
            "tweet" => Ok(ContentKind::Tweet),
            "summary" => Ok(ContentKind::Summary),
            "news" => Ok(ContentKind::News),
            _ => Err(format!("Unknown content type: {}", s)),
        }
    }
}

/// Moderation status. Everything served by VRFD is already approved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentStatus {
    #[default]
    Approved,
}

/// A single normalized content record
///
/// Wire names follow the shape the web client already consumes
/// (`type`, `content`, `submittedBy`, `source`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub id: String,
    pub mint: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    #[serde(rename = "content")]
    pub body: String,
    #[serde(rename = "submittedBy")]
    pub author: String,
    #[serde(rename = "source", skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    pub citations: Vec<String>,
    pub status: ContentStatus,
    pub created_at: String,
    pub updated_at: String,
}

/// Type filter requested by the caller
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeFilter {
    /// No filtering
    #[default]
    All,
    /// Keep only records of this kind
    Kind(ContentKind),
    /// A type no record can have; matches nothing
    Unmatched(String),
}

impl TypeFilter {
    /// Parse the `type` query parameter. Absent or `all` disables filtering.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => TypeFilter::All,
            Some(s) if s.eq_ignore_ascii_case("all") => TypeFilter::All,
            Some(s) => match s.parse::<ContentKind>() {
                Ok(kind) => TypeFilter::Kind(kind),
                Err(_) => TypeFilter::Unmatched(s.to_string()),
            },
        }
    }

    /// Whether records of `kind` pass the filter
    pub fn matches(&self, kind: ContentKind) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Kind(k) => *k == kind,
            TypeFilter::Unmatched(_) => false,
        }
    }
}

impl std::fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeFilter::All => write!(f, "all"),
            TypeFilter::Kind(kind) => write!(f, "{}", kind),
            TypeFilter::Unmatched(raw) => write!(f, "{}", raw),
        }
    }
}

/// One page of the merged content feed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPage {
    pub data: Vec<ContentRecord>,
    pub has_more: bool,
    pub tokens_map: BTreeMap<String, TokenMetadata>,
}
