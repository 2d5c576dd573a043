//! Content handlers
//!
//! Endpoints serving the normalized VRFD content feed.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::domain::entities::{ContentRecord, FeedPage, TypeFilter};
use crate::error::AppError;
use crate::AppState;

const CONTENT_FETCH_FAILED: &str = "Failed to fetch content";

/// Query params for GET /api/content
///
/// Kept as raw strings so a malformed `page` falls back instead of
/// rejecting the request.
#[derive(Debug, Deserialize)]
pub struct ContentFeedParams {
    pub page: Option<String>,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
}

/// Query params for GET /api/content/tokens
#[derive(Debug, Deserialize)]
pub struct TokenContentParams {
    /// Comma-separated mint addresses
    #[serde(default)]
    pub mints: String,
}

/// Page number from the query string: 1 when absent or unparseable,
/// and never below 1
pub fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|p| p.trim().parse::<i64>().ok())
        .map(|p| p.clamp(1, i64::from(u32::MAX)) as u32)
        .unwrap_or(1)
}

/// GET /api/content
///
/// One page (50 records) of the content feed built from trending tokens.
/// `?page=N` is 1-based; `?type=` filters by record type (`all` by default).
pub async fn get_content_feed(
    State(state): State<AppState>,
    Query(params): Query<ContentFeedParams>,
) -> Result<Json<FeedPage>, AppError> {
    let page = parse_page(params.page.as_deref());
    let filter = TypeFilter::parse(params.content_type.as_deref());

    let feed = state
        .content_service
        .get_content_feed(page, &filter)
        .await
        .map_err(AppError::upstream(CONTENT_FETCH_FAILED))?;

    Ok(Json(feed))
}

/// GET /api/content/tokens
///
/// All content for the given mints (`?mints=a,b`), unpaginated.
pub async fn get_token_content(
    State(state): State<AppState>,
    Query(params): Query<TokenContentParams>,
) -> Result<Json<Vec<ContentRecord>>, AppError> {
    let mints: Vec<String> = params.mints.split(',').map(str::to_string).collect();

    let records = state
        .content_service
        .get_content(&mints)
        .await
        .map_err(AppError::upstream(CONTENT_FETCH_FAILED))?;

    Ok(Json(records))
}
