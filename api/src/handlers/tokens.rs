//! Token handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::domain::entities::TokenListing;
use crate::error::AppError;
use crate::AppState;

/// Query params for GET /api/tokens/search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// GET /api/tokens/search
///
/// Search tokens by name, symbol, or mint. A blank `q` returns `[]`.
pub async fn search_tokens(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<TokenListing>>, AppError> {
    let tokens = state
        .token_service
        .search(&params.q)
        .await
        .map_err(AppError::upstream("Search failed"))?;

    Ok(Json(tokens))
}
