//! VRFD Feed API Server
//!
//! Aggregates Jupiter's loosely-typed token and VRFD content endpoints into a
//! stable, paginated content feed. Uses hexagonal (ports & adapters)
//! architecture so the normalizer never touches the network.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::JupiterClient;
use app::{ContentService, TokenService};
use config::Config;
use domain::ports::TokenDataClient;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub content_service: Arc<ContentService<dyn TokenDataClient>>,
    pub token_service: Arc<TokenService<dyn TokenDataClient>>,
}

impl AppState {
    pub fn new(client: Arc<dyn TokenDataClient>) -> Self {
        Self {
            content_service: Arc::new(ContentService::new(client.clone())),
            token_service: Arc::new(TokenService::new(client)),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router with all routes and middleware
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/content", get(handlers::get_content_feed))
        .route("/api/content/tokens", get(handlers::get_token_content))
        .route("/api/tokens/search", get(handlers::search_tokens))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,vrfd_feed_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting VRFD feed API...");

    // Load configuration
    let config = Config::from_env();
    if !config.has_api_key() {
        tracing::warn!("JUPITER_API_KEY not set, using keyless Jupiter tier");
    }

    // Create adapters
    let jupiter: Arc<dyn TokenDataClient> = Arc::new(JupiterClient::new(
        config.jupiter_api_url.clone(),
        config.jupiter_api_key.clone(),
    ));

    let app = router(AppState::new(jupiter));

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
