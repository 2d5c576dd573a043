//! Mock implementations of port traits
//!
//! In-memory token data client returning canned payloads, with a record of
//! what was requested so tests can verify upstream calls.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, RwLock};

use crate::domain::ports::TokenDataClient;
use crate::error::JupiterError;

// ============================================================================
// Mock Token Data Client
// ============================================================================

#[derive(Default)]
pub struct MockTokenDataClient {
    cooking: Value,
    content: Value,
    search: Value,
    should_fail: bool,
    /// Mint lists passed to `fetch_content`, in call order
    pub requested_mints: Arc<RwLock<Vec<Vec<String>>>>,
    /// Queries passed to `search_tokens`, in call order
    pub search_queries: Arc<RwLock<Vec<String>>>,
}

impl MockTokenDataClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with a 500 from upstream
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Configure the cooking-tokens response
    pub fn with_cooking(mut self, payload: Value) -> Self {
        self.cooking = payload;
        self
    }

    /// Configure the content-by-mints response
    pub fn with_content(mut self, payload: Value) -> Self {
        self.content = payload;
        self
    }

    /// Configure the search response
    pub fn with_search(mut self, payload: Value) -> Self {
        self.search = payload;
        self
    }

    fn respond(&self, payload: &Value) -> Result<Value, JupiterError> {
        if self.should_fail {
            return Err(JupiterError::Api {
                status: 500,
                message: "Mock failure".to_string(),
            });
        }
        Ok(payload.clone())
    }
}

#[async_trait]
impl TokenDataClient for MockTokenDataClient {
    async fn fetch_cooking_tokens(&self) -> Result<Value, JupiterError> {
        self.respond(&self.cooking)
    }

    async fn fetch_content(&self, mints: &[String]) -> Result<Value, JupiterError> {
        self.requested_mints.write().unwrap().push(mints.to_vec());
        self.respond(&self.content)
    }

    async fn search_tokens(&self, query: &str) -> Result<Value, JupiterError> {
        self.search_queries.write().unwrap().push(query.to_string());
        self.respond(&self.search)
    }
}
