//! Jupiter API client implementation

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use urlencoding::encode;

use crate::domain::ports::TokenDataClient;
use crate::error::JupiterError;

/// Implementation of the Jupiter API client
pub struct JupiterClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl JupiterClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Each mint is encoded on its own so the list separator stays a literal comma
    fn content_path(mints: &[String]) -> String {
        let encoded: Vec<_> = mints.iter().map(|mint| encode(mint)).collect();
        format!("/tokens/v2/content?mints={}", encoded.join(","))
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        // An empty key is still sent; Jupiter treats it as the keyless tier
        if let Ok(value) = HeaderValue::from_str(&self.api_key) {
            headers.insert("x-api-key", value);
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    async fn get_json(&self, path: &str) -> Result<Value, JupiterError> {
        tracing::debug!("GET {}", path);
        let response = self
            .http
            .get(self.api_url(path))
            .headers(self.headers())
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn handle_response(&self, response: reqwest::Response) -> Result<Value, JupiterError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| JupiterError::Deserialization(e.to_string()))
        } else if status.as_u16() == 401 {
            Err(JupiterError::Unauthorized)
        } else if status.as_u16() == 429 {
            Err(JupiterError::RateLimited)
        } else {
            let message = match response.text().await {
                Ok(text) if !text.is_empty() => text,
                _ => status.canonical_reason().unwrap_or_default().to_string(),
            };
            Err(JupiterError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl TokenDataClient for JupiterClient {
    async fn fetch_cooking_tokens(&self) -> Result<Value, JupiterError> {
        self.get_json("/tokens/v2/content/cooking").await
    }

    async fn fetch_content(&self, mints: &[String]) -> Result<Value, JupiterError> {
        self.get_json(&Self::content_path(mints)).await
    }

    async fn search_tokens(&self, query: &str) -> Result<Value, JupiterError> {
        self.get_json(&format!("/tokens/v2/search?query={}", encode(query)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let client = JupiterClient::new("https://api.jup.ag/".to_string(), String::new());
        assert_eq!(
            client.api_url("/tokens/v2/content/cooking"),
            "https://api.jup.ag/tokens/v2/content/cooking"
        );
    }

    #[test]
    fn content_path_joins_mints() {
        let mints = vec!["MintA".to_string(), "MintB".to_string()];
        assert_eq!(
            JupiterClient::content_path(&mints),
            "/tokens/v2/content?mints=MintA,MintB"
        );
    }

    #[test]
    fn content_path_encodes_each_mint() {
        let mints = vec!["MintA&mints=Evil#frag".to_string(), "Mint B".to_string()];
        assert_eq!(
            JupiterClient::content_path(&mints),
            "/tokens/v2/content?mints=MintA%26mints%3DEvil%23frag,Mint%20B"
        );
    }

    #[test]
    fn headers_carry_api_key() {
        let client = JupiterClient::new("https://api.jup.ag".to_string(), "key-123".to_string());
        let headers = client.headers();
        assert_eq!(headers.get("x-api-key").unwrap(), "key-123");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn headers_send_empty_key_when_unconfigured() {
        let client = JupiterClient::new("https://api.jup.ag".to_string(), String::new());
        assert_eq!(client.headers().get("x-api-key").unwrap(), "");
    }
}
