use std::env;

#[derive(Clone)]
pub struct Config {
    /// Jupiter API key, sent as `x-api-key`. Empty means unauthenticated tier.
    pub jupiter_api_key: String,
    pub jupiter_api_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            jupiter_api_key: env::var("JUPITER_API_KEY").unwrap_or_default(),
            jupiter_api_url: env::var("JUPITER_API_URL")
                .unwrap_or_else(|_| "https://api.jup.ag".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Check if a Jupiter API key is configured
    pub fn has_api_key(&self) -> bool {
        !self.jupiter_api_key.is_empty()
    }
}
