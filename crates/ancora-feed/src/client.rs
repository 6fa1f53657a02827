//! Price-data API client implementation.

use std::env;
use std::time::Duration;

use ancora_core::{DateWindow, PriceSeries, Symbol};
use reqwest::Client;

use crate::{Result, error::FeedError, types::PricesPayload};

/// Base URL used when `STOCK_API_BASE` is not set.
const DEFAULT_BASE_URL: &str = "https://stockdata-api-6xok.onrender.com";

/// Per-request timeout; the upstream can be slow to cold-start.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the stock price-data service.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl FeedClient {
    /// Create a new client for the given base URL.
    ///
    /// Trailing slashes are trimmed so endpoint paths can be joined
    /// uniformly.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: None,
        }
    }

    /// Attach a bearer token sent as `Authorization: Bearer ...`.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Create a client from `STOCK_API_BASE` and `STOCK_API_KEY`.
    ///
    /// This will also load from a `.env` file if present. Both variables are
    /// optional: the base URL falls back to the public deployment and the
    /// key is simply omitted when unset.
    #[must_use]
    pub fn from_env() -> Self {
        // Try to load .env file (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url =
            env::var("STOCK_API_BASE").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let mut feed = Self::new(base_url);
        if let Ok(key) = env::var("STOCK_API_KEY")
            && !key.is_empty()
        {
            feed = feed.with_api_key(key);
        }
        feed
    }

    /// The base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full URL for an endpoint path.
    fn url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.base_url)
    }

    /// Make a GET request and parse the JSON response.
    async fn get<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = self.url(endpoint);
        let mut request = self.client.get(&url).timeout(REQUEST_TIMEOUT);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(FeedError::Api(format!("HTTP {status}: {text}")));
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| {
            FeedError::Json(serde_json::Error::io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Failed to parse: {e}. Response: {text}"),
            )))
        })
    }

    /// Fetch daily closing prices for several symbols in one request.
    ///
    /// Symbols are uppercased and comma-joined; the window bounds are sent
    /// as inclusive `from`/`to` dates. Tickers the service does not know may
    /// simply be absent from the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the service answers with a
    /// non-success status, or the body matches neither known shape.
    pub async fn daily_closes(
        &self,
        symbols: &[Symbol],
        window: DateWindow,
    ) -> Result<PriceSeries> {
        let joined = symbols
            .iter()
            .map(|s| s.to_uppercase())
            .collect::<Vec<_>>()
            .join(",");
        let endpoint = format!(
            "v1/prices?symbols={joined}&from={}&to={}",
            window.from.format("%Y-%m-%d"),
            window.to.format("%Y-%m-%d")
        );
        let payload: PricesPayload = self.get(&endpoint).await?;
        Ok(payload.into_series())
    }
}
