//! LZT Market API client

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

use super::types::{Listing, ListingsResponse, MarketError};
use crate::config::Config;

/// HTTP client for the listings endpoint
pub struct MarketClient {
    client: Client,
    base_url: String,
    token: String,
}

impl MarketClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.api_token.clone(),
        })
    }

    /// Fetch the Steam listing catalog. One attempt, no retry; callers hold
    /// on to the result for as long as they need it.
    pub async fn fetch_listings(&self) -> Result<Vec<Listing>, MarketError> {
        let url = format!("{}/steam", self.base_url);
        debug!("Fetching Steam listings from: {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            debug!("LZT API error - Status: {}, Body: {}", status, text);
            return Err(MarketError::Api { status });
        }

        let body = response.text().await?;
        let envelope: ListingsResponse =
            serde_json::from_str(&body).map_err(MarketError::Malformed)?;

        info!("Fetched {} Steam listings", envelope.items.len());
        Ok(envelope.items)
    }
}
