use crate::config::ScraperConfig;
use crate::error::{Result, ScrapeError};
use crate::model::{SearchEnvelope, SearchRecord};
use log::debug;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

#[derive(Serialize)]
struct PageRequest {
    pn: u32,
}

/// Client for the paginated recipe search API.
///
/// One POST per page, no retries: a failure is reported to the caller, which
/// decides whether to skip the page.
pub struct SearchClient {
    endpoint: String,
    client: Client,
}

impl SearchClient {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36")
            .build()?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn from_config(config: &ScraperConfig) -> Result<Self> {
        Self::new(
            config.api_url.clone(),
            Some(Duration::from_secs(config.timeout)),
        )
    }

    /// Fetch the records of one results page.
    pub async fn fetch_page(&self, page: u32) -> Result<Vec<SearchRecord>> {
        debug!("POST {} page {}", self.endpoint, page);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&PageRequest { pn: page })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ScrapeError::Status(response.status()));
        }

        let body = response.text().await?;
        let envelope: SearchEnvelope = serde_json::from_str(&body)?;
        debug!(
            "Page {} returned {} results",
            page,
            envelope.response.results.len()
        );
        Ok(envelope.response.results)
    }
}
