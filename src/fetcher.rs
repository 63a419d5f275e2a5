use std::future::Future;
use std::time::Instant;

use anyhow::{Context, Result};
use reqwest::StatusCode;
use scraper::Html;
use tracing::{debug, warn};

use crate::config::ScrapeConfig;
use crate::error::FetchError;

/// Source of parsed pages. `None` means the page could not be retrieved.
pub trait FetchDocument {
    fn fetch_document(&self, url: &str) -> impl Future<Output = Option<Html>>;
}

/// Plain GET over reqwest. No retries: a failed page is reported and skipped.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &ScrapeConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }

    async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(response.text().await?)
    }
}

impl FetchDocument for HttpFetcher {
    async fn fetch_document(&self, url: &str) -> Option<Html> {
        let start = Instant::now();
        match self.fetch_html(url).await {
            Ok(body) => {
                debug!(
                    "Fetched {} ({} bytes) in {}ms",
                    url,
                    body.len(),
                    start.elapsed().as_millis()
                );
                Some(Html::parse_document(&body))
            }
            Err(e) => {
                warn!("Fetch failed for {}: {}", url, e);
                None
            }
        }
    }
}
