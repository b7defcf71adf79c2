use std::time::Duration;

use log::debug;
use reqwest::header::{HeaderMap, ACCEPT, ACCEPT_LANGUAGE, CONNECTION, USER_AGENT};

use crate::error::ImportError;

// Recipe sites routinely refuse requests with obvious bot user agents, so
// every fetch presents a fixed desktop-browser header set.
const USER_AGENT_VALUE: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const ACCEPT_VALUE: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const ACCEPT_LANGUAGE_VALUE: &str = "en-US,en;q=0.9";

/// Fetches recipe pages over HTTP
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    /// Build a fetcher. `timeout` bounds each request when given; without it
    /// a request is allowed to run as long as the upstream takes.
    pub fn new(timeout: Option<Duration>) -> Result<Self, ImportError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, USER_AGENT_VALUE.parse()?);
        headers.insert(ACCEPT, ACCEPT_VALUE.parse()?);
        headers.insert(ACCEPT_LANGUAGE, ACCEPT_LANGUAGE_VALUE.parse()?);
        headers.insert(CONNECTION, "keep-alive".parse()?);

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(PageFetcher {
            client: builder.build()?,
        })
    }

    /// Fetch the page body. A non-success status from the target site is
    /// treated as a fetch failure.
    pub async fn fetch(&self, url: &str) -> Result<String, ImportError> {
        debug!("Fetching {url}");
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        debug!("Fetched {} bytes from {url}", body.len());
        Ok(body)
    }
}
