//! Single-attempt HTTP GET for one page.
//!
//! `HttpClient` is the production [`PageFetcher`]; tests and alternative
//! transports plug in through the same trait.

use crate::acquisition::charset;
use crate::config::Config;
use crate::error::{AnalysisError, Result};
use async_trait::async_trait;
use std::time::Instant;
use tracing::{debug, warn};
use url::Url;

/// A successfully fetched and decoded page.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// The URL the request was issued for.
    pub requested_url: Url,
    /// Where the request ended up after redirects.
    pub final_url: Url,
    /// HTTP status code (always 2xx).
    pub status: u16,
    /// Raw Content-Type header, if any.
    pub content_type: Option<String>,
    /// Body decoded to text.
    pub body: String,
}

/// Fetch one page. Implementations must not retry.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage>;
}

/// reqwest-backed fetcher with a fixed timeout, User-Agent and redirect cap.
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Build a client from configuration.
    pub fn new(config: &Config) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpClient {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage> {
        let start = Instant::now();
        debug!(url = %url, "fetch starting");

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "request failed");
            AnalysisError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "non-success status");
            return Err(AnalysisError::HttpStatus {
                code: status.as_u16(),
            });
        }

        let final_url = response.url().clone();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let bytes = response.bytes().await.map_err(|e| {
            warn!(url = %url, error = %e, "reading body failed");
            AnalysisError::from(e)
        })?;
        let body = charset::decode_body(&bytes, content_type.as_deref());

        debug!(
            url = %url,
            final_url = %final_url,
            bytes = bytes.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "fetch complete"
        );

        Ok(FetchedPage {
            requested_url: url.clone(),
            final_url,
            status: status.as_u16(),
            content_type,
            body,
        })
    }
}
