//! HTTP page fetcher with bounded retries.
//!
//! ### Attempts
//! - Up to `retries` GETs per page; the first 2xx body wins.
//! - Transport errors, timeouts, non-2xx statuses and unreadable bodies all
//!   count as failed attempts.
//!
//! ### Delay
//! - A `Backoff` pause follows every failed attempt except the last.
//! - Fixed 1s by default, no jitter.
//!
//! ### Exhaustion
//! - After the last failure the caller gets `Error::FetchExhausted` carrying
//!   the URL, the attempt count and the last cause.

pub mod backoff;
pub mod url;

use std::time::{Duration, Instant};

use arcade_core::{AppConfig, Error};
use reqwest::{Client, header};

/// Accept header for scraped pages.
pub const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Accept header for JSON feeds.
pub const ACCEPT_JSON: &str = "application/json";

pub use self::url::{UrlError, join_path, parse_page_url, resolve_href, search_url};
pub use backoff::Backoff;

/// Configuration for the page fetcher.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// User agent string (default: "mcp-games/0.1")
    pub user_agent: String,

    /// Per-attempt timeout (default: 10s)
    pub timeout: Duration,

    /// Maximum number of attempts (default: 3)
    pub retries: u32,

    /// Pause schedule between attempts (default: fixed 1s)
    pub backoff: Backoff,

    /// Accept header sent with every request (default: HTML)
    pub accept: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "mcp-games/0.1".to_string(),
            timeout: Duration::from_millis(10_000),
            retries: 3,
            backoff: Backoff::default(),
            accept: ACCEPT_HTML.to_string(),
        }
    }
}

impl From<&AppConfig> for FetchConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            timeout: config.timeout(),
            retries: config.retries,
            backoff: Backoff::from_kind(config.backoff, config.delay()),
            accept: ACCEPT_HTML.to_string(),
        }
    }
}

impl FetchConfig {
    /// Same policy with a different Accept header.
    pub fn with_accept(mut self, accept: &str) -> Self {
        self.accept = accept.to_string();
        self
    }
}

/// Anything that can turn a URL into page text.
///
/// The extraction pipeline only depends on this, so tests and alternate
/// transports can stand in for the network.
#[async_trait::async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the full body of `url` as text.
    async fn fetch(&self, url: &::url::Url) -> Result<String, Error>;
}

/// reqwest-backed page fetcher with retry.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    http: Client,
    config: FetchConfig,
}

impl PageFetcher {
    /// Create a new fetcher with the given configuration.
    pub fn new(config: FetchConfig) -> Result<Self, Error> {
        let http = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .map_err(|e| Error::HttpError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// One GET, no retry.
    async fn fetch_once(&self, url: &::url::Url) -> Result<String, Error> {
        let response = self
            .http
            .get(url.as_str())
            .header(header::ACCEPT, &self.config.accept)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::FetchTimeout(format!("{}ms elapsed", self.config.timeout.as_millis()))
                } else {
                    Error::HttpError(format!("network error: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpError(format!("status {}", status.as_u16())));
        }

        response
            .text()
            .await
            .map_err(|e| Error::HttpError(format!("failed to read response: {}", e)))
    }
}

#[async_trait::async_trait]
impl PageSource for PageFetcher {
    async fn fetch(&self, url: &::url::Url) -> Result<String, Error> {
        let start = Instant::now();
        let attempts = self.config.retries.max(1);
        let mut last_error = None;

        for attempt in 1..=attempts {
            match self.fetch_once(url).await {
                Ok(body) => {
                    tracing::debug!(
                        "fetched {} in {}ms ({} bytes, attempt {}/{})",
                        url,
                        start.elapsed().as_millis(),
                        body.len(),
                        attempt,
                        attempts
                    );
                    return Ok(body);
                }
                Err(e) => {
                    tracing::debug!(%url, attempt, attempts, error = %e, "fetch attempt failed");
                    last_error = Some(e);
                    if attempt < attempts {
                        tokio::time::sleep(self.config.backoff.delay_after(attempt)).await;
                    }
                }
            }
        }

        Err(Error::FetchExhausted {
            url: url.to_string(),
            attempts,
            reason: last_error.map(|e| e.to_string()).unwrap_or_default(),
        })
    }
}
