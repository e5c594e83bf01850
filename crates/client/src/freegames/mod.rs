//! Free Epic/Steam games feed.
//!
//! The upstream already returns JSON, so the body is only checked to be JSON
//! and handed back untouched.

use std::sync::Arc;

use arcade_core::{AppConfig, Error};
use url::Url;

use crate::fetch::{ACCEPT_JSON, FetchConfig, PageFetcher, PageSource, parse_page_url};

/// Client for the free games JSON endpoint.
#[derive(Clone)]
pub struct FreeGamesClient {
    source: Arc<dyn PageSource>,
    url: Url,
}

impl FreeGamesClient {
    pub fn new(source: Arc<dyn PageSource>, url: Url) -> Self {
        Self { source, url }
    }

    /// Build a client with its own fetcher from application config.
    pub fn from_config(config: &AppConfig) -> Result<Self, Error> {
        let url = parse_page_url(&config.free_games_url)?;
        let fetcher = PageFetcher::new(FetchConfig::from(config).with_accept(ACCEPT_JSON))?;
        Ok(Self::new(Arc::new(fetcher), url))
    }

    /// Fetch the current list of free games.
    pub async fn fetch(&self) -> Result<serde_json::Value, Error> {
        let body = self.source.fetch(&self.url).await?;
        serde_json::from_str(&body)
            .map_err(|e| Error::UpstreamInvalid(format!("free games response is not JSON: {}", e)))
    }
}
