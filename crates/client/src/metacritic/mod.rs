//! Metacritic scraper.
//!
//! Composes page fetch, HTML parse and shape extraction into one call per
//! page type. Every failure along the way is logged and collapses to `None`,
//! so callers only ever see `None`, an empty list, or records.

use std::sync::Arc;

use arcade_core::{AppConfig, Error, GameRecord};
use url::Url;

use crate::extract::{DetailPage, NewReleasesCarousel, PageShape, PlatformBrowse, SearchResults, extract_page};
use crate::fetch::{FetchConfig, PageFetcher, PageSource, join_path, parse_page_url, search_url};

/// Platform slug for Nintendo Switch 2 browse listings.
pub const SWITCH_2: &str = "nintendo-switch-2";

const NEW_RELEASES_PATH: &str = "game";
const BROWSE_PATH: &str = "browse/game/";

/// Scraper for Metacritic game pages.
#[derive(Clone)]
pub struct MetacriticScraper {
    source: Arc<dyn PageSource>,
    site: Url,
}

impl MetacriticScraper {
    /// Create a scraper reading pages from `source`, with relative links
    /// resolved against `site`.
    pub fn new(source: Arc<dyn PageSource>, site: Url) -> Self {
        Self { source, site }
    }

    /// Build a scraper with its own fetcher from application config.
    pub fn from_config(config: &AppConfig) -> Result<Self, Error> {
        let site = parse_page_url(&config.base_url)?;
        let fetcher = PageFetcher::new(FetchConfig::from(config))?;
        Ok(Self::new(Arc::new(fetcher), site))
    }

    /// Search results for `keyword`.
    pub async fn search(&self, keyword: &str) -> Option<Vec<GameRecord>> {
        let target = search_url(&self.site, keyword).map_err(Error::from);
        self.scrape(target, &SearchResults).await
    }

    /// New releases carousel from the games landing page.
    ///
    /// `None` also covers a missing or empty carousel.
    pub async fn new_releases(&self) -> Option<Vec<GameRecord>> {
        let target = join_path(&self.site, NEW_RELEASES_PATH).map_err(Error::from);
        self.scrape(target, &NewReleasesCarousel).await.flatten()
    }

    /// Newest releases for one platform slug, with release dates.
    pub async fn new_platform_releases(&self, platform: &str) -> Option<Vec<GameRecord>> {
        let target = join_path(&self.site, BROWSE_PATH).map_err(Error::from).map(|mut url| {
            url.query_pairs_mut().append_pair("platform", platform);
            url
        });
        self.scrape(target, &PlatformBrowse).await
    }

    /// Newest Nintendo Switch 2 releases.
    pub async fn new_switch2_releases(&self) -> Option<Vec<GameRecord>> {
        self.new_platform_releases(SWITCH_2).await
    }

    /// Title and score from a single game page; at most one record.
    ///
    /// The record carries the normalized URL that was actually fetched.
    pub async fn game(&self, url: &str) -> Option<Vec<GameRecord>> {
        let target = parse_page_url(url).map_err(Error::from);
        let shape = DetailPage::new(target.as_ref().map(Url::as_str).unwrap_or_default());
        self.scrape(target, &shape).await
    }

    async fn scrape<S>(&self, target: Result<Url, Error>, shape: &S) -> Option<S::Output>
    where
        S: PageShape + Sync,
    {
        let url = match target {
            Ok(url) => url,
            Err(e) => {
                tracing::error!(shape = shape.name(), error = %e, "could not build scrape URL");
                return None;
            }
        };

        let html = match self.source.fetch(&url).await {
            Ok(html) => html,
            Err(e) => {
                tracing::error!(shape = shape.name(), %url, error = %e, "scrape fetch failed");
                return None;
            }
        };

        match extract_page(shape, &html, &self.site) {
            Ok(output) => Some(output),
            Err(e) => {
                tracing::error!(shape = shape.name(), %url, error = %e, "scrape extraction failed");
                None
            }
        }
    }
}
