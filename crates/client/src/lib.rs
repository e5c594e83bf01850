//! Client code for mcp-games.
//!
//! This crate provides the retrying page fetcher, the per-layout record
//! extractors, the Metacritic scraper that composes them, and the free games
//! feed client.

pub mod extract;
pub mod fetch;
pub mod freegames;
pub mod metacritic;

pub use extract::{DetailPage, NewReleasesCarousel, PageShape, PlatformBrowse, SearchResults, extract_page};
pub use fetch::{Backoff, FetchConfig, PageFetcher, PageSource};
pub use freegames::FreeGamesClient;
pub use metacritic::{MetacriticScraper, SWITCH_2};
