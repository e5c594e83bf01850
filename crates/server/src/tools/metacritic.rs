//! Metacritic tool implementations.
//!
//! Scrape failures are not tool errors: the scraper's `None` is rendered as
//! `null` inside a normal text result.

use arcade_client::MetacriticScraper;
use arcade_core::{Error, GameRecord};
use rmcp::{ErrorData as McpError, model::*};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const NEW_RELEASES_LABEL: &str = "New game releases";
pub const SEARCH_LABEL: &str = "Search results";
pub const GAME_LABEL: &str = "Game";

/// Input parameters for search_game_metacritic_score tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SearchScoreParams {
    /// The game name or keyword to search for.
    pub keyword: String,
}

/// `"{label}: {json}"`, with `null` for a failed scrape.
pub fn render_games(label: &str, games: Option<&[GameRecord]>) -> String {
    let json = serde_json::to_string(&games).unwrap_or_else(|_| "null".to_string());
    format!("{label}: {json}")
}

fn text_result(text: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text)])
}

/// New releases carousel.
pub async fn new_releases_impl(scraper: &MetacriticScraper) -> Result<CallToolResult, McpError> {
    let games = scraper.new_releases().await;
    Ok(text_result(render_games(NEW_RELEASES_LABEL, games.as_deref())))
}

/// Newest Switch 2 releases.
pub async fn switch2_impl(scraper: &MetacriticScraper) -> Result<CallToolResult, McpError> {
    let games = scraper.new_switch2_releases().await;
    Ok(text_result(render_games(NEW_RELEASES_LABEL, games.as_deref())))
}

/// Keyword search.
pub async fn search_impl(scraper: &MetacriticScraper, params: SearchScoreParams) -> Result<CallToolResult, McpError> {
    if params.keyword.trim().is_empty() {
        return Err(Error::InvalidInput("keyword cannot be empty".into()).into());
    }

    let games = scraper.search(&params.keyword).await;
    Ok(text_result(render_games(SEARCH_LABEL, games.as_deref())))
}

/// Single game page.
pub async fn game_impl(scraper: &MetacriticScraper, url: &str) -> Result<CallToolResult, McpError> {
    if url.trim().is_empty() {
        return Err(Error::InvalidInput("url cannot be empty".into()).into());
    }

    let games = scraper.game(url).await;
    Ok(text_result(render_games(GAME_LABEL, games.as_deref())))
}
