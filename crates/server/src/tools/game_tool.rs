//! game_tool implementation.
//!
//! One entry point that dispatches on `type` to the free games feed or one of
//! the Metacritic scrapes.

use arcade_client::{FreeGamesClient, MetacriticScraper};
use arcade_core::Error;
use rmcp::{ErrorData as McpError, model::*};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::free_game::free_game_impl;
use super::metacritic::{SearchScoreParams, game_impl, new_releases_impl, search_impl, switch2_impl};

/// Which game tool to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum GameToolKind {
    /// Get free Epic or Steam games.
    #[serde(rename = "freeGame_epic")]
    FreeGameEpic,
    /// Fetch new game releases and scores from Metacritic.
    #[serde(rename = "newGame_metacritic")]
    NewGameMetacritic,
    /// Search for a game and its score on Metacritic (needs `keyword`).
    #[serde(rename = "search_metacritic")]
    SearchMetacritic,
    /// Fetch new Nintendo Switch 2 releases; present them sorted by date.
    #[serde(rename = "newGame_switch2")]
    NewGameSwitch2,
    /// Title and score from one Metacritic game page (needs `url`).
    #[serde(rename = "game_metacritic")]
    GameMetacritic,
}

/// Input parameters for game_tool.
///
/// Example: `{ "type": "search_metacritic", "keyword": "cyberpunk" }`
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GameToolParams {
    /// Select the type of game tool to use.
    #[serde(rename = "type")]
    pub kind: GameToolKind,

    /// Required for search_metacritic. The game name or keyword to search for.
    #[serde(default)]
    pub keyword: Option<String>,

    /// Required for game_metacritic. Full URL of a Metacritic game page.
    #[serde(default)]
    pub url: Option<String>,
}

/// Implementation of game_tool.
pub async fn game_tool_impl(
    scraper: &MetacriticScraper, free_games: &FreeGamesClient, params: GameToolParams,
) -> Result<CallToolResult, McpError> {
    tracing::debug!(kind = ?params.kind, "game_tool called");

    match params.kind {
        GameToolKind::FreeGameEpic => free_game_impl(free_games).await,
        GameToolKind::NewGameMetacritic => new_releases_impl(scraper).await,
        GameToolKind::NewGameSwitch2 => switch2_impl(scraper).await,
        GameToolKind::SearchMetacritic => {
            let keyword = params
                .keyword
                .ok_or_else(|| Error::InvalidInput("keyword is required for search_metacritic".into()))?;
            search_impl(scraper, SearchScoreParams { keyword }).await
        }
        GameToolKind::GameMetacritic => {
            let url = params
                .url
                .ok_or_else(|| Error::InvalidInput("url is required for game_metacritic".into()))?;
            game_impl(scraper, &url).await
        }
    }
}
