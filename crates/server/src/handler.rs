//! MCP server handler implementation.
//!
//! This module defines the main server handler that
//! routes tool calls to the appropriate implementations.
use std::sync::Arc;

use crate::tools::free_game::free_game_impl;
use crate::tools::game_tool::{GameToolParams, game_tool_impl};
use crate::tools::metacritic::{SearchScoreParams, new_releases_impl, search_impl};

use arcade_client::fetch::{ACCEPT_JSON, parse_page_url};
use arcade_client::{FetchConfig, FreeGamesClient, MetacriticScraper, PageFetcher, PageSource};
use arcade_core::{AppConfig, Error};
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};

/// The main MCP server handler for mcp-games.
#[derive(Clone)]
pub struct McpGamesServer {
    scraper: MetacriticScraper,
    free_games: FreeGamesClient,
    tool_router: ToolRouter<Self>,
}

/// Tool router implementation using the #[tool_router] macro.
///
/// This macro generates the routing logic that maps tool names to handler methods.
#[tool_router]
impl McpGamesServer {
    /// Create a server whose sources share one retry policy.
    pub fn new(config: &AppConfig) -> Result<Self, Error> {
        let pages: Arc<dyn PageSource> = Arc::new(PageFetcher::new(FetchConfig::from(config))?);
        let feeds: Arc<dyn PageSource> =
            Arc::new(PageFetcher::new(FetchConfig::from(config).with_accept(ACCEPT_JSON))?);
        let scraper = MetacriticScraper::new(pages, parse_page_url(&config.base_url)?);
        let free_games = FreeGamesClient::new(feeds, parse_page_url(&config.free_games_url)?);
        Ok(Self::with_clients(scraper, free_games))
    }

    /// Create a server around existing clients.
    pub fn with_clients(scraper: MetacriticScraper, free_games: FreeGamesClient) -> Self {
        Self { scraper, free_games, tool_router: Self::tool_router() }
    }

    /// Multi-purpose game tool.
    ///
    /// Dispatches on `type` to the free games feed or a Metacritic scrape.
    #[tool(description = "Multi-purpose game tool for Epic/Steam free games and Metacritic data. \
                          type: freeGame_epic (free Epic/Steam games), \
                          newGame_metacritic (new releases with scores), \
                          search_metacritic (search by keyword; keyword required and non-blank), \
                          newGame_switch2 (new Nintendo Switch 2 releases; sort results by release date), \
                          game_metacritic (one game page; url required and non-blank). \
                          Example: { \"type\": \"search_metacritic\", \"keyword\": \"cyberpunk\" }")]
    async fn game_tool(&self, params: Parameters<GameToolParams>) -> Result<CallToolResult, McpError> {
        game_tool_impl(&self.scraper, &self.free_games, params.0).await
    }

    /// New releases carousel scores.
    #[tool(description = "Fetch the new game releases scores from Metacritic")]
    async fn fetch_metacritic_new_releases(&self) -> Result<CallToolResult, McpError> {
        new_releases_impl(&self.scraper).await
    }

    /// Keyword search with scores.
    #[tool(description = "Search for a game on Metacritic with given keyword and return the score. \
                          The keyword must not be blank; a blank keyword is rejected as invalid params.")]
    async fn search_game_metacritic_score(
        &self, params: Parameters<SearchScoreParams>,
    ) -> Result<CallToolResult, McpError> {
        search_impl(&self.scraper, params.0).await
    }

    /// Current free games feed.
    #[tool(description = "Get the free game from Epic/Steam Games, 获取免费的Epic/Steam喜加一游戏")]
    async fn get_free_game(&self) -> Result<CallToolResult, McpError> {
        free_game_impl(&self.free_games).await
    }
}

impl ServerHandler for McpGamesServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "mcp-games".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::model::ErrorData> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        self.tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
    }
}
