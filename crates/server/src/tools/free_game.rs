//! get_free_game tool implementation.
//!
//! Returns the free games feed as compact JSON text.

use arcade_client::FreeGamesClient;
use rmcp::{ErrorData as McpError, model::*};

/// Implementation of the get_free_game tool.
pub async fn free_game_impl(client: &FreeGamesClient) -> Result<CallToolResult, McpError> {
    let feed = client.fetch().await?;
    Ok(CallToolResult::success(vec![Content::text(feed.to_string())]))
}
