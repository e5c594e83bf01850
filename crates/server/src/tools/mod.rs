//! MCP tool implementations.
//!
//! This module contains all tools exposed by the mcp-games server.

pub mod free_game;
pub mod game_tool;
pub mod metacritic;

#[cfg(test)]
pub(crate) mod fixtures {
    use std::collections::HashMap;
    use std::sync::Arc;

    use arcade_client::{FreeGamesClient, MetacriticScraper, PageSource};
    use arcade_core::Error;
    use rmcp::model::CallToolResult;
    use url::Url;

    /// Fixed pages keyed by URL; anything else fails like an exhausted fetch.
    #[derive(Default)]
    pub struct StaticPages {
        pages: HashMap<String, String>,
    }

    impl StaticPages {
        pub fn with(mut self, url: &str, body: &str) -> Self {
            self.pages.insert(url.to_string(), body.to_string());
            self
        }
    }

    #[async_trait::async_trait]
    impl PageSource for StaticPages {
        async fn fetch(&self, url: &Url) -> Result<String, Error> {
            self.pages.get(url.as_str()).cloned().ok_or_else(|| Error::FetchExhausted {
                url: url.to_string(),
                attempts: 3,
                reason: "HTTP_ERROR: status 503".into(),
            })
        }
    }

    pub fn scraper(pages: StaticPages) -> MetacriticScraper {
        MetacriticScraper::new(Arc::new(pages), Url::parse("https://www.metacritic.com").unwrap())
    }

    pub fn free_games(pages: StaticPages) -> FreeGamesClient {
        FreeGamesClient::new(Arc::new(pages), Url::parse("https://api.tangdouz.com/a/steam.php?return=json").unwrap())
    }

    pub fn result_text(result: &CallToolResult) -> String {
        result.content[0].as_text().map(|t| t.text.clone()).unwrap_or_default()
    }
}
