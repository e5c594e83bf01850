//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (MCP_GAMES_*)
//! 2. TOML config file (if MCP_GAMES_CONFIG_FILE set)
//! 3. Built-in defaults

use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Delay strategy applied between failed fetch attempts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackoffKind {
    /// Same pause (`delay_ms`) before every retry.
    #[default]
    Fixed,
    /// Pause starts at `delay_ms` and doubles per retry.
    Exponential,
}

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (MCP_GAMES_*)
/// 2. TOML config file (if MCP_GAMES_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Site root that scrape paths are appended to.
    ///
    /// Set via MCP_GAMES_BASE_URL environment variable.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// JSON endpoint listing current free Epic/Steam games.
    ///
    /// Set via MCP_GAMES_FREE_GAMES_URL environment variable.
    #[serde(default = "default_free_games_url")]
    pub free_games_url: String,

    /// User-Agent string for HTTP requests.
    ///
    /// Set via MCP_GAMES_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-attempt HTTP timeout in milliseconds.
    ///
    /// Set via MCP_GAMES_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum number of fetch attempts per page.
    ///
    /// Set via MCP_GAMES_RETRIES environment variable.
    #[serde(default = "default_retries")]
    pub retries: u32,

    /// Pause between failed attempts in milliseconds.
    ///
    /// Set via MCP_GAMES_DELAY_MS environment variable.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Retry delay strategy.
    ///
    /// Set via MCP_GAMES_BACKOFF environment variable (`fixed` or `exponential`).
    #[serde(default)]
    pub backoff: BackoffKind,
}

fn default_base_url() -> String {
    "https://www.metacritic.com".into()
}

fn default_free_games_url() -> String {
    "https://api.tangdouz.com/a/steam.php?return=json".into()
}

fn default_user_agent() -> String {
    "mcp-games/0.1".into()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_retries() -> u32 {
    3
}

fn default_delay_ms() -> u64 {
    1_000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            free_games_url: default_free_games_url(),
            user_agent: default_user_agent(),
            timeout_ms: default_timeout_ms(),
            retries: default_retries(),
            delay_ms: default_delay_ms(),
            backoff: BackoffKind::default(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Retry delay as Duration.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `MCP_GAMES_`
    /// 2. TOML file from `MCP_GAMES_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("MCP_GAMES_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("MCP_GAMES_")
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        );

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }
}
