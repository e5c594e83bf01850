//! Unified error types for mcp-games.
//!
//! Scrape failures never leave the orchestrator; these errors surface to MCP
//! clients only from input validation and the JSON passthrough tools.

use rmcp::model::{ErrorCode, ErrorData as McpError};

/// Unified error types for the mcp-games server.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid input parameters (e.g., empty search keyword).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// Invalid URL.
    #[error("INVALID_URL: {0}")]
    InvalidUrl(String),

    /// A single attempt failed with a transport error or non-2xx status.
    #[error("HTTP_ERROR: {0}")]
    HttpError(String),

    /// A single attempt timed out.
    #[error("FETCH_TIMEOUT: {0}")]
    FetchTimeout(String),

    /// Every attempt against the URL failed.
    #[error("FETCH_EXHAUSTED: failed to fetch {url} after {attempts} attempts: {reason}")]
    FetchExhausted { url: String, attempts: u32, reason: String },

    /// A CSS selector failed to compile.
    #[error("SELECTOR_INVALID: {0}")]
    Selector(String),

    /// Upstream returned a body that could not be decoded.
    #[error("UPSTREAM_INVALID: {0}")]
    UpstreamInvalid(String),
}

impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        let (code, message) = match &err {
            Error::InvalidInput(msg) => (-32602, msg.clone()),
            Error::InvalidUrl(msg) => (-32003, msg.clone()),
            Error::FetchTimeout(msg) => (-32006, msg.clone()),
            Error::HttpError(msg) => (-32008, msg.clone()),
            Error::FetchExhausted { .. } => (-32013, err.to_string()),
            Error::Selector(msg) => (-32000, msg.clone()),
            Error::UpstreamInvalid(msg) => (-32014, msg.clone()),
        };

        McpError { code: ErrorCode(code), message: message.into(), data: None }
    }
}
