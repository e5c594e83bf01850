//! Core types and shared functionality for mcp-games.
//!
//! This crate provides:
//! - The extracted `GameRecord` type
//! - Unified error types
//! - Configuration structures

pub mod config;
pub mod error;
pub mod record;

pub use config::{AppConfig, BackoffKind, ConfigError};
pub use error::Error;
pub use record::{GameRecord, parse_score};
