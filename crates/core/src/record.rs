//! The record type produced by every page extractor.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Scores outside this range are treated as unparseable.
pub const SCORE_RANGE: std::ops::RangeInclusive<i64> = 0..=100;

/// One game pulled out of a ratings page.
///
/// Only built for containers whose title resolved to non-empty text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    /// Trimmed, non-empty title.
    pub title: String,
    /// Critic score, `null` when missing or unparseable.
    pub score: Option<u8>,
    /// Absolute link to the game page, empty when none was found.
    pub url: String,
    /// Release date label, only present for platform browse listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
}

impl GameRecord {
    /// Build a record, returning `None` when the title is blank.
    pub fn new(title: impl Into<String>, score: Option<u8>, url: impl Into<String>) -> Option<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return None;
        }
        Some(Self { title, score, url: url.into(), release_date: None })
    }

    pub fn with_release_date(mut self, release_date: Option<String>) -> Self {
        self.release_date = release_date;
        self
    }
}

/// Parse score text the way a leading-integer parser would.
///
/// Accepts an optional sign followed by ASCII digits and ignores whatever
/// follows them (`"7.5"` reads as 7). Blank, non-numeric and out-of-range
/// text yields `None`, never zero.
pub fn parse_score(text: &str) -> Option<u8> {
    let trimmed = text.trim();
    let (negative, digits) = match trimmed.as_bytes().first()? {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return None;
    }

    let value: i64 = digits[..end].parse().ok()?;
    let value = if negative { -value } else { value };

    if SCORE_RANGE.contains(&value) { u8::try_from(value).ok() } else { None }
}
