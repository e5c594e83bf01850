//! Record extraction from server-rendered ratings pages.
//!
//! Each supported page layout is a `PageShape`: a set of named selectors plus
//! a routine that walks the parsed document and emits `GameRecord`s in
//! document order.
//!
//! ### Shared rules
//! - Containers without a non-empty title are skipped.
//! - Scores come from the first matching score element only and are absent
//!   (never zero) when blank or non-numeric.
//! - Missing links degrade to an empty string.
//! - All text is trimmed, nothing else is normalized.
//!
//! ### Layout drift
//! - Missing containers give an empty list, except the new-releases carousel
//!   which reports `None` so callers can tell a moved carousel from an empty
//!   listing.

pub mod browse;
pub mod carousel;
pub mod detail;
pub mod search;

pub use browse::PlatformBrowse;
pub use carousel::NewReleasesCarousel;
pub use detail::DetailPage;
pub use search::SearchResults;

use arcade_core::{Error, parse_score};
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::fetch::resolve_href;

/// A page layout that can be turned into records.
pub trait PageShape {
    /// What a successful walk produces.
    type Output;

    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    /// Walk a parsed document. `site` is the root relative links resolve against.
    fn extract(&self, doc: &Html, site: &Url) -> Result<Self::Output, Error>;
}

/// Parse markup and run a shape over it.
pub fn extract_page<S: PageShape>(shape: &S, html: &str, site: &Url) -> Result<S::Output, Error> {
    let doc = Html::parse_document(html);
    shape.extract(&doc, site)
}

/// Compile a CSS selector.
pub(crate) fn compile(css: &str) -> Result<Selector, Error> {
    Selector::parse(css).map_err(|e| Error::Selector(format!("{css}: {e}")))
}

/// Trimmed text content of an element.
pub(crate) fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Trimmed text of the first match under `scope`, `None` when blank.
pub(crate) fn first_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    scope
        .select(selector)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty())
}

/// Score read from the first match under `scope`.
pub(crate) fn first_score(scope: ElementRef<'_>, selector: &Selector) -> Option<u8> {
    scope
        .select(selector)
        .next()
        .map(element_text)
        .and_then(|text| parse_score(&text))
}

/// Resolved href of the first match under `scope`, empty when none.
pub(crate) fn first_href(scope: ElementRef<'_>, selector: &Selector, site: &Url) -> String {
    scope
        .select(selector)
        .next()
        .and_then(|el| el.value().attr("href"))
        .and_then(|href| resolve_href(site, href))
        .unwrap_or_default()
}
