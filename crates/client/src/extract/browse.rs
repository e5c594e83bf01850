//! Platform-filtered browse listing, sorted by newest release.

use arcade_core::{Error, GameRecord};
use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::{PageShape, compile, element_text, first_href, first_score, first_text};

const RESULT: &str = r#"[data-testid="filter-results"]"#;
const TITLE_ATTR: &str = "data-title";
const TITLE_SPANS: &str = ".c-finderProductCard_titleHeading span";
const SCORE: &str = ".c-siteReviewScore span";
const LINK: &str = "a";
const RELEASE_DATE: &str = ".c-finderProductCard_meta span";

/// Browse listing filtered to one platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformBrowse;

impl PageShape for PlatformBrowse {
    type Output = Vec<GameRecord>;

    fn name(&self) -> &'static str {
        "platform-browse"
    }

    fn extract(&self, doc: &Html, site: &Url) -> Result<Self::Output, Error> {
        let result = compile(RESULT)?;
        let spans = compile(TITLE_SPANS)?;
        let score = compile(SCORE)?;
        let link = compile(LINK)?;
        let release_date = compile(RELEASE_DATE)?;

        let games = doc
            .select(&result)
            .filter_map(|el| {
                let name = title_of(el, &spans)?;
                let record = GameRecord::new(name, first_score(el, &score), first_href(el, &link, site))?;
                Some(record.with_release_date(first_text(el, &release_date)))
            })
            .collect();

        Ok(games)
    }
}

/// `data-title` on the card, else the heading text.
///
/// The heading leads with a rank span ("1.") so the last non-empty span is
/// the name.
fn title_of(el: ElementRef<'_>, spans: &Selector) -> Option<String> {
    el.value()
        .attr(TITLE_ATTR)
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(str::to_string)
        .or_else(|| el.select(spans).map(element_text).filter(|text| !text.is_empty()).last())
}
