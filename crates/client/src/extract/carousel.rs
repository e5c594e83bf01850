//! New-releases carousel on the games landing page (`/game`).
//!
//! Unlike the listing shapes, a missing carousel or an empty one yields
//! `None` with a warning instead of an empty list.

use arcade_core::{Error, GameRecord};
use scraper::{ElementRef, Html};
use url::Url;

use super::{PageShape, compile, first_href, first_score, first_text};

const CAROUSEL: &str = r#"[data-testid="new-game-release-carousel"]"#;
const CARD: &str = r#"[data-testid="product-card"]"#;
const TITLE: &str = "h3.c-globalProductCard_title";
const SCORE: &str = ".c-siteReviewScore span";
const LINK: &str = "a";

/// The "new game releases" carousel.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewReleasesCarousel;

impl PageShape for NewReleasesCarousel {
    type Output = Option<Vec<GameRecord>>;

    fn name(&self) -> &'static str {
        "new-releases"
    }

    fn extract(&self, doc: &Html, site: &Url) -> Result<Self::Output, Error> {
        let carousel = compile(CAROUSEL)?;
        let card = compile(CARD)?;
        let title = compile(TITLE)?;
        let score = compile(SCORE)?;
        let link = compile(LINK)?;

        if doc.select(&carousel).next().is_none() {
            tracing::warn!(selector = CAROUSEL, "carousel not found");
            return Ok(None);
        }

        // Nested carousel regions must not repeat a card.
        let cards: Vec<ElementRef<'_>> = doc
            .select(&card)
            .filter(|el| el.ancestors().filter_map(ElementRef::wrap).any(|a| carousel.matches(&a)))
            .collect();
        if cards.is_empty() {
            tracing::warn!(selector = CARD, "no product cards found in carousel");
            return Ok(None);
        }

        let games = cards
            .into_iter()
            .filter_map(|el| {
                let name = first_text(el, &title)?;
                GameRecord::new(name, first_score(el, &score), first_href(el, &link, site))
            })
            .collect();

        Ok(Some(games))
    }
}
