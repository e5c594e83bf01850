//! Single game detail page.

use arcade_core::{Error, GameRecord};
use scraper::Html;
use url::Url;

use super::{PageShape, compile, first_score, first_text};

const TITLE: &str = ".product_title h1";
const SCORE: &str = ".metascore_w.large.game .metascore_anchor";

/// A detail page; the record's URL is the one that was requested.
#[derive(Debug, Clone)]
pub struct DetailPage {
    pub url: String,
}

impl DetailPage {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl PageShape for DetailPage {
    type Output = Vec<GameRecord>;

    fn name(&self) -> &'static str {
        "detail"
    }

    fn extract(&self, doc: &Html, _site: &Url) -> Result<Self::Output, Error> {
        let title = compile(TITLE)?;
        let score = compile(SCORE)?;
        let root = doc.root_element();

        Ok(first_text(root, &title)
            .and_then(|t| GameRecord::new(t, first_score(root, &score), self.url.clone()))
            .into_iter()
            .collect())
    }
}
