//! Search results listing (`/search/{keyword}/`).

use arcade_core::{Error, GameRecord};
use scraper::Html;
use url::Url;

use super::{PageShape, compile, first_score, first_text};
use crate::fetch::resolve_href;

/// One result item; the item itself is the link.
const ITEM: &str = r#"[data-testid="search-result-item"]"#;
const TITLE: &str = r#"[data-testid="product-title"]"#;
const SCORE: &str = r#"[data-testid="product-metascore"] span"#;

/// Search results page.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchResults;

impl PageShape for SearchResults {
    type Output = Vec<GameRecord>;

    fn name(&self) -> &'static str {
        "search"
    }

    fn extract(&self, doc: &Html, site: &Url) -> Result<Self::Output, Error> {
        let item = compile(ITEM)?;
        let title = compile(TITLE)?;
        let score = compile(SCORE)?;

        let games = doc
            .select(&item)
            .filter_map(|el| {
                let url = el
                    .value()
                    .attr("href")
                    .and_then(|href| resolve_href(site, href))
                    .unwrap_or_default();
                GameRecord::new(first_text(el, &title)?, first_score(el, &score), url)
            })
            .collect();

        Ok(games)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_page;

    fn site() -> Url {
        Url::parse("https://www.metacritic.com").unwrap()
    }

    const TWO_RESULTS: &str = r#"
        <html><body>
          <a data-testid="search-result-item" href="/game/portal-2/">
            <p data-testid="product-title"> Portal 2 </p>
            <div data-testid="product-metascore"><span>95</span></div>
          </a>
          <a data-testid="search-result-item" href="/game/unknown/">
            <p data-testid="product-title">   </p>
            <div data-testid="product-metascore"><span>80</span></div>
          </a>
        </body></html>
    "#;

    #[test]
    fn test_drops_items_without_title() {
        let games = extract_page(&SearchResults, TWO_RESULTS, &site()).unwrap();
        assert_eq!(
            games,
            vec![GameRecord {
                title: "Portal 2".into(),
                score: Some(95),
                url: "https://www.metacritic.com/game/portal-2/".into(),
                release_date: None,
            }]
        );
    }

    #[test]
    fn test_missing_container_is_empty_list() {
        let games = extract_page(&SearchResults, "<html><body><p>No results</p></body></html>", &site()).unwrap();
        assert!(games.is_empty());
    }

    #[test]
    fn test_degrades_score_and_url() {
        let html = r#"
            <div data-testid="search-result-item">
              <p data-testid="product-title">Hollow Knight: Silksong</p>
              <div data-testid="product-metascore"><span>tbd</span></div>
            </div>
            <div data-testid="search-result-item">
              <p data-testid="product-title">Celeste</p>
            </div>
        "#;
        let games = extract_page(&SearchResults, html, &site()).unwrap();
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].title, "Hollow Knight: Silksong");
        assert_eq!(games[0].score, None);
        assert_eq!(games[0].url, "");
        assert_eq!(games[1].title, "Celeste");
        assert_eq!(games[1].score, None);
    }

    #[test]
    fn test_preserves_document_order_and_duplicates() {
        let html = r#"
            <a data-testid="search-result-item" href="/game/b/"><p data-testid="product-title">B</p></a>
            <a data-testid="search-result-item" href="/game/a/"><p data-testid="product-title">A</p></a>
            <a data-testid="search-result-item" href="/game/b/"><p data-testid="product-title">B</p></a>
        "#;
        let games = extract_page(&SearchResults, html, &site()).unwrap();
        let titles: Vec<&str> = games.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A", "B"]);
    }

    #[test]
    fn test_same_markup_same_output() {
        let first = extract_page(&SearchResults, TWO_RESULTS, &site()).unwrap();
        let second = extract_page(&SearchResults, TWO_RESULTS, &site()).unwrap();
        assert_eq!(serde_json::to_string(&first).unwrap(), serde_json::to_string(&second).unwrap());
    }
}
