//! URL building for scrape targets and link resolution.

/// Error type for URL handling failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum UrlError {
    #[error("empty URL")]
    Empty,

    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<UrlError> for arcade_core::Error {
    fn from(err: UrlError) -> Self {
        arcade_core::Error::InvalidUrl(err.to_string())
    }
}

/// Parse a caller-supplied page URL.
///
/// 1. Trim leading/trailing whitespace
/// 2. Default scheme to https:// if missing
/// 3. Reject anything that is not http(s)
/// 4. Remove fragment (#...)
pub fn parse_page_url(input: &str) -> Result<url::Url, UrlError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(UrlError::Empty);
    }

    let url_str = if trimmed.contains("://") { trimmed.to_string() } else { format!("https://{trimmed}") };

    let mut parsed = url::Url::parse(&url_str).map_err(|e| UrlError::InvalidUrl(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => return Err(UrlError::UnsupportedScheme(scheme.to_string())),
    }

    parsed.set_fragment(None);

    Ok(parsed)
}

/// Append a relative path under `base`, keeping any path prefix `base` has.
pub fn join_path(base: &url::Url, path: &str) -> Result<url::Url, UrlError> {
    let mut root = base.clone();
    if !root.path().ends_with('/') {
        let with_slash = format!("{}/", root.path());
        root.set_path(&with_slash);
    }

    root.join(path.trim_start_matches('/'))
        .map_err(|e| UrlError::InvalidUrl(e.to_string()))
}

/// `{base}/search/{keyword}/` with the keyword percent-encoded as one segment.
pub fn search_url(base: &url::Url, keyword: &str) -> Result<url::Url, UrlError> {
    join_path(base, &format!("search/{}/", urlencoding::encode(keyword)))
}

/// Resolve an href found on a page against the site root.
///
/// Returns `None` when the href cannot form a valid URL.
pub fn resolve_href(base: &url::Url, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    base.join(href).ok().map(|u| u.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> url::Url {
        url::Url::parse("https://www.metacritic.com").unwrap()
    }

    #[test]
    fn test_parse_page_url_basic() {
        let url = parse_page_url("https://www.metacritic.com/game/portal-2/").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.path(), "/game/portal-2/");
    }

    #[test]
    fn test_parse_page_url_default_scheme() {
        let url = parse_page_url("www.metacritic.com/game/hades/").unwrap();
        assert_eq!(url.as_str(), "https://www.metacritic.com/game/hades/");
    }

    #[test]
    fn test_parse_page_url_removes_fragment_keeps_query() {
        let url = parse_page_url("  https://example.com/page?a=1#reviews  ").unwrap();
        assert_eq!(url.as_str(), "https://example.com/page?a=1");
    }

    #[test]
    fn test_parse_page_url_rejects() {
        assert!(matches!(parse_page_url(""), Err(UrlError::Empty)));
        assert!(matches!(parse_page_url("   "), Err(UrlError::Empty)));
        assert!(matches!(parse_page_url("file:///etc/passwd"), Err(UrlError::UnsupportedScheme(_))));
        assert!(matches!(parse_page_url("https://"), Err(UrlError::InvalidUrl(_))));
    }

    #[test]
    fn test_join_path_root() {
        let url = join_path(&base(), "game").unwrap();
        assert_eq!(url.as_str(), "https://www.metacritic.com/game");
    }

    #[test]
    fn test_join_path_keeps_prefix() {
        let mirror = url::Url::parse("http://127.0.0.1:8080/mirror").unwrap();
        let url = join_path(&mirror, "/game").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/mirror/game");
    }

    #[test]
    fn test_search_url_encodes_keyword() {
        let url = search_url(&base(), "portal 2").unwrap();
        assert_eq!(url.as_str(), "https://www.metacritic.com/search/portal%202/");
    }

    #[test]
    fn test_search_url_encodes_reserved_characters() {
        let url = search_url(&base(), "a/b?c#d&e").unwrap();
        assert_eq!(url.as_str(), "https://www.metacritic.com/search/a%2Fb%3Fc%23d%26e/");
    }

    #[test]
    fn test_search_url_encodes_unicode() {
        let url = search_url(&base(), "塞尔达").unwrap();
        assert_eq!(url.path(), "/search/%E5%A1%9E%E5%B0%94%E8%BE%BE/");
    }

    #[test]
    fn test_resolve_href_relative() {
        assert_eq!(resolve_href(&base(), "/game/zelda"), Some("https://www.metacritic.com/game/zelda".into()));
    }

    #[test]
    fn test_resolve_href_absolute() {
        assert_eq!(resolve_href(&base(), "https://other.com/x"), Some("https://other.com/x".into()));
    }

    #[test]
    fn test_resolve_href_blank() {
        assert_eq!(resolve_href(&base(), "  "), None);
    }
}
