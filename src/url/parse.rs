// src/url/parse.rs
// =============================================================================
// Splits a raw address string into its components.
//
// Two kinds of input:
// - Anything with a scheme ("https://...", "mailto:...") or an authority
//   ("//cdn.example.com/x") is handed to the `url` crate, which validates the
//   host and port the way a browser does
// - Everything else ("/docs", "page.html", "?page=2") has no host to
//   validate, so we only cut off the query and fragment ourselves
//
// Nothing is resolved here; that happens during normalization in the crawler.
//
// Rust concepts:
// - split_once: splits a &str at the first match, returning Option<(&str, &str)>
// - Matching on error variants: RelativeUrlWithoutBase is not a failure for us
// =============================================================================

use ::url::ParseError;

use crate::error::{CrawlError, Result};

// Placeholder scheme used to let the `url` crate parse "//host/path"
const AUTHORITY_ONLY_SCHEME: &str = "http:";

/// The raw components of one address, before defaults are applied.
#[derive(Debug, Default, PartialEq)]
pub(super) struct Parts {
    pub scheme: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub path: Option<String>,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

/// Splits `raw` (already trimmed) into its components.
pub(super) fn split(raw: &str) -> Result<Parts> {
    if raw.chars().any(|c| c.is_ascii_control()) {
        return Err(CrawlError::invalid_address(raw, "contains control characters"));
    }

    // Protocol-independent: borrow a scheme for parsing, then forget it
    if raw.starts_with("//") {
        let parsed = ::url::Url::parse(&format!("{}{}", AUTHORITY_ONLY_SCHEME, raw))
            .map_err(|e| CrawlError::invalid_address(raw, e.to_string()))?;
        return Ok(Parts {
            scheme: None,
            ..from_parsed(&parsed)
        });
    }

    match ::url::Url::parse(raw) {
        Ok(parsed) => Ok(from_parsed(&parsed)),
        Err(ParseError::RelativeUrlWithoutBase) => Ok(split_relative(raw)),
        Err(e) => Err(CrawlError::invalid_address(raw, e.to_string())),
    }
}

fn from_parsed(parsed: &::url::Url) -> Parts {
    Parts {
        scheme: Some(parsed.scheme().to_string()),
        host: parsed.host_str().and_then(non_empty),
        port: parsed.port(),
        path: non_empty(parsed.path()),
        query: parsed.query().map(str::to_string),
        fragment: parsed.fragment().and_then(non_empty),
    }
}

// "path?query#fragment", all parts optional
fn split_relative(raw: &str) -> Parts {
    let (rest, fragment) = match raw.split_once('#') {
        Some((before, fragment)) => (before, non_empty(fragment)),
        None => (raw, None),
    };
    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query.to_string())),
        None => (rest, None),
    };

    Parts {
        path: non_empty(path),
        query,
        fragment,
        ..Parts::default()
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
