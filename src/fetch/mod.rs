// src/fetch/mod.rs
// =============================================================================
// This module talks to the outside world on behalf of the crawler.
//
// Submodules:
// - http: Issues GET requests with reqwest (the default transport)
// - html: Pulls anchor href values out of an HTML page with scraper
//
// The crawler only ever sees the Fetcher trait, so tests (or embedders) can
// swap in their own transport without touching the traversal code.
//
// Rust concepts:
// - Traits: Describe behaviour that different types can implement
// - impl Future in traits: lets implementors simply write `async fn fetch`
// =============================================================================

mod html;
mod http;

use std::future::Future;

use reqwest::header::{HeaderMap, LOCATION};
use reqwest::StatusCode;

pub use html::extract_anchor_hrefs;
pub use http::{HttpConfig, HttpFetcher};

/// What came back from one GET request.
///
/// Any response counts, including 3xx/4xx/5xx: those are outcomes to report,
/// not failures.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl FetchOutcome {
    /// An outcome with no headers, handy for canned responses.
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        FetchOutcome {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn is_redirect(&self) -> bool {
        self.status.is_redirection()
    }

    /// The redirect target from the `Location` header, if any.
    pub fn location(&self) -> Option<&str> {
        self.headers.get(LOCATION).and_then(|v| v.to_str().ok())
    }
}

/// The transport used by the crawler.
///
/// Returns `None` only when no response was received at all (DNS failure,
/// refused connection, timeout...). Implementations must not panic on
/// transport errors; they turn them into `None`.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Option<FetchOutcome>> + Send;
}

impl<T: Fetcher> Fetcher for &T {
    fn fetch(&self, url: &str) -> impl Future<Output = Option<FetchOutcome>> + Send {
        (**self).fetch(url)
    }
}
