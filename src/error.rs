// src/error.rs
// =============================================================================
// Errors returned by the crawler library.
//
// Only structural problems are errors here: an address that cannot be
// parsed, a bad port number, or a relative starting address. A page that
// answers 404, or a request that never gets an answer, is NOT an error - it
// is reported to the observer like any other visit.
//
// Rust concepts:
// - thiserror: derives std::error::Error and Display from attributes
// - Type aliases: crate::Result<T> saves repeating the error type
// =============================================================================

use thiserror::Error;

/// Errors that can occur while building addresses or starting a crawl.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// The raw string could not be split into scheme/host/port/path/query.
    #[error("invalid address '{raw}': {reason}")]
    InvalidAddress { raw: String, reason: String },

    /// A port number that is not a non-negative integer in range.
    #[error("invalid port number '{0}'")]
    InvalidPortNumber(String),

    /// The crawl was started from an address without a host.
    #[error("base url '{0}' must be absolute (scheme and host)")]
    InvalidBaseUrl(String),

    /// The default HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

impl CrawlError {
    pub(crate) fn invalid_address(raw: &str, reason: impl Into<String>) -> Self {
        CrawlError::InvalidAddress {
            raw: raw.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, CrawlError>;
