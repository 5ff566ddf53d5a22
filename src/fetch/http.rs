// src/fetch/http.rs
// =============================================================================
// The default transport: plain GET requests with reqwest.
//
// Key functionality:
// - One Client per crawl, so connections and cookies are reused
// - Redirects are NOT followed by default: a 301 is reported as a 301
// - Any response (2xx, 3xx, 4xx, 5xx) is handed back to the crawler
// - Requests that get no response at all are logged and turned into None
//
// Rust concepts:
// - async/await: For network I/O
// - Builder pattern: Client::builder()...build()
// - Enums: To describe why a request failed
// =============================================================================

use std::time::Duration;

use reqwest::{redirect, Client};
use tracing::warn;

use super::{FetchOutcome, Fetcher};
use crate::error::Result;

/// Settings for the HTTP transport.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Per-request timeout
    pub timeout: Duration,
    /// Sent as the User-Agent header
    pub user_agent: String,
    /// Follow 3xx responses (up to 10 hops) instead of reporting them
    pub follow_redirects: bool,
    /// Keep cookies between requests of the same crawl
    pub cookies: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        HttpConfig {
            timeout: Duration::from_secs(10),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            follow_redirects: false,
            cookies: true,
        }
    }
}

/// Fetches pages over HTTP(S) with a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: HttpConfig) -> Result<Self> {
        let redirects = if config.follow_redirects {
            redirect::Policy::limited(10)
        } else {
            redirect::Policy::none()
        };

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .redirect(redirects)
            .cookie_store(config.cookies)
            .build()?;

        Ok(HttpFetcher { client })
    }

    /// Wraps an already configured client.
    pub fn with_client(client: Client) -> Self {
        HttpFetcher { client }
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Option<FetchOutcome> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(error) => {
                let reason = FailureReason::of(&error);
                warn!(url, %reason, %error, "no response");
                return None;
            }
        };

        let status = response.status();
        let headers = response.headers().clone();

        // The status line is already in; a body that breaks off half-way
        // still leaves us with something to report
        let body = match response.text().await {
            Ok(body) => body,
            Err(error) => {
                warn!(url, %error, "failed to read response body");
                String::new()
            }
        };

        Some(FetchOutcome {
            status,
            headers,
            body,
        })
    }
}

/// Why a request produced no response at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FailureReason {
    Timeout,
    TooManyRedirects,
    Dns,
    Tls,
    Connection,
    Other,
}

impl FailureReason {
    // reqwest errors can happen for many reasons - network timeout,
    // DNS resolution failure, SSL certificate issues, redirect loops...
    fn of(error: &reqwest::Error) -> Self {
        // Convert error to string once; the source chain carries the detail
        let error_string = format!("{:?}", error).to_lowercase();

        if error.is_timeout() {
            FailureReason::Timeout
        } else if error.is_redirect() {
            FailureReason::TooManyRedirects
        } else if error_string.contains("certificate") || error_string.contains("tls") {
            FailureReason::Tls
        } else if error.is_connect() {
            // Connection errors often mean DNS issues or host unreachable
            if error_string.contains("dns") {
                FailureReason::Dns
            } else {
                FailureReason::Connection
            }
        } else {
            FailureReason::Other
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            FailureReason::Timeout => "request timed out",
            FailureReason::TooManyRedirects => "too many redirects",
            FailureReason::Dns => "could not resolve hostname",
            FailureReason::Tls => "TLS error",
            FailureReason::Connection => "connection failed",
            FailureReason::Other => "request failed",
        }
    }
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why turn errors into None instead of returning Result?
//    - For a crawler, "the server did not answer" is a normal outcome
//    - The crawler reports it and moves on to the next link
//    - Only the observer needs to know; nothing upstream should abort
//
// 2. Why not follow redirects?
//    - A redirect is interesting information for a site audit
//    - The crawler sees the 3xx and reports it; whether to follow it is the
//      caller's choice (HttpConfig::follow_redirects)
//
// 3. What is cookie_store(true)?
//    - reqwest keeps a cookie jar inside the Client
//    - Sites that set a session cookie on the first page see it again on
//      every following request
//
// 4. What does %reason mean inside warn!?
//    - tracing records the field using its Display implementation
//    - url (without a sigil) is recorded as a plain &str value
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(!config.follow_redirects);
        assert!(config.cookies);
        assert!(config.user_agent.starts_with("site-crawler/"));
    }

    #[test]
    fn test_build_fetcher() {
        assert!(HttpFetcher::new(HttpConfig::default()).is_ok());
        let config = HttpConfig {
            follow_redirects: true,
            cookies: false,
            ..HttpConfig::default()
        };
        assert!(HttpFetcher::new(config).is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_gives_no_response() {
        // Port 9 on localhost ("discard") is closed on any sane test machine
        let fetcher = HttpFetcher::new(HttpConfig {
            timeout: Duration::from_secs(2),
            ..HttpConfig::default()
        })
        .unwrap();
        assert!(fetcher.fetch("http://127.0.0.1:9/").await.is_none());
    }

    #[test]
    fn test_failure_reason_display() {
        assert_eq!(FailureReason::Timeout.to_string(), "request timed out");
        assert_eq!(FailureReason::Dns.to_string(), "could not resolve hostname");
    }
}
