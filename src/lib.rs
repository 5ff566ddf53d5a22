// src/lib.rs
// =============================================================================
// site-crawler: visit every page reachable from a starting URL on one host.
//
// The pieces:
// - url:    the address type (parse, classify, rewrite, print)
// - crawl:  the depth-first traversal plus its two extension points,
//           CrawlProfile (which URLs may be visited) and CrawlObserver
//           (who hears about each visit)
// - fetch:  the HTTP transport and HTML anchor extraction
// - report: a ready-made observer that records every visit
//
// Example:
//
//     use site_crawler::{Crawler, CrawlReport};
//
//     let mut crawler = Crawler::create(CrawlReport::new())?;
//     let records = crawler.start("https://example.com/").await?;
// =============================================================================

pub mod crawl;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod report;
pub mod url;

pub use crawl::{CrawlAllUrls, CrawlObserver, CrawlProfile, Crawler, VisitedSet};
pub use error::{CrawlError, Result};
pub use fetch::{FetchOutcome, Fetcher, HttpConfig, HttpFetcher};
pub use report::{CrawlRecord, CrawlReport, PageOutcome};
pub use crate::url::{IntoUrl, Url};
