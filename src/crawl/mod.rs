// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Depth-first crawling starting from a base URL
// - Respects same-host restriction (pages on other hosts are visited but
//   never expanded)
// - Every page is visited at most once
// - A pluggable profile decides which URLs are eligible
// - A pluggable observer hears about every visit
//
// Submodules:
// - crawler: the traversal itself
// - links: link extraction and normalization
// - profile / observer: the two extension points
// - visited: the set of already visited pages
// =============================================================================

mod crawler;
mod links;
mod observer;
mod profile;
mod visited;

// Re-export the public API
pub use crawler::Crawler;
pub use links::{extract_links, normalize, LinkPair};
pub use observer::CrawlObserver;
pub use profile::{CrawlAllUrls, CrawlProfile};
pub use visited::VisitedSet;
