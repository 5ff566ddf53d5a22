// src/crawl/profile.rs
// =============================================================================
// A crawl profile decides which addresses are eligible to be visited.
//
// It is a single yes/no question, so any closure `Fn(&Url) -> bool` is a
// profile. CrawlAllUrls, the default, says yes to everything.
// =============================================================================

use crate::url::Url;

/// Decides whether a candidate address may be visited.
///
/// Must be a pure predicate: no I/O, no side effects.
pub trait CrawlProfile {
    fn should_crawl(&self, url: &Url) -> bool;
}

/// The default profile: every address is eligible.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrawlAllUrls;

impl CrawlProfile for CrawlAllUrls {
    fn should_crawl(&self, _url: &Url) -> bool {
        true
    }
}

impl<F> CrawlProfile for F
where
    F: Fn(&Url) -> bool,
{
    fn should_crawl(&self, url: &Url) -> bool {
        self(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crawl_all_urls() {
        let url = Url::parse("https://example.com/anything").unwrap();
        assert!(CrawlAllUrls.should_crawl(&url));
    }

    #[test]
    fn test_closure_profile() {
        let only_docs = |url: &Url| url.path().map_or(false, |path| path.starts_with("/docs"));
        assert!(only_docs.should_crawl(&Url::parse("https://example.com/docs/intro").unwrap()));
        assert!(!only_docs.should_crawl(&Url::parse("https://example.com/blog").unwrap()));
    }
}
