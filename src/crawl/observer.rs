// src/crawl/observer.rs
// =============================================================================
// The observer is how the outside world learns what the crawler is doing.
//
// For every address the crawler visits, in this order:
//   1. will_crawl         - right before the request goes out
//   2. has_been_crawled   - once the request has resolved (with or without
//                           a response)
// and once at the very end:
//   3. finished_crawling  - its return value becomes the result of the crawl
//
// All three are called synchronously from the traversal. An observer that
// wants to do slow work should hand it off rather than block here.
// =============================================================================

use crate::fetch::FetchOutcome;
use crate::url::Url;

/// Receives lifecycle callbacks from a crawl.
pub trait CrawlObserver {
    /// Returned from [`Crawler::start`](crate::Crawler::start).
    type Output;

    /// Called immediately before `url` is fetched.
    fn will_crawl(&mut self, url: &Url);

    /// Called exactly once per visited address.
    ///
    /// `response` is `None` when the transport got no response at all.
    /// `parent_url` is `None` only for the base address.
    fn has_been_crawled(
        &mut self,
        url: &Url,
        response: Option<&FetchOutcome>,
        parent_url: Option<&Url>,
    );

    /// Called exactly once, after the traversal has ended.
    fn finished_crawling(&mut self) -> Self::Output;
}

impl<O: CrawlObserver + ?Sized> CrawlObserver for &mut O {
    type Output = O::Output;

    fn will_crawl(&mut self, url: &Url) {
        (**self).will_crawl(url)
    }

    fn has_been_crawled(
        &mut self,
        url: &Url,
        response: Option<&FetchOutcome>,
        parent_url: Option<&Url>,
    ) {
        (**self).has_been_crawled(url, response, parent_url)
    }

    fn finished_crawling(&mut self) -> Self::Output {
        (**self).finished_crawling()
    }
}
