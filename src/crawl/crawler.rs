// src/crawl/crawler.rs
// =============================================================================
// This module walks a website depth-first, starting from one base address.
//
// How it works:
// 1. Put the base address on a stack
// 2. Pop an address; skip it if the profile rejects it or it was visited
// 3. Tell the observer, fetch the page, tell the observer again
// 4. If the page is on the base host, collect its links, normalize them,
//    and push the eligible ones (last link first, so the first link is
//    popped next)
// 5. Repeat until the stack is empty, then ask the observer for the result
//
// Pages on other hosts are visited and reported, but their links are never
// followed. Nothing limits depth or page count except reachability and the
// profile.
//
// Rust concepts:
// - Vec as a stack: push/pop from the end gives depth-first order
// - Generics: the crawler works with any Fetcher and any CrawlObserver
// - Box<dyn Trait>: the profile can be any type chosen at runtime
// =============================================================================

use tracing::{debug, info};

use super::links::{extract_links, normalize};
use super::observer::CrawlObserver;
use super::profile::{CrawlAllUrls, CrawlProfile};
use super::visited::VisitedSet;
use crate::error::{CrawlError, Result};
use crate::fetch::{Fetcher, HttpConfig, HttpFetcher};
use crate::url::{IntoUrl, Url};

// An address waiting to be visited, and the page it was found on
// (None for the base address)
#[derive(Debug)]
struct Pending {
    url: Url,
    parent: Option<Url>,
}

/// Recursively visits every page reachable from a base address on the same host.
pub struct Crawler<F, O> {
    fetcher: F,
    observer: O,
    profile: Box<dyn CrawlProfile + Send + Sync>,
    crawled: VisitedSet,
}

impl<O: CrawlObserver> Crawler<HttpFetcher, O> {
    /// A crawler using the default HTTP transport: no redirect following,
    /// cookies kept for the whole crawl.
    pub fn create(observer: O) -> Result<Self> {
        Ok(Crawler::new(HttpFetcher::new(HttpConfig::default())?, observer))
    }
}

impl<F: Fetcher, O: CrawlObserver> Crawler<F, O> {
    pub fn new(fetcher: F, observer: O) -> Self {
        Crawler {
            fetcher,
            observer,
            profile: Box::new(CrawlAllUrls),
            crawled: VisitedSet::new(),
        }
    }

    /// Replaces the crawl profile (the default crawls everything).
    pub fn with_profile(mut self, profile: impl CrawlProfile + Send + Sync + 'static) -> Self {
        self.profile = Box::new(profile);
        self
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Addresses visited by the most recent crawl, in visit order.
    pub fn crawled_urls(&self) -> &VisitedSet {
        &self.crawled
    }

    /// Crawls everything reachable from `base_url` and returns whatever the
    /// observer's `finished_crawling` returns.
    ///
    /// Fails before any request is made if `base_url` cannot be parsed or
    /// has no host.
    pub async fn start(&mut self, base_url: impl IntoUrl) -> Result<O::Output> {
        let base_url = base_url.into_url()?;

        if base_url.is_relative() {
            return Err(CrawlError::InvalidBaseUrl(base_url.to_string()));
        }

        let base_url = base_url.without_fragment();

        self.crawled = VisitedSet::new();

        info!(base = %base_url, "starting crawl");

        let mut stack = vec![Pending {
            url: base_url.clone(),
            parent: None,
        }];

        while let Some(Pending { url, parent }) = stack.pop() {
            let Some(links) = self.visit(&url, parent.as_ref(), &base_url).await else {
                continue;
            };

            // Reverse so the first link on the page is the next one popped
            stack.extend(links.into_iter().rev());
        }

        info!(pages = self.crawled.len(), "crawl finished");

        Ok(self.observer.finished_crawling())
    }

    // Visits one address. Returns the links to follow from it, or None when
    // the page was skipped or is not expanded.
    async fn visit(&mut self, url: &Url, parent: Option<&Url>, base_url: &Url) -> Option<Vec<Pending>> {
        if !self.profile.should_crawl(url) {
            debug!(%url, "rejected by crawl profile");
            return None;
        }

        let address = url.to_string();

        if self.crawled.contains(&address) {
            debug!(%url, "already crawled");
            return None;
        }

        self.observer.will_crawl(url);

        info!(%url, "crawling");
        let response = self.fetcher.fetch(&address).await;

        self.observer.has_been_crawled(url, response.as_ref(), parent);

        self.crawled.insert(address);

        let response = response?;

        if url.host() != base_url.host() {
            debug!(%url, "not expanding page on another host");
            return None;
        }

        Some(self.links_on_page(&response.body, url, base_url))
    }

    // extract -> drop mailto -> normalize both ends -> filter by profile
    fn links_on_page(&self, body: &str, page: &Url, base_url: &Url) -> Vec<Pending> {
        extract_links(body, page)
            .into_iter()
            .filter(|pair| !pair.child.is_email_address())
            .map(|pair| Pending {
                parent: Some(normalize(pair.parent, base_url)),
                url: normalize(pair.child, base_url),
            })
            .filter(|pending| self.profile.should_crawl(&pending.url))
            .collect()
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a stack instead of recursion?
//    - Each recursive call would add a stack frame; a site with a very
//      long chain of links could overflow the thread's stack
//    - An explicit Vec lives on the heap and can grow as needed
//    - Pushing a page's links in reverse and popping from the end visits
//      them in exactly the order recursion would: first link first, and
//      all of its descendants before the second link
//
// 2. Why check "already crawled" when popping instead of when pushing?
//    - The same link can be pushed twice before either copy is visited
//    - Checking at visit time guarantees each address is fetched once
//      and reported once, no matter how many pages link to it
//
// 3. What is let ... else?
//    - let Some(x) = expr else { ... }; binds x or runs the else block,
//      which must leave the current scope (continue, return, ...)
//
// 4. What does response? do in a function returning Option?
//    - If response is None, the function returns None right there
//    - Just like ? on a Result, but for Option
// -----------------------------------------------------------------------------
