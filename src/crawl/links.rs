// src/crawl/links.rs
// =============================================================================
// Turning the anchors on a page into addresses the crawler can visit.
//
// Two steps:
// 1. extract_links: every <a href> on the page, paired with the page it was
//    found on, parsed into a Url
// 2. normalize: fill in what a link leaves out, using the base address
//
// Normalization is intentionally simple. A relative link borrows the base
// address's scheme, host, port AND query, and keeps its own path verbatim:
// "docs/intro" found on https://example.com/blog/ becomes
// https://example.com/docs/intro, not .../blog/docs/intro.
// =============================================================================

use tracing::debug;

use crate::fetch::extract_anchor_hrefs;
use crate::url::Url;

/// A link as found on a page: where it was found and where it points.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkPair {
    pub parent: Url,
    pub child: Url,
}

/// Collects every anchor on `body` in document order.
///
/// Duplicates are kept. Hrefs that cannot be parsed are skipped.
pub fn extract_links(body: &str, parent: &Url) -> Vec<LinkPair> {
    extract_anchor_hrefs(body)
        .into_iter()
        .filter_map(|href| match Url::parse(&href) {
            Ok(child) => Some(LinkPair {
                parent: parent.clone(),
                child,
            }),
            Err(error) => {
                debug!(parent = %parent, %error, "skipping unparseable link");
                None
            }
        })
        .collect()
}

/// Completes `url` using the `base` address and drops its fragment.
///
/// - relative (no host): scheme, host, port and query come from `base`
/// - protocol-independent (no scheme): scheme comes from `base`
pub fn normalize(mut url: Url, base: &Url) -> Url {
    if url.is_relative() {
        url.scheme = base.scheme.clone();
        url.host = base.host.clone();
        url.port = base.port;
        url.query = base.query.clone();
    }

    if url.is_protocol_independent() {
        url.scheme = base.scheme.clone();
    }

    url.without_fragment()
}
