// src/fetch/html.rs
// =============================================================================
// This module pulls anchor hrefs out of HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Unlike a link checker, we return the hrefs exactly as written: no
// resolution, no filtering, no de-duplication. Deciding what a link points
// to is the crawler's job.
// =============================================================================

use scraper::{Html, Selector};

/// Returns the raw `href` of every `<a>` element, in document order.
///
/// ```
/// let hrefs = site_crawler::fetch::extract_anchor_hrefs(r#"<a href="/a">A</a><a href="/a">again</a>"#);
/// assert_eq!(hrefs, vec!["/a", "/a"]);
/// ```
pub fn extract_anchor_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    // Constant selector, known to be valid
    let selector = Selector::parse("a[href]").unwrap();

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_in_document_order() {
        let html = r#"
            <a href="/a">A</a>
            <p><a href="//example.com/b">B</a></p>
            <a href="https://other.com/c">C</a>
            <a href="mailto:x@y.com">Mail</a>
        "#;
        let hrefs = extract_anchor_hrefs(html);
        assert_eq!(
            hrefs,
            vec!["/a", "//example.com/b", "https://other.com/c", "mailto:x@y.com"]
        );
    }

    #[test]
    fn test_keeps_duplicates_and_raw_values() {
        let html = r#"<a href="../up#frag">1</a><a href="../up#frag">2</a>"#;
        assert_eq!(extract_anchor_hrefs(html), vec!["../up#frag", "../up#frag"]);
    }

    #[test]
    fn test_skips_anchors_without_href() {
        let html = r#"<a name="top">Top</a><a href="">Empty</a><link href="/style.css">"#;
        assert_eq!(extract_anchor_hrefs(html), vec![""]);
    }

    #[test]
    fn test_not_html() {
        assert!(extract_anchor_hrefs("{\"json\": true}").is_empty());
    }
}
