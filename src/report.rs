// src/report.rs
// =============================================================================
// A ready-made observer that writes down every visit.
//
// Each visited page becomes a CrawlRecord with its HTTP status, a
// classification (ok / redirect / broken / error / no response) and the
// page it was linked from. When the crawl ends, the records are handed back
// in visit order.
//
// Rust concepts:
// - Enums with data: Redirect(String) carries the redirect target
// - serde: #[derive(Serialize)] turns the records into JSON
// =============================================================================

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::crawl::CrawlObserver;
use crate::fetch::FetchOutcome;
use crate::url::Url;

/// How a visited page turned out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "target", rename_all = "snake_case")]
pub enum PageOutcome {
    /// 2xx
    Ok,
    /// 3xx, with the `Location` header if there was one
    Redirect(Option<String>),
    /// 404 Not Found or 410 Gone
    Broken,
    /// Any other status (5xx, 403, ...)
    Error,
    /// The request got no response at all
    NoResponse,
}

impl PageOutcome {
    // HTTP status codes:
    // - 200-299: Success
    // - 300-399: Redirect
    // - 404/410: Definitely broken
    // - anything else: some other error
    pub fn classify(response: Option<&FetchOutcome>) -> Self {
        let Some(response) = response else {
            return PageOutcome::NoResponse;
        };

        let code = response.status.as_u16();
        if response.is_success() {
            PageOutcome::Ok
        } else if response.is_redirect() {
            PageOutcome::Redirect(response.location().map(str::to_string))
        } else if code == 404 || code == 410 {
            PageOutcome::Broken
        } else {
            PageOutcome::Error
        }
    }
}

/// One visited page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlRecord {
    /// The page that was visited
    pub url: String,
    /// The page it was found on (absent for the base URL)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// The HTTP status, if a response arrived
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(flatten)]
    pub outcome: PageOutcome,
}

impl CrawlRecord {
    /// Ok and Redirect count as fine
    pub fn is_ok(&self) -> bool {
        matches!(self.outcome, PageOutcome::Ok | PageOutcome::Redirect(_))
    }
}

/// Collects a [`CrawlRecord`] for every visited page.
#[derive(Debug, Default)]
pub struct CrawlReport {
    records: Vec<CrawlRecord>,
}

impl CrawlReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[CrawlRecord] {
        &self.records
    }
}

impl CrawlObserver for CrawlReport {
    type Output = Vec<CrawlRecord>;

    fn will_crawl(&mut self, _url: &Url) {}

    fn has_been_crawled(
        &mut self,
        url: &Url,
        response: Option<&FetchOutcome>,
        parent_url: Option<&Url>,
    ) {
        let record = CrawlRecord {
            url: url.to_string(),
            parent: parent_url.map(Url::to_string),
            status: response.map(|r| r.status.as_u16()),
            outcome: PageOutcome::classify(response),
        };
        info!(url = %record.url, status = ?record.status, "crawled");
        self.records.push(record);
    }

    fn finished_crawling(&mut self) -> Vec<CrawlRecord> {
        std::mem::take(&mut self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderValue, LOCATION};
    use reqwest::StatusCode;

    #[test]
    fn test_classify() {
        let ok = FetchOutcome::new(StatusCode::OK, "");
        assert_eq!(PageOutcome::classify(Some(&ok)), PageOutcome::Ok);

        let mut moved = FetchOutcome::new(StatusCode::FOUND, "");
        moved.headers.insert(LOCATION, HeaderValue::from_static("/login"));
        assert_eq!(
            PageOutcome::classify(Some(&moved)),
            PageOutcome::Redirect(Some("/login".to_string()))
        );

        let gone = FetchOutcome::new(StatusCode::GONE, "");
        assert_eq!(PageOutcome::classify(Some(&gone)), PageOutcome::Broken);

        let boom = FetchOutcome::new(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(PageOutcome::classify(Some(&boom)), PageOutcome::Error);

        assert_eq!(PageOutcome::classify(None), PageOutcome::NoResponse);
    }

    #[test]
    fn test_report_collects_records() {
        let base = Url::parse("https://example.com/").unwrap();
        let page = Url::parse("https://example.com/a").unwrap();
        let not_found = FetchOutcome::new(StatusCode::NOT_FOUND, "");

        let mut report = CrawlReport::new();
        report.will_crawl(&base);
        report.has_been_crawled(&base, Some(&FetchOutcome::new(StatusCode::OK, "")), None);
        report.has_been_crawled(&page, Some(&not_found), Some(&base));
        assert_eq!(report.records().len(), 2);

        let records = report.finished_crawling();
        assert!(records[0].is_ok());
        assert_eq!(records[0].parent, None);
        assert!(!records[1].is_ok());
        assert_eq!(records[1].status, Some(404));
        assert_eq!(records[1].parent.as_deref(), Some("https://example.com/"));
    }

    #[test]
    fn test_record_json() {
        let record = CrawlRecord {
            url: "https://example.com/old".to_string(),
            parent: Some("https://example.com/".to_string()),
            status: Some(301),
            outcome: PageOutcome::Redirect(Some("https://example.com/new".to_string())),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["outcome"], "redirect");
        assert_eq!(json["target"], "https://example.com/new");
        assert_eq!(json["status"], 301);

        let record = CrawlRecord {
            url: "https://example.com/".to_string(),
            parent: None,
            status: None,
            outcome: PageOutcome::NoResponse,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["outcome"], "no_response");
        assert!(json.get("parent").is_none());
    }
}
