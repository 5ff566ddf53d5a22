// src/url/mod.rs
// =============================================================================
// The address type used by the crawler.
//
// Why not use url::Url directly?
// - url::Url can only hold absolute URLs, but links found on a page are often
//   relative ("/docs") or protocol-independent ("//cdn.example.com/x")
// - The crawler needs to ask "is this relative?" BEFORE resolving it, and it
//   resolves links in its own (deliberately simple) way
// So the `url` crate validates whatever has a scheme or a host (see parse.rs),
// and this type keeps the pieces, including the missing ones.
//
// The canonical string form is always:
//
//     scheme://host[:port]/path[?query]
//
// Port 80 is never written, the fragment is never written, and exactly one
// '/' separates the host from the path. Two addresses are "the same page"
// for the crawler when their canonical strings are equal.
//
// Rust concepts:
// - Display: gives us .to_string() for free
// - FromStr / TryFrom: standard conversion traits, so "...".parse::<Url>() works
// =============================================================================

mod parse;

use std::fmt;
use std::str::FromStr;

use crate::error::{CrawlError, Result};

/// Port assumed when an address does not name one.
pub const DEFAULT_PORT: u16 = 80;

/// A parsed address. Any component may be missing.
///
/// - no host   => the address is relative (`/docs`, `page.html`)
/// - no scheme => the address is protocol-independent (`//example.com/x`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Url {
    pub(crate) scheme: Option<String>,
    pub(crate) host: Option<String>,
    pub(crate) port: u16,
    pub(crate) path: Option<String>,
    pub(crate) query: Option<String>,
    pub(crate) fragment: Option<String>,
}

impl Url {
    /// Parses a raw address. Surrounding whitespace is ignored.
    ///
    /// ```
    /// use site_crawler::Url;
    ///
    /// let url = Url::parse(" https://example.com:3000/path?q=1 ").unwrap();
    /// assert_eq!(url.host(), Some("example.com"));
    /// assert_eq!(url.port(), 3000);
    /// assert_eq!(url.to_string(), "https://example.com:3000/path?q=1");
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let parts = parse::split(raw.trim())?;

        Ok(Url {
            scheme: parts.scheme,
            host: parts.host,
            port: parts.port.unwrap_or(DEFAULT_PORT),
            path: parts.path,
            query: parts.query,
            fragment: parts.fragment,
        })
    }

    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// True when the address has no host (`/docs`, `../about`, `?page=2`).
    pub fn is_relative(&self) -> bool {
        self.host.is_none()
    }

    /// True when the address has no scheme (`//example.com/x`, or any relative address).
    pub fn is_protocol_independent(&self) -> bool {
        self.scheme.is_none()
    }

    /// True for `mailto:` links.
    pub fn is_email_address(&self) -> bool {
        self.has_scheme("mailto")
    }

    /// True for inline `javascript:` links.
    pub fn is_script_address(&self) -> bool {
        self.has_scheme("javascript")
    }

    fn has_scheme(&self, scheme: &str) -> bool {
        self.scheme
            .as_deref()
            .map_or(false, |own| own.eq_ignore_ascii_case(scheme))
    }

    /// Returns a copy with the scheme replaced.
    pub fn with_scheme(&self, scheme: &str) -> Url {
        Url {
            scheme: Some(scheme.to_string()),
            ..self.clone()
        }
    }

    /// Returns a copy with the host replaced.
    pub fn with_host(&self, host: &str) -> Url {
        Url {
            host: Some(host.to_string()),
            ..self.clone()
        }
    }

    /// Returns a copy with the query replaced (without the leading '?').
    pub fn with_query(&self, query: &str) -> Url {
        Url {
            query: Some(query.to_string()),
            ..self.clone()
        }
    }

    /// Returns a copy with the port replaced.
    ///
    /// Accepts anything printable so both `with_port(3000)` and
    /// `with_port("3000")` work. Fails with [`CrawlError::InvalidPortNumber`]
    /// unless the value is a non-negative integer that fits in a port.
    pub fn with_port(&self, port: impl ToString) -> Result<Url> {
        let raw = port.to_string();
        let port = raw
            .trim()
            .parse::<u16>()
            .map_err(|_| CrawlError::InvalidPortNumber(raw.clone()))?;

        Ok(Url {
            port,
            ..self.clone()
        })
    }

    /// Returns a copy with the fragment removed.
    ///
    /// Anything after a '#' left in the path is cut off as well, so this is
    /// safe to apply to addresses assembled by hand.
    pub fn without_fragment(&self) -> Url {
        let path = self
            .path
            .as_deref()
            .map(|path| path.split('#').next().unwrap_or_default().to_string());

        Url {
            path,
            fragment: None,
            ..self.clone()
        }
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path.as_deref().unwrap_or_default();
        let path = path.strip_prefix('/').unwrap_or(path);

        write!(
            f,
            "{}://{}",
            self.scheme.as_deref().unwrap_or_default(),
            self.host.as_deref().unwrap_or_default()
        )?;

        if self.port != DEFAULT_PORT {
            write!(f, ":{}", self.port)?;
        }

        write!(f, "/{}", path)?;

        match self.query.as_deref() {
            Some(query) if !query.is_empty() => write!(f, "?{}", query),
            _ => Ok(()),
        }
    }
}

impl FromStr for Url {
    type Err = CrawlError;

    fn from_str(raw: &str) -> Result<Self> {
        Url::parse(raw)
    }
}

impl TryFrom<&str> for Url {
    type Error = CrawlError;

    fn try_from(raw: &str) -> Result<Self> {
        Url::parse(raw)
    }
}

/// Anything that can be turned into a [`Url`]: strings are parsed, urls pass through.
pub trait IntoUrl {
    fn into_url(self) -> Result<Url>;
}

impl IntoUrl for Url {
    fn into_url(self) -> Result<Url> {
        Ok(self)
    }
}

impl IntoUrl for &Url {
    fn into_url(self) -> Result<Url> {
        Ok(self.clone())
    }
}

impl IntoUrl for &str {
    fn into_url(self) -> Result<Url> {
        Url::parse(self)
    }
}

impl IntoUrl for String {
    fn into_url(self) -> Result<Url> {
        Url::parse(&self)
    }
}

impl IntoUrl for &String {
    fn into_url(self) -> Result<Url> {
        Url::parse(self)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why do the with_* methods take &self and return a new Url?
//    - The receiver is never changed, so a failed with_port()
//      leaves it exactly as it was
//    - ..self.clone() is "struct update syntax": copy every field we
//      did not list explicitly
//
// 2. What is impl ToString in with_port?
//    - Any type that can be printed (numbers, &str, String) is accepted
//    - We print it, then parse it back as a u16 - which rejects "abc",
//      "-1" and "70000" alike
//
// 3. Why Option<&str> getters instead of pub fields?
//    - .as_deref() turns &Option<String> into Option<&str> without copying
//    - Callers can compare directly: url.host() == Some("example.com")
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn test_url() -> Url {
        Url::parse("https://example.com/opensource?query=test").unwrap()
    }

    #[test]
    fn test_parse_url() {
        let url = test_url();
        assert_eq!(url.scheme(), Some("https"));
        assert_eq!(url.host(), Some("example.com"));
        assert_eq!(url.port(), 80);
        assert_eq!(url.path(), Some("/opensource"));
        assert_eq!(url.query(), Some("query=test"));
    }

    #[test]
    fn test_parse_with_port() {
        let url = Url::parse("https://example.com:3000/path?q=1").unwrap();
        assert_eq!(url.scheme(), Some("https"));
        assert_eq!(url.host(), Some("example.com"));
        assert_eq!(url.port(), 3000);
        assert_eq!(url.path(), Some("/path"));
        assert_eq!(url.query(), Some("q=1"));
        assert_eq!(url.to_string(), "https://example.com:3000/path?q=1");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let url: Url = "  https://example.com/docs \n".parse().unwrap();
        assert_eq!(url.to_string(), "https://example.com/docs");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        let result = Url::parse("http://:80/");
        assert!(matches!(result, Err(CrawlError::InvalidAddress { .. })));
    }

    #[test]
    fn test_parse_rejects_authority_with_two_ports() {
        let result = Url::parse("http://h:8080:9090/");
        assert!(matches!(result, Err(CrawlError::InvalidAddress { .. })));

        let result = Url::parse("//h:8080:9090/");
        assert!(matches!(result, Err(CrawlError::InvalidAddress { .. })));
    }

    #[test]
    fn test_convert_to_string() {
        assert_eq!(test_url().to_string(), "https://example.com/opensource?query=test");
        assert_eq!(Url::parse("https://example.com").unwrap().to_string(), "https://example.com/");
    }

    #[test]
    fn test_reparse_canonical_form() {
        let url = Url::parse("https://example.com:8080/a/b?x=1").unwrap();
        let again = Url::parse(&url.to_string()).unwrap();
        assert_eq!(url, again);
    }

    #[test]
    fn test_relative() {
        assert!(Url::parse("/opensource").unwrap().is_relative());
        assert!(!test_url().is_relative());
    }

    #[test]
    fn test_protocol_independent() {
        let url = Url::parse("//google.com/test").unwrap();
        assert!(url.is_protocol_independent());
        assert!(!url.is_relative());
        assert!(!test_url().is_protocol_independent());
    }

    #[test]
    fn test_change_host() {
        let url = test_url().with_host("google.com");
        assert_eq!(url.to_string(), "https://google.com/opensource?query=test");
    }

    #[test]
    fn test_change_scheme() {
        let url = test_url().with_scheme("http");
        assert_eq!(url.to_string(), "http://example.com/opensource?query=test");
    }

    #[test]
    fn test_change_query() {
        let url = test_url().with_query("query=new");
        assert_eq!(url.to_string(), "https://example.com/opensource?query=new");
    }

    #[test]
    fn test_empty_query_not_rendered() {
        let url = test_url().with_query("");
        assert_eq!(url.to_string(), "https://example.com/opensource");
    }

    #[test]
    fn test_change_port() {
        let url = test_url().with_port(3000).unwrap();
        assert_eq!(url.port(), 3000);
        assert_eq!(url.to_string(), "https://example.com:3000/opensource?query=test");

        let url = test_url().with_port("8080").unwrap();
        assert_eq!(url.port(), 8080);
    }

    #[test]
    fn test_port_80_not_rendered() {
        let url = Url::parse("https://example.com:3000/opensource").unwrap();
        let url = url.with_port(80).unwrap();
        assert_eq!(url.to_string(), "https://example.com/opensource");
    }

    #[test]
    fn test_invalid_port_leaves_url_untouched() {
        let url = test_url();
        let result = url.with_port("abc");
        assert!(matches!(result, Err(CrawlError::InvalidPortNumber(ref p)) if p == "abc"));
        assert!(url.with_port(-1).is_err());
        assert_eq!(url, test_url());
    }

    #[test]
    fn test_remove_fragment() {
        let url = Url::parse("https://example.com/team#willem").unwrap();
        assert_eq!(url.fragment(), Some("willem"));

        let url = url.without_fragment();
        assert_eq!(url.fragment(), None);
        assert_eq!(url.to_string(), "https://example.com/team");
        assert_eq!(url.without_fragment(), url);
    }

    #[test]
    fn test_remove_fragment_from_path() {
        let mut url = Url::parse("https://example.com/").unwrap();
        url.path = Some("/team#willem".to_string());
        assert_eq!(url.without_fragment().path(), Some("/team"));
    }

    #[test]
    fn test_email_address() {
        assert!(!Url::parse("https://example.com/").unwrap().is_email_address());
        assert!(Url::parse("mailto:info@example.com").unwrap().is_email_address());
    }

    #[test]
    fn test_script_address() {
        let url = Url::parse("javascript:alert()").unwrap();
        assert!(url.is_script_address());
        assert!(!url.is_email_address());
    }

    #[test]
    fn test_into_url() {
        assert!("https://example.com".into_url().is_ok());
        assert!(String::from("//").into_url().is_err());
        let url = test_url();
        assert_eq!((&url).into_url().unwrap(), url);
    }
}
