// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
// =============================================================================

use std::time::Duration;

use clap::Parser;
use site_crawler::{HttpConfig, Url};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
#[derive(Parser, Debug)]
#[command(
    name = "site-crawler",
    version,
    about = "Visit every page reachable from a URL on the same host",
    long_about = "site-crawler starts at BASE_URL, follows every link on pages of the same host, \
                  and reports the status of each page it visits. Pages on other hosts are \
                  checked but their links are not followed."
)]
pub struct Cli {
    /// Absolute URL to start from (e.g., https://example.com)
    pub base_url: String,

    /// Output results in JSON format instead of a table
    #[arg(long)]
    pub json: bool,

    /// Per-request timeout in seconds (at least 1)
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// User-Agent header to send (defaults to site-crawler/<version>)
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Follow redirects instead of reporting them
    #[arg(long)]
    pub follow_redirects: bool,

    /// Do not keep cookies between requests
    #[arg(long)]
    pub no_cookies: bool,

    /// Skip URLs containing this text (can be repeated)
    ///
    /// Example: --exclude /logout --exclude ?print=1
    #[arg(long, value_name = "TEXT")]
    pub exclude: Vec<String>,

    /// Log every skipped link as well
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Transport settings from the command-line flags
    pub fn http_config(&self) -> HttpConfig {
        let defaults = HttpConfig::default();
        HttpConfig {
            timeout: Duration::from_secs(self.timeout),
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
            follow_redirects: self.follow_redirects,
            cookies: !self.no_cookies,
        }
    }
}

// Profile for --exclude: rejects every URL whose canonical form contains
// one of the patterns
pub fn exclude_profile(patterns: Vec<String>) -> impl Fn(&Url) -> bool + Send + Sync + 'static {
    move |url: &Url| {
        let address = url.to_string();
        !patterns.iter().any(|p| address.contains(p.as_str()))
    }
}
