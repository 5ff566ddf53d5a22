// src/logging.rs
// =============================================================================
// Structured logging for the command-line tool.
//
// Logs go to stderr so that stdout only carries results (and --json output
// stays machine-readable). RUST_LOG overrides the default filter, e.g.
//
//     RUST_LOG=site_crawler=debug site-crawler https://example.com
// =============================================================================

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Filter used when RUST_LOG is not set.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "warn,site_crawler=debug"
    } else {
        "warn,site_crawler=info"
    }
}

/// Installs a global fmt subscriber writing to stderr.
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))?;

    Ok(())
}
