// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr) and the HTTP transport
// 3. Crawl the site, collecting a record per visited page
// 4. Print the records and exit with proper code
//    (0 = all pages fine, 1 = some pages failed, 2 = error)
// =============================================================================

mod cli;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{exclude_profile, Cli};
use site_crawler::logging::init_logging;
use site_crawler::{CrawlRecord, CrawlReport, Crawler, HttpFetcher, PageOutcome};

// The #[tokio::main] attribute transforms our async main into a real main function
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let fetcher =
        HttpFetcher::new(cli.http_config()).context("failed to set up HTTP transport")?;

    let mut crawler = Crawler::new(fetcher, CrawlReport::new());

    if !cli.exclude.is_empty() {
        crawler = crawler.with_profile(exclude_profile(cli.exclude.clone()));
    }

    let records = crawler
        .start(cli.base_url.as_str())
        .await
        .with_context(|| format!("could not crawl {}", cli.base_url))?;

    print_results(&records, cli.json)?;

    let failed = records.iter().filter(|r| !r.is_ok()).count();
    Ok(if failed > 0 { 1 } else { 0 })
}

// Prints the results either as a table or JSON
fn print_results(records: &[CrawlRecord], json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(records)?;
        println!("{}", json_output);
    } else {
        print_table(records);
    }
    Ok(())
}

// Prints results as a human-readable table in the terminal
fn print_table(records: &[CrawlRecord]) {
    println!("{:<60} {:<15} {:<30}", "URL", "STATUS", "FOUND ON");
    println!("{}", "=".repeat(105));

    for record in records {
        println!(
            "{:<60} {:<15} {:<30}",
            truncate(&record.url, 57),
            format_outcome(record),
            record.parent.as_deref().map(|p| truncate(p, 27)).unwrap_or_default()
        );
    }

    println!();

    let ok_count = records.iter().filter(|r| r.is_ok()).count();
    println!("📊 Summary:");
    println!("   ✅ OK: {}", ok_count);
    println!("   ❌ Failed: {}", records.len() - ok_count);
    println!("   📋 Pages: {}", records.len());
}

// Truncate long URLs so the table columns line up
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

fn format_outcome(record: &CrawlRecord) -> String {
    let code = record.status.map(|s| s.to_string()).unwrap_or_default();
    match &record.outcome {
        PageOutcome::Ok => format!("✅ {}", code),
        PageOutcome::Redirect(_) => format!("🔀 {}", code),
        PageOutcome::Broken => format!("❌ {}", code),
        PageOutcome::Error => format!("⚠️  {}", code),
        PageOutcome::NoResponse => "⏱️  NO RESPONSE".to_string(),
    }
}
