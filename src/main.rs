//! # page_text_dump
//!
//! A sequential scraper that fetches a list of labeled web pages, strips
//! boilerplate markup, and dumps the visible text of each page.
//!
//! ## Features
//!
//! - Built-in source list covering the Victoria Park / Brisbane 2032 Olympic
//!   stadium debate, replaceable with a YAML sources file
//! - Drops scripts, styles, navigation, headers, footers, sidebars, frames,
//!   and menus before extracting text
//! - Writes a complete plain-text audit trail (failures included) and a
//!   success-only JSON corpus
//! - One request at a time with a fixed pause between requests
//!
//! ## Usage
//!
//! ```sh
//! page_text_dump -s sources.yaml -t dump.txt -j corpus.json
//! ```
//!
//! ## Architecture
//!
//! The application is a straight pipeline:
//! 1. **Sources**: Load the ordered (label, URL) list
//! 2. **Fetching**: GET each page with a fixed `User-Agent` and timeout
//! 3. **Extraction**: Reduce the HTML to normalized visible text
//! 4. **Output**: Append to the text dump per page, write the JSON corpus at the end

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod models;
mod outputs;
mod runner;
mod scrapers;
mod sources;
mod utils;

use cli::Cli;
use runner::RunOptions;
use scrapers::page::PageFetcher;
use sources::{default_sources, load_sources};
use utils::ensure_writable_parent;

#[tokio::main(flavor = "current_thread")]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init (stderr; stdout carries the progress report) ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("page_text_dump starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let sources = match &args.sources {
        Some(path) => load_sources(path).await?,
        None => {
            info!("No sources file given; using built-in source list");
            default_sources()
        }
    };
    if sources.is_empty() {
        warn!("Source list is empty; the dump will only hold its header");
    }
    info!(count = sources.len(), "Sources ready");

    // Early check: both outputs must be writable before any request goes out
    for path in [&args.text_output, &args.json_output] {
        if let Err(e) = ensure_writable_parent(path).await {
            error!(
                path = %path.display(),
                error = %e,
                "Output location is not writable (fix perms or choose a different path)"
            );
            return Err(e);
        }
    }

    let fetcher = PageFetcher::new(&args.user_agent, args.timeout())?;
    let options = RunOptions {
        text_output: args.text_output.clone(),
        json_output: args.json_output.clone(),
        delay: args.delay(),
    };

    let summary = runner::run(&sources, &fetcher, &options).await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        attempted = summary.attempted,
        succeeded = summary.succeeded,
        failed = summary.failed,
        "Execution complete"
    );

    Ok(())
}
