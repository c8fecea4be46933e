//! Command-line interface definitions for page_text_dump.
//!
//! Every option has a default matching the built-in Victoria Park corpus, so
//! running the binary with no arguments reproduces the standard dump.

use crate::runner::DEFAULT_DELAY;
use crate::scrapers::page::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Command-line arguments for the page_text_dump application.
///
/// # Examples
///
/// ```sh
/// # Built-in source list, default output files
/// page_text_dump
///
/// # Custom source list and output locations
/// page_text_dump -s sources.yaml -t out/dump.txt -j out/corpus.json
///
/// # Faster pacing against a local mirror
/// page_text_dump -s local.yaml --delay-ms 0
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// YAML file with the source list (defaults to the built-in list)
    #[arg(short, long, env = "PAGE_DUMP_SOURCES")]
    pub sources: Option<PathBuf>,

    /// Output path for the plain-text dump
    #[arg(short, long, default_value = "victoria_park_stadium_text_dump.txt")]
    pub text_output: PathBuf,

    /// Output path for the JSON corpus
    #[arg(short, long, default_value = "victoria_park_stadium_sources.json")]
    pub json_output: PathBuf,

    /// Pause between requests, in milliseconds
    #[arg(long, default_value_t = DEFAULT_DELAY.as_millis() as u64)]
    pub delay_ms: u64,

    /// Per-request timeout, in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[arg(long, env = "PAGE_DUMP_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl Cli {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
