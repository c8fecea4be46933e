//! Run driver: walks the source list and feeds both outputs.
//!
//! Each entry goes through `Fetching → Extracting → Writing`, strictly in
//! list order and one at a time. Fetch and extraction form a single unit that
//! yields a [`FetchOutcome`]; a failure is just the other branch of that
//! value, so no entry can abort the run. Between entries the driver sleeps
//! for a fixed delay to keep the request rate polite.
//!
//! All mutable run state (the open dump, the progress report sink, the
//! accumulated JSON records, the counters) lives in a [`RunContext`] owned by
//! a single run.

use crate::models::{FetchOutcome, JsonRecord, RunSummary, SourceEntry, SourceList};
use crate::outputs::json::write_corpus;
use crate::outputs::text_dump::TextDump;
use crate::scrapers::FetchPage;
use crate::scrapers::extract::extract_text;
use crate::utils::{group_thousands, truncate_for_log};
use std::error::Error;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::io::AsyncWrite;
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};

/// Default pause between consecutive requests.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

/// Where a run writes and how fast it goes.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Text dump destination.
    pub text_output: PathBuf,
    /// JSON corpus destination.
    pub json_output: PathBuf,
    /// Pause between consecutive entries.
    pub delay: Duration,
}

/// Per-run state shared by every step of the pipeline.
///
/// `W` receives the text dump, `R` the human-readable progress report
/// (stdout for the binary).
#[derive(Debug)]
pub struct RunContext<W, R> {
    dump: TextDump<W>,
    report: R,
    records: Vec<JsonRecord>,
    summary: RunSummary,
}

impl<W, R> RunContext<W, R>
where
    W: AsyncWrite + Unpin,
    R: Write,
{
    pub fn new(dump: TextDump<W>, report: R) -> Self {
        Self {
            dump,
            report,
            records: Vec::new(),
            summary: RunSummary::default(),
        }
    }

    /// Write one line to the progress report and flush it, so the line shows
    /// up before the next (possibly slow) request starts.
    fn report_line(&mut self, line: fmt::Arguments<'_>) -> std::io::Result<()> {
        self.report.write_fmt(line)?;
        self.report.write_all(b"\n")?;
        self.report.flush()
    }

    /// Write one entry's outcome to both outputs.
    ///
    /// The dump always gets a block; the JSON corpus only gets a record when
    /// the outcome is a success.
    pub async fn record(
        &mut self,
        entry: &SourceEntry,
        outcome: FetchOutcome,
    ) -> std::io::Result<()> {
        self.dump.append(entry, &outcome).await?;
        self.summary.attempted += 1;
        match outcome {
            FetchOutcome::Text(text) => {
                self.summary.succeeded += 1;
                self.records.push(JsonRecord {
                    url: entry.url.clone(),
                    text,
                });
            }
            FetchOutcome::Failure(_) => self.summary.failed += 1,
        }
        Ok(())
    }

    /// Print the completion summary naming both outputs.
    pub fn report_done(&mut self, text_output: &Path, json_output: &Path) -> std::io::Result<()> {
        let count = self.records.len();
        self.report_line(format_args!("\nDone."))?;
        self.report_line(format_args!("  TXT → {}", text_output.display()))?;
        self.report_line(format_args!(
            "  JSON → {} ({} entries)",
            json_output.display(),
            count
        ))
    }

    /// Records accumulated for the JSON corpus so far.
    pub fn records(&self) -> &[JsonRecord] {
        &self.records
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Flush the dump and split the context into its writers and records.
    pub async fn finish(self) -> std::io::Result<(W, R, Vec<JsonRecord>)> {
        let writer = self.dump.finish().await?;
        Ok((writer, self.report, self.records))
    }
}

/// Fetch one page and extract its text, folding any error into the outcome.
#[instrument(level = "info", skip(fetcher))]
pub async fn fetch_outcome<F: FetchPage>(fetcher: &F, url: &str) -> FetchOutcome {
    match fetcher.fetch(url).await {
        Ok(html) => {
            let text = extract_text(&html);
            if text.is_empty() {
                warn!("Page produced no visible text; recording as empty success");
            }
            debug!(preview = %truncate_for_log(&text, 200), "Extracted text");
            FetchOutcome::Text(text)
        }
        Err(e) => FetchOutcome::Failure(e.to_string()),
    }
}

/// Process every entry in order, writing each outcome into `ctx`.
///
/// Reports `Fetching: <label> ...` before each request and `  OK (<N> chars)`
/// or `  FAILED: <message>` after it. Sleeps `delay` between entries, but not
/// after the last one.
///
/// # Errors
///
/// Only a failure to write the dump or the report is returned; fetch failures
/// are recorded and the loop moves on.
#[instrument(level = "info", skip_all, fields(count = sources.len()))]
pub async fn process_sources<F, W, R>(
    sources: &[SourceEntry],
    fetcher: &F,
    ctx: &mut RunContext<W, R>,
    delay: Duration,
) -> std::io::Result<()>
where
    F: FetchPage,
    W: AsyncWrite + Unpin,
    R: Write,
{
    for (i, entry) in sources.iter().enumerate() {
        ctx.report_line(format_args!("Fetching: {} ...", entry.label))?;
        info!(index = i, label = %entry.label, url = %entry.url, "Fetching source");

        let outcome = fetch_outcome(fetcher, &entry.url).await;
        match &outcome {
            FetchOutcome::Text(text) => {
                let chars = text.chars().count();
                ctx.report_line(format_args!("  OK ({} chars)", group_thousands(chars)))?;
                info!(index = i, chars, "Source extracted");
            }
            FetchOutcome::Failure(message) => {
                ctx.report_line(format_args!("  FAILED: {message}"))?;
                warn!(index = i, url = %entry.url, error = %message, "Source fetch failed");
            }
        }
        ctx.record(entry, outcome).await?;

        if i + 1 < sources.len() && !delay.is_zero() {
            sleep(delay).await;
        }
    }
    Ok(())
}

/// Run the whole pipeline, reporting progress on stdout.
pub async fn run<F: FetchPage>(
    sources: &SourceList,
    fetcher: &F,
    options: &RunOptions,
) -> Result<RunSummary, Box<dyn Error>> {
    let (summary, _) = run_with_report(sources, fetcher, options, std::io::stdout()).await?;
    Ok(summary)
}

/// Run the whole pipeline: open the dump, process every source, write the
/// JSON corpus, and report the completion summary to `report`.
///
/// # Errors
///
/// Fails only on process-level problems: the dump cannot be created or
/// written, the report cannot be written, or the JSON corpus cannot be
/// written.
#[instrument(level = "info", skip_all, fields(count = sources.len()))]
pub async fn run_with_report<F, R>(
    sources: &SourceList,
    fetcher: &F,
    options: &RunOptions,
    report: R,
) -> Result<(RunSummary, R), Box<dyn Error>>
where
    F: FetchPage,
    R: Write,
{
    let dump = TextDump::create(&options.text_output, &sources.title, &sources.subtitle).await?;
    let mut ctx = RunContext::new(dump, report);

    process_sources(&sources.sources, fetcher, &mut ctx, options.delay).await?;

    write_corpus(ctx.records(), &options.json_output).await?;
    ctx.report_done(&options.text_output, &options.json_output)?;

    let summary = ctx.summary();
    let (_, report, _) = ctx.finish().await?;
    info!(
        attempted = summary.attempted,
        succeeded = summary.succeeded,
        failed = summary.failed,
        "Run complete"
    );
    Ok((summary, report))
}
