//! Plain-text dump: the complete audit trail of a run.
//!
//! The file starts with a one-time banner, then holds one framed block per
//! source entry in source order, successes and failures alike:
//!
//! ```text
//! ================================================================================
//! <title>
//! <subtitle>
//! ================================================================================
//!
//! --------------------------------------------------------------------------------
//! SOURCE: <label>
//! URL: <url>
//! --------------------------------------------------------------------------------
//! <extracted text>          or          [ERROR fetching page: <message>]
//!
//! ```
//!
//! Every block is flushed as soon as it is written so an interrupted run
//! leaves all completed records on disk.

use crate::models::{FetchOutcome, SourceEntry};
use std::fmt::Write as _;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, instrument};

const BANNER_WIDTH: usize = 80;

fn rule(c: char) -> String {
    std::iter::repeat_n(c, BANNER_WIDTH).collect()
}

/// Render the one-time header block.
pub fn render_header(title: &str, subtitle: &str) -> String {
    let mut out = String::new();
    let heavy = rule('=');
    writeln!(out, "{heavy}").unwrap();
    writeln!(out, "{title}").unwrap();
    writeln!(out, "{subtitle}").unwrap();
    writeln!(out, "{heavy}").unwrap();
    out.push('\n');
    out
}

/// Render the framed block for one entry.
pub fn render_record(entry: &SourceEntry, outcome: &FetchOutcome) -> String {
    let mut out = String::new();
    let light = rule('-');
    writeln!(out, "{light}").unwrap();
    writeln!(out, "SOURCE: {}", entry.label).unwrap();
    writeln!(out, "URL: {}", entry.url).unwrap();
    writeln!(out, "{light}").unwrap();
    match outcome {
        FetchOutcome::Text(text) => {
            writeln!(out, "{text}\n").unwrap();
        }
        FetchOutcome::Failure(message) => {
            writeln!(out, "[ERROR fetching page: {message}]\n").unwrap();
        }
    }
    out
}

/// Append-only writer for the text dump.
#[derive(Debug)]
pub struct TextDump<W> {
    writer: W,
}

impl TextDump<File> {
    /// Create (truncating) the dump file at `path` and write the header.
    #[instrument(level = "info", skip_all, fields(path = %path.display()))]
    pub async fn create(path: &Path, title: &str, subtitle: &str) -> std::io::Result<Self> {
        let file = File::create(path).await?;
        info!("Opened text dump");
        TextDump::new(file, title, subtitle).await
    }
}

impl<W> TextDump<W>
where
    W: AsyncWrite + Unpin,
{
    /// Wrap an already-open writer and write the header to it.
    pub async fn new(mut writer: W, title: &str, subtitle: &str) -> std::io::Result<Self> {
        writer
            .write_all(render_header(title, subtitle).as_bytes())
            .await?;
        writer.flush().await?;
        Ok(Self { writer })
    }

    /// Append and flush the block for one entry.
    pub async fn append(
        &mut self,
        entry: &SourceEntry,
        outcome: &FetchOutcome,
    ) -> std::io::Result<()> {
        self.writer
            .write_all(render_record(entry, outcome).as_bytes())
            .await?;
        self.writer.flush().await?;
        debug!(label = %entry.label, "Appended dump record");
        Ok(())
    }

    /// Flush and hand back the underlying writer.
    pub async fn finish(mut self) -> std::io::Result<W> {
        self.writer.flush().await?;
        Ok(self.writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> SourceEntry {
        SourceEntry::new("Example - Home", "https://example.com/")
    }

    #[test]
    fn test_header_layout() {
        let header = render_header("TITLE", "SUBTITLE");
        let lines: Vec<&str> = header.split('\n').collect();
        assert_eq!(lines[0], "=".repeat(80));
        assert_eq!(lines[1], "TITLE");
        assert_eq!(lines[2], "SUBTITLE");
        assert_eq!(lines[3], "=".repeat(80));
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_success_record_layout() {
        let record = render_record(&entry(), &FetchOutcome::Text("A\nB".to_string()));
        let expected = format!(
            "{dash}\nSOURCE: Example - Home\nURL: https://example.com/\n{dash}\nA\nB\n\n",
            dash = "-".repeat(80)
        );
        assert_eq!(record, expected);
    }

    #[test]
    fn test_failure_record_layout() {
        let record = render_record(&entry(), &FetchOutcome::Failure("404 nope".to_string()));
        assert!(record.ends_with("[ERROR fetching page: 404 nope]\n\n"));
        assert!(record.contains("SOURCE: Example - Home\n"));
    }

    #[test]
    fn test_empty_text_record_keeps_blank_line() {
        let record = render_record(&entry(), &FetchOutcome::Text(String::new()));
        assert!(record.ends_with(&format!("{}\n\n\n", "-".repeat(80))));
    }

    #[tokio::test]
    async fn test_dump_writes_header_then_records_in_order() {
        let mut dump = TextDump::new(Vec::new(), "T", "S").await.unwrap();
        dump.append(&SourceEntry::new("one", "https://one/"), &FetchOutcome::Text("1".into()))
            .await
            .unwrap();
        dump.append(
            &SourceEntry::new("two", "https://two/"),
            &FetchOutcome::Failure("boom".into()),
        )
        .await
        .unwrap();
        let bytes = dump.finish().await.unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with(&render_header("T", "S")));
        let one = text.find("SOURCE: one").unwrap();
        let two = text.find("SOURCE: two").unwrap();
        assert!(one < two);
        assert!(text.ends_with("[ERROR fetching page: boom]\n\n"));
    }

    #[tokio::test]
    async fn test_create_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dump.txt");
        tokio::fs::write(&path, "stale contents").await.unwrap();

        let dump = TextDump::create(&path, "T", "S").await.unwrap();
        dump.finish().await.unwrap();

        let text = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(text, render_header("T", "S"));
    }
}
