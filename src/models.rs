//! Data models for source lists, fetch outcomes, and corpus records.
//!
//! This module defines the core data structures used throughout the application:
//! - [`SourceEntry`]: One labeled page to fetch
//! - [`SourceList`]: The ordered unit of work for a run, with dump header text
//! - [`FetchOutcome`]: The result of fetching and extracting one page
//! - [`JsonRecord`]: One element of the success-only JSON corpus
//! - [`RunSummary`]: Counters reported at the end of a run

use serde::{Deserialize, Serialize};

/// Default title line written at the top of the text dump.
pub const DEFAULT_TITLE: &str = "VICTORIA PARK BRISBANE STADIUM / BRISBANE 2032 OLYMPICS";

/// Default subtitle line written at the top of the text dump.
pub const DEFAULT_SUBTITLE: &str =
    "RAW TEXT DUMP FROM NEWS ARTICLES, ADVOCACY SITES, AND OFFICIAL SOURCES";

/// A single page to fetch, identified by a human-readable label.
///
/// # Fields
///
/// * `label` - Name printed in the progress report and the dump record
/// * `url` - Absolute HTTP(S) URL of the page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceEntry {
    /// Human-readable name for the page.
    pub label: String,
    /// The page URL.
    pub url: String,
}

impl SourceEntry {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// The ordered list of pages processed by one run.
///
/// Entry order defines output order in both the text dump and the JSON
/// corpus. Duplicate entries are allowed and processed twice.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceList {
    /// Title line of the text dump header.
    #[serde(default = "default_title")]
    pub title: String,
    /// Subtitle line of the text dump header.
    #[serde(default = "default_subtitle")]
    pub subtitle: String,
    /// Pages to fetch, in order.
    #[serde(default)]
    pub sources: Vec<SourceEntry>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_subtitle() -> String {
    DEFAULT_SUBTITLE.to_string()
}

impl SourceList {
    /// Build a list with the default header lines.
    pub fn new(sources: Vec<SourceEntry>) -> Self {
        Self {
            title: default_title(),
            subtitle: default_subtitle(),
            sources,
        }
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

/// Result of fetching and extracting one page.
///
/// Produced once per [`SourceEntry`] per run and never persisted on its own;
/// it only shows up in the two output files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The page was fetched and its visible text extracted (possibly empty).
    Text(String),
    /// The fetch failed; carries the rendered error message.
    Failure(String),
}

/// One element of the JSON corpus. Only successful fetches produce one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct JsonRecord {
    /// The configured URL of the page.
    pub url: String,
    /// The extracted text.
    pub text: String,
}

/// Counters for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Entries processed.
    pub attempted: usize,
    /// Entries that produced a JSON record.
    pub succeeded: usize,
    /// Entries written to the dump as errors.
    pub failed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_entry_creation() {
        let entry = SourceEntry::new("Example", "https://example.com");
        assert_eq!(entry.label, "Example");
        assert_eq!(entry.url, "https://example.com");
    }

    #[test]
    fn test_source_list_defaults_header() {
        let yaml = r#"
sources:
  - label: One
    url: https://one.example
"#;
        let list: SourceList = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(list.title, DEFAULT_TITLE);
        assert_eq!(list.subtitle, DEFAULT_SUBTITLE);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_source_list_custom_header() {
        let yaml = r#"
title: MY TITLE
subtitle: my subtitle
sources: []
"#;
        let list: SourceList = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(list.title, "MY TITLE");
        assert_eq!(list.subtitle, "my subtitle");
        assert!(list.is_empty());
    }

    #[test]
    fn test_json_record_serialization_keeps_field_order() {
        let record = JsonRecord {
            url: "https://example.com".to_string(),
            text: "Hello".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"url":"https://example.com","text":"Hello"}"#);
    }
}
