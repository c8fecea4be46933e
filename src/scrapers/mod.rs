//! Page fetching and text extraction.
//!
//! Each page goes through two steps:
//!
//! 1. **Fetching**: [`page::PageFetcher`] downloads the raw HTML with a fixed
//!    `User-Agent` and timeout
//! 2. **Extraction**: [`extract::extract_text`] drops boilerplate elements and
//!    flattens what is left into normalized plain text
//!
//! The fetch step sits behind the [`FetchPage`] trait so the run driver can be
//! driven by any page source, including in-memory stubs.
//!
//! # Excluded Elements
//!
//! | Element | Why it is chrome |
//! |---------|------------------|
//! | `script`, `style`, `noscript` | Code and fallback markup |
//! | `nav`, `menu` | Site navigation |
//! | `header`, `footer` | Page banners |
//! | `aside` | Sidebars |
//! | `iframe` | Embedded documents |

use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

pub mod extract;
pub mod page;

/// Why fetching a page failed.
///
/// The `Display` form is what ends up in the text dump error marker and the
/// console, so every variant names the URL.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("{code} {class} Error: {reason} for url: {url}")]
    Status {
        code: u16,
        class: &'static str,
        reason: String,
        url: String,
    },
    #[error("request timed out after {}s for url: {url}", .timeout.as_secs_f64())]
    Timeout { timeout: Duration, url: String },
    #[error("request failed for url: {url}: {detail}")]
    Request { url: String, detail: String },
}

impl FetchError {
    /// Build a [`FetchError::Status`] for a 4xx/5xx response.
    pub fn status(status: StatusCode, url: &str) -> Self {
        let class = if status.is_server_error() {
            "Server"
        } else {
            "Client"
        };
        FetchError::Status {
            code: status.as_u16(),
            class,
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            url: url.to_string(),
        }
    }

    /// Classify a transport error, flattening its source chain into the message.
    pub fn request(err: reqwest::Error, url: &str, timeout: Duration) -> Self {
        if err.is_timeout() {
            return FetchError::Timeout {
                timeout,
                url: url.to_string(),
            };
        }
        let mut detail = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            detail.push_str(": ");
            detail.push_str(&cause.to_string());
            source = cause.source();
        }
        FetchError::Request {
            url: url.to_string(),
            detail,
        }
    }
}

/// A source of raw page HTML.
///
/// Implementors fetch one URL per call. No retries are expected: a single
/// failure is final for that page.
pub trait FetchPage {
    /// Fetch the page at `url` and return its body as text.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
