//! JSON corpus output.
//!
//! The corpus is the success-only view of a run: one `{url, text}` object per
//! page that fetched, in source order. It is serialized once, after every
//! entry has been processed, so an interrupted run never leaves a partial
//! corpus behind.
//!
//! # Format
//!
//! Two-space indented, non-ASCII characters written as-is:
//! ```text
//! [
//!   {
//!     "url": "https://example.com/",
//!     "text": "Café"
//!   }
//! ]
//! ```

use crate::models::JsonRecord;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

/// Serialize records to the corpus format.
pub fn render_corpus(records: &[JsonRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}

/// Write the JSON corpus to `path`, creating its parent directory if needed.
///
/// # Arguments
///
/// * `records` - Successful records in source order
/// * `path` - Destination file, overwritten if present
///
/// # Returns
///
/// `Ok(())` on success, or an error if serialization, directory creation, or
/// the write itself fails.
#[instrument(level = "info", skip_all, fields(path = %path.display(), count = records.len()))]
pub async fn write_corpus(records: &[JsonRecord], path: &Path) -> Result<(), Box<dyn Error>> {
    let json = render_corpus(records)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent).await {
            error!(dir = %parent.display(), error = %e, "Failed to create JSON dir");
            return Err(e.into());
        }
    }

    fs::write(path, json).await?;
    info!("Wrote JSON corpus");
    Ok(())
}
