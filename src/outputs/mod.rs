//! Output writers for the two run artifacts.
//!
//! # Submodules
//!
//! - [`text_dump`]: Append-only audit trail, one framed block per source
//!   entry including failures
//! - [`json`]: Success-only `{url, text}` corpus, written once at the end
//!
//! The asymmetry is intentional: the dump records everything that was
//! attempted, the corpus only what can be used.
//!
//! # Default Files
//!
//! ```text
//! ./
//! ├── victoria_park_stadium_text_dump.txt
//! └── victoria_park_stadium_sources.json
//! ```

pub mod json;
pub mod text_dump;
