//! Error types for style-stealer.
//!
//! Only configuration failures and a failed fetch of the *document itself*
//! abort a run. Per-stylesheet fetch errors and unparsable CSS are recovered
//! locally by the extraction pipeline (see `stylesheets` and `css`).

use crate::fetch::FetchError;

/// Error type for style extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No usable configuration source, or a source missing the required
    /// `record.styles` shape.
    #[error("configuration failed: {0}")]
    Config(String),

    /// Retrieving the input document failed. Stylesheet fetch failures are
    /// not surfaced through this variant; they are skipped per sheet.
    #[error("document fetch failed: {0}")]
    Fetch(#[from] FetchError),
}

/// Result type alias for style extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
