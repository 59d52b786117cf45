//! Error types for marrow operations.
//!
//! The extraction failures ([`MarrowError::NoCandidate`] and
//! [`MarrowError::ContentTooShort`]) are ordinary control-flow outcomes,
//! not fatal conditions: a meaningful fraction of real-world pages
//! (paywalls, JS-rendered shells, unusual layouts) produce them. Batch
//! callers are expected to match on them, discard the attempt, and fall
//! back to caller-supplied short-form content such as a feed excerpt.
//!
//! # Example
//!
//! ```rust
//! use marrow_core::{MarrowError, extract};
//!
//! match extract("<html>...</html>", "https://example.com/post") {
//!     Ok(result) => println!("{} images", result.images.len()),
//!     Err(MarrowError::NoCandidate) | Err(MarrowError::ContentTooShort { .. }) => {
//!         // fall back to the feed-provided excerpt
//!     }
//!     Err(e) => eprintln!("error: {}", e),
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for content extraction operations.
#[derive(Error, Debug)]
pub enum MarrowError {
    /// No element scored above the candidate threshold.
    ///
    /// Neither the structural-selector pass nor the fallback scan found
    /// a container that looks like an article body. Common on search
    /// pages, link hubs, and JS-rendered shells.
    #[error("no content candidate scored above the density threshold")]
    NoCandidate,

    /// The winning candidate's cleaned markup fell below the content gate.
    ///
    /// Stub pages and paywalled teasers typically land here. Callers
    /// must treat this exactly like [`MarrowError::NoCandidate`]: there
    /// is no partial-success mode.
    #[error("cleaned content length {length} is below the minimum of {threshold}")]
    ContentTooShort { length: usize, threshold: usize },

    /// HTML parsing errors.
    ///
    /// Returned for invalid CSS selectors; malformed markup itself is
    /// handled tolerantly by the parser and does not error.
    #[error("failed to parse HTML: {0}")]
    HtmlParse(String),

    /// Invalid base URL provided for image resolution.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP request errors from reqwest.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Callers should route this to the same fallback path as
    /// [`MarrowError::ContentTooShort`]: no content is available.
    #[cfg(feature = "fetch")]
    #[error("request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// File not found.
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    /// I/O errors from file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MarrowError {
    /// Whether this error is an expected extraction outcome rather than
    /// an operational failure.
    ///
    /// Both extraction outcomes mean the same thing to a caller: no
    /// usable article body; use the short-form fallback.
    pub fn is_extraction_failure(&self) -> bool {
        matches!(self, MarrowError::NoCandidate | MarrowError::ContentTooShort { .. })
    }
}

/// Result type alias for MarrowError.
pub type Result<T> = std::result::Result<T, MarrowError>;
