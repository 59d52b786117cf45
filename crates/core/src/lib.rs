//! marrow-core: density-based main-article content extraction.
//!
//! Given an arbitrary news-site HTML page and its URL, the extractor
//! locates the region of the DOM holding the actual article body,
//! discards navigation, ads, widgets, and comments, rewrites embedded
//! image references to absolute URLs, and returns clean markup plus an
//! image list. Pages with no usable body produce a typed failure, never
//! a partially-cleaned fragment.

pub mod candidates;
pub mod error;
pub mod extract;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod metrics;
pub mod parse;
pub mod sanitize;

pub use candidates::{Candidate, pick_best, scan_fallback, select_by_selectors};
pub use error::{MarrowError, Result};
pub use extract::{Extraction, Extractor, ExtractorConfig, ExtractorConfigBuilder, extract};
#[cfg(feature = "fetch")]
pub use fetch::{FetchConfig, fetch_file, fetch_stdin, fetch_url};
pub use metrics::{TextMetrics, density};
pub use parse::{Document, Element};
pub use sanitize::{CleanedContent, SanitizeConfig, clean};
