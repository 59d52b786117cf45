//! Extraction orchestration.
//!
//! This module sequences the pipeline: parse, selector pass, fallback
//! scan, ranking, sanitization, and the minimum-content-length gate.
//! The extractor is a pure, synchronous, single-document computation
//! with no shared mutable state, so one [`Extractor`] can be used from
//! many threads concurrently (one worker per article is the intended
//! pattern). Nothing here performs network I/O and nothing retries:
//! extraction is deterministic, so a failure is final for that input.
//!
//! # Example
//!
//! ```rust
//! use marrow_core::Extractor;
//!
//! let extractor = Extractor::new();
//! match extractor.extract("<html>...</html>", "https://news.example.com/post") {
//!     Ok(result) => println!("{} chars, {} images", result.content.len(), result.images.len()),
//!     Err(e) if e.is_extraction_failure() => { /* use feed excerpt instead */ }
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::candidates::{pick_best, scan_fallback, select_by_selectors};
use crate::parse::Document;
use crate::sanitize::{SanitizeConfig, clean};
use crate::{MarrowError, Result};

/// Structural and semantic selectors tried in priority order. Each
/// contributes at most its first match in document order.
const CONTENT_SELECTORS: &[&str] = &[
    "article",
    r#"[role="main"]"#,
    "main",
    ".post-content",
    ".entry-content",
    ".article-content",
    ".content",
    ".post",
    ".entry",
    "#content",
    "#main-content",
];

/// Class/id substrings that disqualify a container during the fallback
/// scan.
const NOISE_PATTERN: &str = "nav|menu|sidebar|footer|header|comment|meta|tag|share|social|related|recommended";

/// Configuration for the extraction pipeline.
///
/// The selector and noise lists are explicit data here rather than
/// hidden globals, so tests and embedders can substitute alternate rule
/// sets.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Prioritized content selectors for the first pass.
    pub content_selectors: Vec<String>,
    /// Regex matched against lower-cased class/id values in the
    /// fallback scan.
    pub noise_pattern: String,
    /// Density floor a candidate must exceed (strictly) to be admitted.
    pub min_candidate_score: f64,
    /// Minimum cleaned-content length in chars; shorter results fail
    /// with [`MarrowError::ContentTooShort`].
    pub min_content_length: usize,
    /// Fallback scan: minimum trimmed text length for a container.
    pub fallback_min_text_length: usize,
    /// Fallback scan: maximum anchor-per-text ratio.
    pub fallback_max_link_ratio: f64,
    /// Sanitization configuration.
    pub sanitize: SanitizeConfig,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            content_selectors: CONTENT_SELECTORS.iter().map(|s| s.to_string()).collect(),
            noise_pattern: NOISE_PATTERN.to_string(),
            min_candidate_score: 100.0,
            min_content_length: 500,
            fallback_min_text_length: 200,
            fallback_max_link_ratio: 0.5,
            sanitize: SanitizeConfig::default(),
        }
    }
}

impl ExtractorConfig {
    /// Creates a builder pre-loaded with the defaults.
    pub fn builder() -> ExtractorConfigBuilder {
        ExtractorConfigBuilder::new()
    }
}

/// Builder for [`ExtractorConfig`].
///
/// # Example
///
/// ```rust
/// use marrow_core::ExtractorConfig;
///
/// let config = ExtractorConfig::builder()
///     .min_content_length(300)
///     .min_candidate_score(50.0)
///     .build();
/// ```
pub struct ExtractorConfigBuilder {
    config: ExtractorConfig,
}

impl ExtractorConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: ExtractorConfig::default() }
    }

    /// Replaces the prioritized content-selector list.
    pub fn content_selectors<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.content_selectors = selectors.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the fallback-scan noise pattern.
    pub fn noise_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.noise_pattern = pattern.into();
        self
    }

    /// Sets the candidate density floor.
    pub fn min_candidate_score(mut self, value: f64) -> Self {
        self.config.min_candidate_score = value;
        self
    }

    /// Sets the minimum cleaned-content length.
    pub fn min_content_length(mut self, value: usize) -> Self {
        self.config.min_content_length = value;
        self
    }

    /// Sets the fallback scan's minimum container text length.
    pub fn fallback_min_text_length(mut self, value: usize) -> Self {
        self.config.fallback_min_text_length = value;
        self
    }

    /// Sets the fallback scan's maximum link ratio.
    pub fn fallback_max_link_ratio(mut self, value: f64) -> Self {
        self.config.fallback_max_link_ratio = value;
        self
    }

    /// Replaces the sanitization configuration.
    pub fn sanitize(mut self, value: SanitizeConfig) -> Self {
        self.config.sanitize = value;
        self
    }

    /// Builds the final configuration.
    pub fn build(self) -> ExtractorConfig {
        self.config
    }
}

impl Default for ExtractorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The result of a successful extraction. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extraction {
    /// Sanitized markup suitable for direct storage or rendering.
    pub content: String,
    /// Absolute image URLs in document order of first appearance.
    pub images: Vec<String>,
}

/// The main-article extractor.
///
/// Owns its configuration; holds no per-call state.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    /// Creates an extractor with the default rule set.
    pub fn new() -> Self {
        Self { config: ExtractorConfig::default() }
    }

    /// Creates an extractor with a custom configuration.
    pub fn with_config(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extracts the main article body from an HTML page.
    ///
    /// `base_url` is the page's own URL, used only to resolve relative
    /// image paths.
    ///
    /// # Errors
    ///
    /// - [`MarrowError::InvalidUrl`] when `base_url` does not parse.
    /// - [`MarrowError::NoCandidate`] when no element clears the
    ///   density floor.
    /// - [`MarrowError::ContentTooShort`] when the cleaned markup falls
    ///   below the content gate.
    pub fn extract(&self, html: &str, base_url: &str) -> Result<Extraction> {
        let base = Url::parse(base_url).map_err(|e| MarrowError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        let doc = Document::parse(html)?;
        self.extract_from_document(&doc, Some(&base))
    }

    /// Extracts from an already-parsed document.
    ///
    /// The document is only read, never mutated: sanitization operates
    /// on a serialized copy of the winning element, so the same
    /// document can be extracted from repeatedly with identical
    /// results.
    pub fn extract_from_document(&self, doc: &Document, base_url: Option<&Url>) -> Result<Extraction> {
        let mut candidates = select_by_selectors(doc, &self.config);
        debug!(count = candidates.len(), "selector pass");

        if candidates.is_empty() {
            candidates = scan_fallback(doc, &self.config);
            debug!(count = candidates.len(), "fallback pass");
        }

        let winner = pick_best(candidates).ok_or(MarrowError::NoCandidate)?;
        debug!(score = winner.score, tag = winner.element.tag_name().as_str(), "winner selected");

        let cleaned = clean(&winner.element.outer_html(), base_url, &self.config.sanitize);

        let length = cleaned.html.chars().count();
        if length < self.config.min_content_length {
            debug!(length, threshold = self.config.min_content_length, "content gate failed");
            return Err(MarrowError::ContentTooShort { length, threshold: self.config.min_content_length });
        }

        Ok(Extraction { content: cleaned.html, images: cleaned.images })
    }
}

/// One-shot extraction with the default rule set.
///
/// # Example
///
/// ```rust
/// use marrow_core::extract;
///
/// let html = "<html><body><p>too small</p></body></html>";
/// assert!(extract(html, "https://example.com/a").is_err());
/// ```
pub fn extract(html: &str, base_url: &str) -> Result<Extraction> {
    Extractor::new().extract(html, base_url)
}
