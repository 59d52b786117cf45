//! Candidate discovery and ranking.
//!
//! Two discovery passes feed the ranker. The selector pass tries a
//! prioritized list of structural selectors and is cheap; the fallback
//! scan walks every block container in the document and only runs when
//! the selector pass finds nothing, because generic sites do not
//! reliably use semantic markup.

use regex::Regex;
use tracing::debug;

use crate::extract::ExtractorConfig;
use crate::metrics::TextMetrics;
use crate::parse::{Document, Element};

/// A DOM element considered as a possible article-body container,
/// paired with its density score.
///
/// Candidates are ephemeral: they exist only during one extraction
/// call. Entries may reference overlapping or nested DOM regions; the
/// only uniqueness rule is one entry per examined node.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    /// The examined element.
    pub element: Element<'a>,
    /// Its density score at discovery time. Never re-scored afterwards.
    pub score: f64,
}

/// Runs the structural-selector pass.
///
/// For each configured selector, in priority order, only the first
/// matching element in document order is examined; it is admitted when
/// its density clears the configured floor. Selectors are independent,
/// so one document can yield several candidates.
pub fn select_by_selectors<'a>(doc: &'a Document, config: &ExtractorConfig) -> Vec<Candidate<'a>> {
    let mut candidates = Vec::new();

    for selector in &config.content_selectors {
        let Ok(matches) = doc.select(selector) else {
            continue;
        };
        let Some(element) = matches.into_iter().next() else {
            continue;
        };

        let score = TextMetrics::measure(&element).density();
        if score > config.min_candidate_score {
            debug!(selector = selector.as_str(), score, "selector candidate admitted");
            candidates.push(Candidate { element, score });
        }
    }

    candidates
}

/// Runs the exhaustive fallback scan.
///
/// Walks every `div` and `section` in document order and filters out
/// obvious non-content nodes before scoring:
/// - too little text to be an article body,
/// - anchor-heavy containers (navigation, sidebars),
/// - class/id attributes matching the configured noise tokens.
pub fn scan_fallback<'a>(doc: &'a Document, config: &ExtractorConfig) -> Vec<Candidate<'a>> {
    let noise = Regex::new(&config.noise_pattern).ok();
    let mut candidates = Vec::new();

    let blocks = doc.select("div, section").unwrap_or_default();
    for element in blocks {
        let metrics = TextMetrics::measure(&element);

        if metrics.text_length < config.fallback_min_text_length {
            continue;
        }
        if metrics.link_ratio() > config.fallback_max_link_ratio {
            continue;
        }
        if let Some(noise) = &noise
            && is_noise_container(&element, noise)
        {
            continue;
        }

        let score = metrics.density();
        if score > config.min_candidate_score {
            candidates.push(Candidate { element, score });
        }
    }

    debug!(count = candidates.len(), "fallback scan complete");
    candidates
}

/// Checks the lower-cased `class` and `id` attributes against the noise
/// pattern. Other attributes are deliberately not inspected.
fn is_noise_container(element: &Element<'_>, noise: &Regex) -> bool {
    for attr in ["class", "id"] {
        if let Some(value) = element.attr(attr)
            && noise.is_match(&value.to_lowercase())
        {
            return true;
        }
    }
    false
}

/// Picks the winning candidate.
///
/// Sorts descending by score with a stable sort, so an exact tie is won
/// by the candidate discovered earlier: earlier selector priority for
/// the selector pass, earlier document order for the fallback scan.
pub fn pick_best(mut candidates: Vec<Candidate<'_>>) -> Option<Candidate<'_>> {
    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    candidates.into_iter().next()
}
