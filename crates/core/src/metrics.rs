//! Text metrics for candidate scoring.
//!
//! The density score estimates how "article-like" an element's text is.
//! Elements dominated by link text (navigation, related-link blocks)
//! are penalized; long prose runs with commas are rewarded.

use crate::parse::Element;

/// Raw text measurements for one element.
///
/// Measured once per examined element; all derived scores are pure
/// functions of these counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMetrics {
    /// Length in chars of the element's trimmed, concatenated text.
    pub text_length: usize,
    /// Length in chars of text found strictly inside `<a>` descendants.
    pub link_text_length: usize,
    /// Count of literal comma characters in the text.
    pub comma_count: usize,
    /// Number of `<a>` descendants.
    pub anchor_count: usize,
}

impl TextMetrics {
    /// Measures an element's text content.
    pub fn measure(element: &Element<'_>) -> Self {
        let text = element.text();
        let trimmed = text.trim();
        let text_length = trimmed.chars().count();
        let comma_count = trimmed.matches(',').count();

        let anchors = element.select("a").unwrap_or_default();
        let anchor_count = anchors.len();
        let link_text_length = anchors.iter().map(|a| a.text().chars().count()).sum();

        Self { text_length, link_text_length, comma_count, anchor_count }
    }

    /// The density score.
    ///
    /// `((text_length - link_text_length) / (text_length + 1)) * text_length
    ///  + comma_count * 10`
    ///
    /// The `+1` denominator avoids division by zero on empty elements.
    pub fn density(&self) -> f64 {
        let text = self.text_length as f64;
        let link = self.link_text_length as f64;
        let commas = self.comma_count as f64;

        ((text - link) / (text + 1.0)) * text + commas * 10.0
    }

    /// Anchor count relative to text volume.
    ///
    /// `anchor_count / (text_length/100 + 1)`; values above ~0.5 mean
    /// the element is mostly navigation, not prose.
    pub fn link_ratio(&self) -> f64 {
        self.anchor_count as f64 / (self.text_length as f64 / 100.0 + 1.0)
    }
}

/// Convenience wrapper: measure and score in one call.
pub fn density(element: &Element<'_>) -> f64 {
    TextMetrics::measure(element).density()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::Document;

    fn first<'a>(doc: &'a Document, selector: &str) -> Element<'a> {
        doc.select(selector).unwrap().into_iter().next().unwrap()
    }

    #[test]
    fn test_empty_element_scores_zero() {
        let doc = Document::parse("<div></div>").unwrap();
        let metrics = TextMetrics::measure(&first(&doc, "div"));

        assert_eq!(metrics.text_length, 0);
        assert_eq!(metrics.density(), 0.0);
    }

    #[test]
    fn test_commas_reward_prose() {
        let doc = Document::parse("<div>one, two, three</div>").unwrap();
        let metrics = TextMetrics::measure(&first(&doc, "div"));

        assert_eq!(metrics.comma_count, 2);
        // 15 text chars, no links: (15/16)*15 + 20
        let expected = (15.0 / 16.0) * 15.0 + 20.0;
        assert!((metrics.density() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_link_text_penalized() {
        let plain = Document::parse("<div>Some ordinary prose text here</div>").unwrap();
        let linked = Document::parse(r##"<div>Some ordinary <a href="#">prose text</a> here</div>"##).unwrap();

        let plain_score = density(&first(&plain, "div"));
        let linked_score = density(&first(&linked, "div"));

        assert!(linked_score <= plain_score);
    }

    #[test]
    fn test_all_link_text_scores_near_zero() {
        let doc = Document::parse(r##"<div><a href="#">Entirely a link</a></div>"##).unwrap();
        let metrics = TextMetrics::measure(&first(&doc, "div"));

        assert_eq!(metrics.text_length, metrics.link_text_length);
        assert!(metrics.density() < 1.0);
    }

    #[test]
    fn test_link_ratio() {
        let doc = Document::parse(
            r##"<div><a href="/a">a</a><a href="/b">b</a><a href="/c">c</a> and a little text</div>"##,
        )
        .unwrap();
        let metrics = TextMetrics::measure(&first(&doc, "div"));

        assert_eq!(metrics.anchor_count, 3);
        assert!(metrics.link_ratio() > 0.5);
    }

    #[test]
    fn test_long_prose_low_link_ratio() {
        let prose = "word ".repeat(100);
        let html = format!(r##"<div>{}<a href="/x">one link</a></div>"##, prose);
        let doc = Document::parse(&html).unwrap();
        let metrics = TextMetrics::measure(&first(&doc, "div"));

        assert!(metrics.link_ratio() < 0.5);
    }

    #[test]
    fn test_nested_anchor_text_counted() {
        let doc = Document::parse(r##"<div><p><a href="#">nested link</a></p> plus text</div>"##).unwrap();
        let metrics = TextMetrics::measure(&first(&doc, "div"));

        assert_eq!(metrics.link_text_length, "nested link".chars().count());
    }
}
