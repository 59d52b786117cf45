//! HTML parsing and DOM access.
//!
//! This module provides the [`Document`] and [`Element`] types used by
//! the rest of the crate. They deliberately expose only the operations
//! the extractor needs (CSS-selector queries, text content, attribute
//! reads, serialization) so the pipeline stays independent of the
//! concrete DOM library underneath.
//!
//! The parsed tree is never mutated: parsing is browser-grade and
//! tolerant of malformed markup, and all cleanup happens downstream on
//! a serialized copy of the winning element.
//!
//! # Example
//!
//! ```rust
//! use marrow_core::parse::Document;
//!
//! let html = r#"<article><p class="lead">Hello</p></article>"#;
//! let doc = Document::parse(html).unwrap();
//! let paragraphs = doc.select("p.lead").unwrap();
//! assert_eq!(paragraphs[0].text(), "Hello");
//! ```

use scraper::{Html, Selector};

use crate::{MarrowError, Result};

/// A parsed HTML document.
///
/// One extraction call owns exactly one `Document`; it is discarded at
/// the end of the call. Repeated extractions against the same source
/// string are independent.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// Parsing never fails on malformed markup; the parser recovers the
    /// way a browser would.
    pub fn parse(html: &str) -> Result<Self> {
        let html = Html::parse_document(html);
        Ok(Self { html })
    }

    /// Serializes the whole document back to a markup string.
    ///
    /// Used by tests to verify that extraction leaves the source
    /// document untouched.
    pub fn as_string(&self) -> String {
        self.html.html()
    }

    /// Selects elements using a CSS selector, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`MarrowError::HtmlParse`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel =
            Selector::parse(selector).map_err(|e| MarrowError::HtmlParse(format!("invalid selector: {}", e)))?;

        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Gets all text content of the document.
    pub fn text_content(&self) -> String {
        self.html.root_element().text().collect()
    }
}

/// A handle to a single element in the parsed tree.
///
/// Read-only by construction: scoring never modifies the document, and
/// the sanitizer receives a serialized copy rather than this handle.
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the markup of this element including its own tags.
    pub fn outer_html(&self) -> String {
        self.element.html()
    }

    /// Gets the concatenated text of this element and all descendants.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the value of an attribute, or `None` when absent.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.element.value().attr(name)
    }

    /// Gets the lowercase tag name.
    pub fn tag_name(&self) -> String {
        self.element.value().name().to_lowercase()
    }

    /// Selects descendant elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`MarrowError::HtmlParse`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel =
            Selector::parse(selector).map_err(|e| MarrowError::HtmlParse(format!("invalid selector: {}", e)))?;

        Ok(self.element.select(&sel).map(|el| Element { element: el }).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HTML: &str = r#"
        <!DOCTYPE html>
        <html lang="en">
        <body>
            <h1>Heading</h1>
            <div id="wrap">
                <p class="content">First paragraph</p>
                <p class="content">Second paragraph</p>
            </div>
            <a href="https://example.com">Link</a>
        </body>
        </html>
    "#;

    #[test]
    fn test_select_elements_in_document_order() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        let elements = doc.select("p.content").unwrap();

        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].text(), "First paragraph");
        assert_eq!(elements[1].text(), "Second paragraph");
    }

    #[test]
    fn test_element_attributes() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        let links = doc.select("a").unwrap();

        assert_eq!(links[0].attr("href"), Some("https://example.com"));
        assert_eq!(links[0].attr("rel"), None);
        assert_eq!(links[0].tag_name(), "a");
    }

    #[test]
    fn test_invalid_selector() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        let result = doc.select("[[invalid");

        assert!(matches!(result, Err(MarrowError::HtmlParse(_))));
    }

    #[test]
    fn test_malformed_markup_is_recovered() {
        let doc = Document::parse("<div><p>Unclosed").unwrap();
        assert!(doc.text_content().contains("Unclosed"));
    }

    #[test]
    fn test_nested_select() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        let wrap = &doc.select("#wrap").unwrap()[0];
        let inner = wrap.select("p").unwrap();
        assert_eq!(inner.len(), 2);
    }
}
