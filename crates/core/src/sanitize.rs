//! Sanitization and rewriting of the winning candidate's markup.
//!
//! The cleaner receives the serialized markup of the winning element and
//! never touches the parsed source document, so repeated extraction
//! calls against the same source are independent and side-effect-free.
//!
//! Three ordered phases:
//! 1. bulk removal of noise elements (streaming rewrite),
//! 2. per-element attribute stripping, image resolution, empty-node
//!    removal, and paragraph promotion,
//! 3. final whitespace/empty-pair normalization on the string.

use std::borrow::Cow;

use lol_html::html_content::Element;
use lol_html::{ElementContentHandlers, HtmlRewriter, Selector, Settings, element};
use regex::Regex;
use url::Url;

/// Selectors removed wholesale during the bulk pass: script/style tags,
/// structural chrome, and the usual ad/social/comment/subscribe widget
/// classes, matched by exact class/id and by substring.
const REMOVE_SELECTORS: &[&str] = &[
    "script",
    "style",
    "noscript",
    "nav",
    "header",
    "footer",
    "aside",
    ".ad",
    ".ads",
    ".advert",
    ".advertisement",
    ".ad-container",
    ".social-share",
    ".share-buttons",
    ".share-bar",
    ".comments",
    ".comment",
    ".comment-section",
    "#comments",
    "#disqus_thread",
    ".loading",
    ".spinner",
    ".subscribe",
    ".newsletter",
    ".newsletter-signup",
    ".popup",
    ".modal",
    ".overlay",
    ".cookie",
    ".cookie-banner",
    ".cookie-consent",
    ".related",
    ".related-posts",
    ".related-articles",
    ".recommended",
    ".read-more",
    ".readmore",
    ".author-bio",
    ".author-box",
    ".post-meta",
    ".entry-meta",
    ".post-tags",
    ".tags",
    ".breadcrumb",
    ".breadcrumbs",
    ".sidebar",
    "#sidebar",
    ".widget",
    ".widget-area",
    ".pagination",
    ".nav-links",
    ".post-navigation",
    r#"[class*="share"]"#,
    r#"[id*="share"]"#,
    r#"[class*="social"]"#,
    r#"[id*="social"]"#,
    r#"[class*="loading"]"#,
    r#"[id*="loading"]"#,
    r#"[class*="subscribe"]"#,
    r#"[id*="subscribe"]"#,
];

/// Stray class values that get the `class` attribute dropped during the
/// per-element pass. Narrower than the bulk list: these elements are
/// kept, only the attribute goes.
const NOISE_CLASS_PATTERN: &str = "loading|spinner|share|social|subscribe";

/// Sizing and lazy-loading attributes stripped from kept images.
const IMAGE_STRIP_ATTRS: &[&str] = &[
    "width", "height", "srcset", "sizes", "loading", "decoding", "data-src", "data-lazy-src",
];

/// Tags subject to empty-pair removal: every content tag that can
/// plausibly appear in an article body. Void tags (`br`, `hr`, `img`)
/// never form an open/close pair and are exempt.
const EMPTY_NODE_TAGS: &[&str] = &[
    "div",
    "p",
    "span",
    "section",
    "article",
    "aside",
    "header",
    "footer",
    "nav",
    "main",
    "figure",
    "figcaption",
    "ul",
    "ol",
    "li",
    "dl",
    "dt",
    "dd",
    "a",
    "strong",
    "em",
    "b",
    "i",
    "u",
    "small",
    "sup",
    "sub",
    "code",
    "pre",
    "mark",
    "blockquote",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "table",
    "thead",
    "tbody",
    "tfoot",
    "tr",
    "td",
    "th",
    "caption",
];

/// Configuration for the sanitization pass.
#[derive(Debug, Clone)]
pub struct SanitizeConfig {
    /// Selectors deleted wholesale in the bulk-removal phase.
    pub remove_selectors: Vec<String>,
    /// Regex (applied to the lower-cased class value) that drops a kept
    /// element's `class` attribute.
    pub noise_class_pattern: String,
    /// Minimum trimmed text length for promoting a bare-text `div` to `<p>`.
    pub promote_min_text: usize,
    /// Images with a declared width or height below this (and an
    /// icon/avatar/logo src token) are dropped.
    pub icon_max_dimension: u32,
    /// `alt` text applied to images that have none.
    pub default_alt: String,
    /// Tags whose empty open/close pairs are pruned. Void tags never
    /// pair up and need no entry.
    pub empty_node_tags: Vec<String>,
    /// Maximum fixpoint passes for empty-node removal.
    pub max_empty_node_passes: usize,
}

impl Default for SanitizeConfig {
    fn default() -> Self {
        Self {
            remove_selectors: REMOVE_SELECTORS.iter().map(|s| s.to_string()).collect(),
            noise_class_pattern: NOISE_CLASS_PATTERN.to_string(),
            promote_min_text: 50,
            icon_max_dimension: 100,
            default_alt: "Article image".to_string(),
            empty_node_tags: EMPTY_NODE_TAGS.iter().map(|s| s.to_string()).collect(),
            max_empty_node_passes: 10,
        }
    }
}

/// Output of the sanitization pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedContent {
    /// Sanitized markup, suitable for direct storage as an article body.
    pub html: String,
    /// Absolute image URLs in document order of first appearance.
    /// Duplicates are not collapsed.
    pub images: Vec<String>,
}

/// Cleans the serialized markup of a winning candidate.
///
/// `base_url` is used only to resolve relative image paths; when it is
/// `None`, relative srcs pass through unresolved.
pub fn clean(html: &str, base_url: Option<&Url>, config: &SanitizeConfig) -> CleanedContent {
    let stripped = remove_noise_elements(html, config);
    let (rewritten, images) = rewrite_elements(&stripped, base_url, config);
    let pruned = remove_empty_nodes(&rewritten, config);
    let promoted = promote_bare_text_divs(&pruned, config.promote_min_text);
    let html = normalize_whitespace(&promoted);

    CleanedContent { html, images }
}

/// Phase 1: delete every element matching the block list.
fn remove_noise_elements(html: &str, config: &SanitizeConfig) -> String {
    let mut handlers: Vec<(Cow<'_, Selector>, ElementContentHandlers<'_>)> = Vec::new();

    for selector in &config.remove_selectors {
        let Ok(parsed) = selector.parse::<Selector>() else {
            continue;
        };
        handlers.push((
            Cow::Owned(parsed),
            ElementContentHandlers::default().element(|el: &mut Element| {
                el.remove();
                Ok(())
            }),
        ));
    }

    let mut output = String::new();
    let mut rewriter = HtmlRewriter::new(
        Settings { element_content_handlers: handlers, ..Settings::default() },
        |c: &[u8]| {
            output.push_str(&String::from_utf8_lossy(c));
        },
    );

    if rewriter.write(html.as_bytes()).is_err() {
        return html.to_string();
    }
    if rewriter.end().is_err() {
        return html.to_string();
    }

    output
}

/// Phase 2a: attribute stripping and image resolution over every
/// remaining element. Returns the rewritten markup and the collected
/// absolute image URLs.
fn rewrite_elements(html: &str, base_url: Option<&Url>, config: &SanitizeConfig) -> (String, Vec<String>) {
    let noise_class = Regex::new(&config.noise_class_pattern).ok();
    let mut images: Vec<String> = Vec::new();
    let mut output = String::new();

    {
        let images = &mut images;
        let mut rewriter = HtmlRewriter::new(
            Settings {
                element_content_handlers: vec![
                    // Registered before the generic handler so the icon
                    // check sees width/height before they are stripped.
                    element!("img", |el| {
                        handle_image(el, base_url, config, images);
                        Ok(())
                    }),
                    element!("*", |el| {
                        if el.removed() {
                            return Ok(());
                        }

                        let names: Vec<String> = el.attributes().iter().map(|a| a.name()).collect();
                        for name in names {
                            if name.starts_with("data-") || name.starts_with("on") || name == "style" {
                                el.remove_attribute(&name);
                            }
                        }

                        if let Some(noise) = &noise_class
                            && let Some(class) = el.get_attribute("class")
                            && noise.is_match(&class.to_lowercase())
                        {
                            el.remove_attribute("class");
                        }

                        Ok(())
                    }),
                ],
                ..Settings::default()
            },
            |c: &[u8]| {
                output.push_str(&String::from_utf8_lossy(c));
            },
        );

        if rewriter.write(html.as_bytes()).is_err() || rewriter.end().is_err() {
            return (html.to_string(), Vec::new());
        }
    }

    (output, images)
}

/// Resolves, filters, and rewrites one `<img>` element.
fn handle_image(el: &mut Element, base_url: Option<&Url>, config: &SanitizeConfig, images: &mut Vec<String>) {
    let src = el
        .get_attribute("src")
        .or_else(|| el.get_attribute("data-src"))
        .or_else(|| el.get_attribute("data-lazy-src"));

    // No source at all: the image cannot be rendered.
    let Some(src) = src else {
        el.remove();
        return;
    };

    if is_icon_sized(el, config.icon_max_dimension) && has_icon_token(&src) {
        el.remove();
        return;
    }

    let absolute = resolve_src(&src, base_url);
    images.push(absolute.clone());
    el.set_attribute("src", &absolute).ok();

    for name in IMAGE_STRIP_ATTRS {
        el.remove_attribute(name);
    }

    if el.get_attribute("alt").is_none() {
        el.set_attribute("alt", &config.default_alt).ok();
    }
}

/// Whether a declared width or height is a nonzero value under the
/// configured dimension.
fn is_icon_sized(el: &Element, max_dimension: u32) -> bool {
    ["width", "height"].iter().any(|attr| {
        el.get_attribute(attr)
            .and_then(|v| v.trim().parse::<u32>().ok())
            .is_some_and(|n| n > 0 && n < max_dimension)
    })
}

/// Favicon/avatar heuristic on the source path.
fn has_icon_token(src: &str) -> bool {
    let src = src.to_lowercase();
    src.contains("icon") || src.contains("avatar") || src.contains("logo")
}

/// URLs already starting with `http` pass through unchanged; everything
/// else is joined against the base URL when one is available.
fn resolve_src(src: &str, base_url: Option<&Url>) -> String {
    if src.starts_with("http") {
        return src.to_string();
    }
    match base_url {
        Some(base) => match base.join(src) {
            Ok(url) => url.to_string(),
            Err(_) => src.to_string(),
        },
        None => src.to_string(),
    }
}

/// Phase 2b: iteratively remove empty open/close pairs until a fixpoint.
///
/// Void tags (`br`, `hr`, `img`) never form such a pair, which keeps
/// them in the output even though they carry no text or children.
fn remove_empty_nodes(html: &str, config: &SanitizeConfig) -> String {
    let mut result = html.to_string();

    for _ in 0..config.max_empty_node_passes {
        let before = result.clone();

        for tag in &config.empty_node_tags {
            let re = Regex::new(&format!(r"<{tag}(?:\s[^>]*)?>\s*</{tag}>")).unwrap();
            result = re.replace_all(&result, "").to_string();
        }

        if result == before {
            break;
        }
    }

    result
}

/// Phase 2c: replace childless `div`s holding bare text with `<p>`.
///
/// Sites without semantic markup frequently put paragraph text directly
/// into `div` containers.
fn promote_bare_text_divs(html: &str, min_text: usize) -> String {
    let re = Regex::new(r"<div\b[^>]*>([^<]+)</div>").unwrap();

    re.replace_all(html, |caps: &regex::Captures| {
        let text = caps[1].trim();
        if text.chars().count() > min_text {
            format!("<p>{}</p>", text)
        } else {
            caps[0].to_string()
        }
    })
    .to_string()
}

/// Phase 3: collapse leftover empty pairs and blank-line runs, trim.
fn normalize_whitespace(html: &str) -> String {
    let empty_p = Regex::new(r"<p(?:\s[^>]*)?>\s*</p>").unwrap();
    let empty_div = Regex::new(r"<div(?:\s[^>]*)?>\s*</div>").unwrap();
    let blank_runs = Regex::new(r"(?:\n[ \t]*){3,}").unwrap();

    let result = empty_p.replace_all(html, "").to_string();
    let result = empty_div.replace_all(&result, "").to_string();
    let result = blank_runs.replace_all(&result, "\n\n").to_string();

    result.trim().to_string()
}
