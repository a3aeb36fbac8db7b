//! Content routing.
//!
//! Decides whether incoming content needs conversion, and always passes
//! the result through the publish sanitizer. Output that still lacks any
//! paragraph or heading markup is forced through the converter once more.

use regex::Regex;
use reprose_config::Config;
use reprose_parser::Converter;
use reprose_sanitize::PublishSanitizer;
use std::sync::LazyLock;

static HTML_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

static LEADING_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^<[a-z]").unwrap());

/// Whether `text` contains any HTML tag.
///
/// # Example
///
/// ```
/// use reprose_pipeline::has_html;
///
/// assert!(has_html("Intro <b>bold</b>"));
/// assert!(!has_html("2 < 3 and plain"));
/// ```
pub fn has_html(text: &str) -> bool {
    HTML_TAG_RE.is_match(text)
}

/// Whether `html` contains a paragraph or a heading.
pub fn has_block_markup(html: &str) -> bool {
    html.contains("<p>") || html.contains("<h")
}

/// Routes raw content through the converter and sanitizer.
#[derive(Debug, Clone, Default)]
pub struct ContentRouter {
    converter: Converter,
    sanitizer: PublishSanitizer,
}

impl ContentRouter {
    /// Create a router with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a router with specific settings.
    pub fn with_config(config: &Config) -> Self {
        Self {
            converter: Converter::with_config(config.convert.clone()),
            sanitizer: PublishSanitizer::with_config(&config.sanitize),
        }
    }

    /// Turn raw model or scraper output into publishable HTML.
    pub fn finalize(&self, raw: &str) -> String {
        let html = if has_html(raw) {
            // The leading-tag check sees the text left after removals.
            let cleaned = self.sanitizer.sanitize(raw);
            if LEADING_TAG_RE.is_match(cleaned.trim()) {
                cleaned
            } else {
                log::debug!("text precedes the first tag, converting mixed content");
                self.sanitizer.sanitize(&self.converter.convert(&cleaned))
            }
        } else {
            log::info!("plain text content, converting to HTML");
            self.sanitizer.sanitize(&self.converter.convert(raw))
        };

        if has_block_markup(&html) {
            return html;
        }

        log::warn!("no paragraph or heading markup after sanitizing, forcing conversion");
        self.sanitizer.sanitize(&self.converter.convert(&html))
    }
}

/// Finalize content with default settings.
///
/// # Example
///
/// ```
/// use reprose_pipeline::finalize_content;
///
/// assert_eq!(finalize_content("# Title\nBody text."), "<h1>Title</h1>\n<p>Body text.</p>");
/// ```
pub fn finalize_content(raw: &str) -> String {
    ContentRouter::new().finalize(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_html() {
        assert!(has_html("<p>x</p>"));
        assert!(has_html("text <br> text"));
        assert!(!has_html("plain text"));
        assert!(!has_html("a <"));
    }

    #[test]
    fn test_plain_text_is_converted() {
        assert_eq!(
            finalize_content("Intro line here.\n* one\n* two"),
            "<p>Intro line here.</p>\n<ul><li>one</li><li>two</li></ul>"
        );
    }

    #[test]
    fn test_list_only_text_takes_fallback() {
        assert_eq!(
            finalize_content("* one\n* two"),
            "<p><ul><li>one</li><li>two</li></ul></p>"
        );
    }

    #[test]
    fn test_html_is_sanitized_not_converted() {
        assert_eq!(
            finalize_content(r#"<h2>T</h2><p>See <a href="http://e.com">e</a></p><script>x</script>"#),
            r#"<h2>T</h2><p>See <a href="http://e.com" target="_blank" rel="noopener noreferrer">e</a></p>"#
        );
    }

    #[test]
    fn test_mixed_content_is_converted() {
        let out = finalize_content("Intro sentence here.\n<p>Body</p>");
        assert_eq!(out, "<p>Intro sentence here.</p>\n<p>Body</p>");
    }

    #[test]
    fn test_text_after_removed_script_is_converted() {
        assert_eq!(
            finalize_content("<script>x()</script>Intro text here.\n<p>Body</p>"),
            "<p>Intro text here.</p>\n<p>Body</p>"
        );
        assert_eq!(
            finalize_content("<style>p { color: red }</style>Lead in.\n<p>Rest.</p>"),
            "<p>Lead in.</p>\n<p>Rest.</p>"
        );
    }

    #[test]
    fn test_list_only_html_forced_through_converter() {
        let out = finalize_content("<ul><li>a</li></ul>");
        assert_eq!(out, "<p><ul><li>a</li></ul></p>");
    }

    #[test]
    fn test_output_is_stable() {
        let once = finalize_content("# T\nSee http://e.com for more.\n<img src=\"a.png\">");
        assert_eq!(finalize_content(&once), once);
    }
}
