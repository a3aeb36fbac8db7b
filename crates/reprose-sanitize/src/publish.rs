//! Publish-side HTML sanitization.
//!
//! Text-level transforms over full HTML destined for storage:
//! script and style elements are removed, images get `alt` and
//! `loading` attributes, and off-page links are forced to open in a
//! new tab. Attributes are only added when absent, so the transform is
//! idempotent.

use regex::{Captures, Regex};
use reprose_config::SanitizeConfig;
use std::sync::LazyLock;

static SCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").unwrap());

static STYLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style\b[^>]*>.*?</style\s*>").unwrap());

static IMG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<img\b([^>]*)>").unwrap());

static ANCHOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<a\s+([^>]*)>").unwrap());

static HREF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)(?:^|\s)href\s*=\s*["']([^"']*)["']"#).unwrap());

static ALT_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| attr_regex("alt"));
static LOADING_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| attr_regex("loading"));
static TARGET_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| attr_regex("target"));
static REL_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| attr_regex("rel"));

/// Matches an attribute name as a whole word inside a tag's attribute text.
fn attr_regex(name: &str) -> Regex {
    Regex::new(&format!(r"(?i)(?:^|\s){name}(?:\s*=|\s|/|$)")).unwrap()
}

/// Publish-side sanitizer.
#[derive(Debug, Clone)]
pub struct PublishSanitizer {
    image_alt: String,
}

impl Default for PublishSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PublishSanitizer {
    /// Create a sanitizer with default settings.
    pub fn new() -> Self {
        Self::with_config(&SanitizeConfig::default())
    }

    /// Create a sanitizer with specific settings.
    pub fn with_config(config: &SanitizeConfig) -> Self {
        Self {
            image_alt: config.image_alt.clone(),
        }
    }

    /// Sanitize `html`.
    pub fn sanitize(&self, html: &str) -> String {
        let html = SCRIPT_RE.replace_all(html, "");
        let html = STYLE_RE.replace_all(&html, "");
        let html = IMG_RE.replace_all(&html, |caps: &Captures| self.fix_image(caps));
        ANCHOR_RE
            .replace_all(&html, |caps: &Captures| fix_anchor(caps))
            .into_owned()
    }

    fn fix_image(&self, caps: &Captures) -> String {
        let attrs = &caps[1];
        let mut additions = String::new();

        if !ALT_ATTR_RE.is_match(attrs) {
            additions.push_str(&format!(r#" alt="{}""#, self.image_alt));
        }
        if !LOADING_ATTR_RE.is_match(attrs) {
            additions.push_str(r#" loading="lazy""#);
        }

        if additions.is_empty() {
            return caps[0].to_string();
        }

        let (base, self_closing) = split_self_closing(attrs);
        let close = if self_closing { " />" } else { ">" };
        format!("<img{base}{additions}{close}")
    }
}

fn fix_anchor(caps: &Captures) -> String {
    let attrs = &caps[1];

    let Some(href) = HREF_RE.captures(attrs).and_then(|c| c.get(1)) else {
        return caps[0].to_string();
    };
    if TARGET_ATTR_RE.is_match(attrs) || href.as_str().starts_with('#') {
        return caps[0].to_string();
    }

    let mut fixed = format!(r#"<a {} target="_blank""#, attrs.trim_end());
    if !REL_ATTR_RE.is_match(attrs) {
        fixed.push_str(r#" rel="noopener noreferrer""#);
    }
    fixed.push('>');
    fixed
}

/// Split a trailing `/` off an attribute string.
fn split_self_closing(attrs: &str) -> (&str, bool) {
    let trimmed = attrs.trim_end();
    match trimmed.strip_suffix('/') {
        Some(base) => (base.trim_end(), true),
        None => (trimmed, false),
    }
}

/// Sanitize HTML for publishing with default settings.
///
/// # Example
///
/// ```
/// use reprose_sanitize::sanitize_for_publish;
///
/// let html = sanitize_for_publish(r#"<img src="x.png">"#);
/// assert_eq!(html, r#"<img src="x.png" alt="Article image" loading="lazy">"#);
/// assert_eq!(sanitize_for_publish(&html), html);
/// ```
pub fn sanitize_for_publish(html: &str) -> String {
    PublishSanitizer::new().sanitize(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_script_and_style() {
        let html = "<p>a</p><script>alert(1)</script><STYLE type=\"text/css\">p{}</STYLE><p>b</p>";
        assert_eq!(sanitize_for_publish(html), "<p>a</p><p>b</p>");
    }

    #[test]
    fn test_removes_multiline_script() {
        let html = "<p>a</p><script>\nvar x = '<b>';\n</script >\n<p>b</p>";
        assert_eq!(sanitize_for_publish(html), "<p>a</p>\n<p>b</p>");
    }

    #[test]
    fn test_image_gets_alt_and_loading() {
        let out = sanitize_for_publish(r#"<img src="x.png">"#);
        assert_eq!(out.matches(r#"alt="Article image""#).count(), 1);
        assert_eq!(out.matches(r#"loading="lazy""#).count(), 1);
    }

    #[test]
    fn test_image_keeps_existing_attributes() {
        let html = r#"<img src="x.png" alt="Chart" loading="eager">"#;
        assert_eq!(sanitize_for_publish(html), html);
    }

    #[test]
    fn test_image_data_alt_is_not_alt() {
        let out = sanitize_for_publish(r#"<img data-alt="x" src="y.png">"#);
        assert!(out.contains(r#" alt="Article image""#));
    }

    #[test]
    fn test_self_closing_image() {
        assert_eq!(
            sanitize_for_publish(r#"<img src="x.png"/>"#),
            r#"<img src="x.png" alt="Article image" loading="lazy" />"#
        );
    }

    #[test]
    fn test_custom_alt_text() {
        let config = SanitizeConfig {
            image_alt: "Photo".to_string(),
            ..SanitizeConfig::default()
        };
        let out = PublishSanitizer::with_config(&config).sanitize("<img src=\"a\">");
        assert!(out.contains(r#"alt="Photo""#));
    }

    #[test]
    fn test_link_gets_target() {
        assert_eq!(
            sanitize_for_publish(r#"<a href="https://e.com">e</a>"#),
            r#"<a href="https://e.com" target="_blank" rel="noopener noreferrer">e</a>"#
        );
    }

    #[test]
    fn test_anchor_link_untouched() {
        let html = r##"<a href="#section">jump</a>"##;
        assert_eq!(sanitize_for_publish(html), html);
    }

    #[test]
    fn test_link_with_target_untouched() {
        let html = r#"<a href="/x" target="_self">x</a>"#;
        assert_eq!(sanitize_for_publish(html), html);
    }

    #[test]
    fn test_link_with_rel_gets_target_only() {
        assert_eq!(
            sanitize_for_publish(r#"<a href="/x" rel="nofollow">x</a>"#),
            r#"<a href="/x" rel="nofollow" target="_blank">x</a>"#
        );
    }

    #[test]
    fn test_anchor_without_href_untouched() {
        let html = r#"<a name="top"></a>"#;
        assert_eq!(sanitize_for_publish(html), html);
    }

    #[test]
    fn test_abbr_is_not_anchor() {
        let html = r#"<abbr title="x">X</abbr>"#;
        assert_eq!(sanitize_for_publish(html), html);
    }

    #[test]
    fn test_idempotent() {
        let html = r#"<h2>T</h2><img src="a.png"><p><a href="http://e.com">e</a> <a href="/b" rel="x">b</a></p><script>x</script>"#;
        let once = sanitize_for_publish(html);
        let twice = sanitize_for_publish(&once);
        assert_eq!(once, twice);
        assert_eq!(once.matches("target=").count(), 2);
        assert_eq!(once.matches("rel=").count(), 2);
    }

    #[test]
    fn test_split_self_closing() {
        assert_eq!(split_self_closing(r#" src="a" /"#), (r#" src="a""#, true));
        assert_eq!(split_self_closing(r#" src="a""#), (r#" src="a""#, false));
    }
}
