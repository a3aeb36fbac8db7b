//! Inline formatter.
//!
//! Turns the inline markdown spans of a single line into HTML tags.
//! Rules run in a fixed order, each on the output of the previous one:
//!
//! 1. Bold: `**X**` becomes `<strong>X</strong>`
//! 2. Italic: `*X*` becomes `<em>X</em>`
//! 3. Link: `[text](url)` becomes an anchor
//! 4. Bare URL: `http(s)://...` outside any tag or anchor becomes an anchor
//!
//! Bold runs first so that `**` is never read as two italic markers.

use fancy_regex::Regex as FancyRegex;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Attributes added to every anchor we generate.
pub const LINK_ATTRS: &str = r#"target="_blank" rel="noopener noreferrer""#;

/// `**X**` with no `*` inside X.
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());

/// A lone `*` pair around content that neither starts nor ends with whitespace.
static ITALIC_RE: LazyLock<FancyRegex> = LazyLock::new(|| {
    FancyRegex::new(r"(?<!\*)\*([^*\s](?:[^*]*[^*\s])?)\*(?!\*)").unwrap()
});

/// `[text](url)`
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Bare http(s) URL.
static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"https?://[^\s<>"']+"#).unwrap());

/// Any HTML tag or comment.
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->|</?[A-Za-z][^>]*>").unwrap());

static ANCHOR_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^<a[\s>]").unwrap());

static ANCHOR_CLOSE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^</a\s*>$").unwrap());

/// Build an anchor tag with the standard link attributes.
///
/// # Example
///
/// ```
/// use reprose_parser::inline::anchor;
/// assert_eq!(
///     anchor("http://e.com", "e"),
///     r#"<a href="http://e.com" target="_blank" rel="noopener noreferrer">e</a>"#
/// );
/// ```
pub fn anchor(href: &str, text: &str) -> String {
    format!(r#"<a href="{href}" {LINK_ATTRS}>{text}</a>"#)
}

/// Apply the inline rules to a fragment of text.
///
/// # Example
///
/// ```
/// use reprose_parser::format_inline;
///
/// assert_eq!(
///     format_inline("**bold** and *em*"),
///     "<strong>bold</strong> and <em>em</em>"
/// );
/// ```
pub fn format_inline(text: &str) -> String {
    let bold = BOLD_RE.replace_all(text, "<strong>$1</strong>");
    let italic = apply_italic(&bold);
    let linked = LINK_RE.replace_all(&italic, |caps: &regex::Captures| anchor(&caps[2], &caps[1]));
    link_bare_urls(&linked)
}

fn apply_italic(text: &str) -> Cow<'_, str> {
    // A backtracking failure leaves the text as it was.
    match ITALIC_RE.try_replacen(text, 0, "<em>$1</em>") {
        Ok(replaced) => replaced,
        Err(_) => Cow::Borrowed(text),
    }
}

/// Wrap bare URLs in anchors, leaving tags and anchor bodies untouched.
///
/// URLs inside attribute values (such as an existing `href`) and URLs
/// used as the visible text of an existing anchor are never wrapped.
pub fn link_bare_urls(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut anchor_depth = 0usize;
    let mut last = 0;

    for tag in TAG_RE.find_iter(text) {
        push_text(&mut out, &text[last..tag.start()], anchor_depth == 0);

        let tag_str = tag.as_str();
        if ANCHOR_OPEN_RE.is_match(tag_str) {
            anchor_depth += 1;
        } else if ANCHOR_CLOSE_RE.is_match(tag_str) {
            anchor_depth = anchor_depth.saturating_sub(1);
        }
        out.push_str(tag_str);
        last = tag.end();
    }
    push_text(&mut out, &text[last..], anchor_depth == 0);

    out
}

fn push_text(out: &mut String, text: &str, linkify: bool) {
    if linkify {
        out.push_str(&URL_RE.replace_all(text, |caps: &regex::Captures| {
            anchor(&caps[0], &caps[0])
        }));
    } else {
        out.push_str(text);
    }
}
