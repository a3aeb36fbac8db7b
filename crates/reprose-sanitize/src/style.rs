//! Inline `style` attribute helpers used by the display sanitizer.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Declarations that make media scale with their container.
pub const RESPONSIVE: &str = "max-width: 100%; height: auto;";

static FONT_SIZE_PX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)font-size:\s*(\d+)px").unwrap());

/// Whether an inline style hides the element.
///
/// # Example
///
/// ```
/// use reprose_sanitize::style::is_hidden;
///
/// assert!(is_hidden("color: red; display: none"));
/// assert!(is_hidden("visibility:hidden"));
/// assert!(!is_hidden("display: block"));
/// ```
pub fn is_hidden(style: &str) -> bool {
    let compact: String = style
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();
    compact.contains("display:none") || compact.contains("visibility:hidden")
}

/// Whether an inline style already constrains width.
pub fn has_max_width(style: &str) -> bool {
    style.contains("max-width")
}

/// Prefix the responsive declarations unless a `max-width` is already set.
pub fn make_responsive(style: &str) -> String {
    if has_max_width(style) {
        return style.to_string();
    }
    let existing = style.trim();
    if existing.is_empty() {
        RESPONSIVE.to_string()
    } else {
        format!("{RESPONSIVE} {existing}")
    }
}

/// Replace pixel font sizes above `limit` with `replacement`.
///
/// Returns `None` when nothing changed.
///
/// # Example
///
/// ```
/// use reprose_sanitize::style::clamp_font_size;
///
/// assert_eq!(
///     clamp_font_size("font-size: 240px; color: red", 100, "2rem"),
///     Some("font-size: 2rem; color: red".to_string())
/// );
/// assert_eq!(clamp_font_size("font-size: 18px", 100, "2rem"), None);
/// ```
pub fn clamp_font_size(style: &str, limit: u32, replacement: &str) -> Option<String> {
    let mut changed = false;
    let clamped = FONT_SIZE_PX_RE.replace_all(style, |caps: &Captures| {
        // Digits too long for u64 are certainly over the limit.
        let oversized = caps[1]
            .parse::<u64>()
            .map_or(true, |px| px > u64::from(limit));
        if oversized {
            changed = true;
            format!("font-size: {replacement}")
        } else {
            caps[0].to_string()
        }
    });
    changed.then(|| clamped.into_owned())
}
