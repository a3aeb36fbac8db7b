//! Line classification.
//!
//! Each source line is classified on its own, with one line of lookahead
//! for the heading heuristic. Precedence is fixed:
//! blank, explicit heading, heuristic heading, bullet item, numbered item, text.

use regex::Regex;
use reprose_config::ConvertConfig;
use std::sync::LazyLock;

/// `#`..`######` followed by whitespace and text.
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").unwrap());

/// Starts with an ASCII capital and has no sentence punctuation.
static HEADING_SHAPE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z][^.!?]*$").unwrap());

/// Starts like a list item or a number.
static LIST_START_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[*\-•\d]").unwrap());

static BULLET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[*\-•]\s+(.+)$").unwrap());

static NUMBERED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s+(.+)$").unwrap());

/// Classification of a single trimmed source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Empty or whitespace only
    Blank,
    /// `# Title` style heading
    Heading { level: u8, text: &'a str },
    /// Short capitalized line that reads like a section title
    HeuristicHeading(&'a str),
    /// `* item`, `- item` or `• item`
    Bullet(&'a str),
    /// `1. item`
    Numbered(&'a str),
    /// Anything else
    Text(&'a str),
}

/// Classify `line`, looking at `next` for the heading heuristic.
///
/// # Example
///
/// ```
/// use reprose_config::ConvertConfig;
/// use reprose_parser::classify::{classify, LineClass};
///
/// let config = ConvertConfig::default();
/// assert_eq!(
///     classify("## Setup", None, &config),
///     LineClass::Heading { level: 2, text: "Setup" }
/// );
/// assert_eq!(classify("- milk", None, &config), LineClass::Bullet("milk"));
/// ```
pub fn classify<'a>(line: &'a str, next: Option<&str>, config: &ConvertConfig) -> LineClass<'a> {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return LineClass::Blank;
    }

    if let Some(caps) = HEADING_RE.captures(trimmed) {
        let level = caps.get(1).map_or(1, |m| m.len()) as u8;
        let text = caps.get(2).map_or("", |m| m.as_str());
        return LineClass::Heading { level, text };
    }

    if config.heading_heuristic && looks_like_heading(trimmed, next, config.heading_max_length) {
        return LineClass::HeuristicHeading(trimmed);
    }

    if let Some(item) = BULLET_RE.captures(trimmed).and_then(|c| c.get(1)) {
        return LineClass::Bullet(item.as_str());
    }

    if let Some(item) = NUMBERED_RE.captures(trimmed).and_then(|c| c.get(1)) {
        return LineClass::Numbered(item.as_str());
    }

    LineClass::Text(trimmed)
}

/// Short, capitalized, unpunctuated, not list-like, and followed by content.
fn looks_like_heading(trimmed: &str, next: Option<&str>, max_length: usize) -> bool {
    let followed_by_content = next.is_some_and(|n| !n.trim().is_empty());

    trimmed.chars().count() < max_length
        && HEADING_SHAPE_RE.is_match(trimmed)
        && !LIST_START_RE.is_match(trimmed)
        && !trimmed.contains('*')
        && !trimmed.contains('-')
        && followed_by_content
}
