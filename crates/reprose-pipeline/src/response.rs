//! Model response parsing.
//!
//! The rewrite model is asked to answer in the form
//!
//! ```text
//! TITLE: <new title>
//! CONTENT: <article body>
//! ```
//!
//! Models do not always comply, so both markers are optional.

use crate::route::ContentRouter;
use regex::Regex;
use reprose_core::{ReproseError, Result};
use std::sync::LazyLock;

/// Title runs to the end of its line or up to an inline `CONTENT:` marker.
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)TITLE:\s*(.+?)(?:\n|CONTENT:)").unwrap());

static CONTENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)CONTENT:\s*(.+)").unwrap());

static TITLE_LINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)TITLE:\s*.+?\n").unwrap());

/// Title and raw content pulled out of a model response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelResponse {
    pub title: String,
    pub content: String,
}

impl ModelResponse {
    /// Parse a model response, keeping `fallback_title` when no title marker exists.
    ///
    /// # Example
    ///
    /// ```
    /// use reprose_pipeline::ModelResponse;
    ///
    /// let parsed = ModelResponse::parse("TITLE: New\nCONTENT: <p>Body</p>", "Old").unwrap();
    /// assert_eq!(parsed.title, "New");
    /// assert_eq!(parsed.content, "<p>Body</p>");
    /// ```
    pub fn parse(text: &str, fallback_title: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(ReproseError::Response("empty model response".to_string()));
        }

        let title_match = TITLE_RE.captures(text).and_then(|c| c.get(1));
        let title = title_match
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_else(|| fallback_title.to_string());

        let content = match CONTENT_RE.captures(text).and_then(|c| c.get(1)) {
            Some(m) => m.as_str().trim().to_string(),
            None if title_match.is_some() => {
                log::debug!("no CONTENT marker, using text after the title line");
                let rest: String = TITLE_LINE_RE.split(text).skip(1).collect();
                if rest.trim().is_empty() {
                    text.to_string()
                } else {
                    rest.trim().to_string()
                }
            }
            None => {
                log::debug!("no TITLE or CONTENT marker, using the whole response");
                text.to_string()
            }
        };

        Ok(Self { title, content })
    }
}

/// A rewritten article ready to publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhancedArticle {
    pub title: String,
    /// Sanitized HTML
    pub content: String,
}

impl EnhancedArticle {
    /// Parse a model response and finalize its content with `router`.
    pub fn from_response(text: &str, fallback_title: &str, router: &ContentRouter) -> Result<Self> {
        let parsed = ModelResponse::parse(text, fallback_title)?;
        Ok(Self {
            title: parsed.title,
            content: router.finalize(&parsed.content),
        })
    }
}

/// Parse and finalize a model response with default settings.
pub fn enhance_response(text: &str, fallback_title: &str) -> Result<EnhancedArticle> {
    EnhancedArticle::from_response(text, fallback_title, &ContentRouter::new())
}
