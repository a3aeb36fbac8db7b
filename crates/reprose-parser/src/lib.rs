//! Reprose Parser
//!
//! Converts markdown-ish or plain prose text into semantic HTML:
//! headings, bullet and numbered lists, and paragraphs with inline
//! formatting applied.
//!
//! # Overview
//!
//! Conversion is a fold over the source lines. Each line is classified
//! (see [`classify`]) and fed to a [`BlockBuilder`], which carries at most
//! one pending list. The pending list is flushed exactly once, on a blank
//! line, a list kind switch, any non-list line, or end of input.
//!
//! # Example
//!
//! ```
//! use reprose_parser::convert;
//!
//! let html = convert("* one\n* two\n\nNext");
//! assert_eq!(html, "<ul><li>one</li><li>two</li></ul>\n<p>Next</p>");
//! ```

pub mod classify;
pub mod inline;

pub use classify::{classify, LineClass};
pub use inline::{format_inline, link_bare_urls};

use regex::Regex;
use reprose_config::ConvertConfig;
use reprose_core::{Block, ListBlock, ListKind};
use std::sync::LazyLock;

/// Paragraphs containing only whitespace.
static EMPTY_PARAGRAPH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<p>\s*</p>").unwrap());

// =============================================================================
// Block builder
// =============================================================================

/// Fold state: finished blocks plus the list still being accumulated.
#[derive(Debug, Default)]
pub struct BlockBuilder {
    blocks: Vec<Block>,
    pending: Option<ListBlock>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one classified line.
    pub fn accept(mut self, line: LineClass<'_>, heuristic_level: u8) -> Self {
        match line {
            LineClass::Blank => self.flush(),
            LineClass::Heading { level, text } => self.push(Block::heading(level, text)),
            LineClass::HeuristicHeading(text) => self.push(Block::heading(heuristic_level, text)),
            LineClass::Bullet(item) => self.push_item(ListKind::Bullet, format_inline(item)),
            LineClass::Numbered(item) => self.push_item(ListKind::Numbered, format_inline(item)),
            LineClass::Text(text) => self.push(Block::Paragraph(format_inline(text))),
        }
        self
    }

    /// Close the pending list, if any, and return all blocks in order.
    pub fn finish(mut self) -> Vec<Block> {
        self.flush();
        self.blocks
    }

    fn push(&mut self, block: Block) {
        self.flush();
        self.blocks.push(block);
    }

    fn push_item(&mut self, kind: ListKind, item: String) {
        if self.pending.as_ref().is_some_and(|list| list.kind != kind) {
            self.flush();
        }
        self.pending
            .get_or_insert_with(|| ListBlock::new(kind))
            .push(item);
    }

    fn flush(&mut self) {
        if let Some(list) = self.pending.take() {
            if !list.is_empty() {
                self.blocks.push(Block::List(list));
            }
        }
    }
}

// =============================================================================
// Converter
// =============================================================================

/// Text-to-HTML converter.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConvertConfig,
}

impl Converter {
    /// Create a converter with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with specific settings.
    pub fn with_config(config: ConvertConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Classify `text` into blocks, in document order.
    pub fn blocks(&self, text: &str) -> Vec<Block> {
        let lines: Vec<&str> = text.split('\n').collect();

        lines
            .iter()
            .enumerate()
            .map(|(i, line)| classify(line, lines.get(i + 1).copied(), &self.config))
            .fold(BlockBuilder::new(), |builder, class| {
                builder.accept(class, self.config.heuristic_level)
            })
            .finish()
    }

    /// Convert `text` to HTML. Never fails; unrecognized lines become paragraphs.
    pub fn convert(&self, text: &str) -> String {
        let html = render(&self.blocks(text));
        cleanup(&html)
    }
}

/// Join rendered blocks with newlines.
pub fn render(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(Block::to_html)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collapse double paragraph wrappers and drop empty paragraphs.
pub fn cleanup(html: &str) -> String {
    let html = html.replace("<p><p>", "<p>").replace("</p></p>", "</p>");
    EMPTY_PARAGRAPH_RE.replace_all(&html, "").into_owned()
}

/// Convert text to HTML with default settings.
pub fn convert(text: &str) -> String {
    Converter::new().convert(text)
}

/// Convert text to HTML with the given settings.
pub fn convert_with(text: &str, config: &ConvertConfig) -> String {
    Converter::with_config(config.clone()).convert(text)
}
