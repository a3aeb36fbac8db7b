//! Block types produced by the converter.
//!
//! A document is an ordered sequence of [`Block`] values. Blocks are
//! immutable once produced; list items are accumulated in a
//! [`ListBlock`] and only become a [`Block::List`] when the list is closed.

use crate::enums::ListKind;
use serde::{Deserialize, Serialize};

/// A closed list: its kind plus its inline-formatted items in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListBlock {
    /// Bullet or numbered
    pub kind: ListKind,
    /// Item bodies, already inline-formatted
    pub items: Vec<String>,
}

impl ListBlock {
    /// Create an empty list of the given kind.
    pub fn new(kind: ListKind) -> Self {
        Self {
            kind,
            items: Vec::new(),
        }
    }

    /// Append an item.
    pub fn push(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One classified structural unit of output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    /// `<h1>`..`<h6>`
    Heading {
        /// Heading level, 1 through 6
        level: u8,
        /// Heading text
        text: String,
    },
    /// `<ul>` or `<ol>`
    List(ListBlock),
    /// `<p>`, with inline formatting applied
    Paragraph(String),
}

impl Block {
    /// Create a heading, clamping the level into 1..=6.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level: level.clamp(1, 6),
            text: text.into(),
        }
    }

    /// Render this block as an HTML fragment.
    ///
    /// # Example
    ///
    /// ```
    /// use reprose_core::{Block, ListBlock, ListKind};
    ///
    /// assert_eq!(Block::heading(2, "Intro").to_html(), "<h2>Intro</h2>");
    ///
    /// let mut list = ListBlock::new(ListKind::Numbered);
    /// list.push("a");
    /// assert_eq!(Block::List(list).to_html(), "<ol><li>a</li></ol>");
    /// ```
    pub fn to_html(&self) -> String {
        match self {
            Block::Heading { level, text } => format!("<h{level}>{text}</h{level}>"),
            Block::List(list) => {
                let tag = list.kind.tag();
                let items: String = list
                    .items
                    .iter()
                    .map(|item| format!("<li>{item}</li>"))
                    .collect();
                format!("<{tag}>{items}</{tag}>")
            }
            Block::Paragraph(text) => format!("<p>{text}</p>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_level_clamped() {
        assert_eq!(
            Block::heading(9, "x"),
            Block::Heading {
                level: 6,
                text: "x".to_string()
            }
        );
        assert_eq!(Block::heading(0, "x").to_html(), "<h1>x</h1>");
    }

    #[test]
    fn test_paragraph_html() {
        assert_eq!(Block::Paragraph("hi".into()).to_html(), "<p>hi</p>");
    }

    #[test]
    fn test_list_block_accumulates() {
        let mut list = ListBlock::new(ListKind::Bullet);
        assert!(list.is_empty());
        list.push("one");
        list.push("two");
        assert_eq!(list.items, vec!["one", "two"]);
        assert_eq!(
            Block::List(list).to_html(),
            "<ul><li>one</li><li>two</li></ul>"
        );
    }
}
