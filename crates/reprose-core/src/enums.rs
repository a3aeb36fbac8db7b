//! Core enums for document classification.

use serde::{Deserialize, Serialize};

/// Represents the type of list being accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListKind {
    /// Unordered list with bullets (*, -, •)
    Bullet,
    /// Ordered list with numbers (1., 2., etc.)
    Numbered,
}

impl ListKind {
    /// HTML tag name used to wrap items of this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            ListKind::Bullet => "ul",
            ListKind::Numbered => "ol",
        }
    }
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListKind::Bullet => write!(f, "bullet"),
            ListKind::Numbered => write!(f, "numbered"),
        }
    }
}
