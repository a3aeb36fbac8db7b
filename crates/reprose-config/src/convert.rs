//! Conversion settings.
//!
//! Controls the heuristic heading rule of the text-to-HTML converter.

use serde::{Deserialize, Serialize};

/// Text-to-HTML conversion settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConvertConfig {
    /// Promote short, capitalized, unpunctuated lines to headings.
    /// Default: true
    #[serde(default = "default_true")]
    pub heading_heuristic: bool,

    /// Lines must be strictly shorter than this (in characters)
    /// to be considered by the heading heuristic.
    /// Default: 100
    #[serde(default = "default_heading_max_length")]
    pub heading_max_length: usize,

    /// Level used for headings found by the heuristic.
    /// Default: 2
    #[serde(default = "default_heuristic_level")]
    pub heuristic_level: u8,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            heading_heuristic: true,
            heading_max_length: default_heading_max_length(),
            heuristic_level: default_heuristic_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_heading_max_length() -> usize {
    100
}

fn default_heuristic_level() -> u8 {
    2
}
