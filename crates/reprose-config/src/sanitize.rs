//! Sanitization settings.
//!
//! Values injected by the publish and display sanitizers.

use serde::{Deserialize, Serialize};

/// HTML sanitization settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SanitizeConfig {
    /// Alt text added to images that have none.
    /// Default: "Article image"
    #[serde(default = "default_image_alt")]
    pub image_alt: String,

    /// Inline style given to figures without one.
    /// Default: "margin: 1.5rem 0;"
    #[serde(default = "default_figure_margin")]
    pub figure_margin: String,

    /// Pixel font sizes above this are clamped.
    /// Default: 100
    #[serde(default = "default_font_size_limit")]
    pub font_size_limit: u32,

    /// Replacement for clamped font sizes.
    /// Default: "2rem"
    #[serde(default = "default_font_size_clamp")]
    pub font_size_clamp: String,

    /// Use the tree-based display sanitizer when available.
    /// Default: true
    #[serde(default = "default_true")]
    pub display: bool,
}

impl Default for SanitizeConfig {
    fn default() -> Self {
        Self {
            image_alt: default_image_alt(),
            figure_margin: default_figure_margin(),
            font_size_limit: default_font_size_limit(),
            font_size_clamp: default_font_size_clamp(),
            display: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_image_alt() -> String {
    "Article image".to_string()
}

fn default_figure_margin() -> String {
    "margin: 1.5rem 0;".to_string()
}

fn default_font_size_limit() -> u32 {
    100
}

fn default_font_size_clamp() -> String {
    "2rem".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let sanitize = SanitizeConfig::default();
        assert_eq!(sanitize.image_alt, "Article image");
        assert_eq!(sanitize.figure_margin, "margin: 1.5rem 0;");
        assert_eq!(sanitize.font_size_limit, 100);
        assert_eq!(sanitize.font_size_clamp, "2rem");
        assert!(sanitize.display);
    }

    #[test]
    fn test_serde_pascal_case() {
        let toml_str = r#"
            ImageAlt = "Illustration"
            FontSizeLimit = 72
            Display = false
        "#;

        let sanitize: SanitizeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(sanitize.image_alt, "Illustration");
        assert_eq!(sanitize.font_size_limit, 72);
        assert!(!sanitize.display);
        assert_eq!(sanitize.font_size_clamp, "2rem");
    }
}
