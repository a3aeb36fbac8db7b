//! Display-side HTML sanitization.
//!
//! Applied to stored HTML just before it is shown. The work is done by a
//! [`DisplayBackend`] chosen once when a [`DisplaySanitizer`] is built:
//! the tree-based backend when HTML parsing is available, otherwise a
//! passthrough that returns its input unchanged.

use regex::Regex;
use reprose_config::SanitizeConfig;
use std::fmt;
use std::sync::LazyLock;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->|</?[A-Za-z][^>]*>").unwrap());

/// A strategy for display sanitization.
pub trait DisplayBackend: Send + Sync + fmt::Debug {
    /// Short backend name, for diagnostics.
    fn name(&self) -> &'static str;

    /// Sanitize `html` for display.
    fn sanitize(&self, html: &str, config: &SanitizeConfig) -> String;

    /// Plain text content of `html`.
    fn extract_text(&self, html: &str) -> String;
}

/// Backend used when HTML cannot be parsed: sanitization is the identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl DisplayBackend for Passthrough {
    fn name(&self) -> &'static str {
        "passthrough"
    }

    fn sanitize(&self, html: &str, _config: &SanitizeConfig) -> String {
        html.to_string()
    }

    fn extract_text(&self, html: &str) -> String {
        TAG_RE.replace_all(html, "").into_owned()
    }
}

/// Whether this build can parse HTML into a tree.
pub fn dom_available() -> bool {
    cfg!(feature = "dom")
}

/// Display sanitizer bound to one backend for its whole lifetime.
#[derive(Debug)]
pub struct DisplaySanitizer {
    backend: Box<dyn DisplayBackend>,
    config: SanitizeConfig,
}

impl Default for DisplaySanitizer {
    fn default() -> Self {
        Self::detect(SanitizeConfig::default())
    }
}

impl DisplaySanitizer {
    /// Probe for HTML parsing support and pick a backend.
    ///
    /// `config.display = false` forces the passthrough backend.
    pub fn detect(config: SanitizeConfig) -> Self {
        let backend = select_backend(config.display);
        log::debug!("display sanitizer backend: {}", backend.name());
        Self { backend, config }
    }

    /// Build a sanitizer that never modifies its input.
    pub fn passthrough(config: SanitizeConfig) -> Self {
        Self::with_backend(Box::new(Passthrough), config)
    }

    /// Build a sanitizer around a specific backend.
    pub fn with_backend(backend: Box<dyn DisplayBackend>, config: SanitizeConfig) -> Self {
        Self { backend, config }
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    pub fn config(&self) -> &SanitizeConfig {
        &self.config
    }

    /// Sanitize `html` for display. Empty input yields an empty string.
    pub fn sanitize(&self, html: &str) -> String {
        if html.is_empty() {
            return String::new();
        }
        self.backend.sanitize(html, &self.config)
    }

    /// Text content of `html`, for previews.
    pub fn extract_text(&self, html: &str) -> String {
        if html.is_empty() {
            return String::new();
        }
        self.backend.extract_text(html)
    }
}

#[cfg(feature = "dom")]
fn select_backend(enabled: bool) -> Box<dyn DisplayBackend> {
    if enabled {
        Box::new(crate::dom::DomBackend)
    } else {
        Box::new(Passthrough)
    }
}

#[cfg(not(feature = "dom"))]
fn select_backend(_enabled: bool) -> Box<dyn DisplayBackend> {
    Box::new(Passthrough)
}

static DEFAULT_SANITIZER: LazyLock<DisplaySanitizer> = LazyLock::new(DisplaySanitizer::default);

/// Sanitize HTML for display with default settings.
///
/// The backend is chosen on first use and reused afterwards.
pub fn sanitize_for_display(html: &str) -> String {
    DEFAULT_SANITIZER.sanitize(html)
}

/// Text content of HTML with default settings.
pub fn extract_text(html: &str) -> String {
    DEFAULT_SANITIZER.extract_text(html)
}
