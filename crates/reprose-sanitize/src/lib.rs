//! Reprose Sanitize
//!
//! HTML sanitization for the two ends of an article's life:
//!
//! - [`publish`] - text-level cleanup of HTML before it is stored
//! - [`display`] - tree-based cleanup of stored HTML before it is shown
//! - [`style`] - inline `style` attribute helpers
//!
//! # Example
//!
//! ```
//! use reprose_sanitize::{sanitize_for_display, sanitize_for_publish};
//!
//! let stored = sanitize_for_publish(r#"<p>Hi</p><script>x()</script>"#);
//! assert_eq!(stored, "<p>Hi</p>");
//!
//! let shown = sanitize_for_display(&stored);
//! assert!(shown.contains("Hi"));
//! ```

pub mod display;
#[cfg(feature = "dom")]
pub mod dom;
pub mod publish;
pub mod style;

pub use display::{
    dom_available, extract_text, sanitize_for_display, DisplayBackend, DisplaySanitizer,
    Passthrough,
};
#[cfg(feature = "dom")]
pub use dom::DomBackend;
pub use publish::{sanitize_for_publish, PublishSanitizer};
