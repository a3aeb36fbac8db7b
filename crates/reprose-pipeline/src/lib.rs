//! Reprose Pipeline
//!
//! The caller side of the conversion core: deciding when content needs
//! conversion, interpreting rewrite-model responses, and attaching
//! reference citations.
//!
//! # Example
//!
//! ```
//! use reprose_pipeline::enhance_response;
//!
//! let article = enhance_response("TITLE: Fresh\nCONTENT: # Intro\nHello there.", "Stale").unwrap();
//! assert_eq!(article.title, "Fresh");
//! assert_eq!(article.content, "<h1>Intro</h1>\n<p>Hello there.</p>");
//! ```

pub mod references;
pub mod response;
pub mod route;

pub use references::append_references;
pub use response::{enhance_response, EnhancedArticle, ModelResponse};
pub use route::{finalize_content, has_block_markup, has_html, ContentRouter};
