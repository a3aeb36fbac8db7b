//! Reprose Core
//!
//! This crate provides core types and error definitions
//! for the reprose article conversion tools.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`Block`], [`ListBlock`] - Classified structural units of a document
//! - [`ListKind`] - Bullet or numbered list
//! - [`ReproseError`] - Error types

pub mod enums;
pub mod error;
pub mod types;

pub use enums::ListKind;
pub use error::{ReproseError, Result};
pub use types::{Block, ListBlock};
