//! axc-util - Core Utilities and Foundation Types
//!
//! This crate provides the infrastructure shared by the axc front end:
//! source location tracking and diagnostic reporting. It has no knowledge
//! of tokens or scanning; those live in `axc-lex`.
//!
//! # Overview
//!
//! - [`span`] - Source location spans with line/column information
//! - [`diagnostic`] - Diagnostic levels, codes, and the collecting [`Handler`]
//! - [`error`] - Error types for fallible utility operations
//!
//! # Example
//!
//! ```
//! use axc_util::{Handler, Span};
//!
//! let handler = Handler::new();
//! handler.warning("lexeme is too long", Span::DUMMY);
//!
//! assert!(!handler.has_errors());
//! assert_eq!(handler.warning_count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

// Re-export main types for convenience
pub use diagnostic::{Diagnostic, DiagnosticCode, Handler, Level, W_LEXEME_TOO_LONG};
pub use error::{DiagnosticError, DiagnosticResult};
pub use span::Span;
