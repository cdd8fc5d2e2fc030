//! Core error types for the axc-util crate.
//!
//! The scan itself is total and never needs these; they cover the fallible
//! seams around it, like deciding whether collected diagnostics invalidate
//! a run.

use thiserror::Error;

/// Error type for diagnostic operations
#[derive(Debug, Error)]
pub enum DiagnosticError {
    /// Error-level diagnostics were collected during a run
    #[error("{count} error(s) emitted during lexical analysis")]
    ErrorsEmitted {
        /// Number of error-level diagnostics
        count: usize,
    },
}

/// Result type alias for diagnostic operations
pub type DiagnosticResult<T> = std::result::Result<T, DiagnosticError>;
