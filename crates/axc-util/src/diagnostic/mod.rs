//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating and collecting diagnostics.
//! Nothing here prints: the [`Handler`] accumulates diagnostics, and the
//! driver (or a test) decides how to render them.
//!
//! # Examples
//!
//! ```
//! use axc_util::diagnostic::Handler;
//! use axc_util::span::Span;
//!
//! let handler = Handler::new();
//! handler.error("unexpected token", Span::DUMMY);
//!
//! if handler.has_errors() {
//!     eprintln!("scan failed");
//! }
//! ```

mod codes;

pub use codes::{DiagnosticCode, W_LEXEME_TOO_LONG};

use crate::error::DiagnosticError;
use crate::span::Span;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use axc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// A condition that invalidates the scan's result
    Error,
    /// A condition the scan recovered from
    Warning,
    /// Additional information about another diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with severity and location
///
/// # Examples
///
/// ```
/// use axc_util::diagnostic::{Diagnostic, Level};
/// use axc_util::span::Span;
///
/// let diag = Diagnostic::warning("lexeme is too long", Span::DUMMY);
/// assert_eq!(diag.level, Level::Warning);
/// ```
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Set the diagnostic code
    ///
    /// # Examples
    ///
    /// ```
    /// use axc_util::diagnostic::{Diagnostic, W_LEXEME_TOO_LONG};
    /// use axc_util::span::Span;
    ///
    /// let diag = Diagnostic::warning("lexeme is too long", Span::DUMMY)
    ///     .with_code(W_LEXEME_TOO_LONG);
    /// assert_eq!(diag.code, Some(W_LEXEME_TOO_LONG));
    /// ```
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }
}

/// Handler for collecting and reporting diagnostics
///
/// The `Handler` collects diagnostics and provides methods for querying
/// their counts. It can be configured to panic on errors for testing.
/// Interior mutability keeps emission usable from code that only holds a
/// shared reference.
///
/// # Examples
///
/// ```
/// use axc_util::diagnostic::Handler;
/// use axc_util::span::Span;
///
/// let handler = Handler::new();
/// handler.warning("lexeme is too long", Span::DUMMY);
/// assert_eq!(handler.warning_count(), 1);
/// ```
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
    /// Whether to panic on errors (for testing)
    panic_on_error: bool,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: false,
        }
    }

    /// Create a handler that panics on errors (for testing)
    pub fn new_panicking() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: true,
        }
    }

    /// Report an error
    pub fn error(&self, message: impl Into<String>, span: Span) {
        self.emit(Diagnostic::error(message, span));
    }

    /// Report a warning
    pub fn warning(&self, message: impl Into<String>, span: Span) {
        self.emit(Diagnostic::warning(message, span));
    }

    /// Emit a pre-built diagnostic
    ///
    /// # Examples
    ///
    /// ```
    /// use axc_util::diagnostic::{Diagnostic, Handler, W_LEXEME_TOO_LONG};
    /// use axc_util::span::Span;
    ///
    /// let handler = Handler::new();
    /// let diag = Diagnostic::warning("lexeme is too long", Span::DUMMY)
    ///     .with_code(W_LEXEME_TOO_LONG);
    /// handler.emit_diagnostic(diag);
    /// assert_eq!(handler.warning_count(), 1);
    /// ```
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.emit(diagnostic);
    }

    fn emit(&self, diagnostic: Diagnostic) {
        if self.panic_on_error && diagnostic.level == Level::Error {
            panic!("diagnostic error: {}", diagnostic.message);
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Warning)
            .count()
    }

    /// Get a copy of all collected diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Clear all diagnostics
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }

    /// Fail if any error-level diagnostics were collected
    ///
    /// Warnings do not trip this check.
    ///
    /// # Errors
    ///
    /// Returns [`DiagnosticError::ErrorsEmitted`] with the error count.
    ///
    /// # Examples
    ///
    /// ```
    /// use axc_util::diagnostic::Handler;
    /// use axc_util::span::Span;
    ///
    /// let handler = Handler::new();
    /// assert!(handler.ensure_clean().is_ok());
    ///
    /// handler.error("unexpected token", Span::DUMMY);
    /// assert!(handler.ensure_clean().is_err());
    /// ```
    pub fn ensure_clean(&self) -> Result<(), DiagnosticError> {
        let count = self.error_count();
        if count > 0 {
            Err(DiagnosticError::ErrorsEmitted { count })
        } else {
            Ok(())
        }
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
