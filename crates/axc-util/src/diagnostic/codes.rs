//! Diagnostic codes for categorizing diagnostics.
//!
//! Each diagnostic the front end can emit carries a stable code, so that
//! consumers can match on specific conditions without parsing message text.

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Codes follow the format `{prefix}{number}` where the prefix is "E" for
/// errors and "W" for warnings, and the number is zero-padded to four
/// digits.
///
/// # Examples
///
/// ```
/// use axc_util::diagnostic::DiagnosticCode;
///
/// let code = DiagnosticCode::new("W", 101, "lexeme_too_long");
/// assert_eq!(code.prefix, "W");
/// assert_eq!(format!("{}", code), "W0101");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix ("E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
    /// A short machine-readable name
    pub name: &'static str,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32, name: &'static str) -> Self {
        Self {
            prefix,
            number,
            name,
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self, self.name)
    }
}

/// The lexeme accumulator hit its length cap; the token text is truncated.
pub const W_LEXEME_TOO_LONG: DiagnosticCode = DiagnosticCode::new("W", 101, "lexeme_too_long");
