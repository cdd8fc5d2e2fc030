//! Span module - Source location tracking.
//!
//! This module provides the [`Span`] type representing a range in source
//! text, identified by byte offsets plus the line and column where the
//! range starts.

use std::fmt;

/// Source location span
///
/// A `Span` represents a range in source text:
/// - Byte offsets (start, end) into the input buffer
/// - Line and column numbers of the start (for human-readable output)
///
/// # Examples
///
/// ```
/// use axc_util::span::Span;
///
/// let span = Span::new(4, 6, 1, 5);
/// assert_eq!(span.len(), 2);
/// assert_eq!(format!("{}", span), "1:5");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    /// Starting byte offset (inclusive)
    pub start: usize,
    /// Ending byte offset (exclusive)
    pub end: usize,
    /// Line number of the start (1-based)
    pub line: u32,
    /// Column number of the start (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// A dummy span for places where no real location exists
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 1,
        column: 1,
    };

    /// Create a new span
    ///
    /// # Examples
    ///
    /// ```
    /// use axc_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 2, 3);
    /// assert_eq!(span.start, 10);
    /// assert_eq!(span.end, 20);
    /// ```
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Length of the span in bytes
    ///
    /// # Examples
    ///
    /// ```
    /// use axc_util::span::Span;
    ///
    /// assert_eq!(Span::new(3, 8, 1, 4).len(), 5);
    /// assert_eq!(Span::DUMMY.len(), 0);
    /// ```
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span covers no bytes
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Merge two spans into one covering both
    ///
    /// The merged span starts at the earlier span's start and keeps that
    /// span's line and column.
    ///
    /// # Examples
    ///
    /// ```
    /// use axc_util::span::Span;
    ///
    /// let a = Span::new(0, 2, 1, 1);
    /// let b = Span::new(4, 6, 1, 5);
    /// let merged = a.merge(b);
    /// assert_eq!(merged.start, 0);
    /// assert_eq!(merged.end, 6);
    /// ```
    pub fn merge(self, other: Span) -> Span {
        let (first, _) = if self.start <= other.start {
            (self, other)
        } else {
            (other, self)
        };
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line: first.line,
            column: first.column,
        }
    }
}

impl Default for Span {
    #[inline]
    fn default() -> Self {
        Self::DUMMY
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
