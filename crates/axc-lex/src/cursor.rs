//! Character cursor for traversing input text.
//!
//! This module provides the [`Cursor`] struct which maintains position
//! state while iterating through the input, and the [`CharClass`]
//! classification the scanner dispatches on. Reaching the end of the input
//! is a normal terminal state: reads past the end yield a `'\0'` sentinel
//! and the [`CharClass::EndOfInput`] class instead of failing.

/// Returns true for the characters the scanner treats as blank.
///
/// This is the C locale's `isspace` set: space, tab, newline, carriage
/// return, form feed, and vertical tab. `char::is_ascii_whitespace` alone
/// would miss vertical tab.
///
/// # Examples
///
/// ```
/// use axc_lex::cursor::is_blank;
///
/// assert!(is_blank(' '));
/// assert!(is_blank('\x0B'));
/// assert!(!is_blank('%'));
/// ```
#[inline]
pub fn is_blank(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

/// Coarse category of a character, used to pick a scanning branch.
///
/// Classification uses ASCII tests only (`is_ascii_alphabetic`,
/// `is_ascii_digit`), so it cannot vary with locale. Everything that is
/// neither an ASCII letter nor an ASCII digit is [`CharClass::Other`];
/// [`CharClass::EndOfInput`] is produced by [`Cursor::current_class`] once
/// the input is exhausted, never by [`CharClass::of`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// An ASCII letter
    Letter,
    /// An ASCII decimal digit
    Digit,
    /// Any other character
    Other,
    /// The cursor is past the end of the input
    EndOfInput,
}

impl CharClass {
    /// Classifies one character.
    ///
    /// # Examples
    ///
    /// ```
    /// use axc_lex::cursor::CharClass;
    ///
    /// assert_eq!(CharClass::of('G'), CharClass::Letter);
    /// assert_eq!(CharClass::of('8'), CharClass::Digit);
    /// assert_eq!(CharClass::of('%'), CharClass::Other);
    /// assert_eq!(CharClass::of(' '), CharClass::Other);
    /// ```
    #[inline]
    pub fn of(c: char) -> CharClass {
        if c.is_ascii_alphabetic() {
            CharClass::Letter
        } else if c.is_ascii_digit() {
            CharClass::Digit
        } else {
            CharClass::Other
        }
    }
}

/// A cursor for traversing input text character by character.
///
/// The cursor maintains the current position in the input and provides
/// methods for advancing and checking conditions. The position is
/// monotonically non-decreasing; once it reaches the end of the input,
/// [`Cursor::advance`] becomes a no-op.
///
/// # Example
///
/// ```
/// use axc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("x1 = 42");
/// assert_eq!(cursor.current_char(), 'x');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), '1');
/// ```
pub struct Cursor<'a> {
    /// The input text being traversed.
    source: &'a str,

    /// Current byte position in the input.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor for the given input text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character at the cursor position.
    ///
    /// Returns `'\0'` (the sentinel) if at the end of the input.
    ///
    /// # Example
    ///
    /// ```
    /// use axc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("");
    /// assert_eq!(cursor.current_char(), '\0');
    /// ```
    #[inline]
    pub fn current_char(&self) -> char {
        if self.position >= self.source.len() {
            return '\0';
        }

        // Fast path for ASCII (the expected case)
        let b = self.source.as_bytes()[self.position];
        if b < 128 {
            return b as char;
        }

        // Slow path for UTF-8
        self.source[self.position..].chars().next().unwrap_or('\0')
    }

    /// Returns the class of the character at the cursor position.
    ///
    /// # Example
    ///
    /// ```
    /// use axc_lex::cursor::{CharClass, Cursor};
    ///
    /// let mut cursor = Cursor::new("a");
    /// assert_eq!(cursor.current_class(), CharClass::Letter);
    /// cursor.advance();
    /// assert_eq!(cursor.current_class(), CharClass::EndOfInput);
    /// ```
    #[inline]
    pub fn current_class(&self) -> CharClass {
        if self.is_at_end() {
            CharClass::EndOfInput
        } else {
            CharClass::of(self.current_char())
        }
    }

    /// Advances the cursor to the next character.
    ///
    /// Updates line and column tracking. Does nothing if already at end;
    /// exhaustion is a terminal state, not a failure.
    #[inline]
    pub fn advance(&mut self) {
        if self.position >= self.source.len() {
            return;
        }

        // Fast path for ASCII
        let b = self.source.as_bytes()[self.position];
        if b < 128 {
            self.position += 1;
            if b == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            return;
        }

        // Slow path for UTF-8 multi-byte characters
        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
            self.column += 1;
        }
    }

    /// Returns true if the cursor is at the end of the input.
    ///
    /// # Example
    ///
    /// ```
    /// use axc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a");
    /// assert!(!cursor.is_at_end());
    /// cursor.advance();
    /// assert!(cursor.is_at_end());
    /// ```
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Skips whitespace characters.
    ///
    /// Advances the cursor past all consecutive blanks (the [`is_blank`]
    /// set: space, tab, newline, carriage return, form feed, vertical
    /// tab). Terminates at the first non-blank character or at end of
    /// input. Produces nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use axc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("  \t\nx");
    /// cursor.skip_whitespace();
    /// assert_eq!(cursor.current_char(), 'x');
    /// ```
    pub fn skip_whitespace(&mut self) {
        while !self.is_at_end() && is_blank(self.current_char()) {
            self.advance();
        }
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the input.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns a slice of the input from the given start position to the
    /// current position.
    ///
    /// # Example
    ///
    /// ```
    /// use axc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("let x");
    /// let start = cursor.position();
    /// cursor.advance();
    /// cursor.advance();
    /// cursor.advance();
    /// assert_eq!(cursor.slice_from(start), "let");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }
}
