//! Token type definitions for the Axon expression lexer.

use axc_util::Span;
use std::fmt;

/// The kind of a token.
///
/// A closed enumeration: the dispatch logic in the lexer matches on it
/// exhaustively, so adding a variant is a compile-time event, not a silent
/// hole. Each kind also carries the numeric code used by the token trace,
/// available through [`TokenKind::code`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Integer literal, e.g. `42`
    IntLit,
    /// Identifier, e.g. `x1`
    Ident,
    /// Assignment operator `=`
    Assign,
    /// Addition operator `+`
    Plus,
    /// Subtraction operator `-`
    Minus,
    /// Multiplication operator `*`
    Star,
    /// Division operator `/`
    Slash,
    /// Left parenthesis `(`
    LParen,
    /// Right parenthesis `)`
    RParen,
    /// A character the lexer does not recognize. Not an error: the token
    /// is surfaced as-is and rejection is the consumer's call.
    Unknown,
    /// End of input marker
    Eof,
}

impl TokenKind {
    /// Numeric code used by the token trace.
    ///
    /// The trace line preserves this encoding for compatibility with
    /// consumers that match on it; within the API the enum itself is the
    /// contract.
    ///
    /// # Examples
    ///
    /// ```
    /// use axc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::IntLit.code(), 10);
    /// assert_eq!(TokenKind::LParen.code(), 25);
    /// assert_eq!(TokenKind::Eof.code(), -1);
    /// ```
    pub const fn code(self) -> i32 {
        match self {
            TokenKind::IntLit => 10,
            TokenKind::Ident => 11,
            TokenKind::Assign => 20,
            TokenKind::Plus => 21,
            TokenKind::Minus => 22,
            TokenKind::Star => 23,
            TokenKind::Slash => 24,
            TokenKind::LParen => 25,
            TokenKind::RParen => 26,
            TokenKind::Unknown => 99,
            TokenKind::Eof => -1,
        }
    }

    /// Maps a single symbol character to its token kind by exact match.
    ///
    /// Intended for characters already classified as neither letter nor
    /// digit. Anything outside the operator/parenthesis set maps to
    /// [`TokenKind::Unknown`].
    ///
    /// # Examples
    ///
    /// ```
    /// use axc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::from_symbol('+'), TokenKind::Plus);
    /// assert_eq!(TokenKind::from_symbol('%'), TokenKind::Unknown);
    /// ```
    pub fn from_symbol(c: char) -> TokenKind {
        match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '=' => TokenKind::Assign,
            _ => TokenKind::Unknown,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::IntLit => "integer literal",
            TokenKind::Ident => "identifier",
            TokenKind::Assign => "`=`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::Unknown => "unknown symbol",
            TokenKind::Eof => "end of input",
        };
        write!(f, "{}", name)
    }
}

/// A classified unit of input: kind plus the lexeme text it was read from.
///
/// The span records where in the input the token came from; it is
/// observability data, not part of the token's identity for consumers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// What the lexeme was classified as
    pub kind: TokenKind,
    /// The lexeme text (the sentinel `"EOF"` for [`TokenKind::Eof`])
    pub text: String,
    /// Source location of the lexeme
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}`", self.kind, self.text)
    }
}
