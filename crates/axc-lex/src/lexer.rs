//! Main lexer implementation for the Axon expression language.
//!
//! This module provides the [`Lexer`] struct which transforms input text
//! into a stream of tokens on demand: each call to [`Lexer::next_token`]
//! produces exactly one token. The scan is total over its input alphabet;
//! the only recoverable condition is the lexeme length cap, reported
//! through the diagnostic handler while scanning continues.

use std::io::Write;

use axc_util::{Diagnostic, Handler, Span, W_LEXEME_TOO_LONG};

use crate::cursor::{CharClass, Cursor};
use crate::token::{Token, TokenKind};

/// Maximum number of characters the lexeme accumulator accepts.
///
/// Pushes past this cap are dropped and reported once per token as a
/// warning; the scan itself continues and still consumes the token's full
/// extent from the input.
pub const MAX_LEXEME_LEN: usize = 99;

/// Receives every token the lexer produces.
///
/// The token trace is an injectable side channel: install an observer
/// with [`Lexer::with_observer`] and it is called once per scan, after
/// the token is classified. The core lexer has no inherent output.
pub trait TokenObserver {
    /// Called once for each produced token, including the final `Eof`.
    fn token(&mut self, token: &Token);
}

/// Observer that writes the token trace to any [`Write`] sink.
///
/// # Example
///
/// ```
/// use axc_lex::{TokenObserver, TraceWriter, Token, TokenKind};
/// use axc_util::Span;
///
/// let mut trace = TraceWriter::new(Vec::new());
/// trace.token(&Token::new(TokenKind::LParen, "(", Span::DUMMY));
/// let out = String::from_utf8(trace.into_inner()).unwrap();
/// assert_eq!(out, "Next token is: 25, Next lexeme is: (\n");
/// ```
pub struct TraceWriter<W: Write> {
    out: W,
}

impl<W: Write> TraceWriter<W> {
    /// Creates a trace writer over the given sink.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the writer and returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TokenObserver for TraceWriter<W> {
    fn token(&mut self, token: &Token) {
        // Trace output is best-effort observability; a failed write must
        // not abort the scan.
        let _ = writeln!(
            self.out,
            "Next token is: {}, Next lexeme is: {}",
            token.kind.code(),
            token.text
        );
    }
}

/// The pull-model lexer for Axon expression text.
///
/// The lexer owns a [`Cursor`] into the input and produces tokens on
/// demand. Diagnostics go to a borrowed [`Handler`]; the scan never fails.
/// Once the input is exhausted, `next_token` returns the `Eof` token
/// forever without moving the cursor.
///
/// # Example
///
/// ```
/// use axc_lex::{Lexer, TokenKind};
/// use axc_util::Handler;
///
/// let handler = Handler::new();
/// let mut lexer = Lexer::new("x1 = 42", &handler);
///
/// let token = lexer.next_token();
/// assert_eq!(token.kind, TokenKind::Ident);
/// assert_eq!(token.text, "x1");
/// ```
pub struct Lexer<'a> {
    /// Character cursor for traversing the input.
    cursor: Cursor<'a>,

    /// Diagnostic handler for reporting recoverable conditions.
    handler: &'a Handler,

    /// Optional sink notified of every produced token.
    observer: Option<&'a mut dyn TokenObserver>,

    /// Lexeme being assembled for the current token.
    lexeme: String,

    /// Running character count of the current lexeme. Stops at the cap;
    /// rejected characters are not counted.
    lexeme_len: usize,

    /// Whether the current token already tripped the length cap.
    lexeme_overflowed: bool,

    /// Start position of the current token.
    token_start: usize,

    /// Start line of the current token.
    token_start_line: u32,

    /// Start column of the current token.
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer over the given input text.
    ///
    /// # Arguments
    ///
    /// * `source` - The input text to scan
    /// * `handler` - Diagnostic handler for recoverable conditions
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            observer: None,
            lexeme: String::new(),
            lexeme_len: 0,
            lexeme_overflowed: false,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Installs a token observer, consuming and returning the lexer.
    ///
    /// # Example
    ///
    /// ```
    /// use axc_lex::{Lexer, TraceWriter};
    /// use axc_util::Handler;
    ///
    /// let handler = Handler::new();
    /// let mut trace = TraceWriter::new(Vec::new());
    /// let mut lexer = Lexer::new("(1)", &handler).with_observer(&mut trace);
    /// while lexer.next().is_some() {}
    /// ```
    pub fn with_observer(mut self, observer: &'a mut dyn TokenObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Returns the next token from the input.
    ///
    /// This is the scan operation: it resets the lexeme, skips whitespace,
    /// then dispatches on the class of the current character. Exactly one
    /// token is produced per call, and the cursor advances by at least one
    /// character unless the input is already exhausted, in which case the
    /// call is idempotent and returns `Eof` with the sentinel text `"EOF"`.
    pub fn next_token(&mut self) -> Token {
        self.lexeme.clear();
        self.lexeme_len = 0;
        self.lexeme_overflowed = false;

        self.cursor.skip_whitespace();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        let kind = match self.cursor.current_class() {
            CharClass::Letter => {
                // letter (letter|digit)* - the maximal run, no backtracking
                self.consume_into_lexeme();
                while matches!(
                    self.cursor.current_class(),
                    CharClass::Letter | CharClass::Digit
                ) {
                    self.consume_into_lexeme();
                }
                TokenKind::Ident
            }

            CharClass::Digit => {
                // digit+ - the maximal run of digits
                self.consume_into_lexeme();
                while self.cursor.current_class() == CharClass::Digit {
                    self.consume_into_lexeme();
                }
                TokenKind::IntLit
            }

            CharClass::Other => {
                // Single-character symbol: append, classify by exact
                // match, advance past it. Unrecognized characters are
                // valid Unknown tokens, not errors.
                let c = self.cursor.current_char();
                self.consume_into_lexeme();
                TokenKind::from_symbol(c)
            }

            CharClass::EndOfInput => {
                // The sentinel lexeme is not drawn from the input and
                // bypasses the accumulator cap.
                self.lexeme.push_str("EOF");
                TokenKind::Eof
            }
        };

        let token = Token::new(kind, self.lexeme.clone(), self.token_span());
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.token(&token);
        }
        token
    }

    /// Appends the current character to the lexeme and advances past it.
    fn consume_into_lexeme(&mut self) {
        let c = self.cursor.current_char();
        self.push_char(c);
        self.cursor.advance();
    }

    /// Appends one character to the in-progress lexeme.
    ///
    /// Past [`MAX_LEXEME_LEN`] the append is a no-op and a warning is
    /// emitted, once per token. Accumulation is capped; scanning is not.
    fn push_char(&mut self, c: char) {
        if self.lexeme_len < MAX_LEXEME_LEN {
            self.lexeme.push(c);
            self.lexeme_len += 1;
        } else if !self.lexeme_overflowed {
            self.lexeme_overflowed = true;
            self.handler.emit_diagnostic(
                Diagnostic::warning("lexeme is too long", self.token_span())
                    .with_code(W_LEXEME_TOO_LONG),
            );
        }
    }

    /// Span from the current token's start to the cursor position.
    fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Returns the current line number.
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number.
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the input.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

/// Make Lexer an iterator over tokens. Iteration stops before the `Eof`
/// token; an installed observer still sees it.
impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            None
        } else {
            Some(token)
        }
    }
}
