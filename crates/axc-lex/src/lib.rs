//! axc-lex - Lexical Analyzer for the Axon Expression Language
//!
//! This crate provides a single-pass scanner that converts input text into
//! a stream of classified tokens: identifiers, integer literals, the
//! arithmetic and assignment operators, and parentheses.
//!
//! # Overview
//!
//! The scanner is a pull model: a caller repeatedly requests the next
//! token until the end-of-input token is returned. Each call produces
//! exactly one token, and once the input is exhausted further calls keep
//! returning `Eof` without moving the cursor.
//!
//! # Example Usage
//!
//! ```
//! use axc_util::Handler;
//! use axc_lex::{Lexer, TokenKind};
//!
//! let handler = Handler::new();
//! let mut lexer = Lexer::new("x1 = 42", &handler);
//!
//! // Iterate through tokens (stops before Eof)
//! for token in Lexer::new("x1 = 42", &handler) {
//!     println!("{}", token);
//! }
//!
//! // Or pull tokens one at a time
//! assert_eq!(lexer.next_token().kind, TokenKind::Ident);
//! assert_eq!(lexer.next_token().kind, TokenKind::Assign);
//! assert_eq!(lexer.next_token().kind, TokenKind::IntLit);
//! assert_eq!(lexer.next_token().kind, TokenKind::Eof);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Main lexer implementation and the trace observer
//! - [`cursor`] - Character cursor and classification
//!
//! # Token Categories
//!
//! - **Identifiers**: a letter followed by letters or digits
//! - **Integer literals**: a run of decimal digits
//! - **Operators**: `+`, `-`, `*`, `/`, `=`
//! - **Parentheses**: `(`, `)`
//! - **Unknown**: any other non-blank character, surfaced as a valid token
//! - **Eof**: end-of-input marker with the sentinel lexeme `"EOF"`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::{is_blank, CharClass, Cursor};
pub use lexer::{Lexer, TokenObserver, TraceWriter, MAX_LEXEME_LEN};
pub use token::{Token, TokenKind};
