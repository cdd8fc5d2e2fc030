//! Property-based tests for the scanner's core invariants.

use axc_lex::{is_blank, Lexer, TokenKind};
use axc_util::Handler;
use proptest::prelude::*;

proptest! {
    /// Cursor positions across successive scans never decrease and end at
    /// the buffer length.
    #[test]
    fn positions_nondecreasing_and_exhaustive(source in any::<String>()) {
        let handler = Handler::new();
        let mut lexer = Lexer::new(&source, &handler);
        let mut last = lexer.position();
        loop {
            let token = lexer.next_token();
            prop_assert!(lexer.position() >= last);
            last = lexer.position();
            if token.kind == TokenKind::Eof {
                break;
            }
        }
        prop_assert_eq!(last, source.len());
    }

    /// Once Eof is returned, every further scan returns Eof without
    /// cursor movement.
    #[test]
    fn eof_is_idempotent(source in any::<String>()) {
        let handler = Handler::new();
        let mut lexer = Lexer::new(&source, &handler);
        while lexer.next_token().kind != TokenKind::Eof {}

        let pos = lexer.position();
        for _ in 0..3 {
            let token = lexer.next_token();
            prop_assert_eq!(token.kind, TokenKind::Eof);
            prop_assert_eq!(token.text.as_str(), "EOF");
            prop_assert_eq!(lexer.position(), pos);
        }
    }

    /// An input starting with a letter yields an identifier whose lexeme
    /// is the maximal `letter (letter|digit)*` prefix.
    #[test]
    fn identifier_maximal_munch(
        ident in "[a-zA-Z][a-zA-Z0-9]{0,40}",
        rest in any::<String>(),
    ) {
        let source = format!("{}+{}", ident, rest);
        let handler = Handler::new();
        let mut lexer = Lexer::new(&source, &handler);
        let token = lexer.next_token();
        prop_assert_eq!(token.kind, TokenKind::Ident);
        prop_assert_eq!(token.text, ident);
        prop_assert_eq!(lexer.next_token().kind, TokenKind::Plus);
    }

    /// An input starting with a digit yields an integer literal whose
    /// lexeme is the maximal run of digits.
    #[test]
    fn integer_maximal_munch(
        digits in "[0-9]{1,40}",
        rest in any::<String>(),
    ) {
        let source = format!("{}-{}", digits, rest);
        let handler = Handler::new();
        let mut lexer = Lexer::new(&source, &handler);
        let token = lexer.next_token();
        prop_assert_eq!(token.kind, TokenKind::IntLit);
        prop_assert_eq!(token.text, digits);
        prop_assert_eq!(lexer.next_token().kind, TokenKind::Minus);
    }

    /// Whitespace never appears in any emitted lexeme and never produces
    /// a token of its own.
    #[test]
    fn whitespace_never_tokenized(source in any::<String>()) {
        let handler = Handler::new();
        let mut lexer = Lexer::new(&source, &handler);
        loop {
            let token = lexer.next_token();
            prop_assert!(
                !token.text.contains(is_blank),
                "lexeme {:?} contains whitespace", token.text
            );
            if token.kind == TokenKind::Eof {
                break;
            }
        }
    }

    /// Every scan is total: any single character input produces exactly
    /// one non-Eof token (or none if it is blank), never a panic.
    #[test]
    fn single_chars_are_total(c in any::<char>()) {
        let source = c.to_string();
        let handler = Handler::new();
        let lexer = Lexer::new(&source, &handler);
        let count = lexer.count();
        if is_blank(c) {
            prop_assert_eq!(count, 0);
        } else {
            prop_assert_eq!(count, 1);
        }
    }
}
