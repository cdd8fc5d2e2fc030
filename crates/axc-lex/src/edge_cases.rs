//! Edge case tests for axc-lex

#[cfg(test)]
mod tests {
    use crate::{Lexer, Token, TokenKind, MAX_LEXEME_LEN};
    use axc_util::Handler;

    fn lex_all(source: &str) -> Vec<Token> {
        let handler = Handler::new();
        let mut lexer = Lexer::new(source, &handler);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            if token.kind == TokenKind::Eof {
                break;
            }
            tokens.push(token);
        }
        tokens
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::Ident);
        assert_eq!(t[0].text, "x");
    }

    #[test]
    fn test_edge_ident_exactly_at_cap() {
        let name = "z".repeat(MAX_LEXEME_LEN);
        let t = lex_all(&name);
        assert_eq!(t[0].text, name);
    }

    #[test]
    fn test_edge_ident_one_past_cap() {
        let handler = Handler::new();
        let name = "z".repeat(MAX_LEXEME_LEN + 1);
        let mut lexer = Lexer::new(&name, &handler);
        let token = lexer.next_token();
        assert_eq!(token.text.len(), MAX_LEXEME_LEN);
        assert_eq!(handler.warning_count(), 1);
    }

    #[test]
    fn test_edge_very_long_identifier() {
        let name = "a".repeat(10000);
        let handler = Handler::new();
        let mut lexer = Lexer::new(&name, &handler);
        let token = lexer.next_token();
        // truncated text, full input consumed, single warning
        assert_eq!(token.text.len(), MAX_LEXEME_LEN);
        assert_eq!(token.span.len(), 10000);
        assert_eq!(handler.warning_count(), 1);
    }

    #[test]
    fn test_edge_no_whitespace_between_tokens() {
        let t = lex_all("a1=(2*b)/3");
        let kinds: Vec<TokenKind> = t.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Ident,
                TokenKind::Assign,
                TokenKind::LParen,
                TokenKind::IntLit,
                TokenKind::Star,
                TokenKind::Ident,
                TokenKind::RParen,
                TokenKind::Slash,
                TokenKind::IntLit,
            ]
        );
    }

    #[test]
    fn test_edge_digit_then_letter_splits() {
        let t = lex_all("12ab34");
        assert_eq!(t.len(), 2);
        assert_eq!((t[0].kind, t[0].text.as_str()), (TokenKind::IntLit, "12"));
        assert_eq!((t[1].kind, t[1].text.as_str()), (TokenKind::Ident, "ab34"));
    }

    #[test]
    fn test_edge_run_of_unknowns() {
        let t = lex_all("#$&");
        assert_eq!(t.len(), 3);
        for token in &t {
            assert_eq!(token.kind, TokenKind::Unknown);
            assert_eq!(token.text.len(), 1);
        }
    }

    #[test]
    fn test_edge_non_ascii_is_unknown() {
        let t = lex_all("é");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::Unknown);
        assert_eq!(t[0].text, "é");
    }

    #[test]
    fn test_edge_underscore_is_unknown() {
        // Unlike most languages, this token set has no underscore rule
        let t = lex_all("_x");
        assert_eq!(t[0].kind, TokenKind::Unknown);
        assert_eq!(t[0].text, "_");
        assert_eq!(t[1].kind, TokenKind::Ident);
    }

    #[test]
    fn test_edge_minus_is_an_operator_not_a_sign() {
        let t = lex_all("-3");
        assert_eq!(t.len(), 2);
        assert_eq!(t[0].kind, TokenKind::Minus);
        assert_eq!((t[1].kind, t[1].text.as_str()), (TokenKind::IntLit, "3"));
    }

    #[test]
    fn test_edge_equals_pair_is_two_assign_tokens() {
        // No multi-character operators in this language
        let t = lex_all("==");
        assert_eq!(t.len(), 2);
        assert_eq!(t[0].kind, TokenKind::Assign);
        assert_eq!(t[1].kind, TokenKind::Assign);
    }
}
