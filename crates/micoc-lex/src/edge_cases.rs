//! Edge case tests for micoc-lex

#[cfg(test)]
mod tests {
    use crate::{Lexer, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token<'_>> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            if token.kind == TokenKind::Eof { break; }
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
    fn test_edge_whitespace_only() {
        assert!(lex_all("   \t\r\n  ").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t[0], Token::new(TokenKind::Ident, "x"));
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let source = format!("let {} = 1;", name);
        let t = lex_all(&source);
        assert_eq!(t[1].kind, TokenKind::Ident);
        assert_eq!(t[1].literal, name);
    }

    #[test]
    fn test_edge_long_number() {
        let digits = "9".repeat(10000);
        let t = lex_all(&digits);
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].literal, digits);
    }

    #[test]
    fn test_edge_keywords_not_idents() {
        let t = lex_all("fn let if");
        assert_eq!(t[0].kind, TokenKind::Function);
        assert_eq!(t[1].kind, TokenKind::Let);
        assert_eq!(t[2].kind, TokenKind::If);
    }

    #[test]
    fn test_edge_case_sensitivity() {
        let t = lex_all("Fn fn");
        assert_eq!(t[0], Token::new(TokenKind::Ident, "Fn"));
        assert_eq!(t[1], Token::new(TokenKind::Function, "fn"));
    }

    #[test]
    fn test_edge_underscore_ident() {
        let t = lex_all("_ _foo foo_bar_");
        assert_eq!(t[0], Token::new(TokenKind::Ident, "_"));
        assert_eq!(t[1], Token::new(TokenKind::Ident, "_foo"));
        assert_eq!(t[2], Token::new(TokenKind::Ident, "foo_bar_"));
    }

    #[test]
    fn test_edge_all_operators() {
        let t = lex_all("= + - ! * / < > == !=");
        let kinds: Vec<TokenKind> = t.iter().map(|x| x.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Assign,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Bang,
                TokenKind::Asterisk,
                TokenKind::Slash,
                TokenKind::Lt,
                TokenKind::Gt,
                TokenKind::Eq,
                TokenKind::NotEq,
            ]
        );
    }

    #[test]
    fn test_edge_all_delimiters() {
        let t = lex_all("( ) { } , ;");
        let kinds: Vec<TokenKind> = t.iter().map(|x| x.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::Comma,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_edge_nested_delimiters() {
        let t = lex_all("((()))");
        assert_eq!(t.iter().filter(|x| x.kind == TokenKind::LParen).count(), 3);
        assert_eq!(t.iter().filter(|x| x.kind == TokenKind::RParen).count(), 3);
    }

    #[test]
    fn test_edge_consec_ops() {
        let t = lex_all("+++");
        assert_eq!(t.len(), 3);
        assert!(t.iter().all(|x| x.kind == TokenKind::Plus));
    }

    #[test]
    fn test_edge_no_spaces() {
        let t = lex_all("let five=5;");
        assert_eq!(t.len(), 5);
        assert_eq!(t[2].kind, TokenKind::Assign);
    }

    #[test]
    fn test_edge_minus_then_number() {
        // no negative literals; `-5` is two tokens
        let t = lex_all("-5");
        assert_eq!(t[0].kind, TokenKind::Minus);
        assert_eq!(t[1], Token::new(TokenKind::Int, "5"));
    }

    #[test]
    fn test_edge_number_glued_to_ident() {
        let t = lex_all("5x");
        assert_eq!(t[0], Token::new(TokenKind::Int, "5"));
        assert_eq!(t[1], Token::new(TokenKind::Ident, "x"));
    }

    #[test]
    fn test_edge_whitespace_variations() {
        let t = lex_all("let\tx\r\n=\n1");
        assert_eq!(t.len(), 4);
        assert_eq!(t[3], Token::new(TokenKind::Int, "1"));
    }

    // ==================== ILLEGAL INPUT ====================

    #[test]
    fn test_illegal_single_byte() {
        let t = lex_all("@");
        assert_eq!(t, vec![Token::new(TokenKind::Illegal, "@")]);
    }

    #[test]
    fn test_illegal_run() {
        let t = lex_all("@#$%");
        assert_eq!(t.len(), 4);
        assert!(t.iter().all(|x| x.kind == TokenKind::Illegal));
        assert_eq!(t[1].literal, "#");
    }

    #[test]
    fn test_illegal_mixed_with_valid() {
        let t = lex_all("let x = # 1;");
        assert_eq!(t[3], Token::new(TokenKind::Illegal, "#"));
        assert_eq!(t[4], Token::new(TokenKind::Int, "1"));
    }

    #[test]
    fn test_illegal_non_ascii() {
        let t = lex_all("é");
        assert_eq!(t, vec![Token::new(TokenKind::Illegal, "é")]);
    }

    #[test]
    fn test_illegal_nul_like_control_bytes() {
        let t = lex_all("\u{1}\u{7f}");
        assert_eq!(t.len(), 2);
        assert!(t.iter().all(|x| x.kind == TokenKind::Illegal));
    }

    #[test]
    fn test_eof_idempotent_after_illegal() {
        let mut lexer = Lexer::new("@");
        assert_eq!(lexer.next_token().kind, TokenKind::Illegal);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }
}

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use crate::{keyword_from_ident, Lexer, TokenKind};

    proptest! {
        #[test]
        fn whitespace_only_yields_eof_first(source in "[ \t\r\n]{0,64}") {
            let mut lexer = Lexer::new(&source);
            let token = lexer.next_token();
            prop_assert_eq!(token.kind, TokenKind::Eof);
            prop_assert_eq!(token.literal, "");
        }

        #[test]
        fn letter_runs_lex_as_one_token(text in "[a-zA-Z_]{1,64}") {
            let mut lexer = Lexer::new(&text);
            let token = lexer.next_token();
            let expected = keyword_from_ident(&text).unwrap_or(TokenKind::Ident);
            prop_assert_eq!(token.kind, expected);
            prop_assert_eq!(token.literal, text.as_str());
            prop_assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        }

        #[test]
        fn digit_runs_lex_as_one_int(digits in "[0-9]{1,40}") {
            let mut lexer = Lexer::new(&digits);
            let token = lexer.next_token();
            prop_assert_eq!(token.kind, TokenKind::Int);
            prop_assert_eq!(token.literal, digits.as_str());
            prop_assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        }

        #[test]
        fn eof_is_idempotent(source in "[ -~]{0,64}") {
            let mut lexer = Lexer::new(&source);
            while lexer.next_token().kind != TokenKind::Eof {}
            for _ in 0..3 {
                let token = lexer.next_token();
                prop_assert_eq!(token.kind, TokenKind::Eof);
                prop_assert_eq!(token.literal, "");
            }
        }

        #[test]
        fn lexing_is_total(source in "\\PC{0,64}") {
            // every input, printable or not, lexes to a finite token stream
            let lexer = Lexer::new(&source);
            let count = lexer.count();
            prop_assert!(count <= source.chars().count());
        }

        #[test]
        fn literals_cover_non_whitespace_input(source in "[a-z0-9 ;,(){}=!<>+*/-]{0,64}") {
            let total: usize = Lexer::new(&source).map(|t| t.literal.len()).sum();
            let non_ws = source.chars().filter(|c| !c.is_whitespace()).count();
            prop_assert_eq!(total, non_ws);
        }
    }
}
