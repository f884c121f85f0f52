//! Edge case tests for corvus-lex

#[cfg(test)]
mod tests {
    use crate::{Lexer, Token};
    use corvus_util::Handler;

    fn lex_all(source: &str) -> Vec<Token> {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new(source, &mut handler);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            if token == Token::TokEof {
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
    fn test_edge_whitespace_only_source() {
        assert!(lex_all("   \t\n\r\n  ").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t[0], Token::Identifier(corvus_util::Symbol::intern("x")));
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("func {}() {{}}", name));
        assert!(t.contains(&Token::Identifier(corvus_util::Symbol::intern(&name))));
    }

    #[test]
    fn test_edge_keywords_not_idents() {
        let t = lex_all("func if");
        assert_eq!(t[0], Token::Func);
        assert_eq!(t[1], Token::If);
    }

    #[test]
    fn test_edge_empty_string_literal() {
        let t = lex_all("\"\"");
        if let Token::String(s) = &t[0] {
            assert_eq!(s.as_str(), "");
        } else {
            panic!("expected a string token");
        }
    }

    #[test]
    fn test_edge_all_operators() {
        let t = lex_all("+ - * / % == != < > <= >= !");
        assert!(t.contains(&Token::Plus));
        assert!(t.contains(&Token::EqualsEquals));
        assert!(t.contains(&Token::Exclamation));
    }

    #[test]
    fn test_edge_all_delimiters() {
        let t = lex_all("( ) { } [ ] , ; : . -> =>");
        assert!(t.contains(&Token::LParen));
        assert!(t.contains(&Token::RArrow));
        assert!(t.contains(&Token::EqualsArrow));
    }

    #[test]
    fn test_edge_nested_delimiters() {
        let t = lex_all("((()))");
        assert_eq!(t.iter().filter(|x| **x == Token::LParen).count(), 3);
    }

    #[test]
    fn test_edge_case_sensitivity() {
        let t = lex_all("Func func");
        assert_eq!(t[0], Token::Identifier(corvus_util::Symbol::intern("Func")));
        assert_eq!(t[1], Token::Func);
    }

    #[test]
    fn test_edge_bools_and_null() {
        let t = lex_all("true false null unreachable");
        assert_eq!(t[0], Token::TokTrue);
        assert_eq!(t[1], Token::TokFalse);
        assert_eq!(t[2], Token::TokNull);
        assert_eq!(t[3], Token::Unreachable);
    }

    #[test]
    fn test_edge_underscore_is_identifier() {
        let t = lex_all("_");
        assert_eq!(t[0], Token::Identifier(corvus_util::Symbol::intern("_")));
    }

    #[test]
    fn test_edge_tilde() {
        assert!(lex_all("~").contains(&Token::Tilda));
    }

    #[test]
    fn test_edge_scientific_floats() {
        let t = lex_all("1e10 1.5e-3");
        assert!(t.iter().all(|x| matches!(x, Token::FloatLit(_))));
    }

    #[test]
    fn test_edge_max_int() {
        let t = lex_all("18446744073709551615");
        assert!(matches!(t[0], Token::Integer(_)));
    }

    #[test]
    fn test_edge_leading_zeros() {
        // A leading `0` starts an ordinary decimal run (the digit-0 fix).
        let t = lex_all("007");
        assert_eq!(t[0], Token::Integer(7));
    }

    #[test]
    fn test_edge_all_keywords() {
        let t = lex_all(
            "func if else mutable const export defer break continue return match inline loop",
        );
        assert!(t.contains(&Token::Func));
        assert!(t.contains(&Token::Match));
        assert!(t.contains(&Token::Inline));
        assert!(t.contains(&Token::Loop));
    }

    #[test]
    fn test_edge_consecutive_operators() {
        // Maximal munch: `+++` is `++` then `+`, never three single pluses.
        let t = lex_all("+++");
        assert_eq!(t, vec![Token::PlusPlus, Token::Plus]);
    }

    #[test]
    fn test_edge_whitespace_variations() {
        let t = lex_all("func\tx\n(\n)\n{\n}");
        assert!(t.contains(&Token::Func));
        assert!(t.contains(&Token::Identifier(corvus_util::Symbol::intern("x"))));
    }

    #[test]
    fn test_edge_comment_between_tokens() {
        let t = lex_all("x /* skip me */ = 1;");
        assert_eq!(
            t,
            vec![
                Token::Identifier(corvus_util::Symbol::intern("x")),
                Token::Equals,
                Token::Integer(1),
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn test_edge_macro_and_sentinel_punctuation() {
        let t = lex_all("@ # ? \\");
        assert_eq!(
            t,
            vec![Token::Macro, Token::HashSign, Token::Question, Token::Backslash]
        );
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn test_err_unterminated_string() {
        let mut h = Handler::new();
        let _ = Lexer::new("\"unterminated", &mut h).next_token();
        assert!(h.has_errors());
    }

    #[test]
    fn test_err_empty_char() {
        let mut h = Handler::new();
        let t = Lexer::new("''", &mut h).next_token();
        assert!(matches!(t, Token::Char(_)));
        assert!(h.has_errors());
    }

    #[test]
    fn test_err_unterminated_char() {
        let mut h = Handler::new();
        let _ = Lexer::new("'x", &mut h).next_token();
        assert!(h.has_errors());
    }

    #[test]
    fn test_err_invalid_char_backtick() {
        let mut h = Handler::new();
        let mut lex = Lexer::new("`", &mut h);
        while lex.next_token() != Token::TokEof {}
        assert!(h.has_errors());
    }

    #[test]
    fn test_err_unterminated_block_comment() {
        let mut h = Handler::new();
        let mut lex = Lexer::new("x = 1; /* never closed", &mut h);
        while lex.next_token() != Token::TokEof {}
        assert!(h.has_errors());
    }
}
