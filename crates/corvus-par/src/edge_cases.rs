//! Edge case tests for corvus-par, exercised end to end through
//! [`corvus_lex::lex`] and [`crate::parse`].

#[cfg(test)]
mod tests {
    use crate::ast::Node;
    use crate::{parse, Ast, ParseResult};
    use corvus_lex::lex;

    fn parse_source(source: &str) -> ParseResult<Ast<'static>> {
        let tokens = lex(source, "<test>").expect("lex should succeed");
        let bump = Box::leak(Box::new(bumpalo::Bump::new()));
        parse(&tokens, "<test>", bump)
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        let ast = parse_source("").unwrap();
        assert!(ast.is_empty());
    }

    #[test]
    fn test_edge_whitespace_only() {
        let ast = parse_source("   \n\t  \n  ").unwrap();
        assert!(ast.is_empty());
    }

    #[test]
    fn test_edge_single_function() {
        let ast = parse_source("func main() { }").unwrap();
        assert_eq!(ast.root.len(), 1);
        assert!(matches!(ast.get(ast.root[0]), Node::FuncDecl { .. }));
    }

    #[test]
    fn test_edge_empty_function_body() {
        let ast = parse_source("func empty() {}").unwrap();
        match ast.get(ast.root[0]) {
            Node::FuncDecl { body, .. } => match ast.get(body.unwrap()) {
                Node::Block { stmts } => assert!(stmts.is_empty()),
                other => panic!("expected Block, got {:?}", other),
            },
            other => panic!("expected FuncDecl, got {:?}", other),
        }
    }

    #[test]
    fn test_edge_no_params() {
        let ast = parse_source("func no_params() { x = 1; }").unwrap();
        match ast.get(ast.root[0]) {
            Node::FuncDecl { params, .. } => assert!(params.is_empty()),
            other => panic!("expected FuncDecl, got {:?}", other),
        }
    }

    #[test]
    fn test_edge_single_param() {
        let ast = parse_source("func one(x: Int) { }").unwrap();
        match ast.get(ast.root[0]) {
            Node::FuncDecl { params, .. } => assert_eq!(params.len(), 1),
            other => panic!("expected FuncDecl, got {:?}", other),
        }
    }

    #[test]
    fn test_edge_nested_blocks() {
        let ast = parse_source("func main() { {{{{ x = 1; }}}} }").unwrap();
        assert_eq!(ast.root.len(), 1);
    }

    #[test]
    fn test_edge_multiple_stmts() {
        let ast = parse_source("func main() { a = 1; b = 2; c = 3; }").unwrap();
        match ast.get(ast.root[0]) {
            Node::FuncDecl { body, .. } => match ast.get(body.unwrap()) {
                Node::Block { stmts } => assert_eq!(stmts.len(), 3),
                other => panic!("expected Block, got {:?}", other),
            },
            other => panic!("expected FuncDecl, got {:?}", other),
        }
    }

    #[test]
    fn test_edge_if_no_else() {
        let ast = parse_source("func main() { if (true) { x = 1; } }").unwrap();
        match ast.get(ast.root[0]) {
            Node::FuncDecl { body, .. } => match ast.get(body.unwrap()) {
                Node::Block { stmts } => match ast.get(stmts[0]) {
                    Node::If { has_else, .. } => assert!(!has_else),
                    other => panic!("expected If, got {:?}", other),
                },
                other => panic!("expected Block, got {:?}", other),
            },
            other => panic!("expected FuncDecl, got {:?}", other),
        }
    }

    #[test]
    fn test_edge_nested_if_else() {
        let ast = parse_source(
            "func main() { if (true) { if (false) { 1; } else { 2; } } else { 3; } }",
        )
        .unwrap();
        assert_eq!(ast.root.len(), 1);
    }

    #[test]
    fn test_edge_while_style_loop() {
        let ast = parse_source("func main() { loop (true) { x = 1; } }").unwrap();
        assert_eq!(ast.root.len(), 1);
    }

    #[test]
    fn test_edge_in_style_loop() {
        let ast = parse_source("func main() { loop (item in items) { x = item; } }").unwrap();
        assert_eq!(ast.root.len(), 1);
    }

    #[test]
    fn test_edge_loop_break() {
        let ast = parse_source("func main() { loop (true) { break; } }").unwrap();
        assert_eq!(ast.root.len(), 1);
    }

    #[test]
    fn test_edge_loop_continue() {
        let ast = parse_source("func main() { loop (true) { continue; } }").unwrap();
        assert_eq!(ast.root.len(), 1);
    }

    #[test]
    fn test_edge_return_value() {
        let ast = parse_source("func main() { return 42; }").unwrap();
        match ast.get(ast.root[0]) {
            Node::FuncDecl { body, .. } => match ast.get(body.unwrap()) {
                Node::Block { stmts } => match ast.get(stmts[0]) {
                    Node::ExprStmt { expr } => {
                        assert!(matches!(ast.get(*expr), Node::Return { value: Some(_) }));
                    },
                    other => panic!("expected ExprStmt, got {:?}", other),
                },
                other => panic!("expected Block, got {:?}", other),
            },
            other => panic!("expected FuncDecl, got {:?}", other),
        }
    }

    #[test]
    fn test_edge_return_no_value() {
        let ast = parse_source("func main() { return; }").unwrap();
        match ast.get(ast.root[0]) {
            Node::FuncDecl { body, .. } => match ast.get(body.unwrap()) {
                Node::Block { stmts } => match ast.get(stmts[0]) {
                    Node::ExprStmt { expr } => {
                        assert!(matches!(ast.get(*expr), Node::Return { value: None }));
                    },
                    other => panic!("expected ExprStmt, got {:?}", other),
                },
                other => panic!("expected Block, got {:?}", other),
            },
            other => panic!("expected FuncDecl, got {:?}", other),
        }
    }

    #[test]
    fn test_edge_binary_exprs() {
        let ast = parse_source("func main() { x = 1 + 2 * 3 - 4 / 2; }").unwrap();
        assert_eq!(ast.root.len(), 1);
    }

    #[test]
    fn test_edge_comparisons() {
        let ast = parse_source("func main() { a = 1 == 2; b = 1 != 2; c = 1 < 2; }").unwrap();
        assert_eq!(ast.root.len(), 1);
    }

    #[test]
    fn test_edge_unary_ops() {
        let ast = parse_source("func main() { a = -5; b = !true; c = ~1; }").unwrap();
        assert_eq!(ast.root.len(), 1);
    }

    #[test]
    fn test_edge_match_expr() {
        let ast = parse_source("func main() { x = match (1) { 0: 1, else: 2 }; }").unwrap();
        assert_eq!(ast.root.len(), 1);
    }

    #[test]
    fn test_edge_fn_call() {
        let ast = parse_source("func main() { foo(); bar(1, 2); }").unwrap();
        match ast.get(ast.root[0]) {
            Node::FuncDecl { body, .. } => match ast.get(body.unwrap()) {
                Node::Block { stmts } => assert_eq!(stmts.len(), 2),
                other => panic!("expected Block, got {:?}", other),
            },
            other => panic!("expected FuncDecl, got {:?}", other),
        }
    }

    #[test]
    fn test_edge_nested_fn_calls() {
        let ast = parse_source("func main() { foo(bar(baz(1))); }").unwrap();
        assert_eq!(ast.root.len(), 1);
    }

    #[test]
    fn test_edge_all_literals() {
        let ast =
            parse_source("func main() { a = 42; b = 3.14; c = \"hello\"; d = true; e = 'x'; }")
                .unwrap();
        assert_eq!(ast.root.len(), 1);
    }

    #[test]
    fn test_edge_forward_declaration() {
        let ast = parse_source("func extern_fn(x: Int) -> Int;").unwrap();
        match ast.get(ast.root[0]) {
            Node::FuncDecl { body, .. } => assert!(body.is_none()),
            other => panic!("expected FuncDecl, got {:?}", other),
        }
    }

    #[test]
    fn test_edge_variadic_params() {
        let ast = parse_source("func printf(fmt: String, ...args) -> Int;").unwrap();
        match ast.get(ast.root[0]) {
            Node::FuncDecl { params, .. } => assert!(params[1].variadic),
            other => panic!("expected FuncDecl, got {:?}", other),
        }
    }

    #[test]
    fn test_edge_comments_are_skipped() {
        let ast = parse_source("func main() { // comment\nx = 1; /* block */ }").unwrap();
        assert_eq!(ast.root.len(), 1);
    }

    #[test]
    fn test_edge_trailing_comma_in_init_list() {
        let ast = parse_source("func main() { x = #{1, 2, 3,}; }").unwrap();
        assert_eq!(ast.root.len(), 1);
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn test_err_missing_semicolon() {
        let err = parse_source("func main() { x = 1 y = 2; }").unwrap_err();
        assert!(!err.message.is_empty());
    }

    #[test]
    fn test_err_missing_closing_brace() {
        let err = parse_source("func main() { x = 1;").unwrap_err();
        assert!(err.message.contains("unterminated block"));
    }

    #[test]
    fn test_err_invalid_token_in_body() {
        let err = parse_source("func main() { \\ }").unwrap_err();
        assert!(!err.message.is_empty());
    }

    #[test]
    fn test_err_incomplete_if() {
        let err = parse_source("func main() { if (true) }").unwrap_err();
        assert!(!err.message.is_empty());
    }

    #[test]
    fn test_err_incomplete_loop() {
        let err = parse_source("func main() { loop (true) }").unwrap_err();
        assert!(!err.message.is_empty());
    }

    #[test]
    fn test_err_incomplete_match() {
        let err = parse_source("func main() { x = match (y) { ").unwrap_err();
        assert!(err.message.contains("unterminated match"));
    }

    #[test]
    fn test_err_invalid_fn_signature() {
        let err = parse_source("func main( { }").unwrap_err();
        assert!(!err.message.is_empty());
    }

    #[test]
    fn test_err_missing_fn_body_or_semicolon() {
        let err = parse_source("func main()").unwrap_err();
        assert!(!err.message.is_empty());
    }

    #[test]
    fn test_err_unbalanced_parens() {
        let err = parse_source("func main() { foo((1, 2); }").unwrap_err();
        assert!(!err.message.is_empty());
    }

    #[test]
    fn test_err_unterminated_string_in_code() {
        // The lexer's own fatal-on-first-error discipline surfaces as a
        // lex failure before the parser ever sees a token stream.
        let err = lex("func main() { x = \"unterminated; }", "<test>").unwrap_err();
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_err_empty_match_arm_body() {
        let err = parse_source("func main() { x = match (1) { 0: } }").unwrap_err();
        assert!(!err.message.is_empty());
    }

    #[test]
    fn test_err_missing_if_condition() {
        let err = parse_source("func main() { if ( { 1; } }").unwrap_err();
        assert!(!err.message.is_empty());
    }

    #[test]
    fn test_err_mutable_and_const_together() {
        let err = parse_source("mutable const x = 1;").unwrap_err();
        assert!(err.message.contains("cannot decorate a variable as both mutable and const"));
    }

    #[test]
    fn test_err_multiple_variadic_params() {
        let err = parse_source("func f(...a, ...b) -> Int;").unwrap_err();
        assert!(err.message.contains("cannot have multiple variadic arguments"));
    }

    #[test]
    fn test_err_label_on_plain_statement() {
        let err = parse_source("func main() { here: x; }").unwrap_err();
        assert!(err.message.contains("label must bind to a block or a loop"));
    }

    #[test]
    fn test_edge_complex_expr() {
        let ast = parse_source("func main() { x = (1 + 2) * (3 - 4) / (5 % 6); }").unwrap();
        assert_eq!(ast.root.len(), 1);
    }
}
