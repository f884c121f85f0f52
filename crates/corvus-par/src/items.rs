//! Top-level declaration parsing: function prototypes and definitions.
//!
//! spec.md §4.4 "Function prototype": `func IDENT ( ParamList ) -> ReturnType Body?`.
//! A bare prototype (no body) is a forward declaration and is terminated by
//! `;`; a definition's body is a [`crate::stmt`] block.

use crate::ast::{Node, NodeId, Param};
use crate::{ParseResult, Parser};
use corvus_lex::Token;

impl<'t, 'a> Parser<'t, 'a> {
    pub fn parse_function_prototype(&mut self) -> ParseResult<NodeId> {
        self.with_depth_guard(|p| {
            let start = p.current_span();
            p.expect(&Token::Func)?;
            let name = p.expect_identifier()?;
            p.expect(&Token::LParen)?;
            let params = p.parse_param_list()?;
            p.expect(&Token::RParen)?;
            let ret_type = if p.chomp_if(&Token::RArrow).is_some() {
                Some(p.parse_type_expr()?)
            } else {
                None
            };
            let body = if matches!(p.peek(), Token::LBrace) {
                Some(p.parse_block()?)
            } else {
                p.expect(&Token::Semicolon)?;
                None
            };
            let params = p.ast.alloc_slice(&params);
            Ok(p.ast.alloc(start, Node::FuncDecl {
                name,
                params,
                ret_type,
                body,
            }))
        })
    }

    /// Comma-separated parameter list with an optional trailing comma.
    ///
    /// Each parameter is `...? IDENT (: TypeExpr)?`, the leading `...`
    /// marks it variadic. spec.md §3's invariant ("at most one variadic
    /// parameter, and if present it is the last parameter") is enforced by
    /// refusing to start a new parameter once a variadic one has been seen,
    /// rather than by a post-hoc count, any parameter trailing a variadic
    /// one is rejected, whether or not it is itself marked variadic.
    fn parse_param_list(&mut self) -> ParseResult<Vec<Param>> {
        let mut params: Vec<Param> = Vec::new();
        if matches!(self.peek(), Token::RParen) {
            return Ok(params);
        }
        loop {
            if params.last().is_some_and(|p| p.variadic) {
                return Err(self.error(
                    "cannot have multiple variadic arguments in function prototype",
                ));
            }
            let variadic = self.chomp_if(&Token::Ellipsis).is_some();
            let name = self.expect_identifier()?;
            let ty = if self.chomp_if(&Token::Colon).is_some() {
                Some(self.parse_type_expr()?)
            } else {
                None
            };
            params.push(Param { name, ty, variadic });
            if self.chomp_if(&Token::Comma).is_none() {
                break;
            }
            if matches!(self.peek(), Token::RParen) {
                break;
            }
        }
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse, Ast};
    use corvus_lex::lex;

    fn parse_src(source: &str) -> Ast<'static> {
        let tokens = lex(source, "<test>").expect("lex should succeed");
        let bump = Box::leak(Box::new(bumpalo::Bump::new()));
        parse(&tokens, "<test>", bump).expect("parse should succeed")
    }

    #[test]
    fn prototype_without_body_is_a_forward_declaration() {
        let ast = parse_src("func f() -> Int;");
        match ast.get(ast.root[0]) {
            Node::FuncDecl { body, .. } => assert!(body.is_none()),
            other => panic!("expected FuncDecl, got {:?}", other),
        }
    }

    #[test]
    fn params_with_types_parse_in_order() {
        let ast = parse_src("func add(a: Int, b: Int) -> Int { return a + b; }");
        match ast.get(ast.root[0]) {
            Node::FuncDecl { params, .. } => {
                assert_eq!(params.len(), 2);
                assert_eq!(params[0].name.as_str(), "a");
                assert_eq!(params[1].name.as_str(), "b");
                assert!(!params[0].variadic);
            },
            other => panic!("expected FuncDecl, got {:?}", other),
        }
    }

    #[test]
    fn trailing_variadic_parameter_is_accepted() {
        let ast = parse_src("func log(fmt: String, ...rest) -> Int;");
        match ast.get(ast.root[0]) {
            Node::FuncDecl { params, .. } => {
                assert_eq!(params.len(), 2);
                assert!(params[1].variadic);
            },
            other => panic!("expected FuncDecl, got {:?}", other),
        }
    }

    #[test]
    fn parameter_after_variadic_is_fatal() {
        let tokens = lex("func log(...rest, extra: Int) -> Int;", "<test>").expect("lex should succeed");
        let bump = bumpalo::Bump::new();
        let err = crate::parse(&tokens, "<test>", &bump).unwrap_err();
        assert!(err.message.contains("cannot have multiple variadic arguments"));
    }

    #[test]
    fn trailing_comma_in_param_list_is_accepted() {
        let ast = parse_src("func f(a: Int, b: Int,) -> Int;");
        match ast.get(ast.root[0]) {
            Node::FuncDecl { params, .. } => assert_eq!(params.len(), 2),
            other => panic!("expected FuncDecl, got {:?}", other),
        }
    }
}
