//! Type expression parsing.
//!
//! spec.md §3 / §4.4: a type expression is a sequence of prefix type
//! operators (`*` pointer, `?` optional, `[]` slice) applied to a suffix
//! (base) type. Base types have no infix shape of their own in this
//! grammar: they are bare identifiers, so `parse_type_expr` never
//! recurses into the general expression grammar.

use crate::ast::{Node, NodeId, TypePrefixOp};
use crate::{ParseResult, Parser};
use corvus_lex::Token;

impl<'t, 'a> Parser<'t, 'a> {
    /// Whether the current token can start a type expression.
    ///
    /// [`crate::stmt`]'s variable-declaration production uses this to
    /// decide whether the optional type expression that may precede a
    /// declared name is actually present: a lone identifier is
    /// indistinguishable from a type name by its own spelling, so the
    /// only reliable signal (short of full backtracking) is "two
    /// identifiers in a row", the first is the type, the second the
    /// declared name, or a leading prefix operator.
    pub fn at_type_start(&self) -> bool {
        match self.peek() {
            Token::Mult | Token::Question | Token::LSquareBrack => true,
            Token::Identifier(_) => matches!(self.peek_at(1), Token::Identifier(_)),
            _ => false,
        }
    }

    /// `TypePrefixOp* IDENT`
    pub fn parse_type_expr(&mut self) -> ParseResult<NodeId> {
        self.with_depth_guard(|p| {
            let start = p.current_span();
            let mut prefixes = Vec::new();
            loop {
                if p.chomp_if(&Token::Mult).is_some() {
                    prefixes.push(TypePrefixOp::Pointer);
                } else if p.chomp_if(&Token::Question).is_some() {
                    prefixes.push(TypePrefixOp::Optional);
                } else if p.chomp_if(&Token::LSquareBrack).is_some() {
                    p.expect(&Token::RSquareBrack)?;
                    prefixes.push(TypePrefixOp::Slice);
                } else {
                    break;
                }
            }
            let base_start = p.current_span();
            let name = p.expect_identifier()?;
            let base = p.ast.alloc(base_start, Node::Ident(name));
            let prefixes = p.ast.alloc_slice(&prefixes);
            Ok(p.ast.alloc(start, Node::TypeExpr { prefixes, base }))
        })
    }
}
