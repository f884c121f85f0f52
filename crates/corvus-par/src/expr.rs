//! Expression parsing via precedence climbing.
//!
//! The binary-operator ladder is driven entirely by [`crate::precedence`];
//! this module supplies the unary/suffix/primary layers the climb bottoms
//! out into, plus the handful of productions (`break`, `continue`, `return`,
//! `match`, init-list) that only make sense in expression position.

use crate::ast::{MatchArm, Node, NodeId, PrefixOp, SuffixOp};
use crate::precedence::{self, ChainMode};
use crate::{ParseResult, Parser};
use corvus_lex::Token;
use corvus_util::Symbol;

impl<'t, 'a> Parser<'t, 'a> {
    /// `BinaryExpr (= BinaryExpr)?`
    ///
    /// Assignment is right of everything in the precedence table and
    /// non-associative: `a = b = c` is rejected by construction, since the
    /// right-hand side climbs the same ladder as the left but never loops
    /// back through another `=`.
    pub fn parse_assignment_expr(&mut self) -> ParseResult<NodeId> {
        self.with_depth_guard(|p| {
            let start = p.current_span();
            let target = p.parse_binary_expr(0, ChainMode::Infinity)?;
            if p.chomp_if(&Token::Equals).is_some() {
                let value = p.parse_binary_expr(0, ChainMode::Infinity)?;
                Ok(p.ast.alloc(start, Node::Assign { target, value }))
            } else {
                Ok(target)
            }
        })
    }

    /// Precedence-climbing binary expression parser.
    ///
    /// `min_prec` is the lowest precedence tier this call is willing to
    /// fold; each step recurses with `prec + 1` so that an operator of
    /// equal precedence stops the recursive call and is instead folded by
    /// the caller's own loop, giving left-associativity. `mode` governs
    /// whether that loop runs once or until the precedence drops below
    /// `min_prec`, every entry in [`precedence::lookup`] uses
    /// [`ChainMode::Infinity`]; `Once` exists only for callers (plain `=`)
    /// that are not themselves table entries.
    pub fn parse_binary_expr(&mut self, min_prec: u8, mode: ChainMode) -> ParseResult<NodeId> {
        self.with_depth_guard(|p| {
            let start = p.current_span();
            let mut left = p.parse_unary_expr()?;
            loop {
                let Some((prec, op)) = precedence::lookup(p.peek()) else {
                    break;
                };
                if prec < min_prec {
                    break;
                }
                p.chomp();
                let right = p.parse_binary_expr(prec + 1, ChainMode::Infinity)?;
                left = p.ast.alloc(start, Node::BinaryOp { op, left, right });
                if mode == ChainMode::Once {
                    break;
                }
            }
            Ok(left)
        })
    }

    /// `(- | ! | ~ | ++ | --) UnaryExpr | SuffixExpr`
    fn parse_unary_expr(&mut self) -> ParseResult<NodeId> {
        self.with_depth_guard(|p| {
            let start = p.current_span();
            let op = match p.peek() {
                Token::Minus => Some(PrefixOp::Neg),
                Token::Exclamation => Some(PrefixOp::Not),
                Token::Tilda => Some(PrefixOp::BitNot),
                Token::PlusPlus => Some(PrefixOp::PreInc),
                Token::MinusMinus => Some(PrefixOp::PreDec),
                _ => None,
            };
            match op {
                Some(op) => {
                    p.chomp();
                    let operand = p.parse_unary_expr()?;
                    Ok(p.ast.alloc(start, Node::PrefixOp { op, operand }))
                },
                None => p.parse_suffix_expr(),
            }
        })
    }

    /// `PrimaryExpr (Index | Slice | Call | ++ | --)*`
    fn parse_suffix_expr(&mut self) -> ParseResult<NodeId> {
        self.with_depth_guard(|p| {
            let start = p.current_span();
            let mut expr = p.parse_primary_expr()?;
            loop {
                match p.peek() {
                    Token::LSquareBrack => expr = p.parse_index_or_slice(expr, start)?,
                    Token::LParen => expr = p.parse_call(expr, start)?,
                    Token::PlusPlus => {
                        p.chomp();
                        expr = p.ast.alloc(start, Node::SuffixOp {
                            operand: expr,
                            op: SuffixOp::PostInc,
                        });
                    },
                    Token::MinusMinus => {
                        p.chomp();
                        expr = p.ast.alloc(start, Node::SuffixOp {
                            operand: expr,
                            op: SuffixOp::PostDec,
                        });
                    },
                    _ => break,
                }
            }
            Ok(expr)
        })
    }

    /// `[ AssignmentExpr? .. AssignmentExpr? ]` or `[ AssignmentExpr ]`
    ///
    /// A bare `..` with no bound on either side is only valid once inside
    /// the brackets; indexing is only reached when there is no `..` at all.
    fn parse_index_or_slice(&mut self, operand: NodeId, start: corvus_util::Span) -> ParseResult<NodeId> {
        self.with_depth_guard(|p| {
            p.expect(&Token::LSquareBrack)?;
            let lo = if matches!(p.peek(), Token::DDot) {
                None
            } else {
                Some(p.parse_assignment_expr()?)
            };
            if p.chomp_if(&Token::DDot).is_some() {
                let hi = if matches!(p.peek(), Token::RSquareBrack) {
                    None
                } else {
                    Some(p.parse_assignment_expr()?)
                };
                p.expect(&Token::RSquareBrack)?;
                Ok(p.ast.alloc(start, Node::SuffixOp {
                    operand,
                    op: SuffixOp::Slice { lo, hi },
                }))
            } else {
                let index = lo.ok_or_else(|| p.error("expected expression inside `[ ]`"))?;
                p.expect(&Token::RSquareBrack)?;
                Ok(p.ast.alloc(start, Node::SuffixOp {
                    operand,
                    op: SuffixOp::Index(index),
                }))
            }
        })
    }

    fn parse_call(&mut self, callee: NodeId, start: corvus_util::Span) -> ParseResult<NodeId> {
        self.with_depth_guard(|p| {
            p.expect(&Token::LParen)?;
            let args = p.parse_comma_separated(&Token::RParen, Self::parse_assignment_expr)?;
            p.expect(&Token::RParen)?;
            let args = p.ast.alloc_slice(&args);
            Ok(p.ast.alloc(start, Node::Call { callee, args }))
        })
    }

    /// Generic comma-separated list with an optional trailing comma,
    /// terminated by `end` (consumed by the caller, not here).
    fn parse_comma_separated(
        &mut self,
        end: &Token,
        mut item: impl FnMut(&mut Self) -> ParseResult<NodeId>,
    ) -> ParseResult<Vec<NodeId>> {
        let mut items = Vec::new();
        if std::mem::discriminant(self.peek()) == std::mem::discriminant(end) {
            return Ok(items);
        }
        loop {
            items.push(item(self)?);
            if self.chomp_if(&Token::Comma).is_none() {
                break;
            }
            if std::mem::discriminant(self.peek()) == std::mem::discriminant(end) {
                break;
            }
        }
        Ok(items)
    }

    /// Whether the current token can begin an expression, used by `break`
    /// and `return` to decide whether an optional trailing value is
    /// present, since both are followed directly by `;` when it isn't.
    fn at_expr_start(&self) -> bool {
        matches!(
            self.peek(),
            Token::Integer(_)
                | Token::FloatLit(_)
                | Token::Char(_)
                | Token::String(_)
                | Token::TokTrue
                | Token::TokFalse
                | Token::TokNull
                | Token::Unreachable
                | Token::Identifier(_)
                | Token::Break
                | Token::Continue
                | Token::Return
                | Token::If
                | Token::LBrace
                | Token::Match
                | Token::HashSign
                | Token::LParen
                | Token::Minus
                | Token::Exclamation
                | Token::Tilda
                | Token::PlusPlus
                | Token::MinusMinus
        )
    }

    /// `: IDENT`, the label sigil shared by `break` and `continue`.
    ///
    /// Plain `break label;` would be ambiguous with `break <expression
    /// named label>;`, so a label reference is marked with a leading `:`
    /// (DESIGN.md's colon-sigil decision).
    fn try_parse_colon_label(&mut self) -> ParseResult<Option<Symbol>> {
        if self.chomp_if(&Token::Colon).is_some() {
            Ok(Some(self.expect_identifier()?))
        } else {
            Ok(None)
        }
    }

    fn parse_break_expr(&mut self) -> ParseResult<NodeId> {
        self.with_depth_guard(|p| {
            let start = p.current_span();
            p.expect(&Token::Break)?;
            let label = p.try_parse_colon_label()?;
            let value = if p.at_expr_start() {
                Some(p.parse_assignment_expr()?)
            } else {
                None
            };
            Ok(p.ast.alloc(start, Node::Break { label, value }))
        })
    }

    fn parse_continue_expr(&mut self) -> ParseResult<NodeId> {
        self.with_depth_guard(|p| {
            let start = p.current_span();
            p.expect(&Token::Continue)?;
            let label = p.try_parse_colon_label()?;
            Ok(p.ast.alloc(start, Node::Continue { label }))
        })
    }

    fn parse_return_expr(&mut self) -> ParseResult<NodeId> {
        self.with_depth_guard(|p| {
            let start = p.current_span();
            p.expect(&Token::Return)?;
            let value = if p.at_expr_start() {
                Some(p.parse_assignment_expr()?)
            } else {
                None
            };
            Ok(p.ast.alloc(start, Node::Return { value }))
        })
    }

    fn parse_primary_expr(&mut self) -> ParseResult<NodeId> {
        self.with_depth_guard(|p| {
            let start = p.current_span();
            match p.peek().clone() {
                Token::Integer(v) => {
                    p.chomp();
                    Ok(p.ast.alloc(start, Node::IntLit(v)))
                },
                Token::FloatLit(v) => {
                    p.chomp();
                    Ok(p.ast.alloc(start, Node::FloatLit(v)))
                },
                Token::Char(c) => {
                    p.chomp();
                    Ok(p.ast.alloc(start, Node::CharLit(c)))
                },
                Token::String(s) => {
                    p.chomp();
                    Ok(p.ast.alloc(start, Node::StringLit(s)))
                },
                Token::TokTrue => {
                    p.chomp();
                    Ok(p.ast.alloc(start, Node::BoolLit(true)))
                },
                Token::TokFalse => {
                    p.chomp();
                    Ok(p.ast.alloc(start, Node::BoolLit(false)))
                },
                Token::TokNull => {
                    p.chomp();
                    Ok(p.ast.alloc(start, Node::NullLit))
                },
                Token::Unreachable => {
                    p.chomp();
                    Ok(p.ast.alloc(start, Node::UnreachableLit))
                },
                Token::Identifier(name) => {
                    p.chomp();
                    Ok(p.ast.alloc(start, Node::Ident(name)))
                },
                Token::Break => p.parse_break_expr(),
                Token::Continue => p.parse_continue_expr(),
                Token::Return => p.parse_return_expr(),
                Token::If => p.parse_if_expr(),
                Token::LBrace => p.parse_block(),
                Token::Match => p.parse_match_expr(),
                Token::HashSign => p.parse_init_list(),
                Token::LParen => {
                    p.chomp();
                    let inner = p.parse_assignment_expr()?;
                    p.expect(&Token::RParen)?;
                    Ok(inner)
                },
                other => Err(p.error(format!("invalid token: {}", other.describe()))),
            }
        })
    }

    /// `#{ AssignmentExpr,* }`
    ///
    /// The `#` prefix is what lets an init-list start anywhere a brace
    /// could otherwise be read as a block statement (DESIGN.md's
    /// init-list-vs-block decision); a bare `{...}` in expression position
    /// is always a block.
    fn parse_init_list(&mut self) -> ParseResult<NodeId> {
        self.with_depth_guard(|p| {
            let start = p.current_span();
            p.expect(&Token::HashSign)?;
            p.expect(&Token::LBrace)?;
            let elements = p.parse_comma_separated(&Token::RBrace, Self::parse_assignment_expr)?;
            p.expect(&Token::RBrace)?;
            let elements = p.ast.alloc_slice(&elements);
            Ok(p.ast.alloc(start, Node::InitList { elements }))
        })
    }

    /// `match ( AssignmentExpr )? { MatchArm,* }`
    ///
    /// The scrutinee's parentheses are optional; omitting them still reads
    /// unambiguously since the arm list is itself delimited by `{ }`.
    pub fn parse_match_expr(&mut self) -> ParseResult<NodeId> {
        self.with_depth_guard(|p| {
            let start = p.current_span();
            p.expect(&Token::Match)?;
            let has_parens = p.chomp_if(&Token::LParen).is_some();
            let scrutinee = p.parse_assignment_expr()?;
            if has_parens {
                p.expect(&Token::RParen)?;
            }
            p.expect(&Token::LBrace)?;
            let mut arms = Vec::new();
            while !matches!(p.peek(), Token::RBrace) {
                if p.is_eof() {
                    return Err(p.error("unterminated match; expected `}`"));
                }
                arms.push(p.parse_match_arm()?);
                if p.chomp_if(&Token::Comma).is_none() {
                    break;
                }
            }
            p.expect(&Token::RBrace)?;
            let arms = p.ast.alloc_slice(&arms);
            Ok(p.ast.alloc(start, Node::Match { scrutinee, arms }))
        })
    }

    /// `(else | AssignmentExpr,+) (: | =>) AssignmentExpr`
    ///
    /// Either separator is accepted on every arm, including `else`; the
    /// grammar does not tie one spelling of the separator to one kind of
    /// arm head.
    fn parse_match_arm(&mut self) -> ParseResult<MatchArm<'a>> {
        let (items, is_else): (Vec<NodeId>, bool) = if self.chomp_if(&Token::Else).is_some() {
            (Vec::new(), true)
        } else {
            let mut items = vec![self.parse_assignment_expr()?];
            while self.chomp_if(&Token::Comma).is_some() {
                if matches!(self.peek(), Token::Colon | Token::EqualsArrow) {
                    break;
                }
                items.push(self.parse_assignment_expr()?);
            }
            (items, false)
        };
        let uses_arrow = if self.chomp_if(&Token::EqualsArrow).is_some() {
            true
        } else if self.chomp_if(&Token::Colon).is_some() {
            false
        } else {
            return Err(self.error("expected `:` or `=>` after match case"));
        };
        let body = self.parse_assignment_expr()?;
        let items = self.ast.alloc_slice(&items);
        Ok(MatchArm {
            items,
            is_else,
            uses_arrow,
            body,
        })
    }
}
