//! Statement parsing: blocks, declarations, control flow.
//!
//! spec.md §4.4 "Statement": variable declaration, `defer Stmt`,
//! if-statement, labeled statement, match expression, or (falling through
//! when nothing else matches) an assignment expression. Dispatch is by
//! first-token lookahead; productions that do not match restore the
//! cursor, [`Parser::stmt_starts_var_decl`] is what lets variable
//! declaration and the plain-expression fallback share the identifier
//! lead-in token without backtracking.

use crate::ast::{LoopForm, Node, NodeId};
use crate::{ParseResult, Parser};
use corvus_lex::Token;
use corvus_util::Symbol;

impl<'t, 'a> Parser<'t, 'a> {
    /// `{ Stmt* }`. An empty block is accepted; a missing closing `}` is a
    /// fatal error (spec.md §4.4 "Block").
    pub fn parse_block(&mut self) -> ParseResult<NodeId> {
        self.with_depth_guard(|p| {
            let start = p.current_span();
            p.expect(&Token::LBrace)?;
            let mut stmts = Vec::new();
            while !matches!(p.peek(), Token::RBrace) {
                if p.is_eof() {
                    return Err(p.error("unterminated block; expected `}`"));
                }
                stmts.push(p.parse_statement()?);
            }
            p.chomp();
            let stmts = p.ast.alloc_slice(&stmts);
            Ok(p.ast.alloc(start, Node::Block { stmts }))
        })
    }

    pub fn parse_statement(&mut self) -> ParseResult<NodeId> {
        self.with_depth_guard(|p| match p.peek() {
            Token::Defer => p.parse_defer_stmt(),
            Token::If => p.parse_if_stmt(),
            Token::Loop | Token::Inline => p.parse_loop_stmt(),
            Token::LBrace => p.parse_block(),
            Token::Match => p.parse_match_expr(),
            Token::Identifier(_) if matches!(p.peek_at(1), Token::Colon) => {
                p.parse_labeled_stmt()
            },
            _ if p.stmt_starts_var_decl() => p.parse_variable_declaration(),
            _ => p.parse_expr_stmt(),
        })
    }

    /// Whether the statement starting at the cursor is a variable
    /// declaration rather than a bare expression statement.
    ///
    /// spec.md's scenario 2 (`x = 1 + 2 * 3;` parses as a `VarDecl`) means
    /// declaration is the default reading of `IDENT (= Expr)? ;` with no
    /// modifiers and no type at all, not just the decorated forms, so an
    /// untagged, untyped declaration and a plain assignment share the same
    /// leading token and must be told apart by what follows it.
    fn stmt_starts_var_decl(&self) -> bool {
        match self.peek() {
            Token::Export | Token::Mutable | Token::Const => true,
            Token::Identifier(_) => {
                matches!(self.peek_at(1), Token::Equals | Token::Semicolon)
                    || self.at_type_start()
            },
            _ => self.at_type_start(),
        }
    }

    fn parse_expr_stmt(&mut self) -> ParseResult<NodeId> {
        self.with_depth_guard(|p| {
            let start = p.current_span();
            let expr = p.parse_assignment_expr()?;
            p.expect(&Token::Semicolon)?;
            Ok(p.ast.alloc(start, Node::ExprStmt { expr }))
        })
    }

    fn parse_defer_stmt(&mut self) -> ParseResult<NodeId> {
        self.with_depth_guard(|p| {
            let start = p.current_span();
            p.expect(&Token::Defer)?;
            let stmt = p.parse_statement()?;
            Ok(p.ast.alloc(start, Node::Defer { stmt }))
        })
    }

    /// `export? (mutable | const)? TypeExpr? IDENT (= AssignmentExpr)? ;`
    ///
    /// `mutable` and `const` may appear in either order; both present is
    /// fatal regardless of order (spec.md §4.4's "mutable vs const"
    /// tie-break).
    pub fn parse_variable_declaration(&mut self) -> ParseResult<NodeId> {
        self.with_depth_guard(|p| {
            let start = p.current_span();
            let mut exported = false;
            let mut mutable = false;
            let mut is_const = false;
            loop {
                if p.chomp_if(&Token::Export).is_some() {
                    exported = true;
                } else if p.chomp_if(&Token::Mutable).is_some() {
                    mutable = true;
                } else if p.chomp_if(&Token::Const).is_some() {
                    is_const = true;
                } else {
                    break;
                }
            }
            if mutable && is_const {
                return Err(p.error("cannot decorate a variable as both mutable and const"));
            }
            let ty = if p.at_type_start() {
                Some(p.parse_type_expr()?)
            } else {
                None
            };
            let name = p.expect_identifier()?;
            let init = if p.chomp_if(&Token::Equals).is_some() {
                Some(p.parse_assignment_expr()?)
            } else {
                None
            };
            p.expect(&Token::Semicolon)?;
            Ok(p.ast.alloc(start, Node::VarDecl {
                exported,
                mutable,
                is_const,
                ty,
                name,
                init,
            }))
        })
    }

    /// `IDENT : (Block | Loop)`. A label binding to neither is fatal.
    fn parse_labeled_stmt(&mut self) -> ParseResult<NodeId> {
        self.with_depth_guard(|p| {
            let start = p.current_span();
            let label = p.expect_identifier()?;
            p.expect(&Token::Colon)?;
            match p.peek() {
                Token::LBrace => {
                    let target = p.parse_block()?;
                    Ok(p.ast.alloc(start, Node::Labeled { label, target }))
                },
                Token::Loop | Token::Inline => p.parse_loop_stmt_labeled(Some(label), start),
                _ => Err(p.error("label must bind to a block or a loop")),
            }
        })
    }

    /// `if ( AssignmentExpr ) Body (else (IfStmt | Body))?`
    ///
    /// Shared between statement and expression position via
    /// [`Parser::parse_if_common`]; dangling `else` binds to the innermost
    /// still-unbound `if` for free, since each recursive call consumes its
    /// own optional `else` before returning to its caller.
    pub fn parse_if_stmt(&mut self) -> ParseResult<NodeId> {
        self.parse_if_common(true)
    }

    pub fn parse_if_expr(&mut self) -> ParseResult<NodeId> {
        self.parse_if_common(false)
    }

    fn parse_if_common(&mut self, as_stmt: bool) -> ParseResult<NodeId> {
        self.with_depth_guard(|p| {
            let start = p.current_span();
            p.expect(&Token::If)?;
            p.expect(&Token::LParen)?;
            let cond = p.parse_assignment_expr()?;
            p.expect(&Token::RParen)?;
            let then_branch = p.parse_if_body(as_stmt)?;
            let (has_else, else_branch) = if p.chomp_if(&Token::Else).is_some() {
                let branch = if matches!(p.peek(), Token::If) {
                    p.parse_if_common(as_stmt)?
                } else {
                    p.parse_if_body(as_stmt)?
                };
                (true, Some(branch))
            } else {
                (false, None)
            };
            Ok(p.ast.alloc(start, Node::If {
                cond,
                then_branch,
                has_else,
                else_branch,
            }))
        })
    }

    /// A block, or a bare assignment expression. In statement position the
    /// bare form owns its trailing `;`; in expression position (an
    /// if-expression nested inside a larger expression) there is no
    /// semicolon to consume, the enclosing statement's `;` covers it.
    /// A missing body falls through to [`Parser::parse_assignment_expr`]'s
    /// own fatal error on an empty/invalid primary.
    ///
    /// A body that is itself an `if` recurses into [`Parser::parse_if_common`]
    /// directly rather than going through the general expression grammar:
    /// that is what makes dangling `else` bind to the innermost `if` rather
    /// than the outermost one, the nested `if` greedily consumes its own
    /// trailing `else` before control ever returns to its parent's "is there
    /// an else here" check.
    fn parse_if_body(&mut self, as_stmt: bool) -> ParseResult<NodeId> {
        if matches!(self.peek(), Token::LBrace) {
            self.parse_block()
        } else if matches!(self.peek(), Token::If) {
            self.parse_if_common(as_stmt)
        } else {
            let expr = self.parse_assignment_expr()?;
            if as_stmt {
                self.expect(&Token::Semicolon)?;
            }
            Ok(expr)
        }
    }

    pub fn parse_loop_stmt(&mut self) -> ParseResult<NodeId> {
        let start = self.current_span();
        self.parse_loop_stmt_labeled(None, start)
    }

    /// `start` is the span of the loop's first token: its own `loop`/`inline`
    /// when unlabeled, or the label identifier that precedes it when called
    /// from [`Parser::parse_labeled_stmt`].
    fn parse_loop_stmt_labeled(&mut self, label: Option<Symbol>, start: corvus_util::Span) -> ParseResult<NodeId> {
        self.with_depth_guard(|p| {
            let inline = p.chomp_if(&Token::Inline).is_some();
            if !matches!(p.peek(), Token::Loop) {
                return Err(p.error("expected `loop` after `inline`"));
            }
            p.chomp();
            let form = p.parse_loop_form()?;
            let body = p.parse_block()?;
            Ok(p.ast.alloc(start, Node::Loop {
                label,
                inline,
                form,
                body,
            }))
        })
    }

    /// `( binding in Expr )` | `( Expr )` | `( Expr? ; Expr? ; Expr? )`
    ///
    /// The in-style and while-style forms need no lookahead beyond what a
    /// single clause already buys: in-style is recognized by its
    /// `IDENT in` lead-in (`in` is a contextual keyword, spec.md §6's
    /// closed keyword set has no reserved word for it, see DESIGN.md);
    /// C-style is recognized by a `;` following the first clause, which
    /// while-style's single condition never has.
    fn parse_loop_form(&mut self) -> ParseResult<LoopForm> {
        self.expect(&Token::LParen)?;

        if let Token::Identifier(binding) = self.peek().clone() {
            if matches!(self.peek_at(1), Token::Identifier(sym) if sym.as_str() == "in") {
                self.chomp();
                self.chomp();
                let iterable = self.parse_assignment_expr()?;
                self.expect(&Token::RParen)?;
                return Ok(LoopForm::InStyle { binding, iterable });
            }
        }

        if matches!(self.peek(), Token::RParen) {
            self.chomp();
            return Ok(LoopForm::CStyle {
                init: None,
                cond: None,
                step: None,
            });
        }

        if matches!(self.peek(), Token::Semicolon) {
            self.chomp();
            return self.finish_c_style_loop(None);
        }

        let first = self.parse_assignment_expr()?;
        if self.chomp_if(&Token::Semicolon).is_some() {
            self.finish_c_style_loop(Some(first))
        } else {
            self.expect(&Token::RParen)?;
            Ok(LoopForm::WhileStyle { cond: first })
        }
    }

    fn finish_c_style_loop(&mut self, init: Option<NodeId>) -> ParseResult<LoopForm> {
        let cond = if matches!(self.peek(), Token::Semicolon) {
            None
        } else {
            Some(self.parse_assignment_expr()?)
        };
        self.expect(&Token::Semicolon)?;
        let step = if matches!(self.peek(), Token::RParen) {
            None
        } else {
            Some(self.parse_assignment_expr()?)
        };
        self.expect(&Token::RParen)?;
        Ok(LoopForm::CStyle { init, cond, step })
    }
}
