//! Abstract syntax tree node kinds and the arena that owns them.
//!
//! Nodes live in a single [`bumpalo::Bump`] the caller owns; a node never
//! refers to another node directly, only through a [`NodeId`] — a typed
//! index into [`Ast::nodes`]. Variable-length children (parameter lists,
//! block statements, call arguments, match arms) are slices carved out of
//! the same bump arena, so the whole tree is freed in one stroke when the
//! arena goes out of scope.
//!
//! Every node is produced at a strictly later token-stream position than
//! its parent's start token (the position-tracking invariant); that
//! ordering is what makes decisions like "which `if` a dangling `else`
//! binds to" fall straight out of how the tree is built, with no separate
//! resolution pass needed.

use corvus_util::index_vec::{Idx, IndexVec};
use corvus_util::{Span, Symbol};

/// A typed, non-owning reference to a node inside an [`Ast`]'s arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl Idx for NodeId {
    fn from_usize(idx: usize) -> Self {
        NodeId(idx as u32)
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A function parameter: a name, an optional type expression, and whether
/// it is the (at most one, trailing) variadic parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Param {
    pub name: Symbol,
    pub ty: Option<NodeId>,
    pub variadic: bool,
}

/// One arm of a `match` expression: `MatchCase (: | =>) AssignmentExpr`.
///
/// `items` holds the comma-separated `MatchItem`s; an empty slice with
/// `is_else = true` represents the `else` catch-all arm.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchArm<'a> {
    pub items: &'a [NodeId],
    pub is_else: bool,
    /// `true` if the arm used `=>` rather than `:` to separate case from body.
    pub uses_arrow: bool,
    pub body: NodeId,
}

/// The three loop forms the grammar accepts, selected by what follows
/// `loop`/`(inline) loop`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LoopForm {
    /// `loop (init; cond; step) Body` — any of the three clauses may be omitted.
    CStyle {
        init: Option<NodeId>,
        cond: Option<NodeId>,
        step: Option<NodeId>,
    },
    /// `loop (cond) Body`
    WhileStyle { cond: NodeId },
    /// `loop (binding in iterable) Body`
    InStyle { binding: Symbol, iterable: NodeId },
}

/// Binary operator kinds, keyed by the precedence table in [`crate::precedence`].
///
/// Compound-assignment spellings (`+=`, `<<=`, ...) are syntactic binary
/// operators at the same precedence as their non-assigning counterpart;
/// whether the left operand is actually an lvalue is left to a later pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Mul,
    Div,
    Mod,
    MulAssign,
    DivAssign,
    ModAssign,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Shl,
    Shr,
    ShlAssign,
    ShrAssign,
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,
    BitAnd,
    AndAssign,
    Xor,
    XorAssign,
    BitNotAssign,
    BitOr,
    OrAssign,
}

/// Prefix operators on ordinary expressions (`-x`, `!x`, `~x`, `++x`, `--x`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrefixOp {
    Neg,
    Not,
    BitNot,
    PreInc,
    PreDec,
}

/// Suffix operators on ordinary expressions, associating left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SuffixOp {
    Index(NodeId),
    /// `a[lo..hi]`, either bound optional.
    Slice {
        lo: Option<NodeId>,
        hi: Option<NodeId>,
    },
    PostInc,
    PostDec,
}

/// Prefix operators recognized in a type expression (`*T`, `?T`, `[]T`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypePrefixOp {
    Pointer,
    Optional,
    Slice,
}

/// A single AST node.
///
/// The discriminant groups as documented at the module level: declarations,
/// statements, expressions, and types all live in one enum because the
/// grammar reuses shapes across those categories (an `if` is parsed
/// identically whether used as a statement or as an expression; a `{ ... }`
/// block is a statement body and an expression body alike).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Node<'a> {
    // -------------------------------------------------------------- Declarations
    /// `func IDENT ( ParamList ) -> ReturnType Body?`
    ///
    /// `body` is `None` for a bare prototype (forward declaration); the two
    /// pieces are kept on one node rather than split into a separate
    /// "FuncProto" and "FuncDef" because nothing downstream needs them torn
    /// apart, and every invariant (at most one variadic, trailing) lives on
    /// the parameter list regardless of whether a body follows.
    FuncDecl {
        name: Symbol,
        params: &'a [Param],
        ret_type: Option<NodeId>,
        body: Option<NodeId>,
    },
    /// Optional `export`, optional `mutable`|`const` (never both), optional
    /// type expression, a name, and an optional initializer.
    VarDecl {
        exported: bool,
        mutable: bool,
        is_const: bool,
        ty: Option<NodeId>,
        name: Symbol,
        init: Option<NodeId>,
    },

    // -------------------------------------------------------------- Statements
    Block {
        stmts: &'a [NodeId],
    },
    /// Shared by the if-statement and if-expression productions: structurally
    /// identical, differing only in the syntactic context that accepts them.
    If {
        cond: NodeId,
        then_branch: NodeId,
        has_else: bool,
        else_branch: Option<NodeId>,
    },
    Loop {
        label: Option<Symbol>,
        inline: bool,
        form: LoopForm,
        body: NodeId,
    },
    Defer {
        stmt: NodeId,
    },
    Break {
        label: Option<Symbol>,
        value: Option<NodeId>,
    },
    Continue {
        label: Option<Symbol>,
    },
    Return {
        value: Option<NodeId>,
    },
    /// `IDENT : Block` or `IDENT : Loop` — a label attached to the block or
    /// loop it targets, so `break`/`continue` can name it.
    Labeled {
        label: Symbol,
        target: NodeId,
    },
    /// An expression used in statement position, `;`-terminated. Wraps plain
    /// expressions and `=` assignments alike.
    ExprStmt {
        expr: NodeId,
    },

    // -------------------------------------------------------------- Expressions
    BinaryOp {
        op: BinOp,
        left: NodeId,
        right: NodeId,
    },
    /// Plain `=` assignment. Kept distinct from [`BinOp`] because it chains
    /// with `Once` semantics (non-associative) rather than `Infinity`
    /// (left-associative) like the precedence-table operators.
    Assign {
        target: NodeId,
        value: NodeId,
    },
    PrefixOp {
        op: PrefixOp,
        operand: NodeId,
    },
    SuffixOp {
        operand: NodeId,
        op: SuffixOp,
    },
    /// `f(args...)`, kept distinct from other suffix operators since its
    /// payload is a list rather than a fixed shape.
    Call {
        callee: NodeId,
        args: &'a [NodeId],
    },
    Match {
        scrutinee: NodeId,
        arms: &'a [MatchArm<'a>],
    },
    InitList {
        elements: &'a [NodeId],
    },

    // Leaf literals
    IntLit(u64),
    FloatLit(f64),
    CharLit(char),
    StringLit(Symbol),
    BoolLit(bool),
    NullLit,
    UnreachableLit,
    Ident(Symbol),

    // -------------------------------------------------------------- Types
    /// A sequence of prefix type operators applied to a suffix (base) type.
    TypeExpr {
        prefixes: &'a [TypePrefixOp],
        base: NodeId,
    },
}

/// The arena owning every node produced while parsing one buffer.
///
/// `nodes` is the typed index vector callers navigate by [`NodeId`];
/// `bump` backs the variable-length slices (`Param`, `NodeId`, `MatchArm`)
/// those nodes reference, and is borrowed from the caller so its lifetime
/// governs how long the whole tree stays valid.
pub struct Ast<'a> {
    bump: &'a bumpalo::Bump,
    nodes: IndexVec<NodeId, Node<'a>>,
    /// The span of each node's first token, parallel to `nodes`.
    ///
    /// Kept as a side table rather than a field on every `Node` variant:
    /// spec.md §3's invariant is "every node carries the position of its
    /// first token", not that the position lives inside the variant's own
    /// payload, and a side table means productions only thread one extra
    /// `Span` through `alloc` instead of a field through every match arm.
    spans: IndexVec<NodeId, Span>,
    /// Top-level declarations, in source order.
    pub root: Vec<NodeId>,
}

impl<'a> Ast<'a> {
    pub fn new(bump: &'a bumpalo::Bump) -> Self {
        Self {
            bump,
            nodes: IndexVec::new(),
            spans: IndexVec::new(),
            root: Vec::new(),
        }
    }

    /// Allocates `node`, recording `span` (its first token's span) alongside it.
    pub fn alloc(&mut self, span: Span, node: Node<'a>) -> NodeId {
        let id = self.nodes.push(node);
        let span_id = self.spans.push(span);
        debug_assert_eq!(id, span_id);
        id
    }

    pub fn get(&self, id: NodeId) -> &Node<'a> {
        &self.nodes[id]
    }

    /// The span of `id`'s first token.
    pub fn span(&self, id: NodeId) -> Span {
        self.spans[id]
    }

    /// Copies `items` into the arena and returns a slice borrowed for `'a`.
    pub fn alloc_slice<T: Copy>(&self, items: &[T]) -> &'a [T] {
        if items.is_empty() {
            return &[];
        }
        self.bump.alloc_slice_copy(items)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use corvus_lex::lex;

    /// spec.md §3: "Every node carries the position of its first token."
    #[test]
    fn top_level_decl_span_starts_at_its_first_token() {
        let tokens = lex("  func f() -> Int { return 0; }", "<test>").unwrap();
        let bump = bumpalo::Bump::new();
        let ast = parse(&tokens, "<test>", &bump).unwrap();
        let span = ast.span(ast.root[0]);
        assert_eq!(span.start, 2);
        assert_eq!(span.column, 3);
    }

    #[test]
    fn nested_expression_span_is_its_own_first_token_not_the_whole_statement() {
        let tokens = lex("func f() { x = 1 + 2; }", "<test>").unwrap();
        let bump = bumpalo::Bump::new();
        let ast = parse(&tokens, "<test>", &bump).unwrap();
        let Node::FuncDecl { body, .. } = ast.get(ast.root[0]) else {
            panic!("expected FuncDecl");
        };
        let Node::Block { stmts } = ast.get(body.unwrap()) else {
            panic!("expected Block");
        };
        let Node::VarDecl { init, .. } = ast.get(stmts[0]) else {
            panic!("expected VarDecl");
        };
        // "1 + 2" starts 4 bytes after "x = ", which itself starts where
        // the VarDecl's own span starts.
        let var_decl_span = ast.span(stmts[0]);
        let expr_span = ast.span(init.unwrap());
        assert!(expr_span.start > var_decl_span.start);
    }
}
