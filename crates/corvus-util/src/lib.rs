//! corvus-util - Core Utilities and Foundation Types
//!
//! This crate provides the foundation types shared by every phase of the
//! Corvus compiler front end: string interning ([`Symbol`]), source position
//! tracking ([`Span`], [`SourceMap`]), typed index vectors ([`IndexVec`]),
//! definition identifiers ([`DefId`]), and structured diagnostics.
//!
//! # Design principles
//!
//! - **Zero-cost abstractions.** Typed indices and interned symbols compile
//!   down to plain integers; there is no runtime overhead over hand-written
//!   equivalents.
//! - **Type safety.** [`Idx`]-based newtypes prevent mixing up unrelated
//!   index spaces (a `NodeId` can never be used where a `FileId` is expected).
//! - **Thread safety.** The symbol table is safe to use from multiple
//!   threads concurrently via `DashMap`.

pub mod def_id;
pub mod diagnostic;
pub mod error;
pub mod index_vec;
pub mod span;
pub mod symbol;

pub use def_id::{DefId, DefIdGenerator};
pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use error::{
    DiagnosticError, DiagnosticResult, IndexVecError, IndexVecResult, SourceMapError,
    SourceMapResult, SymbolError, SymbolResult,
};
pub use index_vec::{Idx, IndexVec};
pub use span::{FileId, SourceFile, SourceMap, Span};
pub use symbol::Symbol;

// Re-export commonly used hash collection types so downstream crates don't
// need a direct `rustc-hash` dependency just to name `FxHashMap`/`FxHashSet`.
pub use rustc_hash::{FxHashMap, FxHashSet};
