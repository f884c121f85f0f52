//! Error type for the lexical analysis phase.

use corvus_util::Span;
use std::fmt;
use thiserror::Error;

/// A fatal lexical error.
///
/// The lexer reports non-fatal issues (unterminated strings, invalid escapes,
/// overflowed integer literals) through its [`Handler`](corvus_util::Handler)
/// and keeps scanning so later diagnostics can still be collected. `LexError`
/// is reserved for [`lex`](crate::lex)/[`tokenize`](crate::tokenize), the
/// `Result`-returning entry points: it surfaces the first diagnostic the
/// handler collected as a hard stop, matching the "first error is last"
/// discipline callers expect from a one-shot tokenization call.
#[derive(Debug, Error)]
pub struct LexError {
    pub message: String,
    pub span: Span,
    pub file_name: String,
}

impl LexError {
    pub fn new(message: impl Into<String>, span: Span, file_name: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span,
            file_name: file_name.into(),
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}: {}",
            self.file_name, self.span.line, self.span.column, self.message
        )
    }
}

pub type LexResult<T> = std::result::Result<T, LexError>;
