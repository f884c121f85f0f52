//! corvus-lex - Lexical analyzer for the Corvus language front end.
//!
//! Turns a source buffer into a flat, positioned stream of tokens. The
//! lexer is a single left-to-right pass: it never looks behind the current
//! token and never reconsiders a decision once a token has been emitted.
//!
//! # Pipeline
//!
//! ```text
//! &str  --[Cursor]-->  chars  --[Lexer::next_token]-->  Token  --[lex]-->  Vec<TokenWithSpan>
//! ```
//!
//! [`Cursor`] walks the source byte-by-byte with an ASCII fast path and a
//! UTF-8 slow path, tracking 1-based line/column as it goes. [`Lexer`]
//! layers dispatch, keyword recognition, and escape processing on top of the
//! cursor. [`lex`] is the convenience entry point most callers want: it
//! drives the lexer to completion and pairs every token with its source
//! span, stopping at the first diagnostic the lexer's [`Handler`] collected.

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

pub use cursor::Cursor;
pub use error::{LexError, LexResult};
pub use lexer::Lexer;
pub use token::{keyword_from_ident, Token};

use corvus_util::{Handler, Span};

/// A token paired with the span of source text it was lexed from.
#[derive(Clone, Debug, PartialEq)]
pub struct TokenWithSpan {
    pub token: Token,
    pub span: Span,
}

impl TokenWithSpan {
    pub fn new(token: Token, span: Span) -> Self {
        Self { token, span }
    }
}

/// Lexes `buffer` to completion, returning a flat stream of positioned
/// tokens terminated by a trailing [`Token::TokEof`].
///
/// `file_name` is used only to render diagnostics; it need not correspond to
/// a real path. This is the one-shot, fatal-on-first-error entry point:
/// unlike [`Lexer`], which collects diagnostics in a `Handler` and keeps
/// scanning, `lex` stops and returns `Err` as soon as the handler has
/// recorded anything.
pub fn lex(buffer: &str, file_name: &str) -> LexResult<Vec<TokenWithSpan>> {
    let mut handler = Handler::new();
    let mut lexer = Lexer::new(buffer, &mut handler);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token();
        let start = lexer.token_start;
        let start_line = lexer.token_start_line();
        let start_column = lexer.token_start_column();
        let end = lexer.position();

        if handler.has_errors() {
            let diags = handler.diagnostics();
            let diag = &diags[0];
            return Err(LexError::new(diag.message.clone(), diag.span, file_name));
        }

        let span = Span::new(start, end, start_line, start_column);
        let is_eof = token == Token::TokEof;
        tokens.push(TokenWithSpan::new(token, span));
        if is_eof {
            break;
        }
    }

    Ok(tokens)
}

/// Convenience wrapper over [`lex`] for callers that have no meaningful
/// file name (tests, REPL input, embedded snippets).
pub fn tokenize(source: &str) -> LexResult<Vec<TokenWithSpan>> {
    lex(source, "<input>")
}
