//! Comment lexing.
//!
//! This module handles skipping line and block comments.

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips a block comment.
    ///
    /// Consumes everything up to and including the first closing `*/`.
    /// Block comments do not nest: a `/*` seen while already inside a
    /// comment has no special meaning.
    ///
    /// Called from [`Self::skip_whitespace_and_comments`], which runs before
    /// `token_start` is set for the token that follows — so an unterminated
    /// comment is reported from the `/*`'s own position, captured here,
    /// rather than `report_error`'s (stale, previous-token) fields.
    pub fn skip_block_comment(&mut self) {
        let start = self.cursor.position();
        let start_line = self.cursor.line();
        let start_column = self.cursor.column();

        loop {
            if self.cursor.is_at_end() {
                self.report_error_at(
                    "unterminated block comment".to_string(),
                    start,
                    start_line,
                    start_column,
                );
                return;
            }

            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance();
                self.cursor.advance();
                return;
            }

            self.cursor.advance();
        }
    }

    /// Skips whitespace and comments.
    ///
    /// Skips all whitespace characters and comments (both line and block).
    /// This is called before lexing each token.
    pub fn skip_whitespace_and_comments(&mut self) {
        if !self.bom_checked {
            self.bom_checked = true;
            self.cursor.skip_bom();
        }

        loop {
            if self.cursor.is_at_end() {
                return;
            }

            match self.cursor.current_char() {
                ' ' | '\t' | '\r' | '\n' => {
                    self.cursor.advance();
                },
                '/' => {
                    let next = self.cursor.peek_char(1);
                    if next == '/' {
                        self.skip_line_comment();
                    } else if next == '*' {
                        self.skip_block_comment();
                    } else {
                        return;
                    }
                },
                _ => return,
            }
        }
    }

    /// Skips a line comment (from // to end of line).
    fn skip_line_comment(&mut self) {
        self.cursor.advance();
        self.cursor.advance();

        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use corvus_util::Handler;

    #[test]
    fn test_skip_whitespace() {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new("   hello", &mut handler);
        lexer.skip_whitespace_and_comments();
        assert_eq!(
            lexer.next_token(),
            crate::token::Token::Identifier(corvus_util::Symbol::intern("hello"))
        );
    }

    #[test]
    fn test_skip_line_comment() {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new("// comment\nhello", &mut handler);
        lexer.skip_whitespace_and_comments();
        assert_eq!(
            lexer.next_token(),
            crate::token::Token::Identifier(corvus_util::Symbol::intern("hello"))
        );
    }

    #[test]
    fn test_skip_block_comment() {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new("/* comment */hello", &mut handler);
        lexer.skip_whitespace_and_comments();
        assert_eq!(
            lexer.next_token(),
            crate::token::Token::Identifier(corvus_util::Symbol::intern("hello"))
        );
    }

    #[test]
    fn test_block_comment_is_not_nested() {
        // A `/*` inside an open block comment is ordinary text; the comment
        // ends at the first `*/`, leaving a dangling ` outer */` as source.
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new("/* outer /* inner */ outer */", &mut handler);
        lexer.skip_whitespace_and_comments();
        // The comment closed at the first `*/`; what follows is ordinary
        // identifier/punctuation text, not part of the comment.
        assert_eq!(
            lexer.next_token(),
            crate::token::Token::Identifier(corvus_util::Symbol::intern("outer"))
        );
    }

    #[test]
    fn test_unterminated_block_comment_is_error() {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new("/* never closed", &mut handler);
        lexer.skip_whitespace_and_comments();
        assert!(handler.has_errors());
    }

    /// The error must point at the `/*`, not at whatever token preceded it.
    #[test]
    fn test_unterminated_block_comment_reports_its_own_start() {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new("a; /* bad", &mut handler);
        assert_eq!(lexer.next_token(), crate::token::Token::Identifier(corvus_util::Symbol::intern("a")));
        assert_eq!(lexer.next_token(), crate::token::Token::Semicolon);
        lexer.skip_whitespace_and_comments();
        assert!(handler.has_errors());
        let diag = &handler.diagnostics()[0];
        assert_eq!(diag.span.start, 3);
        assert_eq!(diag.span.column, 4);
    }

    /// spec.md §6: a leading BOM is "silently skipped" and "does not
    /// advance line/column" — the first real token still starts at 1:1.
    #[test]
    fn test_leading_bom_is_skipped_without_advancing_position() {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new("\u{FEFF}hello", &mut handler);
        lexer.skip_whitespace_and_comments();
        assert_eq!(lexer.cursor.line(), 1);
        assert_eq!(lexer.cursor.column(), 1);
        assert_eq!(
            lexer.next_token(),
            crate::token::Token::Identifier(corvus_util::Symbol::intern("hello"))
        );
    }
}
