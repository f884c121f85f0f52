//! Number literal lexing.
//!
//! This module handles lexing of integer and floating-point literals.
//!
//! Only decimal literals are recognized. Alternate bases are explicitly
//! reserved for future extension and are not implemented here; a leading
//! `0` starts an ordinary decimal run like any other digit (the default
//! dispatch path's historic digit-0 bug is not carried forward).

use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a decimal integer or float literal.
    ///
    /// # Number formats
    ///
    /// - Integer: `42`, `007`, `0`
    /// - Float: `3.14`, `1e10`, `2.5e-3` (the `.`/exponent suffix is an
    ///   extension the grammar accepts; the parser consumes `FLOAT_LIT`)
    ///
    /// # Returns
    ///
    /// Either `Token::Integer(u64)` or `Token::FloatLit(f64)`.
    pub fn lex_number(&mut self) -> Token {
        let start = self.cursor.position();

        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        let is_float = (self.cursor.current_char() == '.'
            && self.cursor.peek_char(1).is_ascii_digit())
            || self.cursor.current_char() == 'e'
            || self.cursor.current_char() == 'E';

        if is_float {
            if self.cursor.current_char() == '.' {
                self.cursor.advance();
                while self.cursor.current_char().is_ascii_digit() {
                    self.cursor.advance();
                }
            }

            if self.cursor.current_char() == 'e' || self.cursor.current_char() == 'E' {
                let exp_start = self.cursor.position();
                self.cursor.advance();
                if self.cursor.current_char() == '+' || self.cursor.current_char() == '-' {
                    self.cursor.advance();
                }
                while self.cursor.current_char().is_ascii_digit() {
                    self.cursor.advance();
                }

                let after_e_pos = exp_start + 1;
                let has_sign = after_e_pos < self.cursor.position()
                    && (self.cursor.source()[after_e_pos..].starts_with('+')
                        || self.cursor.source()[after_e_pos..].starts_with('-'));
                let min_expected_pos = if has_sign {
                    exp_start + 2
                } else {
                    exp_start + 1
                };

                if self.cursor.position() < min_expected_pos {
                    self.report_error("no digits in float exponent".to_string());
                }
            }

            let text = self.cursor.slice_from(start);
            match text.parse::<f64>() {
                Ok(value) if value.is_finite() => Token::FloatLit(value),
                Ok(_) => {
                    self.report_error(format!("floating point literal '{}' is not finite", text));
                    Token::FloatLit(0.0)
                },
                Err(e) => {
                    self.report_error(format!("invalid floating point literal '{}': {}", text, e));
                    Token::FloatLit(0.0)
                },
            }
        } else {
            let text = self.cursor.slice_from(start);
            match text.parse::<u64>() {
                Ok(value) => Token::Integer(value),
                Err(e) => {
                    self.report_error(format!("integer literal overflow: {}", e));
                    Token::Integer(0)
                },
            }
        }
    }
}
