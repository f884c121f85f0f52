//! Operator and punctuation lexing.
//!
//! This module handles lexing of operators, delimiters, and punctuation via
//! maximal munch: at each dispatch point the lexer checks for the longest
//! recognized sequence before falling back to shorter ones.

use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes `+`, `++`, or `+=`.
    pub fn lex_plus(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('+') {
            Token::PlusPlus
        } else if self.cursor.match_char('=') {
            Token::PlusEquals
        } else {
            Token::Plus
        }
    }

    /// Lexes `-`, `--`, `->`, or `-=`.
    pub fn lex_minus(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('-') {
            Token::MinusMinus
        } else if self.cursor.match_char('>') {
            Token::RArrow
        } else if self.cursor.match_char('=') {
            Token::MinusEquals
        } else {
            Token::Minus
        }
    }

    /// Lexes `*`, `**`, or `*=`.
    pub fn lex_star(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('*') {
            Token::MultMult
        } else if self.cursor.match_char('=') {
            Token::MultEquals
        } else {
            Token::Mult
        }
    }

    /// Lexes `/`, `//` (line comment), `/* */` (block comment), or `/=`.
    pub fn lex_slash(&mut self) -> Token {
        self.cursor.advance();

        if self.cursor.match_char('/') {
            while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
                self.cursor.advance();
            }
            self.skip_whitespace_and_comments();
            return self.next_token();
        }

        if self.cursor.match_char('*') {
            self.skip_block_comment();
            self.skip_whitespace_and_comments();
            return self.next_token();
        }

        if self.cursor.match_char('=') {
            Token::SlashEquals
        } else {
            Token::Slash
        }
    }

    /// Lexes `%`, `%%`, or `%=`.
    pub fn lex_percent(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('%') {
            Token::ModMod
        } else if self.cursor.match_char('=') {
            Token::ModEquals
        } else {
            Token::Mod
        }
    }

    /// Lexes `=`, `==`, or `=>`.
    pub fn lex_equals(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            Token::EqualsEquals
        } else if self.cursor.match_char('>') {
            Token::EqualsArrow
        } else {
            Token::Equals
        }
    }

    /// Lexes `!` or `!=`.
    ///
    /// The lexer's source-language counterpart has a well-known bug here
    /// (see design notes): the default branch is the logical-not token, not
    /// the decrement operator.
    pub fn lex_bang(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            Token::ExclamationEquals
        } else {
            Token::Exclamation
        }
    }

    /// Lexes `<`, `<=`, `<<`, `<<=`, or `<-`.
    pub fn lex_less(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            Token::LessThanOrEqualTo
        } else if self.cursor.match_char('<') {
            if self.cursor.match_char('=') {
                Token::LBitshiftEquals
            } else {
                Token::LBitshift
            }
        } else if self.cursor.match_char('-') {
            Token::LArrow
        } else {
            Token::LessThan
        }
    }

    /// Lexes `>`, `>=`, `>>`, or `>>=`.
    pub fn lex_greater(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            Token::GreaterThanOrEqualTo
        } else if self.cursor.match_char('>') {
            if self.cursor.match_char('=') {
                Token::RBitshiftEquals
            } else {
                Token::RBitshift
            }
        } else {
            Token::GreaterThan
        }
    }

    /// Lexes `&`, `&&`, `&^`, or `&=`.
    pub fn lex_ampersand(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('&') {
            Token::AndAnd
        } else if self.cursor.match_char('^') {
            Token::AndNot
        } else if self.cursor.match_char('=') {
            Token::AndEquals
        } else {
            Token::And
        }
    }

    /// Lexes `|`, `||`, or `|=`.
    pub fn lex_pipe(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('|') {
            Token::OrOr
        } else if self.cursor.match_char('=') {
            Token::OrEquals
        } else {
            Token::Or
        }
    }

    /// Lexes `^` or `^=`.
    pub fn lex_caret(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            Token::XorEquals
        } else {
            Token::Xor
        }
    }

    /// Lexes `~` or `~=`.
    pub fn lex_tilde(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            Token::TildaEquals
        } else {
            Token::Tilda
        }
    }

    /// Lexes `:` or `::`.
    pub fn lex_colon(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char(':') {
            Token::ColonColon
        } else {
            Token::Colon
        }
    }

    /// Lexes `.`, `..`, or `...`.
    pub fn lex_dot(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('.') {
            if self.cursor.match_char('.') {
                Token::Ellipsis
            } else {
                Token::DDot
            }
        } else {
            Token::Dot
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Token;
    use corvus_util::Handler;

    fn lex_op(source: &str) -> Token {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new(source, &mut handler);
        lexer.next_token()
    }

    #[test]
    fn test_plus() {
        assert_eq!(lex_op("+"), Token::Plus);
    }

    #[test]
    fn test_plus_plus() {
        assert_eq!(lex_op("++"), Token::PlusPlus);
    }

    #[test]
    fn test_plus_equals() {
        assert_eq!(lex_op("+="), Token::PlusEquals);
    }

    #[test]
    fn test_minus() {
        assert_eq!(lex_op("-"), Token::Minus);
    }

    #[test]
    fn test_minus_minus() {
        assert_eq!(lex_op("--"), Token::MinusMinus);
    }

    #[test]
    fn test_minus_equals() {
        assert_eq!(lex_op("-="), Token::MinusEquals);
    }

    #[test]
    fn test_rarrow() {
        assert_eq!(lex_op("->"), Token::RArrow);
    }

    #[test]
    fn test_star() {
        assert_eq!(lex_op("*"), Token::Mult);
    }

    #[test]
    fn test_star_star() {
        assert_eq!(lex_op("**"), Token::MultMult);
    }

    #[test]
    fn test_star_equals() {
        assert_eq!(lex_op("*="), Token::MultEquals);
    }

    #[test]
    fn test_slash() {
        assert_eq!(lex_op("/"), Token::Slash);
    }

    #[test]
    fn test_slash_equals() {
        assert_eq!(lex_op("/="), Token::SlashEquals);
    }

    #[test]
    fn test_percent_percent() {
        assert_eq!(lex_op("%%"), Token::ModMod);
    }

    #[test]
    fn test_equals() {
        assert_eq!(lex_op("="), Token::Equals);
    }

    #[test]
    fn test_equals_equals() {
        assert_eq!(lex_op("=="), Token::EqualsEquals);
    }

    #[test]
    fn test_equals_arrow() {
        assert_eq!(lex_op("=>"), Token::EqualsArrow);
    }

    #[test]
    fn test_bang_is_logical_not() {
        assert_eq!(lex_op("!"), Token::Exclamation);
    }

    #[test]
    fn test_not_equals() {
        assert_eq!(lex_op("!="), Token::ExclamationEquals);
    }

    #[test]
    fn test_lt() {
        assert_eq!(lex_op("<"), Token::LessThan);
    }

    #[test]
    fn test_lt_eq() {
        assert_eq!(lex_op("<="), Token::LessThanOrEqualTo);
    }

    #[test]
    fn test_gt() {
        assert_eq!(lex_op(">"), Token::GreaterThan);
    }

    #[test]
    fn test_gt_eq() {
        assert_eq!(lex_op(">="), Token::GreaterThanOrEqualTo);
    }

    #[test]
    fn test_and() {
        assert_eq!(lex_op("&"), Token::And);
    }

    #[test]
    fn test_and_and() {
        assert_eq!(lex_op("&&"), Token::AndAnd);
    }

    #[test]
    fn test_and_not() {
        assert_eq!(lex_op("&^"), Token::AndNot);
    }

    #[test]
    fn test_or() {
        assert_eq!(lex_op("|"), Token::Or);
    }

    #[test]
    fn test_or_or() {
        assert_eq!(lex_op("||"), Token::OrOr);
    }

    #[test]
    fn test_colon() {
        assert_eq!(lex_op(":"), Token::Colon);
    }

    #[test]
    fn test_colon_colon() {
        assert_eq!(lex_op("::"), Token::ColonColon);
    }

    #[test]
    fn test_dot() {
        assert_eq!(lex_op("."), Token::Dot);
    }

    #[test]
    fn test_ddot() {
        assert_eq!(lex_op(".."), Token::DDot);
    }

    #[test]
    fn test_ellipsis() {
        assert_eq!(lex_op("..."), Token::Ellipsis);
    }

    #[test]
    fn test_lbitshift() {
        assert_eq!(lex_op("<<"), Token::LBitshift);
    }

    #[test]
    fn test_lbitshift_equals() {
        assert_eq!(lex_op("<<="), Token::LBitshiftEquals);
    }

    #[test]
    fn test_rbitshift() {
        assert_eq!(lex_op(">>"), Token::RBitshift);
    }

    #[test]
    fn test_rbitshift_equals() {
        assert_eq!(lex_op(">>="), Token::RBitshiftEquals);
    }

    #[test]
    fn test_larrow() {
        assert_eq!(lex_op("<-"), Token::LArrow);
    }

    #[test]
    fn test_maximal_munch_prefers_longest() {
        assert_eq!(lex_op("<<="), Token::LBitshiftEquals);
        assert_eq!(lex_op("..."), Token::Ellipsis);
    }
}
