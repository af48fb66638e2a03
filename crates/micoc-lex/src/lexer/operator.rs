//! One-lookahead operator lexing.
//!
//! `=` and `!` are the only characters that need to peek at their successor:
//! followed by `=` they form the two-character comparison operators.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes assignment or equality.
    ///
    /// Handles: `=`, `==`
    pub fn lex_equals(&mut self) -> Token<'a> {
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            TokenKind::Eq
        } else {
            TokenKind::Assign
        };
        Token::new(kind, self.cursor.slice_from(self.token_start))
    }

    /// Lexes logical negation or inequality.
    ///
    /// Handles: `!`, `!=`
    pub fn lex_bang(&mut self) -> Token<'a> {
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            TokenKind::NotEq
        } else {
            TokenKind::Bang
        };
        Token::new(kind, self.cursor.slice_from(self.token_start))
    }
}
