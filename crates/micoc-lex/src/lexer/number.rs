//! Integer literal lexing.

use crate::classify::is_digit;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an integer literal.
    ///
    /// Consumes a maximal run of decimal digits and emits an `Int` token
    /// whose literal is the exact digit string. No numeric conversion
    /// happens at this layer; overflow and magnitude are the parser's
    /// concern. A leading `-` is lexed separately as a `Minus` token.
    ///
    /// Like identifiers, the digit run is fully consumed here and the
    /// dispatch loop performs no trailing advance for this branch.
    pub fn lex_number(&mut self) -> Token<'a> {
        while is_digit(self.cursor.current_char()) {
            self.cursor.advance();
        }

        Token::new(TokenKind::Int, self.cursor.slice_from(self.token_start))
    }
}
