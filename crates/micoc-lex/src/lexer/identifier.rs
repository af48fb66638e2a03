//! Identifier and keyword lexing.

use crate::classify::is_letter;
use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes a maximal run of letters and underscores, then checks the
    /// spelling against the keyword table. The run is fully consumed here,
    /// so the dispatch loop performs no trailing advance for this branch;
    /// the cursor is already on the first character after the identifier.
    ///
    /// # Returns
    ///
    /// A keyword token (e.g. kind `Let` for `let`) or an `Ident` token,
    /// either way carrying the exact spelling as its literal.
    pub fn lex_identifier(&mut self) -> Token<'a> {
        while is_letter(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);

        Token::new(keyword_from_ident(text).unwrap_or(TokenKind::Ident), text)
    }
}
