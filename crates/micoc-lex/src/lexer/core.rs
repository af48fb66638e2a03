//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch loop.

use crate::classify;
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Lexer for the Mico programming language.
///
/// The lexer transforms source text into a stream of tokens, one call to
/// [`Lexer::next_token`] at a time. It never fails: bytes that match no
/// category come back as [`TokenKind::Illegal`] tokens, and once the input
/// is exhausted every further call returns [`TokenKind::Eof`].
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub cursor: Cursor<'a>,

    /// Starting position of the current token (byte offset).
    pub token_start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// This is the main entry point for tokenization. It skips whitespace,
    /// then dispatches to the appropriate lexing method based on the current
    /// character.
    ///
    /// # Returns
    /// The next token in the source stream, or an Eof token at end of input.
    pub fn next_token(&mut self) -> Token<'a> {
        self.cursor.skip_whitespace();

        self.token_start = self.cursor.position();

        if self.cursor.is_at_end() {
            return Token::eof();
        }

        match self.cursor.current_char() {
            '(' => self.lex_single(TokenKind::LParen),
            ')' => self.lex_single(TokenKind::RParen),
            '{' => self.lex_single(TokenKind::LBrace),
            '}' => self.lex_single(TokenKind::RBrace),
            ',' => self.lex_single(TokenKind::Comma),
            ';' => self.lex_single(TokenKind::Semicolon),
            '+' => self.lex_single(TokenKind::Plus),
            '-' => self.lex_single(TokenKind::Minus),
            '*' => self.lex_single(TokenKind::Asterisk),
            '/' => self.lex_single(TokenKind::Slash),
            '<' => self.lex_single(TokenKind::Lt),
            '>' => self.lex_single(TokenKind::Gt),
            '=' => self.lex_equals(),
            '!' => self.lex_bang(),
            c if classify::is_letter(c) => self.lex_identifier(),
            c if classify::is_digit(c) => self.lex_number(),
            _ => self.lex_single(TokenKind::Illegal),
        }
    }

    /// Consumes one character and emits a token of the given kind carrying
    /// exactly that character as its literal.
    ///
    /// This is the generic advance step shared by single-character
    /// punctuation and Illegal bytes; identifiers and numbers consume their
    /// own runs and never go through it.
    fn lex_single(&mut self, kind: TokenKind) -> Token<'a> {
        self.cursor.advance();
        Token::new(kind, self.cursor.slice_from(self.token_start))
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            None
        } else {
            Some(token)
        }
    }
}
