//! Token type definitions for the Mico language.
//!
//! A token pairs a [`TokenKind`] with the exact source text it was lexed
//! from. Token literals borrow the source buffer, so producing a token never
//! allocates.

use std::fmt;
use std::sync::LazyLock;

use rustc_hash::FxHashMap;

/// The closed set of token categories produced by the lexer.
///
/// This enumeration is the wire contract consumed by the parser: every byte
/// of input is classified into exactly one of these kinds, including the
/// [`TokenKind::Illegal`] catch-all for bytes the language does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A character that matches no other category.
    Illegal,
    /// End of input. Repeated calls to the lexer keep returning this.
    Eof,

    /// An identifier: `foobar`, `add`, `x`.
    Ident,
    /// An integer literal: `5`, `10`, `838383`.
    Int,

    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `!`
    Bang,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `==`
    Eq,
    /// `!=`
    NotEq,

    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,

    /// `fn`
    Function,
    /// `let`
    Let,
    /// `true`
    True,
    /// `false`
    False,
    /// `if`
    If,
    /// `else`
    Else,
    /// `return`
    Return,
}

impl TokenKind {
    /// Returns a human-readable name for the kind: the fixed spelling for
    /// punctuation and keywords, a category name for the rest.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Illegal => "illegal",
            TokenKind::Eof => "end of input",
            TokenKind::Ident => "identifier",
            TokenKind::Int => "integer",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Function => "fn",
            TokenKind::Let => "let",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Return => "return",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified unit of lexical output.
///
/// The literal is the exact source spelling that was matched; it is empty
/// only for [`TokenKind::Eof`].
///
/// # Example
///
/// ```
/// use micoc_lex::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::Let, "let");
/// assert_eq!(token.kind, TokenKind::Let);
/// assert_eq!(token.literal, "let");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The category this token belongs to.
    pub kind: TokenKind,
    /// The exact source text that was matched.
    pub literal: &'a str,
}

impl<'a> Token<'a> {
    /// Creates a token from a kind and the matched source slice.
    pub fn new(kind: TokenKind, literal: &'a str) -> Self {
        Self { kind, literal }
    }

    /// Creates the end-of-input token. Its literal is always empty.
    pub fn eof() -> Token<'static> {
        Token {
            kind: TokenKind::Eof,
            literal: "",
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Ident | TokenKind::Int | TokenKind::Illegal => {
                write!(f, "{}({})", self.kind, self.literal)
            },
            _ => f.write_str(self.kind.as_str()),
        }
    }
}

/// The reserved words of the language, built once on first use.
static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    let mut map = FxHashMap::default();
    map.insert("fn", TokenKind::Function);
    map.insert("let", TokenKind::Let);
    map.insert("true", TokenKind::True);
    map.insert("false", TokenKind::False);
    map.insert("if", TokenKind::If);
    map.insert("else", TokenKind::Else);
    map.insert("return", TokenKind::Return);
    map
});

/// Returns the keyword kind for an identifier spelling, if it is reserved.
///
/// # Example
///
/// ```
/// use micoc_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("let"), Some(TokenKind::Let));
/// assert_eq!(keyword_from_ident("foobar"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    KEYWORDS.get(ident).copied()
}
