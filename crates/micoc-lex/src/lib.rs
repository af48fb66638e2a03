//! micoc-lex - Lexical Analyzer for the Mico Programming Language
//!
//! This crate provides the lexer (tokenizer) for Mico, a small C-like
//! scripting language. It transforms source code into a stream of tokens
//! that can be consumed by the parser.
//!
//! # Overview
//!
//! Lexical analysis is the first phase of compilation. The lexer walks the
//! source one character at a time with a single character of lookahead and
//! classifies each lexeme into a [`Token`]. It is total: there is no error
//! channel, and bytes the language does not recognize come back as
//! `Illegal` tokens for the caller to deal with.
//!
//! # Example Usage
//!
//! ```
//! use micoc_lex::{Lexer, TokenKind};
//!
//! let source = "let five = 5;";
//! let mut lexer = Lexer::new(source);
//!
//! assert_eq!(lexer.next_token().kind, TokenKind::Let);
//! assert_eq!(lexer.next_token().literal, "five");
//!
//! // Or iterate until end of input
//! let rest: Vec<_> = lexer.collect();
//! assert_eq!(rest.len(), 3); // `=`, `5`, `;`
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions and the keyword table
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`classify`] - Character classification predicates
//!
//! # Token Categories
//!
//! The lexer produces the following token types:
//!
//! ## Keywords
//!
//! Reserved words with special meaning (7 total):
//! `fn`, `let`, `true`, `false`, `if`, `else`, `return`
//!
//! ## Identifiers
//!
//! Names for variables and functions. Pattern: `[a-zA-Z_]+`
//!
//! ## Literals
//!
//! - **Integer**: `5`, `10`, `838383` (decimal only, no sign)
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`
//! - **Comparison**: `==`, `!=`, `<`, `>`
//! - **Logical**: `!`
//! - **Assignment**: `=`
//!
//! ## Delimiters
//!
//! - **Grouping**: `()`, `{}`
//! - **Separation**: `,`, `;`
//!
//! ## Special
//!
//! - **Eof**: End of input marker, returned forever once reached
//! - **Illegal**: Unrecognized characters

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{keyword_from_ident, Token, TokenKind};
