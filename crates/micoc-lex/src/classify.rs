//! Character classification predicates.
//!
//! Stateless category checks shared by the lexer. Classification is
//! deliberately ASCII-only: the language accepts `[a-zA-Z_]` identifier
//! characters, `[0-9]` digits, and four whitespace bytes. Everything else
//! lexes as an Illegal token.

/// Returns true for characters that may appear in an identifier:
/// ASCII letters and underscore.
///
/// # Example
///
/// ```
/// use micoc_lex::classify::is_letter;
///
/// assert!(is_letter('a'));
/// assert!(is_letter('Z'));
/// assert!(is_letter('_'));
/// assert!(!is_letter('1'));
/// assert!(!is_letter('é'));
/// ```
#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns true for ASCII decimal digits.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Returns true for the whitespace bytes the language skips:
/// space, tab, `\n`, `\r`.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}
