//! Per-kind token recognizers.
//!
//! Each classifier is called with the cursor on the token's first character,
//! consumes exactly one token's worth of input and returns the token stamped
//! with the position it started at. Dispatch (picking a classifier from the
//! lead character) lives in the driver.
//!
//! Quoted identifiers and strings share one quoting convention: a doubled
//! delimiter inside the quotes stands for one literal delimiter. Input that
//! ends before the closing quote is accepted and runs to end of input.

use tmdl_ir::{Position, Token, TokenKind};
use tmdl_lexer_core::Cursor;

use crate::lex_error::LexError;

#[inline]
pub(crate) fn position(cursor: &Cursor<'_>) -> Position {
    Position::new(cursor.line(), cursor.column())
}

/// First character of an unquoted identifier.
#[inline]
pub(crate) fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '.'
}

#[inline]
fn is_identifier_continue(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '.' | '-')
}

/// A digit, or `-` immediately followed by a digit.
pub(crate) fn starts_number(cursor: &Cursor<'_>) -> bool {
    match cursor.current() {
        Some(c) if c.is_ascii_digit() => true,
        Some('-') => cursor.peek().is_some_and(|c| c.is_ascii_digit()),
        _ => false,
    }
}

/// Scan `quote ... quote`, collapsing doubled quotes. Cursor on the opening quote.
fn quoted_content(cursor: &mut Cursor<'_>, quote: char) -> String {
    cursor.advance();
    let mut value = String::new();
    while let Some(c) = cursor.current() {
        if c == quote {
            if cursor.peek() == Some(quote) {
                value.push(quote);
                cursor.advance_n(2);
            } else {
                cursor.advance();
                return value;
            }
        } else {
            value.push(c);
            cursor.advance();
        }
    }
    value
}

/// `'Sales Order'`, `'O''Brien'`.
pub(crate) fn quoted_identifier(cursor: &mut Cursor<'_>) -> Token {
    let start = position(cursor);
    let name = quoted_content(cursor, '\'');
    Token::new(TokenKind::Identifier, name, start)
}

/// Bare identifier, or a `true`/`false` literal.
///
/// The first character must satisfy [`is_identifier_start`]; later characters
/// may also be digits or `-` (`en-US`, `__PBI_TimeIntelligenceEnabled`).
pub(crate) fn identifier(cursor: &mut Cursor<'_>, first: char) -> Result<Token, LexError> {
    let start = position(cursor);
    if !is_identifier_start(first) {
        return Err(LexError::invalid_identifier_start(start, first));
    }
    let offset = cursor.pos();
    cursor.advance();
    cursor.eat_while(is_identifier_continue);

    let text = cursor.slice_from(offset);
    if text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("false") {
        return Ok(Token::new(TokenKind::Bool, text.to_ascii_lowercase(), start));
    }
    Ok(Token::new(TokenKind::Identifier, text, start))
}

/// Integers, decimals, negative numbers and dotted versions (`2.103.661.0`).
///
/// A `.` only continues the literal when a digit follows it, so `1.` leaves
/// the dot for the next token.
pub(crate) fn number(cursor: &mut Cursor<'_>) -> Token {
    let start = position(cursor);
    let offset = cursor.pos();
    if cursor.current() == Some('-') {
        cursor.advance();
    }
    loop {
        match cursor.current() {
            Some(c) if c.is_ascii_digit() => cursor.advance(),
            Some('.') if cursor.peek().is_some_and(|c| c.is_ascii_digit()) => cursor.advance(),
            _ => break,
        }
    }
    Token::new(TokenKind::Number, cursor.slice_from(offset), start)
}

/// `"$ #,##0"`, `"She said ""hi"""`.
pub(crate) fn string(cursor: &mut Cursor<'_>) -> Token {
    let start = position(cursor);
    let value = quoted_content(cursor, '"');
    Token::new(TokenKind::String, value, start)
}

/// `/// text` description comment.
///
/// Returns `None` without consuming anything unless the cursor is on `///`.
/// One space after the marker is dropped and the rest of the line is trimmed.
/// The line's `\n` is left for the driver.
pub(crate) fn description(cursor: &mut Cursor<'_>) -> Option<Token> {
    if !cursor.starts_with("///") {
        return None;
    }
    let start = position(cursor);
    cursor.advance_n(3);
    if cursor.current() == Some(' ') {
        cursor.advance();
    }
    let offset = cursor.pos();
    cursor.eat_until_newline_or_eof();
    let text = cursor.slice_from(offset).trim();
    Some(Token::new(TokenKind::Description, text, start))
}

/// `# ...` to end of line. Produces no token.
pub(crate) fn comment(cursor: &mut Cursor<'_>) {
    cursor.eat_until_newline_or_eof();
}

/// One of `: = [ ] ( ) ,`.
pub(crate) fn punctuation(cursor: &mut Cursor<'_>, kind: TokenKind, c: char) -> Token {
    let start = position(cursor);
    cursor.advance();
    Token::new(kind, c.to_string(), start)
}

/// The `\n` ending a line.
pub(crate) fn newline(cursor: &mut Cursor<'_>) -> Token {
    let start = position(cursor);
    cursor.advance();
    Token::new(TokenKind::Newline, "\n", start)
}
