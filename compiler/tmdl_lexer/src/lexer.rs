//! The tokenize driver.
//!
//! Composes the cursor, the indentation stack and the classifiers:
//!
//! 1. At the first column of a line, measure indentation and emit
//!    INDENT/DEDENT (blank lines are skipped by the stack).
//! 2. Skip inline whitespace.
//! 3. Dispatch on the next character to one classifier and append its token.
//!
//! When input runs out every open level is closed with a DEDENT and a single
//! EOF token is appended. The first error aborts the whole call.

use tmdl_ir::{Token, TokenKind, TokenList};
use tmdl_lexer_core::{is_blank_line, measure_indentation, Cursor, IndentChange, IndentStack};
use tracing::trace;

use crate::classify::{self, position};
use crate::lex_error::LexError;

/// One-shot lexer over a single source text.
///
/// All state (cursor, indentation stack, output) lives in the value and is
/// consumed by [`tokenize`](Self::tokenize), so nothing carries over between
/// inputs.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    indents: IndentStack,
    tokens: TokenList,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            indents: IndentStack::new(),
            tokens: TokenList::new(),
        }
    }

    /// Convert the whole source into tokens ending with `Eof`.
    pub fn tokenize(mut self) -> Result<TokenList, LexError> {
        while !self.cursor.is_eof() {
            if self.cursor.at_line_start() {
                self.indentation()?;
            }
            self.cursor.eat_inline_whitespace();
            let Some(c) = self.cursor.current() else {
                break;
            };
            self.dispatch(c)?;
        }

        self.close_levels();
        let eof = Token::new(TokenKind::Eof, "", position(&self.cursor));
        self.tokens.push(eof);
        Ok(self.tokens)
    }

    /// Measure the current line's indentation and emit the structural tokens.
    fn indentation(&mut self) -> Result<(), LexError> {
        let width = measure_indentation(&mut self.cursor);
        if is_blank_line(&self.cursor) {
            return Ok(());
        }

        let at = position(&self.cursor);
        match self.indents.change_to(width) {
            Ok(IndentChange::Same) => {}
            Ok(IndentChange::Indent) => {
                trace!(width, line = at.line, "indent");
                let spaces = " ".repeat(width as usize);
                self.tokens.push(Token::new(TokenKind::Indent, spaces, at));
            }
            Ok(IndentChange::Dedent(levels)) => {
                trace!(width, levels, line = at.line, "dedent");
                for _ in 0..levels {
                    self.tokens.push(Token::new(TokenKind::Dedent, "", at));
                }
            }
            Err(misaligned) => return Err(LexError::inconsistent_indentation(at, misaligned)),
        }
        Ok(())
    }

    /// Scan one token starting with `c`. Comments produce nothing.
    fn dispatch(&mut self, c: char) -> Result<(), LexError> {
        let cursor = &mut self.cursor;
        let token = match c {
            '\n' => classify::newline(cursor),
            '#' => {
                trace!(line = cursor.line(), "comment");
                classify::comment(cursor);
                return Ok(());
            }
            '/' => match classify::description(cursor) {
                Some(token) => token,
                None => return Err(LexError::unexpected_character(position(cursor), c)),
            },
            '"' => classify::string(cursor),
            '\'' => classify::quoted_identifier(cursor),
            c if classify::is_identifier_start(c) => classify::identifier(cursor, c)?,
            _ if classify::starts_number(cursor) => classify::number(cursor),
            _ => match TokenKind::punctuation(c) {
                Some(kind) => classify::punctuation(cursor, kind, c),
                None => return Err(LexError::unexpected_character(position(cursor), c)),
            },
        };
        trace!(kind = %token.kind, at = ?token.position, "token");
        self.tokens.push(token);
        Ok(())
    }

    /// Emit a DEDENT for every level still open at end of input.
    fn close_levels(&mut self) {
        let at = position(&self.cursor);
        let open = self.indents.close_all();
        if open > 0 {
            trace!(levels = open, "closing levels at end of input");
        }
        for _ in 0..open {
            self.tokens.push(Token::new(TokenKind::Dedent, "", at));
        }
    }
}

#[cfg(test)]
mod tests;
