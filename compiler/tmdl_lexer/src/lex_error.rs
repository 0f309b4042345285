//! Lexer error types.
//!
//! Every error is fatal to the tokenize call that raised it: the lexer stops
//! at the first problem and returns no partial token list. Errors always carry
//! the line and column where scanning failed so callers can point at the
//! offending source.

use tmdl_ir::Position;
use tmdl_lexer_core::MisalignedDedent;

/// A lexer error and where it happened.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at {position}")]
pub struct LexError {
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// WHERE scanning stopped.
    pub position: Position,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// A dedent landed between two recorded indentation levels.
    #[error("inconsistent indentation (width {width}, nearest enclosing level is {expected})")]
    InconsistentIndentation { width: u32, expected: u32 },
    /// Unquoted identifier starting with something other than a letter, `_` or `.`.
    #[error("invalid identifier start {found:?}")]
    InvalidIdentifierStart { found: char },
    /// No token starts with this character.
    #[error("unexpected character {found:?}")]
    UnexpectedCharacter { found: char },
}

impl LexError {
    pub fn inconsistent_indentation(position: Position, misaligned: MisalignedDedent) -> Self {
        Self {
            kind: LexErrorKind::InconsistentIndentation {
                width: misaligned.width,
                expected: misaligned.expected,
            },
            position,
        }
    }

    pub fn invalid_identifier_start(position: Position, found: char) -> Self {
        Self {
            kind: LexErrorKind::InvalidIdentifierStart { found },
            position,
        }
    }

    pub fn unexpected_character(position: Position, found: char) -> Self {
        Self {
            kind: LexErrorKind::UnexpectedCharacter { found },
            position,
        }
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.position.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.position.column
    }
}
