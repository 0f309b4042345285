//! Source positions.
//!
//! TMDL diagnostics point at lines and columns rather than byte ranges, so
//! positions are stored as a compact 1-based `(line, column)` pair.

use std::fmt;

/// 1-based line/column location of a character in the source.
///
/// Columns count characters (Unicode scalar values), not bytes.
///
/// Layout: 8 bytes total
/// - line: u32
/// - column: u32
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// Position of the first character of any source.
    pub const START: Position = Position { line: 1, column: 1 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    /// Returns `true` if this position is the first column of its line.
    #[inline]
    pub const fn is_line_start(&self) -> bool {
        self.column == 1
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::START
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Position;
    crate::static_assert_size!(Position, 8);
}
