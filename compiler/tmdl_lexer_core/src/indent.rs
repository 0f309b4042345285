//! Off-side rule: indentation width to nesting transitions.
//!
//! TMDL nests objects by indentation alone. At the start of every non-blank
//! line the lexer measures the leading whitespace and asks the
//! [`IndentStack`] how the nesting changed. Levels map 1:1 to object nesting,
//! so a dedent must land exactly on a width that was previously opened;
//! anything in between is reported as a [`MisalignedDedent`].

use std::fmt;

use crate::Cursor;

/// Column multiple a tab advances the indentation width to.
pub const TAB_STOP: u32 = 8;

/// Consume leading spaces and tabs, returning the indentation width.
///
/// A space adds one; a tab advances to the next multiple of [`TAB_STOP`].
pub fn measure_indentation(cursor: &mut Cursor<'_>) -> u32 {
    let mut width = 0;
    loop {
        match cursor.current() {
            Some(' ') => width += 1,
            Some('\t') => width += TAB_STOP - width % TAB_STOP,
            _ => break,
        }
        cursor.advance();
    }
    width
}

/// Returns `true` if only inline whitespace and a line ending (or end of
/// input) follow.
///
/// Blank lines are indentation-neutral: they neither open nor close levels.
/// "Inline whitespace" is exactly what [`Cursor::eat_inline_whitespace`]
/// skips, so `\r`, form feeds and other Unicode spaces count as blank.
pub fn is_blank_line(cursor: &Cursor<'_>) -> bool {
    let mut rest = *cursor;
    rest.eat_inline_whitespace();
    matches!(rest.current(), None | Some('\n'))
}

/// How the nesting changed for a new line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndentChange {
    /// Same level as the previous line.
    Same,
    /// One new level opened.
    Indent,
    /// This many levels closed.
    Dedent(usize),
}

/// A dedent that did not land on a recorded level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MisalignedDedent {
    /// Width of the offending line.
    pub width: u32,
    /// Innermost recorded level that is still open after popping.
    pub expected: u32,
}

impl fmt::Display for MisalignedDedent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dedent to width {} does not match any enclosing level (nearest is {})",
            self.width, self.expected
        )
    }
}

impl std::error::Error for MisalignedDedent {}

/// Stack of open indentation widths.
///
/// # Invariant
///
/// Strictly increasing from bottom to top, and the bottom is always `0`
/// (the root level), so the stack is never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndentStack {
    levels: Vec<u32>,
}

impl IndentStack {
    /// A stack holding only the root level.
    pub fn new() -> Self {
        Self { levels: vec![0] }
    }

    /// Width of the innermost open level.
    #[inline]
    pub fn top(&self) -> u32 {
        self.levels.last().copied().unwrap_or(0)
    }

    /// Number of levels open above the root.
    #[inline]
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// All open widths, root first.
    pub fn levels(&self) -> &[u32] {
        &self.levels
    }

    /// Move to a line indented by `width`.
    ///
    /// Wider than the top pushes one level; narrower pops until the top is no
    /// wider than `width`. If the pops do not land exactly on `width` the
    /// indentation is inconsistent.
    pub fn change_to(&mut self, width: u32) -> Result<IndentChange, MisalignedDedent> {
        let top = self.top();
        if width > top {
            self.levels.push(width);
            return Ok(IndentChange::Indent);
        }
        if width == top {
            return Ok(IndentChange::Same);
        }

        let mut popped = 0;
        while self.levels.len() > 1 && width < self.top() {
            self.levels.pop();
            popped += 1;
        }
        if self.top() == width {
            Ok(IndentChange::Dedent(popped))
        } else {
            Err(MisalignedDedent {
                width,
                expected: self.top(),
            })
        }
    }

    /// Close every level above the root, returning how many were closed.
    pub fn close_all(&mut self) -> usize {
        let closed = self.depth();
        self.levels.truncate(1);
        closed
    }
}

impl Default for IndentStack {
    fn default() -> Self {
        Self::new()
    }
}
