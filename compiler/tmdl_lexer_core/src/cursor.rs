//! Character cursor with line/column bookkeeping.
//!
//! The cursor is the single owner of position state during a tokenize call.
//! Everything that consumes input goes through [`Cursor::advance`] (or one of
//! the bulk `eat_*` helpers built on the same rules), so line and column can
//! never drift from the byte offset:
//!
//! - consuming `\n` increments the line and resets the column to 1;
//! - consuming any other character increments the column by one.
//!
//! Columns count characters, not bytes. Lookahead is bounded: callers look at
//! most two characters past the current one.

/// UTF-8 byte order mark. Skipped when it leads the source.
const BOM: char = '\u{FEFF}';

/// Cursor over TMDL source text.
///
/// The cursor is [`Copy`], so a classifier can snapshot it before scanning.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Current read position (byte index into `source`, always on a char boundary).
    pos: usize,
    /// 1-based line of the current character.
    line: u32,
    /// 1-based column of the current character.
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `source`.
    ///
    /// A leading byte order mark is stepped over without counting as a column,
    /// so the first real character is still at line 1, column 1.
    pub fn new(source: &'a str) -> Self {
        let pos = if source.starts_with(BOM) {
            BOM.len_utf8()
        } else {
            0
        };
        Self {
            source,
            pos,
            line: 1,
            column: 1,
        }
    }

    #[inline]
    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// The character at the current position, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The character one position ahead of current.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    /// The character two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> Option<char> {
        self.rest().chars().nth(2)
    }

    /// Up to `n` characters starting at the current position.
    ///
    /// Returns a shorter (possibly empty) slice when fewer than `n`
    /// characters remain. Never advances.
    pub fn lookahead(&self, n: usize) -> &'a str {
        let rest = self.rest();
        let end = rest.char_indices().nth(n).map_or(rest.len(), |(i, _)| i);
        &rest[..end]
    }

    /// Returns `true` if the remaining input starts with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Consume one character. No-op at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.current() {
            self.pos += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Consume `n` characters, stopping early at end of input.
    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Returns `true` once every character has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// 1-based line of the current character.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column of the current character.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns `true` when the cursor sits on the first column of a line.
    #[inline]
    pub fn at_line_start(&self) -> bool {
        self.column == 1
    }

    /// Source text between two byte offsets previously returned by [`pos`](Self::pos).
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.source[start..end]
    }

    /// Source text from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current character.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            self.advance();
        }
    }

    /// Skip whitespace that does not end the line.
    ///
    /// A `\r` is skipped like any other inline whitespace, so CRLF sources
    /// reach `\n` with nothing left over.
    pub fn eat_inline_whitespace(&mut self) {
        self.eat_while(|c| c != '\n' && c.is_whitespace());
    }

    /// Advance to the next `\n` (not consumed) or to end of input.
    ///
    /// Uses `memchr` to find the newline, then accounts for the skipped
    /// characters in the column.
    pub fn eat_until_newline_or_eof(&mut self) {
        let rest = self.rest();
        let len = memchr::memchr(b'\n', rest.as_bytes()).unwrap_or(rest.len());
        let skipped = rest[..len].chars().count();
        self.column = self
            .column
            .saturating_add(u32::try_from(skipped).unwrap_or(u32::MAX));
        self.pos += len;
    }
}
