//! Low-level building blocks of the TMDL lexer.
//!
//! - [`Cursor`]: character cursor over the source text that keeps line and
//!   column in sync with everything it consumes.
//! - [`IndentStack`]: the off-side rule. Turns the measured width of each line
//!   into indent/dedent transitions and rejects dedents that land between
//!   recorded levels.
//!
//! Neither type knows about tokens. The `tmdl_lexer` crate composes them into
//! the tokenizer.

mod cursor;
mod indent;

pub use cursor::Cursor;
pub use indent::{
    is_blank_line, measure_indentation, IndentChange, IndentStack, MisalignedDedent, TAB_STOP,
};
