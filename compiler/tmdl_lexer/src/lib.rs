//! Lexer for TMDL, the Tabular Model Definition Language.
//!
//! TMDL describes tabular models (models, tables, columns, measures,
//! annotations) with indentation-based nesting:
//!
//! ```text
//! table Sales
//!     column Quantity
//!         dataType: int64
//!         isHidden
//!
//!     /// Total revenue
//!     measure 'Sales Amount' = SUM(Sales[Amount])
//!         formatString: "$ #,##0"
//! ```
//!
//! [`tokenize`] turns such text into a flat [`TokenList`]. Nesting is encoded
//! as `Indent`/`Dedent` tokens so a parser can rebuild the object tree without
//! looking at whitespace again. The first lexical problem aborts the call with
//! a [`LexError`] carrying the line and column.

mod classify;
mod lex_error;
mod lexer;
mod tracing_setup;

pub use lex_error::{LexError, LexErrorKind};
pub use lexer::Lexer;
pub use tmdl_ir::{Position, Token, TokenKind, TokenList};
pub use tracing_setup::init_tracing;

/// Tokenize a complete TMDL source text.
///
/// On success the list ends with exactly one `Eof` token (an empty source
/// yields only that). Tokens own their text and outlive `source`.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize(source: &str) -> Result<TokenList, LexError> {
    let result = Lexer::new(source).tokenize();
    match &result {
        Ok(tokens) => tracing::debug!(tokens = tokens.len(), "tokenized"),
        Err(err) => tracing::debug!(%err, "tokenize failed"),
    }
    result
}
