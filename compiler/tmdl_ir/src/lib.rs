//! TMDL IR - token stream types shared by the lexer and its consumers.
//!
//! This crate contains the data the lexer hands to a downstream parser:
//! - `Position` for 1-based line/column source locations
//! - `Token` / `TokenKind` for lexer output
//! - `TokenList` as the owned token sequence
//!
//! Every type is `Clone + Eq + Hash + Debug`. With the `serde` feature the
//! token stream can be serialized for snapshots.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod position;
mod token;

pub use position::Position;
pub use token::{Token, TokenKind, TokenList};
