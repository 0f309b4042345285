//! Token types for the TMDL lexer.
//!
//! A token is a closed `TokenKind` discriminant plus an owned, already-decoded
//! text payload and the position of its first character. Tokens never borrow
//! the source they were scanned from.

use super::Position;
use std::fmt;
use std::ops::Index;

/// A token with its decoded text and source position.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    /// Decoded payload.
    ///
    /// Quoted identifiers and strings have their quotes stripped and doubled
    /// quotes collapsed. Structural tokens carry debugging text only: INDENT
    /// holds the indentation as spaces, NEWLINE holds `"\n"`, DEDENT and EOF
    /// are empty.
    pub text: String,
    pub position: Position,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Token {
            kind,
            text: text.into(),
            position,
        }
    }

    /// 1-based line of the token's first character.
    #[inline]
    pub fn line(&self) -> u32 {
        self.position.line
    }

    /// 1-based column of the token's first character.
    #[inline]
    pub fn column(&self) -> u32 {
        self.position.column
    }

    /// Returns `true` for tokens derived from layout rather than content.
    pub fn is_structural(&self) -> bool {
        self.kind.is_structural()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?}) @ {:?}", self.kind, self.text, self.position)
    }
}

/// Token kinds for TMDL.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// Indentation increased: a nested level opened.
    Indent,
    /// Indentation decreased: one nested level closed.
    Dedent,
    /// Line break.
    Newline,
    /// Object or property name, bare or `'quoted'`.
    Identifier,
    /// Property delimiter `:`.
    Colon,
    /// Default property delimiter `=`.
    Equals,
    /// Double-quoted string literal.
    String,
    /// Integer, decimal or dotted version literal.
    Number,
    /// `true` / `false`.
    Bool,
    /// `///` description comment.
    Description,
    LBracket,
    RBracket,
    LParen,
    RParen,
    Comma,
    /// End of input. Always the last token.
    Eof,
}

impl TokenKind {
    /// Returns `true` for INDENT, DEDENT, NEWLINE and EOF.
    pub const fn is_structural(self) -> bool {
        matches!(
            self,
            TokenKind::Indent | TokenKind::Dedent | TokenKind::Newline | TokenKind::Eof
        )
    }

    /// The punctuation kind for a single character, if it is one.
    pub const fn punctuation(c: char) -> Option<TokenKind> {
        match c {
            ':' => Some(TokenKind::Colon),
            '=' => Some(TokenKind::Equals),
            '[' => Some(TokenKind::LBracket),
            ']' => Some(TokenKind::RBracket),
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            ',' => Some(TokenKind::Comma),
            _ => None,
        }
    }

    /// Upper-case display name, as used in diagnostics and token dumps.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Colon => "COLON",
            TokenKind::Equals => "EQUALS",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::Bool => "BOOL",
            TokenKind::Description => "DESCRIPTION",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Comma => "COMMA",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The owned token sequence produced by one tokenize call.
///
/// A successfully lexed list always ends with exactly one `Eof` token.
#[derive(Clone, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Create a new empty token list.
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    /// Create a new token list with pre-allocated capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn first(&self) -> Option<&Token> {
        self.tokens.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Kinds of all tokens, in order.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }

    /// Number of tokens of the given kind.
    pub fn count(&self, kind: TokenKind) -> usize {
        self.tokens.iter().filter(|t| t.kind == kind).count()
    }

    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.tokens).finish()
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl IntoIterator for TokenList {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl From<Vec<Token>> for TokenList {
    fn from(tokens: Vec<Token>) -> Self {
        TokenList { tokens }
    }
}
