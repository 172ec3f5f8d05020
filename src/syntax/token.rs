//! Leaf token: a grammar tag, its source text and byte span.
//!
//! Offsets always refer to the document the tree was built from, so cursor
//! logic can compare them directly against a [`Cursor`](crate::Cursor).
use crate::syntax::{keyword::Keyword, token_kind::TokenKind};

/// Invariants:
/// - `end >= start`
/// - `end - start == text.len()`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, start: usize) -> Self {
        let text = text.into();
        let end = start + text.len();
        Self {
            kind,
            text,
            start,
            end,
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_keyword(&self, kw: Keyword) -> bool {
        self.kind.is_keyword(kw)
    }

    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    /// True if the cursor (byte offset) lies within this token's span.
    ///
    /// NOTE: End is exclusive, so `cursor == end` returns false.
    pub fn contains(&self, cursor: usize) -> bool {
        cursor >= self.start && cursor < self.end
    }

    pub const fn span(&self) -> (usize, usize) {
        (self.start, self.end)
    }
}
