//! Grammar tags for leaf tokens.
//!
//! Each `TokenKind` is the tag a token carries in the syntax tree. Trivia
//! (whitespace and comments) are real tokens so the tree stays lossless; the
//! navigation helpers skip them through [`TokenKind::is_trivia`].

use crate::syntax::keyword::Keyword;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    Keyword(Keyword),
    IntLiteral,
    LongLiteral,
    FloatLiteral,
    StringLiteral,
    OpenPar,
    ClosePar,
    OpenSquare,
    CloseSquare,
    Comma,
    Semicolon,
    Dot,
    Hash,
    At,
    Colon,
    Assign,
    /// Any other single character we do not specially classify.
    Other(char),
    LineComment,
    BlockComment,
    Whitespace,
}

impl TokenKind {
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == kw)
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, TokenKind::LineComment | TokenKind::BlockComment)
    }

    /// Whitespace and comments; never "visible" to positional logic.
    pub fn is_trivia(&self) -> bool {
        self.is_comment() || matches!(self, TokenKind::Whitespace)
    }

    /// Tokens the user types as a word, so the cursor may sit at their end
    /// while still completing them.
    pub fn is_word(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::Keyword(_)
                | TokenKind::IntLiteral
                | TokenKind::LongLiteral
                | TokenKind::FloatLiteral
        )
    }
}
