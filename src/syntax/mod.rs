//! Siddhi token model and concrete syntax tree.
//!
//! Modules:
//! - `keyword`    : Siddhi keywords, matched case-insensitively.
//! - `token_kind` : Grammar tags of leaf tokens, trivia included.
//! - `token`      : Token struct pairing a tag with its text and span.
//! - `tokenizer`  : Lenient, lossless single-pass tokenizer.
//! - `rule`       : Grammar-rule tags of interior nodes.
//! - `tree`       : Immutable arena tree with parent/child/sibling navigation.
//! - `builder`    : Event-style tree construction for tree producers.
//!
//! Grammar-driven tree construction belongs to the caller; this module only
//! supplies the shapes and the navigation every positional check relies on.

pub mod builder;
pub mod keyword;
pub mod rule;
pub mod token;
pub mod token_kind;
pub mod tokenizer;
pub mod tree;

pub use builder::TreeBuilder;
pub use keyword::Keyword;
pub use rule::Rule;
pub use token::Token;
pub use token_kind::TokenKind;
pub use tokenizer::tokenize;
pub use tree::{Node, NodeId, NodeKind, SyntaxTree};
