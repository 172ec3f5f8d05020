//! Bracket markup for writing syntax trees in tests.
//!
//! `{Rule ...}` opens and closes an interior node (one space after the rule
//! name is a separator), plain text is tokenized into the innermost node, and
//! `$` marks the cursor. `{SiddhiApp {Query {QueryInput from S} insert $}}`
//! yields the document `from S insert ` with the cursor at its end.
use crate::syntax::{Rule, SyntaxTree, TreeBuilder};
use crate::*;

pub fn tree(markup: &str) -> SyntaxTree {
    tree_with_cursor(markup).0
}

pub fn tree_with_cursor(markup: &str) -> (SyntaxTree, Cursor) {
    super::common_init();
    let mut builder = TreeBuilder::new();
    let mut cursor = None;
    let mut text = String::new();
    let mut chars = markup.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' | '}' | '$' => {
                builder.tokens(&text).expect("markup text outside any node");
                text.clear();
            }
            _ => {
                text.push(c);
                continue;
            }
        }
        match c {
            '{' => {
                let mut name = String::new();
                while let Some(n) = chars.next_if(|&n| n != ' ' && n != '}') {
                    name.push(n);
                }
                chars.next_if_eq(&' ');
                let rule = Rule::from_name(&name)
                    .unwrap_or_else(|| panic!("unknown rule {name:?} in markup"));
                builder.start_node(rule);
            }
            '}' => builder.finish_node().expect("unbalanced markup"),
            _ => cursor = Some(builder.offset()),
        }
    }
    builder.tokens(&text).expect("markup text outside any node");

    let tree = builder.finish().expect("markup should describe one tree");
    let offset = cursor.unwrap_or(tree.leaves().last().map_or(0, |&leaf| {
        tree.token(leaf).map_or(0, |token| token.end)
    }));
    (tree, Cursor::new(offset))
}
