use crate::syntax::{Keyword, NodeId, Rule, SyntaxTree, Token, TokenKind};
use crate::*;

/// Rewrites the leading whitespace of every line of `tree`'s source.
///
/// - statements inside a partition get one `indent_size` per partition,
///   except the partition's own first line and its `end`
/// - lines of a query after its first get `continuation_indent_size` more
/// - comment lines stay at column 0 when the matching flag is set
/// - blank lines lose their whitespace
///
/// Lines starting inside a multi-line token (block comment, string) are kept
/// as they are.
pub fn reindent(tree: &SyntaxTree, style: &CodeStyle) -> Result<String> {
    let source = tree.source();
    let mut out = String::with_capacity(source.len());
    let mut line_start = 0;

    for line in source.split_inclusive('\n') {
        let body = line.trim_start_matches([' ', '\t']);
        let first = line_start + (line.len() - body.len());
        line_start += line.len();

        if body.trim().is_empty() {
            out.push_str(&line[line.trim_end_matches(['\r', '\n']).len()..]);
            continue;
        }
        let Some(leaf) = tree.leaf_at(first) else {
            out.push_str(line);
            continue;
        };
        let token = tree.token(leaf)?;
        if token.start < first {
            out.push_str(line);
            continue;
        }
        let columns = if at_first_column(token, style) {
            0
        } else {
            indent_columns(tree, leaf, style)?
        };
        out.push_str(&style.indent(columns));
        out.push_str(body);
    }
    trace!("Reindented {} byte(s)", source.len());
    Ok(out)
}

/// [`reindent`] with the process-wide code style from [`config`].
pub fn format_document(tree: &SyntaxTree) -> Result<String> {
    reindent(tree, &config().code_style)
}

fn at_first_column(token: &Token, style: &CodeStyle) -> bool {
    match token.kind {
        TokenKind::LineComment => style.line_comment_at_first_column,
        TokenKind::BlockComment => style.block_comment_at_first_column,
        _ => false,
    }
}

fn indent_columns(tree: &SyntaxTree, leaf: NodeId, style: &CodeStyle) -> Result<usize> {
    let mut columns = 0;
    for partition in tree
        .ancestors(leaf)
        .filter(|&n| tree.rule(n) == Some(Rule::Partition))
    {
        if !opens_or_closes(tree, partition, leaf)? {
            columns += style.indent_size;
        }
    }
    if let Some(query) = tree.ancestor(leaf, Rule::Query) {
        if tree.first_visible_leaf(query).is_some_and(|start| start < leaf) {
            columns += style.continuation_indent_size;
        }
    }
    Ok(columns)
}

/// True for the partition's first visible leaf and its closing `end`.
fn opens_or_closes(tree: &SyntaxTree, partition: NodeId, leaf: NodeId) -> Result<bool> {
    if tree.first_visible_leaf(partition) == Some(leaf) {
        return Ok(true);
    }
    Ok(tree.parent(leaf) == Some(partition) && tree.token(leaf)?.is_keyword(Keyword::End))
}
