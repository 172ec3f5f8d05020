//! Semantic role of identifier leaves.
//!
//! Every identifier is the same kind of leaf no matter where it appears, so
//! what it refers to is decided here from its position in the tree.
use crate::syntax::{Keyword, NodeId, Rule, SyntaxTree, TokenKind};
use crate::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ReferenceRole {
    /// Names a stream, table or window being read or inserted into.
    StreamId,
    /// Output target of `delete`, `update` or `update or insert into`.
    Target,
    /// Attribute used inside an expression.
    AttributeName,
}

/// Role of an identifier leaf, `None` for any other leaf or position.
///
/// Checked in this order:
/// 1. target right after `into`, outside `update or insert into` → `StreamId`
/// 2. inside a target → `Target`
/// 3. attribute name inside an attribute reference → `AttributeName`
/// 4. inside a stream id → `StreamId`
pub fn reference_role(tree: &SyntaxTree, leaf: NodeId) -> Result<Option<ReferenceRole>> {
    if tree.token(leaf)?.kind != TokenKind::Identifier {
        return Ok(None);
    }
    let within = |rule| tree.has_ancestor(leaf, rule);

    if within(Rule::Target) && !within(Rule::UpdateOrInsertInto) {
        if let Some(prev) = tree.prev_visible_leaf(leaf) {
            if tree.token(prev)?.is_keyword(Keyword::Into) {
                return Ok(Some(ReferenceRole::StreamId));
            }
        }
    }

    let role = if within(Rule::Target) {
        Some(ReferenceRole::Target)
    } else if within(Rule::AttributeName) && within(Rule::AttributeReference) {
        Some(ReferenceRole::AttributeName)
    } else if within(Rule::StreamId) {
        Some(ReferenceRole::StreamId)
    } else {
        None
    };
    Ok(role)
}

/// Identifier leaf of the definition `leaf` refers to.
///
/// Attributes resolve against the streams the enclosing query reads first,
/// then against any definition.
pub fn resolve_reference(
    tree: &SyntaxTree,
    symbols: &Symbols,
    leaf: NodeId,
) -> Result<Option<NodeId>> {
    let Some(role) = reference_role(tree, leaf)? else {
        return Ok(None);
    };
    let name = tree.token(leaf)?.text.as_str();
    let target = match role {
        ReferenceRole::StreamId | ReferenceRole::Target => {
            symbols.definition(name).map(|d| d.node)
        }
        ReferenceRole::AttributeName => {
            let read = input_stream_names(tree, leaf)?;
            symbols
                .attributes_of(&read)
                .into_iter()
                .find(|a| a.name == name)
                .or_else(|| {
                    symbols
                        .definitions
                        .iter()
                        .find_map(|d| d.attribute(name))
                })
                .map(|a| a.node)
        }
    };
    trace!("Resolved {name} as {role} to {target:?}");
    Ok(target)
}

/// Names of the streams read by the query enclosing `id`, in source order.
pub fn input_stream_names(tree: &SyntaxTree, id: NodeId) -> Result<Vec<String>> {
    let Some(query) = tree.ancestor(id, Rule::Query) else {
        return Ok(Vec::new());
    };
    let mut names = Vec::new();
    for input in tree
        .children(query)
        .iter()
        .filter(|&&child| tree.rule(child) == Some(Rule::QueryInput))
    {
        for stream_id in tree.descendants_with_rule(*input, Rule::StreamId) {
            if let Some(leaf) = tree.first_visible_leaf(stream_id) {
                let name = &tree.token(leaf)?.text;
                if !names.contains(name) {
                    names.push(name.clone());
                }
            }
        }
    }
    Ok(names)
}
