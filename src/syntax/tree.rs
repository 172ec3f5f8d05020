//! Immutable concrete syntax tree stored as an arena.
//!
//! Nodes are addressed by [`NodeId`]. Each node keeps the index of its parent
//! and the ordered indices of its children, so navigation in both directions
//! needs no shared ownership. The arena is laid out in pre-order, which makes
//! arena order and document order agree for leaves.

use crate::syntax::{rule::Rule, token::Token};
use crate::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("#{_0}")]
pub struct NodeId(pub(crate) usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Token(Token),
    Rule(Rule),
}

#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    /// Position within the parent's children.
    pub(crate) index: usize,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn rule(&self) -> Option<Rule> {
        match self.kind {
            NodeKind::Rule(rule) => Some(rule),
            NodeKind::Token(_) => None,
        }
    }

    pub fn as_token(&self) -> Option<&Token> {
        match &self.kind {
            NodeKind::Token(token) => Some(token),
            NodeKind::Rule(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SyntaxTree {
    pub(crate) nodes: Vec<Node>,
    /// Leaf ids in document order.
    pub(crate) leaves: Vec<NodeId>,
}

impl SyntaxTree {
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn rule(&self, id: NodeId) -> Option<Rule> {
        self.node(id).rule()
    }

    /// The token of a leaf node.
    ///
    /// Callers only pass ids they obtained as leaves, so an interior node here
    /// means the tree producer broke its contract.
    pub fn token(&self, id: NodeId) -> Result<&Token> {
        let node = self.node(id);
        match &node.kind {
            NodeKind::Token(token) => Ok(token),
            NodeKind::Rule(rule) => Err(Error::MalformedTree {
                node: id,
                rule: *rule,
            }),
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        let node = self.node(id);
        let parent = node.parent?;
        let index = node.index.checked_sub(1)?;
        self.children(parent).get(index).copied()
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        let node = self.node(id);
        let parent = node.parent?;
        self.children(parent).get(node.index + 1).copied()
    }

    /// Strict ancestors, nearest first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&n| self.parent(n))
    }

    /// Nearest strict ancestor tagged `rule`.
    pub fn ancestor(&self, id: NodeId, rule: Rule) -> Option<NodeId> {
        self.ancestors(id).find(|&n| self.rule(n) == Some(rule))
    }

    pub fn has_ancestor(&self, id: NodeId, rule: Rule) -> bool {
        self.ancestor(id, rule).is_some()
    }

    /// Leaf ids in document order.
    pub fn leaves(&self) -> &[NodeId] {
        &self.leaves
    }

    /// Leaf ids under `id` (or `id` itself when it is a leaf), in order.
    pub fn descendant_leaves(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_leaves(id, &mut out);
        out
    }

    fn collect_leaves(&self, id: NodeId, out: &mut Vec<NodeId>) {
        match self.node(id).kind {
            NodeKind::Token(_) => out.push(id),
            NodeKind::Rule(_) => {
                for &child in self.children(id) {
                    self.collect_leaves(child, out);
                }
            }
        }
    }

    /// Descendant nodes (including `id`) tagged `rule`, in document order.
    pub fn descendants_with_rule(&self, id: NodeId, rule: Rule) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(n) = stack.pop() {
            if self.rule(n) == Some(rule) {
                out.push(n);
            }
            stack.extend(self.children(n).iter().rev());
        }
        out
    }

    pub fn first_leaf(&self, id: NodeId) -> Option<NodeId> {
        match self.node(id).kind {
            NodeKind::Token(_) => Some(id),
            NodeKind::Rule(_) => self
                .children(id)
                .iter()
                .find_map(|&child| self.first_leaf(child)),
        }
    }

    pub fn first_visible_leaf(&self, id: NodeId) -> Option<NodeId> {
        match &self.node(id).kind {
            NodeKind::Token(token) => (!token.is_trivia()).then_some(id),
            NodeKind::Rule(_) => self
                .children(id)
                .iter()
                .find_map(|&child| self.first_visible_leaf(child)),
        }
    }

    pub fn last_visible_leaf(&self, id: NodeId) -> Option<NodeId> {
        match &self.node(id).kind {
            NodeKind::Token(token) => (!token.is_trivia()).then_some(id),
            NodeKind::Rule(_) => self
                .children(id)
                .iter()
                .rev()
                .find_map(|&child| self.last_visible_leaf(child)),
        }
    }

    /// Source text covered by `id`.
    pub fn text(&self, id: NodeId) -> String {
        self.descendant_leaves(id)
            .into_iter()
            .filter_map(|leaf| self.node(leaf).as_token())
            .map(|token| token.text.as_str())
            .collect()
    }

    /// Text of the whole document.
    pub fn source(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        self.text(self.root())
    }

    /// The leaf whose span contains `offset` (end exclusive).
    pub fn leaf_at(&self, offset: usize) -> Option<NodeId> {
        let idx = self
            .leaves
            .partition_point(|&leaf| self.leaf_end(leaf) <= offset);
        self.leaves.get(idx).copied().filter(|&leaf| {
            self.node(leaf)
                .as_token()
                .is_some_and(|token| token.contains(offset))
        })
    }

    /// The element a completion request at `offset` is about.
    ///
    /// In order of preference: the word the cursor sits in or right after,
    /// the leaf containing the cursor, the last leaf when the cursor is at the
    /// end of the document.
    pub fn element_at(&self, offset: usize) -> Option<NodeId> {
        let idx = self
            .leaves
            .partition_point(|&leaf| self.leaf_end(leaf) < offset);
        let typing = self.leaves.get(idx).copied().filter(|&leaf| {
            self.node(leaf).as_token().is_some_and(|token| {
                token.kind.is_word() && token.start < offset && offset <= token.end
            })
        });
        typing.or_else(|| self.leaf_at(offset)).or_else(|| {
            self.leaves
                .last()
                .copied()
                .filter(|&leaf| self.leaf_end(leaf) == offset)
        })
    }

    /// Nearest visible leaf before `id` in document order.
    ///
    /// Walks previous siblings first, then continues from the parent, so the
    /// result can live in a different subtree. Comments and whitespace never
    /// qualify.
    pub fn prev_visible_leaf(&self, id: NodeId) -> Option<NodeId> {
        let mut current = id;
        loop {
            let mut sibling = self.prev_sibling(current);
            while let Some(s) = sibling {
                if let Some(leaf) = self.last_visible_leaf(s) {
                    return Some(leaf);
                }
                sibling = self.prev_sibling(s);
            }
            current = self.parent(current)?;
        }
    }

    fn leaf_end(&self, leaf: NodeId) -> usize {
        self.node(leaf).as_token().map_or(0, |token| token.end)
    }
}
