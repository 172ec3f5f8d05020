use crate::syntax::{
    rule::Rule,
    token::Token,
    token_kind::TokenKind,
    tokenizer::tokenize,
    tree::{Node, NodeId, NodeKind, SyntaxTree},
};
use crate::*;

/// Event-style construction of a [`SyntaxTree`].
///
/// Nodes are appended in pre-order as events arrive, and token spans are
/// assigned contiguously from offset 0, so the finished tree covers exactly
/// the text fed to it.
///
/// ```
/// use siddhi_assist::syntax::{Rule, TreeBuilder};
///
/// let mut builder = TreeBuilder::new();
/// builder.start_node(Rule::SiddhiApp);
/// builder.start_node(Rule::Query);
/// builder.tokens("from StockStream").unwrap();
/// builder.finish_node().unwrap();
/// builder.finish_node().unwrap();
/// let tree = builder.finish().unwrap();
/// assert_eq!(tree.source(), "from StockStream");
/// ```
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<Node>,
    open: Vec<NodeId>,
    offset: usize,
    finished_root: bool,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current end offset; the span start of the next token.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn start_node(&mut self, rule: Rule) {
        let id = self.push(NodeKind::Rule(rule));
        self.open.push(id);
    }

    pub fn finish_node(&mut self) -> Result {
        let closed = self
            .open
            .pop()
            .ok_or_else(|| Error::Builder("finish_node without an open node".into()))?;
        if self.open.is_empty() {
            trace!("Closed root node {closed}");
            self.finished_root = true;
        }
        Ok(())
    }

    /// Appends one token to the innermost open node.
    pub fn token(&mut self, kind: TokenKind, text: &str) -> Result {
        if self.open.is_empty() {
            return Err(Error::Builder(format!(
                "token {text:?} at offset {} outside any node",
                self.offset
            )));
        }
        let token = Token::new(kind, text, self.offset);
        self.offset = token.end;
        self.push(NodeKind::Token(token));
        Ok(())
    }

    /// Tokenizes `text` and appends every token, trivia included.
    pub fn tokens(&mut self, text: &str) -> Result {
        for token in tokenize(text) {
            self.token(token.kind, &token.text)?;
        }
        Ok(())
    }

    pub fn finish(self) -> Result<SyntaxTree> {
        if let Some(&unclosed) = self.open.last() {
            let rule = self.nodes[unclosed.0].rule();
            return Err(Error::Builder(format!(
                "{} node(s) left open, innermost {unclosed} ({rule:?})",
                self.open.len()
            )));
        }
        if self.nodes.is_empty() {
            return Err(Error::Builder("no root node".into()));
        }
        let leaves = self
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.as_token().is_some())
            .map(|(i, _)| NodeId(i))
            .collect();
        Ok(SyntaxTree {
            nodes: self.nodes,
            leaves,
        })
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        let parent = self.open.last().copied();
        if parent.is_none() && self.finished_root {
            // single root: later top-level nodes hang under it
            warn!("Node {id} started after the root closed, attaching to root");
        }
        let parent = parent.or_else(|| (!self.nodes.is_empty()).then_some(NodeId(0)));
        let index = parent.map_or(0, |p| self.nodes[p.0].children.len());
        if let Some(p) = parent {
            self.nodes[p.0].children.push(id);
        }
        self.nodes.push(Node {
            kind,
            parent,
            index,
            children: Vec::new(),
        });
        id
    }
}
