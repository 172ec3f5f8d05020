use crate::syntax::{NodeId, Rule, SyntaxTree, TokenKind};
use crate::*;

/// What the classifier knows about one completion request.
///
/// Built fresh for every request from the element at the cursor; it only
/// holds ids into the tree it was built from and is never updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorContext {
    pub element: NodeId,
    /// Nearest visible leaf before the element.
    pub prev_visible: NodeId,
    pub prev_visible_kind: TokenKind,
    /// Nearest visible leaf before `prev_visible`.
    pub prev_pre_visible: Option<NodeId>,
    pub prev_pre_visible_kind: Option<TokenKind>,
}

impl CursorContext {
    /// `None` when nothing visible precedes the element, e.g. at the start
    /// of the document.
    pub fn new(tree: &SyntaxTree, element: NodeId) -> Result<Option<Self>> {
        let Some(prev_visible) = tree.prev_visible_leaf(element) else {
            return Ok(None);
        };
        let prev_visible_kind = tree.token(prev_visible)?.kind;
        let prev_pre_visible = tree.prev_visible_leaf(prev_visible);
        let prev_pre_visible_kind = match prev_pre_visible {
            Some(id) => Some(tree.token(id)?.kind),
            None => None,
        };
        Ok(Some(Self {
            element,
            prev_visible,
            prev_visible_kind,
            prev_pre_visible,
            prev_pre_visible_kind,
        }))
    }

    /// Context for a request at `cursor`.
    ///
    /// A visible punctuation leaf ending right at the cursor, such as the `#`
    /// in `from S#`, is already behind it and counts as the previous leaf.
    /// When that leaf is a `)` or `;` the cursor also sits outside every node
    /// it closes, so the element becomes the outermost such node. An
    /// unterminated query still owns the cursor after a `)`.
    pub fn at(tree: &SyntaxTree, cursor: Cursor) -> Result<Option<Self>> {
        let Some(element) = tree.element_at(cursor.offset()) else {
            return Ok(None);
        };
        let token = tree.token(element)?;
        if token.is_trivia() || token.kind.is_word() || token.end > cursor.offset() {
            return Self::new(tree, element);
        }
        let prev_pre_visible = tree.prev_visible_leaf(element);
        let prev_pre_visible_kind = match prev_pre_visible {
            Some(id) => Some(tree.token(id)?.kind),
            None => None,
        };
        Ok(Some(Self {
            element: closed_by(tree, element, token.kind),
            prev_visible: element,
            prev_visible_kind: token.kind,
            prev_pre_visible,
            prev_pre_visible_kind,
        }))
    }

    /// Nearest node tagged `rule` enclosing the element.
    pub fn enclosing(&self, tree: &SyntaxTree, rule: Rule) -> Option<NodeId> {
        tree.ancestor(self.element, rule)
    }

    pub fn element_within(&self, tree: &SyntaxTree, rule: Rule) -> bool {
        self.enclosing(tree, rule).is_some()
    }

    pub fn prev_within(&self, tree: &SyntaxTree, rule: Rule) -> bool {
        tree.has_ancestor(self.prev_visible, rule)
    }

    pub fn prev_pre_within(&self, tree: &SyntaxTree, rule: Rule) -> bool {
        self.prev_pre_visible
            .is_some_and(|id| tree.has_ancestor(id, rule))
    }

    pub fn prev_is(&self, kind: TokenKind) -> bool {
        self.prev_visible_kind == kind
    }

    pub fn prev_pre_is(&self, kind: TokenKind) -> bool {
        self.prev_pre_visible_kind == Some(kind)
    }
}

/// Outermost node whose last visible leaf is the closing `leaf`.
fn closed_by(tree: &SyntaxTree, leaf: NodeId, kind: TokenKind) -> NodeId {
    if !matches!(kind, TokenKind::ClosePar | TokenKind::Semicolon) {
        return leaf;
    }
    let mut node = leaf;
    while let Some(parent) = tree.parent(node) {
        if tree.last_visible_leaf(parent) != Some(leaf)
            || (tree.rule(parent) == Some(Rule::Query) && kind != TokenKind::Semicolon)
        {
            break;
        }
        node = parent;
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Keyword;

    fn context(markup: &str) -> (SyntaxTree, Option<CursorContext>) {
        let (tree, cursor) = tree_with_cursor(markup);
        let element = tree.element_at(cursor.offset()).expect("element at cursor");
        let context = CursorContext::new(&tree, element).expect("well-formed tree");
        (tree, context)
    }

    #[test]
    fn records_two_previous_visible_leaves() {
        let (tree, ctx) =
            context("{SiddhiApp {Query {OutputRate output every 5 events} insert $}}");
        let ctx = ctx.expect("context");
        assert!(ctx.prev_is(TokenKind::Keyword(Keyword::Insert)));
        assert!(ctx.prev_pre_is(TokenKind::Keyword(Keyword::Events)));
        assert!(ctx.prev_pre_within(&tree, Rule::OutputRate));
        assert!(!ctx.prev_within(&tree, Rule::OutputRate));
        assert!(ctx.element_within(&tree, Rule::Query));
    }

    #[rstest]
    #[case("{SiddhiApp {Query {OutputRate output every 5 events} insert $}}")]
    #[case("{SiddhiApp {Query {OutputRate output every 5 events} -- rate\n insert /* out */ $}}")]
    #[case("{SiddhiApp {Query {OutputRate output every 5 /* n */ events /**/} insert $}}")]
    fn comments_do_not_change_previous_leaves(#[case] markup: &str) {
        let (tree, ctx) = context(markup);
        let ctx = ctx.expect("context");
        assert_eq!(tree.token(ctx.prev_visible).expect("leaf").text, "insert");
        assert_eq!(
            ctx.prev_pre_visible_kind,
            Some(TokenKind::Keyword(Keyword::Events))
        );
    }

    #[test]
    fn no_context_at_document_start() {
        let (_, ctx) = context("{SiddhiApp $from S}");
        assert_eq!(ctx, None);
    }

    #[rstest]
    #[case("{SiddhiApp {Query {QueryInput from S#$}}}", "#", Some("S"))]
    #[case("{SiddhiApp {Query {QueryInput from S#$ x}}}", "#", Some("S"))]
    #[case("{SiddhiApp {Query {QueryInput from S#win$}}}", "#", Some("S"))]
    #[case("{SiddhiApp {Query {QueryInput from S$#}}}", "from", None)]
    fn punctuation_before_the_cursor_is_previous(
        #[case] markup: &str,
        #[case] prev: &str,
        #[case] prev_pre: Option<&str>,
    ) {
        let (tree, cursor) = tree_with_cursor(markup);
        let ctx = CursorContext::at(&tree, cursor)
            .expect("well-formed tree")
            .expect("context");
        let text = |id| tree.token(id).expect("leaf").text.as_str();
        assert_eq!(text(ctx.prev_visible), prev);
        assert_eq!(ctx.prev_pre_visible.map(text), prev_pre);
    }

    #[rstest]
    #[case("{SiddhiApp {DefinitionStream define stream {StreamId S} (a int);$}}", None)]
    #[case("{SiddhiApp {Query {QueryInput from S} {QueryOutput insert into T};$}}", None)]
    #[case("{SiddhiApp {Annotation @info(name = 'q')}$}", None)]
    #[case(
        "{SiddhiApp {Query {QueryInput from {AnonymousStream ({QueryInput from S} return {OutputEventType current events})}}$}}",
        Some(Rule::QueryInput)
    )]
    #[case("{SiddhiApp {Query {QueryInput from S#window.length(5)}$}}", Some(Rule::QueryInput))]
    fn closing_punctuation_moves_the_element_out(
        #[case] markup: &str,
        #[case] element_rule: Option<Rule>,
    ) {
        let (tree, cursor) = tree_with_cursor(markup);
        let ctx = CursorContext::at(&tree, cursor)
            .expect("well-formed tree")
            .expect("context");
        assert!(tree.token(ctx.prev_visible).is_ok_and(|t| t.end == cursor.offset()));
        if element_rule.is_none() {
            assert_eq!(ctx.element, tree.root());
        } else {
            assert_eq!(tree.rule(ctx.element), element_rule);
        }
        assert!(!ctx.element_within(&tree, Rule::QueryInput));
    }

    #[test]
    fn only_one_previous_leaf() {
        let (_, ctx) = context("{SiddhiApp {Query from $}}");
        let ctx = ctx.expect("context");
        assert!(ctx.prev_is(TokenKind::Keyword(Keyword::From)));
        assert_eq!(ctx.prev_pre_visible, None);
        assert_eq!(ctx.prev_pre_visible_kind, None);
    }
}
