use crate::syntax::{Keyword, Rule, SyntaxTree, TokenKind};
use crate::*;

/// Grammatical zone of a query the cursor sits in. Zones are mutually
/// exclusive; each maps to one suggestion contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Region {
    /// Between statements, or nothing before the cursor.
    TopLevel,
    QueryInput,
    /// Right after an anonymous stream closed its output event type.
    AfterAnonymousStreamInput,
    QuerySection,
    OutputRate,
    /// After a finished `output every <n> events` clause.
    StartOfQueryOutput,
    AfterInsertKeyword,
    AfterOutputEventType,
    QueryOutput,
}

/// Decides the region of a request.
///
/// The checks run top to bottom and the first match wins; several of them
/// overlap structurally, so the order decides what the user is offered.
/// `None` means the cursor is outside anything this classifier covers.
pub fn classify(tree: &SyntaxTree, ctx: &CursorContext) -> Result<Option<Region>> {
    if !ctx.element_within(tree, Rule::Query) {
        return Ok(statement_level(tree, ctx).then_some(Region::TopLevel));
    }

    if ctx.element_within(tree, Rule::QueryInput) {
        return Ok(Some(Region::QueryInput));
    }

    // An unfinished anonymous stream leaves the cursor in an error node under
    // the query rather than in the input clause, so look through the
    // previous leaf instead of the element's ancestry.
    if ctx.prev_within(tree, Rule::QueryInput)
        && ctx.prev_within(tree, Rule::AnonymousStream)
        && (ctx.prev_within(tree, Rule::OutputEventType)
            || (ctx.prev_is(TokenKind::ClosePar)
                && ctx.prev_pre_within(tree, Rule::OutputEventType)))
    {
        return Ok(Some(Region::AfterAnonymousStreamInput));
    }

    if ctx.element_within(tree, Rule::QuerySection) {
        return Ok(Some(Region::QuerySection));
    }

    if ctx.element_within(tree, Rule::OutputRate) {
        return Ok(Some(Region::OutputRate));
    }

    if ctx.prev_within(tree, Rule::OutputRate)
        && ctx.prev_is(TokenKind::Keyword(Keyword::Events))
        && ctx.prev_pre_is(TokenKind::IntLiteral)
    {
        return Ok(Some(Region::StartOfQueryOutput));
    }

    if ctx.prev_is(TokenKind::Keyword(Keyword::Insert))
        && (ctx.prev_pre_within(tree, Rule::OutputRate)
            || ctx.prev_pre_within(tree, Rule::QuerySection)
            || ctx.prev_pre_within(tree, Rule::QueryInput))
    {
        return Ok(Some(Region::AfterInsertKeyword));
    }

    if let Some(event_type) = tree
        .parent(ctx.prev_visible)
        .filter(|&parent| tree.rule(parent) == Some(Rule::OutputEventType))
    {
        if let Some(before) = tree.prev_visible_leaf(event_type) {
            if tree.token(before)?.is_keyword(Keyword::Insert) {
                return Ok(Some(Region::AfterOutputEventType));
            }
        }
    }

    Ok(Some(Region::QueryOutput))
}

/// True when the element sits between statements: nothing but the app,
/// partitions or error recovery above it, right after a statement ended.
fn statement_level(tree: &SyntaxTree, ctx: &CursorContext) -> bool {
    let top = tree.ancestors(ctx.element).all(|n| {
        matches!(
            tree.rule(n),
            Some(Rule::SiddhiApp | Rule::Partition | Rule::Error)
        )
    });
    let after_statement = match ctx.prev_visible_kind {
        TokenKind::Semicolon | TokenKind::Keyword(Keyword::Begin) => true,
        TokenKind::ClosePar => ctx.prev_within(tree, Rule::Annotation),
        _ => false,
    };
    top && after_statement
}
