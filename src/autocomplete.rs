crate::reexport!(context);
crate::reexport!(region);
crate::reexport!(suggestion);
crate::reexport!(resolver);
crate::reexport!(clauses);
crate::reexport!(engine_tests, test);

use crate::syntax::{NodeId, SyntaxTree};
use crate::*;
use itertools::Itertools;

/// Completion entry point: classify the cursor, resolve the region, then
/// filter by what has been typed.
///
/// Holds only immutable resolvers, so one engine can serve any number of
/// documents and threads.
#[derive(Debug, Default)]
pub struct CompletionEngine {
    resolver: SuggestionResolver,
}

impl CompletionEngine {
    pub fn new(resolver: SuggestionResolver) -> Self {
        Self { resolver }
    }

    /// Suggestions for a request at `cursor`, narrowed to the word being
    /// typed and de-duplicated by label.
    pub fn complete(&self, tree: &SyntaxTree, cursor: Cursor) -> Result<Suggestions> {
        let span = span!(tracing::Level::DEBUG, "complete", offset = cursor.offset());
        let _enter = span.enter();

        let ctx = CursorContext::at(tree, cursor)?;
        let suggestions = self.suggestions(tree, ctx.as_ref())?;
        let prefix = typed_prefix(tree, cursor)?;
        let out: Suggestions = suggestions
            .into_iter()
            .filter(|s| s.matches(prefix))
            .unique_by(|s| s.label.clone())
            .collect();
        trace!("{} suggestion(s) for prefix {prefix:?}", out.len());
        Ok(out)
    }

    /// Unfiltered suggestions for `element`.
    pub fn complete_at(&self, tree: &SyntaxTree, element: NodeId) -> Result<Suggestions> {
        let ctx = CursorContext::new(tree, element)?;
        let suggestions = self.suggestions(tree, ctx.as_ref())?;
        Ok(suggestions.into_iter().unique_by(|s| s.label.clone()).collect())
    }

    fn suggestions(&self, tree: &SyntaxTree, ctx: Option<&CursorContext>) -> Result<Suggestions> {
        let Some(ctx) = ctx else {
            debug!("No visible leaf before the cursor, region {}", Region::TopLevel);
            return Ok(self.resolver.top_level());
        };
        let Some(region) = classify(tree, ctx)? else {
            debug!("Cursor at {} is outside any region", ctx.element);
            return Ok(Vec::new());
        };
        debug!("Cursor at {} classified as {region}", ctx.element);
        self.resolver.resolve(region, tree, ctx)
    }
}

/// Part of the word under the cursor that precedes it; empty when the cursor
/// is not inside or right after a word.
fn typed_prefix(tree: &SyntaxTree, cursor: Cursor) -> Result<&str> {
    let offset = cursor.offset();
    let Some(element) = tree.element_at(offset) else {
        return Ok("");
    };
    let token = tree.token(element)?;
    if !token.kind.is_word() || offset <= token.start || offset > token.end {
        return Ok("");
    }
    Ok(token.text.get(..offset - token.start).unwrap_or(""))
}

/// [`CompletionEngine::complete`] with the built-in resolvers.
pub fn suggest(tree: &SyntaxTree, cursor: Cursor) -> Result<Suggestions> {
    CompletionEngine::default().complete(tree, cursor)
}
