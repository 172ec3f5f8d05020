use crate::syntax::{NodeId, SyntaxTree};
use crate::*;

pub const TOP_LEVEL_KEYWORDS: [&str; 10] = [
    "define stream",
    "define table",
    "define window",
    "define trigger",
    "define function",
    "define aggregation",
    "from",
    "partition with",
    "@app:name",
    "@info",
];

pub const AFTER_QUERY_INPUT_KEYWORDS: [&str; 7] = [
    "select",
    "output",
    "insert into",
    "delete",
    "update",
    "update or insert into",
    "return",
];

pub const BEGINNING_OF_QUERY_OUTPUT_KEYWORDS: [&str; 6] = [
    "insert",
    "insert into",
    "delete",
    "update",
    "update or insert into",
    "return",
];

pub const OUTPUT_EVENT_TYPE_KEYWORDS: [&str; 5] = [
    "all events",
    "all raw events",
    "current events",
    "expired events",
    "expired raw events",
];

pub const INTO_KEYWORD: &str = "into";

/// Suggestions for one clause of a query, keyed by finer local context.
///
/// Receives the same tree, element and context the classifier saw.
pub trait ClauseResolver: Send + Sync {
    fn resolve(&self, tree: &SyntaxTree, element: NodeId, ctx: &CursorContext) -> Result<Suggestions>;
}

impl<F> ClauseResolver for F
where
    F: Fn(&SyntaxTree, NodeId, &CursorContext) -> Result<Suggestions> + Send + Sync,
{
    fn resolve(&self, tree: &SyntaxTree, element: NodeId, ctx: &CursorContext) -> Result<Suggestions> {
        self(tree, element, ctx)
    }
}

/// Maps a region to its suggestions. Fixed regions use the keyword tables
/// above; clause regions go to the configured [`ClauseResolver`]s.
pub struct SuggestionResolver {
    input: Box<dyn ClauseResolver>,
    section: Box<dyn ClauseResolver>,
    rate: Box<dyn ClauseResolver>,
    output: Box<dyn ClauseResolver>,
}

impl Default for SuggestionResolver {
    fn default() -> Self {
        Self {
            input: Box::new(InputClause),
            section: Box::new(SectionClause),
            rate: Box::new(RateClause),
            output: Box::new(OutputClause),
        }
    }
}

impl std::fmt::Debug for SuggestionResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuggestionResolver").finish_non_exhaustive()
    }
}

impl SuggestionResolver {
    pub fn with_input(mut self, resolver: impl ClauseResolver + 'static) -> Self {
        self.input = Box::new(resolver);
        self
    }

    pub fn with_section(mut self, resolver: impl ClauseResolver + 'static) -> Self {
        self.section = Box::new(resolver);
        self
    }

    pub fn with_rate(mut self, resolver: impl ClauseResolver + 'static) -> Self {
        self.rate = Box::new(resolver);
        self
    }

    pub fn with_output(mut self, resolver: impl ClauseResolver + 'static) -> Self {
        self.output = Box::new(resolver);
        self
    }

    pub fn top_level(&self) -> Suggestions {
        Suggestion::keywords(&TOP_LEVEL_KEYWORDS)
    }

    pub fn resolve(&self, region: Region, tree: &SyntaxTree, ctx: &CursorContext) -> Result<Suggestions> {
        let element = ctx.element;
        let suggestions = match region {
            Region::TopLevel => self.top_level(),
            Region::QueryInput => self.input.resolve(tree, element, ctx)?,
            Region::AfterAnonymousStreamInput => Suggestion::keywords(&AFTER_QUERY_INPUT_KEYWORDS),
            Region::QuerySection => self.section.resolve(tree, element, ctx)?,
            Region::OutputRate => self.rate.resolve(tree, element, ctx)?,
            Region::StartOfQueryOutput => {
                Suggestion::keywords(&BEGINNING_OF_QUERY_OUTPUT_KEYWORDS)
            }
            Region::AfterInsertKeyword => {
                let mut out = Suggestion::keywords(&OUTPUT_EVENT_TYPE_KEYWORDS);
                out.push(Suggestion::keyword(INTO_KEYWORD));
                out
            }
            Region::AfterOutputEventType => vec![Suggestion::keyword(INTO_KEYWORD)],
            Region::QueryOutput => self.output.resolve(tree, element, ctx)?,
        };
        Ok(suggestions)
    }
}
