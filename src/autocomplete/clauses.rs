//! Built-in clause resolvers: flat keyword and name tables keyed by the
//! tokens right before the cursor.
use crate::syntax::{Keyword, NodeId, Rule, SyntaxTree, TokenKind};
use crate::*;
use itertools::Itertools;

pub const WINDOW_FUNCTIONS: [&str; 12] = [
    "length",
    "lengthBatch",
    "time",
    "timeBatch",
    "timeLength",
    "externalTime",
    "externalTimeBatch",
    "sort",
    "frequent",
    "lossyFrequent",
    "cron",
    "session",
];

pub const AFTER_STREAM_KEYWORDS: [&str; 4] = ["#window.", "as", "join", "unidirectional"];

pub const QUERY_SECTION_KEYWORDS: [&str; 6] =
    ["as", "group by", "having", "order by", "limit", "offset"];

pub const OUTPUT_RATE_TYPE_KEYWORDS: [&str; 5] = ["all", "last", "first", "snapshot", "every"];

pub const TIME_UNITS: [&str; 8] = [
    "millisec", "sec", "min", "hour", "day", "week", "month", "year",
];

fn kw(keyword: Keyword) -> TokenKind {
    TokenKind::Keyword(keyword)
}

fn stream_names(symbols: &Symbols) -> Suggestions {
    symbols.definitions.iter().map(Suggestion::definition).collect()
}

fn input_attributes(tree: &SyntaxTree, element: NodeId, symbols: &Symbols) -> Result<Suggestions> {
    let read = input_stream_names(tree, element)?;
    Ok(symbols
        .attributes_of(&read)
        .into_iter()
        .map(Suggestion::attribute)
        .collect())
}

/// `from ...`: stream names, window functions and what may follow a stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputClause;

impl ClauseResolver for InputClause {
    fn resolve(&self, tree: &SyntaxTree, _element: NodeId, ctx: &CursorContext) -> Result<Suggestions> {
        let out = match ctx.prev_visible_kind {
            TokenKind::Hash => vec![Suggestion::function("window.")],
            TokenKind::Dot if ctx.prev_pre_is(kw(Keyword::Window)) => {
                WINDOW_FUNCTIONS.iter().map(|f| Suggestion::function(f)).collect()
            }
            TokenKind::Identifier | TokenKind::ClosePar | TokenKind::CloseSquare => {
                Suggestion::keywords(&AFTER_STREAM_KEYWORDS)
                    .into_iter()
                    .chain(Suggestion::keywords(&AFTER_QUERY_INPUT_KEYWORDS))
                    .collect()
            }
            _ => stream_names(&Symbols::collect(tree)?),
        };
        Ok(out)
    }
}

/// `select ...`: attributes of the streams being read, and the section's
/// own keywords once a projection exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionClause;

impl ClauseResolver for SectionClause {
    fn resolve(&self, tree: &SyntaxTree, element: NodeId, ctx: &CursorContext) -> Result<Suggestions> {
        let symbols = Symbols::collect(tree)?;
        let out = match ctx.prev_visible_kind {
            TokenKind::Keyword(Keyword::Select) => {
                let mut out = vec![Suggestion::new("*", "* ", SuggestionKind::Operator)];
                out.extend(input_attributes(tree, element, &symbols)?);
                out
            }
            TokenKind::Keyword(Keyword::Group | Keyword::Order) => {
                vec![Suggestion::keyword("by")]
            }
            TokenKind::Comma
            | TokenKind::OpenPar
            | TokenKind::Keyword(Keyword::By | Keyword::Having | Keyword::And | Keyword::Or | Keyword::Not) => {
                input_attributes(tree, element, &symbols)?
            }
            // operators; a bare `*` is a finished projection
            TokenKind::Other(op) if op != '*' => input_attributes(tree, element, &symbols)?,
            _ => Suggestion::keywords(&QUERY_SECTION_KEYWORDS)
                .into_iter()
                .chain(Suggestion::keywords(&AFTER_QUERY_INPUT_KEYWORDS[1..]))
                .collect(),
        };
        Ok(out)
    }
}

/// `output ... every <n> events|<unit>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RateClause;

impl ClauseResolver for RateClause {
    fn resolve(&self, _tree: &SyntaxTree, _element: NodeId, ctx: &CursorContext) -> Result<Suggestions> {
        let out = match ctx.prev_visible_kind {
            TokenKind::Keyword(Keyword::Output) => Suggestion::keywords(&OUTPUT_RATE_TYPE_KEYWORDS),
            TokenKind::Keyword(Keyword::All | Keyword::Last | Keyword::First | Keyword::Snapshot) => {
                vec![Suggestion::keyword("every")]
            }
            TokenKind::IntLiteral | TokenKind::LongLiteral => {
                let mut out = vec![Suggestion::keyword("events")];
                out.extend(Suggestion::keywords(&TIME_UNITS));
                out
            }
            _ => Vec::new(),
        };
        Ok(out)
    }
}

/// `insert into`, `delete`, `update`, `return` and their targets.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputClause;

impl ClauseResolver for OutputClause {
    fn resolve(&self, tree: &SyntaxTree, _element: NodeId, ctx: &CursorContext) -> Result<Suggestions> {
        let out = match ctx.prev_visible_kind {
            TokenKind::Keyword(Keyword::Into) => stream_names(&Symbols::collect(tree)?),
            TokenKind::Keyword(Keyword::Delete | Keyword::Update) => {
                let symbols = Symbols::collect(tree)?;
                let tables = symbols.of_kind(DefinitionKind::Table).map(Suggestion::definition);
                if ctx.prev_is(kw(Keyword::Update)) {
                    tables.chain([Suggestion::keyword("or insert into")]).collect()
                } else {
                    tables.collect()
                }
            }
            TokenKind::Keyword(Keyword::Or) if ctx.prev_pre_is(kw(Keyword::Update)) => {
                vec![Suggestion::keyword("insert into")]
            }
            TokenKind::Keyword(Keyword::Return) => Suggestion::keywords(&OUTPUT_EVENT_TYPE_KEYWORDS),
            _ if ctx.prev_within(tree, Rule::Target) => {
                let output = tree
                    .ancestor(ctx.prev_visible, Rule::QueryOutput)
                    .and_then(|output| tree.first_visible_leaf(output))
                    .map(|leaf| tree.token(leaf).map(|t| t.kind))
                    .transpose()?;
                match output {
                    Some(TokenKind::Keyword(Keyword::Delete | Keyword::Update)) => {
                        Suggestion::keywords(&["for", "on"])
                    }
                    _ => Vec::new(),
                }
            }
            _ => Suggestion::keywords(&BEGINNING_OF_QUERY_OUTPUT_KEYWORDS),
        };
        trace!(
            "Output clause after {:?}: {}",
            ctx.prev_visible_kind,
            out.iter().map(|s| &s.label).join(", ")
        );
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFINITIONS: &str = "\
        {DefinitionStream define stream {StreamId StockStream} ({AttributeName symbol} {AttributeType string}, {AttributeName price} {AttributeType double});} \
        {DefinitionTable define table {StreamId PriceTable} ({AttributeName price} {AttributeType double});} ";

    fn labels(resolver: impl ClauseResolver, query: &str) -> Vec<String> {
        let markup = format!("{{SiddhiApp {DEFINITIONS}{{Query {query}}}}}");
        let (tree, cursor) = tree_with_cursor(&markup);
        let ctx = CursorContext::at(&tree, cursor)
            .expect("well-formed tree")
            .expect("context");
        resolver
            .resolve(&tree, ctx.element, &ctx)
            .expect("well-formed tree")
            .into_iter()
            .map(|s| s.label)
            .collect()
    }

    #[rstest]
    #[case("{QueryInput from $}", vec!["StockStream", "PriceTable"])]
    #[case("{QueryInput from {StandardStream {StreamId StockStream}}#$}", vec!["window."])]
    #[case("{QueryInput from S join $}", vec!["StockStream", "PriceTable"])]
    fn input_names_and_windows(#[case] query: &str, #[case] expected: Vec<&str>) {
        assert_eq!(labels(InputClause, query), expected);
    }

    #[test]
    fn window_functions_after_window_dot() {
        let got = labels(InputClause, "{QueryInput from S#window.$}");
        assert_eq!(got.len(), WINDOW_FUNCTIONS.len());
        assert!(got.iter().any(|f| f == "lengthBatch"));
    }

    #[test]
    fn after_stream_offers_window_and_clauses() {
        let got = labels(InputClause, "{QueryInput from {StandardStream {StreamId StockStream}} $}");
        assert_eq!(&got[..4], AFTER_STREAM_KEYWORDS);
        assert!(got.iter().any(|k| k == "select"));
    }

    #[test]
    fn select_offers_star_and_input_attributes() {
        let got = labels(
            SectionClause,
            "{QueryInput from {StandardStream {StreamId StockStream}}} {QuerySection select $}",
        );
        assert_eq!(got, vec!["*", "symbol", "price"]);
    }

    #[rstest]
    #[case("{QuerySection select symbol group $}", vec!["by"])]
    #[case("{QuerySection select symbol, $}", vec!["symbol", "price"])]
    #[case("{QuerySection select symbol group by $}", vec!["symbol", "price"])]
    fn section_follow_ups(#[case] section: &str, #[case] expected: Vec<&str>) {
        let query = format!("{{QueryInput from {{StandardStream {{StreamId StockStream}}}}}} {section}");
        assert_eq!(labels(SectionClause, &query), expected);
    }

    #[test]
    fn finished_projection_offers_section_keywords() {
        let got = labels(SectionClause, "{QueryInput from S} {QuerySection select * $}");
        assert!(got.iter().any(|k| k == "group by"));
        assert!(got.iter().any(|k| k == "insert into"));
        assert!(!got.iter().any(|k| k == "select"));
    }

    #[rstest]
    #[case("{OutputRate output $}", OUTPUT_RATE_TYPE_KEYWORDS.to_vec())]
    #[case("{OutputRate output last $}", vec!["every"])]
    #[case("{OutputRate output every $}", vec![])]
    fn rate_keywords(#[case] rate: &str, #[case] expected: Vec<&str>) {
        let query = format!("{{QueryInput from S}} {rate}");
        assert_eq!(labels(RateClause, &query), expected);
    }

    #[test]
    fn rate_count_offers_events_and_time_units() {
        let got = labels(RateClause, "{QueryInput from S} {OutputRate output every 5 $}");
        assert_eq!(got[0], "events");
        assert_eq!(&got[1..], TIME_UNITS);
    }

    #[rstest]
    #[case("{QueryOutput insert into $}", vec!["StockStream", "PriceTable"])]
    #[case("{QueryOutput delete $}", vec!["PriceTable"])]
    #[case("{QueryOutput update $}", vec!["PriceTable", "or insert into"])]
    #[case("{QueryOutput update or $}", vec!["insert into"])]
    #[case("{QueryOutput delete {Target PriceTable} $}", vec!["for", "on"])]
    #[case("{QueryOutput insert into {Target {StreamId Out}} $}", vec![])]
    fn output_targets(#[case] output: &str, #[case] expected: Vec<&str>) {
        let query = format!("{{QueryInput from S}} {output}");
        assert_eq!(labels(OutputClause, &query), expected);
    }

    #[test]
    fn return_offers_event_types() {
        let got = labels(OutputClause, "{QueryInput from S} {QueryOutput return $}");
        assert_eq!(got, OUTPUT_EVENT_TYPE_KEYWORDS);
    }
}
