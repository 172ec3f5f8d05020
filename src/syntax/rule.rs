//! Grammar-rule tags for interior nodes.
//!
//! The tree producer tags every interior node with one of these. Positional
//! logic matches on them exhaustively instead of probing node types.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Rule {
    SiddhiApp,
    Annotation,
    DefinitionStream,
    DefinitionTable,
    DefinitionWindow,
    StreamId,
    AttributeName,
    AttributeType,
    Partition,
    Query,
    QueryInput,
    StandardStream,
    AnonymousStream,
    QuerySection,
    OutputAttribute,
    AttributeReference,
    GroupBy,
    Having,
    OrderBy,
    Limit,
    OutputRate,
    QueryOutput,
    OutputEventType,
    Target,
    UpdateOrInsertInto,
    /// Text the grammar could not match, kept so positions stay addressable.
    Error,
}

impl Rule {
    pub const ALL: [Self; 26] = [
        Rule::SiddhiApp,
        Rule::Annotation,
        Rule::DefinitionStream,
        Rule::DefinitionTable,
        Rule::DefinitionWindow,
        Rule::StreamId,
        Rule::AttributeName,
        Rule::AttributeType,
        Rule::Partition,
        Rule::Query,
        Rule::QueryInput,
        Rule::StandardStream,
        Rule::AnonymousStream,
        Rule::QuerySection,
        Rule::OutputAttribute,
        Rule::AttributeReference,
        Rule::GroupBy,
        Rule::Having,
        Rule::OrderBy,
        Rule::Limit,
        Rule::OutputRate,
        Rule::QueryOutput,
        Rule::OutputEventType,
        Rule::Target,
        Rule::UpdateOrInsertInto,
        Rule::Error,
    ];

    /// Rules introducing a named event source.
    pub const DEFINITIONS: [Self; 3] = [
        Rule::DefinitionStream,
        Rule::DefinitionTable,
        Rule::DefinitionWindow,
    ];

    /// Looks a rule up by its variant name, as printed by `Display`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rule| rule.to_string() == name)
    }

    pub fn is_definition(self) -> bool {
        Self::DEFINITIONS.contains(&self)
    }
}
