use crate::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum SuggestionKind {
    #[display("keyword")]
    Keyword,
    #[display("stream")]
    Stream,
    #[display("table")]
    Table,
    #[display("attribute")]
    Attribute,
    #[display("function")]
    Function,
    #[display("operator")]
    Operator,
}

/// One completion candidate, as handed to whatever renders the popup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{label} ({kind})")]
pub struct Suggestion {
    pub label: String,
    pub insert_text: String,
    pub kind: SuggestionKind,
}
pub type Suggestions = Vec<Suggestion>;

impl Suggestion {
    pub fn new(label: impl Into<String>, insert_text: impl Into<String>, kind: SuggestionKind) -> Self {
        Self {
            label: label.into(),
            insert_text: insert_text.into(),
            kind,
        }
    }

    /// Keywords insert a trailing space so typing can continue.
    pub fn keyword(label: &str) -> Self {
        Self::new(label, format!("{label} "), SuggestionKind::Keyword)
    }

    pub fn keywords(labels: &[&str]) -> Suggestions {
        labels.iter().map(|label| Self::keyword(label)).collect()
    }

    pub fn function(label: &str) -> Self {
        Self::new(label, label, SuggestionKind::Function)
    }

    pub fn attribute(attribute: &Attribute) -> Self {
        Self::new(&attribute.name, &attribute.name, SuggestionKind::Attribute)
    }

    pub fn definition(definition: &Definition) -> Self {
        let kind = match definition.kind {
            DefinitionKind::Table => SuggestionKind::Table,
            DefinitionKind::Stream | DefinitionKind::Window => SuggestionKind::Stream,
        };
        Self::new(&definition.name, &definition.name, kind)
    }

    /// Case-insensitive prefix match against the label.
    pub fn matches(&self, prefix: &str) -> bool {
        self.label
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    }
}
