//! Siddhi keyword model used by the tokenizer and completion tables.
//!
//! Covers the keywords the completion contexts reason about plus the ones the
//! suggestion tables emit. Anything else lexes as an identifier, which keeps
//! the tokenizer lenient for half-typed input.
//!
//! Keywords are matched case-insensitively via `from_lower` on a pre-lowered
//! slice; `as_str` gives the canonical lowercase spelling.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Define,
    Stream,
    Table,
    Window,
    Trigger,
    Function,
    Aggregation,
    Partition,
    With,
    Begin,
    End,
    From,
    Select,
    As,
    Group,
    Order,
    By,
    Having,
    Limit,
    Offset,
    Output,
    Every,
    Events,
    All,
    Last,
    First,
    Snapshot,
    Insert,
    Into,
    Current,
    Expired,
    Raw,
    Delete,
    Update,
    Or,
    And,
    Not,
    On,
    Set,
    Return,
    Join,
    Unidirectional,
    Asc,
    Desc,
}

impl Keyword {
    /// Attempt to classify a *lower-cased* word slice into a `Keyword`.
    ///
    /// NOTE: the caller lower-cases the input once per lexeme.
    pub fn from_lower(word: &str) -> Option<Self> {
        use Keyword::*;
        let kw = match word {
            "define" => Define,
            "stream" => Stream,
            "table" => Table,
            "window" => Window,
            "trigger" => Trigger,
            "function" => Function,
            "aggregation" => Aggregation,
            "partition" => Partition,
            "with" => With,
            "begin" => Begin,
            "end" => End,
            "from" => From,
            "select" => Select,
            "as" => As,
            "group" => Group,
            "order" => Order,
            "by" => By,
            "having" => Having,
            "limit" => Limit,
            "offset" => Offset,
            "output" => Output,
            "every" => Every,
            "events" => Events,
            "all" => All,
            "last" => Last,
            "first" => First,
            "snapshot" => Snapshot,
            "insert" => Insert,
            "into" => Into,
            "current" => Current,
            "expired" => Expired,
            "raw" => Raw,
            "delete" => Delete,
            "update" => Update,
            "or" => Or,
            "and" => And,
            "not" => Not,
            "on" => On,
            "set" => Set,
            "return" => Return,
            "join" => Join,
            "unidirectional" => Unidirectional,
            "asc" => Asc,
            "desc" => Desc,
            _ => return None,
        };
        Some(kw)
    }

    /// Canonical lowercase string form of the keyword.
    pub const fn as_str(self) -> &'static str {
        use Keyword::*;
        match self {
            Define => "define",
            Stream => "stream",
            Table => "table",
            Window => "window",
            Trigger => "trigger",
            Function => "function",
            Aggregation => "aggregation",
            Partition => "partition",
            With => "with",
            Begin => "begin",
            End => "end",
            From => "from",
            Select => "select",
            As => "as",
            Group => "group",
            Order => "order",
            By => "by",
            Having => "having",
            Limit => "limit",
            Offset => "offset",
            Output => "output",
            Every => "every",
            Events => "events",
            All => "all",
            Last => "last",
            First => "first",
            Snapshot => "snapshot",
            Insert => "insert",
            Into => "into",
            Current => "current",
            Expired => "expired",
            Raw => "raw",
            Delete => "delete",
            Update => "update",
            Or => "or",
            And => "and",
            Not => "not",
            On => "on",
            Set => "set",
            Return => "return",
            Join => "join",
            Unidirectional => "unidirectional",
            Asc => "asc",
            Desc => "desc",
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_known_keywords() {
        for w in ["insert", "into", "events", "every", "output", "from", "select"] {
            assert!(Keyword::from_lower(w).is_some(), "{w} should be recognized");
        }
    }

    #[test]
    fn rejects_unknown_words() {
        for w in ["foo", "stockstream", "length", "sec", "INSERT"] {
            assert!(
                Keyword::from_lower(w).is_none(),
                "{w} should NOT be recognized"
            );
        }
    }

    #[test]
    fn display_round_trips_through_from_lower() {
        for kw in [
            Keyword::Insert,
            Keyword::Into,
            Keyword::Events,
            Keyword::Expired,
            Keyword::Unidirectional,
        ] {
            assert_eq!(Keyword::from_lower(&kw.to_string()), Some(kw));
        }
    }
}
