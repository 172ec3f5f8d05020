use derive_more::{Debug, Display};

/// Siddhi attribute types as written in `define stream` attribute lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum AttributeType {
    #[display("string")]
    String,
    #[display("int")]
    Int,
    #[display("long")]
    Long,
    #[display("float")]
    Float,
    #[display("double")]
    Double,
    #[display("bool")]
    Bool,
    #[display("object")]
    Object,
}

impl AttributeType {
    pub fn from_lower(word: &str) -> Option<Self> {
        use AttributeType::*;
        let ty = match word {
            "string" => String,
            "int" => Int,
            "long" => Long,
            "float" => Float,
            "double" => Double,
            "bool" => Bool,
            "object" => Object,
            _ => return None,
        };
        Some(ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("string", Some(AttributeType::String))]
    #[case("double", Some(AttributeType::Double))]
    #[case("bool", Some(AttributeType::Bool))]
    #[case("boolean", None)]
    #[case("String", None)]
    fn parses_lowercase_names(#[case] word: &str, #[case] expected: Option<AttributeType>) {
        assert_eq!(AttributeType::from_lower(word), expected);
    }

    #[test]
    fn display_is_the_source_spelling() {
        assert_eq!(AttributeType::Long.to_string(), "long");
    }
}
