use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    /// `None` while the type is missing or misspelled.
    pub attribute_type: Option<AttributeType>,
    /// Identifier leaf of the attribute name.
    pub node: NodeId,
}

impl Attribute {
    pub fn new(name: impl Into<String>, attribute_type: Option<AttributeType>, node: NodeId) -> Self {
        Self {
            name: name.into(),
            attribute_type,
            node,
        }
    }
}
