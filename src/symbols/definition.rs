use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, derive_more::Display)]
pub enum DefinitionKind {
    #[display("stream")]
    Stream,
    #[display("table")]
    Table,
    #[display("window")]
    Window,
}

impl DefinitionKind {
    pub fn from_rule(rule: Rule) -> Option<Self> {
        match rule {
            Rule::DefinitionStream => Some(DefinitionKind::Stream),
            Rule::DefinitionTable => Some(DefinitionKind::Table),
            Rule::DefinitionWindow => Some(DefinitionKind::Window),
            _ => None,
        }
    }
}

/// A `define stream|table|window` statement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Definition {
    pub name: String,
    pub kind: DefinitionKind,
    /// Attributes in declaration order.
    pub attributes: Vec<Attribute>,
    /// Identifier leaf of the defined name.
    pub node: NodeId,
}

impl Definition {
    /// Reads a definition node. Returns `None` while the name is still missing.
    pub fn from_node(tree: &SyntaxTree, id: NodeId) -> Result<Option<Self>> {
        let Some(kind) = tree.rule(id).and_then(DefinitionKind::from_rule) else {
            return Ok(None);
        };
        let Some(name_leaf) = tree
            .children(id)
            .iter()
            .find(|&&child| tree.rule(child) == Some(Rule::StreamId))
            .and_then(|&stream_id| tree.first_visible_leaf(stream_id))
        else {
            return Ok(None);
        };
        let name = tree.token(name_leaf)?.text.clone();

        let mut attributes = Vec::new();
        for attribute in tree.descendants_with_rule(id, Rule::AttributeName) {
            let Some(leaf) = tree.first_visible_leaf(attribute) else {
                continue;
            };
            let mut sibling = tree.next_sibling(attribute);
            let mut attribute_type = None;
            while let Some(s) = sibling {
                match tree.rule(s) {
                    Some(Rule::AttributeType) => {
                        attribute_type =
                            AttributeType::from_lower(&tree.text(s).trim().to_ascii_lowercase());
                        break;
                    }
                    Some(Rule::AttributeName) => break,
                    _ => sibling = tree.next_sibling(s),
                }
            }
            attributes.push(Attribute::new(
                tree.token(leaf)?.text.clone(),
                attribute_type,
                leaf,
            ));
        }

        Ok(Some(Self {
            name,
            kind,
            attributes,
            node: name_leaf,
        }))
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }
}
