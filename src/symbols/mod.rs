//! Catalog of the streams, tables and windows a document defines.
crate::reexport!(attribute);
crate::reexport!(definition);

use crate::syntax::{NodeId, Rule, SyntaxTree};
use crate::*;

/// Definitions of one document in source order. Built fresh from a tree;
/// never updated in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Symbols {
    pub definitions: Vec<Definition>,
}

impl Symbols {
    pub fn collect(tree: &SyntaxTree) -> Result<Self> {
        let mut definitions = Vec::new();
        for rule in Rule::DEFINITIONS {
            for node in tree.descendants_with_rule(tree.root(), rule) {
                if let Some(definition) = Definition::from_node(tree, node)? {
                    definitions.push(definition);
                }
            }
        }
        definitions.sort_by_key(|d| d.node);
        trace!("Collected {} definition(s)", definitions.len());
        Ok(Self { definitions })
    }

    /// First definition with this name; Siddhi names are case-sensitive.
    pub fn definition(&self, name: &str) -> Option<&Definition> {
        self.definitions.iter().find(|d| d.name == name)
    }

    pub fn of_kind(&self, kind: DefinitionKind) -> impl Iterator<Item = &Definition> {
        self.definitions.iter().filter(move |d| d.kind == kind)
    }

    /// Attributes of the named definitions, in the order the names are given.
    /// Unknown names are skipped.
    pub fn attributes_of<'a>(&'a self, names: &[String]) -> Vec<&'a Attribute> {
        names
            .iter()
            .filter_map(|name| self.definition(name))
            .flat_map(|d| d.attributes.iter())
            .collect()
    }
}
