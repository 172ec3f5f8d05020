use crate::syntax::NodeId;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A node handed out as a leaf turned out to be an interior rule node.
    /// Only a broken tree producer can cause this.
    #[error("Malformed tree: node {node} is a {rule} node, expected a token")]
    MalformedTree { node: NodeId, rule: crate::syntax::Rule },

    #[error("Tree builder error: {0}")]
    Builder(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T = ()> = std::result::Result<T, Error>;

impl From<confique::Error> for Error {
    fn from(value: confique::Error) -> Self {
        Error::Config(value.to_string())
    }
}
