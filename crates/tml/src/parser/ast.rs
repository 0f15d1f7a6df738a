//! Public AST types for parsed messages.
//!
//! These types are public to enable external tooling (catalog checkers,
//! dump/inspect utilities, etc.).

use serde::{Deserialize, Serialize};

/// A single node in a parsed message.
///
/// A message parses into an ordered forest of nodes: literal text runs,
/// paired tags with children, self-closing void tags, and named
/// placeholders. Structural identity for translation validation is
/// (variant, name); text content is carried but never compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// Literal text content.
    Text(String),
    /// A paired tag: `<name>...</name>`. Children form a subtree.
    Tag {
        name: String,
        children: Vec<Node>,
    },
    /// A self-closing tag: `<name/>`. No children.
    VoidTag { name: String },
    /// A named substitution point: `%name%`.
    Placeholder { name: String },
}

impl Node {
    /// Create a text node from any string-like value.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }

    /// True for structural nodes (everything except literal text).
    ///
    /// Structural nodes are the ones that must survive translation; see
    /// [`crate::is_structurally_equivalent`].
    pub fn is_structural(&self) -> bool {
        !matches!(self, Node::Text(_))
    }
}
