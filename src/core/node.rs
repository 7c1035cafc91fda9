//! Chain nodes and their identifiers.
//!
//! Nodes are the states of a Markov chain. They are immutable once a chain
//! is defined: an identifier that is unique within the chain, plus a label
//! for display.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of a node, unique within one chain.
///
/// `NodeId` borrows as `str`, so maps keyed by `NodeId` can be queried
/// with plain string slices.
///
/// # Example
///
/// ```rust
/// use markov_lab::core::NodeId;
///
/// let id = NodeId::from("sunny");
/// assert_eq!(id.as_str(), "sunny");
/// assert_eq!(id.to_string(), "sunny");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create an identifier from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// View the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for NodeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NodeId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A state of the chain as shown to the user.
///
/// # Example
///
/// ```rust
/// use markov_lab::core::Node;
///
/// let node = Node::new("rainy", "Rainy");
/// assert_eq!(node.id, "rainy");
/// assert_eq!(node.label, "Rainy");
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Node {
    /// Identifier referenced by the transition matrix
    pub id: NodeId,
    /// Display label
    pub label: String,
}

impl Node {
    /// Create a node from an id and a display label.
    pub fn new(id: impl Into<NodeId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}
