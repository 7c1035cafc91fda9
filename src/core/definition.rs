//! Immutable chain definitions.

use super::matrix::{TransitionMatrix, TransitionRow};
use super::node::{Node, NodeId};
use serde::{Deserialize, Serialize};

/// A validated Markov chain: ordered nodes, transition matrix and the
/// state every simulation starts from.
///
/// Definitions are only produced by [`ChainBuilder`](crate::builder::ChainBuilder)
/// or the [`validation`](crate::validation) module, both of which guarantee
/// that the initial state names a declared node. Once built a definition
/// never changes, so it can be shared behind an `Arc` by any number of
/// engines.
///
/// # Example
///
/// ```rust
/// use markov_lab::builder::ChainBuilder;
///
/// let chain = ChainBuilder::new()
///     .node("sunny", "Sunny")
///     .node("rainy", "Rainy")
///     .transition("sunny", "sunny", 0.9)
///     .transition("sunny", "rainy", 0.1)
///     .initial("sunny")
///     .build()
///     .unwrap();
///
/// assert_eq!(chain.initial_state(), "sunny");
/// assert_eq!(chain.edges().len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChainDefinition {
    nodes: Vec<Node>,
    matrix: TransitionMatrix,
    initial_state: NodeId,
}

/// One matrix entry, shaped for graph rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// `"{source}-{target}"`
    pub id: String,
    pub source: NodeId,
    pub target: NodeId,
    pub probability: f64,
}

impl Edge {
    pub fn new(source: NodeId, target: NodeId, probability: f64) -> Self {
        Self {
            id: format!("{source}-{target}"),
            source,
            target,
            probability,
        }
    }
}

impl ChainDefinition {
    /// Assemble a definition whose invariants the caller has already checked.
    pub(crate) fn from_parts(nodes: Vec<Node>, matrix: TransitionMatrix, initial_state: NodeId) -> Self {
        debug_assert!(nodes.iter().any(|n| n.id == initial_state));
        Self {
            nodes,
            matrix,
            initial_state,
        }
    }

    /// Declared nodes in display order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn matrix(&self) -> &TransitionMatrix {
        &self.matrix
    }

    pub fn initial_state(&self) -> &NodeId {
        &self.initial_state
    }

    /// Declared node with the given id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Whether `id` is a declared node.
    pub fn declares(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// Outgoing row of `source`, if any.
    pub fn row(&self, source: &str) -> Option<&TransitionRow> {
        self.matrix.row(source)
    }

    /// Every matrix entry as an edge, rows and entries in authored order.
    pub fn edges(&self) -> Vec<Edge> {
        self.matrix
            .rows()
            .flat_map(|(source, row)| {
                row.iter()
                    .map(move |(target, p)| Edge::new(source.clone(), target.clone(), p))
            })
            .collect()
    }

    /// The edge leading from `source` to `target`, if the matrix has one.
    pub fn edge(&self, source: &str, target: &str) -> Option<Edge> {
        let (source_id, row) = self.matrix.rows().find(|(id, _)| *id == source)?;
        let (target_id, p) = row.iter().find(|(id, _)| *id == target)?;
        Some(Edge::new(source_id.clone(), target_id.clone(), p))
    }
}
