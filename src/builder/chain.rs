//! Builder for constructing chain definitions.

use crate::builder::error::BuildError;
use crate::core::{ChainDefinition, Node, NodeId, TransitionMatrix, TransitionRow};
use std::collections::HashSet;

/// Builder for constructing chain definitions with a fluent API.
///
/// Transitions may reference targets that are not declared as nodes; the
/// builder enforces the same invariants as the permissive validator.
pub struct ChainBuilder {
    nodes: Vec<Node>,
    matrix: TransitionMatrix,
    initial: Option<NodeId>,
}

impl ChainBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            matrix: TransitionMatrix::new(),
            initial: None,
        }
    }

    /// Declare a node.
    pub fn node(mut self, id: impl Into<NodeId>, label: impl Into<String>) -> Self {
        self.nodes.push(Node::new(id, label));
        self
    }

    /// Declare several nodes at once.
    pub fn nodes(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.nodes.extend(nodes);
        self
    }

    /// Append an entry to the row of `from`.
    pub fn transition(
        mut self,
        from: impl Into<NodeId>,
        to: impl Into<NodeId>,
        probability: f64,
    ) -> Self {
        self.matrix.row_mut(from).insert(to, probability);
        self
    }

    /// Set the whole row of `from`, replacing earlier entries.
    pub fn row(mut self, from: impl Into<NodeId>, row: TransitionRow) -> Self {
        self.matrix.insert_row(from, row);
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, id: impl Into<NodeId>) -> Self {
        self.initial = Some(id.into());
        self
    }

    /// Build the definition.
    /// Returns an error if nodes are missing or duplicated, or if the
    /// initial state is missing or undeclared.
    pub fn build(self) -> Result<ChainDefinition, BuildError> {
        if self.nodes.is_empty() {
            return Err(BuildError::NoNodes);
        }

        let mut seen = HashSet::new();
        for node in &self.nodes {
            if !seen.insert(node.id.as_str()) {
                return Err(BuildError::DuplicateNode {
                    id: node.id.to_string(),
                });
            }
        }

        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        if !seen.contains(initial.as_str()) {
            return Err(BuildError::UnknownInitialState {
                id: initial.to_string(),
            });
        }

        Ok(ChainDefinition::from_parts(self.nodes, self.matrix, initial))
    }
}

impl Default for ChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_nodes() {
        let result = ChainBuilder::new().initial("A").build();
        assert_eq!(result, Err(BuildError::NoNodes));
    }

    #[test]
    fn builder_requires_initial_state() {
        let result = ChainBuilder::new().node("A", "State A").build();
        assert_eq!(result, Err(BuildError::MissingInitialState));
    }

    #[test]
    fn builder_rejects_undeclared_initial_state() {
        let result = ChainBuilder::new()
            .node("A", "State A")
            .node("B", "State B")
            .initial("Z")
            .build();

        assert_eq!(
            result,
            Err(BuildError::UnknownInitialState {
                id: "Z".to_string()
            })
        );
    }

    #[test]
    fn builder_rejects_duplicate_nodes() {
        let result = ChainBuilder::new()
            .node("A", "First")
            .node("A", "Second")
            .initial("A")
            .build();

        assert!(matches!(result, Err(BuildError::DuplicateNode { id }) if id == "A"));
    }

    #[test]
    fn fluent_api_builds_chain() {
        let chain = ChainBuilder::new()
            .node("A", "Pos A")
            .node("B", "Pos B")
            .transition("A", "B", 1.0)
            .transition("B", "A", 0.5)
            .transition("B", "B", 0.5)
            .initial("A")
            .build()
            .unwrap();

        assert_eq!(chain.nodes().len(), 2);
        assert_eq!(chain.initial_state(), "A");
        assert_eq!(chain.row("B").unwrap().len(), 2);
        assert_eq!(chain.row("A").unwrap().probability("B"), Some(1.0));
    }

    #[test]
    fn row_replaces_earlier_transitions() {
        let chain = ChainBuilder::new()
            .node("A", "A")
            .transition("A", "A", 0.2)
            .row("A", TransitionRow::new().with("A", 0.7))
            .initial("A")
            .build()
            .unwrap();

        assert_eq!(chain.row("A").unwrap().probability("A"), Some(0.7));
    }

    #[test]
    fn undeclared_targets_are_allowed() {
        let chain = ChainBuilder::new()
            .node("A", "A")
            .transition("A", "elsewhere", 1.0)
            .initial("A")
            .build();

        assert!(chain.is_ok());
    }
}
