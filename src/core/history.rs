//! Visit history and the statistics derived from it.
//!
//! The history is the single source of truth: visit counts are recomputed
//! from it on every read, so they can never drift from what was visited.

use super::node::{Node, NodeId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ordered sequence of every state occupied, oldest first.
///
/// A history is never empty: it always starts with the state the
/// simulation began in.
///
/// # Example
///
/// ```rust
/// use markov_lab::core::{Node, NodeId, VisitHistory};
///
/// let mut history = VisitHistory::new(NodeId::from("A"));
/// history.record(NodeId::from("B"));
/// history.record(NodeId::from("A"));
///
/// assert_eq!(history.len(), 3);
/// assert_eq!(history.transitions(), 2);
///
/// let nodes = [Node::new("A", "A"), Node::new("B", "B"), Node::new("C", "C")];
/// let stats = history.statistics(&nodes);
/// assert_eq!(stats.get("A"), 2);
/// assert_eq!(stats.get("C"), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<NodeId>", into = "Vec<NodeId>")]
pub struct VisitHistory {
    states: Vec<NodeId>,
}

/// Rejected attempt to build a history with no states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("visit history must contain at least one state")]
pub struct EmptyHistory;

impl TryFrom<Vec<NodeId>> for VisitHistory {
    type Error = EmptyHistory;

    fn try_from(states: Vec<NodeId>) -> Result<Self, Self::Error> {
        if states.is_empty() {
            return Err(EmptyHistory);
        }
        Ok(Self { states })
    }
}

impl From<VisitHistory> for Vec<NodeId> {
    fn from(history: VisitHistory) -> Self {
        history.states
    }
}

impl VisitHistory {
    /// Start a history at `initial`.
    pub fn new(initial: NodeId) -> Self {
        Self {
            states: vec![initial],
        }
    }

    /// Append a newly entered state.
    pub fn record(&mut self, state: NodeId) {
        self.states.push(state);
    }

    /// Discard everything and start again at `initial`.
    pub fn restart(&mut self, initial: NodeId) {
        self.states.clear();
        self.states.push(initial);
    }

    /// All visited states, oldest first.
    pub fn states(&self) -> &[NodeId] {
        &self.states
    }

    /// Most recently entered state.
    pub fn latest(&self) -> &NodeId {
        // `new` and `restart` both leave one entry behind
        &self.states[self.states.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Never true: a history always holds its starting state.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Number of transitions taken since the history started.
    pub fn transitions(&self) -> usize {
        self.states.len() - 1
    }

    /// Occurrences of `state` in the history.
    pub fn count_of(&self, state: &str) -> usize {
        self.states.iter().filter(|s| *s == state).count()
    }

    /// Visit counts for every node in `nodes`, in their order.
    ///
    /// Declared nodes that were never visited report zero. States in the
    /// history that are not declared (reachable when the matrix names
    /// undeclared targets) are appended after the declared ones, so the
    /// counts always add up to the history length.
    pub fn statistics(&self, nodes: &[Node]) -> VisitStatistics {
        let mut counts: IndexMap<NodeId, usize> =
            nodes.iter().map(|n| (n.id.clone(), 0)).collect();
        for state in &self.states {
            *counts.entry(state.clone()).or_insert(0) += 1;
        }
        VisitStatistics { counts }
    }
}

/// Per-node visit counts, in node display order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisitStatistics {
    counts: IndexMap<NodeId, usize>,
}

impl VisitStatistics {
    /// Visits of `id`; zero for unknown ids.
    pub fn get(&self, id: &str) -> usize {
        self.counts.get(id).copied().unwrap_or(0)
    }

    /// Whether `id` has an entry (declared, or visited anyway).
    pub fn contains(&self, id: &str) -> bool {
        self.counts.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, usize)> {
        self.counts.iter().map(|(id, n)| (id, *n))
    }

    /// Sum of all counts; equals the history length.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes() -> Vec<Node> {
        vec![
            Node::new("S1", "State 1"),
            Node::new("S2", "State 2"),
            Node::new("S3", "State 3"),
        ]
    }

    #[test]
    fn new_history_holds_initial_state() {
        let history = VisitHistory::new(NodeId::from("S1"));

        assert_eq!(history.states(), &[NodeId::from("S1")]);
        assert_eq!(history.latest(), "S1");
        assert_eq!(history.transitions(), 0);
        assert!(!history.is_empty());
    }

    #[test]
    fn record_appends_in_order() {
        let mut history = VisitHistory::new(NodeId::from("S1"));
        history.record(NodeId::from("S2"));
        history.record(NodeId::from("S3"));

        let path: Vec<&str> = history.states().iter().map(|s| s.as_str()).collect();
        assert_eq!(path, vec!["S1", "S2", "S3"]);
        assert_eq!(history.latest(), "S3");
    }

    #[test]
    fn restart_leaves_single_entry() {
        let mut history = VisitHistory::new(NodeId::from("S1"));
        history.record(NodeId::from("S2"));
        history.restart(NodeId::from("S1"));

        assert_eq!(history.len(), 1);
        assert_eq!(history.latest(), "S1");
    }

    #[test]
    fn statistics_include_unvisited_nodes() {
        let mut history = VisitHistory::new(NodeId::from("S1"));
        history.record(NodeId::from("S2"));
        history.record(NodeId::from("S1"));

        let stats = history.statistics(&nodes());

        assert_eq!(stats.len(), 3);
        assert_eq!(stats.get("S1"), 2);
        assert_eq!(stats.get("S2"), 1);
        assert_eq!(stats.get("S3"), 0);
        assert!(stats.contains("S3"));
        assert_eq!(stats.total(), history.len());
    }

    #[test]
    fn statistics_keep_node_order() {
        let mut history = VisitHistory::new(NodeId::from("S3"));
        history.record(NodeId::from("S2"));

        let stats = history.statistics(&nodes());
        let order: Vec<&str> = stats.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(order, vec!["S1", "S2", "S3"]);
    }

    #[test]
    fn statistics_count_undeclared_states_last() {
        let mut history = VisitHistory::new(NodeId::from("S1"));
        history.record(NodeId::from("ghost"));

        let stats = history.statistics(&nodes());

        assert_eq!(stats.get("ghost"), 1);
        assert_eq!(stats.iter().last().map(|(id, _)| id.as_str()), Some("ghost"));
        assert_eq!(stats.total(), 2);
    }

    #[test]
    fn count_of_matches_statistics() {
        let mut history = VisitHistory::new(NodeId::from("S2"));
        history.record(NodeId::from("S2"));
        history.record(NodeId::from("S3"));

        assert_eq!(history.count_of("S2"), 2);
        assert_eq!(history.count_of("S1"), 0);
    }

    #[test]
    fn history_serializes_as_id_list() {
        let mut history = VisitHistory::new(NodeId::from("S1"));
        history.record(NodeId::from("S2"));

        let json = serde_json::to_string(&history).unwrap();
        assert_eq!(json, r#"["S1","S2"]"#);

        let restored: VisitHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, history);
    }

    #[test]
    fn empty_history_is_rejected() {
        let err = serde_json::from_str::<VisitHistory>("[]").unwrap_err();
        assert!(err.to_string().contains("at least one state"));

        assert_eq!(VisitHistory::try_from(Vec::new()), Err(EmptyHistory));
    }
}
