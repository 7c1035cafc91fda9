//! Transition rows and the transition matrix.
//!
//! Rows keep their entries in authored order. Selection walks the entries
//! in that order, so the order is observable whenever a row's
//! probabilities do not form a proper distribution.

use super::node::NodeId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Outgoing transitions of a single source state.
///
/// # Example
///
/// ```rust
/// use markov_lab::core::TransitionRow;
///
/// let row = TransitionRow::new().with("sunny", 0.9).with("rainy", 0.1);
///
/// assert_eq!(row.len(), 2);
/// assert_eq!(row.select(0.5).map(|id| id.as_str()), Some("sunny"));
/// assert_eq!(row.select(0.95).map(|id| id.as_str()), Some("rainy"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransitionRow {
    entries: IndexMap<NodeId, f64>,
}

impl TransitionRow {
    /// Create an empty row.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Add an entry, returning the row. Re-adding a target overwrites its
    /// probability but keeps its original position.
    pub fn with(mut self, target: impl Into<NodeId>, probability: f64) -> Self {
        self.insert(target, probability);
        self
    }

    /// Add an entry in place.
    pub fn insert(&mut self, target: impl Into<NodeId>, probability: f64) {
        self.entries.insert(target.into(), probability);
    }

    /// Probability of moving to `target`, if the row names it.
    pub fn probability(&self, target: &str) -> Option<f64> {
        self.entries.get(target).copied()
    }

    /// Entries in authored order.
    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, f64)> {
        self.entries.iter().map(|(target, p)| (target, *p))
    }

    /// Sum of all probabilities in the row.
    pub fn total(&self) -> f64 {
        self.entries.values().sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pick a target for the uniform draw `draw` in `[0, 1)`.
    ///
    /// Walks the entries in order, selecting the first whose probability
    /// exceeds what remains of the draw and subtracting otherwise. Returns
    /// `None` when the draw falls into mass the row does not cover; that
    /// outcome means "stay" and is distinct from an explicit self-loop.
    pub fn select(&self, draw: f64) -> Option<&NodeId> {
        let mut remaining = draw;
        for (target, probability) in &self.entries {
            if remaining < *probability {
                return Some(target);
            }
            remaining -= probability;
        }
        None
    }
}

impl<K: Into<NodeId>> FromIterator<(K, f64)> for TransitionRow {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut row = TransitionRow::new();
        for (target, probability) in iter {
            row.insert(target, probability);
        }
        row
    }
}

/// Mapping from source state to its transition row.
///
/// A state with no row has no outgoing transitions at all, which is
/// different from a row whose probabilities sum to less than one.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransitionMatrix {
    rows: IndexMap<NodeId, TransitionRow>,
}

impl TransitionMatrix {
    pub fn new() -> Self {
        Self {
            rows: IndexMap::new(),
        }
    }

    /// Set the row for `source`, replacing any previous row.
    pub fn insert_row(&mut self, source: impl Into<NodeId>, row: TransitionRow) {
        self.rows.insert(source.into(), row);
    }

    /// Row for `source`, if one was declared.
    pub fn row(&self, source: &str) -> Option<&TransitionRow> {
        self.rows.get(source)
    }

    /// Mutable row for `source`, created empty when missing.
    pub(crate) fn row_mut(&mut self, source: impl Into<NodeId>) -> &mut TransitionRow {
        self.rows.entry(source.into()).or_default()
    }

    /// Rows in authored order.
    pub fn rows(&self) -> impl Iterator<Item = (&NodeId, &TransitionRow)> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<K: Into<NodeId>> FromIterator<(K, TransitionRow)> for TransitionMatrix {
    fn from_iter<I: IntoIterator<Item = (K, TransitionRow)>>(iter: I) -> Self {
        let mut matrix = TransitionMatrix::new();
        for (source, row) in iter {
            matrix.insert_row(source, row);
        }
        matrix
    }
}
