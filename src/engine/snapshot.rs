//! Read-only view of an engine for rendering.

use crate::core::{Edge, NodeId, VisitStatistics};
use serde::{Deserialize, Serialize};

/// Everything a renderer needs after a `step`, `run` or `reset`.
///
/// Snapshots are owned copies; they stay valid after the engine moves on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub current: NodeId,
    /// `None` until the first transition after construction or reset
    pub previous: Option<NodeId>,
    pub history: Vec<NodeId>,
    /// Visit counts per node, for the bar chart
    pub counts: VisitStatistics,
    /// Edge from `previous` to `current`, when the matrix has one
    pub traversed_edge: Option<Edge>,
    /// Transitions taken since the last reset
    pub total_steps: usize,
}
