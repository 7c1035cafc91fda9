//! Results of stepping a simulation.

use crate::core::NodeId;
use serde::{Deserialize, Serialize};

/// Result of a single successful step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum StepOutcome {
    /// The draw selected an entry and the chain moved
    Transitioned { from: NodeId, to: NodeId },

    /// The draw fell into uncovered mass; nothing changed
    Stayed { state: NodeId },
}

impl StepOutcome {
    pub fn is_transition(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }

    /// State the chain occupies after the step.
    pub fn state(&self) -> &NodeId {
        match self {
            Self::Transitioned { to, .. } => to,
            Self::Stayed { state } => state,
        }
    }
}

/// Errors that can occur while stepping
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StepError {
    #[error("No outgoing transitions from state '{state}'")]
    NoOutgoingTransitions { state: String },
}

/// Tally of a batch run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunSummary {
    /// Steps the caller asked for
    pub requested: usize,
    /// Steps that moved the chain
    pub transitioned: usize,
    /// Steps whose draw left the chain in place
    pub stayed: usize,
    /// Set when the run stopped early
    pub halted: Option<StepError>,
}

impl RunSummary {
    /// Steps actually performed.
    pub fn executed(&self) -> usize {
        self.transitioned + self.stayed
    }

    pub fn completed(&self) -> bool {
        self.halted.is_none()
    }

    pub(crate) fn tally(&mut self, outcome: &StepOutcome) {
        if outcome.is_transition() {
            self.transitioned += 1;
        } else {
            self.stayed += 1;
        }
    }
}
