//! Simulation engine that steps a chain with an injected random source.

use crate::core::{ChainDefinition, Edge, NodeId, VisitHistory, VisitStatistics};
use crate::engine::config::SimulationConfig;
use crate::engine::snapshot::Snapshot;
use crate::engine::step::{RunSummary, StepError, StepOutcome};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Single-chain simulation over a shared, immutable definition.
///
/// The engine exclusively owns its configuration (current state, previous
/// state, history) and its random source. Any number of engines may share
/// one `Arc<ChainDefinition>`.
///
/// # Example
///
/// ```rust
/// use markov_lab::chain;
/// use markov_lab::engine::SimulationEngine;
/// use std::sync::Arc;
///
/// let weather = Arc::new(chain! {
///     nodes: ["sunny" => "Sunny", "rainy" => "Rainy"],
///     matrix: {
///         "sunny" => { "sunny" => 0.9, "rainy" => 0.1 },
///         "rainy" => { "sunny" => 0.5, "rainy" => 0.5 },
///     },
///     initial: "sunny",
/// }.unwrap());
///
/// let mut engine = SimulationEngine::seeded(weather, 42);
/// engine.step().unwrap();
///
/// assert_eq!(engine.history().len(), 2);
/// assert_eq!(engine.history().latest(), engine.current_state());
/// ```
pub struct SimulationEngine<R = ChaCha8Rng> {
    definition: Arc<ChainDefinition>,
    current: NodeId,
    previous: Option<NodeId>,
    history: VisitHistory,
    rng: R,
}

impl SimulationEngine<ChaCha8Rng> {
    /// Create an engine seeded from system entropy.
    pub fn new(definition: Arc<ChainDefinition>) -> Self {
        Self::with_config(definition, &SimulationConfig::new())
    }

    /// Create an engine whose draws are reproducible from `seed`.
    pub fn seeded(definition: Arc<ChainDefinition>, seed: u64) -> Self {
        Self::with_config(definition, &SimulationConfig::new().with_seed(seed))
    }

    pub fn with_config(definition: Arc<ChainDefinition>, config: &SimulationConfig) -> Self {
        Self::with_rng(definition, config.rng())
    }
}

impl<R: Rng> SimulationEngine<R> {
    /// Create an engine in the definition's initial configuration.
    pub fn with_rng(definition: Arc<ChainDefinition>, rng: R) -> Self {
        let initial = definition.initial_state().clone();
        debug!(initial = %initial, nodes = definition.nodes().len(), "Simulation engine created");
        Self {
            definition,
            history: VisitHistory::new(initial.clone()),
            current: initial,
            previous: None,
            rng,
        }
    }

    pub fn definition(&self) -> &Arc<ChainDefinition> {
        &self.definition
    }

    pub fn current_state(&self) -> &NodeId {
        &self.current
    }

    /// State before the last transition; `None` since construction or reset
    /// until the first transition.
    pub fn previous_state(&self) -> Option<&NodeId> {
        self.previous.as_ref()
    }

    pub fn history(&self) -> &VisitHistory {
        &self.history
    }

    /// Transitions taken since construction or the last reset.
    pub fn total_steps(&self) -> usize {
        self.history.transitions()
    }

    /// Whether the current state has a row to draw from.
    pub fn can_step(&self) -> bool {
        self.definition.row(self.current.as_str()).is_some()
    }

    /// Visit counts for every declared node, recomputed from history.
    pub fn statistics(&self) -> VisitStatistics {
        self.history.statistics(self.definition.nodes())
    }

    /// The matrix edge from the previous to the current state.
    pub fn traversed_edge(&self) -> Option<Edge> {
        let previous = self.previous.as_ref()?;
        self.definition
            .edge(previous.as_str(), self.current.as_str())
    }

    /// Owned view of the engine for rendering.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            current: self.current.clone(),
            previous: self.previous.clone(),
            history: self.history.states().to_vec(),
            counts: self.statistics(),
            traversed_edge: self.traversed_edge(),
            total_steps: self.total_steps(),
        }
    }

    /// Execute one step of the chain.
    ///
    /// Draws `r` uniformly from `[0, 1)` and lets the current state's row
    /// select a target. If the draw lands in mass the row does not cover,
    /// the chain stays put and history is not extended. A state without a
    /// row reports [`StepError::NoOutgoingTransitions`] and nothing changes.
    pub fn step(&mut self) -> Result<StepOutcome, StepError> {
        let Some(row) = self.definition.row(self.current.as_str()) else {
            warn!(state = %self.current, "No outgoing transitions");
            return Err(StepError::NoOutgoingTransitions {
                state: self.current.to_string(),
            });
        };

        let draw: f64 = self.rng.gen();
        let Some(target) = row.select(draw).cloned() else {
            trace!(state = %self.current, draw, "Draw matched no transition, staying");
            return Ok(StepOutcome::Stayed {
                state: self.current.clone(),
            });
        };

        trace!(from = %self.current, to = %target, draw, "Transitioned");
        let from = std::mem::replace(&mut self.current, target.clone());
        self.previous = Some(from.clone());
        self.history.record(target.clone());

        Ok(StepOutcome::Transitioned { from, to: target })
    }

    /// Run `count` independent steps, stopping early only if the chain
    /// reaches a state without outgoing transitions.
    pub fn run(&mut self, count: usize) -> RunSummary {
        self.run_observed(count, |_, _| {})
    }

    /// Like [`run`](Self::run), calling `observer` with the engine and the
    /// outcome after every step so intermediate configurations can be shown.
    pub fn run_observed<F>(&mut self, count: usize, mut observer: F) -> RunSummary
    where
        F: FnMut(&Self, &StepOutcome),
    {
        let mut summary = RunSummary {
            requested: count,
            ..RunSummary::default()
        };

        for _ in 0..count {
            match self.step() {
                Ok(outcome) => {
                    summary.tally(&outcome);
                    observer(self, &outcome);
                }
                Err(err) => {
                    summary.halted = Some(err);
                    break;
                }
            }
        }

        debug!(
            requested = summary.requested,
            transitioned = summary.transitioned,
            stayed = summary.stayed,
            halted = summary.halted.is_some(),
            "Run finished"
        );
        summary
    }

    /// Return to the initial configuration: current = initial state,
    /// no previous state, history = `[initial]`.
    pub fn reset(&mut self) {
        let initial = self.definition.initial_state().clone();
        self.history.restart(initial.clone());
        self.current = initial;
        self.previous = None;
        debug!(initial = %self.current, "Simulation reset");
    }
}
