//! Markov Lab: a discrete-time Markov chain simulation core
//!
//! Markov Lab is the engine behind an educational chain explorer. A chain
//! definition (built in, or authored by a user and validated) is handed to
//! a simulation engine, which is then driven by `step`, `run` and `reset`
//! commands while a renderer reads snapshots of its state.
//!
//! # Core Concepts
//!
//! - **Chain definitions**: immutable nodes, transition matrix and initial
//!   state, shared between engines via `Arc`
//! - **Validation**: the only way from untrusted JSON to a definition
//! - **Engine**: stochastic single steps with an injected, seedable random
//!   source; a draw that matches no transition leaves the chain in place
//! - **Statistics**: visit counts derived from history on every read
//!
//! # Example
//!
//! ```rust
//! use markov_lab::engine::SimulationEngine;
//! use markov_lab::validation::Validator;
//! use std::sync::Arc;
//!
//! let chain = Validator::default()
//!     .validate_json(
//!         r#"[{"id": "sunny", "label": "Sunny"}, {"id": "rainy", "label": "Rainy"}]"#,
//!         r#"{"sunny": {"sunny": 0.9, "rainy": 0.1}, "rainy": {"sunny": 0.5, "rainy": 0.5}}"#,
//!         "sunny",
//!     )
//!     .unwrap();
//!
//! let mut engine = SimulationEngine::seeded(Arc::new(chain), 7);
//! engine.run(100);
//!
//! let stats = engine.statistics();
//! assert_eq!(stats.total(), engine.history().len());
//!
//! engine.reset();
//! assert_eq!(engine.history().len(), 1);
//! ```

pub mod builder;
pub mod catalog;
pub mod core;
pub mod engine;
pub mod validation;

// Re-export commonly used types
pub use builder::{BuildError, ChainBuilder};
pub use catalog::{Catalog, Experiment, ExperimentId};
pub use self::core::{ChainDefinition, Node, NodeId, TransitionMatrix, TransitionRow, VisitStatistics};
pub use engine::{SimulationConfig, SimulationEngine, Snapshot, StepError, StepOutcome};
pub use validation::{ExperimentDraft, ValidationError, ValidationPolicy, Validator};
