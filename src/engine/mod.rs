//! Stepping a chain definition.
//!
//! This module provides the stateful half of the crate: an engine that
//! holds one simulation's configuration and advances it with draws from
//! an injected random source.
//!
//! # Key Concepts
//!
//! - **Step**: one uniform draw, at most one transition
//! - **Stay**: a draw that matches no entry leaves the chain in place and
//!   does not extend history
//! - **Run**: N independent steps, observable one by one
//! - **Snapshot**: owned, serializable view for renderers

mod config;
mod machine;
mod snapshot;
mod step;

pub use config::{SimulationConfig, LONG_RUN, QUICK_RUN};
pub use machine::SimulationEngine;
pub use snapshot::Snapshot;
pub use step::{RunSummary, StepError, StepOutcome};
