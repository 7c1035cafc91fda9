//! Core chain types.
//!
//! This module holds the pure data model of a Markov chain:
//! - Nodes and their identifiers
//! - Transition rows and the transition matrix, including stochastic selection
//! - Immutable chain definitions
//! - Visit history and the statistics derived from it
//!
//! Nothing here performs I/O or draws random numbers; the engine feeds
//! draws into [`TransitionRow::select`].

mod definition;
mod history;
mod matrix;
mod node;

pub use definition::{ChainDefinition, Edge};
pub use history::{EmptyHistory, VisitHistory, VisitStatistics};
pub use matrix::{TransitionMatrix, TransitionRow};
pub use node::{Node, NodeId};
