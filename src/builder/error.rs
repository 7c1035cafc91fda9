//! Build errors for chain builders.

use thiserror::Error;

/// Errors that can occur when building a chain definition in code.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("No nodes declared. Add at least one node with .node(id, label)")]
    NoNodes,

    #[error("Node '{id}' is declared more than once")]
    DuplicateNode { id: String },

    #[error("Initial state not specified. Call .initial(id) before .build()")]
    MissingInitialState,

    #[error("Initial state '{id}' is not a declared node")]
    UnknownInitialState { id: String },
}
