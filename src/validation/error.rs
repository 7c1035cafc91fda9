//! Validation errors for user-authored chain definitions.

use thiserror::Error;

/// Why a submitted chain definition was rejected.
///
/// Every variant is recoverable: the author corrects the named field and
/// resubmits. Messages are meant to be shown to the author as-is.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("Malformed node list: {reason}")]
    MalformedNodeList { reason: String },

    #[error("Malformed transition matrix: {reason}")]
    MalformedMatrix { reason: String },

    #[error("Initial state '{id}' does not match any node id")]
    UnknownInitialState { id: String },

    #[error("Transition matrix violates validation policy: {}", summarize(.issues))]
    PolicyViolation { issues: Vec<MatrixIssue> },
}

/// A single problem found by the strict matrix audit.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MatrixIssue {
    #[error("row '{row}' targets undeclared node '{target}'")]
    UndeclaredTarget { row: String, target: String },

    #[error("row '{row}' sums to {total}, more than 1")]
    RowOverflow { row: String, total: f64 },

    #[error("probability {probability} for '{row}' -> '{target}' is outside (0, 1]")]
    ProbabilityOutOfRange {
        row: String,
        target: String,
        probability: f64,
    },
}

fn summarize(issues: &[MatrixIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
