//! Validation of user-authored chain definitions.
//!
//! This module is the only path from untrusted authoring input to a
//! simulatable [`ChainDefinition`](crate::core::ChainDefinition). Input is
//! checked against an explicit schema and either yields a definition or a
//! [`ValidationError`] naming the field at fault.
//!
//! # Example
//!
//! ```rust
//! use markov_lab::validation::{ValidationError, Validator};
//!
//! let err = Validator::default()
//!     .validate_json(r#"[{"id": "A"}, {"id": "B"}]"#, r#"{"A": {"B": 1.0}}"#, "Z")
//!     .unwrap_err();
//!
//! assert_eq!(err, ValidationError::UnknownInitialState { id: "Z".to_string() });
//! ```

pub mod draft;
pub mod error;
pub mod policy;
pub mod validator;

pub use draft::{parse_prerequisites, ExperimentDraft};
pub use error::{MatrixIssue, ValidationError};
pub use policy::ValidationPolicy;
pub use validator::{parse_matrix, parse_nodes, Validator};
