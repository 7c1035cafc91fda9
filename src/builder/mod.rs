//! Builder API for declaring chains in code.
//!
//! Built-in chains are written by hand rather than parsed from untrusted
//! text, so they go through a fluent builder (and the [`chain!`](crate::chain)
//! macro on top of it) instead of the [`validation`](crate::validation)
//! module.

pub mod chain;
pub mod error;
pub mod macros;

pub use chain::ChainBuilder;
pub use error::BuildError;
