//! Experiments: a chain definition plus what the learner reads about it.

use crate::core::ChainDefinition;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Identifier of an experiment in a catalog.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExperimentId(String);

impl ExperimentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh identifier for an authored experiment: `custom-<uuid>`.
    pub fn custom() -> Self {
        Self(format!("custom-{}", Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExperimentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where an experiment came from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExperimentOrigin {
    /// Shipped with the catalog
    BuiltIn,
    /// Submitted through the authoring form
    Authored { at: DateTime<Utc> },
}

/// A simulatable chain with its learning material.
#[derive(Clone, Debug, Serialize)]
pub struct Experiment {
    pub id: ExperimentId,
    pub title: String,
    pub description: String,
    pub guide_text: String,
    pub prerequisites: Vec<String>,
    /// Shared with every engine opened on this experiment
    pub definition: Arc<ChainDefinition>,
    pub origin: ExperimentOrigin,
}

impl Experiment {
    pub(crate) fn builtin(
        id: &str,
        title: &str,
        description: &str,
        guide_text: &str,
        prerequisites: &[&str],
        definition: ChainDefinition,
    ) -> Self {
        Self {
            id: ExperimentId::new(id),
            title: title.to_string(),
            description: description.to_string(),
            guide_text: guide_text.to_string(),
            prerequisites: prerequisites.iter().map(|p| p.to_string()).collect(),
            definition: Arc::new(definition),
            origin: ExperimentOrigin::BuiltIn,
        }
    }

    /// A new user-authored experiment with a fresh id, stamped now.
    pub fn authored(
        title: String,
        description: String,
        guide_text: String,
        prerequisites: Vec<String>,
        definition: Arc<ChainDefinition>,
    ) -> Self {
        Self {
            id: ExperimentId::custom(),
            title,
            description,
            guide_text,
            prerequisites,
            definition,
            origin: ExperimentOrigin::Authored { at: Utc::now() },
        }
    }

    pub fn is_authored(&self) -> bool {
        matches!(self.origin, ExperimentOrigin::Authored { .. })
    }
}
