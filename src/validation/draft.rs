//! Raw input from the experiment authoring form.

use serde::{Deserialize, Serialize};

/// Untrusted form fields, exactly as the author typed them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentDraft {
    pub title: String,
    pub description: String,
    pub guide_text: String,
    /// Comma-separated prerequisite tags
    pub prerequisites: String,
    /// JSON array of `{"id": ..., "label": ...}` objects
    pub nodes_json: String,
    /// JSON object of source id -> (target id -> probability)
    pub matrix_json: String,
    pub initial_state: String,
}

impl ExperimentDraft {
    /// Prerequisite tags with whitespace trimmed and empty entries dropped.
    pub fn prerequisite_tags(&self) -> Vec<String> {
        parse_prerequisites(&self.prerequisites)
    }
}

/// Split a comma-separated tag list.
pub fn parse_prerequisites(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
