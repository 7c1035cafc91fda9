//! Schema checks that turn untrusted input into a `ChainDefinition`.

use crate::catalog::Experiment;
use crate::core::{ChainDefinition, Node, NodeId, TransitionMatrix, TransitionRow};
use crate::validation::draft::ExperimentDraft;
use crate::validation::error::ValidationError;
use crate::validation::policy::ValidationPolicy;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;
use stillwater::validation::Validation;
use tracing::{debug, warn};

/// Validates user-authored chains under a [`ValidationPolicy`].
///
/// Validation is a pure function of its inputs. Checks run in a fixed
/// order: node list, matrix, initial state, then the policy audit. The
/// first structural failure is returned.
///
/// # Example
///
/// ```rust
/// use markov_lab::validation::{ValidationError, Validator};
/// use serde_json::json;
///
/// let validator = Validator::default();
///
/// let chain = validator
///     .validate_values(
///         &json!([{"id": "A", "label": "State A"}, {"id": "B"}]),
///         &json!({"A": {"B": 1.0}}),
///         "A",
///     )
///     .unwrap();
/// assert_eq!(chain.node("B").unwrap().label, "B");
///
/// let err = validator
///     .validate_values(&json!([]), &json!({}), "A")
///     .unwrap_err();
/// assert!(matches!(err, ValidationError::MalformedNodeList { .. }));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Validator {
    policy: ValidationPolicy,
}

impl Validator {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// Validate a full authoring form and wrap the result as a new experiment.
    pub fn validate_draft(&self, draft: &ExperimentDraft) -> Result<Experiment, ValidationError> {
        let definition =
            self.validate_json(&draft.nodes_json, &draft.matrix_json, &draft.initial_state)?;

        let experiment = Experiment::authored(
            draft.title.clone(),
            draft.description.clone(),
            draft.guide_text.clone(),
            draft.prerequisite_tags(),
            Arc::new(definition),
        );
        debug!(id = %experiment.id, title = %experiment.title, "Authored experiment accepted");
        Ok(experiment)
    }

    /// Validate the two JSON blobs from the authoring form.
    ///
    /// Syntax errors are reported against the blob they occur in.
    pub fn validate_json(
        &self,
        nodes_json: &str,
        matrix_json: &str,
        initial_state: &str,
    ) -> Result<ChainDefinition, ValidationError> {
        let nodes: Value =
            serde_json::from_str(nodes_json).map_err(|e| ValidationError::MalformedNodeList {
                reason: format!("invalid JSON: {e}"),
            })?;
        let matrix: Value =
            serde_json::from_str(matrix_json).map_err(|e| ValidationError::MalformedMatrix {
                reason: format!("invalid JSON: {e}"),
            })?;

        self.validate_values(&nodes, &matrix, initial_state)
    }

    /// Validate already-parsed JSON values.
    pub fn validate_values(
        &self,
        nodes: &Value,
        matrix: &Value,
        initial_state: &str,
    ) -> Result<ChainDefinition, ValidationError> {
        let nodes = parse_nodes(nodes)?;
        let matrix = parse_matrix(matrix)?;

        if !nodes.iter().any(|n| n.id == initial_state) {
            return Err(ValidationError::UnknownInitialState {
                id: initial_state.to_string(),
            });
        }

        let definition = ChainDefinition::from_parts(nodes, matrix, NodeId::from(initial_state));

        if let Validation::Failure(issues) = self.policy.audit(&definition) {
            let issues: Vec<_> = issues.iter().cloned().collect();
            warn!(count = issues.len(), "Matrix rejected by validation policy");
            return Err(ValidationError::PolicyViolation { issues });
        }

        debug!(
            nodes = definition.nodes().len(),
            rows = definition.matrix().len(),
            initial = %definition.initial_state(),
            "Chain definition validated"
        );
        Ok(definition)
    }
}

/// Check that `value` is a non-empty array of objects with unique string ids.
///
/// A missing or `null` label falls back to the id.
pub fn parse_nodes(value: &Value) -> Result<Vec<Node>, ValidationError> {
    let malformed = |reason: String| ValidationError::MalformedNodeList { reason };

    let entries = value
        .as_array()
        .ok_or_else(|| malformed(format!("expected an array of nodes, got {}", kind(value))))?;
    if entries.is_empty() {
        return Err(malformed("node list is empty".to_string()));
    }

    let mut seen = HashSet::new();
    let mut nodes = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let fields = entry
            .as_object()
            .ok_or_else(|| malformed(format!("entry {index} is {}, not an object", kind(entry))))?;

        let id = fields
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| malformed(format!("entry {index} has no string `id` field")))?;

        let label = match fields.get("label") {
            None | Some(Value::Null) => id,
            Some(Value::String(label)) => label.as_str(),
            Some(other) => {
                return Err(malformed(format!(
                    "entry {index} has a `label` that is {}, not a string",
                    kind(other)
                )))
            }
        };

        if !seen.insert(id) {
            return Err(malformed(format!("node id '{id}' is declared more than once")));
        }
        nodes.push(Node::new(id, label));
    }

    Ok(nodes)
}

/// Check that `value` is an object of objects of numbers.
///
/// Row and entry order follow the JSON text.
pub fn parse_matrix(value: &Value) -> Result<TransitionMatrix, ValidationError> {
    let malformed = |reason: String| ValidationError::MalformedMatrix { reason };

    let rows = value.as_object().ok_or_else(|| {
        malformed(format!(
            "expected an object mapping source ids to rows, got {}",
            kind(value)
        ))
    })?;

    let mut matrix = TransitionMatrix::new();
    for (source, row_value) in rows {
        let entries = row_value.as_object().ok_or_else(|| {
            malformed(format!(
                "row '{source}' is {}, not an object",
                kind(row_value)
            ))
        })?;

        let mut row = TransitionRow::new();
        for (target, probability) in entries {
            let probability = probability.as_f64().ok_or_else(|| {
                malformed(format!(
                    "probability for '{source}' -> '{target}' is {}, not a number",
                    kind(probability)
                ))
            })?;
            row.insert(target.as_str(), probability);
        }
        matrix.insert_row(source.as_str(), row);
    }

    Ok(matrix)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
