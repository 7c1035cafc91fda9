//! The list of experiments a learner can open.
//!
//! A catalog starts with the built-in experiments and grows as authors
//! submit new ones. Submissions pass through a
//! [`Validator`](crate::validation::Validator) before they are listed.

mod builtin;
mod experiment;

pub use builtin::builtin_experiments;
pub use experiment::{Experiment, ExperimentId, ExperimentOrigin};

use crate::engine::SimulationEngine;
use crate::validation::{ExperimentDraft, ValidationError, Validator};
use std::sync::Arc;
use tracing::debug;

/// Ordered collection of experiments.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    experiments: Vec<Experiment>,
}

impl Catalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog holding the built-in experiments.
    pub fn with_builtins() -> Self {
        Self {
            experiments: builtin_experiments(),
        }
    }

    /// Append an experiment.
    pub fn add(&mut self, experiment: Experiment) {
        debug!(id = %experiment.id, "Experiment added to catalog");
        self.experiments.push(experiment);
    }

    /// Validate an authoring form and append the resulting experiment.
    pub fn author(
        &mut self,
        draft: &ExperimentDraft,
        validator: &Validator,
    ) -> Result<&Experiment, ValidationError> {
        let experiment = validator.validate_draft(draft)?;
        self.add(experiment);
        let last = self.experiments.len() - 1;
        Ok(&self.experiments[last])
    }

    pub fn get(&self, id: &str) -> Option<&Experiment> {
        self.experiments.iter().find(|e| e.id.as_str() == id)
    }

    /// Open a fresh, entropy-seeded engine on the experiment `id`.
    pub fn open(&self, id: &str) -> Option<SimulationEngine> {
        self.get(id)
            .map(|e| SimulationEngine::new(Arc::clone(&e.definition)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Experiment> {
        self.experiments.iter()
    }

    pub fn len(&self) -> usize {
        self.experiments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.experiments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ExperimentDraft {
        ExperimentDraft {
            title: "Two states".to_string(),
            description: "Default form content".to_string(),
            guide_text: "Step it".to_string(),
            prerequisites: "Markov Chains".to_string(),
            nodes_json: r#"[{"id": "A", "label": "State A"}, {"id": "B", "label": "State B"}]"#
                .to_string(),
            matrix_json: r#"{"A": {"A": 0.5, "B": 0.5}, "B": {"A": 0.3, "B": 0.7}}"#.to_string(),
            initial_state: "A".to_string(),
        }
    }

    #[test]
    fn builtin_catalog_lists_four_experiments() {
        let catalog = Catalog::with_builtins();

        assert_eq!(catalog.len(), 4);
        assert!(catalog.get("weather-simple").is_some());
        assert!(catalog.get("nope").is_none());
    }

    #[test]
    fn authoring_appends_validated_experiment() {
        let mut catalog = Catalog::with_builtins();

        let id = catalog
            .author(&draft(), &Validator::default())
            .unwrap()
            .id
            .clone();

        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.iter().last().unwrap().id, id);
        assert_eq!(catalog.get(id.as_str()).unwrap().prerequisites, vec!["Markov Chains"]);
    }

    #[test]
    fn rejected_draft_leaves_catalog_unchanged() {
        let mut catalog = Catalog::new();
        let mut bad = draft();
        bad.initial_state = "Z".to_string();

        let err = catalog.author(&bad, &Validator::default()).unwrap_err();

        assert!(matches!(err, ValidationError::UnknownInitialState { .. }));
        assert!(catalog.is_empty());
    }

    #[test]
    fn open_shares_the_definition() {
        let catalog = Catalog::with_builtins();

        let engine = catalog.open("brand-loyalty").unwrap();

        assert_eq!(engine.current_state(), "alpha");
        assert!(Arc::ptr_eq(
            engine.definition(),
            &catalog.get("brand-loyalty").unwrap().definition
        ));
        assert!(catalog.open("missing").is_none());
    }
}
