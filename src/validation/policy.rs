//! Optional strictness for transition matrices.
//!
//! The permissive policy accepts any well-shaped matrix: rows may name
//! undeclared targets and may sum to more or less than one. The strict
//! checks below are opt-in and accumulate ALL issues in one pass using
//! stillwater's `Validation`, so an author sees every problem at once.

use crate::core::ChainDefinition;
use crate::validation::error::MatrixIssue;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Slack allowed when comparing a row total against one.
pub const ROW_SUM_TOLERANCE: f64 = 1e-9;

/// Which matrix checks run beyond the structural ones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    /// Reject entries whose target is not a declared node.
    pub reject_undeclared_targets: bool,
    /// Reject rows whose probabilities sum to more than one.
    pub reject_overfull_rows: bool,
    /// Reject probabilities outside `(0, 1]`.
    pub reject_out_of_range_probabilities: bool,
}

impl ValidationPolicy {
    /// Accept everything that is structurally sound.
    pub fn permissive() -> Self {
        Self::default()
    }

    /// Enable every matrix check.
    pub fn strict() -> Self {
        Self {
            reject_undeclared_targets: true,
            reject_overfull_rows: true,
            reject_out_of_range_probabilities: true,
        }
    }

    pub fn is_permissive(&self) -> bool {
        *self == Self::permissive()
    }

    /// Run the enabled checks against `definition`, accumulating all issues.
    ///
    /// Rows that sum to less than one are always accepted: the uncovered
    /// mass is how a chain expresses "stay put".
    pub fn audit(&self, definition: &ChainDefinition) -> Validation<(), NonEmptyVec<MatrixIssue>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<MatrixIssue>>> = Vec::new();

        for (source, row) in definition.matrix().rows() {
            for (target, probability) in row.iter() {
                if self.reject_undeclared_targets && !definition.declares(target.as_str()) {
                    checks.push(Validation::fail(MatrixIssue::UndeclaredTarget {
                        row: source.to_string(),
                        target: target.to_string(),
                    }));
                }

                if self.reject_out_of_range_probabilities
                    && !(probability > 0.0 && probability <= 1.0)
                {
                    checks.push(Validation::fail(MatrixIssue::ProbabilityOutOfRange {
                        row: source.to_string(),
                        target: target.to_string(),
                        probability,
                    }));
                }
            }

            if self.reject_overfull_rows {
                let total = row.total();
                let check = if total > 1.0 + ROW_SUM_TOLERANCE {
                    Validation::fail(MatrixIssue::RowOverflow {
                        row: source.to_string(),
                        total,
                    })
                } else {
                    Validation::success(())
                };
                checks.push(check);
            }
        }

        if checks.is_empty() {
            return Validation::success(());
        }

        // Accumulate ALL failures using all_vec
        Validation::all_vec(checks).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ChainBuilder;

    fn sloppy_chain() -> ChainDefinition {
        ChainBuilder::new()
            .node("A", "A")
            .node("B", "B")
            .transition("A", "B", 0.7)
            .transition("A", "ghost", 0.6)
            .transition("B", "A", -0.2)
            .initial("A")
            .build()
            .unwrap()
    }

    #[test]
    fn permissive_policy_accepts_sloppy_matrix() {
        let policy = ValidationPolicy::permissive();

        assert!(policy.is_permissive());
        assert!(policy.audit(&sloppy_chain()).is_success());
    }

    #[test]
    fn strict_policy_accumulates_all_issues() {
        let result = ValidationPolicy::strict().audit(&sloppy_chain());

        match result {
            Validation::Failure(issues) => {
                assert_eq!(issues.len(), 3);

                let has_undeclared = issues
                    .iter()
                    .any(|i| matches!(i, MatrixIssue::UndeclaredTarget { target, .. } if target == "ghost"));
                let has_overflow = issues
                    .iter()
                    .any(|i| matches!(i, MatrixIssue::RowOverflow { row, .. } if row == "A"));
                let has_out_of_range = issues
                    .iter()
                    .any(|i| matches!(i, MatrixIssue::ProbabilityOutOfRange { row, .. } if row == "B"));

                assert!(has_undeclared);
                assert!(has_overflow);
                assert!(has_out_of_range);
            }
            Validation::Success(_) => panic!("Expected issues, got success"),
        }
    }

    #[test]
    fn strict_policy_accepts_rows_below_one() {
        let chain = ChainBuilder::new()
            .node("X", "X")
            .node("A", "A")
            .transition("X", "A", 0.3)
            .initial("X")
            .build()
            .unwrap();

        assert!(ValidationPolicy::strict().audit(&chain).is_success());
    }

    #[test]
    fn row_sum_tolerates_float_rounding() {
        let chain = ChainBuilder::new()
            .node("A", "A")
            .node("B", "B")
            .node("C", "C")
            .transition("A", "A", 0.1)
            .transition("A", "B", 0.2)
            .transition("A", "C", 0.7)
            .initial("A")
            .build()
            .unwrap();

        assert!(ValidationPolicy::strict().audit(&chain).is_success());
    }

    #[test]
    fn individual_flags_run_alone() {
        let policy = ValidationPolicy {
            reject_undeclared_targets: true,
            ..ValidationPolicy::default()
        };

        match policy.audit(&sloppy_chain()) {
            Validation::Failure(issues) => assert_eq!(issues.len(), 1),
            Validation::Success(_) => panic!("Expected the undeclared target to be reported"),
        }
    }

    #[test]
    fn policy_deserializes_with_defaults() {
        let policy: ValidationPolicy =
            serde_json::from_str(r#"{"reject_overfull_rows": true}"#).unwrap();

        assert!(policy.reject_overfull_rows);
        assert!(!policy.reject_undeclared_targets);
        assert!(!policy.reject_out_of_range_probabilities);
    }
}
