//! Post-commit cascade bookkeeping.
//!
//! The store enforces no foreign keys, so a primary write that affects
//! dependent records fans out to follow-up writes after it has committed.
//! Each follow-up runs as an independent step: a failed step never rolls
//! back the primary write and never blocks the remaining steps, but every
//! outcome is recorded so the caller can see exactly what happened.

use serde::Serialize;

/// Result of a single cascade step.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum StepOutcome {
    /// The step ran and touched `rows` rows (possibly zero).
    Applied { rows: u64 },
    /// The step's precondition did not hold, so nothing was attempted.
    Skipped,
    /// The step ran and failed; the error is carried verbatim.
    Failed { error: String },
}

/// A named step together with its outcome.
#[derive(Debug, Clone, Serialize)]
pub struct CascadeStep {
    pub name: &'static str,
    #[serde(flatten)]
    pub outcome: StepOutcome,
}

/// Ordered record of every cascade step run after a primary write.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct CascadeReport {
    steps: Vec<CascadeStep>,
}

impl CascadeReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn applied(&mut self, name: &'static str, rows: u64) {
        self.steps.push(CascadeStep {
            name,
            outcome: StepOutcome::Applied { rows },
        });
    }

    pub fn skipped(&mut self, name: &'static str) {
        self.steps.push(CascadeStep {
            name,
            outcome: StepOutcome::Skipped,
        });
    }

    pub fn failed(&mut self, name: &'static str, error: impl std::fmt::Display) {
        self.steps.push(CascadeStep {
            name,
            outcome: StepOutcome::Failed {
                error: error.to_string(),
            },
        });
    }

    pub fn steps(&self) -> &[CascadeStep] {
        &self.steps
    }

    pub fn has_failures(&self) -> bool {
        self.steps
            .iter()
            .any(|s| matches!(s.outcome, StepOutcome::Failed { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_records_steps_in_order() {
        let mut report = CascadeReport::new();
        report.applied("delete-invoices", 3);
        report.skipped("auto-create-invoice");
        report.failed("unassign-leads", "connection reset");

        let names: Vec<_> = report.steps().iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec!["delete-invoices", "auto-create-invoice", "unassign-leads"]
        );
        assert!(report.has_failures());
    }

    #[test]
    fn test_report_serializes_as_flat_array() {
        let mut report = CascadeReport::new();
        report.applied("propagate-invoice-fields", 2);
        report.skipped("auto-create-invoice");

        let json = serde_json::to_value(&report).expect("report serializes");
        assert_eq!(
            json,
            serde_json::json!([
                {"name": "propagate-invoice-fields", "outcome": "applied", "rows": 2},
                {"name": "auto-create-invoice", "outcome": "skipped"},
            ])
        );
    }

    #[test]
    fn test_empty_report_has_no_failures() {
        assert!(!CascadeReport::new().has_failures());
    }
}
