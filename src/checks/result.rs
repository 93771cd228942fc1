//! Check outcomes and the run summary.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// The outcome of one check: its label and whether it passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub label: String,
    pub passed: bool,
}

impl CheckResult {
    pub fn new(label: impl Into<String>, passed: bool) -> Self {
        Self {
            label: label.into(),
            passed,
        }
    }
}

/// Every check outcome from one run, in the order the checks ran.
#[derive(Debug, Clone, Serialize)]
pub struct CheckSummary {
    /// When the checks ran.
    checked_at: DateTime<Utc>,
    /// Number of checks that passed.
    passed: usize,
    /// Number of checks that ran.
    total: usize,
    /// Whether every check passed.
    all_passed: bool,
    /// Per-check outcomes.
    checks: Vec<CheckResult>,
}

impl CheckSummary {
    /// Build a summary from ordered results, stamped with the current time.
    pub fn new(checks: Vec<CheckResult>) -> Self {
        let passed = checks.iter().filter(|c| c.passed).count();
        let total = checks.len();
        Self {
            checked_at: Utc::now(),
            passed,
            total,
            all_passed: passed == total,
            checks,
        }
    }

    /// When the checks ran.
    pub fn checked_at(&self) -> DateTime<Utc> {
        self.checked_at
    }

    /// Per-check outcomes, in run order.
    pub fn checks(&self) -> &[CheckResult] {
        &self.checks
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn failed(&self) -> usize {
        self.total - self.passed
    }

    pub fn all_passed(&self) -> bool {
        self.all_passed
    }

    /// Labels of the checks that failed, in run order.
    pub fn failed_labels(&self) -> Vec<&str> {
        self.checks
            .iter()
            .filter(|c| !c.passed)
            .map(|c| c.label.as_str())
            .collect()
    }
}
