//! Runs every check in order and prints the summary block.

use super::container::ContainerRuntimeCheck;
use super::env_file::EnvFileCheck;
use super::interpreter::InterpreterCheck;
use super::packages::PackageCheck;
use super::result::{CheckResult, CheckSummary};
use super::{Check, CheckContext};
use crate::config::SetupConfig;
use crate::ui::theme::RULE_WIDTH;
use crate::ui::{hints, StatusKind, UserInterface};

/// An ordered list of checks.
pub struct CheckRunner {
    checks: Vec<Box<dyn Check>>,
}

impl CheckRunner {
    /// Create a runner for the given checks.
    pub fn new(checks: Vec<Box<dyn Check>>) -> Self {
        Self { checks }
    }

    /// The four demo checks, in report order: interpreter, packages,
    /// environment file, container runtime.
    pub fn standard(config: &SetupConfig) -> Self {
        Self::new(vec![
            Box::new(InterpreterCheck),
            Box::new(PackageCheck),
            Box::new(EnvFileCheck),
            Box::new(ContainerRuntimeCheck::new(
                &config.container.runtime,
                &config.container.sidecar,
            )),
        ])
    }

    /// Labels of the checks, in run order.
    pub fn labels(&self) -> Vec<String> {
        self.checks.iter().map(|c| c.label()).collect()
    }

    /// Run every check exactly once, in order, and collect the outcomes.
    pub fn run_all(&self, ctx: &CheckContext<'_>, ui: &mut dyn UserInterface) -> CheckSummary {
        ui.show_header(&format!("🔍 {}", ctx.config().title));
        ui.message("");

        let results = self
            .checks
            .iter()
            .map(|check| {
                let label = check.label();
                tracing::debug!("Running check: {}", label);
                let passed = check.run(ctx, ui);
                tracing::debug!("Check {} {}", label, if passed { "passed" } else { "failed" });
                CheckResult::new(label, passed)
            })
            .collect();

        CheckSummary::new(results)
    }
}

/// Print the summary block: one status line per check, the pass count,
/// then either next steps or a remediation hint.
pub fn render_summary(summary: &CheckSummary, config: &SetupConfig, ui: &mut dyn UserInterface) {
    ui.message("");
    ui.show_header("📊 Summary");

    for check in summary.checks() {
        ui.show_status(StatusKind::from_passed(check.passed), &check.label);
    }

    ui.message("");
    ui.message(&format!(
        "{}/{} checks passed",
        summary.passed(),
        summary.total()
    ));
    ui.message("");

    if summary.all_passed() {
        ui.message("🎉 All checks passed! You're ready to run the demos!");
        if !config.next_steps.is_empty() {
            ui.message("");
            ui.message("Next steps:");
            for (idx, step) in config.next_steps.iter().enumerate() {
                ui.message(&format!("{}. {}", idx + 1, step));
            }
        }
    } else {
        ui.warning(&format!(
            "{} check(s) failed: {}",
            summary.failed(),
            summary.failed_labels().join(", ")
        ));
        ui.message("");
        ui.message(hints::rerun_after_fix());
        ui.message(hints::BIN_NAME);
    }

    ui.message(&"=".repeat(RULE_WIDTH));
}
