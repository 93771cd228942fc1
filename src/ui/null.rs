//! UI that discards all output.

use super::{OutputMode, SpinnerHandle, UserInterface};

/// UI that drops every line, including errors.
///
/// Used when stdout carries machine-readable output and per-check lines
/// must not appear anywhere.
#[derive(Debug, Default)]
pub struct NullUI;

impl UserInterface for NullUI {
    fn output_mode(&self) -> OutputMode {
        OutputMode::Silent
    }

    fn message(&mut self, _msg: &str) {}

    fn success(&mut self, _msg: &str) {}

    fn warning(&mut self, _msg: &str) {}

    fn error(&mut self, _msg: &str) {}

    fn show_header(&mut self, _title: &str) {}

    fn show_status(&mut self, _kind: super::StatusKind, _msg: &str) {}

    fn show_hint(&mut self, _hint: &str) {}

    fn start_spinner(&mut self, _message: &str) -> Box<dyn SpinnerHandle> {
        Box::new(NullSpinner)
    }
}

struct NullSpinner;

impl SpinnerHandle for NullSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{Check, CheckContext, PackageCheck};
    use crate::config::SetupConfig;
    use crate::shell::MockRunner;
    use std::path::Path;

    #[test]
    fn null_ui_is_silent() {
        assert_eq!(NullUI.output_mode(), OutputMode::Silent);
    }

    #[test]
    fn failing_check_runs_without_output() {
        let mut config = SetupConfig::default();
        config.interpreter.command = Some("python3".to_string());
        let runner = MockRunner::new();
        let ctx = CheckContext::new(Path::new("."), &config, &runner);
        let mut ui = NullUI;

        assert!(!PackageCheck.run(&ctx, &mut ui));
    }
}
