//! Python interpreter version check.
//!
//! Runs `<python> --version` and accepts Python 3 with a minor version in
//! the configured range (3.11 through 3.12 by default).

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use super::{Check, CheckContext};
use crate::ui::{hints, UserInterface};

/// A `major.minor.patch` interpreter version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl PythonVersion {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Extract the first version number from `--version` output.
    ///
    /// Accepts `Python 3.12.1`, pre-releases such as `Python 3.13.0rc1`,
    /// and two-part versions (`3.11`, patch defaults to 0).
    pub fn parse(output: &str) -> Option<Self> {
        static VERSION_RE: OnceLock<Option<Regex>> = OnceLock::new();
        let re = VERSION_RE
            .get_or_init(|| Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?").ok())
            .as_ref()?;

        let caps = re.captures(output)?;
        let major = caps.get(1)?.as_str().parse().ok()?;
        let minor = caps.get(2)?.as_str().parse().ok()?;
        let patch = caps
            .get(3)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0);
        Some(Self::new(major, minor, patch))
    }

    /// Whether this is Python 3 with a minor version in `min_minor..=max_minor`.
    pub fn is_supported(&self, min_minor: u32, max_minor: u32) -> bool {
        self.major == 3 && (min_minor..=max_minor).contains(&self.minor)
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Outcome of probing the interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterpreterStatus {
    /// Version is inside the supported range.
    Supported(PythonVersion),
    /// Version is outside the supported range.
    Unsupported(PythonVersion),
    /// The interpreter ran but printed no recognizable version.
    UnrecognizedOutput(String),
    /// The interpreter started but `--version` exited non-zero.
    ProbeFailed {
        exit_code: Option<i32>,
        stderr: String,
    },
    /// The interpreter could not be started.
    NotFound(String),
}

impl InterpreterStatus {
    pub fn passed(&self) -> bool {
        matches!(self, Self::Supported(_))
    }
}

/// Probe the interpreter and classify its version.
pub fn evaluate(ctx: &CheckContext<'_>) -> InterpreterStatus {
    let interpreter = ctx.interpreter();
    let output = match ctx
        .runner()
        .run(interpreter, &["--version"], Some(ctx.project_root()))
    {
        Ok(output) => output,
        Err(e) => {
            tracing::debug!("Could not start {}: {}", interpreter, e);
            return InterpreterStatus::NotFound(e.to_string());
        }
    };

    // Shims like pyenv exit non-zero and may list installed versions.
    if !output.success {
        tracing::debug!("{} --version exited with {:?}", interpreter, output.exit_code);
        return InterpreterStatus::ProbeFailed {
            exit_code: output.exit_code,
            stderr: output.stderr.trim().to_string(),
        };
    }

    // Python 2 and early 3.x print the version on stderr.
    let text = output.combined();
    match PythonVersion::parse(&text) {
        Some(version) => {
            let range = &ctx.config().interpreter;
            if version.is_supported(range.min_minor, range.max_minor) {
                InterpreterStatus::Supported(version)
            } else {
                InterpreterStatus::Unsupported(version)
            }
        }
        None => InterpreterStatus::UnrecognizedOutput(text.trim().to_string()),
    }
}

/// Checks that the Python interpreter is a supported version.
#[derive(Debug, Default)]
pub struct InterpreterCheck;

impl Check for InterpreterCheck {
    fn label(&self) -> String {
        "Python Version".to_string()
    }

    fn run(&self, ctx: &CheckContext<'_>, ui: &mut dyn UserInterface) -> bool {
        let status = evaluate(ctx);
        let range = &ctx.config().interpreter;
        let required = hints::required_python(range.min_minor, range.max_minor);

        match &status {
            InterpreterStatus::Supported(version) => {
                ui.success(&format!("Python version: {}", version));
            }
            InterpreterStatus::Unsupported(version) => {
                ui.error(&format!("Python version: {}", version));
                ui.show_hint(&required);
            }
            InterpreterStatus::UnrecognizedOutput(output) => {
                ui.error(&format!(
                    "Could not determine Python version from `{} --version`",
                    ctx.interpreter()
                ));
                if ui.output_mode().shows_details() && !output.is_empty() {
                    ui.message(&format!("   Output: {}", output));
                }
                ui.show_hint(&required);
            }
            InterpreterStatus::ProbeFailed { exit_code, stderr } => {
                let code = exit_code.map_or_else(|| "signal".to_string(), |c| c.to_string());
                ui.error(&format!(
                    "`{} --version` exited with {}",
                    ctx.interpreter(),
                    code
                ));
                if ui.output_mode().shows_details() {
                    if let Some(line) = stderr.lines().next() {
                        ui.message(&format!("   {}", line));
                    }
                }
                ui.show_hint(&required);
            }
            InterpreterStatus::NotFound(_) => {
                ui.error(&format!("Python interpreter not found: {}", ctx.interpreter()));
                ui.show_hint(&required);
            }
        }

        status.passed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SetupConfig;
    use crate::shell::{MockRunner, ProbeOutput};
    use crate::ui::MockUI;
    use std::path::Path;

    fn config() -> SetupConfig {
        let mut config = SetupConfig::default();
        config.interpreter.command = Some("python3".to_string());
        config
    }

    fn runner_reporting(version_line: &str) -> MockRunner {
        MockRunner::new().respond("python3 --version", ProbeOutput::success(version_line))
    }

    fn run_check(config: &SetupConfig, runner: &MockRunner) -> (bool, MockUI) {
        let ctx = CheckContext::new(Path::new("."), config, runner);
        let mut ui = MockUI::new();
        let passed = InterpreterCheck.run(&ctx, &mut ui);
        (passed, ui)
    }

    #[test]
    fn parse_standard_output() {
        assert_eq!(
            PythonVersion::parse("Python 3.12.1\n"),
            Some(PythonVersion::new(3, 12, 1))
        );
    }

    #[test]
    fn parse_prerelease_output() {
        assert_eq!(
            PythonVersion::parse("Python 3.13.0rc1"),
            Some(PythonVersion::new(3, 13, 0))
        );
    }

    #[test]
    fn parse_two_part_version() {
        assert_eq!(
            PythonVersion::parse("Python 3.11"),
            Some(PythonVersion::new(3, 11, 0))
        );
    }

    #[test]
    fn parse_garbage_is_none() {
        assert_eq!(PythonVersion::parse("command not found"), None);
    }

    #[test]
    fn supported_range_is_inclusive() {
        assert!(PythonVersion::new(3, 11, 0).is_supported(11, 12));
        assert!(PythonVersion::new(3, 11, 9).is_supported(11, 12));
        assert!(PythonVersion::new(3, 12, 4).is_supported(11, 12));
        assert!(!PythonVersion::new(3, 10, 14).is_supported(11, 12));
        assert!(!PythonVersion::new(3, 13, 0).is_supported(11, 12));
    }

    #[test]
    fn other_major_versions_are_unsupported() {
        assert!(!PythonVersion::new(2, 12, 0).is_supported(11, 12));
        assert!(!PythonVersion::new(4, 11, 0).is_supported(11, 12));
    }

    #[test]
    fn version_displays_as_dotted_triple() {
        assert_eq!(PythonVersion::new(3, 12, 1).to_string(), "3.12.1");
    }

    #[test]
    fn python_3_11_passes() {
        let (passed, ui) = run_check(&config(), &runner_reporting("Python 3.11.9"));
        assert!(passed);
        assert!(ui.has_success("Python version: 3.11.9"));
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn python_3_12_passes() {
        let (passed, _) = run_check(&config(), &runner_reporting("Python 3.12.0"));
        assert!(passed);
    }

    #[test]
    fn python_3_10_fails_with_required_range() {
        let (passed, ui) = run_check(&config(), &runner_reporting("Python 3.10.12"));
        assert!(!passed);
        assert!(ui.has_error("Python version: 3.10.12"));
        assert!(ui.has_hint("Required: Python 3.11 or 3.12"));
    }

    #[test]
    fn python_3_13_fails() {
        let (passed, ui) = run_check(&config(), &runner_reporting("Python 3.13.1"));
        assert!(!passed);
        assert!(ui.has_hint("Required: Python 3.11 or 3.12"));
    }

    #[test]
    fn version_on_stderr_is_read() {
        let runner = MockRunner::new().respond(
            "python3 --version",
            ProbeOutput {
                exit_code: Some(0),
                stdout: String::new(),
                stderr: "Python 3.12.2\n".to_string(),
                success: true,
            },
        );
        let (passed, _) = run_check(&config(), &runner);
        assert!(passed);
    }

    #[test]
    fn failing_version_command_fails_even_if_output_names_a_version() {
        let runner = MockRunner::new().respond(
            "python3 --version",
            ProbeOutput::failure(
                127,
                "pyenv: python3: command not found

The `python3' command exists in these Python versions:
  3.12.1
",
            ),
        );
        let config = config();
        let ctx = CheckContext::new(Path::new("."), &config, &runner);
        assert!(matches!(
            evaluate(&ctx),
            InterpreterStatus::ProbeFailed {
                exit_code: Some(127),
                ..
            }
        ));

        let (passed, ui) = run_check(&config, &runner);
        assert!(!passed);
        assert!(ui.successes().is_empty());
        assert!(ui.has_error("`python3 --version` exited with 127"));
        assert!(ui.has_hint("Required: Python 3.11 or 3.12"));
    }

    #[test]
    fn missing_interpreter_fails() {
        let (passed, ui) = run_check(&config(), &MockRunner::new());
        assert!(!passed);
        assert!(ui.has_error("Python interpreter not found: python3"));
        assert!(ui.has_hint("Required"));
    }

    #[test]
    fn unrecognized_output_fails() {
        let (passed, ui) = run_check(&config(), &runner_reporting("hello"));
        assert!(!passed);
        assert!(ui.has_error("Could not determine Python version"));
    }

    #[test]
    fn configured_range_is_honoured() {
        let mut config = config();
        config.interpreter.min_minor = 13;
        config.interpreter.max_minor = 13;
        let (passed, ui) = run_check(&config, &runner_reporting("Python 3.12.1"));
        assert!(!passed);
        assert!(ui.has_hint("Required: Python 3.13"));
    }

    #[test]
    fn evaluate_classifies_versions() {
        let config = config();
        let runner = runner_reporting("Python 3.10.0");
        let ctx = CheckContext::new(Path::new("."), &config, &runner);
        assert_eq!(
            evaluate(&ctx),
            InterpreterStatus::Unsupported(PythonVersion::new(3, 10, 0))
        );
    }
}
