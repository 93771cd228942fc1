//! Environment checks.
//!
//! Each check is a one-shot probe that reports a boolean outcome and writes
//! its explanation through the [`UserInterface`]. A failed check is never an
//! error: the runner collects every outcome and prints a summary.
//!
//! # Modules
//!
//! - [`interpreter`] - Python interpreter version range
//! - [`packages`] - Importable Python packages
//! - [`env_file`] - `.env` presence and key names
//! - [`container`] - Container runtime and tracing sidecar
//! - [`result`] - Check outcomes and the run summary
//! - [`runner`] - Runs all checks in order and prints the summary
//!
//! # Example
//!
//! ```
//! use validate_setup::checks::{CheckContext, CheckRunner};
//! use validate_setup::config::SetupConfig;
//! use validate_setup::shell::MockRunner;
//! use validate_setup::ui::MockUI;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let config = SetupConfig::default();
//! let runner = MockRunner::new(); // nothing is installed
//! let ctx = CheckContext::new(temp.path(), &config, &runner);
//! let mut ui = MockUI::new();
//!
//! let summary = CheckRunner::standard(&config).run_all(&ctx, &mut ui);
//! assert_eq!(summary.total(), 4);
//! assert_eq!(summary.passed(), 0);
//! ```

pub mod container;
pub mod env_file;
pub mod interpreter;
pub mod packages;
pub mod result;
pub mod runner;

pub use container::{ContainerRuntimeCheck, RuntimeStatus};
pub use env_file::{EnvFileCheck, EnvFileStatus, KeyReport};
pub use interpreter::{InterpreterCheck, InterpreterStatus, PythonVersion};
pub use packages::{PackageCheck, PackageReport, PackageStatus};
pub use result::{CheckResult, CheckSummary};
pub use runner::{render_summary, CheckRunner};

use std::env::VarError;
use std::path::{Path, PathBuf};

use crate::config::SetupConfig;
use crate::shell::{venv_python_relative_path, CommandRunner};
use crate::ui::UserInterface;

/// A single environment check.
pub trait Check {
    /// Label shown in the summary (e.g. "Python Version").
    fn label(&self) -> String;

    /// Run the check, report through `ui`, and return whether it passed.
    fn run(&self, ctx: &CheckContext<'_>, ui: &mut dyn UserInterface) -> bool;
}

/// Everything a check may read: the project directory, the configuration,
/// and the runner used for external probes.
pub struct CheckContext<'a> {
    project_root: &'a Path,
    config: &'a SetupConfig,
    runner: &'a dyn CommandRunner,
    interpreter: String,
}

impl<'a> CheckContext<'a> {
    /// Build a context, resolving the interpreter from the real environment.
    pub fn new(
        project_root: &'a Path,
        config: &'a SetupConfig,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self::with_env(project_root, config, runner, |key| std::env::var(key))
    }

    /// Build a context with a custom env var lookup function.
    ///
    /// This allows testing interpreter resolution without modifying actual
    /// environment variables.
    pub fn with_env<F>(
        project_root: &'a Path,
        config: &'a SetupConfig,
        runner: &'a dyn CommandRunner,
        env_fn: F,
    ) -> Self
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let interpreter = resolve_interpreter(config, env_fn);
        tracing::debug!("Using interpreter {}", interpreter);
        Self {
            project_root,
            config,
            runner,
            interpreter,
        }
    }

    /// The project directory checks run in.
    pub fn project_root(&self) -> &Path {
        self.project_root
    }

    /// The active configuration.
    pub fn config(&self) -> &SetupConfig {
        self.config
    }

    /// The runner for external probes.
    pub fn runner(&self) -> &dyn CommandRunner {
        self.runner
    }

    /// The Python interpreter command to probe.
    pub fn interpreter(&self) -> &str {
        &self.interpreter
    }

    /// Absolute location of the environment file.
    pub fn env_file_path(&self) -> PathBuf {
        self.project_root.join(&self.config.env_file.path)
    }
}

/// Pick the Python interpreter to probe.
///
/// 1. `interpreter.command` from configuration
/// 2. The active virtualenv's python (`$VIRTUAL_ENV/bin/python`), if it exists
/// 3. `python3` (`python` on Windows)
pub fn resolve_interpreter<F>(config: &SetupConfig, env_fn: F) -> String
where
    F: Fn(&str) -> Result<String, VarError>,
{
    if let Some(command) = &config.interpreter.command {
        return command.clone();
    }

    if let Ok(venv) = env_fn("VIRTUAL_ENV") {
        let candidate = PathBuf::from(venv).join(venv_python_relative_path());
        if candidate.is_file() {
            return candidate.to_string_lossy().to_string();
        }
    }

    if cfg!(windows) {
        "python".to_string()
    } else {
        "python3".to_string()
    }
}
