//! Check command implementation.
//!
//! The `validate-setup check` command runs every environment check and
//! prints the summary. It is also what runs when no subcommand is given.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::checks::{render_summary, CheckContext, CheckRunner, CheckSummary};
use crate::cli::args::CheckArgs;
use crate::config::{load_config, SetupConfig};
use crate::error::{Result, ValidateError};
use crate::shell::{CommandRunner, SystemRunner};
use crate::ui::{NullUI, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// Exit code for configuration problems.
const CONFIG_ERROR_EXIT: i32 = 2;

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, config_path: Option<PathBuf>, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path,
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    /// Load the configuration and apply command-line overrides.
    fn resolve_config(&self) -> Result<SetupConfig> {
        let mut config = load_config(&self.project_root, self.config_path.as_deref())?;
        if let Some(env_file) = &self.args.env_file {
            config.env_file.path = env_file.clone();
        }
        if self.args.strict {
            config.strict = true;
        }
        Ok(config)
    }

    /// Run the checks with the given runner.
    pub fn execute_with(
        &self,
        runner: &dyn CommandRunner,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let config = match self.resolve_config() {
            Ok(config) => config,
            Err(e) if e.is_config_error() => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(CONFIG_ERROR_EXIT));
            }
            Err(e) => return Err(e),
        };

        let ctx = CheckContext::new(&self.project_root, &config, runner);
        let checks = CheckRunner::standard(&config);

        let summary = if self.args.json {
            let summary = checks.run_all(&ctx, &mut NullUI);
            println!("{}", summary_json(&summary)?);
            summary
        } else {
            let summary = checks.run_all(&ctx, ui);
            render_summary(&summary, &config, ui);
            summary
        };

        tracing::debug!(
            "{}/{} checks passed (strict: {})",
            summary.passed(),
            summary.total(),
            config.strict
        );

        if config.strict && !summary.all_passed() {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.execute_with(&SystemRunner, ui)
    }
}

fn summary_json(summary: &CheckSummary) -> Result<String> {
    serde_json::to_string_pretty(summary)
        .context("Failed to serialize check summary")
        .map_err(ValidateError::from)
}
