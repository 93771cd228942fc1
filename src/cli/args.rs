//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::ui::OutputMode;

/// Check that a local environment is ready to run the LLM observability demos.
#[derive(Debug, Parser)]
#[command(name = "validate-setup")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .validate-setup.yml)
    #[arg(short, long, global = true, env = "VALIDATE_SETUP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Output mode selected by the global flags.
    pub fn output_mode(&self) -> OutputMode {
        if self.quiet {
            OutputMode::Quiet
        } else if self.verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Normal
        }
    }

    /// Whether the run emits JSON instead of human output.
    pub fn wants_json(&self) -> bool {
        matches!(&self.command, Some(Commands::Check(args)) if args.json)
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run all environment checks (default if no command specified)
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Print the summary as JSON instead of the human report
    #[arg(long)]
    pub json: bool,

    /// Exit with status 1 when any check fails
    #[arg(long)]
    pub strict: bool,

    /// Environment file to inspect (overrides env_file.path)
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["validate-setup"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.output_mode(), OutputMode::Normal);
        assert!(!cli.wants_json());
    }

    #[test]
    fn check_flags_parse() {
        let cli = Cli::try_parse_from([
            "validate-setup",
            "check",
            "--json",
            "--strict",
            "--env-file",
            "config/.env.local",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Check(ref args)) => {
                assert!(args.json);
                assert!(args.strict);
                assert_eq!(args.env_file, Some(PathBuf::from("config/.env.local")));
            }
            _ => panic!("Expected check command"),
        }
        assert!(cli.wants_json());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["validate-setup", "check", "-q", "-p", "/tmp/demo"]).unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.output_mode(), OutputMode::Quiet);
        assert_eq!(cli.project, Some(PathBuf::from("/tmp/demo")));
    }

    #[test]
    fn verbose_flag_selects_verbose_mode() {
        let cli = Cli::try_parse_from(["validate-setup", "--verbose"]).unwrap();
        assert_eq!(cli.output_mode(), OutputMode::Verbose);
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["validate-setup", "-v", "-q"]).is_err());
    }

    #[test]
    fn completions_requires_shell() {
        assert!(Cli::try_parse_from(["validate-setup", "completions"]).is_err());
        let cli = Cli::try_parse_from(["validate-setup", "completions", "bash"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Completions(CompletionsArgs { shell: Shell::Bash }))
        ));
    }
}
