//! validate-setup - Environment readiness checks for the LLM observability demos.
//!
//! Runs four independent checks (Python version, importable packages, the
//! `.env` file and the container runtime with its tracing sidecar) and
//! prints a summary. A failed check is reported, never raised.
//!
//! # Modules
//!
//! - [`checks`] - The environment checks and the summary runner
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional `.validate-setup.yml` loading and validation
//! - [`error`] - Error types and result aliases
//! - [`shell`] - External process probing
//! - [`ui`] - Terminal output, spinners, and status glyphs
//!
//! # Example
//!
//! ```
//! use validate_setup::checks::{Check, CheckContext, InterpreterCheck};
//! use validate_setup::config::SetupConfig;
//! use validate_setup::shell::{MockRunner, ProbeOutput};
//! use validate_setup::ui::MockUI;
//! use std::path::Path;
//!
//! let mut config = SetupConfig::default();
//! config.interpreter.command = Some("python3".to_string());
//! let runner = MockRunner::new().respond("python3 --version", ProbeOutput::success("Python 3.11.9\n"));
//! let ctx = CheckContext::new(Path::new("."), &config, &runner);
//!
//! let mut ui = MockUI::new();
//! assert!(InterpreterCheck.run(&ctx, &mut ui));
//! assert!(ui.has_success("Python version: 3.11.9"));
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod shell;
pub mod ui;

pub use error::{Result, ValidateError};
