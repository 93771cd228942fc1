//! Configuration validation rules.
//!
//! - The interpreter range must not be inverted
//! - The container runtime command must not be blank
//! - Key names and the sidecar name must not be blank (a blank name
//!   matches any text)
//! - Package names must be dotted Python module paths, since each one is
//!   spliced into `python -c "import <name>"`

use regex::Regex;
use std::sync::OnceLock;

use crate::config::schema::SetupConfig;
use crate::error::{Result, ValidateError};

fn is_module_path(name: &str) -> bool {
    static MODULE_RE: OnceLock<Option<Regex>> = OnceLock::new();
    MODULE_RE
        .get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(name))
}

/// Validation problem with the rule that found it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: &'static str,
    /// Human-readable error message
    pub message: String,
}

/// Validate a configuration and return every problem found.
pub fn validate_config(config: &SetupConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.interpreter.min_minor > config.interpreter.max_minor {
        errors.push(ValidationError {
            rule: "interpreter-range",
            message: format!(
                "interpreter.min_minor ({}) is greater than interpreter.max_minor ({})",
                config.interpreter.min_minor, config.interpreter.max_minor
            ),
        });
    }

    if let Some(command) = &config.interpreter.command {
        if command.trim().is_empty() {
            errors.push(ValidationError {
                rule: "blank-command",
                message: "interpreter.command must not be blank".to_string(),
            });
        }
    }

    if config.container.runtime.trim().is_empty() {
        errors.push(ValidationError {
            rule: "blank-command",
            message: "container.runtime must not be blank".to_string(),
        });
    }

    if config.container.sidecar.trim().is_empty() {
        errors.push(ValidationError {
            rule: "blank-sidecar",
            message: "container.sidecar must not be blank".to_string(),
        });
    }

    let mut keys = config
        .env_file
        .required_keys
        .iter()
        .chain(&config.env_file.optional_keys);
    if keys.any(|k| k.trim().is_empty()) {
        errors.push(ValidationError {
            rule: "blank-key",
            message: "env_file keys must not be blank".to_string(),
        });
    }

    for name in &config.packages {
        if !is_module_path(name) {
            errors.push(ValidationError {
                rule: "package-name",
                message: format!("packages entry '{}' is not a Python module path", name),
            });
        }
    }

    errors
}

/// Validate a configuration, failing on the first batch of problems.
pub fn validate(config: &SetupConfig) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Err(ValidateError::ConfigValidationError { message })
}
