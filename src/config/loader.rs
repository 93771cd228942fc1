//! Configuration file discovery and loading.
//!
//! Lookup order:
//! 1. An explicit path (`--config` or `VALIDATE_SETUP_CONFIG`), which must exist
//! 2. `.validate-setup.yml` in the project root, if present
//! 3. Built-in defaults

use crate::config::schema::SetupConfig;
use crate::config::validator::validate;
use crate::error::{Result, ValidateError};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the project root.
pub const CONFIG_FILE_NAME: &str = ".validate-setup.yml";

/// Find the project config file, if one exists.
pub fn find_config_file(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load configuration for a project.
///
/// An explicit path that doesn't exist is an error; a missing project
/// config file silently falls back to defaults.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<SetupConfig> {
    let path = match explicit {
        Some(p) if p.is_absolute() => Some(p.to_path_buf()),
        Some(p) => Some(project_root.join(p)),
        None => find_config_file(project_root),
    };

    let config = match path {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)?
        }
        None => {
            tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
            SetupConfig::default()
        }
    };

    validate(&config)?;
    Ok(config)
}

/// Load a single config file.
pub fn load_config_file(path: &Path) -> Result<SetupConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ValidateError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ValidateError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`SetupConfig`].
///
/// An empty document is treated as "all defaults".
pub fn parse_config(content: &str, source_path: &Path) -> Result<SetupConfig> {
    if content.trim().is_empty() {
        return Ok(SetupConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| ValidateError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn blank_sidecar_in_file_is_rejected() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "container:\n  sidecar: ''\n",
        )
        .unwrap();
        let err = load_config(temp.path(), None).unwrap_err();
        assert!(matches!(err, ValidateError::ConfigValidationError { .. }));
        assert!(err.to_string().contains("container.sidecar"));
    }

    #[test]
    fn missing_project_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config, SetupConfig::default());
    }

    #[test]
    fn project_config_is_discovered() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "container:\n  sidecar: otel-collector\n",
        )
        .unwrap();

        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.container.sidecar, "otel-collector");
        assert_eq!(config.container.runtime, "docker");
    }

    #[test]
    fn explicit_missing_config_is_error() {
        let temp = TempDir::new().unwrap();
        let err = load_config(temp.path(), Some(Path::new("nope.yml"))).unwrap_err();
        assert!(matches!(err, ValidateError::ConfigNotFound { .. }));
        assert!(err.to_string().contains("nope.yml"));
    }

    #[test]
    fn explicit_relative_path_resolves_against_project_root() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("custom.yml"), "strict: true\n").unwrap();

        let config = load_config(temp.path(), Some(Path::new("custom.yml"))).unwrap();
        assert!(config.strict);
    }

    #[test]
    fn malformed_config_is_parse_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "packages: [unclosed\n").unwrap();

        let err = load_config(temp.path(), None).unwrap_err();
        assert!(matches!(err, ValidateError::ConfigParseError { .. }));
    }

    #[test]
    fn invalid_values_fail_validation() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "interpreter:\n  min_minor: 13\n  max_minor: 11\n",
        )
        .unwrap();

        let err = load_config(temp.path(), None).unwrap_err();
        assert!(matches!(err, ValidateError::ConfigValidationError { .. }));
    }

    #[test]
    fn empty_file_gives_defaults() {
        let config = parse_config("   \n", Path::new("x.yml")).unwrap();
        assert_eq!(config, SetupConfig::default());
    }
}
