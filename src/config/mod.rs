//! Configuration loading and validation.
//!
//! All check parameters (interpreter range, package list, env keys,
//! container runtime) have built-in defaults and can be overridden from
//! an optional `.validate-setup.yml`:
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use validate_setup::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".validate-setup.yml"), "container:\n  runtime: podman\n").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.container.runtime, "podman");
//! assert_eq!(config.container.sidecar, "jaeger");
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{find_config_file, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::{ContainerConfig, EnvFileConfig, InterpreterConfig, SetupConfig};
pub use validator::{validate, validate_config, ValidationError};
