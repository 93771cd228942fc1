//! Configuration schema definitions.
//!
//! These structs map to the optional `.validate-setup.yml` file. Every
//! field has a default, so an absent file, an empty file, or a file that
//! sets a single field are all valid. The defaults describe the LLM
//! observability demos.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for `.validate-setup.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SetupConfig {
    /// Title shown in the report banner.
    pub title: String,

    /// Python interpreter settings.
    pub interpreter: InterpreterConfig,

    /// Importable module names that must be present.
    pub packages: Vec<String>,

    /// Environment file settings.
    pub env_file: EnvFileConfig,

    /// Container runtime settings.
    pub container: ContainerConfig,

    /// Next-step instructions printed when every check passes.
    pub next_steps: Vec<String>,

    /// Exit non-zero when any check fails.
    #[serde(skip_serializing_if = "is_false")]
    pub strict: bool,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            title: "LLM Observability Demo - Setup Validation".to_string(),
            interpreter: InterpreterConfig::default(),
            packages: default_packages(),
            env_file: EnvFileConfig::default(),
            container: ContainerConfig::default(),
            next_steps: default_next_steps(),
            strict: false,
        }
    }
}

fn default_packages() -> Vec<String> {
    [
        "google.genai",
        "dotenv",
        "langtrace_python_sdk",
        "opentelemetry",
        "traceloop",
        "opik",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_next_steps() -> Vec<String> {
    vec![
        "Run: python chatbot_v1_no_observability.py".to_string(),
        "Follow the README for more demos".to_string(),
    ]
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Python interpreter settings.
///
/// Only Python 3 is supported; the range bounds are minor versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InterpreterConfig {
    /// Interpreter to probe. When unset, the active virtualenv's python
    /// is used if there is one, otherwise `python3`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Lowest supported minor version (inclusive).
    pub min_minor: u32,

    /// Highest supported minor version (inclusive).
    pub max_minor: u32,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            command: None,
            min_minor: 11,
            max_minor: 12,
        }
    }
}

/// Environment file settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvFileConfig {
    /// Path to the env file, relative to the project root.
    pub path: PathBuf,

    /// Keys whose absence fails the check.
    pub required_keys: Vec<String>,

    /// Keys whose absence only warns.
    pub optional_keys: Vec<String>,
}

impl Default for EnvFileConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(".env"),
            required_keys: vec![
                "GEMINI_API_KEY".to_string(),
                "LANGTRACE_API_KEY".to_string(),
            ],
            optional_keys: vec!["OPIK_API_KEY".to_string(), "OPIK_WORKSPACE".to_string()],
        }
    }
}

/// Container runtime settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContainerConfig {
    /// Runtime CLI used to list running containers (`<runtime> ps`).
    pub runtime: String,

    /// Substring identifying the tracing sidecar in the `ps` output.
    pub sidecar: String,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            runtime: "docker".to_string(),
            sidecar: "jaeger".to_string(),
        }
    }
}
