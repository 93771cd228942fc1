//! Remediation hint text.
//!
//! Follow-up lines printed under a failed or warning check, and the
//! closing instructions of the summary.

use std::path::Path;

/// Name of the binary, used in "run this again" instructions.
pub const BIN_NAME: &str = "validate-setup";

/// Hint when the interpreter is outside the supported range.
pub fn required_python(min_minor: u32, max_minor: u32) -> String {
    if min_minor == max_minor {
        format!("Required: Python 3.{}", min_minor)
    } else if max_minor == min_minor + 1 {
        format!("Required: Python 3.{} or 3.{}", min_minor, max_minor)
    } else {
        format!("Required: Python 3.{} through 3.{}", min_minor, max_minor)
    }
}

/// Hint when the environment file is missing.
pub fn create_env_file(file_name: &str) -> String {
    format!("Create a {} file with your API keys", file_name)
}

/// Hint shown under missing optional keys.
pub fn optional_keys_note() -> &'static str {
    "(Only needed for unified demo)"
}

/// Hint when the container runtime binary is missing.
pub fn install_runtime(runtime: &str) -> String {
    match runtime {
        "docker" => "Install Docker Desktop from docker.com".to_string(),
        "podman" => "Install Podman from podman.io".to_string(),
        other => format!("Install {}", other),
    }
}

/// Hint when the container runtime is installed but not responding.
pub fn start_runtime(runtime: &str) -> String {
    match runtime {
        "docker" => "Start Docker Desktop".to_string(),
        "podman" => "Run: podman machine start".to_string(),
        other => format!("Start {}", other),
    }
}

/// Hint when the sidecar container isn't running.
pub fn start_sidecar(runtime: &str, sidecar: &str) -> String {
    format!("Run: {} start {}", runtime, sidecar)
}

/// Closing instruction after any check failed.
pub fn rerun_after_fix() -> &'static str {
    "Fix the issues above and run this script again:"
}

/// Title-case a command name for display (`docker` -> `Docker`).
pub fn display_name(name: &str) -> String {
    let name = Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(name);
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
