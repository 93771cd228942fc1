//! Environment file check.
//!
//! Looks for key names in the `.env` file by plain substring search. The
//! file is not parsed: a key counts as present if its name appears anywhere
//! in the text, including inside comments.

use std::fs;
use std::io;

use super::{Check, CheckContext};
use crate::ui::{hints, UserInterface};

/// Which configured keys were not found in the file text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyReport {
    pub missing_required: Vec<String>,
    pub missing_optional: Vec<String>,
}

impl KeyReport {
    pub fn passed(&self) -> bool {
        self.missing_required.is_empty()
    }
}

/// Outcome of inspecting the environment file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvFileStatus {
    /// No file at the configured path.
    NotFound,
    /// The file exists but could not be read as UTF-8 text.
    Unreadable(String),
    /// The file was read and scanned for keys.
    Present(KeyReport),
}

impl EnvFileStatus {
    pub fn passed(&self) -> bool {
        matches!(self, Self::Present(report) if report.passed())
    }
}

/// Scan `content` for each key name.
pub fn scan_keys(content: &str, required: &[String], optional: &[String]) -> KeyReport {
    let missing = |keys: &[String]| -> Vec<String> {
        keys.iter()
            .filter(|key| !content.contains(key.as_str()))
            .cloned()
            .collect()
    };

    KeyReport {
        missing_required: missing(required),
        missing_optional: missing(optional),
    }
}

/// Read the environment file and scan it for the configured keys.
pub fn evaluate(ctx: &CheckContext<'_>) -> EnvFileStatus {
    let path = ctx.env_file_path();
    if !path.is_file() {
        tracing::debug!("No env file at {}", path.display());
        return EnvFileStatus::NotFound;
    }

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return EnvFileStatus::NotFound,
        Err(e) => return EnvFileStatus::Unreadable(e.to_string()),
    };

    let env = &ctx.config().env_file;
    EnvFileStatus::Present(scan_keys(&content, &env.required_keys, &env.optional_keys))
}

/// Checks that the environment file exists and names the required keys.
#[derive(Debug, Default)]
pub struct EnvFileCheck;

impl Check for EnvFileCheck {
    fn label(&self) -> String {
        "Environment Variables".to_string()
    }

    fn run(&self, ctx: &CheckContext<'_>, ui: &mut dyn UserInterface) -> bool {
        let path = ctx.env_file_path();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        let report = match evaluate(ctx) {
            EnvFileStatus::NotFound => {
                ui.error(&format!("{} file not found", file_name));
                ui.show_hint(&hints::create_env_file(&file_name));
                return false;
            }
            EnvFileStatus::Unreadable(reason) => {
                ui.error(&format!("Could not read {}: {}", file_name, reason));
                return false;
            }
            EnvFileStatus::Present(report) => report,
        };

        ui.success(&format!("{} file found", file_name));

        if !report.missing_required.is_empty() {
            ui.error(&format!(
                "Missing required keys: {}",
                report.missing_required.join(", ")
            ));
            return false;
        }
        ui.success("All required API keys present");

        if !report.missing_optional.is_empty() {
            ui.warning(&format!(
                "Optional keys missing: {}",
                report.missing_optional.join(", ")
            ));
            ui.show_hint(hints::optional_keys_note());
        }

        true
    }
}
