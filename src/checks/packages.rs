//! Python package availability check.
//!
//! Each configured module is imported in its own interpreter process
//! (`<python> -c "import <module>"`), so one broken package cannot mask
//! another.

use super::{Check, CheckContext};
use crate::ui::UserInterface;

/// Import result for one module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageStatus {
    /// Dotted module name as configured (e.g. `google.genai`).
    pub name: String,
    /// Whether the import succeeded.
    pub installed: bool,
}

/// Import results for every configured module, in configured order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageReport {
    pub packages: Vec<PackageStatus>,
}

impl PackageReport {
    /// Names of modules that could not be imported.
    pub fn missing(&self) -> Vec<&str> {
        self.packages
            .iter()
            .filter(|p| !p.installed)
            .map(|p| p.name.as_str())
            .collect()
    }

    /// True when every module imported.
    pub fn all_installed(&self) -> bool {
        self.packages.iter().all(|p| p.installed)
    }
}

/// Try to import a single module with the context's interpreter.
///
/// Any failure (non-zero exit, interpreter missing) counts as not installed.
pub fn probe_import(ctx: &CheckContext<'_>, module: &str) -> bool {
    let statement = format!("import {}", module);
    match ctx
        .runner()
        .run(ctx.interpreter(), &["-c", &statement], Some(ctx.project_root()))
    {
        Ok(output) => {
            if !output.success {
                tracing::debug!("import {} failed: {}", module, output.stderr.trim());
            }
            output.success
        }
        Err(e) => {
            tracing::debug!("Could not start {} for import {}: {}", ctx.interpreter(), module, e);
            false
        }
    }
}

/// Import every configured module, calling `before_each` ahead of each probe.
pub fn evaluate<F>(ctx: &CheckContext<'_>, mut before_each: F) -> PackageReport
where
    F: FnMut(&str),
{
    let packages = ctx
        .config()
        .packages
        .iter()
        .map(|name| {
            before_each(name);
            PackageStatus {
                name: name.clone(),
                installed: probe_import(ctx, name),
            }
        })
        .collect();

    PackageReport { packages }
}

/// Checks that the required Python packages can be imported.
#[derive(Debug, Default)]
pub struct PackageCheck;

impl Check for PackageCheck {
    fn label(&self) -> String {
        "Required Packages".to_string()
    }

    fn run(&self, ctx: &CheckContext<'_>, ui: &mut dyn UserInterface) -> bool {
        let mut spinner = ui.start_spinner("Checking packages...");
        let report = evaluate(ctx, |name| spinner.set_message(&format!("Importing {}...", name)));
        spinner.finish();

        for package in &report.packages {
            if package.installed {
                ui.success(&format!("{} installed", package.name));
            } else {
                ui.error(&format!("{} not installed", package.name));
            }
        }

        report.all_installed()
    }
}
