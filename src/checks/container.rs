//! Container runtime and tracing sidecar check.
//!
//! Runs `<runtime> ps` once. The runtime must be installed and responding
//! for the check to pass; the sidecar (Jaeger by default) only produces a
//! warning when it is not listed.

use super::{Check, CheckContext};
use crate::ui::{hints, UserInterface};

/// Outcome of probing the container runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeStatus {
    /// The runtime binary could not be started.
    NotInstalled(String),
    /// The runtime ran but exited non-zero (daemon down, no permission).
    NotRunning {
        exit_code: Option<i32>,
        stderr: String,
    },
    /// The runtime listed its containers.
    Running {
        /// Whether the sidecar name appears in the `ps` output.
        sidecar_running: bool,
    },
}

impl RuntimeStatus {
    pub fn passed(&self) -> bool {
        matches!(self, Self::Running { .. })
    }
}

/// Probe the configured container runtime and look for the configured sidecar.
pub fn evaluate(ctx: &CheckContext<'_>) -> RuntimeStatus {
    let container = &ctx.config().container;
    probe(ctx, &container.runtime, &container.sidecar)
}

/// Run `<runtime> ps` and look for `sidecar` in its output.
pub fn probe(ctx: &CheckContext<'_>, runtime: &str, sidecar: &str) -> RuntimeStatus {
    match ctx.runner().run(runtime, &["ps"], Some(ctx.project_root())) {
        Err(e) => {
            tracing::debug!("Could not start {}: {}", runtime, e);
            RuntimeStatus::NotInstalled(e.to_string())
        }
        Ok(output) if !output.success => RuntimeStatus::NotRunning {
            exit_code: output.exit_code,
            stderr: output.stderr.trim().to_string(),
        },
        Ok(output) => RuntimeStatus::Running {
            sidecar_running: output.stdout.contains(sidecar),
        },
    }
}

/// Checks that the container runtime is up and the sidecar is running.
#[derive(Debug)]
pub struct ContainerRuntimeCheck {
    runtime: String,
    sidecar: String,
}

impl ContainerRuntimeCheck {
    pub fn new(runtime: &str, sidecar: &str) -> Self {
        Self {
            runtime: runtime.to_string(),
            sidecar: sidecar.to_string(),
        }
    }
}

impl Default for ContainerRuntimeCheck {
    fn default() -> Self {
        Self::new("docker", "jaeger")
    }
}

impl Check for ContainerRuntimeCheck {
    fn label(&self) -> String {
        format!(
            "{} & {}",
            hints::display_name(&self.runtime),
            hints::display_name(&self.sidecar)
        )
    }

    fn run(&self, ctx: &CheckContext<'_>, ui: &mut dyn UserInterface) -> bool {
        let runtime = hints::display_name(&self.runtime);
        let sidecar = hints::display_name(&self.sidecar);

        let mut spinner = ui.start_spinner(&format!("Checking {}...", self.runtime));
        let status = probe(ctx, &self.runtime, &self.sidecar);
        spinner.finish();

        match &status {
            RuntimeStatus::NotInstalled(_) => {
                ui.error(&format!("{} not installed", runtime));
                ui.show_hint(&hints::install_runtime(&self.runtime));
            }
            RuntimeStatus::NotRunning { exit_code, stderr } => {
                ui.error(&format!("{} is not running", runtime));
                if ui.output_mode().shows_details() {
                    let code = exit_code.map_or_else(|| "signal".to_string(), |c| c.to_string());
                    ui.message(&format!("   `{} ps` exited with {}", self.runtime, code));
                    if let Some(line) = stderr.lines().next() {
                        ui.message(&format!("   {}", line));
                    }
                }
                ui.show_hint(&hints::start_runtime(&self.runtime));
            }
            RuntimeStatus::Running { sidecar_running } => {
                ui.success(&format!("{} is running", runtime));
                if *sidecar_running {
                    ui.success(&format!("{} container is running", sidecar));
                } else {
                    ui.warning(&format!("{} container not found", sidecar));
                    ui.show_hint(&hints::start_sidecar(&self.runtime, &self.sidecar));
                }
            }
        }

        status.passed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SetupConfig;
    use crate::shell::{MockRunner, ProbeOutput};
    use crate::ui::{MockUI, OutputMode};
    use std::io;
    use std::path::Path;

    const PS_HEADER: &str =
        "CONTAINER ID   IMAGE   COMMAND   CREATED   STATUS   PORTS   NAMES\n";

    fn run_check(runner: &MockRunner, ui: &mut MockUI) -> bool {
        let config = SetupConfig::default();
        let ctx = CheckContext::new(Path::new("."), &config, runner);
        ContainerRuntimeCheck::default().run(&ctx, ui)
    }

    #[test]
    fn label_names_runtime_and_sidecar() {
        assert_eq!(ContainerRuntimeCheck::default().label(), "Docker & Jaeger");
        assert_eq!(
            ContainerRuntimeCheck::new("podman", "otel").label(),
            "Podman & Otel"
        );
    }

    #[test]
    fn missing_runtime_fails_with_install_hint() {
        let mut ui = MockUI::new();
        assert!(!run_check(&MockRunner::new(), &mut ui));
        assert!(ui.has_error("Docker not installed"));
        assert!(ui.has_hint("Install Docker Desktop from docker.com"));
    }

    #[test]
    fn spawn_error_of_any_kind_counts_as_not_installed() {
        let runner =
            MockRunner::new().fail_to_spawn("docker ps", io::ErrorKind::PermissionDenied);
        let mut ui = MockUI::new();
        assert!(!run_check(&runner, &mut ui));
        assert!(ui.has_error("Docker not installed"));
    }

    #[test]
    fn non_zero_exit_fails_with_start_hint() {
        let runner = MockRunner::new().respond(
            "docker ps",
            ProbeOutput::failure(1, "Cannot connect to the Docker daemon"),
        );
        let mut ui = MockUI::new();
        assert!(!run_check(&runner, &mut ui));
        assert!(ui.has_error("Docker is not running"));
        assert!(ui.has_hint("Start Docker Desktop"));
        assert!(!ui.has_message("Cannot connect"));
    }

    #[test]
    fn verbose_mode_shows_runtime_stderr() {
        let runner = MockRunner::new().respond(
            "docker ps",
            ProbeOutput::failure(1, "Cannot connect to the Docker daemon"),
        );
        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        run_check(&runner, &mut ui);
        assert!(ui.has_message("exited with 1"));
        assert!(ui.has_message("Cannot connect to the Docker daemon"));
    }

    #[test]
    fn running_with_sidecar_passes_without_warning() {
        let output = format!("{}abc123   jaegertracing/all-in-one   jaeger\n", PS_HEADER);
        let runner = MockRunner::new().respond("docker ps", ProbeOutput::success(output));
        let mut ui = MockUI::new();
        assert!(run_check(&runner, &mut ui));
        assert!(ui.has_success("Docker is running"));
        assert!(ui.has_success("Jaeger container is running"));
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn running_without_sidecar_passes_with_warning() {
        let runner = MockRunner::new().respond("docker ps", ProbeOutput::success(PS_HEADER));
        let mut ui = MockUI::new();
        assert!(run_check(&runner, &mut ui));
        assert!(ui.has_success("Docker is running"));
        assert!(ui.has_warning("Jaeger container not found"));
        assert!(ui.has_hint("Run: docker start jaeger"));
    }

    #[test]
    fn sidecar_name_on_stderr_is_ignored() {
        let runner = MockRunner::new().respond(
            "docker ps",
            ProbeOutput {
                exit_code: Some(0),
                stdout: PS_HEADER.to_string(),
                stderr: "warning: jaeger image is outdated".to_string(),
                success: true,
            },
        );
        let config = SetupConfig::default();
        let ctx = CheckContext::new(Path::new("."), &config, &runner);
        assert_eq!(
            evaluate(&ctx),
            RuntimeStatus::Running {
                sidecar_running: false
            }
        );
    }

    #[test]
    fn configured_runtime_is_probed() {
        let mut config = SetupConfig::default();
        config.container.runtime = "podman".to_string();
        let runner = MockRunner::new().respond("podman ps", ProbeOutput::success("jaeger"));
        let ctx = CheckContext::new(Path::new("."), &config, &runner);
        assert!(evaluate(&ctx).passed());
        assert!(!runner.was_invoked("docker ps"));
    }

    #[test]
    fn spinner_names_runtime() {
        let mut ui = MockUI::new();
        run_check(&MockRunner::new(), &mut ui);
        assert_eq!(ui.spinners(), &["Checking docker...".to_string()]);
    }
}
