//! Scripted command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] by looking up pre-configured
//! responses instead of spawning processes, and records every invocation.
//!
//! # Example
//!
//! ```
//! use validate_setup::shell::{CommandRunner, MockRunner, ProbeOutput};
//!
//! let runner = MockRunner::new().respond("docker ps", ProbeOutput::success("jaeger\n"));
//!
//! let out = runner.run("docker", &["ps"], None).unwrap();
//! assert!(out.stdout.contains("jaeger"));
//! assert!(runner.run("podman", &["ps"], None).is_err());
//! assert_eq!(runner.invocations(), vec!["docker ps", "podman ps"]);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::Path;

use super::command::{command_line, CommandRunner, ProbeOutput};

/// Command runner that returns scripted responses.
///
/// Responses are keyed by the full command line (`program arg1 arg2`).
/// Any command without a response behaves like a missing binary and
/// returns an `io::ErrorKind::NotFound` error.
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: HashMap<String, ProbeOutput>,
    spawn_errors: HashMap<String, io::ErrorKind>,
    invocations: RefCell<Vec<String>>,
}

impl MockRunner {
    /// Create a runner with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the output for a command line.
    pub fn respond(mut self, command_line: &str, output: ProbeOutput) -> Self {
        self.responses.insert(command_line.to_string(), output);
        self
    }

    /// Script a spawn failure with a specific error kind.
    pub fn fail_to_spawn(mut self, command_line: &str, kind: io::ErrorKind) -> Self {
        self.spawn_errors.insert(command_line.to_string(), kind);
        self
    }

    /// Command lines that were run, in order.
    pub fn invocations(&self) -> Vec<String> {
        self.invocations.borrow().clone()
    }

    /// Check whether a command line was run.
    pub fn was_invoked(&self, command_line: &str) -> bool {
        self.invocations.borrow().iter().any(|c| c == command_line)
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[&str], _cwd: Option<&Path>) -> io::Result<ProbeOutput> {
        let line = command_line(program, args);
        self.invocations.borrow_mut().push(line.clone());

        if let Some(kind) = self.spawn_errors.get(&line) {
            return Err(io::Error::new(*kind, format!("cannot spawn {}", program)));
        }

        self.responses.get(&line).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{}: command not found", program),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_scripted_output() {
        let runner = MockRunner::new().respond("python3 --version", ProbeOutput::success("Python 3.11.9"));
        let out = runner.run("python3", &["--version"], None).unwrap();
        assert_eq!(out.stdout, "Python 3.11.9");
    }

    #[test]
    fn unscripted_command_is_not_found() {
        let runner = MockRunner::new();
        let err = runner.run("docker", &["ps"], None).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn scripted_spawn_error_uses_kind() {
        let runner = MockRunner::new().fail_to_spawn("docker ps", io::ErrorKind::PermissionDenied);
        let err = runner.run("docker", &["ps"], None).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn records_invocations_in_order() {
        let runner = MockRunner::new();
        let _ = runner.run("python3", &["--version"], None);
        let _ = runner.run("docker", &["ps"], None);
        assert_eq!(runner.invocations(), vec!["python3 --version", "docker ps"]);
        assert!(runner.was_invoked("docker ps"));
        assert!(!runner.was_invoked("podman ps"));
    }
}
