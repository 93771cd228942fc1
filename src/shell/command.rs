//! External process probing.
//!
//! Every check that needs an outside program (the Python interpreter, the
//! container runtime) goes through a [`CommandRunner`], so tests can swap
//! in [`MockRunner`](super::MockRunner) instead of spawning real processes.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Captured result of running an external program to completion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether the program exited with status 0.
    pub success: bool,
}

impl ProbeOutput {
    /// A zero-exit result with the given stdout.
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
            success: true,
        }
    }

    /// A non-zero exit result with the given stderr.
    pub fn failure(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self {
            exit_code: Some(exit_code),
            stdout: String::new(),
            stderr: stderr.into(),
            success: false,
        }
    }

    /// Stdout followed by stderr, for scanning output that may land on either.
    pub fn combined(&self) -> String {
        let mut out = self.stdout.clone();
        if !self.stderr.is_empty() {
            if !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
            out.push_str(&self.stderr);
        }
        out
    }
}

/// Runs an external program and captures its output.
///
/// An `Err` means the program could not be started at all (typically
/// `io::ErrorKind::NotFound`). A program that starts and exits non-zero is
/// `Ok` with `success == false`.
pub trait CommandRunner {
    /// Run `program` with `args`, optionally in `cwd`, and wait for it.
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> io::Result<ProbeOutput>;
}

/// Runs programs with `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> io::Result<ProbeOutput> {
        let start = Instant::now();

        let mut cmd = Command::new(program);
        cmd.args(args);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        let output = cmd.output()?;
        let duration = start.elapsed();

        tracing::debug!(
            "{} {:?} exited with {:?} in {}",
            program,
            args,
            output.status.code(),
            format_probe_duration(duration)
        );

        Ok(ProbeOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
        })
    }
}

fn format_probe_duration(duration: Duration) -> String {
    format!("{}ms", duration.as_millis())
}

/// Render a program and its arguments as a single display string.
pub fn command_line(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}
