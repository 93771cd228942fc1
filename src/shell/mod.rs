//! External process execution and platform detection.

pub mod command;
pub mod mock;
pub mod platform;

pub use command::{command_line, CommandRunner, ProbeOutput, SystemRunner};
pub use mock::MockRunner;
pub use platform::{is_ci, venv_python_relative_path};
