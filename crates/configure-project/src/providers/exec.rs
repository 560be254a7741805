// License: MIT OR Apache-2.0
//! This module provides a standardized and testable interface for command
//! execution and error handling. It wraps `std::process::Command` to simplify
//! usage and ensure consistent error reporting. The use of `mockall` enables
//! mocking the `CommandExec` struct for unit testing.

// Suppression added for mockall as it generates mocks with working_dir: &Option
#![allow(clippy::ref_option_ref)]
#![allow(clippy::unused_self)]

use std::{
    path::Path,
    process::{Command, Output, Stdio},
};

use tracing::debug;

use super::error::CommandError;

/// Provides limited access to `std::process::Command` methods
#[derive(Debug, Default)]
pub struct CommandExec {}

#[cfg_attr(test, mockall::automock)]
#[cfg_attr(
    test,
    allow(
        dead_code,
        reason = "This implementation is mocked in test configuration."
    )
)]
impl CommandExec {
    /// Runs `command` with `args` and waits for it to exit.
    ///
    /// The child inherits stderr while stdout is captured and returned. When
    /// `working_dir` is given the child is started there; the current
    /// directory of this process is left alone.
    ///
    /// # Errors
    /// * `CommandError::IoError` - If the command could not be spawned
    /// * `CommandError::CommandFailed` - If the command exited unsuccessfully
    pub fn run<'a>(
        &self,
        command: &'a str,
        args: &'a [&'a str],
        working_dir: Option<&'a Path>,
    ) -> Result<Output, CommandError> {
        debug!("Running: {} {:?}", command, args);

        let mut cmd = Command::new(command);
        cmd.args(args);

        if let Some(dir) = working_dir {
            cmd.current_dir(dir);
        }

        let output = cmd
            .stdout(Stdio::piped())
            .spawn()
            .and_then(std::process::Child::wait_with_output)
            .map_err(|e| CommandError::from_io_error(command, args, e))?;

        if !output.status.success() {
            return Err(CommandError::from_output(command, args, &output));
        }

        debug!(
            "COMMAND: {}\n ARGS:{:?}\n OUTPUT: {}\n",
            command,
            args,
            String::from_utf8_lossy(&output.stdout)
        );

        Ok(output)
    }
}
