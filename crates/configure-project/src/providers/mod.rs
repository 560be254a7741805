// License: MIT OR Apache-2.0
//! Thin, mockable wrappers over the process, filesystem and environment
//! facilities the configure action depends on.

pub mod env;
pub mod exec;
pub mod fs;

pub mod error {
    use std::{io::Error, path::PathBuf, process::Output};

    /// Error type for `std::process::Command` execution failures
    #[derive(Debug, thiserror::Error)]
    pub enum CommandError {
        #[error("Command '{command}' with args {args:?} exited with {status} \n STDOUT: {stdout}")]
        CommandFailed {
            command: String,
            args: Vec<String>,
            status: String,
            stdout: String,
        },
        #[error("Unable to run command '{command}' with args {args:?}")]
        IoError {
            command: String,
            args: Vec<String>,
            #[source]
            source: Error,
        },
    }

    impl CommandError {
        pub fn from_output(command: &str, args: &[&str], output: &Output) -> Self {
            Self::CommandFailed {
                command: command.to_string(),
                args: args.iter().map(|&s| s.to_string()).collect(),
                status: output.status.to_string(),
                stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            }
        }

        pub fn from_io_error(command: &str, args: &[&str], error: Error) -> Self {
            Self::IoError {
                command: command.to_string(),
                args: args.iter().map(|&s| s.to_string()).collect(),
                source: error,
            }
        }
    }

    /// Error type for `std::fs` operations
    #[derive(Debug, thiserror::Error)]
    pub enum FileError {
        #[error("Failed to create directory: {0}")]
        CreateDirError(PathBuf, #[source] Error),
        #[error("Failed to remove directory: {0}")]
        RemoveDirError(PathBuf, #[source] Error),
        #[error("Failed to copy file from {0} to {1}")]
        CopyError(PathBuf, PathBuf, #[source] Error),
        #[error("Failed to rename {0} to {1}")]
        RenameError(PathBuf, PathBuf, #[source] Error),
        #[error("Failed to walk directory: {0}")]
        WalkError(PathBuf, #[source] walkdir::Error),
    }
}
