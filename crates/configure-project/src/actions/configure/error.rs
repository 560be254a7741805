// License: MIT OR Apache-2.0
//! This module defines error types used in the configure action module.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::providers::error::{CommandError, FileError};

/// Errors for the configure action layer
#[derive(Error, Debug)]
pub enum ConfigureActionError {
    #[error("Provided path is not absolute: {0}")]
    NotAbsolute(PathBuf, #[source] io::Error),
    #[error("Value of CMake variable {name} is not valid unicode: {}", path.display())]
    NonUnicodeVariable { name: &'static str, path: PathBuf },
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    MirrorTask(#[from] MirrorTaskError),
    #[error(transparent)]
    CMakeTask(#[from] CMakeTaskError),
}

/// Errors raised while resolving the Wwise SDK root
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error(
        "WWISESDK is not set. Pass -wwise_sdk_root or set the WWISESDK environment variable."
    )]
    WwiseSdkRootNotSet,
    #[error("WWISESDK is not valid unicode: {0:?}")]
    WwiseSdkRootNotUnicode(std::ffi::OsString),
    #[error("Wwise SDK path does not exist: {0}")]
    WwiseSdkRootNotADirectory(PathBuf),
}

/// Errors for the low level mirror task layer
#[derive(Error, Debug)]
pub enum MirrorTaskError {
    #[error("Mirror destination must have a parent directory and a name: {0}")]
    InvalidDestination(PathBuf),
    #[error("Mirror source directory not found: {0}")]
    SourceNotFound(PathBuf),
    #[error("Error mirroring {src} to {dest}")]
    FileIo {
        src: PathBuf,
        dest: PathBuf,
        #[source]
        source: FileError,
    },
}

/// Errors for the low level cmake task layer
#[derive(Error, Debug)]
pub enum CMakeTaskError {
    #[error("Error creating the build directory")]
    BuildDir(#[source] FileError),
    #[error("Path from {build_dir} to the project root {project_root} is not valid unicode")]
    NonUnicodeSourcePath {
        project_root: PathBuf,
        build_dir: PathBuf,
    },
    #[error("Error running cmake")]
    CMakeCommand(#[from] CommandError),
}
