// License: MIT OR Apache-2.0
//! Module that generates the native build files by running `cmake` from the
//! build directory.

use std::path::Path;

use mockall_double::double;
use tracing::{debug, info};

use super::error::CMakeTaskError;
use crate::{actions::VariableMap, utils::relative_path};
#[double]
use crate::providers::{exec::CommandExec, fs::Fs};

pub struct CMakeTaskParams<'a> {
    pub cmake: &'a str,
    pub project_root: &'a Path,
    pub build_dir: &'a Path,
    pub generator: &'a str,
    pub platform: &'a str,
    pub variables: &'a VariableMap,
}

/// Runs `cmake <project root> -G <generator> -A <platform> [-D KEY=VALUE]*`
pub struct CMakeTask<'a> {
    cmake: &'a str,
    project_root: &'a Path,
    build_dir: &'a Path,
    generator: &'a str,
    platform: &'a str,
    variables: &'a VariableMap,
    command_exec: &'a CommandExec,
    fs: &'a Fs,
}

impl<'a> CMakeTask<'a> {
    /// Creates a new instance of `CMakeTask`.
    ///
    /// # Panics
    /// * If `project_root` or `build_dir` is not absolute
    pub fn new(params: &CMakeTaskParams<'a>, command_exec: &'a CommandExec, fs: &'a Fs) -> Self {
        for path in [params.project_root, params.build_dir] {
            assert!(
                path.is_absolute(),
                "CMake task paths must be absolute. Input path: {}",
                path.display()
            );
        }
        Self {
            cmake: params.cmake,
            project_root: params.project_root,
            build_dir: params.build_dir,
            generator: params.generator,
            platform: params.platform,
            variables: params.variables,
            command_exec,
            fs,
        }
    }

    /// Builds the cmake argument list. The source directory is given relative
    /// to the build directory, falling back to the absolute project root when
    /// the two live on different drives.
    fn args(&self) -> Result<Vec<String>, CMakeTaskError> {
        let source_dir = relative_path(self.build_dir, self.project_root)
            .unwrap_or_else(|| self.project_root.to_path_buf());
        let source_dir = source_dir
            .to_str()
            .ok_or_else(|| CMakeTaskError::NonUnicodeSourcePath {
                project_root: self.project_root.to_path_buf(),
                build_dir: self.build_dir.to_path_buf(),
            })?
            .to_string();

        let mut args = vec![
            source_dir,
            "-G".to_string(),
            self.generator.to_string(),
            "-A".to_string(),
            self.platform.to_string(),
        ];
        args.extend(self.variables.to_define_args());
        Ok(args)
    }

    /// Entry point method to run the cmake task
    ///
    /// # Errors
    /// * `CMakeTaskError::BuildDir` - If the build directory cannot be created
    /// * `CMakeTaskError::NonUnicodeSourcePath` - If the relative source path
    ///   is not valid unicode
    /// * `CMakeTaskError::CMakeCommand` - If cmake cannot be started or exits
    ///   unsuccessfully
    pub fn run(&self) -> Result<(), CMakeTaskError> {
        debug!("Ensuring build dir {} exists", self.build_dir.display());
        self.fs
            .create_dir_all(self.build_dir)
            .map_err(CMakeTaskError::BuildDir)?;

        let args = self.args()?;
        info!("Running {} {}", self.cmake, args.join(" "));
        let args = args
            .iter()
            .map(std::string::String::as_str)
            .collect::<Vec<&str>>();

        let output = self
            .command_exec
            .run(self.cmake, &args, Some(self.build_dir))?;
        for line in String::from_utf8_lossy(&output.stdout).lines() {
            info!("{line}");
        }
        debug!("cmake done");
        Ok(())
    }
}
