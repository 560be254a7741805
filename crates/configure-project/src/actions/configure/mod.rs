// License: MIT OR Apache-2.0
//! This module contains the `ConfigureAction` struct and its associated
//! methods for preparing a REAPER WAAPI Transfer build tree. It resolves the
//! Wwise SDK root, mirrors the AkAutobahn client sources out of the SDK into
//! `ext/`, and hands the SDK and REAPER locations to CMake. It consists of two
//! tasks - `MirrorTask` that refreshes the vendored sources and `CMakeTask`
//! that generates the native build files.

mod cmake_task;
mod error;
mod mirror_task;
mod resolve;

use std::path::{Path, PathBuf, absolute};

use cmake_task::{CMakeTask, CMakeTaskParams};
use error::ConfigureActionError;
use mirror_task::MirrorTask;
use mockall_double::double;
use tracing::{debug, info};

use crate::{actions::VariableMap, utils::normalize_path};
#[double]
use crate::providers::{env::Env, exec::CommandExec, fs::Fs};

/// Location of the AkAutobahn sources inside the Wwise SDK
pub const AKAUTOBAHN_SDK_PATH: [&str; 5] = [
    "samples",
    "WwiseAuthoringAPI",
    "cpp",
    "SampleClient",
    "AkAutobahn",
];
/// Location of the vendored AkAutobahn sources inside the project
pub const AKAUTOBAHN_PROJECT_PATH: [&str; 3] = ["ext", "AkAutobahn", "AkAutobahn"];

pub const AKSDK_DIR_VAR: &str = "AKSDK_DIR";
pub const REAPER32_PATH_VAR: &str = "REAPER32_PATH";
pub const REAPER64_PATH_VAR: &str = "REAPER64_PATH";

pub struct ConfigureActionParams<'a> {
    pub project_root: &'a Path,
    pub wwise_sdk_root: Option<&'a Path>,
    pub cmake: &'a str,
    pub cmake_generator: &'a str,
    pub cmake_generator_platform: &'a str,
    pub build_dir: &'a Path,
    pub reaper32_dir: Option<&'a Path>,
    pub reaper64_dir: Option<&'a Path>,
}

/// Action that refreshes the vendored SDK sources and generates the CMake
/// build. The mirror is a pre-requisite for running CMake.
pub struct ConfigureAction<'a> {
    project_root: PathBuf,
    wwise_sdk_root: Option<&'a Path>,
    cmake: &'a str,
    cmake_generator: &'a str,
    cmake_generator_platform: &'a str,
    build_dir: PathBuf,
    reaper32_dir: Option<&'a Path>,
    reaper64_dir: Option<&'a Path>,

    // Injected deps
    env: &'a Env,
    command_exec: &'a CommandExec,
    fs: &'a Fs,
}

impl<'a> ConfigureAction<'a> {
    /// Creates a new instance of `ConfigureAction`.
    ///
    /// `params.project_root` is made absolute against the current directory
    /// and `params.build_dir`, when relative, is taken relative to the project
    /// root.
    ///
    /// # Errors
    /// * `ConfigureActionError::NotAbsolute` - If `params.project_root` is
    ///   not a syntactically valid path, e.g. it is empty
    pub fn new(
        params: &ConfigureActionParams<'a>,
        env: &'a Env,
        command_exec: &'a CommandExec,
        fs: &'a Fs,
    ) -> Result<Self, ConfigureActionError> {
        let project_root = absolute(params.project_root)
            .map(|path| normalize_path(&path))
            .map_err(|e| ConfigureActionError::NotAbsolute(params.project_root.to_path_buf(), e))?;
        let build_dir = normalize_path(&project_root.join(params.build_dir));
        Ok(Self {
            project_root,
            wwise_sdk_root: params.wwise_sdk_root,
            cmake: params.cmake,
            cmake_generator: params.cmake_generator,
            cmake_generator_platform: params.cmake_generator_platform,
            build_dir,
            reaper32_dir: params.reaper32_dir,
            reaper64_dir: params.reaper64_dir,
            env,
            command_exec,
            fs,
        })
    }

    /// Entry point method to execute the configure flow.
    ///
    /// Steps run strictly in order and the first failure stops the flow, so
    /// CMake never runs against a stale or missing copy of the sources.
    ///
    /// # Errors
    /// * `ConfigureActionError::Configuration` - If the Wwise SDK root is not
    ///   set or is not a directory. Nothing on disk is touched in that case.
    /// * `ConfigureActionError::NonUnicodeVariable` - If the SDK root or a
    ///   REAPER path is not valid unicode. Nothing on disk is touched.
    /// * `ConfigureActionError::MirrorTask` - If the AkAutobahn sources cannot
    ///   be copied.
    /// * `ConfigureActionError::CMakeTask` - If the build directory cannot be
    ///   created or cmake fails.
    pub fn run(&self) -> Result<(), ConfigureActionError> {
        debug!(
            "Initialized configure for project at: {}",
            self.project_root.display()
        );
        let wwise_sdk_root = resolve::resolve_wwise_sdk_root(self.wwise_sdk_root, self.env, self.fs)?;
        info!("Using Wwise SDK Dir: {}", wwise_sdk_root.display());

        let variables = self.variable_map(&wwise_sdk_root)?;
        debug!("CMake variables: {variables}");

        let akautobahn_src = AKAUTOBAHN_SDK_PATH
            .iter()
            .fold(wwise_sdk_root.clone(), |path, component| path.join(component));
        let akautobahn_dest = AKAUTOBAHN_PROJECT_PATH
            .iter()
            .fold(self.project_root.clone(), |path, component| {
                path.join(component)
            });
        MirrorTask::new(&akautobahn_src, &akautobahn_dest, self.fs).run()?;

        CMakeTask::new(
            &CMakeTaskParams {
                cmake: self.cmake,
                project_root: &self.project_root,
                build_dir: &self.build_dir,
                generator: self.cmake_generator,
                platform: self.cmake_generator_platform,
                variables: &variables,
            },
            self.command_exec,
            self.fs,
        )
        .run()?;

        info!(
            "Generated {} build files in {}",
            self.cmake_generator,
            self.build_dir.display()
        );
        Ok(())
    }

    /// Variables handed to CMake. `AKSDK_DIR` is always present; the REAPER
    /// paths only when they were provided with a non-empty value, and they are
    /// passed through as given.
    ///
    /// # Errors
    /// * `ConfigureActionError::NonUnicodeVariable` - If a path is not valid
    ///   unicode and so cannot be put on the cmake command line unchanged
    fn variable_map(&self, wwise_sdk_root: &Path) -> Result<VariableMap, ConfigureActionError> {
        let mut variables = VariableMap::new();
        variables.insert(AKSDK_DIR_VAR, variable_value(AKSDK_DIR_VAR, wwise_sdk_root)?);
        for (name, dir) in [
            (REAPER32_PATH_VAR, self.reaper32_dir),
            (REAPER64_PATH_VAR, self.reaper64_dir),
        ] {
            if let Some(dir) = dir.filter(|dir| !dir.as_os_str().is_empty()) {
                variables.insert(name, variable_value(name, dir)?);
            }
        }
        Ok(variables)
    }
}

fn variable_value<'a>(name: &'static str, path: &'a Path) -> Result<&'a str, ConfigureActionError> {
    path.to_str()
        .ok_or_else(|| ConfigureActionError::NonUnicodeVariable {
            name,
            path: path.to_path_buf(),
        })
}
