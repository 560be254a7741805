// License: MIT OR Apache-2.0
//! This module defines the top-level CLI layer and the argument structure
//! used to parse and validate the configure options.
use std::{ffi::OsString, path::PathBuf};

use anyhow::{Ok, Result};
use clap::{
    Parser,
    builder::{OsStringValueParser, TypedValueParser},
};
use clap_verbosity_flag::Verbosity;
use mockall_double::double;

use crate::actions::{
    DEFAULT_BUILD_DIR,
    DEFAULT_CMAKE,
    DEFAULT_CMAKE_GENERATOR,
    DEFAULT_CMAKE_GENERATOR_PLATFORM,
    configure::{ConfigureAction, ConfigureActionParams},
};
#[double]
use crate::providers::{env::Env, exec::CommandExec, fs::Fs};

const ABOUT_STRING: &str = "Copies the AkAutobahn sources out of the Wwise SDK and generates the \
                            CMake build for REAPER WAAPI Transfer.";

/// Options that are also accepted with a single leading dash, e.g.
/// `-wwise_sdk_root C:\Wwise\SDK` or `-build_dir=out`.
const SINGLE_DASH_LONG_OPTIONS: [&str; 8] = [
    "wwise_sdk_root",
    "cmake_generator",
    "cmake_generator_platform",
    "build_dir",
    "reaper32_dir",
    "reaper64_dir",
    "project_root",
    "cmake",
];

/// Top level command line interface for configure-project
#[derive(Debug, Parser)]
#[clap(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = ABOUT_STRING,
)]
pub struct Cli {
    /// Path to the Wwise SDK (default: environment variable WWISESDK)
    #[arg(
        long = "wwise_sdk_root",
        value_name = "PATH",
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    pub wwise_sdk_root: Option<PathBuf>,

    /// CMake generator
    #[arg(long = "cmake_generator", default_value = DEFAULT_CMAKE_GENERATOR)]
    pub cmake_generator: String,

    /// CMake generator platform
    #[arg(long = "cmake_generator_platform", default_value = DEFAULT_CMAKE_GENERATOR_PLATFORM)]
    pub cmake_generator_platform: String,

    /// Path to generate the CMake solution into, relative to the project root
    #[arg(long = "build_dir", value_name = "PATH", default_value = DEFAULT_BUILD_DIR)]
    pub build_dir: PathBuf,

    /// Path to the 32-bit REAPER directory (for debugging and automatically
    /// copying the DLL)
    #[arg(
        long = "reaper32_dir",
        value_name = "PATH",
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    pub reaper32_dir: Option<PathBuf>,

    /// Path to the 64-bit REAPER directory (for debugging and automatically
    /// copying the DLL)
    #[arg(
        long = "reaper64_dir",
        value_name = "PATH",
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    pub reaper64_dir: Option<PathBuf>,

    /// Project root holding `CMakeLists.txt` and `ext/`
    #[arg(long = "project_root", value_name = "PATH", default_value = ".")]
    pub project_root: PathBuf,

    /// CMake executable
    #[arg(long = "cmake", value_name = "PROGRAM", default_value = DEFAULT_CMAKE)]
    pub cmake: String,

    #[command(flatten)]
    #[clap(next_help_heading = "Verbosity")]
    pub verbose: Verbosity,
}

impl Cli {
    /// Parses the process arguments, accepting the single dash spelling of
    /// the long options.
    pub fn parse_with_single_dash_options() -> Self {
        Self::parse_from(normalize_single_dash_options(std::env::args_os()))
    }

    /// Entry point method to construct and run the configure action.
    pub fn run(self) -> Result<()> {
        let env = Env::default();
        let command_exec = CommandExec::default();
        let fs = Fs::default();

        ConfigureAction::new(
            &ConfigureActionParams {
                project_root: &self.project_root,
                wwise_sdk_root: self.wwise_sdk_root.as_deref(),
                cmake: &self.cmake,
                cmake_generator: &self.cmake_generator,
                cmake_generator_platform: &self.cmake_generator_platform,
                build_dir: &self.build_dir,
                reaper32_dir: self.reaper32_dir.as_deref(),
                reaper64_dir: self.reaper64_dir.as_deref(),
            },
            &env,
            &command_exec,
            &fs,
        )?
        .run()?;
        Ok(())
    }
}

/// Rewrites `-name` and `-name=value` into `--name` and `--name=value` for the
/// options in [`SINGLE_DASH_LONG_OPTIONS`]. Everything else, including
/// values, is passed through untouched.
pub fn normalize_single_dash_options<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut expects_value = false;
    args.into_iter()
        .map(Into::<OsString>::into)
        .map(|arg| {
            if std::mem::take(&mut expects_value) {
                return arg;
            }
            let has_inline_value = match arg.to_str().and_then(|s| s.strip_prefix('-')) {
                Some(option) if !option.starts_with('-') => {
                    let (name, has_inline_value) = option
                        .split_once('=')
                        .map_or((option, false), |(name, _)| (name, true));
                    SINGLE_DASH_LONG_OPTIONS
                        .contains(&name)
                        .then_some(has_inline_value)
                }
                _ => None,
            };
            match has_inline_value {
                Some(has_inline_value) => {
                    expects_value = !has_inline_value;
                    let mut normalized = OsString::from("-");
                    normalized.push(&arg);
                    normalized
                }
                None => arg,
            }
        })
        .collect()
}
