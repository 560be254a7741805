// License: MIT OR Apache-2.0
//! Locates the Wwise SDK root from the command line or the environment.

use std::{
    env::VarError,
    path::{Path, PathBuf},
};

use mockall_double::double;
use tracing::debug;

use super::error::ConfigurationError;
use crate::actions::WWISE_SDK_ENV_VAR;
#[double]
use crate::providers::{env::Env, fs::Fs};

/// Returns the first non-empty of `explicit_root` and the `WWISESDK`
/// environment variable, provided it names an existing directory.
///
/// # Errors
/// * `ConfigurationError::WwiseSdkRootNotSet` - If neither source yields a
///   value
/// * `ConfigurationError::WwiseSdkRootNotUnicode` - If `WWISESDK` holds
///   invalid unicode and no explicit root was given
/// * `ConfigurationError::WwiseSdkRootNotADirectory` - If the resolved path is
///   not an existing directory
pub fn resolve_wwise_sdk_root(
    explicit_root: Option<&Path>,
    env: &Env,
    fs: &Fs,
) -> Result<PathBuf, ConfigurationError> {
    let sdk_root = match explicit_root.filter(|root| !root.as_os_str().is_empty()) {
        Some(root) => {
            debug!("Wwise SDK root given on the command line");
            root.to_path_buf()
        }
        None => match env.var(WWISE_SDK_ENV_VAR) {
            Ok(root) if !root.is_empty() => {
                debug!("Wwise SDK root read from {WWISE_SDK_ENV_VAR}");
                PathBuf::from(root)
            }
            Ok(_) | Err(VarError::NotPresent) => {
                return Err(ConfigurationError::WwiseSdkRootNotSet);
            }
            Err(VarError::NotUnicode(value)) => {
                return Err(ConfigurationError::WwiseSdkRootNotUnicode(value));
            }
        },
    };

    if !fs.is_dir(&sdk_root) {
        return Err(ConfigurationError::WwiseSdkRootNotADirectory(sdk_root));
    }
    Ok(sdk_root)
}
