// License: MIT OR Apache-2.0
use std::{collections::BTreeMap, fmt};

/// Business logic lives in the following action modules
/// * `configure` - Mirror the SDK sources and generate the CMake build
pub mod configure;

pub const DEFAULT_CMAKE: &str = "cmake";
pub const DEFAULT_CMAKE_GENERATOR: &str = "Visual Studio 15 2017";
pub const DEFAULT_CMAKE_GENERATOR_PLATFORM: &str = "x64";
pub const DEFAULT_BUILD_DIR: &str = "build";

/// Environment variable consulted when no SDK root is passed explicitly
pub const WWISE_SDK_ENV_VAR: &str = "WWISESDK";

/// CMake cache variables for the action layer, rendered as `-D KEY=VALUE`.
///
/// Keys are unique. Iteration is sorted by key so the generated command line
/// is stable between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableMap(BTreeMap<String, String>);

impl VariableMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Expands the map into `-D`, `KEY=VALUE` argument pairs.
    pub fn to_define_args(&self) -> Vec<String> {
        self.iter()
            .flat_map(|(key, value)| ["-D".to_string(), format!("{key}={value}")])
            .collect()
    }
}

impl fmt::Display for VariableMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let definitions = self
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>();
        write!(f, "{}", definitions.join(", "))
    }
}
