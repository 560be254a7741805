//! Utility methods for tests.
//! Note: The current layout (`tests/test_utils/mod.rs`) is intentional; using a
//! subdirectory prevents Cargo from treating this as an independent integration
//! test crate and instead lets other tests import it as a regular module.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use assert_fs::{TempDir, prelude::*};
use sha2::{Digest, Sha256};
use walkdir::WalkDir;

/// Relative location of the AkAutobahn sample inside a Wwise SDK
pub const AKAUTOBAHN_SDK_PATH: &str = "samples/WwiseAuthoringAPI/cpp/SampleClient/AkAutobahn";
/// Relative location of the vendored AkAutobahn sources inside the project
pub const AKAUTOBAHN_PROJECT_PATH: &str = "ext/AkAutobahn/AkAutobahn";

/// Creates `<tmp_dir>/sdk` holding a small AkAutobahn sample and returns the
/// SDK root.
///
/// # Panics
/// * If any of the sample files cannot be written.
pub fn create_fake_wwise_sdk(tmp_dir: &TempDir) -> PathBuf {
    let akautobahn = tmp_dir.child("sdk").child(AKAUTOBAHN_SDK_PATH);
    akautobahn
        .child("AkAutobahn/Client.h")
        .write_str("class Client;\n")
        .expect("Unable to write Client.h");
    akautobahn
        .child("AkAutobahn/Client.cpp")
        .write_str("#include \"Client.h\"\n")
        .expect("Unable to write Client.cpp");
    akautobahn
        .child("AkAutobahn/JSONHelpers.h")
        .write_str("#pragma once\n")
        .expect("Unable to write JSONHelpers.h");
    akautobahn
        .child("CMakeLists.txt")
        .write_str("add_library(AkAutobahn STATIC)\n")
        .expect("Unable to write CMakeLists.txt");
    akautobahn
        .child("include/AkAutobahn/README.txt")
        .write_str("AkAutobahn sample client\n")
        .expect("Unable to write README.txt");
    tmp_dir.child("sdk").path().to_path_buf()
}

/// Returns a map of every file below `root`, keyed by its relative path, to
/// the SHA-256 digest of its contents.
///
/// # Panics
/// * If `root` cannot be walked or a file cannot be read.
pub fn tree_digest(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    WalkDir::new(root)
        .into_iter()
        .map(|entry| entry.expect("Unable to walk directory"))
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let contents = fs::read(entry.path()).expect("Unable to read file");
            let relative_path = entry
                .path()
                .strip_prefix(root)
                .expect("walkdir entries are below the root")
                .to_path_buf();
            (relative_path, Sha256::digest(contents).to_vec())
        })
        .collect()
}

/// Writes an executable stand-in for cmake that records its working directory
/// and arguments, one per line, to `cmake-invocation.txt` next to itself and
/// exits with `exit_code`.
///
/// # Panics
/// * If the script cannot be written or made executable.
#[allow(
    dead_code,
    reason = "This method is used only by unix-only tests; appears unused on other platforms."
)]
#[cfg(unix)]
pub fn create_fake_cmake(tmp_dir: &TempDir, exit_code: i32) -> (PathBuf, PathBuf) {
    use std::os::unix::fs::PermissionsExt;

    let invocation_file = tmp_dir.child("cmake-invocation.txt");
    let script = tmp_dir.child("fake-cmake.sh");
    script
        .write_str(&format!(
            "#!/bin/sh\npwd -P > '{}'\nfor arg in \"$@\"; do printf '%s\\n' \"$arg\" >> '{}'; \
             done\necho '-- Configuring done'\nexit {exit_code}\n",
            invocation_file.path().display(),
            invocation_file.path().display(),
        ))
        .expect("Unable to write fake cmake");
    fs::set_permissions(script.path(), fs::Permissions::from_mode(0o755))
        .expect("Unable to make fake cmake executable");
    (
        script.path().to_path_buf(),
        invocation_file.path().to_path_buf(),
    )
}
