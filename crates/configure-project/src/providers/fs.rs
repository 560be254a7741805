// License: MIT OR Apache-2.0
//! This module provides a wrapper around the `std::fs` and `walkdir` calls the
//! mirror and CMake tasks need, mapping every failure onto [`FileError`]. The
//! `Fs` struct is mocked with `mockall` in unit tests.

#![allow(clippy::unused_self)]

use std::path::Path;

use tracing::trace;
use walkdir::WalkDir;

use super::error::FileError;

/// Provides limited access to `std::fs` methods
#[derive(Debug, Default)]
pub struct Fs {}

#[cfg_attr(test, mockall::automock)]
#[cfg_attr(
    test,
    allow(
        dead_code,
        reason = "This implementation is mocked in test configuration."
    )
)]
impl Fs {
    pub fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    pub fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    pub fn create_dir_all(&self, path: &Path) -> Result<(), FileError> {
        std::fs::create_dir_all(path).map_err(|e| FileError::CreateDirError(path.to_path_buf(), e))
    }

    pub fn remove_dir_all(&self, path: &Path) -> Result<(), FileError> {
        std::fs::remove_dir_all(path).map_err(|e| FileError::RemoveDirError(path.to_path_buf(), e))
    }

    pub fn rename(&self, src: &Path, dest: &Path) -> Result<(), FileError> {
        std::fs::rename(src, dest)
            .map_err(|e| FileError::RenameError(src.to_path_buf(), dest.to_path_buf(), e))
    }

    /// Recursively copies the tree rooted at `src` to `dest`, following
    /// symbolic links. `dest` is created if missing.
    ///
    /// # Returns
    /// * The number of files copied
    ///
    /// # Errors
    /// * `FileError::WalkError` - If an entry of `src` cannot be read
    /// * `FileError::CreateDirError` - If a directory cannot be created
    /// * `FileError::CopyError` - If a file cannot be copied
    pub fn copy_dir_all(&self, src: &Path, dest: &Path) -> Result<u64, FileError> {
        let mut copied_files = 0;
        for entry in WalkDir::new(src).follow_links(true) {
            let entry = entry.map_err(|e| FileError::WalkError(src.to_path_buf(), e))?;
            let Ok(relative_path) = entry.path().strip_prefix(src) else {
                continue;
            };
            let target = dest.join(relative_path);
            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&target)
                    .map_err(|e| FileError::CreateDirError(target.clone(), e))?;
            } else {
                trace!("Copying {} to {}", entry.path().display(), target.display());
                std::fs::copy(entry.path(), &target)
                    .map_err(|e| FileError::CopyError(entry.path().to_path_buf(), target, e))?;
                copied_files += 1;
            }
        }
        Ok(copied_files)
    }
}
