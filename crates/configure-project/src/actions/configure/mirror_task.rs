// License: MIT OR Apache-2.0
//! Module that replaces a destination directory with a copy of a source
//! directory. The copy is assembled in a staging directory next to the
//! destination and swapped in only once it is complete, so a failed copy
//! leaves the previous destination as it was.

use std::path::{Path, PathBuf};

use mockall_double::double;
use tracing::{debug, info, warn};

use super::error::MirrorTaskError;
#[double]
use crate::providers::fs::Fs;
use crate::providers::error::FileError;

/// Mirrors `src` onto `dest`
pub struct MirrorTask<'a> {
    src: &'a Path,
    dest: &'a Path,
    fs: &'a Fs,
}

impl<'a> MirrorTask<'a> {
    /// Creates a new instance of `MirrorTask`.
    ///
    /// # Panics
    /// * If `dest` is not absolute
    pub fn new(src: &'a Path, dest: &'a Path, fs: &'a Fs) -> Self {
        assert!(
            dest.is_absolute(),
            "Mirror destination path must be absolute. Input path: {}",
            dest.display()
        );
        Self { src, dest, fs }
    }

    /// Staging directory used while the copy is in progress,
    /// `<parent>/.<name>.staging`.
    fn staging_dir(&self) -> Result<PathBuf, MirrorTaskError> {
        match (self.dest.parent(), self.dest.file_name()) {
            (Some(parent), Some(name)) => {
                let mut staging_name = std::ffi::OsString::from(".");
                staging_name.push(name);
                staging_name.push(".staging");
                Ok(parent.join(staging_name))
            }
            _ => Err(MirrorTaskError::InvalidDestination(self.dest.to_path_buf())),
        }
    }

    fn file_io(&self, source: FileError) -> MirrorTaskError {
        MirrorTaskError::FileIo {
            src: self.src.to_path_buf(),
            dest: self.dest.to_path_buf(),
            source,
        }
    }

    /// Entry point method to run the mirror task
    ///
    /// # Returns
    /// * The number of files copied
    ///
    /// # Errors
    /// * `MirrorTaskError::SourceNotFound` - If `src` is not a directory
    /// * `MirrorTaskError::InvalidDestination` - If `dest` has no parent
    /// * `MirrorTaskError::FileIo` - If creating, copying, removing or renaming
    ///   fails
    pub fn run(&self) -> Result<u64, MirrorTaskError> {
        info!(
            "Copying {} to {}",
            self.src.display(),
            self.dest.display()
        );
        if !self.fs.is_dir(self.src) {
            return Err(MirrorTaskError::SourceNotFound(self.src.to_path_buf()));
        }

        let staging_dir = self.staging_dir()?;
        if let Some(parent) = staging_dir.parent() {
            self.fs
                .create_dir_all(parent)
                .map_err(|e| self.file_io(e))?;
        }

        if self.fs.exists(&staging_dir) {
            debug!("Removing leftover staging dir {}", staging_dir.display());
            self.fs
                .remove_dir_all(&staging_dir)
                .map_err(|e| self.file_io(e))?;
        }

        let copied_files = match self.fs.copy_dir_all(self.src, &staging_dir) {
            Ok(copied_files) => copied_files,
            Err(e) => {
                if self.fs.exists(&staging_dir) {
                    self.fs
                        .remove_dir_all(&staging_dir)
                        .unwrap_or_else(|cleanup_err| {
                            warn!(
                                "Unable to remove staging dir {}: {}",
                                staging_dir.display(),
                                cleanup_err
                            );
                        });
                }
                return Err(self.file_io(e));
            }
        };
        debug!("Staged {copied_files} files in {}", staging_dir.display());

        if self.fs.exists(self.dest) {
            debug!("Removing previous copy at {}", self.dest.display());
            self.fs
                .remove_dir_all(self.dest)
                .map_err(|e| self.file_io(e))?;
        }
        self.fs
            .rename(&staging_dir, self.dest)
            .map_err(|e| self.file_io(e))?;

        debug!("Mirrored {copied_files} files to {}", self.dest.display());
        Ok(copied_files)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        path::{Path, PathBuf},
    };

    use mockall::Sequence;
    use mockall_double::double;

    use super::MirrorTask;
    use crate::{
        actions::configure::error::MirrorTaskError,
        providers::error::FileError,
    };
    #[double]
    use crate::providers::fs::Fs;

    struct Paths {
        src: PathBuf,
        dest: PathBuf,
        parent: PathBuf,
        staging: PathBuf,
    }

    fn paths() -> Paths {
        let root = std::env::temp_dir().join("mirror-task-test");
        let parent = root.join("ext").join("AkAutobahn");
        Paths {
            src: root.join("sdk").join("AkAutobahn"),
            dest: parent.join("AkAutobahn"),
            staging: parent.join(".AkAutobahn.staging"),
            parent,
        }
    }

    fn expect_path(expected: &Path) -> impl Fn(&Path) -> bool + Send + 'static {
        let expected = expected.to_path_buf();
        move |p: &Path| p == expected
    }

    #[test]
    fn given_an_existing_destination_when_mirroring_then_it_is_replaced_after_the_copy() {
        let p = paths();
        let mut fs = Fs::default();
        let mut seq = Sequence::new();

        fs.expect_is_dir()
            .withf(expect_path(&p.src))
            .once()
            .in_sequence(&mut seq)
            .returning(|_| true);
        fs.expect_create_dir_all()
            .withf(expect_path(&p.parent))
            .once()
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_exists()
            .withf(expect_path(&p.staging))
            .once()
            .in_sequence(&mut seq)
            .returning(|_| false);
        let (expected_src, expected_staging) = (p.src.clone(), p.staging.clone());
        fs.expect_copy_dir_all()
            .withf(move |src: &Path, dest: &Path| src == expected_src && dest == expected_staging)
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(4));
        fs.expect_exists()
            .withf(expect_path(&p.dest))
            .once()
            .in_sequence(&mut seq)
            .returning(|_| true);
        fs.expect_remove_dir_all()
            .withf(expect_path(&p.dest))
            .once()
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        let (expected_staging, expected_dest) = (p.staging.clone(), p.dest.clone());
        fs.expect_rename()
            .withf(move |src: &Path, dest: &Path| src == expected_staging && dest == expected_dest)
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let copied = MirrorTask::new(&p.src, &p.dest, &fs).run();

        assert_eq!(copied.unwrap(), 4);
    }

    #[test]
    fn given_a_leftover_staging_dir_when_mirroring_then_it_is_cleared_first() {
        let p = paths();
        let mut fs = Fs::default();

        fs.expect_is_dir().returning(|_| true);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists()
            .withf(expect_path(&p.staging))
            .once()
            .returning(|_| true);
        fs.expect_exists()
            .withf(expect_path(&p.dest))
            .once()
            .returning(|_| false);
        fs.expect_remove_dir_all()
            .withf(expect_path(&p.staging))
            .once()
            .returning(|_| Ok(()));
        fs.expect_copy_dir_all().once().returning(|_, _| Ok(1));
        fs.expect_rename().once().returning(|_, _| Ok(()));

        assert!(MirrorTask::new(&p.src, &p.dest, &fs).run().is_ok());
    }

    #[test]
    fn given_a_missing_source_when_mirroring_then_nothing_is_touched() {
        let p = paths();
        let mut fs = Fs::default();

        fs.expect_is_dir().once().returning(|_| false);
        fs.expect_create_dir_all().never();
        fs.expect_copy_dir_all().never();
        fs.expect_remove_dir_all().never();
        fs.expect_rename().never();

        let result = MirrorTask::new(&p.src, &p.dest, &fs).run();

        assert!(matches!(result, Err(MirrorTaskError::SourceNotFound(src)) if src == p.src));
    }

    #[test]
    fn given_a_failing_copy_when_mirroring_then_the_destination_is_left_intact() {
        let p = paths();
        let mut fs = Fs::default();

        fs.expect_is_dir().returning(|_| true);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists()
            .withf(expect_path(&p.staging))
            .times(2)
            .returning(|_| false);
        fs.expect_exists().withf(expect_path(&p.dest)).never();
        let (copy_src, copy_dest) = (p.src.clone(), p.staging.clone());
        fs.expect_copy_dir_all().once().returning(move |_, _| {
            Err(FileError::CopyError(
                copy_src.join("AkAutobahn.h"),
                copy_dest.join("AkAutobahn.h"),
                io::Error::other("disk full"),
            ))
        });
        fs.expect_remove_dir_all().never();
        fs.expect_rename().never();

        let result = MirrorTask::new(&p.src, &p.dest, &fs).run();

        assert!(matches!(
            result,
            Err(MirrorTaskError::FileIo {
                source: FileError::CopyError(..),
                ..
            })
        ));
    }

    #[test]
    fn given_a_partial_copy_when_mirroring_fails_then_the_staging_dir_is_removed() {
        let p = paths();
        let mut fs = Fs::default();
        let mut seq = Sequence::new();

        fs.expect_is_dir().returning(|_| true);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists()
            .withf(expect_path(&p.staging))
            .once()
            .in_sequence(&mut seq)
            .returning(|_| false);
        fs.expect_copy_dir_all()
            .once()
            .in_sequence(&mut seq)
            .returning(|src, dest| {
                Err(FileError::CopyError(
                    src.to_path_buf(),
                    dest.to_path_buf(),
                    io::Error::other("disk full"),
                ))
            });
        fs.expect_exists()
            .withf(expect_path(&p.staging))
            .once()
            .in_sequence(&mut seq)
            .returning(|_| true);
        fs.expect_remove_dir_all()
            .withf(expect_path(&p.staging))
            .once()
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_rename().never();

        assert!(MirrorTask::new(&p.src, &p.dest, &fs).run().is_err());
    }

    #[test]
    #[should_panic(expected = "Mirror destination path must be absolute. Input path: \
                               relative/ext/AkAutobahn")]
    fn new_panics_when_dest_is_not_absolute() {
        let fs = Fs::default();
        let dest = PathBuf::from("relative/ext/AkAutobahn");
        MirrorTask::new(Path::new("/sdk"), &dest, &fs);
    }
}
