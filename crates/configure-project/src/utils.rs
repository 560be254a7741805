// License: MIT OR Apache-2.0
//! Lexical path helpers. Nothing here touches the filesystem, so symbolic
//! links are not resolved.

use std::path::{Component, Path, PathBuf};

/// Removes `.` components and folds `..` into the preceding component.
///
/// A `..` that would climb above the root is dropped; a `..` at the start of
/// a relative path is kept.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last = normalized.components().next_back();
                if matches!(last, Some(Component::Normal(_))) {
                    normalized.pop();
                } else if !matches!(last, Some(Component::RootDir | Component::Prefix(_))) {
                    normalized.push(Component::ParentDir);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Returns the path that leads from the directory `from` to `to`.
///
/// Both paths must be absolute and normalized. Returns `None` when the two
/// paths do not share a root, e.g. they live on different Windows drives.
/// Two equal paths yield `.`.
pub fn relative_path(from: &Path, to: &Path) -> Option<PathBuf> {
    let mut from_components = from.components().peekable();
    let mut to_components = to.components().peekable();

    match (from_components.peek(), to_components.peek()) {
        (Some(Component::Prefix(a)), Some(Component::Prefix(b))) if a != b => return None,
        (Some(Component::Prefix(_)), Some(Component::RootDir))
        | (Some(Component::RootDir), Some(Component::Prefix(_))) => return None,
        _ => {}
    }

    while let (Some(a), Some(b)) = (from_components.peek(), to_components.peek()) {
        if a != b {
            break;
        }
        from_components.next();
        to_components.next();
    }

    let mut relative: PathBuf = from_components.map(|_| Component::ParentDir).collect();
    relative.extend(to_components);
    if relative.as_os_str().is_empty() {
        relative.push(Component::CurDir);
    }
    Some(relative)
}
