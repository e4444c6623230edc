//! Path resolution against a working directory

use crate::{FsError, Result};
use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path: drop `.` components and fold `..` into its parent.
///
/// `..` at the filesystem root stays at the root, matching what the OS does.
pub fn normalize<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.as_ref().components() {
        match component {
            Component::ParentDir => {
                normalized.pop();
            }
            Component::CurDir => {}
            _ => normalized.push(component),
        }
    }
    normalized
}

/// Make `path` absolute against the process working directory, then normalize it
pub fn absolute<P: AsRef<Path>>(path: P) -> std::io::Result<PathBuf> {
    let path = path.as_ref();
    if path.is_absolute() {
        Ok(normalize(path))
    } else {
        Ok(normalize(std::env::current_dir()?.join(path)))
    }
}

/// Join user-supplied fragments with a single space and resolve the result
/// against `base`.
///
/// Unquoted paths containing spaces arrive split across several argument
/// slots; joining them back restores the path the user typed. An absolute
/// fragment replaces `base` entirely.
pub fn resolve_path<S: AsRef<str>>(base: &Path, fragments: &[S]) -> PathBuf {
    let joined = fragments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ");

    normalize(base.join(joined))
}

/// Resolve fragments to an existing regular file.
///
/// Symlinks are followed, so a link to a file resolves while a link to a
/// directory does not.
pub async fn resolve_file<S: AsRef<str>>(base: &Path, fragments: &[S]) -> Result<PathBuf> {
    let path = resolve_path(base, fragments);

    match tokio::fs::metadata(&path).await {
        Ok(meta) if meta.is_file() => Ok(path),
        Ok(_) => Err(FsError::NotAFile(path)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(FsError::NotFound(path)),
        Err(e) => Err(e.into()),
    }
}

/// Resolve fragments to an existing directory.
pub async fn resolve_directory<S: AsRef<str>>(base: &Path, fragments: &[S]) -> Result<PathBuf> {
    let path = resolve_path(base, fragments);

    match tokio::fs::metadata(&path).await {
        Ok(meta) if meta.is_dir() => Ok(path),
        Ok(_) => Err(FsError::NotADirectory(path)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(FsError::NotFound(path)),
        Err(e) => Err(e.into()),
    }
}
