//! File operations module
//! Provides create, rename, copy, move and delete operations

use crate::{validate_filename, FsError, Result};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tokio::fs::{self, File, OpenOptions};
use tokio::io::AsyncWriteExt;

/// Create an empty file named `name` inside `dir`, truncating any existing file
pub async fn create_file(dir: &Path, name: &str) -> Result<PathBuf> {
    validate_filename(name)?;

    let path = dir.join(name);
    let mut file = File::create(&path).await?;
    file.flush().await?;

    tracing::info!("Created file: {}", path.display());
    Ok(path)
}

/// Rename a file within its parent directory
pub async fn rename_file(from: &Path, new_name: &str) -> Result<PathBuf> {
    validate_filename(new_name)?;

    let parent = from
        .parent()
        .ok_or_else(|| FsError::NotAFile(from.to_path_buf()))?;
    let to = parent.join(new_name);

    if fs::try_exists(&to).await? {
        return Err(FsError::AlreadyExists(to));
    }

    fs::rename(from, &to).await?;
    tracing::info!("Renamed: {} -> {}", from.display(), to.display());

    Ok(to)
}

/// Prefix a file name with the current millisecond timestamp
pub fn timestamped_name(name: &OsStr) -> OsString {
    let mut prefixed = OsString::from(chrono::Utc::now().timestamp_millis().to_string());
    prefixed.push(name);
    prefixed
}

/// Copy a file into `target_dir`, creating the directory if needed.
///
/// A same-named file already in `target_dir` is never overwritten; the copy
/// gets a timestamp-prefixed name instead. Returns the path written.
pub async fn copy_into(source: &Path, target_dir: &Path) -> Result<PathBuf> {
    let file_name = source
        .file_name()
        .ok_or_else(|| FsError::NotAFile(source.to_path_buf()))?;

    fs::create_dir_all(target_dir).await?;

    let mut target = target_dir.join(file_name);
    if fs::try_exists(&target).await? {
        target = target_dir.join(timestamped_name(file_name));
    }

    let mut reader = File::open(source).await?;
    let mut writer = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&target)
        .await?;

    let bytes = tokio::io::copy(&mut reader, &mut writer).await?;
    writer.flush().await?;
    writer.sync_all().await?;

    tracing::info!("Copied {} bytes: {} -> {}", bytes, source.display(), target.display());
    Ok(target)
}

/// Copy a file into `target_dir`, then delete the source.
///
/// The source is only removed once the copy has been fully written.
pub async fn move_into(source: &Path, target_dir: &Path) -> Result<PathBuf> {
    let target = copy_into(source, target_dir).await?;

    fs::remove_file(source).await?;
    tracing::info!("Moved: {} -> {}", source.display(), target.display());

    Ok(target)
}

/// Delete a file
pub async fn remove_file(path: &Path) -> Result<()> {
    fs::remove_file(path).await?;
    tracing::warn!("Permanently deleted: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;

    #[tokio::test]
    async fn test_create_truncates() {
        let dir = tempfile::tempdir().unwrap();
        stdfs::write(dir.path().join("notes.txt"), b"old content").unwrap();

        let path = create_file(dir.path(), "notes.txt").await.unwrap();
        assert_eq!(stdfs::metadata(&path).unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_create_rejects_bad_name() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            create_file(dir.path(), "a/b.txt").await,
            Err(FsError::InvalidName(_))
        ));
    }

    #[tokio::test]
    async fn test_rename() {
        let dir = tempfile::tempdir().unwrap();
        let from = dir.path().join("from.txt");
        stdfs::write(&from, b"test").unwrap();

        let to = rename_file(&from, "to.txt").await.unwrap();
        assert!(!from.exists());
        assert_eq!(stdfs::read(&to).unwrap(), b"test");
    }

    #[tokio::test]
    async fn test_rename_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let from = dir.path().join("from.txt");
        stdfs::write(&from, b"from").unwrap();
        stdfs::write(dir.path().join("to.txt"), b"to").unwrap();

        assert!(matches!(
            rename_file(&from, "to.txt").await,
            Err(FsError::AlreadyExists(_))
        ));
        assert!(from.exists());
    }

    #[tokio::test]
    async fn test_copy_creates_target_dir() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("a.txt");
        stdfs::write(&source, b"payload").unwrap();

        let target_dir = dir.path().join("x").join("y");
        let target = copy_into(&source, &target_dir).await.unwrap();

        assert_eq!(target, target_dir.join("a.txt"));
        assert_eq!(stdfs::read(&target).unwrap(), b"payload");
        assert!(source.exists());
    }

    #[tokio::test]
    async fn test_copy_collision_gets_timestamp_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("a.txt");
        stdfs::write(&source, b"new").unwrap();
        let target_dir = dir.path().join("out");
        stdfs::create_dir(&target_dir).unwrap();
        stdfs::write(target_dir.join("a.txt"), b"existing").unwrap();

        let target = copy_into(&source, &target_dir).await.unwrap();
        let name = target.file_name().unwrap().to_string_lossy().to_string();

        assert!(name.ends_with("a.txt"));
        assert!(name.len() > "a.txt".len());
        assert!(name.trim_end_matches("a.txt").chars().all(|c| c.is_ascii_digit()));
        assert_eq!(stdfs::read(&target).unwrap(), b"new");
        assert_eq!(stdfs::read(target_dir.join("a.txt")).unwrap(), b"existing");
    }

    #[tokio::test]
    async fn test_move_removes_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("a.txt");
        stdfs::write(&source, b"payload").unwrap();

        let target = move_into(&source, &dir.path().join("out")).await.unwrap();
        assert!(!source.exists());
        assert_eq!(stdfs::read(target).unwrap(), b"payload");
    }

    #[tokio::test]
    async fn test_move_keeps_source_when_target_uncreatable() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("a.txt");
        stdfs::write(&source, b"payload").unwrap();
        // A regular file where the target directory should go
        let blocker = dir.path().join("blocker");
        stdfs::write(&blocker, b"").unwrap();

        assert!(move_into(&source, &blocker.join("sub")).await.is_err());
        assert!(source.exists());
    }

    #[tokio::test]
    async fn test_remove() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone.txt");
        stdfs::write(&path, b"").unwrap();

        remove_file(&path).await.unwrap();
        assert!(!path.exists());
    }
}
