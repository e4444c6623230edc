//! Path operation and listing handlers

use crate::{AppError, Console, Session};
use app_fs::ListOptions;
use tokio::fs::File;
use tokio::io::{AsyncWrite, AsyncWriteExt};

const FILE_START: &str = "-- Start of file --";
const FILE_END: &str = "-- End of file --";
const EMPTY_FOLDER: &str = "Empty folder.";

/// `ls`: directories prefixed with `/`, other non-file entries skipped
pub async fn ls<O, E>(
    session: &Session,
    options: &ListOptions,
    console: &mut Console<O, E>,
) -> Result<(), AppError>
where
    O: AsyncWrite + Unpin,
    E: AsyncWrite + Unpin,
{
    let entries = app_fs::list_directory(session.current_dir(), options).await?;
    let visible: Vec<_> = entries
        .into_iter()
        .filter(|e| e.kind != app_fs::EntryKind::Other)
        .collect();

    if visible.is_empty() {
        console.line(EMPTY_FOLDER).await?;
        return Ok(());
    }

    for entry in visible {
        if entry.is_dir() {
            console.line(&format!("/{}", entry.name)).await?;
        } else {
            console.line(&entry.name).await?;
        }
    }
    Ok(())
}

/// `cat <path>`: stream the file's bytes between start and end markers
pub async fn cat<O, E>(session: &Session, path: &str, console: &mut Console<O, E>) -> Result<(), AppError>
where
    O: AsyncWrite + Unpin,
    E: AsyncWrite + Unpin,
{
    let file_path = app_fs::resolve_file(session.current_dir(), &[path]).await?;
    let mut file = File::open(&file_path).await?;

    console.line(FILE_START).await?;
    let bytes = tokio::io::copy(&mut file, console.raw()).await?;
    console.raw().write_all(b"\n").await?;
    console.line(FILE_END).await?;

    tracing::debug!("Printed {} bytes of {}", bytes, file_path.display());
    Ok(())
}

/// `add <name>`: create or truncate a file in the current directory
pub async fn add(session: &Session, name: &str) -> Result<(), AppError> {
    app_fs::create_file(session.current_dir(), name).await?;
    Ok(())
}

/// `rn <path> <name>`: rename a file in place
pub async fn rn(session: &Session, path: &str, new_name: &str) -> Result<(), AppError> {
    let file_path = app_fs::resolve_file(session.current_dir(), &[path]).await?;
    app_fs::rename_file(&file_path, new_name).await?;
    Ok(())
}

/// `cp <path> <dir>` and `mv <path> <dir>`
pub async fn copy(session: &Session, path: &str, dir: &str, remove_source: bool) -> Result<(), AppError> {
    let source = app_fs::resolve_file(session.current_dir(), &[path]).await?;
    let target_dir = app_fs::resolve_path(session.current_dir(), &[dir]);

    if remove_source {
        app_fs::move_into(&source, &target_dir).await?;
    } else {
        app_fs::copy_into(&source, &target_dir).await?;
    }
    Ok(())
}

/// `rm <path>`
pub async fn rm(session: &Session, path: &str) -> Result<(), AppError> {
    let file_path = app_fs::resolve_file(session.current_dir(), &[path]).await?;
    app_fs::remove_file(&file_path).await?;
    Ok(())
}

/// `hash <path>`: print the SHA-256 hex digest
pub async fn hash<O, E>(session: &Session, path: &str, console: &mut Console<O, E>) -> Result<(), AppError>
where
    O: AsyncWrite + Unpin,
    E: AsyncWrite + Unpin,
{
    let file_path = app_fs::resolve_file(session.current_dir(), &[path]).await?;
    let digest = app_fs::sha256_file(&file_path).await?;
    console.line(&digest).await?;
    Ok(())
}

/// `compress <path> <dest>`
pub async fn compress(session: &Session, path: &str, dest: &str, quality: u32) -> Result<(), AppError> {
    let source = app_fs::resolve_file(session.current_dir(), &[path]).await?;
    let dest = app_fs::resolve_path(session.current_dir(), &[dest]);
    app_fs::compress_file(&source, &dest, quality).await?;
    Ok(())
}

/// `decompress <path> <dest>`
pub async fn decompress(session: &Session, path: &str, dest: &str) -> Result<(), AppError> {
    let source = app_fs::resolve_file(session.current_dir(), &[path]).await?;
    let dest = app_fs::resolve_path(session.current_dir(), &[dest]);
    app_fs::decompress_file(&source, &dest).await?;
    Ok(())
}
