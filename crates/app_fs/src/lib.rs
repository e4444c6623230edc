//! File Manager File System Layer
//!
//! Provides the filesystem side of every command:
//! - Path resolution against a working directory (file vs directory)
//! - Directory listing
//! - File operations (create, rename, copy, move, delete)
//! - Streaming SHA-256 digests
//! - Brotli compression and decompression
//! - File name validation

mod resolve;
mod browser;
mod file_operations;
mod digest;
mod codec;
mod sanitize;

pub use resolve::{absolute, normalize, resolve_directory, resolve_file, resolve_path};
pub use browser::{list_directory, EntryKind, FileEntry, ListOptions, SortBy};
pub use file_operations::{copy_into, create_file, move_into, remove_file, rename_file, timestamped_name};
pub use digest::sha256_file;
pub use codec::{compress_file, decompress_file, DEFAULT_QUALITY, MAX_QUALITY};
pub use sanitize::{is_valid_filename, validate_filename};

use std::path::PathBuf;
use thiserror::Error;

/// File system errors
#[derive(Error, Debug)]
pub enum FsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    #[error("Not a regular file: {0}")]
    NotAFile(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Invalid file name: {0:?}")]
    InvalidName(String),

    #[error("File already exists: {0}")]
    AlreadyExists(PathBuf),
}

impl FsError {
    /// Did this error come from checking the caller's arguments rather than from I/O?
    pub fn is_resolution(&self) -> bool {
        matches!(
            self,
            FsError::NotFound(_)
                | FsError::NotAFile(_)
                | FsError::NotADirectory(_)
                | FsError::InvalidName(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, FsError>;
