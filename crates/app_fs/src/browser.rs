//! Directory listing

use crate::{FsError, Result};
use std::path::Path;

/// What an entry is, after following symlinks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Sockets, fifos, devices, dangling links
    Other,
}

/// Directory entry
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl FileEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

/// Listing order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    /// Whatever order the OS returns
    None,
    /// Natural name order
    Name,
    /// Directories first, then natural name order
    Kind,
}

/// Options for listing directory contents
#[derive(Debug, Clone)]
pub struct ListOptions {
    pub show_hidden: bool,
    pub sort_by: SortBy,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            show_hidden: true,
            sort_by: SortBy::Kind,
        }
    }
}

/// List directory contents
pub async fn list_directory<P: AsRef<Path>>(path: P, options: &ListOptions) -> Result<Vec<FileEntry>> {
    let path = path.as_ref();

    let meta = match tokio::fs::metadata(path).await {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(FsError::NotFound(path.to_path_buf()))
        }
        Err(e) => return Err(e.into()),
    };
    if !meta.is_dir() {
        return Err(FsError::NotADirectory(path.to_path_buf()));
    }

    let mut entries = Vec::new();
    let mut dir = tokio::fs::read_dir(path).await?;

    while let Some(entry) = dir.next_entry().await? {
        let name = entry.file_name().to_string_lossy().to_string();
        let kind = match entry.file_type().await {
            Ok(ft) if ft.is_dir() => EntryKind::Directory,
            Ok(ft) if ft.is_file() => EntryKind::File,
            Ok(ft) if ft.is_symlink() => match tokio::fs::metadata(entry.path()).await {
                Ok(target) if target.is_dir() => EntryKind::Directory,
                Ok(target) if target.is_file() => EntryKind::File,
                _ => EntryKind::Other,
            },
            _ => EntryKind::Other,
        };

        let file_entry = FileEntry { name, kind };
        if !options.show_hidden && file_entry.is_hidden() {
            continue;
        }
        entries.push(file_entry);
    }

    sort_entries(&mut entries, options.sort_by);
    Ok(entries)
}

fn sort_entries(entries: &mut [FileEntry], sort_by: SortBy) {
    match sort_by {
        SortBy::None => {}
        SortBy::Name => {
            entries.sort_by(|a, b| natural_sort_key(&a.name).cmp(&natural_sort_key(&b.name)));
        }
        SortBy::Kind => {
            entries.sort_by(|a, b| {
                b.is_dir()
                    .cmp(&a.is_dir())
                    .then_with(|| natural_sort_key(&a.name).cmp(&natural_sort_key(&b.name)))
            });
        }
    }
}

/// Generate a natural sort key (handles numbers correctly)
/// "file2.txt" < "file10.txt"
fn natural_sort_key(s: &str) -> Vec<NaturalSortPart> {
    let mut parts = Vec::new();
    let mut current_num = String::new();
    let mut current_str = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            if !current_str.is_empty() {
                parts.push(NaturalSortPart::Str(current_str.to_lowercase()));
                current_str.clear();
            }
            current_num.push(c);
        } else {
            if !current_num.is_empty() {
                if let Ok(n) = current_num.parse::<u64>() {
                    parts.push(NaturalSortPart::Num(n));
                }
                current_num.clear();
            }
            current_str.push(c);
        }
    }

    if !current_num.is_empty() {
        if let Ok(n) = current_num.parse::<u64>() {
            parts.push(NaturalSortPart::Num(n));
        }
    }
    if !current_str.is_empty() {
        parts.push(NaturalSortPart::Str(current_str.to_lowercase()));
    }

    parts
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum NaturalSortPart {
    Num(u64),
    Str(String),
}
