use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Failed to read directory: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    Other,
}

/// A direct child of a scanned directory
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl DirectoryEntry {
    pub fn new(name: String, path: PathBuf, kind: EntryKind) -> Self {
        Self { name, path, kind }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// List every direct child of `target`, sorted by name.
///
/// Nothing is filtered out here: hidden entries and regular files are returned
/// alongside directories so callers can decide what counts as unexpected.
pub fn scan_directory(target: &Path) -> Result<Vec<DirectoryEntry>, ScannerError> {
    debug!(path = ?target, "Scanning directory");

    if !target.exists() {
        return Err(ScannerError::PathNotFound(target.to_path_buf()));
    }

    if !target.is_dir() {
        return Err(ScannerError::NotADirectory(target.to_path_buf()));
    }

    let mut entries = Vec::new();

    let read_dir = fs::read_dir(target).map_err(|e| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            ScannerError::PermissionDenied(target.to_path_buf())
        } else {
            ScannerError::IoError(e)
        }
    })?;

    for entry in read_dir {
        let entry = entry?;
        let path = entry.path();

        trace!(entry = ?path, "Examining entry");

        // Follows symlinks, so a link to a season folder counts as a folder
        let kind = if path.is_dir() {
            EntryKind::Directory
        } else if path.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        };

        let name = entry.file_name().to_string_lossy().to_string();

        trace!(name = %name, kind = ?kind, "Found entry");
        entries.push(DirectoryEntry::new(name, path, kind));
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));

    debug!(count = entries.len(), "Scan complete");

    Ok(entries)
}
