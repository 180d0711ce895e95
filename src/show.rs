//! Show-level context: the validated directory and the canonical show name.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Punctuation kept by [`sanitize_show_name`] besides alphanumerics
const ALLOWED_PUNCTUATION: [char; 4] = ['(', ')', '-', ' '];

#[derive(Error, Debug)]
pub enum ShowError {
    #[error("Show directory not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Show path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Show name {raw:?} is empty after sanitization")]
    InvalidName { raw: String },
}

/// Immutable per-run context handed to the rename pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowContext {
    name: String,
    directory: PathBuf,
}

impl ShowContext {
    /// Validate `directory` and build the canonical show name.
    ///
    /// The name comes from `name_override` when given, otherwise from the
    /// final component of the directory path.
    pub fn new(directory: &Path, name_override: Option<&str>) -> Result<Self, ShowError> {
        if !directory.exists() {
            return Err(ShowError::PathNotFound(directory.to_path_buf()));
        }

        if !directory.is_dir() {
            return Err(ShowError::NotADirectory(directory.to_path_buf()));
        }

        let raw = match name_override {
            Some(name) => name.to_string(),
            None => directory_name(directory),
        };

        let name = sanitize_show_name(&raw);
        if name.is_empty() {
            return Err(ShowError::InvalidName { raw });
        }

        debug!(raw = %raw, name = %name, "Resolved show name");

        Ok(Self {
            name,
            directory: directory.to_path_buf(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

/// Final path component, resolving paths such as `.` or `..` first
fn directory_name(directory: &Path) -> String {
    if let Some(name) = directory.file_name() {
        return name.to_string_lossy().to_string();
    }

    fs::canonicalize(directory)
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
        .unwrap_or_default()
}

/// Keep only alphanumeric characters, parentheses, hyphens and spaces
pub fn sanitize_show_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphanumeric() || ALLOWED_PUNCTUATION.contains(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_sanitize_drops_punctuation() {
        assert_eq!(sanitize_show_name("Reservation Dogs!!!"), "Reservation Dogs");
        assert_eq!(sanitize_show_name("Marvel's Agents of S.H.I.E.L.D."), "Marvels Agents of SHIELD");
    }

    #[test]
    fn test_sanitize_keeps_allowed_characters() {
        assert_eq!(sanitize_show_name("Doctor Who (2005)"), "Doctor Who (2005)");
        assert_eq!(sanitize_show_name("Spider-Man"), "Spider-Man");
        assert_eq!(sanitize_show_name("Pokémon"), "Pokémon");
    }

    #[test]
    fn test_sanitize_to_empty() {
        assert_eq!(sanitize_show_name("!!!???"), "");
    }

    #[test]
    fn test_context_uses_directory_name() {
        let root = tempdir().unwrap();
        let show = root.path().join("Reservation Dogs!!!");
        fs::create_dir(&show).unwrap();

        let ctx = ShowContext::new(&show, None).unwrap();

        assert_eq!(ctx.name(), "Reservation Dogs");
        assert_eq!(ctx.directory(), show.as_path());
    }

    #[test]
    fn test_context_trailing_separator() {
        let root = tempdir().unwrap();
        let show = root.path().join("Severance");
        fs::create_dir(&show).unwrap();

        let with_slash = PathBuf::from(format!("{}/", show.display()));
        let ctx = ShowContext::new(&with_slash, None).unwrap();

        assert_eq!(ctx.name(), "Severance");
    }

    #[test]
    fn test_context_name_override() {
        let dir = tempdir().unwrap();

        let ctx = ShowContext::new(dir.path(), Some("The Bear: Chicago")).unwrap();

        assert_eq!(ctx.name(), "The Bear Chicago");
    }

    #[test]
    fn test_context_invalid_name() {
        let dir = tempdir().unwrap();

        let result = ShowContext::new(dir.path(), Some("???"));

        assert!(matches!(result, Err(ShowError::InvalidName { raw }) if raw == "???"));
    }

    #[test]
    fn test_context_missing_directory() {
        let result = ShowContext::new(Path::new("/nonexistent/show"), None);
        assert!(matches!(result, Err(ShowError::PathNotFound(_))));
    }

    #[test]
    fn test_context_file_instead_of_directory() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("show.mkv");
        fs::write(&file, "").unwrap();

        let result = ShowContext::new(&file, None);
        assert!(matches!(result, Err(ShowError::NotADirectory(_))));
    }
}
