use std::path::{Path, PathBuf};
use thiserror::Error;

/// A single planned move inside a season folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOperation {
    /// Full path to the source file
    pub source_path: PathBuf,
    /// Original file name
    pub source_name: String,
    /// Full path to the destination
    pub destination_path: PathBuf,
    /// Canonical file name
    pub destination_name: String,
    pub season: u32,
    pub episode: u32,
}

impl RenameOperation {
    pub fn new(source_path: PathBuf, destination_name: String, season: u32, episode: u32) -> Self {
        let source_name = source_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let destination_path = source_path
            .parent()
            .map(|p| p.join(&destination_name))
            .unwrap_or_else(|| PathBuf::from(&destination_name));

        Self {
            source_path,
            source_name,
            destination_path,
            destination_name,
            season,
            episode,
        }
    }

    /// The file already carries its canonical name
    pub fn is_noop(&self) -> bool {
        self.source_path == self.destination_path
    }
}

/// Rename plan for one season: original file name to canonical target
#[derive(Debug, Clone)]
pub struct RenamePlan {
    pub season: u32,
    pub directory: PathBuf,
    /// Ordered by original file name
    pub operations: Vec<RenameOperation>,
}

impl RenamePlan {
    pub fn new(season: u32, directory: &Path) -> Self {
        Self {
            season,
            directory: directory.to_path_buf(),
            operations: Vec::new(),
        }
    }

    pub fn add_operation(&mut self, op: RenameOperation) {
        self.operations.push(op);
    }

    /// Operations that actually move a file
    pub fn pending(&self) -> impl Iterator<Item = &RenameOperation> {
        self.operations.iter().filter(|op| !op.is_noop())
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }
}

/// Everything a run did (or would do, in dry-run mode)
#[derive(Debug, Clone, Default)]
pub struct RenameResult {
    /// Whether this was a dry run
    pub dry_run: bool,
    /// Moves performed, or planned when `dry_run` is set
    pub operations: Vec<RenameOperation>,
    /// Files that already had their canonical name
    pub unchanged: Vec<RenameOperation>,
    /// Seasons whose plan passed the collision check
    pub seasons_processed: Vec<u32>,
    /// Seasons without any supported media file
    pub seasons_skipped: Vec<u32>,
}

impl RenameResult {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    pub fn add_operation(&mut self, op: RenameOperation) {
        self.operations.push(op);
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }
}

/// A canonical target claimed by more than one source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetCollision {
    pub target: String,
    pub sources: Vec<String>,
}

/// Errors that can occur while validating or executing a plan
#[derive(Error, Debug)]
pub enum RenameError {
    #[error("File rename collision detected in season {season}: ABORT")]
    Collision {
        season: u32,
        collisions: Vec<TargetCollision>,
    },

    #[error("Failed to rename '{from}' to '{to}': {source}")]
    FilesystemError {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },
}
