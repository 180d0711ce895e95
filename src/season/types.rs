use crate::scanner::ScannerError;
use std::path::PathBuf;
use thiserror::Error;

/// A season folder directly under the show directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Season {
    pub number: u32,
    pub name: String,
    pub path: PathBuf,
}

/// Why a show-level entry was rejected as a season folder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    NotADirectory,
    MissingMarker,
    MissingNumber,
}

impl RejectReason {
    pub fn description(&self) -> &'static str {
        match self {
            RejectReason::NotADirectory => "not a directory",
            RejectReason::MissingMarker => "name does not contain \"Season\"",
            RejectReason::MissingNumber => "name does not end with a 1-2 digit season number",
        }
    }
}

/// A show-level entry that is not a valid season folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidEntry {
    pub name: String,
    pub reason: RejectReason,
}

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Erroneous show structure: {} entries are not season folders", .entries.len())]
    Structure { entries: Vec<InvalidEntry> },

    #[error(transparent)]
    Scanner(#[from] ScannerError),
}
