use crate::scanner::ScannerError;
use std::path::PathBuf;
use thiserror::Error;

/// Season and episode numbers read from an episode tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeTag {
    pub season: u32,
    pub episode: u32,
}

/// Outcome of tokenizing a single file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileToken {
    /// Supported extension and a recognizable episode tag
    Episode { tag: EpisodeTag, extension: String },
    /// Supported extension but no episode tag
    NotAnEpisode,
    /// Extension missing or outside the supported set
    UnsupportedExtension,
}

/// An episode file inside a season folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    pub file_name: String,
    pub path: PathBuf,
    pub season: u32,
    pub episode: u32,
    pub extension: String,
}

/// Files of one season folder, split by how they tokenized
#[derive(Debug, Clone, Default)]
pub struct SeasonMatches {
    pub episodes: Vec<MediaFile>,
    pub unmatched: Vec<String>,
    pub unsupported: usize,
}

impl SeasonMatches {
    /// True when the folder holds no file with a supported extension
    pub fn has_no_media(&self) -> bool {
        self.episodes.is_empty() && self.unmatched.is_empty()
    }
}

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Potentially misnamed {file} in {}: tagged season {found}, folder is season {expected}", .folder.display())]
    MisnamedEpisode {
        file: String,
        folder: PathBuf,
        expected: u32,
        found: u32,
    },

    #[error(transparent)]
    Scanner(#[from] ScannerError),
}
