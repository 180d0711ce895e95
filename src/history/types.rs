use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const HISTORY_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryFile {
    /// Schema version for compatibility
    pub version: String,

    /// When the run finished (or aborted)
    pub executed_at: DateTime<Utc>,

    /// Show directory that was renamed
    pub show_directory: PathBuf,

    /// Sanitized show name used in the new file names
    pub show_name: String,

    /// Tool version that created this history
    pub tool_version: String,

    /// False when an error aborted the run after some renames
    pub completed: bool,

    /// All renames performed, in execution order
    pub changes: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryEntry {
    pub season: u32,
    pub episode: u32,

    /// Path of the file before the rename, relative to the show directory
    pub source: PathBuf,

    /// Path of the file after the rename, relative to the show directory
    pub destination: PathBuf,
}

impl HistoryFile {
    /// Generate the filename for this history file
    pub fn generate_filename(&self) -> String {
        let timestamp = self.executed_at.format("%Y%m%d-%H%M%S");
        format!("tvrename-history-{}.json", timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_filename() {
        let history = HistoryFile {
            version: HISTORY_VERSION.to_string(),
            executed_at: DateTime::parse_from_rfc3339("2026-01-15T10:30:45Z")
                .unwrap()
                .with_timezone(&Utc),
            show_directory: PathBuf::from("/tv/Show"),
            show_name: "Show".to_string(),
            tool_version: "1.0.0".to_string(),
            completed: true,
            changes: vec![],
        };

        assert_eq!(
            history.generate_filename(),
            "tvrename-history-20260115-103045.json"
        );
    }

    #[test]
    fn test_entry_serialization() {
        let entry = HistoryEntry {
            season: 1,
            episode: 2,
            source: PathBuf::from("Season 1/random.S01E02.mkv"),
            destination: PathBuf::from("Season 1/Show S01E02.mkv"),
        };

        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["season"], 1);
        assert_eq!(json["episode"], 2);
        assert_eq!(json["source"], "Season 1/random.S01E02.mkv");
        assert_eq!(json["destination"], "Season 1/Show S01E02.mkv");
    }
}
