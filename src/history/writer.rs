use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{info, warn};

use crate::rename::RenameResult;
use crate::show::ShowContext;

use super::types::*;

/// Error types for history operations
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("Failed to write history file: {0}")]
    WriteError(#[from] std::io::Error),

    #[error("Failed to serialize history: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Write the history of a run into `history_dir`.
///
/// `completed` is false when the run aborted after some renames, so the
/// partially renamed state is documented.
pub fn write_history(
    result: &RenameResult,
    show: &ShowContext,
    history_dir: &Path,
    completed: bool,
) -> Result<PathBuf, HistoryError> {
    let history = create_history_from_result(result, show, completed);
    write_history_file(&history, history_dir)
}

fn create_history_from_result(
    result: &RenameResult,
    show: &ShowContext,
    completed: bool,
) -> HistoryFile {
    let changes: Vec<HistoryEntry> = result
        .operations
        .iter()
        .map(|op| HistoryEntry {
            season: op.season,
            episode: op.episode,
            source: relative_to(&op.source_path, show.directory()),
            destination: relative_to(&op.destination_path, show.directory()),
        })
        .collect();

    HistoryFile {
        version: HISTORY_VERSION.to_string(),
        executed_at: Utc::now(),
        show_directory: show.directory().to_path_buf(),
        show_name: show.name().to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        completed,
        changes,
    }
}

fn relative_to(path: &Path, base: &Path) -> PathBuf {
    path.strip_prefix(base).unwrap_or(path).to_path_buf()
}

fn write_history_file(history: &HistoryFile, history_dir: &Path) -> Result<PathBuf, HistoryError> {
    fs::create_dir_all(history_dir)?;

    let file_path = history_dir.join(history.generate_filename());

    if file_path.exists() {
        warn!("History file already exists: {:?}", file_path);
        let unique_filename = format!(
            "tvrename-history-{}-{}.json",
            history.executed_at.format("%Y%m%d-%H%M%S"),
            history.executed_at.timestamp_subsec_millis()
        );
        return write_to_path(history, &history_dir.join(unique_filename));
    }

    write_to_path(history, &file_path)
}

fn write_to_path(history: &HistoryFile, path: &Path) -> Result<PathBuf, HistoryError> {
    let temp_path = path.with_extension("json.tmp");

    {
        let file = File::create(&temp_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, history)?;
    }

    fs::rename(&temp_path, path)?;

    info!("History written to: {:?}", path);

    Ok(path.to_path_buf())
}
