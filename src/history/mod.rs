mod types;
mod writer;

pub use types::{HistoryEntry, HistoryFile, HISTORY_VERSION};
pub use writer::{write_history, HistoryError};
