mod codes;

pub use codes::ExitCode;

use crate::episode::MatchError;
use crate::history::HistoryError;
use crate::pipeline::PipelineError;
use crate::rename::{RenameError, TargetCollision};
use crate::scanner::ScannerError;
use crate::season::{DiscoveryError, InvalidEntry};
use crate::show::ShowError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("No show directory given")]
    MissingShowDir,

    #[error("Show directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Show name is empty or contains only disallowed characters")]
    InvalidShowName { raw: String },

    #[error("Erroneous file structure detected")]
    StructureError { entries: Vec<InvalidEntry> },

    #[error("Potentially misnamed {file}")]
    MisnamedEpisode {
        file: String,
        folder: PathBuf,
        expected: u32,
        found: u32,
    },

    #[error("File rename collision detected in season {season}")]
    Collision {
        season: u32,
        collisions: Vec<TargetCollision>,
    },

    #[error("Rename failed: {from} -> {to}")]
    RenameError {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    #[error("History file error: {message}")]
    HistoryError { message: String },

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::MissingShowDir => ExitCode::InvalidArguments,
            AppError::DirectoryNotFound { .. } => ExitCode::DirectoryNotFound,
            AppError::NotADirectory { .. } => ExitCode::DirectoryNotFound,
            AppError::PermissionDenied { .. } => ExitCode::PermissionError,
            AppError::InvalidShowName { .. } => ExitCode::InvalidShowName,
            AppError::StructureError { .. } => ExitCode::StructureError,
            AppError::MisnamedEpisode { .. } => ExitCode::MisnamedEpisode,
            AppError::Collision { .. } => ExitCode::Collision,
            AppError::RenameError { .. } => ExitCode::RenameError,
            AppError::HistoryError { .. } => ExitCode::HistoryError,
            AppError::Other(_) => ExitCode::GeneralError,
        }
    }

    pub fn detailed_message(&self) -> String {
        match self {
            AppError::MissingShowDir => String::from(
                "No show directory was given.\n\n\
                 Pass it as an argument or set TVRENAME_SHOW_DIR (a .env file works too).",
            ),

            AppError::DirectoryNotFound { path } => {
                format!(
                    "The specified directory does not exist:\n  {}\n\n\
                     Please verify the path and try again.",
                    path.display()
                )
            }

            AppError::NotADirectory { path } => {
                format!(
                    "The specified path is not a directory:\n  {}\n\n\
                     Please provide a valid show directory.",
                    path.display()
                )
            }

            AppError::PermissionDenied { path } => {
                format!(
                    "Permission denied when accessing:\n  {}\n\n\
                     Please check file permissions or run with appropriate privileges.",
                    path.display()
                )
            }

            AppError::InvalidShowName { raw } => {
                format!(
                    "The show name {:?} is empty after removing disallowed characters.\n\n\
                     Show names may contain letters, digits, spaces, '(', ')' and '-'.\n\
                     Use --name to provide a different name.",
                    raw
                )
            }

            AppError::StructureError { entries } => {
                let mut msg = String::from(
                    "The show directory must only contain season folders.\n\
                     The following entries are not season folders:\n",
                );
                for entry in entries.iter().take(10) {
                    msg.push_str(&format!("  - {} ({})\n", entry.name, entry.reason.description()));
                }
                if entries.len() > 10 {
                    msg.push_str(&format!("  ... and {} more\n", entries.len() - 10));
                }
                msg.push_str("\nExpected layout:\n");
                msg.push_str("  <Show>/Season 1/<episodes>\n");
                msg.push_str("  <Show>/Season 2/<episodes>\n");
                msg.push_str("\nNo files were renamed.");
                msg
            }

            AppError::MisnamedEpisode {
                file,
                folder,
                expected,
                found,
            } => {
                format!(
                    "Potentially misnamed episode:\n  {}\n  in {}\n\n\
                     The file is tagged as season {} but lives in the folder for season {}.\n\
                     Move or rename the file, then run again.\n\
                     Seasons processed before this one have already been renamed.",
                    file,
                    folder.display(),
                    found,
                    expected
                )
            }

            AppError::Collision { season, collisions } => {
                let mut msg = format!(
                    "File rename collision detected in season {}: ABORT\n\n",
                    season
                );
                for collision in collisions {
                    msg.push_str(&format!("{} would be claimed by:\n", collision.target));
                    for source in &collision.sources {
                        msg.push_str(&format!("  - {}\n", source));
                    }
                }
                msg.push_str(
                    "\nNo files in this season were renamed.\n\
                     Seasons processed before this one have already been renamed.",
                );
                msg
            }

            AppError::RenameError { from, to, source } => {
                format!(
                    "Failed to rename file:\n\
                     From: {}\n\
                     To:   {}\n\
                     Error: {}\n\n\
                     Renames completed before this failure were not rolled back.",
                    from, to, source
                )
            }

            AppError::HistoryError { message } => {
                format!(
                    "History file error:\n  {}\n\n\
                     The renames themselves were applied.",
                    message
                )
            }

            AppError::Other(message) => message.clone(),
        }
    }
}

impl From<ShowError> for AppError {
    fn from(err: ShowError) -> Self {
        match err {
            ShowError::PathNotFound(path) => AppError::DirectoryNotFound { path },
            ShowError::NotADirectory(path) => AppError::NotADirectory { path },
            ShowError::InvalidName { raw } => AppError::InvalidShowName { raw },
        }
    }
}

impl From<ScannerError> for AppError {
    fn from(err: ScannerError) -> Self {
        match err {
            ScannerError::PathNotFound(path) => AppError::DirectoryNotFound { path },
            ScannerError::NotADirectory(path) => AppError::NotADirectory { path },
            ScannerError::PermissionDenied(path) => AppError::PermissionDenied { path },
            ScannerError::IoError(e) => AppError::Other(format!("I/O error: {}", e)),
        }
    }
}

impl From<DiscoveryError> for AppError {
    fn from(err: DiscoveryError) -> Self {
        match err {
            DiscoveryError::Structure { entries } => AppError::StructureError { entries },
            DiscoveryError::Scanner(e) => e.into(),
        }
    }
}

impl From<MatchError> for AppError {
    fn from(err: MatchError) -> Self {
        match err {
            MatchError::MisnamedEpisode {
                file,
                folder,
                expected,
                found,
            } => AppError::MisnamedEpisode {
                file,
                folder,
                expected,
                found,
            },
            MatchError::Scanner(e) => e.into(),
        }
    }
}

impl From<RenameError> for AppError {
    fn from(err: RenameError) -> Self {
        match err {
            RenameError::Collision { season, collisions } => {
                AppError::Collision { season, collisions }
            }
            RenameError::FilesystemError { from, to, source } => {
                AppError::RenameError { from, to, source }
            }
        }
    }
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Discovery(e) => e.into(),
            PipelineError::Match(e) => e.into(),
            PipelineError::Rename(e) => e.into(),
        }
    }
}

impl From<HistoryError> for AppError {
    fn from(err: HistoryError) -> Self {
        AppError::HistoryError {
            message: err.to_string(),
        }
    }
}
