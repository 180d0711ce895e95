pub mod cli;
pub mod config;
pub mod episode;
pub mod error;
pub mod history;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod rename;
pub mod scanner;
pub mod season;
pub mod show;

pub use episode::{
    match_season, parse_episode_filename, EpisodeTag, FileToken, MatchError, MediaFile,
    SeasonMatches, SUPPORTED_EXTENSIONS,
};
pub use error::{AppError, ExitCode};
pub use pipeline::{rename_show, PipelineError};
pub use progress::Progress;
pub use rename::{
    canonical_file_name, check_collisions, execute_plan, plan_season, RenameError,
    RenameOperation, RenamePlan, RenameResult, TargetCollision,
};
pub use scanner::{scan_directory, DirectoryEntry, EntryKind, ScannerError};
pub use season::{discover_seasons, parse_season_folder, DiscoveryError, InvalidEntry, RejectReason, Season};
pub use show::{sanitize_show_name, ShowContext, ShowError};
