use std::env;
use std::path::PathBuf;

/// Environment variable names for run defaults
pub const ENV_SHOW_DIR: &str = "TVRENAME_SHOW_DIR";
pub const ENV_SHOW_NAME: &str = "TVRENAME_SHOW_NAME";

/// Defaults that apply when the command line leaves a value out
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenamerConfig {
    pub show_dir: Option<PathBuf>,
    pub show_name: Option<String>,
}

impl RenamerConfig {
    /// Load defaults from environment variables
    ///
    /// Recognized environment variables:
    /// - `TVRENAME_SHOW_DIR`: show directory used when none is given
    /// - `TVRENAME_SHOW_NAME`: show name used when `--name` is not given
    ///
    /// These can be set in a `.env` file in the working directory.
    pub fn from_env() -> Self {
        Self {
            show_dir: non_empty_var(ENV_SHOW_DIR).map(PathBuf::from),
            show_name: non_empty_var(ENV_SHOW_NAME),
        }
    }

    /// Command-line values take precedence over environment defaults
    pub fn merge(self, show_dir: Option<PathBuf>, show_name: Option<String>) -> Self {
        Self {
            show_dir: show_dir.or(self.show_dir),
            show_name: show_name.or(self.show_name),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
