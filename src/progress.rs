//! Progress output for user-facing status updates.
//!
//! In verbose mode output is suppressed since tracing handles everything.
//! In normal mode output is shown with colors while seasons are processed.

use colored::Colorize;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// Progress reporter for user-facing output
pub struct Progress {
    writer: Box<dyn Write>,
    /// When true, all output is suppressed (verbose mode uses tracing instead)
    silent: bool,
    /// When true, output is colorized
    colors_enabled: bool,
}

/// Check if we should use colors in output
pub fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    io::stderr().is_terminal()
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress {
    /// Create a new progress reporter writing to stderr
    pub fn new() -> Self {
        Self::new_with_ui(false, should_use_colors())
    }

    /// Create a progress reporter that respects UI mode
    /// When verbose=true, output is suppressed (tracing handles it)
    pub fn new_with_ui(verbose: bool, colors_enabled: bool) -> Self {
        if !colors_enabled {
            colored::control::set_override(false);
        }
        Self {
            writer: Box::new(io::stderr()),
            silent: verbose,
            colors_enabled,
        }
    }

    /// Create a progress reporter with a custom writer
    pub fn with_writer(writer: Box<dyn Write>) -> Self {
        Self {
            writer,
            silent: false,
            colors_enabled: false,
        }
    }

    /// Create a silent progress reporter (for library callers and tests)
    pub fn silent() -> Self {
        Self {
            writer: Box::new(io::sink()),
            silent: true,
            colors_enabled: false,
        }
    }

    /// Report scanning the show directory
    pub fn scan_start(&mut self, show_name: &str, path: &Path) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "{} {}",
                show_name.bold(),
                format!("({})", path.display()).dimmed()
            );
        } else {
            let _ = writeln!(self.writer, "{} ({})", show_name, path.display());
        }
    }

    /// Report the discovered seasons
    pub fn seasons_found(&mut self, count: usize) {
        if self.silent {
            return;
        }
        let msg = format!("Found {} season folder{}", count, plural(count));
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{}", msg.dimmed());
        } else {
            let _ = writeln!(self.writer, "{}", msg);
        }
    }

    /// Report starting work on a season
    pub fn season_start(&mut self, number: u32, folder: &str) {
        if self.silent {
            return;
        }
        let _ = writeln!(self.writer);
        if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "{} {}",
                format!("Season {}", number).bold(),
                format!("[{}]", folder).dimmed()
            );
        } else {
            let _ = writeln!(self.writer, "Season {} [{}]", number, folder);
        }
    }

    /// Report a season without supported media files
    pub fn season_skipped(&mut self) {
        if self.silent {
            return;
        }
        let msg = "  no supported media files, skipped";
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{}", msg.dimmed());
        } else {
            let _ = writeln!(self.writer, "{}", msg);
        }
    }

    /// Report files that already carry their canonical name
    pub fn season_unchanged(&mut self, count: usize) {
        if self.silent || count == 0 {
            return;
        }
        let msg = format!("  {} file{} already named correctly", count, plural(count));
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{}", msg.dimmed());
        } else {
            let _ = writeln!(self.writer, "{}", msg);
        }
    }

    /// Report progress on a single rename
    pub fn rename_progress(&mut self, current: usize, total: usize, from: &str, to: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let counter = format!("[{}/{}]", current, total);
            let _ = writeln!(
                self.writer,
                "  {} {} {} {}",
                counter.cyan(),
                from.dimmed(),
                "→".cyan(),
                to
            );
        } else {
            let _ = writeln!(self.writer, "  [{}/{}] {} -> {}", current, total, from, to);
        }
    }

    /// Report a non-fatal condition
    pub fn warn(&mut self, message: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{} {}", "!".yellow().bold(), message.yellow());
        } else {
            let _ = writeln!(self.writer, "Warning: {}", message);
        }
    }

    /// Report history file written
    pub fn history_written(&mut self, path: &Path) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "{}",
                format!("History saved to: {}", path.display()).dimmed()
            );
        } else {
            let _ = writeln!(self.writer, "History saved to: {}", path.display());
        }
    }

    /// Report the end of the run
    pub fn run_complete(&mut self, count: usize, dry_run: bool) {
        if self.silent {
            return;
        }
        let _ = writeln!(self.writer);
        if dry_run {
            let msg = format!("Dry run complete. {} file{} would be renamed.", count, plural(count));
            if self.colors_enabled {
                let _ = writeln!(self.writer, "{}", msg.dimmed());
            } else {
                let _ = writeln!(self.writer, "{}", msg);
            }
        } else if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "{} {}",
                "✓".green().bold(),
                format!("{} file{} renamed", count, plural(count)).green()
            );
        } else {
            let _ = writeln!(self.writer, "Rename complete. {} file{} renamed.", count, plural(count));
        }
    }
}

pub(crate) fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
