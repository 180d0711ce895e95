mod types;

pub use types::*;

use crate::scanner::scan_directory;
use crate::show::ShowContext;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Case-sensitive marker every season folder name must contain
const SEASON_MARKER: &str = "Season";

// Trailing 1-2 ASCII digit number that is not part of a longer number
// Examples: "Season 1", "Season 02", "Show - Season3"
static SEASON_NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|[^0-9])([0-9]{1,2})$").unwrap());

/// Parse a season folder name into its season number.
///
/// Season 0 is accepted; it is the usual home of specials.
pub fn parse_season_folder(name: &str) -> Result<u32, RejectReason> {
    if !name.contains(SEASON_MARKER) {
        return Err(RejectReason::MissingMarker);
    }

    SEASON_NUMBER_REGEX
        .captures(name)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .ok_or(RejectReason::MissingNumber)
}

/// Discover every season folder of a show.
///
/// All direct children must be season folders; a single offender aborts
/// discovery without returning the valid ones. When two folders share a
/// season number the later one in listing order wins.
pub fn discover_seasons(show: &ShowContext) -> Result<BTreeMap<u32, Season>, DiscoveryError> {
    let entries = scan_directory(show.directory())?;

    let mut seasons = BTreeMap::new();
    let mut invalid = Vec::new();

    for entry in entries {
        let parsed = if entry.is_dir() {
            parse_season_folder(&entry.name)
        } else {
            Err(RejectReason::NotADirectory)
        };

        match parsed {
            Ok(number) => {
                debug!(name = %entry.name, season = number, "Parsed season folder");

                let season = Season {
                    number,
                    name: entry.name,
                    path: entry.path,
                };

                if let Some(previous) = seasons.insert(number, season) {
                    warn!(
                        season = number,
                        replaced = %previous.name,
                        "Duplicate season number, keeping the later folder"
                    );
                }
            }
            Err(reason) => {
                debug!(name = %entry.name, reason = reason.description(), "Not a season folder");
                invalid.push(InvalidEntry {
                    name: entry.name,
                    reason,
                });
            }
        }
    }

    if !invalid.is_empty() {
        warn!(count = invalid.len(), "Show directory has entries that are not season folders");
        return Err(DiscoveryError::Structure { entries: invalid });
    }

    info!(count = seasons.len(), "Discovered seasons");

    Ok(seasons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn make_show(children: &[&str]) -> (tempfile::TempDir, ShowContext) {
        let dir = tempdir().unwrap();
        for child in children {
            fs::create_dir(dir.path().join(child)).unwrap();
        }
        let ctx = ShowContext::new(dir.path(), Some("Show")).unwrap();
        (dir, ctx)
    }

    #[test]
    fn test_parse_season_folder() {
        assert_eq!(parse_season_folder("Season 1"), Ok(1));
        assert_eq!(parse_season_folder("Season 02"), Ok(2));
        assert_eq!(parse_season_folder("Season 12"), Ok(12));
        assert_eq!(parse_season_folder("Show - Season3"), Ok(3));
    }

    #[test]
    fn test_parse_season_folder_marker_is_case_sensitive() {
        assert_eq!(parse_season_folder("season3"), Err(RejectReason::MissingMarker));
        assert_eq!(parse_season_folder("Show - SEASON 7"), Err(RejectReason::MissingMarker));
    }

    #[test]
    fn test_parse_season_zero() {
        assert_eq!(parse_season_folder("Season 0"), Ok(0));
        assert_eq!(parse_season_folder("Season 00"), Ok(0));
    }

    #[test]
    fn test_parse_season_folder_ascii_digits_only() {
        // Arabic-Indic digit one
        assert_eq!(parse_season_folder("Season \u{0661}"), Err(RejectReason::MissingNumber));
        assert_eq!(parse_season_folder("Season 2\u{0661}"), Err(RejectReason::MissingNumber));
    }

    #[test]
    fn test_parse_season_folder_rejects() {
        assert_eq!(parse_season_folder("Extras"), Err(RejectReason::MissingMarker));
        assert_eq!(parse_season_folder("Specials 1"), Err(RejectReason::MissingMarker));
        assert_eq!(parse_season_folder("Season"), Err(RejectReason::MissingNumber));
        assert_eq!(parse_season_folder("Season 1 Extras"), Err(RejectReason::MissingNumber));
        assert_eq!(parse_season_folder("Season 100"), Err(RejectReason::MissingNumber));
    }

    #[test]
    fn test_discover_seasons() {
        let (_dir, ctx) = make_show(&["Season 2", "Season 1", "Season 10"]);

        let seasons = discover_seasons(&ctx).unwrap();

        let numbers: Vec<u32> = seasons.keys().copied().collect();
        assert_eq!(numbers, vec![1, 2, 10]);
        assert_eq!(seasons[&10].name, "Season 10");
        assert!(seasons[&1].path.ends_with("Season 1"));
    }

    #[test]
    fn test_discover_empty_show() {
        let (_dir, ctx) = make_show(&[]);
        assert!(discover_seasons(&ctx).unwrap().is_empty());
    }

    #[test]
    fn test_discover_rejects_whole_show() {
        let (_dir, ctx) = make_show(&["Season 1", "Extras", "Season"]);

        let result = discover_seasons(&ctx);

        match result {
            Err(DiscoveryError::Structure { entries }) => {
                assert_eq!(entries.len(), 2);
                assert_eq!(entries[0].name, "Extras");
                assert_eq!(entries[0].reason, RejectReason::MissingMarker);
                assert_eq!(entries[1].name, "Season");
                assert_eq!(entries[1].reason, RejectReason::MissingNumber);
            }
            other => panic!("Expected structure error, got {:?}", other),
        }
    }

    #[test]
    fn test_discover_rejects_show_level_files() {
        let (dir, ctx) = make_show(&["Season 1"]);
        fs::write(dir.path().join("Season 2"), "").unwrap();

        let result = discover_seasons(&ctx);

        match result {
            Err(DiscoveryError::Structure { entries }) => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].reason, RejectReason::NotADirectory);
            }
            other => panic!("Expected structure error, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_season_last_wins() {
        // "Season 01" sorts before "Season 1"
        let (_dir, ctx) = make_show(&["Season 1", "Season 01"]);

        let seasons = discover_seasons(&ctx).unwrap();

        assert_eq!(seasons.len(), 1);
        assert_eq!(seasons[&1].name, "Season 1");
    }
}
