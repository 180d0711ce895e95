mod types;

pub use types::*;

use crate::scanner::scan_directory;
use crate::season::Season;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use tracing::{debug, trace};

/// Extensions (case-sensitive, without the dot) treated as episode media
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["srt", "mp4", "mkv", "avi", "flv"];

// Episode tag: S<1-2 ASCII digits>E<1-2 ASCII digits>, followed eventually by ".<something>"
// The leading greedy `.*` makes the last qualifying tag win.
// Examples: "random.S01E01.mkv", "show s2e7 720p.mp4"
static EPISODE_TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^.*[sS]([0-9]{1,2})[eE]([0-9]{1,2}).*\..").unwrap());

/// Extension after the last dot, `None` for dotfiles and extensionless names
fn file_extension(name: &str) -> Option<&str> {
    Path::new(name).extension().and_then(|e| e.to_str())
}

pub fn is_supported_extension(extension: &str) -> bool {
    SUPPORTED_EXTENSIONS.contains(&extension)
}

/// Tokenize a file name into an episode tag and extension
pub fn parse_episode_filename(name: &str) -> FileToken {
    let extension = match file_extension(name) {
        Some(ext) if is_supported_extension(ext) => ext,
        _ => return FileToken::UnsupportedExtension,
    };

    let tag = EPISODE_TAG_REGEX.captures(name).and_then(|captures| {
        let season = captures.get(1)?.as_str().parse().ok()?;
        let episode = captures.get(2)?.as_str().parse().ok()?;
        Some(EpisodeTag { season, episode })
    });

    match tag {
        Some(tag) => FileToken::Episode {
            tag,
            extension: extension.to_string(),
        },
        None => FileToken::NotAnEpisode,
    }
}

/// Match every episode file of a season folder.
///
/// Fails on the first file (in listing order) whose tagged season differs
/// from the folder's season number; nothing matched so far is returned.
pub fn match_season(season: &Season) -> Result<SeasonMatches, MatchError> {
    let entries = scan_directory(&season.path)?;
    let mut matches = SeasonMatches::default();

    for entry in entries.into_iter().filter(|e| e.is_file()) {
        match parse_episode_filename(&entry.name) {
            FileToken::Episode { tag, extension } => {
                if tag.season != season.number {
                    return Err(MatchError::MisnamedEpisode {
                        file: entry.name,
                        folder: season.path.clone(),
                        expected: season.number,
                        found: tag.season,
                    });
                }

                debug!(
                    file = %entry.name,
                    season = tag.season,
                    episode = tag.episode,
                    "Matched episode"
                );

                matches.episodes.push(MediaFile {
                    file_name: entry.name,
                    path: entry.path,
                    season: tag.season,
                    episode: tag.episode,
                    extension,
                });
            }
            FileToken::NotAnEpisode => {
                debug!(file = %entry.name, "No episode tag, skipping");
                matches.unmatched.push(entry.name);
            }
            FileToken::UnsupportedExtension => {
                trace!(file = %entry.name, "Unsupported extension");
                matches.unsupported += 1;
            }
        }
    }

    Ok(matches)
}
