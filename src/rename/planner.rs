use crate::episode::MediaFile;
use crate::season::Season;
use crate::show::ShowContext;

use super::types::{RenameOperation, RenamePlan};

/// Canonical episode file name: `<Show> SxxExx.<ext>`
///
/// Numbers are padded to two digits, never truncated.
pub fn canonical_file_name(show_name: &str, season: u32, episode: u32, extension: &str) -> String {
    format!("{} S{:02}E{:02}.{}", show_name, season, episode, extension)
}

/// Build the rename plan for one season. Pure computation, no filesystem access.
pub fn plan_season(show: &ShowContext, season: &Season, episodes: &[MediaFile]) -> RenamePlan {
    let mut plan = RenamePlan::new(season.number, &season.path);

    for file in episodes {
        let destination_name =
            canonical_file_name(show.name(), file.season, file.episode, &file.extension);

        plan.add_operation(RenameOperation::new(
            file.path.clone(),
            destination_name,
            file.season,
            file.episode,
        ));
    }

    plan
}
