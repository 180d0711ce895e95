//! Season-by-season driver for one show.
//!
//! Each season goes `Discovered -> Matched -> PlanValidated -> Executed`, or
//! `Discovered -> Skipped` when it holds no supported media. Any matching or
//! validation error ends the whole run: later seasons are never attempted,
//! and seasons executed earlier stay renamed.

use thiserror::Error;
use tracing::{debug, info};

use crate::episode::{match_season, MatchError};
use crate::progress::Progress;
use crate::rename::{check_collisions, execute_plan, plan_season, RenameError, RenameResult};
use crate::season::{discover_seasons, DiscoveryError};
use crate::show::ShowContext;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error(transparent)]
    Match(#[from] MatchError),

    #[error(transparent)]
    Rename(#[from] RenameError),
}

/// Rename every episode of `show`.
///
/// Completed (or, in dry-run mode, planned) operations are recorded in
/// `result` as they happen, so the caller still sees them when an error
/// aborts the run part-way.
pub fn rename_show(
    show: &ShowContext,
    result: &mut RenameResult,
    progress: &mut Progress,
) -> Result<(), PipelineError> {
    progress.scan_start(show.name(), show.directory());

    let seasons = discover_seasons(show)?;
    progress.seasons_found(seasons.len());

    if seasons.is_empty() {
        progress.warn("No season folders found, nothing to rename");
    }

    for season in seasons.values() {
        progress.season_start(season.number, &season.name);

        let matches = match_season(season)?;

        if matches.has_no_media() {
            debug!(season = season.number, "No supported media, skipping season");
            progress.season_skipped();
            result.seasons_skipped.push(season.number);
            continue;
        }

        let plan = plan_season(show, season, &matches.episodes);
        check_collisions(&plan)?;
        result.seasons_processed.push(season.number);

        execute_plan(&plan, result, progress)?;

        info!(
            season = season.number,
            planned = plan.len(),
            "Season complete"
        );
    }

    Ok(())
}
