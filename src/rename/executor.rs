use std::fs;
use tracing::{debug, info};

use crate::progress::Progress;

use super::types::{RenameError, RenamePlan, RenameResult};

/// Execute a validated plan, recording each completed move in `result`.
///
/// Moves happen one at a time in plan order. There is no rollback: when a
/// move fails, the moves already recorded in `result` stay on disk. With
/// `result.dry_run` set nothing is moved and the plan is only recorded.
pub fn execute_plan(
    plan: &RenamePlan,
    result: &mut RenameResult,
    progress: &mut Progress,
) -> Result<(), RenameError> {
    let total = plan.pending().count();

    for op in plan.operations.iter().filter(|op| op.is_noop()) {
        debug!(file = %op.source_name, "Already canonical");
        result.unchanged.push(op.clone());
    }
    progress.season_unchanged(plan.len() - total);

    for (i, op) in plan.pending().enumerate() {
        progress.rename_progress(i + 1, total, &op.source_name, &op.destination_name);

        if !result.dry_run {
            fs::rename(&op.source_path, &op.destination_path).map_err(|e| {
                RenameError::FilesystemError {
                    from: op.source_name.clone(),
                    to: op.destination_name.clone(),
                    source: e,
                }
            })?;

            info!("Renamed: {} -> {}", op.source_name, op.destination_name);
        }

        result.add_operation(op.clone());
    }

    Ok(())
}
