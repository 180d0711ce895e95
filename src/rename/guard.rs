use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

use super::types::{RenameError, RenamePlan, TargetCollision};

/// Verify every planned target path is claimed by exactly one source file.
///
/// A file already carrying its canonical name is not special-cased: it
/// collides with any other file planned onto the same name.
pub fn check_collisions(plan: &RenamePlan) -> Result<(), RenameError> {
    let mut claims: BTreeMap<&Path, Vec<&str>> = BTreeMap::new();

    for op in &plan.operations {
        claims
            .entry(op.destination_path.as_path())
            .or_default()
            .push(op.source_name.as_str());
    }

    if claims.len() == plan.operations.len() {
        debug!(season = plan.season, targets = claims.len(), "No collisions");
        return Ok(());
    }

    let collisions: Vec<TargetCollision> = claims
        .into_iter()
        .filter(|(_, sources)| sources.len() > 1)
        .map(|(target, sources)| TargetCollision {
            target: target
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
            sources: sources.into_iter().map(String::from).collect(),
        })
        .collect();

    warn!(
        season = plan.season,
        collisions = collisions.len(),
        "Rename collision detected"
    );

    Err(RenameError::Collision {
        season: plan.season,
        collisions,
    })
}
