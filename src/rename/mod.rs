mod executor;
mod guard;
mod planner;
mod types;

pub use executor::execute_plan;
pub use guard::check_collisions;
pub use planner::{canonical_file_name, plan_season};
pub use types::{RenameError, RenameOperation, RenamePlan, RenameResult, TargetCollision};
