pub mod checks;
pub mod config;
pub mod document;
pub mod reporter;
pub mod suite;

use config::Target;
use suite::CheckGroup;

/// Groups for the given targets, in run order.
pub fn planned_groups(targets: &[Target]) -> Vec<CheckGroup> {
    targets
        .iter()
        .flat_map(|target| CheckGroup::for_target(*target).iter().copied())
        .collect()
}
