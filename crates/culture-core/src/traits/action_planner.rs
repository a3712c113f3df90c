use crate::models::{ActionItem, Profile};

/// Produces the ranked action plan for a profile set.
pub trait IActionPlanner: Send + Sync {
    /// At most three items, highest gap first. Empty for fewer than two profiles.
    fn action_plan(&self, profiles: &[Profile]) -> Vec<ActionItem>;
}
