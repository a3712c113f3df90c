/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of fixed cultural dimensions every profile is scored on.
pub const DIMENSION_COUNT: usize = 8;

/// Lowest score on any dimension scale.
pub const MIN_SCORE: u8 = 0;

/// Highest score on any dimension scale.
pub const MAX_SCORE: u8 = 100;

/// Minimum number of profiles for any multi-profile comparison.
pub const MIN_PROFILES_FOR_COMPARISON: usize = 2;

/// Gaps below this are not actionable and never reach the action plan.
pub const ACTIONABLE_GAP_THRESHOLD: u8 = 20;

/// The action plan only ever surfaces this many dimensions.
pub const MAX_ACTION_ITEMS: usize = 3;

/// Gap at or above which the `high` recommendation list is selected.
pub const HIGH_RECOMMENDATION_THRESHOLD: u8 = 40;
