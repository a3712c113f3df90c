use serde::{Deserialize, Serialize};

use super::defaults;

/// Working-set policy for [`crate::ProfileSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Maximum number of profiles compared at once.
    pub max_profiles: usize,
    /// Score assigned to every dimension of a new or reset profile.
    pub default_score: u8,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            max_profiles: defaults::DEFAULT_MAX_PROFILES,
            default_score: defaults::DEFAULT_SCORE,
        }
    }
}
