use serde::{Deserialize, Serialize};

use super::dimension::DimensionId;
use super::gap::ProfileValue;
use super::severity::GapSeverity;

/// A ranked, dimension-scoped recommendation bundle. Computed per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    /// Display name of the dimension.
    pub scale: String,
    pub dimension: DimensionId,
    pub gap: u8,
    pub severity: GapSeverity,
    pub min_profiles: Vec<String>,
    pub max_profiles: Vec<String>,
    /// Pole label the minimum holders lean toward.
    pub min_label: String,
    /// Pole label the maximum holders lean toward.
    pub max_label: String,
    pub all_values: Vec<ProfileValue>,
    pub recommendations: Vec<String>,
}
