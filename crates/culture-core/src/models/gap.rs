use serde::{Deserialize, Serialize};

use super::dimension::DimensionId;
use super::profile::ProfileId;

/// Difference between two profiles on one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapRecord {
    pub dimension: DimensionId,
    pub value1: u8,
    pub value2: u8,
    /// `|value1 - value2|`, always in [0, 100].
    pub gap: u8,
}

/// One profile's score on a dimension, used for plotting markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileValue {
    pub id: ProfileId,
    pub name: String,
    pub value: u8,
}

/// Spread of one dimension across a whole profile set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiGap {
    pub dimension: DimensionId,
    pub min: u8,
    pub max: u8,
    /// `max - min`.
    pub gap: u8,
    /// Every profile holding the minimum, in input order.
    pub min_profiles: Vec<String>,
    /// Every profile holding the maximum, in input order.
    pub max_profiles: Vec<String>,
    /// All scores in input order.
    pub all_values: Vec<ProfileValue>,
}

/// A [`MultiGap`] positioned in a magnitude ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedGap {
    #[serde(flatten)]
    pub gap: MultiGap,
    /// True for the first entry of the ranking only.
    pub is_largest: bool,
}

/// Full comparison of one unordered pair of profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairComparison {
    pub profile1: ProfileId,
    pub profile1_name: String,
    pub profile2: ProfileId,
    pub profile2_name: String,
    pub gaps: Vec<GapRecord>,
    pub total_gap: u32,
    /// `total_gap` divided by the number of dimensions.
    pub avg_gap: f64,
    pub largest_gap: GapRecord,
}
