//! Multi-profile gap aggregation.

use culture_core::constants::MIN_PROFILES_FOR_COMPARISON;
use culture_core::models::{DimensionId, MultiGap, Profile, ProfileValue, RankedGap};

/// One [`MultiGap`] per dimension in canonical order.
///
/// Extremes are attributed to every profile holding them, in input order.
/// Empty for fewer than two profiles.
pub fn calculate_multi_profile_gaps(profiles: &[Profile]) -> Vec<MultiGap> {
    if profiles.len() < MIN_PROFILES_FOR_COMPARISON {
        return Vec::new();
    }

    let names: Vec<String> = profiles.iter().map(Profile::display_name).collect();

    DimensionId::ALL
        .into_iter()
        .map(|dimension| aggregate_dimension(dimension, profiles, &names))
        .collect()
}

fn aggregate_dimension(dimension: DimensionId, profiles: &[Profile], names: &[String]) -> MultiGap {
    let all_values: Vec<ProfileValue> = profiles
        .iter()
        .zip(names)
        .map(|(profile, name)| ProfileValue {
            id: profile.id,
            name: name.clone(),
            value: profile.score(dimension),
        })
        .collect();

    // Non-empty: the caller guarantees at least two profiles.
    let min = all_values.iter().map(|v| v.value).min().unwrap_or_default();
    let max = all_values.iter().map(|v| v.value).max().unwrap_or_default();

    MultiGap {
        dimension,
        min,
        max,
        gap: max - min,
        min_profiles: holders_of(&all_values, min),
        max_profiles: holders_of(&all_values, max),
        all_values,
    }
}

fn holders_of(values: &[ProfileValue], extreme: u8) -> Vec<String> {
    values
        .iter()
        .filter(|v| v.value == extreme)
        .map(|v| v.name.clone())
        .collect()
}

/// Multi-gaps ordered by gap descending, ties in canonical order, the first flagged largest.
pub fn rank_multi_gaps(gaps: Vec<MultiGap>) -> Vec<RankedGap> {
    let mut sorted = gaps;
    sorted.sort_by(|a, b| b.gap.cmp(&a.gap));
    sorted
        .into_iter()
        .enumerate()
        .map(|(i, gap)| RankedGap {
            gap,
            is_largest: i == 0,
        })
        .collect()
}
