//! Two-profile gap calculation.

use culture_core::models::{DimensionId, GapRecord, Profile};

/// One [`GapRecord`] per dimension in canonical order.
///
/// Empty when either profile is absent; callers gate on profile count upstream.
pub fn calculate_gaps(profile1: Option<&Profile>, profile2: Option<&Profile>) -> Vec<GapRecord> {
    let (Some(p1), Some(p2)) = (profile1, profile2) else {
        return Vec::new();
    };

    DimensionId::ALL
        .into_iter()
        .map(|dimension| {
            let value1 = p1.score(dimension);
            let value2 = p2.score(dimension);
            GapRecord {
                dimension,
                value1,
                value2,
                gap: value1.abs_diff(value2),
            }
        })
        .collect()
}

/// The dimension with the widest gap between two profiles.
pub fn largest_gap(profile1: Option<&Profile>, profile2: Option<&Profile>) -> Option<GapRecord> {
    largest_of(&calculate_gaps(profile1, profile2)).copied()
}

/// Maximum by `gap`; the leftmost record wins ties.
pub fn largest_of(gaps: &[GapRecord]) -> Option<&GapRecord> {
    gaps.iter()
        .reduce(|largest, current| if current.gap > largest.gap { current } else { largest })
}
