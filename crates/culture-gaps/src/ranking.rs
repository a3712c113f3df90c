//! All-pairs comparison ranking.

use culture_core::constants::{DIMENSION_COUNT, MIN_PROFILES_FOR_COMPARISON};
use culture_core::models::{PairComparison, Profile};

use crate::pairwise::{calculate_gaps, largest_of};

/// Every unordered pair (i < j), most divergent first.
///
/// Pairs with equal average gap keep generation order. Empty for fewer than two profiles.
pub fn pairwise_comparisons(profiles: &[Profile]) -> Vec<PairComparison> {
    if profiles.len() < MIN_PROFILES_FOR_COMPARISON {
        return Vec::new();
    }

    let mut pairs = Vec::with_capacity(profiles.len() * (profiles.len() - 1) / 2);
    for (i, first) in profiles.iter().enumerate() {
        for second in &profiles[i + 1..] {
            let gaps = calculate_gaps(Some(first), Some(second));
            let Some(largest_gap) = largest_of(&gaps).copied() else {
                continue;
            };
            let total_gap: u32 = gaps.iter().map(|g| u32::from(g.gap)).sum();

            pairs.push(PairComparison {
                profile1: first.id,
                profile1_name: first.display_name(),
                profile2: second.id,
                profile2_name: second.display_name(),
                gaps,
                total_gap,
                avg_gap: f64::from(total_gap) / DIMENSION_COUNT as f64,
                largest_gap,
            });
        }
    }

    // Average is total over a fixed divisor, so ordering by the integer total is exact.
    pairs.sort_by(|a, b| b.total_gap.cmp(&a.total_gap));
    pairs
}
