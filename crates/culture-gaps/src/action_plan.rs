//! Action plan generation.

use culture_core::constants::{ACTIONABLE_GAP_THRESHOLD, MAX_ACTION_ITEMS, MIN_PROFILES_FOR_COMPARISON};
use culture_core::models::{ActionItem, DimensionCatalog, MultiGap, Profile};
use culture_core::traits::IRecommendationSource;

use crate::aggregate::calculate_multi_profile_gaps;
use crate::recommendations::recommendation_tier;
use crate::severity::gap_severity;

/// The top actionable gaps, highest first.
///
/// Steps: aggregate, stable sort by gap descending, drop gaps below 20,
/// keep the first three, join catalog metadata and recommendations.
/// Empty both for fewer than two profiles and for well-aligned sets;
/// callers check the profile count to tell them apart.
pub fn generate_action_plan(
    profiles: &[Profile],
    catalog: &DimensionCatalog,
    recommendations: &dyn IRecommendationSource,
) -> Vec<ActionItem> {
    if profiles.len() < MIN_PROFILES_FOR_COMPARISON {
        return Vec::new();
    }

    let mut gaps = calculate_multi_profile_gaps(profiles);
    gaps.sort_by(|a, b| b.gap.cmp(&a.gap));

    gaps.into_iter()
        .filter(|g| g.gap >= ACTIONABLE_GAP_THRESHOLD)
        .take(MAX_ACTION_ITEMS)
        .map(|g| build_item(g, catalog, recommendations))
        .collect()
}

fn build_item(
    gap: MultiGap,
    catalog: &DimensionCatalog,
    recommendations: &dyn IRecommendationSource,
) -> ActionItem {
    let dimension = catalog.get(gap.dimension);
    ActionItem {
        scale: dimension.name.clone(),
        dimension: gap.dimension,
        gap: gap.gap,
        severity: gap_severity(gap.gap),
        min_profiles: gap.min_profiles,
        max_profiles: gap.max_profiles,
        min_label: dimension.left_label.clone(),
        max_label: dimension.right_label.clone(),
        all_values: gap.all_values,
        recommendations: recommendations
            .recommendations(gap.dimension, recommendation_tier(gap.gap)),
    }
}
