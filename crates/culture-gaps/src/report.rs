//! One-shot report combining every gap view.

use culture_core::constants::MIN_PROFILES_FOR_COMPARISON;
use culture_core::models::{DimensionCatalog, GapReport, PlanStatus, Profile};
use culture_core::traits::IRecommendationSource;

use crate::action_plan::generate_action_plan;
use crate::aggregate::{calculate_multi_profile_gaps, rank_multi_gaps};
use crate::ranking::pairwise_comparisons;

/// Ranked gaps, pair ranking and action plan, with the status a caller should render.
pub fn build_report(
    profiles: &[Profile],
    catalog: &DimensionCatalog,
    recommendations: &dyn IRecommendationSource,
) -> GapReport {
    let action_plan = generate_action_plan(profiles, catalog, recommendations);
    let status = if profiles.len() < MIN_PROFILES_FOR_COMPARISON {
        PlanStatus::NeedMoreProfiles
    } else if action_plan.is_empty() {
        PlanStatus::Aligned
    } else {
        PlanStatus::ActionRequired
    };

    GapReport {
        profile_count: profiles.len(),
        status,
        ranked_gaps: rank_multi_gaps(calculate_multi_profile_gaps(profiles)),
        pairs: pairwise_comparisons(profiles),
        action_plan,
    }
}
