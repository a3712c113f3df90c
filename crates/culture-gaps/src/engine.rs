use std::sync::Arc;

use culture_core::errors::CultureResult;
use culture_core::models::{
    ActionItem, DimensionCatalog, GapRecord, GapReport, GapSeverity, MultiGap, PairComparison,
    Profile, RankedGap,
};
use culture_core::traits::{IActionPlanner, IRecommendationSource};

use crate::recommendations::RecommendationTable;
use crate::{action_plan, aggregate, pairwise, ranking, report, severity};

/// Gap engine bound to a dimension catalog and a recommendation source.
///
/// Holds only read-only data; every method is a pure function of its arguments,
/// so one engine can be shared freely across threads.
#[derive(Clone)]
pub struct GapEngine {
    catalog: DimensionCatalog,
    recommendations: Arc<dyn IRecommendationSource>,
}

impl GapEngine {
    /// Engine over the built-in catalog and recommendation table.
    pub fn new() -> Self {
        Self {
            catalog: DimensionCatalog::builtin(),
            recommendations: Arc::new(RecommendationTable::builtin()),
        }
    }

    /// Replace the catalog.
    pub fn with_catalog(mut self, catalog: DimensionCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Replace the recommendation source.
    pub fn with_recommendations(mut self, source: Arc<dyn IRecommendationSource>) -> Self {
        self.recommendations = source;
        self
    }

    /// Engine over a catalog supplied as JSON.
    pub fn from_catalog_json(json: &str) -> CultureResult<Self> {
        Ok(Self::new().with_catalog(DimensionCatalog::from_json(json)?))
    }

    pub fn catalog(&self) -> &DimensionCatalog {
        &self.catalog
    }

    /// Per-dimension gaps between two profiles.
    pub fn gaps(&self, profile1: Option<&Profile>, profile2: Option<&Profile>) -> Vec<GapRecord> {
        pairwise::calculate_gaps(profile1, profile2)
    }

    /// The widest single-dimension gap between two profiles.
    pub fn largest_gap(
        &self,
        profile1: Option<&Profile>,
        profile2: Option<&Profile>,
    ) -> Option<GapRecord> {
        pairwise::largest_gap(profile1, profile2)
    }

    pub fn multi_gaps(&self, profiles: &[Profile]) -> Vec<MultiGap> {
        let _span =
            tracing::debug_span!("culture.gaps.aggregate", profiles = profiles.len()).entered();
        aggregate::calculate_multi_profile_gaps(profiles)
    }

    /// Multi-gaps ordered by magnitude, the widest flagged.
    pub fn ranked_gaps(&self, profiles: &[Profile]) -> Vec<RankedGap> {
        aggregate::rank_multi_gaps(self.multi_gaps(profiles))
    }

    pub fn pair_ranking(&self, profiles: &[Profile]) -> Vec<PairComparison> {
        let _span =
            tracing::debug_span!("culture.gaps.ranking", profiles = profiles.len()).entered();
        let pairs = ranking::pairwise_comparisons(profiles);
        tracing::debug!(pairs = pairs.len(), "pairs ranked");
        pairs
    }

    pub fn severity(&self, gap: u8) -> GapSeverity {
        severity::gap_severity(gap)
    }

    pub fn color(&self, gap: u8) -> &'static str {
        severity::gap_color(gap)
    }

    /// Recommendations from this engine's source for a scale identifier.
    pub fn recommendations(&self, scale_id: &str, gap: u8) -> Vec<String> {
        match scale_id.parse() {
            Ok(dimension) => self.recommendations.recommendations(
                dimension,
                crate::recommendations::recommendation_tier(gap),
            ),
            Err(_) => {
                tracing::debug!(scale_id, "no recommendations for unknown scale");
                Vec::new()
            }
        }
    }

    pub fn report(&self, profiles: &[Profile]) -> GapReport {
        let _span =
            tracing::debug_span!("culture.gaps.report", profiles = profiles.len()).entered();
        let report = report::build_report(profiles, &self.catalog, self.recommendations.as_ref());
        tracing::debug!(status = ?report.status, items = report.action_plan.len(), "report built");
        report
    }
}

impl Default for GapEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GapEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GapEngine")
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}

impl IActionPlanner for GapEngine {
    fn action_plan(&self, profiles: &[Profile]) -> Vec<ActionItem> {
        let _span = tracing::debug_span!("culture.gaps.action_plan", profiles = profiles.len())
            .entered();
        let plan = action_plan::generate_action_plan(
            profiles,
            &self.catalog,
            self.recommendations.as_ref(),
        );
        tracing::debug!(items = plan.len(), "action plan generated");
        plan
    }
}
