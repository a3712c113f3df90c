use crate::models::{DimensionId, RecommendationTier};

/// Read-only table of recommendations keyed by dimension and tier.
///
/// Implementations are immutable once built.
pub trait IRecommendationSource: Send + Sync {
    /// Recommendations for a dimension at a tier. Empty when the source has no entry.
    fn recommendations(&self, dimension: DimensionId, tier: RecommendationTier) -> Vec<String>;
}
