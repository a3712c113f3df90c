use serde::{Deserialize, Serialize};

use super::action::ActionItem;
use super::gap::{PairComparison, RankedGap};

/// What a caller should render for an action plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    /// Fewer than two profiles were supplied.
    NeedMoreProfiles,
    /// Two or more profiles and no actionable gap.
    Aligned,
    /// At least one actionable gap.
    ActionRequired,
}

/// Everything the gap panels show, computed in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapReport {
    pub profile_count: usize,
    pub status: PlanStatus,
    pub ranked_gaps: Vec<RankedGap>,
    pub pairs: Vec<PairComparison>,
    pub action_plan: Vec<ActionItem>,
}
