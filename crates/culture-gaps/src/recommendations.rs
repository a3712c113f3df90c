//! Recommendation lookup.
//!
//! Selection uses a binary split (gap >= 40 picks `high`, anything else picks
//! `moderate`). This is coarser than the four display bands.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use culture_core::constants::HIGH_RECOMMENDATION_THRESHOLD;
use culture_core::errors::CatalogError;
use culture_core::models::{DimensionId, RecommendationTier};
use culture_core::traits::IRecommendationSource;

/// (dimension, high-gap advice, moderate-gap advice)
type BuiltinEntry = (DimensionId, &'static [&'static str], &'static [&'static str]);

const BUILTIN: [BuiltinEntry; 8] = [
    (
        DimensionId::Communicating,
        &[
            "Explicitly clarify expectations in writing after verbal discussions",
            "Use visual aids and written summaries to ensure message clarity",
            "Ask clarifying questions to uncover implicit meanings",
            "Be patient with communication that seems overly detailed or vague",
        ],
        &[
            "Check for understanding by summarizing key points",
            "Be mindful of cultural context in messages",
            "Use clear, direct language while respecting nuance",
        ],
    ),
    (
        DimensionId::Evaluating,
        &[
            "Adjust feedback delivery style - soften direct feedback or be more explicit",
            "Provide feedback in private settings when working with indirect cultures",
            "Frame criticism constructively and focus on behaviors, not personal traits",
            "Be prepared that \"okay\" might mean \"needs improvement\" in some cultures",
        ],
        &[
            "Balance directness with diplomatic phrasing",
            "Consider the setting and audience when giving feedback",
        ],
    ),
    (
        DimensionId::Persuading,
        &[
            "Adapt presentation style - lead with theory OR practical examples based on audience",
            "For principles-first cultures: explain the \"why\" before the \"what\"",
            "For applications-first cultures: start with examples, then explain underlying logic",
            "Prepare both conceptual frameworks and concrete case studies",
        ],
        &[
            "Balance theoretical foundations with practical applications",
            "Adjust depth of explanation based on audience preferences",
        ],
    ),
    (
        DimensionId::Leading,
        &[
            "Adjust formality level in communications with leadership",
            "Be mindful of hierarchy in meetings - who speaks first, seating arrangements",
            "In egalitarian cultures: encourage open dialogue across all levels",
            "In hierarchical cultures: show appropriate respect for titles and seniority",
        ],
        &[
            "Observe and adapt to local leadership dynamics",
            "Balance accessibility with appropriate professional distance",
        ],
    ),
    (
        DimensionId::Deciding,
        &[
            "Align expectations on decision-making timelines",
            "In consensual cultures: allow more time for group input and buy-in",
            "In top-down cultures: identify key decision-makers early",
            "Document decisions clearly and communicate to all stakeholders",
        ],
        &[
            "Be flexible with decision-making processes",
            "Ensure key stakeholders are consulted appropriately",
        ],
    ),
    (
        DimensionId::Trusting,
        &[
            "Invest time in relationship-building activities beyond work tasks",
            "Schedule informal time together - meals, social events",
            "Be patient - trust takes longer to build in relationship-based cultures",
            "Share appropriate personal information to build deeper connections",
        ],
        &[
            "Balance task focus with relationship maintenance",
            "Make time for informal interactions alongside work activities",
        ],
    ),
    (
        DimensionId::Disagreeing,
        &[
            "Establish ground rules for constructive debate in team settings",
            "For confrontational cultures: embrace healthy debate as productive",
            "For conflict-avoidant cultures: provide safe channels for dissenting views",
            "Separate ideas from personal identity when disagreements arise",
        ],
        &[
            "Create psychological safety for expressing different viewpoints",
            "Model respectful disagreement and debate",
        ],
    ),
    (
        DimensionId::Scheduling,
        &[
            "Set explicit expectations about deadlines and punctuality",
            "Build buffer time into project schedules when working across cultures",
            "In linear-time cultures: stick to agendas and respect time boundaries",
            "In flexible-time cultures: allow for organic conversation flow",
        ],
        &[
            "Communicate schedule expectations clearly",
            "Be flexible while maintaining accountability",
        ],
    ),
];

/// Binary recommendation tier for a gap.
pub fn recommendation_tier(gap: u8) -> RecommendationTier {
    if gap >= HIGH_RECOMMENDATION_THRESHOLD {
        RecommendationTier::High
    } else {
        RecommendationTier::Moderate
    }
}

/// Advice lists for one dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationSet {
    pub high: Vec<String>,
    pub moderate: Vec<String>,
}

impl RecommendationSet {
    /// The list for a tier; an empty `high` list falls back to `moderate`.
    pub fn for_tier(&self, tier: RecommendationTier) -> &[String] {
        match tier {
            RecommendationTier::High if !self.high.is_empty() => &self.high,
            _ => &self.moderate,
        }
    }
}

/// Immutable recommendation table keyed by dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecommendationTable {
    entries: FxHashMap<DimensionId, RecommendationSet>,
}

impl RecommendationTable {
    /// The built-in advice for all eight dimensions.
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|&(dimension, high, moderate)| {
                let set = RecommendationSet {
                    high: high.iter().map(|s| s.to_string()).collect(),
                    moderate: moderate.iter().map(|s| s.to_string()).collect(),
                };
                (dimension, set)
            })
            .collect();
        Self { entries }
    }

    /// A table from externally supplied entries. Dimensions may be omitted.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (DimensionId, RecommendationSet)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Parse a JSON object keyed by dimension id.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(json).map_err(|e| CatalogError::ParseError {
            message: e.to_string(),
        })
    }

    pub fn get(&self, dimension: DimensionId) -> Option<&RecommendationSet> {
        self.entries.get(&dimension)
    }

    /// Advice for a dimension at a gap, or empty when the table has no entry.
    pub fn lookup(&self, dimension: DimensionId, gap: u8) -> &[String] {
        self.get(dimension)
            .map(|set| set.for_tier(recommendation_tier(gap)))
            .unwrap_or(&[])
    }
}

impl Default for RecommendationTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl IRecommendationSource for RecommendationTable {
    fn recommendations(&self, dimension: DimensionId, tier: RecommendationTier) -> Vec<String> {
        self.get(dimension)
            .map(|set| set.for_tier(tier).to_vec())
            .unwrap_or_default()
    }
}

static BUILTIN_TABLE: LazyLock<RecommendationTable> = LazyLock::new(RecommendationTable::builtin);

/// Built-in advice for a scale identifier and gap. Unknown identifiers yield nothing.
pub fn action_recommendations(scale_id: &str, gap: u8) -> Vec<String> {
    match scale_id.parse::<DimensionId>() {
        Ok(dimension) => BUILTIN_TABLE.lookup(dimension, gap).to_vec(),
        Err(_) => Vec::new(),
    }
}
