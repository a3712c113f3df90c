//! The dimension catalog: display metadata for the eight scales.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::dimension::{Dimension, DimensionId};
use crate::constants::DIMENSION_COUNT;
use crate::errors::CatalogError;

/// (id, name, left label, right label, left description, right description)
type BuiltinEntry = (
    DimensionId,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

const BUILTIN: [BuiltinEntry; DIMENSION_COUNT] = [
    (
        DimensionId::Communicating,
        "Communicating",
        "Low-context",
        "High-context",
        "Good communication is precise, simple and clear. Messages are expressed and understood at face value.",
        "Good communication is sophisticated, nuanced and layered. Messages are both spoken and read between the lines.",
    ),
    (
        DimensionId::Evaluating,
        "Evaluating",
        "Direct negative feedback",
        "Indirect negative feedback",
        "Negative feedback is given frankly, bluntly and honestly, and may be delivered in front of a group.",
        "Negative feedback is given softly, subtly and diplomatically, and only in private.",
    ),
    (
        DimensionId::Persuading,
        "Persuading",
        "Principles-first",
        "Applications-first",
        "Individuals develop the theory or concept before presenting a fact, statement or opinion.",
        "Individuals begin with a fact, statement or opinion and add concepts to back it up later.",
    ),
    (
        DimensionId::Leading,
        "Leading",
        "Egalitarian",
        "Hierarchical",
        "The ideal distance between a boss and a subordinate is low. Organizational structures are flat.",
        "The ideal distance between a boss and a subordinate is high. Status matters and structures are multilayered.",
    ),
    (
        DimensionId::Deciding,
        "Deciding",
        "Consensual",
        "Top-down",
        "Decisions are made in groups through unanimous agreement.",
        "Decisions are made by individuals, usually the boss.",
    ),
    (
        DimensionId::Trusting,
        "Trusting",
        "Task-based",
        "Relationship-based",
        "Trust is built through business-related activities and consistent, reliable work.",
        "Trust is built through sharing meals, evening drinks and time spent together.",
    ),
    (
        DimensionId::Disagreeing,
        "Disagreeing",
        "Confrontational",
        "Avoids confrontation",
        "Disagreement and debate are positive for the team and will not harm relationships.",
        "Disagreement and debate are negative for the team and may damage relationships.",
    ),
    (
        DimensionId::Scheduling,
        "Scheduling",
        "Linear-time",
        "Flexible-time",
        "Projects are approached sequentially. The focus is on the deadline and sticking to the schedule.",
        "Projects are approached fluidly. Flexibility and adaptability are valued above organization.",
    ),
];

/// Ordered catalog of exactly eight dimensions in canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DimensionCatalog {
    dimensions: Vec<Dimension>,
}

impl DimensionCatalog {
    /// The built-in catalog.
    pub fn builtin() -> Self {
        let dimensions = BUILTIN
            .iter()
            .map(|&(id, name, left, right, left_desc, right_desc)| Dimension {
                id,
                name: name.to_string(),
                left_label: left.to_string(),
                right_label: right.to_string(),
                left_description: left_desc.to_string(),
                right_description: right_desc.to_string(),
            })
            .collect();
        Self { dimensions }
    }

    /// Build a catalog from externally supplied definitions.
    ///
    /// The definitions must cover every dimension exactly once, in canonical order.
    pub fn new(dimensions: Vec<Dimension>) -> Result<Self, CatalogError> {
        if dimensions.len() != DIMENSION_COUNT {
            return Err(CatalogError::WrongSize {
                expected: DIMENSION_COUNT,
                actual: dimensions.len(),
            });
        }

        let mut seen = FxHashSet::default();
        for dimension in &dimensions {
            if !seen.insert(dimension.id) {
                return Err(CatalogError::DuplicateDimension {
                    dimension: dimension.id,
                });
            }
        }

        for (position, (dimension, expected)) in
            dimensions.iter().zip(DimensionId::ALL).enumerate()
        {
            if dimension.id != expected {
                return Err(CatalogError::OutOfOrder {
                    position,
                    expected,
                    actual: dimension.id,
                });
            }
        }

        Ok(Self { dimensions })
    }

    /// Parse and validate a catalog from a JSON array of dimension definitions.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let dimensions: Vec<Dimension> =
            serde_json::from_str(json).map_err(|e| CatalogError::ParseError {
                message: e.to_string(),
            })?;
        Self::new(dimensions)
    }

    /// Metadata for one dimension. Always present in a validated catalog.
    pub fn get(&self, id: DimensionId) -> &Dimension {
        &self.dimensions[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dimension> {
        self.dimensions.iter()
    }

    pub fn len(&self) -> usize {
        self.dimensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }
}

impl Default for DimensionCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'de> Deserialize<'de> for DimensionCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let dimensions = Vec::<Dimension>::deserialize(deserializer)?;
        Self::new(dimensions).map_err(serde::de::Error::custom)
    }
}
