use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::DIMENSION_COUNT;
use crate::errors::ProfileError;

/// Identifier of one of the eight fixed cultural dimensions.
///
/// Declaration order is the canonical iteration order for every
/// per-dimension output in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionId {
    Communicating,
    Evaluating,
    Persuading,
    Leading,
    Deciding,
    Trusting,
    Disagreeing,
    Scheduling,
}

impl DimensionId {
    /// All dimensions in canonical order.
    pub const ALL: [DimensionId; DIMENSION_COUNT] = [
        Self::Communicating,
        Self::Evaluating,
        Self::Persuading,
        Self::Leading,
        Self::Deciding,
        Self::Trusting,
        Self::Disagreeing,
        Self::Scheduling,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Communicating => "communicating",
            Self::Evaluating => "evaluating",
            Self::Persuading => "persuading",
            Self::Leading => "leading",
            Self::Deciding => "deciding",
            Self::Trusting => "trusting",
            Self::Disagreeing => "disagreeing",
            Self::Scheduling => "scheduling",
        }
    }

    /// Position in canonical order, usable as an array index.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for DimensionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DimensionId {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ProfileError::UnknownDimension {
                name: s.to_string(),
            })
    }
}

/// Display metadata for a dimension: its name and the two poles of its 0-100 scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub id: DimensionId,
    pub name: String,
    /// Label of the 0 end of the scale.
    pub left_label: String,
    /// Label of the 100 end of the scale.
    pub right_label: String,
    pub left_description: String,
    pub right_description: String,
}
