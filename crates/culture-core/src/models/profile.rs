use std::collections::BTreeMap;
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::dimension::DimensionId;
use crate::config::defaults::DEFAULT_SCORE;
use crate::constants::{DIMENSION_COUNT, MAX_SCORE};
use crate::errors::ProfileError;

/// Identifier of a profile, unique within a working set and stable across edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(pub u32);

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProfileId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// One score in [0, 100] for every dimension.
///
/// A `Scores` value cannot be missing a dimension: construction and
/// deserialization both reject incomplete or out-of-range input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "BTreeMap<String, u32>")]
pub struct Scores([u8; DIMENSION_COUNT]);

impl Scores {
    /// Scores in canonical dimension order.
    pub fn new(values: [u8; DIMENSION_COUNT]) -> Result<Self, ProfileError> {
        for (dimension, &value) in DimensionId::ALL.iter().zip(values.iter()) {
            check_range(*dimension, u32::from(value))?;
        }
        Ok(Self(values))
    }

    /// The midpoint score on every dimension.
    pub const fn neutral() -> Self {
        Self([DEFAULT_SCORE; DIMENSION_COUNT])
    }

    /// The same score on every dimension.
    pub fn uniform(value: u8) -> Result<Self, ProfileError> {
        Self::new([value; DIMENSION_COUNT])
    }

    /// Build from (dimension, score) pairs. Every dimension must appear.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ProfileError>
    where
        I: IntoIterator<Item = (DimensionId, u32)>,
    {
        let mut slots: [Option<u8>; DIMENSION_COUNT] = [None; DIMENSION_COUNT];
        for (dimension, value) in pairs {
            let value = check_range(dimension, value)?;
            slots[dimension.index()] = Some(value);
        }

        let mut values = [0u8; DIMENSION_COUNT];
        for dimension in DimensionId::ALL {
            values[dimension.index()] = slots[dimension.index()]
                .ok_or(ProfileError::MissingDimension { dimension })?;
        }
        Ok(Self(values))
    }

    pub fn get(&self, dimension: DimensionId) -> u8 {
        self.0[dimension.index()]
    }

    /// Copy with one dimension replaced.
    pub fn with(mut self, dimension: DimensionId, value: u8) -> Result<Self, ProfileError> {
        self.0[dimension.index()] = check_range(dimension, u32::from(value))?;
        Ok(self)
    }

    /// (dimension, score) pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (DimensionId, u8)> + '_ {
        DimensionId::ALL.into_iter().map(move |d| (d, self.get(d)))
    }
}

fn check_range(dimension: DimensionId, value: u32) -> Result<u8, ProfileError> {
    if value > u32::from(MAX_SCORE) {
        return Err(ProfileError::ScoreOutOfRange { dimension, value });
    }
    Ok(value as u8)
}

impl TryFrom<BTreeMap<String, u32>> for Scores {
    type Error = ProfileError;

    fn try_from(map: BTreeMap<String, u32>) -> Result<Self, Self::Error> {
        let pairs = map
            .into_iter()
            .map(|(key, value)| Ok((key.parse::<DimensionId>()?, value)))
            .collect::<Result<Vec<_>, ProfileError>>()?;
        Self::from_pairs(pairs)
    }
}

impl Serialize for Scores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(DIMENSION_COUNT))?;
        for (dimension, value) in self.iter() {
            map.serialize_entry(dimension.as_str(), &value)?;
        }
        map.end()
    }
}

/// A named set of scores, as created and edited by the profile manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub scores: Scores,
}

impl Profile {
    pub fn new(id: ProfileId, name: impl Into<String>, scores: Scores) -> Self {
        Self {
            id,
            name: Some(name.into()),
            flag: None,
            description: None,
            scores,
        }
    }

    /// A profile with no display name.
    pub fn unnamed(id: ProfileId, scores: Scores) -> Self {
        Self {
            id,
            name: None,
            flag: None,
            description: None,
            scores,
        }
    }

    /// Name shown to users; `"Profile {id}"` when no name is set.
    pub fn display_name(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("Profile {}", self.id),
        }
    }

    pub fn score(&self, dimension: DimensionId) -> u8 {
        self.scores.get(dimension)
    }
}

/// A partial edit to a profile. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub flag: Option<String>,
    pub description: Option<String>,
    pub scores: Vec<(DimensionId, u8)>,
}

impl ProfileUpdate {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn score(mut self, dimension: DimensionId, value: u8) -> Self {
        self.scores.push((dimension, value));
        self
    }

    /// Apply to a profile. Nothing is changed if any score is out of range.
    pub fn apply(&self, profile: &mut Profile) -> Result<(), ProfileError> {
        let mut scores = profile.scores;
        for &(dimension, value) in &self.scores {
            scores = scores.with(dimension, value)?;
        }
        profile.scores = scores;
        if let Some(name) = &self.name {
            profile.name = Some(name.clone());
        }
        if let Some(flag) = &self.flag {
            profile.flag = Some(flag.clone());
        }
        if let Some(description) = &self.description {
            profile.description = Some(description.clone());
        }
        Ok(())
    }
}

/// Where a preset comes from. The two kinds touch different metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetKind {
    /// Country record: sets the flag, leaves the description alone.
    Country,
    /// Persona or office template: sets the description, clears the flag.
    Template,
}

/// A complete preset supplied by an external dataset.
///
/// Applying a preset replaces the name and every score; see [`PresetKind`]
/// for how flag and description are handled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePreset {
    pub kind: PresetKind,
    pub name: String,
    #[serde(default)]
    pub flag: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub scores: Scores,
}

impl ProfilePreset {
    pub fn country(name: impl Into<String>, flag: impl Into<String>, scores: Scores) -> Self {
        Self {
            kind: PresetKind::Country,
            name: name.into(),
            flag: Some(flag.into()),
            description: None,
            scores,
        }
    }

    pub fn template(
        name: impl Into<String>,
        description: impl Into<String>,
        scores: Scores,
    ) -> Self {
        Self {
            kind: PresetKind::Template,
            name: name.into(),
            flag: None,
            description: Some(description.into()),
            scores,
        }
    }

    /// Overwrite a profile with this preset.
    pub fn apply(&self, profile: &mut Profile) {
        profile.name = Some(self.name.clone());
        profile.scores = self.scores;
        match self.kind {
            PresetKind::Country => profile.flag = self.flag.clone(),
            PresetKind::Template => {
                profile.flag = None;
                profile.description = self.description.clone();
            }
        }
    }
}
