//! In-memory working set of profiles, with the profile manager's editing rules.
//!
//! Every lookup goes through the profile id. Nothing here persists.

use crate::config::ProfileConfig;
use crate::errors::ProfileError;
use crate::models::{
    profile_color, Profile, ProfileColor, ProfileId, ProfilePreset, ProfileUpdate, Scores,
};

/// Ordered, id-keyed collection of between one and `max_profiles` profiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSet {
    profiles: Vec<Profile>,
    max_profiles: usize,
    default_scores: Scores,
}

impl ProfileSet {
    /// A set holding one default profile, `Profile 1`.
    pub fn new(config: &ProfileConfig) -> Result<Self, ProfileError> {
        let default_scores = Scores::uniform(config.default_score)?;
        Ok(Self {
            profiles: vec![Profile::new(ProfileId(1), "Profile 1", default_scores)],
            max_profiles: config.max_profiles.max(1),
            default_scores,
        })
    }

    /// Restore a previously saved set. Ids must be unique and the set non-empty.
    pub fn from_profiles(
        profiles: Vec<Profile>,
        config: &ProfileConfig,
    ) -> Result<Self, ProfileError> {
        let mut set = Self::new(config)?;
        if profiles.is_empty() {
            return Ok(set);
        }
        if profiles.len() > set.max_profiles {
            return Err(ProfileError::CapacityReached {
                max: set.max_profiles,
            });
        }
        set.profiles.clear();
        for profile in profiles {
            if set.contains(profile.id) {
                return Err(ProfileError::DuplicateId { id: profile.id });
            }
            set.profiles.push(profile);
        }
        Ok(set)
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn max_profiles(&self) -> usize {
        self.max_profiles
    }

    pub fn is_full(&self) -> bool {
        self.profiles.len() >= self.max_profiles
    }

    pub fn contains(&self, id: ProfileId) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: ProfileId) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    /// Display colour of a profile, by its position in the set.
    pub fn color_of(&self, id: ProfileId) -> Option<&'static ProfileColor> {
        self.position(id).map(profile_color)
    }

    /// The first two profiles, for two-party comparisons.
    pub fn first_pair(&self) -> (Option<&Profile>, Option<&Profile>) {
        (self.profiles.first(), self.profiles.get(1))
    }

    /// Append a default profile with the next free id.
    pub fn add(&mut self) -> Result<ProfileId, ProfileError> {
        if self.is_full() {
            return Err(ProfileError::CapacityReached {
                max: self.max_profiles,
            });
        }
        let last = self.profiles.iter().map(|p| p.id).max().unwrap_or(ProfileId(0));
        let id = last
            .0
            .checked_add(1)
            .map(ProfileId)
            .ok_or(ProfileError::IdsExhausted { last })?;
        self.profiles
            .push(Profile::new(id, format!("Profile {id}"), self.default_scores));
        tracing::debug!(%id, count = self.profiles.len(), "profile added");
        Ok(id)
    }

    /// Remove a profile. The last remaining profile cannot be removed.
    pub fn remove(&mut self, id: ProfileId) -> Result<Profile, ProfileError> {
        let index = self.position(id).ok_or(ProfileError::NotFound { id })?;
        if self.profiles.len() <= 1 {
            return Err(ProfileError::LastProfile);
        }
        Ok(self.profiles.remove(index))
    }

    /// Apply a partial edit.
    pub fn update(&mut self, id: ProfileId, update: &ProfileUpdate) -> Result<(), ProfileError> {
        let profile = self.get_mut(id)?;
        update.apply(profile)
    }

    /// Overwrite name and scores from an external preset, plus the metadata its kind owns.
    pub fn apply_preset(
        &mut self,
        id: ProfileId,
        preset: &ProfilePreset,
    ) -> Result<(), ProfileError> {
        preset.apply(self.get_mut(id)?);
        Ok(())
    }

    /// Restore default scores, keeping the name and clearing flag and description.
    pub fn reset(&mut self, id: ProfileId) -> Result<(), ProfileError> {
        let default_scores = self.default_scores;
        let profile = self.get_mut(id)?;
        profile.scores = default_scores;
        profile.flag = None;
        profile.description = None;
        Ok(())
    }

    fn position(&self, id: ProfileId) -> Option<usize> {
        self.profiles.iter().position(|p| p.id == id)
    }

    fn get_mut(&mut self, id: ProfileId) -> Result<&mut Profile, ProfileError> {
        self.profiles
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ProfileError::NotFound { id })
    }
}

impl Default for ProfileSet {
    fn default() -> Self {
        let default_scores = Scores::neutral();
        Self {
            profiles: vec![Profile::new(ProfileId(1), "Profile 1", default_scores)],
            max_profiles: crate::config::defaults::DEFAULT_MAX_PROFILES,
            default_scores,
        }
    }
}
