//! Data model shared by the engine and its callers.

pub mod action;
pub mod catalog;
pub mod dimension;
pub mod gap;
pub mod palette;
pub mod profile;
pub mod report;
pub mod severity;

pub use action::ActionItem;
pub use catalog::DimensionCatalog;
pub use dimension::{Dimension, DimensionId};
pub use gap::{GapRecord, MultiGap, PairComparison, ProfileValue, RankedGap};
pub use palette::{profile_color, ProfileColor, PROFILE_PALETTE};
pub use profile::{PresetKind, Profile, ProfileId, ProfilePreset, ProfileUpdate, Scores};
pub use report::{GapReport, PlanStatus};
pub use severity::{GapSeverity, RecommendationTier};
