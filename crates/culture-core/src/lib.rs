//! # culture-core
//!
//! Foundation crate for the cross-cultural gap engine.
//! Defines the dimension catalog, profile and gap types, errors, config,
//! constants, traits, and tracing setup. `culture-gaps` depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod profile_set;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::CultureConfig;
pub use errors::{CultureError, CultureResult};
pub use models::{
    ActionItem, Dimension, DimensionCatalog, DimensionId, GapRecord, GapSeverity, MultiGap,
    PairComparison, Profile, ProfileId, Scores,
};
pub use profile_set::ProfileSet;
