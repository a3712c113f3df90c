//! # culture-gaps
//!
//! The gap engine. Pure, synchronous transforms over profiles and the
//! dimension catalog:
//!
//! - **pairwise**: per-dimension absolute differences between two profiles
//! - **aggregate**: min/max/gap per dimension across a profile set, tie-aware
//! - **ranking**: all unordered pairs ordered by average gap
//! - **severity**: four-band severity and colour classification
//! - **recommendations**: binary-tier recommendation lookup
//! - **action_plan**: the top actionable gaps joined to metadata and advice
//!
//! [`GapEngine`] bundles a catalog and a recommendation source behind one facade.

pub mod action_plan;
pub mod aggregate;
pub mod engine;
pub mod pairwise;
pub mod ranking;
pub mod recommendations;
pub mod report;
pub mod severity;

pub use action_plan::generate_action_plan;
pub use aggregate::{calculate_multi_profile_gaps, rank_multi_gaps};
pub use engine::GapEngine;
pub use pairwise::{calculate_gaps, largest_gap};
pub use ranking::pairwise_comparisons;
pub use recommendations::{action_recommendations, recommendation_tier, RecommendationTable};
pub use report::build_report;
pub use severity::{gap_color, gap_severity, SeverityBand, SEVERITY_BANDS};
