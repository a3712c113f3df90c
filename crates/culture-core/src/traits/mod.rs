//! Seams between the engine and its collaborators.

pub mod action_planner;
pub mod recommendation_source;

pub use action_planner::IActionPlanner;
pub use recommendation_source::IRecommendationSource;
