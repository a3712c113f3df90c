use crate::models::{DimensionId, ProfileId};

/// Profile construction and working-set errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("profile is missing a value for dimension {dimension}")]
    MissingDimension { dimension: DimensionId },

    #[error("unknown dimension: {name}")]
    UnknownDimension { name: String },

    #[error("score {value} for dimension {dimension} is outside 0..=100")]
    ScoreOutOfRange { dimension: DimensionId, value: u32 },

    #[error("profile {id} not found")]
    NotFound { id: ProfileId },

    #[error("profile {id} already exists")]
    DuplicateId { id: ProfileId },

    #[error("profile limit reached: at most {max} profiles")]
    CapacityReached { max: usize },

    #[error("cannot remove the last remaining profile")]
    LastProfile,

    #[error("no profile id left after {last}")]
    IdsExhausted { last: ProfileId },
}
