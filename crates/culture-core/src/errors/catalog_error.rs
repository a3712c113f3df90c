use crate::models::DimensionId;

/// Dimension catalog validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog must define {expected} dimensions, found {actual}")]
    WrongSize { expected: usize, actual: usize },

    #[error("dimension {dimension} is defined more than once")]
    DuplicateDimension { dimension: DimensionId },

    #[error("catalog position {position} holds {actual}, expected {expected}")]
    OutOfOrder {
        position: usize,
        expected: DimensionId,
        actual: DimensionId,
    },

    #[error("catalog parse error: {message}")]
    ParseError { message: String },
}
