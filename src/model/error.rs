use thiserror::Error;

/// Fatal conditions that abort a scoring pass before any result exists.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopsisError {
    #[error("shape mismatch: expected {expected} {what}, found {found}")]
    ShapeMismatch {
        what: String,
        expected: usize,
        found: usize,
    },
    #[error("non-numeric value {value:?} in row {row}, column {column:?}")]
    NonNumericValue {
        row: usize,
        column: String,
        value: String,
    },
    #[error("invalid impact {token:?} at position {position} (use '+' or '-')")]
    InvalidImpact { position: usize, token: String },
    #[error("invalid weight {token:?} at position {position} (weights must be positive numbers)")]
    InvalidWeight { position: usize, token: String },
    #[error("degenerate column {column:?}: every value is zero")]
    DegenerateColumn { column: String },
    #[error("decision matrix has no alternatives")]
    EmptyMatrix,
    #[error("input must contain three or more columns (identifier plus criteria), found {found}")]
    TooFewColumns { found: usize },
}
