//! Error types for parsing model values from user input.

use thiserror::Error;

/// Errors produced when turning user-facing strings into model values.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModelError {
    /// Sort field name is not one of the supported columns.
    #[error("unknown sort field: {0}")]
    UnknownSortField(String),

    /// Sort order is neither `asc` nor `desc`.
    #[error("unknown sort order: {0}")]
    UnknownSortOrder(String),

    /// Filter group name does not match any multi-select filter.
    #[error("unknown filter group: {0}")]
    UnknownFilterGroup(String),

    /// Date is not in `YYYY-MM-DD` form.
    #[error("invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),
}

/// Result type alias for model parsing.
pub type Result<T> = std::result::Result<T, ModelError>;
