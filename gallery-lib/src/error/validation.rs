//! Validation error types

/// User input rejected before any fetch is issued.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The bulk selection count was zero or negative.
    #[error("Please enter a valid number")]
    InvalidCount {
        /// The value the user submitted.
        requested: i64,
    },
}
