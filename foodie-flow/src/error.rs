//! Error types for the submission flow

use thiserror::Error;

/// Submission flow error types
///
/// Failing field rules are not errors; they come back as data in a
/// [`crate::ValidationReport`]. These variants cover host-side faults only.
#[derive(Debug, Error)]
pub enum FlowError {
    /// Form payload from the host could not be decoded
    #[error("Invalid form: {0}")]
    InvalidForm(String),

    /// Invalid flow configuration
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for flow operations
pub type FlowResult<T> = Result<T, FlowError>;
