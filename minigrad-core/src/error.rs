use thiserror::Error;

/// Custom error type for the minigrad framework.
///
/// Every fallible operation is checked before its output node is allocated,
/// so an error never leaves a half-built node reachable from the graph.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum MinigradError {
    #[error("Invalid activation '{name}'. Accepted values: {accepted}")]
    InvalidActivation { name: String, accepted: String },

    #[error("Invalid reduction '{name}'. Should be one of \"mean\", \"sum\"")]
    InvalidReduction { name: String },

    #[error("Invalid exponent for operation {operation}: {reason}")]
    InvalidExponent { operation: String, reason: String },

    #[error("Domain error in operation {operation}: input {value} is outside the domain")]
    DomainError { operation: String, value: f64 },

    #[error("Length mismatch: expected {expected}, got {actual} during operation {operation}")]
    LengthMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Operation {operation} received an empty input")]
    EmptyInput { operation: String },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}
