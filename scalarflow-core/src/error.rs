use thiserror::Error;

/// Custom error type for the scalarflow engine and its network layers.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalarFlowError {
    #[error("Shape mismatch: expected {expected} inputs, got {actual} during operation {operation}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Non-numeric operand: {0:?} cannot be promoted to a scalar node")]
    NonNumericOperand(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Cannot train on an empty dataset")]
    EmptyDataset,
}

impl ScalarFlowError {
    /// Shorthand for an arity check failure inside `operation`.
    pub(crate) fn shape_mismatch(expected: usize, actual: usize, operation: &str) -> Self {
        ScalarFlowError::ShapeMismatch {
            expected,
            actual,
            operation: operation.to_string(),
        }
    }
}
