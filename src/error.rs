//! Error types for the ontime-analytics library.

use thiserror::Error;

/// Result type alias for analytics operations.
pub type Result<T> = std::result::Result<T, AnalyticsError>;

/// Errors that can occur during on-time-performance analysis.
///
/// Every variant is a caller precondition violation, detected eagerly at
/// the start of the offending operation. There is no transient or
/// retryable class; errors propagate through the pipeline unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
