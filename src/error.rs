//! Error types for metric computation

use thiserror::Error;

/// Metric computation errors
#[derive(Debug, Error)]
pub enum MetricsError {
    /// True and predicted sequences must be the same length.
    #[error("length mismatch: y_true has {expected} elements but y_pred has {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A metric@k truncation depth exceeded the available sequence length.
    #[error("truncation depth k={k} exceeds sequence length {len}")]
    InvalidTruncation { k: usize, len: usize },

    /// A derived ratio had a zero denominator.
    ///
    /// Never coerced to 0, NaN, or infinity; the caller decides how to
    /// handle the affected class or score.
    #[error("{ratio} is undefined for {subject}: denominator is zero")]
    UndefinedRatio {
        ratio: &'static str,
        subject: String,
    },

    /// Statistics were requested from a tally with no observations.
    #[error("confusion tally is empty: record observations before deriving statistics")]
    MissingConfusionData,

    /// A one-hot row's width did not match the label index.
    #[error("one-hot row {row} has {width} columns but the label index has {expected} entries")]
    EncodingWidthMismatch {
        row: usize,
        width: usize,
        expected: usize,
    },
}

/// Result type for metric operations
pub type Result<T> = std::result::Result<T, MetricsError>;
