//! # Error Types

/// Errors from bleusweep operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BleuSweepError {
    /// The BLEU order must be at least 1.
    #[error("bleu order ({order}) must be >= 1")]
    InvalidOrder {
        /// The rejected order.
        order: usize,
    },

    /// There is nothing to optimize over.
    #[error("empty input: no sentences or candidates to optimize over")]
    EmptyInput,

    /// A delta vector does not match the optimizer's order.
    #[error("delta width mismatch: expected {expected} entries, found {actual}")]
    OrderMismatch {
        /// The expected width, ``2 * order``.
        expected: usize,
        /// The width found.
        actual: usize,
    },

    /// A boundary that cannot be ordered.
    #[error("boundary at index {index} is NaN")]
    NanBoundary {
        /// The index of the offending entry.
        index: usize,
    },
}

/// Result type for bleusweep operations.
pub type BSResult<T> = core::result::Result<T, BleuSweepError>;
