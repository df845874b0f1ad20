//! Error types for pairwise sequence operations.

/// Errors raised when two sequences cannot be combined.
///
/// Out-of-domain *values* (a probability outside (0, 1) fed into a log-based
/// loss, a non-positive input to KL divergence) are not errors: the formulas
/// evaluate them as written and the result is NaN or infinite. Only
/// structural misuse of the API is reported here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LossError {
    /// The two input sequences differ in length. Nothing is truncated or
    /// padded; the operation fails before any arithmetic.
    #[error("length mismatch: {expected} elements vs {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}
