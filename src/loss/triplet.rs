use num_traits::Float;

use crate::error::LossError;
use crate::loss::l2::L2Loss;

pub struct TripletLoss;

impl TripletLoss {
    /// Triplet ranking:
    ///   max(0, L2(anchor, positive) - L2(anchor, negative) + margin)
    /// with rooted Euclidean distances in both terms.
    ///
    /// All three sequences must share one length; either pairwise distance
    /// reports the mismatch. `margin` must be finite and non-negative
    /// (documented precondition, not checked).
    pub fn loss<T: Float>(
        anchor: &[T],
        positive: &[T],
        negative: &[T],
        margin: T,
    ) -> Result<T, LossError> {
        let dist_pos = L2Loss::loss(anchor, positive)?;
        let dist_neg = L2Loss::loss(anchor, negative)?;
        Ok((dist_pos - dist_neg + margin).max(T::zero()))
    }
}
