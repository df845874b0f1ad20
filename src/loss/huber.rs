use num_traits::Float;

use crate::error::LossError;
use crate::loss::terms;
use crate::math::reduce::fold_pairwise;

pub struct HuberLoss;

impl HuberLoss {
    /// Scalar Huber: sum(h(ground - predicted)) where
    ///   h(d) = d²/2                          if d ≤ threshold
    ///          threshold·|d| - threshold/2   otherwise
    ///
    /// `threshold` must be finite and non-negative; this is a documented
    /// precondition, not a runtime check. The branch compares the signed
    /// difference against the threshold (see [`terms::huber`]), so negative
    /// residuals are always scored quadratically.
    pub fn loss<T: Float>(ground: &[T], predicted: &[T], threshold: T) -> Result<T, LossError> {
        fold_pairwise(ground, predicted, terms::huber(threshold))
    }
}
