use num_traits::Float;

use crate::error::LossError;
use crate::loss::terms;
use crate::math::reduce::fold_pairwise;

pub struct BceLoss;

impl BceLoss {
    /// Scalar BCE: -mean(g·ln(p) + (g - 1)·ln(1 - p))
    ///
    /// Every `predicted[i]` must lie strictly inside (0, 1); values on or
    /// outside the boundary evaluate to NaN or ±inf. No epsilon clamping is
    /// applied. `ground` is conventionally in {0, 1} but not enforced.
    pub fn loss<T: Float>(ground: &[T], predicted: &[T]) -> Result<T, LossError> {
        let sum = fold_pairwise(ground, predicted, terms::bce)?;
        let n = T::from(ground.len()).unwrap();
        Ok(-sum / n)
    }
}
