use num_traits::Float;

use crate::error::LossError;
use crate::loss::terms;
use crate::math::reduce::fold_pairwise;

pub struct HingeLoss;

impl HingeLoss {
    /// Hinge loss: sum(max(0, 1 - g·p)). `ground` is conventionally the
    /// class label in {-1, +1}.
    pub fn loss<T: Float>(ground: &[T], predicted: &[T]) -> Result<T, LossError> {
        fold_pairwise(ground, predicted, terms::hinge)
    }
}
