use num_traits::Float;

use crate::error::LossError;
use crate::loss::terms;
use crate::math::reduce::fold_pairwise;

pub struct CrossEntropyLoss;

impl CrossEntropyLoss {
    /// Scalar cross-entropy: -mean(g·ln(p))
    ///
    /// `predicted` carries probabilities, conventionally the output of
    /// [`softmax`](crate::loss::softmax::softmax); each element must be
    /// strictly positive or the corresponding term is NaN/-inf. No epsilon
    /// clamping is applied.
    pub fn loss<T: Float>(ground: &[T], predicted: &[T]) -> Result<T, LossError> {
        let sum = fold_pairwise(ground, predicted, terms::ce)?;
        let n = T::from(ground.len()).unwrap();
        Ok(-sum / n)
    }
}
