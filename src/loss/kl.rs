use num_traits::Float;

use crate::error::LossError;
use crate::loss::terms;
use crate::math::reduce::fold_pairwise;

pub struct KlLoss;

impl KlLoss {
    /// KL divergence: sum(g·ln(g/p)). No normalization by length.
    ///
    /// Both sequences must be strictly positive elementwise; conventionally
    /// each sums to 1 (true probability distributions), but neither property
    /// is checked. Out-of-domain elements evaluate to NaN/±inf.
    pub fn loss<T: Float>(ground: &[T], predicted: &[T]) -> Result<T, LossError> {
        fold_pairwise(ground, predicted, terms::kl)
    }
}
