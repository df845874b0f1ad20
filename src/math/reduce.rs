use num_traits::Float;

use crate::error::LossError;

/// Applies `f` to each aligned pair of `ground` and `predicted` and folds the
/// per-pair results with `+`, starting from zero.
///
/// Every pairwise loss in this crate is one per-element formula composed with
/// this fold. Accumulation is a plain left-to-right sum in the precision of
/// `T`; catastrophic cancellation is not mitigated.
///
/// # Errors
/// Returns [`LossError::LengthMismatch`] if the sequences differ in length.
pub fn fold_pairwise<T, F>(ground: &[T], predicted: &[T], f: F) -> Result<T, LossError>
where
    T: Float,
    F: Fn(T, T) -> T,
{
    if ground.len() != predicted.len() {
        return Err(LossError::LengthMismatch {
            expected: ground.len(),
            actual: predicted.len(),
        });
    }

    Ok(ground
        .iter()
        .zip(predicted.iter())
        .fold(T::zero(), |acc, (&g, &p)| acc + f(g, p)))
}
