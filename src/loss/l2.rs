use num_traits::Float;

use crate::error::LossError;
use crate::loss::terms;
use crate::math::reduce::fold_pairwise;

pub struct L2Loss;

impl L2Loss {
    /// Euclidean L2: sqrt(sum((ground - predicted)²)). Non-negative by
    /// construction.
    pub fn loss<T: Float>(ground: &[T], predicted: &[T]) -> Result<T, LossError> {
        Ok(Self::squared(ground, predicted)?.sqrt())
    }

    /// Squared Euclidean distance: the sum of squared differences without
    /// the closing square root. The metric-learning losses build on this.
    pub fn squared<T: Float>(ground: &[T], predicted: &[T]) -> Result<T, LossError> {
        fold_pairwise(ground, predicted, terms::sq_diff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_l2_sample_vectors() {
        let ground = [0.1, 1.0, 0.3, 0.5, 0.7];
        let predicted = [0.1, 0.3, 0.4, 0.1, 0.2];

        let l2 = L2Loss::loss(&ground, &predicted).unwrap();
        assert!((l2 - 0.91_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_l2_of_identical_sequences_is_zero() {
        let a = [0.25_f64, -1.5, 3.0];
        assert_eq!(L2Loss::loss(&a, &a).unwrap(), 0.0);
    }

    #[test]
    fn test_l2_symmetry_and_non_negativity() {
        let a = [1.0_f64, -2.0, 3.5];
        let b = [0.5, 2.0, -1.0];

        let ab = L2Loss::loss(&a, &b).unwrap();
        let ba = L2Loss::loss(&b, &a).unwrap();
        assert_eq!(ab, ba);
        assert!(ab >= 0.0);
    }

    #[test]
    fn test_squared_skips_the_root() {
        let a = [0.0_f64, 0.0];
        let b = [3.0, 4.0];
        assert_eq!(L2Loss::squared(&a, &b).unwrap(), 25.0);
        assert_eq!(L2Loss::loss(&a, &b).unwrap(), 5.0);
    }
}
