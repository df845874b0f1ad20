use num_traits::Float;

use crate::error::LossError;
use crate::loss::terms;
use crate::math::reduce::fold_pairwise;

pub struct L1Loss;

impl L1Loss {
    /// Scalar L1: sum(|ground - predicted|). No normalization by length.
    pub fn loss<T: Float>(ground: &[T], predicted: &[T]) -> Result<T, LossError> {
        fold_pairwise(ground, predicted, terms::abs_diff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_l1_sample_vectors() {
        let ground = [0.1, 1.0, 0.3, 0.5, 0.7];
        let predicted = [0.1, 0.3, 0.4, 0.1, 0.2];

        let l1 = L1Loss::loss(&ground, &predicted).unwrap();
        assert!((l1 - 1.7).abs() < 1e-12);
    }

    #[test]
    fn test_l1_symmetry() {
        let a = [1.0_f64, -2.0, 3.5];
        let b = [0.5, 2.0, -1.0];

        assert_eq!(
            L1Loss::loss(&a, &b).unwrap(),
            L1Loss::loss(&b, &a).unwrap()
        );
    }

    #[test]
    fn test_l1_length_mismatch() {
        let a = [1.0_f64, 2.0];
        let b = [1.0_f64];
        assert!(L1Loss::loss(&a, &b).is_err());
    }
}
