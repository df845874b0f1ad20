use num_traits::Float;

use crate::error::LossError;
use crate::loss::l2::L2Loss;

pub struct ContrastiveLoss;

impl ContrastiveLoss {
    /// Contrastive loss over one pair of feature vectors.
    ///
    /// With `dist` the squared Euclidean distance between the vectors:
    /// - same pair:      `dist`
    /// - different pair: `max(margin - sqrt(dist), 0)²`
    ///
    /// The similar branch uses the squared distance while the dissimilar
    /// branch hinges on the rooted distance; that asymmetry is part of the
    /// standard definition. `margin` must be finite and non-negative
    /// (documented precondition, not checked).
    pub fn loss<T: Float>(
        is_same_pair: bool,
        features_a: &[T],
        features_b: &[T],
        margin: T,
    ) -> Result<T, LossError> {
        let dist = L2Loss::squared(features_a, features_b)?;

        if is_same_pair {
            Ok(dist)
        } else {
            let hinge = (margin - dist.sqrt()).max(T::zero());
            Ok(hinge * hinge)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contrastive_identical_same_pair_is_zero() {
        let a = [0.3_f64, -0.7, 1.1];
        assert_eq!(ContrastiveLoss::loss(true, &a, &a, 2.0).unwrap(), 0.0);
    }

    #[test]
    fn test_contrastive_same_pair_is_squared_distance() {
        let a = [0.1, 1.0, 0.3, 0.5, 0.7];
        let b = [0.1, 0.3, 0.4, 0.1, 0.2];

        let loss = ContrastiveLoss::loss(true, &a, &b, 2.0).unwrap();
        assert!((loss - 0.91).abs() < 1e-12);
    }

    #[test]
    fn test_contrastive_different_pair_hinges_on_margin() {
        let a = [0.1, 1.0, 0.3, 0.5, 0.7];
        let b = [0.1, 0.3, 0.4, 0.1, 0.2];

        let loss = ContrastiveLoss::loss(false, &a, &b, 2.0).unwrap();
        let expected = (2.0 - 0.91_f64.sqrt()).powi(2);
        assert!((loss - expected).abs() < 1e-12);
    }

    #[test]
    fn test_contrastive_far_different_pair_is_zero() {
        // Distance beyond the margin contributes nothing.
        let a = [0.0_f64, 0.0];
        let b = [3.0, 4.0];
        assert_eq!(ContrastiveLoss::loss(false, &a, &b, 1.0).unwrap(), 0.0);
    }

    #[test]
    fn test_contrastive_length_mismatch() {
        assert!(ContrastiveLoss::loss(true, &[1.0_f64], &[1.0, 2.0], 0.5).is_err());
    }
}
