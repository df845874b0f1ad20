use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::error::LossError;
use crate::loss::{
    bce::BceLoss, cross_entropy::CrossEntropyLoss, hinge::HingeLoss, huber::HuberLoss,
    kl::KlLoss, l1::L1Loss, l2::L2Loss,
};

/// Selects which two-sequence loss to apply.
///
/// - `L1`                 - sum of absolute differences.
/// - `L2`                 - Euclidean distance.
/// - `Huber`              - piecewise quadratic/linear with the stored threshold.
/// - `BinaryCrossEntropy` - -mean of log-loss terms; predictions in (0, 1).
/// - `CrossEntropy`       - -mean of g·ln(p); predictions strictly positive.
/// - `KlDivergence`       - sum of g·ln(g/p); both inputs strictly positive.
/// - `Hinge`              - sum of max(0, 1 - g·p); ground in {-1, +1}.
///
/// The contrastive and triplet-ranking losses take a pair flag or a third
/// sequence and are called directly rather than through this enum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossType<T> {
    L1,
    L2,
    Huber { threshold: T },
    BinaryCrossEntropy,
    CrossEntropy,
    KlDivergence,
    Hinge,
}

impl<T: Float> LossType<T> {
    /// Computes the selected loss over the two sequences.
    pub fn compute(&self, ground: &[T], predicted: &[T]) -> Result<T, LossError> {
        match *self {
            LossType::L1 => L1Loss::loss(ground, predicted),
            LossType::L2 => L2Loss::loss(ground, predicted),
            LossType::Huber { threshold } => HuberLoss::loss(ground, predicted, threshold),
            LossType::BinaryCrossEntropy => BceLoss::loss(ground, predicted),
            LossType::CrossEntropy => CrossEntropyLoss::loss(ground, predicted),
            LossType::KlDivergence => KlLoss::loss(ground, predicted),
            LossType::Hinge => HingeLoss::loss(ground, predicted),
        }
    }
}
