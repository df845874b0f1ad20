use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Scalar activation and gating functions.
///
/// Every variant is applied one element at a time via [`apply`]; mapping an
/// activation over a sequence is the caller's job, this library never does it.
/// `Glu` and `Swish` are two names for the same formula `z·sigmoid(z)`; both
/// are kept because both are in common use.
///
/// [`apply`]: ActivationFunction::apply
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationFunction<T> {
    Sigmoid,
    Tanh,
    Relu,
    /// Parametric ReLU: negative inputs are scaled by `alpha` instead of
    /// being zeroed.
    PRelu { alpha: T },
    /// Exponential linear unit: `alpha·(e^z - 1)` for negative inputs.
    Elu { alpha: T },
    Glu,
    Swish,
    /// `ln(1 + e^(z·beta)) / beta`; sharpens toward ReLU as `beta` grows.
    Softplus { beta: T },
    Mish,
}

impl<T: Float> ActivationFunction<T> {
    /// Applies the activation to one scalar.
    pub fn apply(&self, z: T) -> T {
        match *self {
            ActivationFunction::Sigmoid => sigmoid(z),
            ActivationFunction::Tanh => z.tanh(),
            ActivationFunction::Relu => T::zero().max(z),
            ActivationFunction::PRelu { alpha } => {
                if z > T::zero() {
                    z
                } else {
                    alpha * z
                }
            }
            ActivationFunction::Elu { alpha } => {
                if z > T::zero() {
                    z
                } else {
                    alpha * (z.exp() - T::one())
                }
            }
            ActivationFunction::Glu | ActivationFunction::Swish => z * sigmoid(z),
            ActivationFunction::Softplus { beta } => softplus(z, beta),
            ActivationFunction::Mish => z * softplus(z, T::one()).tanh(),
        }
    }
}

fn sigmoid<T: Float>(z: T) -> T {
    T::one() / (T::one() + (-z).exp())
}

fn softplus<T: Float>(z: T, beta: T) -> T {
    (T::one() + (z * beta).exp()).ln() / beta
}
