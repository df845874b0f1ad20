//! Per-element formulas.
//!
//! Each function here maps one aligned pair `(ground, predicted)` to one
//! scalar; [`fold_pairwise`](crate::math::reduce::fold_pairwise) sums the
//! results into a loss. All formulas are pure and stateless.

use num_traits::Float;

/// |a - b|, the Manhattan distance of one pair.
pub fn abs_diff<T: Float>(a: T, b: T) -> T {
    (a - b).abs()
}

/// (a - b)²
pub fn sq_diff<T: Float>(a: T, b: T) -> T {
    let d = a - b;
    d * d
}

/// Huber term for a given threshold:
///   d²/2                          if d ≤ threshold
///   threshold·|d| - threshold/2   otherwise
/// where d = a - b.
///
/// The branch tests the *signed* difference, so a large negative residual
/// always takes the quadratic arm. The linear arm closes with threshold/2.
pub fn huber<T: Float>(threshold: T) -> impl Fn(T, T) -> T {
    let two = T::one() + T::one();
    move |a, b| {
        let d = a - b;
        if d <= threshold {
            d * d / two
        } else {
            threshold * d.abs() - threshold / two
        }
    }
}

/// a·ln(b) + (a - 1)·ln(1 - b). Finite only for b strictly inside (0, 1).
pub fn bce<T: Float>(a: T, b: T) -> T {
    a * b.ln() + (a - T::one()) * (T::one() - b).ln()
}

/// a·ln(b). Finite only for b > 0.
pub fn ce<T: Float>(a: T, b: T) -> T {
    a * b.ln()
}

/// a·ln(a/b). Finite only for a > 0 and b > 0.
pub fn kl<T: Float>(a: T, b: T) -> T {
    a * (a / b).ln()
}

/// max(0, 1 - a·b)
pub fn hinge<T: Float>(a: T, b: T) -> T {
    T::zero().max(T::one() - a * b)
}
