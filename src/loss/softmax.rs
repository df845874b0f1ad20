use num_traits::Float;

/// Normalizes a sequence into a probability distribution:
/// `out[i] = exp(x[i]) / sum(exp(x))`.
///
/// The maximum element is subtracted before exponentiating so large inputs
/// do not overflow; the result is mathematically identical to the plain
/// definition. For any finite input, every output element lies in (0, 1)
/// and the outputs sum to 1 up to rounding. An empty input yields an empty
/// output.
pub fn softmax<T: Float>(values: &[T]) -> Vec<T> {
    if values.is_empty() {
        return Vec::new();
    }

    let max = values.iter().copied().fold(T::neg_infinity(), T::max);
    let exps: Vec<T> = values.iter().map(|&v| (v - max).exp()).collect();
    let sum = exps.iter().fold(T::zero(), |acc, &e| acc + e);

    exps.into_iter().map(|e| e / sum).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: &[f64], b: &[f64], tol: f64) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < tol)
    }

    #[test]
    fn test_softmax_uniform() {
        // Softmax of equal values is a uniform distribution.
        let out = softmax(&[1.0, 1.0, 1.0, 1.0]);
        assert!(approx_eq(&out, &[0.25, 0.25, 0.25, 0.25], 1e-12));
    }

    #[test]
    fn test_softmax_sums_to_one() {
        let out = softmax(&[0.1, 0.3, 0.4, 0.1, 0.2]);
        let sum: f64 = out.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert!(out.iter().all(|&x| x > 0.0 && x < 1.0));
    }

    #[test]
    fn test_softmax_sample_vector() {
        let out = softmax(&[0.1, 0.3, 0.4, 0.1, 0.2]);
        let expected = [
            0.17616698566429229,
            0.21517084218712967,
            0.2378005572030604,
            0.17616698566429229,
            0.19469462928122533,
        ];
        assert!(approx_eq(&out, &expected, 1e-12));
    }

    #[test]
    fn test_softmax_monotonic() {
        // Larger input, larger output.
        let out = softmax(&[1.0, 2.0, 3.0]);
        assert!(out[0] < out[1]);
        assert!(out[1] < out[2]);
    }

    #[test]
    fn test_softmax_numerical_stability() {
        // Values that would overflow exp() without the max subtraction.
        let out = softmax(&[1000.0_f64, 1001.0, 1002.0]);
        let sum: f64 = out.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert!(out.iter().all(|&x| x.is_finite()));
    }

    #[test]
    fn test_softmax_empty_input() {
        let out: Vec<f64> = softmax(&[]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_softmax_f32() {
        let out = softmax(&[0.5_f32, -0.5]);
        let sum: f32 = out.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }
}
