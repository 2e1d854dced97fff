/// Sample Pearson correlation coefficient between two price series.
///
/// Policy for degenerate input, so that a non-finite value never leaks into
/// a response payload:
/// - mismatched lengths or empty series yield `0.0`;
/// - a constant series (zero variance on either side) yields `0.0`.
///
/// For well-formed input the result is mathematically bounded to [-1, 1].
/// Single pass over the data, O(n) time, O(1) extra space.
pub fn pearson(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len();
    if n != b.len() || n == 0 {
        return 0.0;
    }

    let mean_a: f64 = a.iter().sum::<f64>() / n as f64;
    let mean_b: f64 = b.iter().sum::<f64>() / n as f64;

    let mut covariance = 0.0;
    let mut variance_a = 0.0;
    let mut variance_b = 0.0;

    for i in 0..n {
        let diff_a = a[i] - mean_a;
        let diff_b = b[i] - mean_b;
        covariance += diff_a * diff_b;
        variance_a += diff_a * diff_a;
        variance_b += diff_b * diff_b;
    }

    let denominator = (variance_a * variance_b).sqrt();
    if denominator == 0.0 {
        return 0.0;
    }

    covariance / denominator
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn mismatched_lengths_yield_zero() {
        assert_eq!(pearson(&[1.0, 2.0, 3.0], &[1.0, 2.0]), 0.0);
    }

    #[test]
    fn empty_series_yield_zero() {
        assert_eq!(pearson(&[], &[]), 0.0);
    }

    #[test]
    fn identical_series_correlate_to_one() {
        let a = [101.5, 99.2, 104.8, 97.3, 102.0];
        assert!((pearson(&a, &a) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn sign_inverted_series_correlate_to_minus_one() {
        let a = [101.5, 99.2, 104.8, 97.3, 102.0];
        let neg: Vec<f64> = a.iter().map(|x| -x).collect();
        assert!((pearson(&a, &neg) + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn perfectly_linear_series() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [2.0, 4.0, 6.0, 8.0, 10.0];
        assert!((pearson(&a, &b) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn perfectly_anti_linear_series() {
        let a = [1.0, 2.0, 3.0];
        let b = [3.0, 2.0, 1.0];
        assert!((pearson(&a, &b) + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn correlation_is_symmetric() {
        let a = [140.2, 141.9, 139.5, 143.1, 144.0, 142.2];
        let b = [310.0, 312.4, 309.1, 314.9, 313.2, 311.8];
        assert_eq!(pearson(&a, &b), pearson(&b, &a));
    }

    #[test]
    fn constant_series_yield_zero_instead_of_nan() {
        let constant = [5.0, 5.0, 5.0, 5.0];
        let varying = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(pearson(&constant, &varying), 0.0);
        assert_eq!(pearson(&varying, &constant), 0.0);
        assert_eq!(pearson(&constant, &constant), 0.0);
    }
}
