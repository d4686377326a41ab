//! Shared sample statistics for return series.
//!
//! All estimators use the unbiased N−1 denominator so that variance,
//! covariance, and standard deviation stay mutually consistent across the
//! metric set. Degenerate input (empty, or fewer than two observations where
//! a spread is required) yields `NaN` rather than an error.

/// Arithmetic mean of a slice.
///
/// Returns `NaN` for empty input.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample variance with N−1 denominator (Bessel's correction).
///
/// Returns `NaN` for fewer than two observations.
#[must_use]
pub fn sample_variance(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (n - 1) as f64
}

/// Sample standard deviation with N−1 denominator.
///
/// Returns `NaN` for fewer than two observations.
#[must_use]
pub fn sample_std(values: &[f64]) -> f64 {
    sample_variance(values).sqrt()
}

/// Sample covariance with N−1 denominator.
///
/// Uses the same estimator convention as [`sample_variance`] so that
/// `cov(x, x) == var(x)`. Returns `NaN` if the slices differ in length or
/// hold fewer than two observations.
#[must_use]
pub fn sample_covariance(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len();
    if n != ys.len() || n < 2 {
        return f64::NAN;
    }
    let mx = mean(xs);
    let my = mean(ys);
    xs.iter()
        .zip(ys.iter())
        .map(|(x, y)| (x - mx) * (y - my))
        .sum::<f64>()
        / (n - 1) as f64
}

/// Cumulative growth factor of a fractional return series.
///
/// Computes the product of `1 + r` over all observations. Returns `NaN` for
/// empty input; an empty window has no growth to report.
#[must_use]
pub fn cumulative_growth(returns: &[f64]) -> f64 {
    if returns.is_empty() {
        return f64::NAN;
    }
    returns.iter().fold(1.0, |acc, r| acc * (1.0 + r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_basic() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn test_sample_variance() {
        // Known value: var([1..5]) with N-1 denominator is 2.5
        assert_relative_eq!(sample_variance(&[1.0, 2.0, 3.0, 4.0, 5.0]), 2.5);
        assert!(sample_variance(&[1.0]).is_nan());
        assert!(sample_variance(&[]).is_nan());
    }

    #[test]
    fn test_sample_std() {
        assert_relative_eq!(sample_std(&[1.0, 2.0, 3.0, 4.0, 5.0]), 2.5f64.sqrt());
        assert_relative_eq!(sample_std(&[3.0, 3.0, 3.0]), 0.0);
    }

    #[test]
    fn test_covariance_matches_variance() {
        let xs = [0.01, -0.02, 0.03, 0.005, -0.01];
        assert_relative_eq!(
            sample_covariance(&xs, &xs),
            sample_variance(&xs),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_covariance_degenerate() {
        assert!(sample_covariance(&[1.0], &[2.0]).is_nan());
        assert!(sample_covariance(&[1.0, 2.0], &[1.0]).is_nan());
    }

    #[test]
    fn test_cumulative_growth() {
        assert_relative_eq!(cumulative_growth(&[0.1, 0.1]), 1.21, epsilon = 1e-12);
        assert_relative_eq!(cumulative_growth(&[0.0, 0.0, 0.0]), 1.0);
        assert_relative_eq!(cumulative_growth(&[-1.0]), 0.0);
        assert!(cumulative_growth(&[]).is_nan());
    }
}
