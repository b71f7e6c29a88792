//! Linear interpolation between closest ranks
//!
//! The conventional sample quantile (Hyndman & Fan type 7): for a sorted
//! sample of size `n`, the quantile at `p` sits at fractional position
//! `h = p·(n-1)` and is interpolated between `x[floor(h)]` and `x[ceil(h)]`.

use crate::QuantileEstimator;
use explore_core::{Error, Result};

/// Type 7 quantile estimator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearInterpolation;

impl LinearInterpolation {
    pub fn new() -> Self {
        Self
    }
}

impl QuantileEstimator for LinearInterpolation {
    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::invalid_probability(p));
        }
        let n = sorted_data.len();
        if n == 0 {
            return Err(Error::empty_input());
        }
        if n == 1 {
            return Ok(sorted_data[0]);
        }

        let h = p * (n - 1) as f64;
        let lo = h.floor() as usize;
        let hi = h.ceil() as usize;
        let fraction = h - lo as f64;

        let lower = sorted_data[lo];
        let upper = sorted_data[hi.min(n - 1)];
        // Equal infinite neighbours would give `0 * (inf - inf)`
        if fraction == 0.0 || lower == upper {
            return Ok(lower);
        }
        Ok(lower + fraction * (upper - lower))
    }
}

/// Quantile of a pre-sorted sample using linear interpolation
pub fn quantile_sorted(sorted_data: &[f64], p: f64) -> Result<f64> {
    LinearInterpolation.quantile_sorted(sorted_data, p)
}

/// First and third quartiles of a pre-sorted sample using linear interpolation
pub fn quartiles_sorted(sorted_data: &[f64]) -> Result<(f64, f64)> {
    LinearInterpolation.quartiles_sorted(sorted_data)
}

/// Median of a pre-sorted sample
pub fn median_sorted(sorted_data: &[f64]) -> Result<f64> {
    LinearInterpolation.median_sorted(sorted_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_quartiles_of_small_sample() {
        // numpy.percentile([1, 2, 3, 4, 5, 100], [25, 75]) == [2.25, 4.75]
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
        let (q1, q3) = quartiles_sorted(&data).unwrap();
        assert_relative_eq!(q1, 2.25, epsilon = 1e-12);
        assert_relative_eq!(q3, 4.75, epsilon = 1e-12);
    }

    #[test]
    fn test_infinite_order_statistics() {
        let inf = f64::INFINITY;
        let data = [1.0, 2.0, 3.0, inf, inf];
        assert_eq!(quartiles_sorted(&data).unwrap(), (2.0, inf));
        assert_eq!(quantile_sorted(&data, 0.9).unwrap(), inf);
        assert_eq!(quantile_sorted(&[-inf, -inf, 0.0], 0.25).unwrap(), -inf);
    }

    #[test]
    fn test_exact_positions() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(quantile_sorted(&data, 0.0).unwrap(), 1.0);
        assert_eq!(quantile_sorted(&data, 0.25).unwrap(), 2.0);
        assert_eq!(median_sorted(&data).unwrap(), 3.0);
        assert_eq!(quantile_sorted(&data, 1.0).unwrap(), 5.0);
    }

    #[test]
    fn test_even_median_interpolates() {
        assert_relative_eq!(median_sorted(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
    }

    #[test]
    fn test_single_value() {
        assert_eq!(quantile_sorted(&[42.0], 0.9).unwrap(), 42.0);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            quantile_sorted(&[], 0.5),
            Err(Error::InsufficientData { expected: 1, actual: 0 })
        ));
        assert!(matches!(
            quantile_sorted(&[1.0, 2.0], 1.5),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_unsorted_entry_point_sorts() {
        let mut data = vec![5.0, 1.0, 4.0, 2.0, 3.0];
        assert_eq!(LinearInterpolation.quantile(&mut data, 0.5).unwrap(), 3.0);
        assert_eq!(data, vec![1.0, 2.0, 3.0, 4.0, 5.0]);

        let mut with_nan = vec![1.0, f64::NAN];
        assert!(LinearInterpolation.quantile(&mut with_nan, 0.5).is_err());
    }

    #[test]
    fn test_quantile_of_skips_missing() {
        let sample = [Some(4.0), None, Some(1.0), Some(3.0), Some(2.0), Some(5.0)];
        assert_eq!(LinearInterpolation.quantile_of(&sample, 0.5).unwrap(), 3.0);
    }

    proptest! {
        #[test]
        fn prop_quantile_is_monotone_and_bounded(
            mut data in prop::collection::vec(-1e6f64..1e6, 1..200),
            p1 in 0.0f64..=1.0,
            p2 in 0.0f64..=1.0,
        ) {
            data.sort_by(f64::total_cmp);
            let (lo, hi) = if p1 <= p2 { (p1, p2) } else { (p2, p1) };
            let q_lo = quantile_sorted(&data, lo).unwrap();
            let q_hi = quantile_sorted(&data, hi).unwrap();
            prop_assert!(q_lo <= q_hi + 1e-9);
            prop_assert!(q_lo >= data[0] - 1e-9);
            prop_assert!(q_hi <= data[data.len() - 1] + 1e-9);
        }
    }
}
