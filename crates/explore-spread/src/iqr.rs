//! Interquartile range (IQR) fences
//!
//! The fences `[Q1 - k·IQR, Q3 + k·IQR]` bound both the outlier trimmer and
//! the boxplot whiskers.

use explore_core::{sorted_observed, validate_whisker_width, Error, Observation, Result};
use explore_quantile::{LinearInterpolation, QuantileEstimator};
use std::fmt;

/// Quartiles of a sample and the fences derived from them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IqrFences {
    /// First quartile
    pub q1: f64,
    /// Third quartile
    pub q3: f64,
    /// `q3 - q1`
    pub iqr: f64,
    /// Whisker width the fences were built with
    pub whisker_width: f64,
    /// `q1 - whisker_width·iqr`
    pub lower: f64,
    /// `q3 + whisker_width·iqr`
    pub upper: f64,
}

impl IqrFences {
    /// Fences from quartiles already computed
    pub fn from_quartiles(q1: f64, q3: f64, whisker_width: f64) -> Result<Self> {
        validate_whisker_width(whisker_width)?;
        let iqr = q3 - q1;
        // A zero width must not turn an infinite IQR into NaN
        let reach = if whisker_width == 0.0 { 0.0 } else { whisker_width * iqr };
        Ok(Self {
            q1,
            q3,
            iqr,
            whisker_width,
            lower: q1 - reach,
            upper: q3 + reach,
        })
    }

    /// Fences of pre-sorted, missing-free data using the given quantile estimator
    pub fn from_sorted_with<Q: QuantileEstimator>(
        sorted_data: &[f64],
        whisker_width: f64,
        estimator: &Q,
    ) -> Result<Self> {
        validate_whisker_width(whisker_width)?;
        if sorted_data.is_empty() {
            return Err(Error::empty_input());
        }
        let (q1, q3) = estimator.quartiles_sorted(sorted_data)?;
        Self::from_quartiles(q1, q3, whisker_width)
    }

    /// Fences of pre-sorted data using linear interpolation
    pub fn from_sorted(sorted_data: &[f64], whisker_width: f64) -> Result<Self> {
        Self::from_sorted_with(sorted_data, whisker_width, &LinearInterpolation)
    }

    /// Fences of any sample; missing entries are ignored
    pub fn from_sample<T: Observation>(sample: &[T], whisker_width: f64) -> Result<Self> {
        Self::from_sorted(&sorted_observed(sample), whisker_width)
    }

    /// Whether a value lies inside the fences (inclusive)
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Whether a value lies inside the quartile box (inclusive)
    #[inline]
    pub fn in_box(&self, value: f64) -> bool {
        value >= self.q1 && value <= self.q3
    }
}

impl fmt::Display for IqrFences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Q1={:.3}, Q3={:.3}, IQR={:.3}, fences=[{:.3}, {:.3}]",
            self.q1, self.q3, self.iqr, self.lower, self.upper
        )
    }
}

/// Interquartile range of a sample; missing entries are ignored
pub fn iqr<T: Observation>(sample: &[T]) -> Result<f64> {
    let sorted = sorted_observed(sample);
    let (q1, q3) = LinearInterpolation.quartiles_sorted(&sorted)?;
    Ok(q3 - q1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fences_basic() {
        let fences = IqrFences::from_sample(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0], 1.5).unwrap();
        assert_relative_eq!(fences.q1, 2.25);
        assert_relative_eq!(fences.q3, 4.75);
        assert_relative_eq!(fences.iqr, 2.5);
        assert_relative_eq!(fences.lower, -1.5);
        assert_relative_eq!(fences.upper, 8.5);
        assert!(fences.contains(8.5));
        assert!(!fences.contains(100.0));
    }

    #[test]
    fn test_zero_width_fences_equal_box() {
        let fences = IqrFences::from_sample(&[1.0, 2.0, 3.0, 4.0, 5.0], 0.0).unwrap();
        assert_eq!(fences.lower, fences.q1);
        assert_eq!(fences.upper, fences.q3);
    }

    #[test]
    fn test_negative_width_rejected() {
        let err = IqrFences::from_sample(&[1.0, 2.0], -0.5).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_empty_sample() {
        let err = IqrFences::from_sample::<f64>(&[], 1.5).unwrap_err();
        assert!(matches!(err, Error::InsufficientData { .. }));
        assert!(IqrFences::from_sample(&[f64::NAN], 1.5).is_err());
    }

    #[test]
    fn test_iqr_ignores_missing() {
        let sample = [Some(1.0), None, Some(2.0), Some(3.0), Some(4.0), Some(5.0)];
        assert_relative_eq!(iqr(&sample).unwrap(), 2.0);
    }
}
