//! Descriptive summary of a sample

use explore_core::{sorted_observed, Error, Observation, Result};
use explore_quantile::{LinearInterpolation, QuantileEstimator};
use ordered_float::OrderedFloat;
use statrs::statistics::Statistics;
use std::collections::BTreeMap;
use std::fmt;

/// Location and spread of the observed values of a sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Number of observed (non-missing) values
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (`n - 1` denominator); `NaN` for one value
    pub std_dev: f64,
    pub median: f64,
    /// Smallest of the most frequent values
    pub mode: f64,
    pub q1: f64,
    pub q3: f64,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    /// Summarize a sample; missing entries are ignored
    pub fn from_sample<T: Observation>(sample: &[T]) -> Result<Self> {
        Self::from_sorted(&sorted_observed(sample))
    }

    /// Summarize pre-sorted, missing-free data
    pub fn from_sorted(sorted_data: &[f64]) -> Result<Self> {
        let (Some(&min), Some(&max)) = (sorted_data.first(), sorted_data.last()) else {
            return Err(Error::empty_input());
        };
        let estimator = LinearInterpolation;
        let (q1, q3) = estimator.quartiles_sorted(sorted_data)?;
        let median = estimator.median_sorted(sorted_data)?;

        Ok(Self {
            count: sorted_data.len(),
            mean: sorted_data.iter().mean(),
            std_dev: sorted_data.iter().std_dev(),
            median,
            mode: mode_of(sorted_data).unwrap_or(min),
            q1,
            q3,
            min,
            max,
        })
    }

    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "count  {}", self.count)?;
        writeln!(f, "mean   {:.4}", self.mean)?;
        writeln!(f, "std    {:.4}", self.std_dev)?;
        writeln!(f, "min    {:.4}", self.min)?;
        writeln!(f, "25%    {:.4}", self.q1)?;
        writeln!(f, "50%    {:.4}", self.median)?;
        writeln!(f, "75%    {:.4}", self.q3)?;
        writeln!(f, "max    {:.4}", self.max)?;
        write!(f, "mode   {:.4}", self.mode)
    }
}

/// Smallest of the most frequent values, `None` for empty data
pub fn mode_of(data: &[f64]) -> Option<f64> {
    let mut counts: BTreeMap<OrderedFloat<f64>, usize> = BTreeMap::new();
    for &x in data.iter().filter(|x| !x.is_nan()) {
        *counts.entry(OrderedFloat(x)).or_insert(0) += 1;
    }
    let best = counts.values().copied().max()?;
    // BTreeMap iterates ascending, so the first hit is the smallest key
    counts
        .into_iter()
        .find(|&(_, c)| c == best)
        .map(|(k, _)| k.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_summary_basic() {
        let s = Summary::from_sample(&[3.0, 1.0, 2.0, 2.0, 5.0, f64::NAN]).unwrap();
        assert_eq!(s.count, 5);
        assert_relative_eq!(s.mean, 2.6, epsilon = 1e-12);
        assert_relative_eq!(s.median, 2.0);
        assert_relative_eq!(s.mode, 2.0);
        assert_relative_eq!(s.q1, 2.0);
        assert_relative_eq!(s.q3, 3.0);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 5.0);
        assert_relative_eq!(s.std_dev, 1.5165750888103102, epsilon = 1e-12);
    }

    #[test]
    fn test_mode_ties_pick_smallest() {
        assert_eq!(mode_of(&[4.0, 1.0, 4.0, 1.0, 9.0]), Some(1.0));
        assert_eq!(mode_of(&[7.0, 3.0]), Some(3.0));
        assert_eq!(mode_of(&[]), None);
    }

    #[test]
    fn test_empty_sample_fails() {
        assert!(Summary::from_sample::<f64>(&[]).is_err());
        assert!(Summary::from_sample(&[None::<i32>]).is_err());
    }

    #[test]
    fn test_integer_sample() {
        let s = Summary::from_sample(&[1u8, 2, 3, 4]).unwrap();
        assert_relative_eq!(s.median, 2.5);
        assert_relative_eq!(s.iqr(), 1.5);
        assert_relative_eq!(s.range(), 3.0);
    }
}
