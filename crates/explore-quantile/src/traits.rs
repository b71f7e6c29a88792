//! Core trait for quantile estimation

use explore_core::{sorted_observed, Error, Observation, Result};

/// Trait for quantile estimators over order statistics
pub trait QuantileEstimator {
    /// Estimate a single quantile from pre-sorted, missing-free data
    ///
    /// # Arguments
    /// * `sorted_data` - The data sample, already sorted ascending
    /// * `p` - The probability (0.0 to 1.0)
    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64>;

    /// Estimate a single quantile
    ///
    /// # Warning
    /// This method will sort the data in place! If you need to preserve the original
    /// order, use `quantile_sorted()` with pre-sorted data or make a copy first.
    fn quantile(&self, data: &mut [f64], p: f64) -> Result<f64> {
        if data.iter().any(|v| v.is_nan()) {
            return Err(Error::InvalidInput(
                "quantile input contains NaN; drop missing values first".to_string(),
            ));
        }
        data.sort_by(f64::total_cmp);
        self.quantile_sorted(data, p)
    }

    /// Estimate multiple quantiles from pre-sorted data
    fn quantiles_sorted(&self, sorted_data: &[f64], ps: &[f64]) -> Result<Vec<f64>> {
        ps.iter()
            .map(|&p| self.quantile_sorted(sorted_data, p))
            .collect()
    }

    /// Estimate a quantile of any sample, ignoring missing entries
    fn quantile_of<T: Observation>(&self, sample: &[T], p: f64) -> Result<f64>
    where
        Self: Sized,
    {
        self.quantile_sorted(&sorted_observed(sample), p)
    }

    /// First and third quartiles of pre-sorted data
    fn quartiles_sorted(&self, sorted_data: &[f64]) -> Result<(f64, f64)> {
        let q1 = self.quantile_sorted(sorted_data, 0.25)?;
        let q3 = self.quantile_sorted(sorted_data, 0.75)?;
        Ok((q1, q3))
    }

    /// Median of pre-sorted data
    fn median_sorted(&self, sorted_data: &[f64]) -> Result<f64> {
        self.quantile_sorted(sorted_data, 0.5)
    }
}
