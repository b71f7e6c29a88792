//! IQR-based outlier trimming

use crate::iqr::IqrFences;
use explore_core::{
    sorted_observed, validate_whisker_width, Observation, Result, DEFAULT_WHISKER_WIDTH,
};
use explore_quantile::{LinearInterpolation, QuantileEstimator};
use tracing::debug;

/// Keeps the values of a sample that fall inside its IQR fences
///
/// Quartiles are taken from the original (observed) sample, never from a
/// partially trimmed one. Missing entries are excluded from the quartiles and
/// never survive trimming.
#[derive(Debug, Clone)]
pub struct OutlierTrimmer<Q: QuantileEstimator = LinearInterpolation> {
    whisker_width: f64,
    estimator: Q,
}

impl OutlierTrimmer<LinearInterpolation> {
    /// Create a trimmer with the given whisker width
    pub fn new(whisker_width: f64) -> Result<Self> {
        Self::with_estimator(whisker_width, LinearInterpolation)
    }
}

impl Default for OutlierTrimmer<LinearInterpolation> {
    fn default() -> Self {
        Self {
            whisker_width: DEFAULT_WHISKER_WIDTH,
            estimator: LinearInterpolation,
        }
    }
}

impl<Q: QuantileEstimator> OutlierTrimmer<Q> {
    /// Create a trimmer with a custom quantile estimator
    pub fn with_estimator(whisker_width: f64, estimator: Q) -> Result<Self> {
        validate_whisker_width(whisker_width)?;
        Ok(Self {
            whisker_width,
            estimator,
        })
    }

    /// Get the whisker width
    pub fn whisker_width(&self) -> f64 {
        self.whisker_width
    }

    /// Fences of a sample, or `None` when it has no observed values
    pub fn fences<T: Observation>(&self, sample: &[T]) -> Result<Option<IqrFences>> {
        let sorted = sorted_observed(sample);
        if sorted.is_empty() {
            return Ok(None);
        }
        IqrFences::from_sorted_with(&sorted, self.whisker_width, &self.estimator).map(Some)
    }

    /// Keep-mask aligned with the input: `true` for observed values inside the fences
    pub fn mask<T: Observation>(&self, sample: &[T]) -> Result<Vec<bool>> {
        let Some(fences) = self.fences(sample)? else {
            return Ok(vec![false; sample.len()]);
        };
        Ok(sample
            .iter()
            .map(|v| v.observed().is_some_and(|x| fences.contains(x)))
            .collect())
    }

    /// The subsequence of `sample` inside the fences, in input order
    pub fn trim<T: Observation>(&self, sample: &[T]) -> Result<Vec<T>> {
        let mask = self.mask(sample)?;
        let kept: Vec<T> = sample
            .iter()
            .zip(&mask)
            .filter_map(|(v, &keep)| keep.then_some(*v))
            .collect();
        debug!(
            input = sample.len(),
            kept = kept.len(),
            whisker_width = self.whisker_width,
            "trimmed outliers"
        );
        Ok(kept)
    }

    /// Observed values outside the fences, in input order
    pub fn outliers<T: Observation>(&self, sample: &[T]) -> Result<Vec<f64>> {
        let Some(fences) = self.fences(sample)? else {
            return Ok(Vec::new());
        };
        Ok(sample
            .iter()
            .filter_map(|v| v.observed())
            .filter(|x| !fences.contains(*x))
            .collect())
    }
}

/// Keep only the values of `sample` within `[Q1 - k·IQR, Q3 + k·IQR]`
///
/// Fails with `InvalidArgument` when `k` is negative or not finite.
pub fn trim_outliers<T: Observation>(sample: &[T], k: f64) -> Result<Vec<T>> {
    OutlierTrimmer::new(k)?.trim(sample)
}

/// Keep-mask version of [`trim_outliers`]; missing entries are `false`
pub fn outlier_mask<T: Observation>(sample: &[T], k: f64) -> Result<Vec<bool>> {
    OutlierTrimmer::new(k)?.mask(sample)
}
