//! Core traits for histogram building

use crate::types::Histogram;
use explore_core::{sorted_observed, Result};

/// Builds a histogram from sample data
pub trait HistogramBuilder {
    /// Build a histogram from sorted, missing-free data
    fn build_sorted(&self, sorted_sample: &[f64]) -> Result<Histogram>;

    /// Build a histogram from unsorted data; `NaN` entries are ignored
    fn build(&self, sample: &[f64]) -> Result<Histogram> {
        self.build_sorted(&sorted_observed(sample))
    }

    /// Number of bins, if fixed ahead of the data
    fn target_bins(&self) -> Option<usize> {
        None
    }
}
