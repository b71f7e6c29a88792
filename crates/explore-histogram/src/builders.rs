//! Histogram building strategies
//!
//! Every rule reduces to an equal-width layout over `[min, max]` of the
//! observed data; constant data gets a single bin over `[x - 0.5, x + 0.5]`.

use crate::traits::HistogramBuilder;
use crate::types::{Histogram, HistogramBin};
use explore_core::{sorted_observed, BinRule, Error, Observation, Result};
use explore_quantile::quartiles_sorted;
use statrs::statistics::Statistics;
use tracing::debug;

/// Outer edges of the binned range
fn outer_edges(sorted: &[f64]) -> Option<(f64, f64)> {
    let (&first, &last) = (sorted.first()?, sorted.last()?);
    if first == last {
        Some((first - 0.5, last + 0.5))
    } else {
        Some((first, last))
    }
}

/// Upper bound on the bins a width-based rule may ask for
///
/// Sturges' count wins when it is larger, so the bound never undercuts it.
pub const MAX_BINS: usize = 10_000;

/// `ceil(log2(n) + 1)`, at least one
fn sturges_bins(n: usize) -> usize {
    if n == 0 {
        return 1;
    }
    (((n as f64).log2() + 1.0).ceil() as usize).max(1)
}

/// Number of bins a width needs to cover the data; a zero width means one bin
///
/// A far outlier can make a narrow width ask for billions of bins; counts
/// above `max(MAX_BINS, sturges)` fall back to Sturges.
fn bins_for_width(sorted: &[f64], width: f64) -> usize {
    let Some((first, last)) = outer_edges(sorted) else {
        return 1;
    };
    if !(width > 0.0 && width.is_finite()) {
        return 1;
    }
    let sturges = sturges_bins(sorted.len());
    let requested = ((last - first) / width).ceil();
    if requested.is_finite() && requested <= MAX_BINS.max(sturges) as f64 {
        (requested as usize).max(1)
    } else {
        debug!(requested, fallback = sturges, "bin count over limit");
        sturges
    }
}

/// Fixed number of equal-width bins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidthBuilder {
    num_bins: usize,
}

impl FixedWidthBuilder {
    /// Create a builder; a bin count of zero is clamped to one
    pub fn new(num_bins: usize) -> Self {
        Self {
            num_bins: num_bins.max(1),
        }
    }
}

impl HistogramBuilder for FixedWidthBuilder {
    fn build_sorted(&self, sorted_sample: &[f64]) -> Result<Histogram> {
        let Some((first, last)) = outer_edges(sorted_sample) else {
            return Ok(Histogram::empty());
        };
        let total = sorted_sample.len();
        let step = (last - first) / self.num_bins as f64;

        let mut bins: Vec<HistogramBin> = (0..self.num_bins)
            .map(|i| {
                let left = first + i as f64 * step;
                let right = if i + 1 == self.num_bins {
                    last
                } else {
                    first + (i + 1) as f64 * step
                };
                HistogramBin::new(left, right, 0, total)
            })
            .collect();

        // Single pass through the sorted data
        let mut current = 0;
        for &value in sorted_sample {
            while current + 1 < bins.len() && value >= bins[current].right {
                current += 1;
            }
            bins[current].count += 1;
        }
        for bin in &mut bins {
            *bin = HistogramBin::new(bin.left, bin.right, bin.count, total);
        }

        Ok(Histogram::new(
            bins,
            total,
            sorted_sample[0],
            sorted_sample[total - 1],
        ))
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.num_bins)
    }
}

/// A rule that derives the bin width from the data
pub trait BinWidthRule {
    /// Suggested bin width for sorted, non-empty data; zero when undefined
    fn bin_width(&self, sorted_sample: &[f64]) -> f64;
}

impl<R: BinWidthRule> HistogramBuilder for R {
    fn build_sorted(&self, sorted_sample: &[f64]) -> Result<Histogram> {
        if sorted_sample.is_empty() {
            return Ok(Histogram::empty());
        }
        let width = self.bin_width(sorted_sample);
        let num_bins = bins_for_width(sorted_sample, width);
        debug!(width, num_bins, n = sorted_sample.len(), "selected histogram bins");
        FixedWidthBuilder::new(num_bins).build_sorted(sorted_sample)
    }
}

/// Sturges' rule: width `range / (log2(n) + 1)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SturgesRule;

impl BinWidthRule for SturgesRule {
    fn bin_width(&self, sorted_sample: &[f64]) -> f64 {
        let n = sorted_sample.len();
        if n == 0 {
            return 0.0;
        }
        let range = sorted_sample[n - 1] - sorted_sample[0];
        range / ((n as f64).log2() + 1.0)
    }
}

/// Freedman-Diaconis rule: width `2·IQR·n^(-1/3)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FreedmanDiaconisRule;

impl BinWidthRule for FreedmanDiaconisRule {
    fn bin_width(&self, sorted_sample: &[f64]) -> f64 {
        match quartiles_sorted(sorted_sample) {
            Ok((q1, q3)) => 2.0 * (q3 - q1) * (sorted_sample.len() as f64).powf(-1.0 / 3.0),
            Err(_) => 0.0,
        }
    }
}

/// Scott's rule: width `(24·sqrt(pi)/n)^(1/3)·sd` with the population sd
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScottsRule;

impl BinWidthRule for ScottsRule {
    fn bin_width(&self, sorted_sample: &[f64]) -> f64 {
        let n = sorted_sample.len();
        if n == 0 {
            return 0.0;
        }
        let factor = (24.0 * std::f64::consts::PI.sqrt() / n as f64).powf(1.0 / 3.0);
        factor * sorted_sample.iter().population_std_dev()
    }
}

/// The smaller of the Sturges and Freedman-Diaconis widths
///
/// Falls back to Sturges when the Freedman-Diaconis width is zero, as it is
/// for data whose middle half is a single value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutoRule;

impl BinWidthRule for AutoRule {
    fn bin_width(&self, sorted_sample: &[f64]) -> f64 {
        let sturges = SturgesRule.bin_width(sorted_sample);
        let fd = FreedmanDiaconisRule.bin_width(sorted_sample);
        if fd > 0.0 {
            fd.min(sturges)
        } else {
            sturges
        }
    }
}

/// Builder implementing a configured [`BinRule`]
pub fn builder_for(rule: BinRule) -> Result<Box<dyn HistogramBuilder>> {
    Ok(match rule {
        BinRule::Auto => Box::new(AutoRule),
        BinRule::Count(0) => {
            return Err(Error::InvalidArgument(
                "bin count must be positive".to_string(),
            ))
        }
        BinRule::Count(n) => Box::new(FixedWidthBuilder::new(n)),
        BinRule::Sturges => Box::new(SturgesRule),
        BinRule::FreedmanDiaconis => Box::new(FreedmanDiaconisRule),
        BinRule::Scott => Box::new(ScottsRule),
    })
}

/// Histogram of the observed values of a sample
pub fn build_histogram<T: Observation>(sample: &[T], rule: BinRule) -> Result<Histogram> {
    builder_for(rule)?.build_sorted(&sorted_observed(sample))
}
