//! Core types for histogram representation

use std::fmt;

/// A single bin in a histogram
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// Left edge of the bin (inclusive)
    pub left: f64,
    /// Right edge of the bin (exclusive, except for the last bin)
    pub right: f64,
    /// Number of values in this bin
    pub count: usize,
    /// `count / (total_count * width)`
    pub density: f64,
}

impl HistogramBin {
    pub fn new(left: f64, right: f64, count: usize, total_count: usize) -> Self {
        let width = right - left;
        let density = if width > 0.0 && total_count > 0 {
            count as f64 / (total_count as f64 * width)
        } else {
            0.0
        };
        Self {
            left,
            right,
            count,
            density,
        }
    }

    pub fn center(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Half-open membership test; the closing edge of the last bin is
    /// handled by [`Histogram::find_bin`]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.left && value < self.right
    }

    /// Share of all observations that landed in this bin
    pub fn frequency(&self, total_count: usize) -> f64 {
        if total_count > 0 {
            self.count as f64 / total_count as f64
        } else {
            0.0
        }
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}): count={}, density={:.3}",
            self.left, self.right, self.count, self.density
        )
    }
}

/// Equal-width histogram of a sample
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    bins: Vec<HistogramBin>,
    total_count: usize,
    min: f64,
    max: f64,
}

impl Histogram {
    pub fn new(bins: Vec<HistogramBin>, total_count: usize, min: f64, max: f64) -> Self {
        Self {
            bins,
            total_count,
            min,
            max,
        }
    }

    /// Histogram of no observations
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0, 0.0, 0.0)
    }

    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Smallest observation
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest observation
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Common width of the bins, zero for an empty histogram
    pub fn bin_width(&self) -> f64 {
        self.bins.first().map_or(0.0, HistogramBin::width)
    }

    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }

    pub fn max_density(&self) -> f64 {
        self.bins.iter().map(|bin| bin.density).fold(0.0, f64::max)
    }

    /// Index of the bin holding `value`; the last bin is closed on the right
    pub fn find_bin(&self, value: f64) -> Option<usize> {
        if let Some(last) = self.bins.last() {
            if value == last.right {
                return Some(self.bins.len() - 1);
            }
        }
        self.bins.iter().position(|bin| bin.contains(value))
    }

    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|bin| bin.count).collect()
    }

    pub fn densities(&self) -> Vec<f64> {
        self.bins.iter().map(|bin| bin.density).collect()
    }

    pub fn frequencies(&self) -> Vec<f64> {
        self.bins
            .iter()
            .map(|bin| bin.frequency(self.total_count))
            .collect()
    }

    pub fn centers(&self) -> Vec<f64> {
        self.bins.iter().map(HistogramBin::center).collect()
    }

    /// Bin edges including the rightmost one
    pub fn edges(&self) -> Vec<f64> {
        let Some(last) = self.bins.last() else {
            return Vec::new();
        };
        let mut edges: Vec<f64> = self.bins.iter().map(|bin| bin.left).collect();
        edges.push(last.right);
        edges
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Histogram({} bins, n={}, range=[{:.3}, {:.3}])",
            self.len(),
            self.total_count,
            self.min,
            self.max
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_bin() {
        let bin = HistogramBin::new(0.0, 1.0, 5, 10);
        assert_eq!(bin.center(), 0.5);
        assert_eq!(bin.width(), 1.0);
        assert!(bin.contains(0.5));
        assert!(!bin.contains(1.0));
        assert_eq!(bin.frequency(10), 0.5);
        assert_eq!(bin.density, 0.5);
    }

    #[test]
    fn test_histogram_accessors() {
        let bins = vec![
            HistogramBin::new(0.0, 1.0, 2, 10),
            HistogramBin::new(1.0, 2.0, 5, 10),
            HistogramBin::new(2.0, 3.0, 3, 10),
        ];
        let hist = Histogram::new(bins, 10, 0.0, 3.0);

        assert_eq!(hist.len(), 3);
        assert_eq!(hist.bin_width(), 1.0);
        assert_eq!(hist.max_count(), 5);
        assert_eq!(hist.find_bin(1.5), Some(1));
        assert_eq!(hist.find_bin(3.0), Some(2));
        assert_eq!(hist.find_bin(-1.0), None);
        assert_eq!(hist.edges(), vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(hist.frequencies(), vec![0.2, 0.5, 0.3]);
    }

    #[test]
    fn test_empty_histogram() {
        let hist = Histogram::empty();
        assert!(hist.is_empty());
        assert!(hist.edges().is_empty());
        assert_eq!(hist.bin_width(), 0.0);
        assert_eq!(hist.max_count(), 0);
    }
}
