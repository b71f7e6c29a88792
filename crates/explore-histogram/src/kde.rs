//! Gaussian kernel density estimate
//!
//! Bandwidth follows Scott's factor `n^(-1/5)` applied to the sample standard
//! deviation, so the curve matches the smoothing conventionally drawn over a
//! histogram.

use explore_core::{sorted_observed, Error, Observation, Result};
use statrs::distribution::{Continuous, Normal};
use statrs::statistics::Statistics;

/// Gaussian KDE over the observed values of a sample
#[derive(Debug, Clone)]
pub struct GaussianKde {
    data: Vec<f64>,
    bandwidth: f64,
    kernel: Normal,
}

impl GaussianKde {
    /// Fit with Scott's bandwidth
    ///
    /// Needs at least two observations with non-zero spread.
    pub fn new<T: Observation>(sample: &[T]) -> Result<Self> {
        let data = sorted_observed(sample);
        if data.len() < 2 {
            return Err(Error::InsufficientData {
                expected: 2,
                actual: data.len(),
            });
        }
        let bandwidth = data.iter().std_dev() * (data.len() as f64).powf(-0.2);
        Self::with_bandwidth_sorted(data, bandwidth)
    }

    /// Fit with an explicit bandwidth
    pub fn with_bandwidth<T: Observation>(sample: &[T], bandwidth: f64) -> Result<Self> {
        let data = sorted_observed(sample);
        if data.is_empty() {
            return Err(Error::empty_input());
        }
        Self::with_bandwidth_sorted(data, bandwidth)
    }

    fn with_bandwidth_sorted(data: Vec<f64>, bandwidth: f64) -> Result<Self> {
        if !(bandwidth.is_finite() && bandwidth > 0.0) {
            return Err(Error::Computation(format!(
                "kernel bandwidth {bandwidth} is not positive; the sample has no spread"
            )));
        }
        let kernel = Normal::new(0.0, 1.0).map_err(Error::distribution)?;
        Ok(Self {
            data,
            bandwidth,
            kernel,
        })
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Density at `x`
    pub fn evaluate(&self, x: f64) -> f64 {
        let h = self.bandwidth;
        let sum: f64 = self.data.iter().map(|&xi| self.kernel.pdf((x - xi) / h)).sum();
        sum / (self.data.len() as f64 * h)
    }

    /// `(x, density)` on `points` evenly spaced positions over `[lo, hi]`
    pub fn evaluate_grid(&self, lo: f64, hi: f64, points: usize) -> Vec<(f64, f64)> {
        match points {
            0 => Vec::new(),
            1 => vec![(lo, self.evaluate(lo))],
            _ => {
                let step = (hi - lo) / (points - 1) as f64;
                (0..points)
                    .map(|i| {
                        let x = lo + i as f64 * step;
                        (x, self.evaluate(x))
                    })
                    .collect()
            }
        }
    }

    /// Density rescaled to histogram counts: `density · n · bin_width`
    pub fn evaluate_counts(&self, x: f64, bin_width: f64) -> f64 {
        self.evaluate(x) * self.data.len() as f64 * bin_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_point_density() {
        let kde = GaussianKde::with_bandwidth(&[0.0], 1.0).unwrap();
        assert_relative_eq!(kde.evaluate(0.0), 1.0 / (2.0 * std::f64::consts::PI).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_scott_bandwidth() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        let kde = GaussianKde::new(&data).unwrap();
        let sd = 2.5f64.sqrt();
        assert_relative_eq!(kde.bandwidth(), sd * 5f64.powf(-0.2), epsilon = 1e-12);
    }

    #[test]
    fn test_density_integrates_to_one() {
        let kde = GaussianKde::new(&[1.0, 2.0, 2.5, 4.0, 7.0]).unwrap();
        let grid = kde.evaluate_grid(-20.0, 30.0, 5001);
        let step = grid[1].0 - grid[0].0;
        let area: f64 = grid.iter().map(|(_, d)| d * step).sum();
        assert_relative_eq!(area, 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_degenerate_samples() {
        assert!(matches!(
            GaussianKde::new(&[3.0]),
            Err(Error::InsufficientData { .. })
        ));
        assert!(matches!(
            GaussianKde::new(&[3.0, 3.0, 3.0]),
            Err(Error::Computation(_))
        ));
        assert!(GaussianKde::with_bandwidth(&[1.0], 0.0).is_err());
    }

    #[test]
    fn test_grid_edges() {
        let kde = GaussianKde::new(&[0.0, 1.0]).unwrap();
        assert!(kde.evaluate_grid(0.0, 1.0, 0).is_empty());
        let grid = kde.evaluate_grid(0.0, 1.0, 3);
        assert_eq!(grid.iter().map(|p| p.0).collect::<Vec<_>>(), vec![0.0, 0.5, 1.0]);
    }
}
