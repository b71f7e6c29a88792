//! Geometry of a horizontal boxplot

use explore_core::{sorted_observed, Error, Observation, Result};
use explore_spread::{IqrFences, Summary};

/// Box, whiskers and fliers of one sample
///
/// Whiskers end at the most extreme observations still inside the fences,
/// so they never extend past the data. Everything outside is a flier.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub fences: IqrFences,
    pub median: f64,
    pub mean: f64,
    pub whisker_low: f64,
    pub whisker_high: f64,
    /// Observations outside the fences, ascending
    pub fliers: Vec<f64>,
}

impl BoxStats {
    /// Boxplot of a sample; missing entries are ignored
    pub fn from_sample<T: Observation>(sample: &[T], whisker_width: f64) -> Result<Self> {
        Self::from_sorted(&sorted_observed(sample), whisker_width)
    }

    /// Boxplot of pre-sorted, missing-free data
    pub fn from_sorted(sorted_data: &[f64], whisker_width: f64) -> Result<Self> {
        let summary = Summary::from_sorted(sorted_data)?;
        Self::with_summary(sorted_data, &summary, whisker_width)
    }

    /// Reuse a summary already computed for `sorted_data`
    pub fn with_summary(sorted_data: &[f64], summary: &Summary, whisker_width: f64) -> Result<Self> {
        let fences = IqrFences::from_quartiles(summary.q1, summary.q3, whisker_width)?;
        let inside = || sorted_data.iter().copied().filter(|&x| fences.contains(x));
        // Q1 and Q3 lie between observations inside the fences, so both exist
        let (Some(whisker_low), Some(whisker_high)) = (inside().next(), inside().last()) else {
            return Err(Error::Computation(
                "no observation lies inside the IQR fences".to_string(),
            ));
        };
        let fliers = sorted_data
            .iter()
            .copied()
            .filter(|&x| !fences.contains(x))
            .collect();

        Ok(Self {
            fences,
            median: summary.median,
            mean: summary.mean,
            whisker_low,
            whisker_high,
            fliers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whiskers_stop_at_data() {
        let stats = BoxStats::from_sample(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0], 1.5).unwrap();
        assert_eq!(stats.fences.lower, -1.5);
        assert_eq!(stats.fences.upper, 8.5);
        assert_eq!(stats.whisker_low, 1.0);
        assert_eq!(stats.whisker_high, 5.0);
        assert_eq!(stats.fliers, vec![100.0]);
        assert_eq!(stats.median, 3.5);
    }

    #[test]
    fn test_fliers_on_both_sides() {
        let stats = BoxStats::from_sample(&[-60.0, 10.0, 11.0, 12.0, 13.0, 14.0, 90.0], 1.5).unwrap();
        assert_eq!(stats.fliers, vec![-60.0, 90.0]);
        assert_eq!((stats.whisker_low, stats.whisker_high), (10.0, 14.0));
    }

    #[test]
    fn test_constant_sample() {
        let stats = BoxStats::from_sample(&[2, 2, 2], 1.5).unwrap();
        assert!(stats.fliers.is_empty());
        assert_eq!((stats.whisker_low, stats.whisker_high), (2.0, 2.0));
    }

    #[test]
    fn test_empty_sample() {
        let err = BoxStats::from_sample::<f64>(&[], 1.5).unwrap_err();
        assert!(matches!(err, Error::InsufficientData { .. }));
    }
}
