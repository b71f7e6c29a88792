//! Order-statistic quantile estimation
//!
//! Quartiles drive the outlier fences, the boxplot and the Freedman-Diaconis
//! binning rule, so every crate in the workspace agrees on one definition:
//! linear interpolation between closest ranks.
//!
//! # Example
//!
//! ```rust
//! use explore_quantile::{LinearInterpolation, QuantileEstimator};
//!
//! let sorted = vec![1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
//! let (q1, q3) = LinearInterpolation.quartiles_sorted(&sorted).unwrap();
//! assert_eq!((q1, q3), (2.25, 4.75));
//! ```

pub mod linear;
pub mod traits;

pub use linear::{median_sorted, quantile_sorted, quartiles_sorted, LinearInterpolation};
pub use traits::QuantileEstimator;

/// The estimator used throughout the workspace
pub type DefaultQuantileEstimator = LinearInterpolation;
