//! Histogram binning for exploratory charts
//!
//! Equal-width histograms whose bin count comes from a [`BinRule`]:
//!
//! - [`FixedWidthBuilder`]: a fixed number of bins
//! - [`SturgesRule`]: width `range / (log2(n) + 1)`
//! - [`FreedmanDiaconisRule`]: width `2·IQR·n^(-1/3)`, robust to outliers
//! - [`ScottsRule`]: width `(24·sqrt(pi)/n)^(1/3)·sd`
//! - [`AutoRule`]: the smaller of the Sturges and Freedman-Diaconis widths
//!
//! [`GaussianKde`] provides the smooth density curve drawn over the bars.
//!
//! # Example
//!
//! ```rust
//! use explore_core::BinRule;
//! use explore_histogram::{build_histogram, FixedWidthBuilder, HistogramBuilder};
//!
//! let data: Vec<f64> = (1..=10).map(f64::from).collect();
//! let histogram = FixedWidthBuilder::new(5).build(&data).unwrap();
//! assert_eq!(histogram.counts(), vec![2, 2, 2, 2, 2]);
//!
//! let auto = build_histogram(&data, BinRule::Auto).unwrap();
//! assert_eq!(auto.total_count(), 10);
//! ```

mod builders;
mod kde;
mod traits;
mod types;

pub use builders::{
    build_histogram, builder_for, AutoRule, BinWidthRule, FixedWidthBuilder,
    FreedmanDiaconisRule, ScottsRule, SturgesRule, MAX_BINS,
};
pub use kde::GaussianKde;
pub use traits::HistogramBuilder;
pub use types::{Histogram, HistogramBin};

// Re-export so callers can pick a rule without a direct core dependency
pub use explore_core::BinRule;
