//! Exploratory data analysis helpers
//!
//! This crate gathers the workspace crates behind one dependency:
//!
//! - [`base`]: errors, missing-value handling and configuration
//! - [`frequency`]: absolute, relative and cumulative frequency tables
//! - [`spread`]: IQR fences, outlier trimming and descriptive summaries
//! - [`histogram`]: binning rules and kernel density
//! - [`quantile`]: type 7 quantiles
//! - [`hypothesis`]: nine classical tests with interpretation
//! - [`viz`]: the combined boxplot and histogram chart
//! - [`polars_ext`]: all of the above on Polars DataFrames
//!
//! [`Analyst`] writes the text report of a test to any `std::io::Write`.
//!
//! # Example
//!
//! ```rust
//! use explore_stats::prelude::*;
//!
//! let before = NamedColumn::from_observations("before", &[72.0, 75.0, 80.0, 68.0, 90.0, 85.0]);
//! let after = NamedColumn::from_observations("after", &[70.0, 74.0, 78.0, 69.0, 85.0, 80.0]);
//!
//! let mut analyst = Analyst::new(AnalysisConfig::default(), Vec::new()).unwrap();
//! let outcome = analyst.ttest_rel(&[before, after]).unwrap();
//! assert!(outcome.p_value < 0.1);
//!
//! let report = String::from_utf8(analyst.into_inner()).unwrap();
//! assert!(report.starts_with("Student's t test (paired samples)"));
//! ```

mod analysis;

pub use analysis::Analyst;

pub use explore_core as base;
pub use explore_frequency as frequency;
pub use explore_histogram as histogram;
pub use explore_hypothesis as hypothesis;
pub use explore_polars as polars_ext;
pub use explore_quantile as quantile;
pub use explore_spread as spread;
pub use explore_viz as viz;

pub use explore_core::{AnalysisConfig, Error, Result};

/// Commonly used types
pub mod prelude {
    pub use crate::Analyst;
    pub use explore_core::{
        Alternative, AnalysisConfig, BinRule, Error, LeveneCenter, NamedColumn, Observation,
        Result,
    };
    pub use explore_frequency::{
        build_frequency_table, FrequencyMode, FrequencySource, FrequencyTable,
    };
    pub use explore_hypothesis::{
        run_test, Decision, StatTest, TestOptions, TestOutcome, TestReport,
    };
    pub use explore_polars::ExploreFrameExt;
    pub use explore_spread::{outlier_mask, trim_outliers, IqrFences, Summary};
    pub use explore_viz::{render_svg, ChartOptions, HistBoxChart};
}
