//! Polars integration for exploratory data analysis
//!
//! A single extension trait, [`ExploreFrameExt`], brings frequency tables,
//! outlier trimming, hypothesis tests and charts to Polars DataFrames.
//!
//! # Example
//!
//! ```rust
//! use polars::prelude::*;
//! use explore_polars::{ExploreFrameExt, FrequencyMode};
//!
//! let df = df!["rating" => [1, 2, 2, 3, 3, 3, 4, 5]].unwrap();
//! let table = df.frequency_table("rating", FrequencyMode::RawValues).unwrap();
//!
//! assert_eq!(table.height(), 5);
//! let cumulative = table.column("cumulative_frequency").unwrap().u64().unwrap();
//! assert_eq!(cumulative.get(4), Some(8));
//! ```

mod error;
mod methods;
mod traits;

pub use error::{Error, Result};
pub use methods::frequency::{
    BUCKET, CUMULATIVE_FREQUENCY, CUMULATIVE_RELATIVE_FREQUENCY, FREQUENCY, RELATIVE_FREQUENCY,
};
pub use traits::ExploreFrameExt;

// Re-export the option and result types the trait speaks in
pub use explore_core::NamedColumn;
pub use explore_frequency::FrequencyMode;
pub use explore_hypothesis::{ColumnOutcome, StatTest, TestOptions, TestOutcome};
pub use explore_spread::{IqrFences, Summary};
pub use explore_viz::ChartOptions;
