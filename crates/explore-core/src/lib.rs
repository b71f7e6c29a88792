//! Core types for exploratory statistical analysis
//!
//! This crate holds the pieces every other explore-stats crate agrees on:
//!
//! - [`Error`] / [`Result`]: one error enum for the whole workspace
//! - [`Observation`]: the missing-value policy (missing entries are dropped,
//!   never imputed)
//! - [`NamedColumn`]: an ordered, named numeric column as consumed by the tests
//! - [`AnalysisConfig`]: explicit defaults (`alpha = 0.05`, `whisker_width = 1.5`)
//!
//! # Example
//!
//! ```rust
//! use explore_core::{observed_values, AnalysisConfig, NamedColumn};
//!
//! let sample = [1.0, f64::NAN, 3.0];
//! assert_eq!(observed_values(&sample), vec![1.0, 3.0]);
//!
//! let column = NamedColumn::from_observations("height", &sample);
//! assert_eq!(column.missing_count(), 1);
//!
//! let config = AnalysisConfig::default().with_alpha(0.01);
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod error;
pub mod observation;

pub use config::{
    validate_alpha, validate_whisker_width, Alternative, AnalysisConfig, BinRule, LeveneCenter,
    DEFAULT_ALPHA, DEFAULT_LEVENE_TRIM, DEFAULT_WHISKER_WIDTH,
};
pub use error::{Error, Result};
pub use observation::{complete_rows, observed_values, sorted_observed, NamedColumn, Observation};
