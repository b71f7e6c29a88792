//! Frequency distribution tables
//!
//! Converts a column of categorical or discrete values (or pre-aggregated
//! counts) into a table of absolute frequency, relative frequency and their
//! cumulative sums.
//!
//! # Examples
//!
//! ## Raw values
//!
//! ```rust
//! use explore_frequency::{build_frequency_table, FrequencyMode, FrequencySource};
//!
//! let values = [1, 2, 2, 3, 3, 3, 4, 5].into_iter().map(Some).collect();
//! let table = build_frequency_table(FrequencySource::Values(values), FrequencyMode::RawValues)
//!     .unwrap();
//!
//! assert_eq!(table.frequencies(), vec![1, 2, 3, 1, 1]);
//! assert_eq!(table.cumulative_frequencies(), vec![1, 3, 6, 7, 8]);
//! ```
//!
//! ## Pre-aggregated counts
//!
//! ```rust
//! use explore_frequency::FrequencyTable;
//!
//! // Buckets keep the order they were given in
//! let table = FrequencyTable::from_counts(vec![("low", Some(5)), ("mid", Some(10)), ("high", Some(5))]);
//! assert_eq!(table.relative_frequencies(), vec![0.25, 0.5, 0.25]);
//! ```

mod builder;
mod types;

pub use builder::{build_frequency_table, FrequencyMode, FrequencySource};
pub use types::{FrequencyRow, FrequencyTable};

// Re-export so callers can key tables by float without a direct dependency
pub use ordered_float::OrderedFloat;
