//! Spread of a sample: IQR fences, outlier trimming and descriptive summaries
//!
//! # Outlier trimming
//!
//! Values outside `[Q1 - k·IQR, Q3 + k·IQR]` are dropped. Quartiles come from
//! the observed values of the original sample, missing entries are excluded,
//! and the survivors keep their input order.
//!
//! ```rust
//! use explore_spread::{trim_outliers, IqrFences};
//!
//! let sample = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
//! assert_eq!(trim_outliers(&sample, 1.5).unwrap(), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
//!
//! let fences = IqrFences::from_sample(&sample, 1.5).unwrap();
//! assert_eq!((fences.lower, fences.upper), (-1.5, 8.5));
//! ```
//!
//! # Summary
//!
//! ```rust
//! use explore_spread::Summary;
//!
//! let summary = Summary::from_sample(&[Some(1), None, Some(2), Some(2), Some(7)]).unwrap();
//! assert_eq!(summary.count, 4);
//! assert_eq!(summary.mode, 2.0);
//! ```

mod iqr;
mod summary;
mod trim;

pub use iqr::{iqr, IqrFences};
pub use summary::{mode_of, Summary};
pub use trim::{outlier_mask, trim_outliers, OutlierTrimmer};
