//! Combined boxplot and histogram charts
//!
//! [`HistBoxChart`] draws a horizontal boxplot in a narrow top panel and a
//! histogram with a kernel density curve below it, both on the same x axis.
//! Dashed vertical lines mark the mean (orange), mode (green) and median
//! (red). Output is an SVG document, returned as a string or written to a
//! file.
//!
//! # Example
//!
//! ```rust
//! use explore_core::BinRule;
//! use explore_viz::{render_svg, ChartOptions};
//!
//! let ages = [23.0, 25.0, 31.0, 35.0, 35.0, 38.0, 41.0, 44.0, 52.0, 90.0];
//! let options = ChartOptions::default()
//!     .with_bins(BinRule::Sturges)
//!     .with_title("Age distribution")
//!     .with_x_label("age");
//!
//! let svg = render_svg(&ages, &options).unwrap();
//! assert!(svg.contains("<svg"));
//! ```

mod boxplot;
mod chart;
mod options;

pub use boxplot::BoxStats;
pub use chart::{render_svg, render_to_file, HistBoxChart};
pub use options::{ChartOptions, BAR_COLOR, MEAN_COLOR, MEDIAN_COLOR, MODE_COLOR};
