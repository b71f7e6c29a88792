//! Chart options and palette

use explore_core::{validate_whisker_width, AnalysisConfig, BinRule, Error, Result};
use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};

/// Bars, box and density curve
pub const BAR_COLOR: RGBColor = RGBColor(0x1f, 0x77, 0xb4);
/// Mean reference line
pub const MEAN_COLOR: RGBColor = RGBColor(0xff, 0x7f, 0x0e);
/// Mode reference line
pub const MODE_COLOR: RGBColor = RGBColor(0x2c, 0xa0, 0x2c);
/// Median reference line
pub const MEDIAN_COLOR: RGBColor = RGBColor(0xd6, 0x27, 0x28);

/// Layout and binning of a [`HistBoxChart`](crate::HistBoxChart)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    /// Histogram binning rule (default auto)
    pub bins: BinRule,
    /// Image width in pixels (default 800)
    pub width: u32,
    /// Image height in pixels (default 600)
    pub height: u32,
    /// Caption above both panels
    pub title: Option<String>,
    /// Label of the shared x axis, usually the column name
    pub x_label: Option<String>,
    /// IQR multiple the boxplot whiskers reach (default 1.5)
    pub whisker_width: f64,
    /// Draw the kernel density curve over the bars (default true)
    pub kde: bool,
    /// Share of the height given to the boxplot panel (default 0.15)
    pub box_ratio: f64,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            bins: BinRule::Auto,
            width: 800,
            height: 600,
            title: None,
            x_label: None,
            whisker_width: explore_core::DEFAULT_WHISKER_WIDTH,
            kde: true,
            box_ratio: 0.15,
        }
    }
}

impl ChartOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bins(mut self, bins: BinRule) -> Self {
        self.bins = bins;
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    pub fn with_whisker_width(mut self, whisker_width: f64) -> Self {
        self.whisker_width = whisker_width;
        self
    }

    pub fn with_kde(mut self, kde: bool) -> Self {
        self.kde = kde;
        self
    }

    /// Check every field
    ///
    /// Sizes must be positive, the whisker width finite and non-negative, the
    /// box ratio strictly between 0 and 1, and a fixed bin count non-zero.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidArgument(format!(
                "chart size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.box_ratio > 0.0 && self.box_ratio < 1.0) {
            return Err(Error::InvalidArgument(format!(
                "box ratio must be in (0, 1), got {}",
                self.box_ratio
            )));
        }
        if self.bins == BinRule::Count(0) {
            return Err(Error::InvalidArgument(
                "bin count must be positive".to_string(),
            ));
        }
        validate_whisker_width(self.whisker_width)
    }
}

impl From<&AnalysisConfig> for ChartOptions {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            bins: config.bins,
            whisker_width: config.whisker_width,
            ..Self::default()
        }
    }
}
