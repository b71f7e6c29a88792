//! Configuration types for exploratory analyses

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default significance level
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Default whisker width (multiple of the IQR) for fences and trimming
pub const DEFAULT_WHISKER_WIDTH: f64 = 1.5;

/// Default proportion cut from each tail for the trimmed Levene centre
pub const DEFAULT_LEVENE_TRIM: f64 = 0.05;

/// Alternative hypothesis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alternative {
    /// The distributions (or means) differ
    #[default]
    TwoSided,
    /// The first sample is stochastically smaller
    Less,
    /// The first sample is stochastically greater
    Greater,
}

impl Alternative {
    pub fn name(&self) -> &'static str {
        match self {
            Self::TwoSided => "two-sided",
            Self::Less => "less",
            Self::Greater => "greater",
        }
    }
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Alternative {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "two-sided" | "two_sided" | "two sided" => Ok(Self::TwoSided),
            "less" => Ok(Self::Less),
            "greater" => Ok(Self::Greater),
            other => Err(Error::InvalidArgument(format!(
                "unknown alternative '{other}' (expected two-sided, less or greater)"
            ))),
        }
    }
}

/// Centre used by Levene's test when computing absolute deviations
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeveneCenter {
    /// Group mean (classic Levene)
    #[default]
    Mean,
    /// Group median (Brown-Forsythe)
    Median,
    /// Group mean after cutting the given proportion from each tail
    Trimmed(f64),
}

impl LeveneCenter {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Median => "median",
            Self::Trimmed(_) => "trimmed",
        }
    }
}

impl FromStr for LeveneCenter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mean" => Ok(Self::Mean),
            "median" => Ok(Self::Median),
            "trimmed" => Ok(Self::Trimmed(DEFAULT_LEVENE_TRIM)),
            other => Err(Error::InvalidArgument(format!(
                "unknown Levene centre '{other}' (expected mean, median or trimmed)"
            ))),
        }
    }
}

/// Histogram binning rule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinRule {
    /// Smaller bin width of Sturges and Freedman-Diaconis
    #[default]
    Auto,
    /// Fixed number of equal-width bins
    Count(usize),
    /// `log2(n) + 1` bins
    Sturges,
    /// Width `2·IQR·n^(-1/3)`
    FreedmanDiaconis,
    /// Width `(24·sqrt(pi)/n)^(1/3)·sd`
    Scott,
}

impl FromStr for BinRule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "auto" => Ok(Self::Auto),
            "sturges" => Ok(Self::Sturges),
            "fd" | "freedman-diaconis" | "freedman_diaconis" => Ok(Self::FreedmanDiaconis),
            "scott" => Ok(Self::Scott),
            other => match other.parse::<usize>() {
                Ok(n) if n > 0 => Ok(Self::Count(n)),
                _ => Err(Error::InvalidArgument(format!("unknown bin rule '{other}'"))),
            },
        }
    }
}

/// Shared configuration for analyses and reports
///
/// Every field has a documented default, so partial JSON documents are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Significance level (default 0.05)
    pub alpha: f64,
    /// IQR multiple used for fences and outlier trimming (default 1.5)
    pub whisker_width: f64,
    /// Centre used by Levene's test (default mean)
    pub levene_center: LeveneCenter,
    /// Assume equal variances in the independent t-test (default true)
    pub equal_variances: bool,
    /// Alternative hypothesis for the tests that support one (default two-sided)
    pub alternative: Alternative,
    /// Histogram binning rule for charts (default auto)
    pub bins: BinRule,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            whisker_width: DEFAULT_WHISKER_WIDTH,
            levene_center: LeveneCenter::default(),
            equal_variances: true,
            alternative: Alternative::default(),
            bins: BinRule::default(),
        }
    }
}

impl AnalysisConfig {
    /// Set the significance level
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the whisker width
    pub fn with_whisker_width(mut self, whisker_width: f64) -> Self {
        self.whisker_width = whisker_width;
        self
    }

    /// Set the alternative hypothesis
    pub fn with_alternative(mut self, alternative: Alternative) -> Self {
        self.alternative = alternative;
        self
    }

    /// Set the Levene centre
    pub fn with_levene_center(mut self, center: LeveneCenter) -> Self {
        self.levene_center = center;
        self
    }

    /// Toggle the equal-variance assumption of the independent t-test
    pub fn with_equal_variances(mut self, equal_variances: bool) -> Self {
        self.equal_variances = equal_variances;
        self
    }

    /// Set the histogram binning rule
    pub fn with_bins(mut self, bins: BinRule) -> Self {
        self.bins = bins;
        self
    }

    /// Check every field is within its domain
    pub fn validate(&self) -> Result<()> {
        validate_alpha(self.alpha)?;
        validate_whisker_width(self.whisker_width)?;
        if let LeveneCenter::Trimmed(p) = self.levene_center {
            if !(0.0..0.5).contains(&p) {
                return Err(Error::InvalidArgument(format!(
                    "trim proportion {p} must be in [0, 0.5)"
                )));
            }
        }
        if let BinRule::Count(0) = self.bins {
            return Err(Error::InvalidArgument("bin count must be positive".to_string()));
        }
        Ok(())
    }

    /// Parse and validate a JSON document; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        tracing::debug!(?config, "loaded analysis config");
        Ok(config)
    }
}

/// Significance levels must lie strictly between 0 and 1
pub fn validate_alpha(alpha: f64) -> Result<()> {
    if alpha > 0.0 && alpha < 1.0 {
        Ok(())
    } else {
        Err(Error::invalid_alpha(alpha))
    }
}

/// Whisker widths must be finite and non-negative
pub fn validate_whisker_width(k: f64) -> Result<()> {
    if k.is_finite() && k >= 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_width(k))
    }
}
