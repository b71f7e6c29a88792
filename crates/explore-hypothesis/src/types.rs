//! Test identifiers, options and outcomes

use explore_core::{Alternative, AnalysisConfig, Error, LeveneCenter, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The statistical tests offered by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatTest {
    ShapiroWilk,
    Levene,
    TTestIndependent,
    TTestPaired,
    OneWayAnova,
    Wilcoxon,
    MannWhitney,
    Friedman,
    KruskalWallis,
}

/// How many columns a test accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
    /// One column of differences or two paired columns
    OneOrTwo,
}

impl Arity {
    pub fn accepts(&self, columns: usize) -> bool {
        match *self {
            Self::Exactly(n) => columns == n,
            Self::AtLeast(n) => columns >= n,
            Self::OneOrTwo => columns == 1 || columns == 2,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exactly(n) => write!(f, "exactly {n}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
            Self::OneOrTwo => f.write_str("1 or 2"),
        }
    }
}

impl StatTest {
    pub const ALL: [StatTest; 9] = [
        Self::ShapiroWilk,
        Self::Levene,
        Self::TTestIndependent,
        Self::TTestPaired,
        Self::OneWayAnova,
        Self::Wilcoxon,
        Self::MannWhitney,
        Self::Friedman,
        Self::KruskalWallis,
    ];

    /// Human readable name, used as the report heading
    pub fn name(&self) -> &'static str {
        match self {
            Self::ShapiroWilk => "Shapiro-Wilk test",
            Self::Levene => "Levene test",
            Self::TTestIndependent => "Student's t test (independent samples)",
            Self::TTestPaired => "Student's t test (paired samples)",
            Self::OneWayAnova => "One-way ANOVA",
            Self::Wilcoxon => "Wilcoxon signed-rank test",
            Self::MannWhitney => "Mann-Whitney U test",
            Self::Friedman => "Friedman test",
            Self::KruskalWallis => "Kruskal-Wallis test",
        }
    }

    /// Short identifier accepted by [`FromStr`]
    pub fn key(&self) -> &'static str {
        match self {
            Self::ShapiroWilk => "shapiro",
            Self::Levene => "levene",
            Self::TTestIndependent => "ttest_ind",
            Self::TTestPaired => "ttest_rel",
            Self::OneWayAnova => "anova",
            Self::Wilcoxon => "wilcoxon",
            Self::MannWhitney => "mannwhitneyu",
            Self::Friedman => "friedman",
            Self::KruskalWallis => "kruskal",
        }
    }

    /// Number of columns one call of the test takes
    pub fn arity(&self) -> Arity {
        match self {
            Self::ShapiroWilk => Arity::Exactly(1),
            Self::Levene | Self::OneWayAnova | Self::KruskalWallis => Arity::AtLeast(2),
            Self::TTestIndependent | Self::TTestPaired | Self::MannWhitney => Arity::Exactly(2),
            Self::Wilcoxon => Arity::OneOrTwo,
            Self::Friedman => Arity::AtLeast(3),
        }
    }

    /// Whether the test honours [`TestOptions::alternative`]
    pub fn supports_alternative(&self) -> bool {
        matches!(
            self,
            Self::TTestIndependent | Self::TTestPaired | Self::Wilcoxon | Self::MannWhitney
        )
    }

    /// Fail with `InvalidArgument` unless `columns` suits the test
    pub fn check_arity(&self, columns: usize) -> Result<()> {
        let arity = self.arity();
        if arity.accepts(columns) {
            Ok(())
        } else {
            Err(Error::arity(self.name(), &arity.to_string(), columns))
        }
    }
}

impl fmt::Display for StatTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StatTest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shapiro" | "shapiro_wilk" | "shapiro-wilk" => Ok(Self::ShapiroWilk),
            "levene" => Ok(Self::Levene),
            "ttest_ind" | "t_ind" => Ok(Self::TTestIndependent),
            "ttest_rel" | "t_rel" | "paired_t" => Ok(Self::TTestPaired),
            "anova" | "f_oneway" | "anova_one_way" => Ok(Self::OneWayAnova),
            "wilcoxon" => Ok(Self::Wilcoxon),
            "mannwhitneyu" | "mann_whitney" | "mann-whitney" => Ok(Self::MannWhitney),
            "friedman" | "friedmanchisquare" => Ok(Self::Friedman),
            "kruskal" | "kruskal_wallis" | "kruskal-wallis" => Ok(Self::KruskalWallis),
            other => Err(Error::InvalidArgument(format!("unknown test '{other}'"))),
        }
    }
}

/// Options shared by the tests; each test reads only what applies to it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestOptions {
    pub alternative: Alternative,
    /// Pooled variance in the independent t-test; `false` selects Welch
    pub equal_variances: bool,
    pub levene_center: LeveneCenter,
}

impl Default for TestOptions {
    fn default() -> Self {
        Self {
            alternative: Alternative::TwoSided,
            equal_variances: true,
            levene_center: LeveneCenter::Mean,
        }
    }
}

impl TestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alternative(mut self, alternative: Alternative) -> Self {
        self.alternative = alternative;
        self
    }

    pub fn with_equal_variances(mut self, equal_variances: bool) -> Self {
        self.equal_variances = equal_variances;
        self
    }

    pub fn with_levene_center(mut self, center: LeveneCenter) -> Self {
        self.levene_center = center;
        self
    }
}

impl From<&AnalysisConfig> for TestOptions {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            alternative: config.alternative,
            equal_variances: config.equal_variances,
            levene_center: config.levene_center,
        }
    }
}

/// How a p-value was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PValueMethod {
    /// Exact null distribution
    Exact,
    /// Reference distribution (t, F, chi-square or normal approximation)
    Asymptotic,
}

/// Statistic and p-value of one test run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestOutcome {
    pub test: StatTest,
    pub statistic: f64,
    pub p_value: f64,
    pub method: PValueMethod,
}

impl TestOutcome {
    pub fn new(test: StatTest, statistic: f64, p_value: f64) -> Self {
        Self {
            test,
            statistic,
            p_value: p_value.clamp(0.0, 1.0),
            method: PValueMethod::Asymptotic,
        }
    }

    pub fn exact(test: StatTest, statistic: f64, p_value: f64) -> Self {
        Self {
            method: PValueMethod::Exact,
            ..Self::new(test, statistic, p_value)
        }
    }
}
