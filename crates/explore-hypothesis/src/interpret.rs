//! Interpretation of test outcomes against a significance level
//!
//! Pure formatting: nothing here performs IO.

use crate::runner::ColumnOutcome;
use crate::types::{StatTest, TestOutcome};
use explore_core::{validate_alpha, Result};
use serde::Serialize;
use std::fmt;

/// Verdict on the null hypothesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// `p_value <= alpha`
    RejectNull,
    /// `p_value > alpha`
    FailToReject,
}

impl Decision {
    pub fn from_p_value(p_value: f64, alpha: f64) -> Self {
        if p_value <= alpha {
            Self::RejectNull
        } else {
            Self::FailToReject
        }
    }

    pub fn rejects(&self) -> bool {
        matches!(self, Self::RejectNull)
    }
}

/// An outcome paired with the significance level it is judged against
///
/// `Display` writes three lines: the test heading, the statistic and the
/// verdict with the p-value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestReport {
    pub outcome: TestOutcome,
    pub alpha: f64,
    /// Column the outcome belongs to, for single-column tests
    pub column: Option<String>,
}

impl TestReport {
    /// Fails with `InvalidArgument` unless `0 < alpha < 1`
    pub fn new(outcome: TestOutcome, alpha: f64) -> Result<Self> {
        validate_alpha(alpha)?;
        Ok(Self {
            outcome,
            alpha,
            column: None,
        })
    }

    pub fn for_column(outcome: ColumnOutcome, alpha: f64) -> Result<Self> {
        let mut report = Self::new(outcome.outcome, alpha)?;
        report.column = Some(outcome.column);
        Ok(report)
    }

    pub fn decision(&self) -> Decision {
        Decision::from_p_value(self.outcome.p_value, self.alpha)
    }

    pub fn heading(&self) -> &'static str {
        self.outcome.test.name()
    }

    pub fn statistic_line(&self) -> String {
        format!("Statistic: {:.3}", self.outcome.statistic)
    }

    pub fn verdict_line(&self) -> String {
        let p = self.outcome.p_value;
        let rejects = self.decision().rejects();
        match self.outcome.test {
            StatTest::ShapiroWilk => {
                let subject = match &self.column {
                    Some(name) => format!("Column '{name}'"),
                    None => "The sample".to_string(),
                };
                if rejects {
                    format!("{subject} does not follow a normal distribution. p-value: ({p:.3})")
                } else {
                    format!("{subject} follows a normal distribution. p-value: ({p:.3})")
                }
            }
            StatTest::Levene => {
                if rejects {
                    format!("At least one variance differs (not homogeneous). p-value: ({p:.3})")
                } else {
                    format!("Equal variances (homogeneous). p-value: ({p:.3})")
                }
            }
            _ => {
                if rejects {
                    format!("Reject the null hypothesis. p-value: ({p:.3})")
                } else {
                    format!("Fail to reject the null hypothesis. p-value: ({p:.3})")
                }
            }
        }
    }
}

impl fmt::Display for TestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading())?;
        writeln!(f, "{}", self.statistic_line())?;
        write!(f, "{}", self.verdict_line())
    }
}
