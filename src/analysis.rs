//! Text reports of hypothesis tests
//!
//! [`Analyst`] runs a test on named columns, writes the heading, statistic and
//! verdict lines to its sink, and hands the outcome back. Computation stays
//! in `explore-hypothesis`; this module only formats and writes.

use explore_core::{AnalysisConfig, NamedColumn, Result};
use explore_hypothesis::{
    run_test, shapiro_each, ColumnOutcome, StatTest, TestOptions, TestOutcome, TestReport,
};
use std::io::{self, Stdout, Write};
use tracing::debug;

/// Writes test reports judged at the configured significance level
#[derive(Debug)]
pub struct Analyst<W: Write> {
    config: AnalysisConfig,
    out: W,
}

impl Analyst<Stdout> {
    /// Report to standard output
    pub fn stdout(config: AnalysisConfig) -> Result<Self> {
        Self::new(config, io::stdout())
    }
}

impl<W: Write> Analyst<W> {
    /// Fails with `InvalidArgument` when the config does not validate
    pub fn new(config: AnalysisConfig, out: W) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, out })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Options passed to every test
    pub fn options(&self) -> TestOptions {
        TestOptions::from(&self.config)
    }

    /// Give back the sink
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_report(&mut self, report: &TestReport) -> Result<()> {
        writeln!(self.out, "{report}")?;
        Ok(())
    }

    fn run(&mut self, test: StatTest, columns: &[NamedColumn]) -> Result<TestOutcome> {
        let outcome = run_test(test, columns, &self.options())?;
        let report = TestReport::new(outcome, self.config.alpha)?;
        debug!(test = test.key(), decision = ?report.decision(), "reporting");
        self.write_report(&report)?;
        Ok(outcome)
    }

    /// Shapiro-Wilk on every column: one heading, then a statistic and a
    /// verdict per column
    pub fn shapiro(&mut self, columns: &[NamedColumn]) -> Result<Vec<ColumnOutcome>> {
        let outcomes = shapiro_each(columns)?;
        writeln!(self.out, "{}", StatTest::ShapiroWilk.name())?;
        for outcome in &outcomes {
            let report = TestReport::for_column(outcome.clone(), self.config.alpha)?;
            writeln!(self.out, "{}", report.statistic_line())?;
            writeln!(self.out, "{}", report.verdict_line())?;
        }
        Ok(outcomes)
    }

    /// Levene's test with the configured centre
    pub fn levene(&mut self, columns: &[NamedColumn]) -> Result<TestOutcome> {
        self.run(StatTest::Levene, columns)
    }

    /// [`shapiro`](Self::shapiro) and [`levene`](Self::levene) separated by a
    /// blank line
    pub fn shapiro_levene(
        &mut self,
        columns: &[NamedColumn],
    ) -> Result<(Vec<ColumnOutcome>, TestOutcome)> {
        let normality = self.shapiro(columns)?;
        writeln!(self.out)?;
        let variance = self.levene(columns)?;
        Ok((normality, variance))
    }

    pub fn ttest_ind(&mut self, columns: &[NamedColumn]) -> Result<TestOutcome> {
        self.run(StatTest::TTestIndependent, columns)
    }

    pub fn ttest_rel(&mut self, columns: &[NamedColumn]) -> Result<TestOutcome> {
        self.run(StatTest::TTestPaired, columns)
    }

    pub fn anova_one_way(&mut self, columns: &[NamedColumn]) -> Result<TestOutcome> {
        self.run(StatTest::OneWayAnova, columns)
    }

    /// Signed-rank test on one column of differences or two paired columns
    pub fn wilcoxon(&mut self, columns: &[NamedColumn]) -> Result<TestOutcome> {
        self.run(StatTest::Wilcoxon, columns)
    }

    pub fn mann_whitney(&mut self, columns: &[NamedColumn]) -> Result<TestOutcome> {
        self.run(StatTest::MannWhitney, columns)
    }

    pub fn friedman(&mut self, columns: &[NamedColumn]) -> Result<TestOutcome> {
        self.run(StatTest::Friedman, columns)
    }

    pub fn kruskal(&mut self, columns: &[NamedColumn]) -> Result<TestOutcome> {
        self.run(StatTest::KruskalWallis, columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use explore_core::Error;

    fn report_text(analyst: Analyst<Vec<u8>>) -> String {
        String::from_utf8(analyst.into_inner()).unwrap()
    }

    fn columns(data: &[(&str, &[f64])]) -> Vec<NamedColumn> {
        data.iter()
            .map(|(name, values)| NamedColumn::from_observations(*name, values))
            .collect()
    }

    #[test]
    fn test_shapiro_heading_written_once() {
        let cols = columns(&[
            ("heights", &[148.0, 154.0, 158.0, 160.0, 161.0, 162.0, 166.0, 170.0, 182.0, 195.0, 236.0]),
            ("widths", &[2.1, 3.4, 1.9, 5.6, 4.4]),
        ]);
        let mut analyst = Analyst::new(AnalysisConfig::default(), Vec::new()).unwrap();
        let outcomes = analyst.shapiro(&cols).unwrap();
        assert_eq!(outcomes.len(), 2);

        let text = report_text(analyst);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Shapiro-Wilk test",
                "Statistic: 0.789",
                "Column 'heights' does not follow a normal distribution. p-value: (0.007)",
                "Statistic: 0.932",
                "Column 'widths' follows a normal distribution. p-value: (0.611)",
            ]
        );
    }

    #[test]
    fn test_shapiro_levene_separated_by_blank_line() {
        let cols = columns(&[
            ("a", &[8.88, 9.12, 9.04, 8.98, 9.00, 9.08, 9.01, 8.85, 9.06, 8.99]),
            ("b", &[8.88, 8.95, 9.29, 9.44, 9.15, 9.58, 8.36, 9.18, 8.67, 9.05]),
        ]);
        let mut analyst = Analyst::new(AnalysisConfig::default(), Vec::new()).unwrap();
        let (normality, variance) = analyst.shapiro_levene(&cols).unwrap();
        assert_eq!(normality.len(), 2);
        assert!(variance.p_value < 0.05);

        let text = report_text(analyst);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], "Levene test");
        assert!(lines[8].starts_with("At least one variance differs"));
    }

    #[test]
    fn test_alpha_changes_verdict_only() {
        let cols = columns(&[
            ("a", &[72.0, 96.0, 88.0, 92.0, 74.0, 76.0, 82.0]),
            ("b", &[120.0, 120.0, 132.0, 120.0, 101.0, 96.0, 112.0]),
            ("c", &[76.0, 95.0, 104.0, 96.0, 84.0, 72.0, 76.0]),
        ]);
        let mut loose = Analyst::new(AnalysisConfig::default(), Vec::new()).unwrap();
        let mut strict =
            Analyst::new(AnalysisConfig::default().with_alpha(0.001), Vec::new()).unwrap();
        assert_eq!(loose.friedman(&cols).unwrap(), strict.friedman(&cols).unwrap());

        assert!(report_text(loose).contains("Reject the null hypothesis. p-value: (0.005)"));
        assert!(report_text(strict).contains("Fail to reject the null hypothesis. p-value: (0.005)"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = Analyst::new(AnalysisConfig::default().with_alpha(1.5), Vec::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_errors_write_nothing() {
        let cols = columns(&[("only", &[1.0, 2.0, 3.0])]);
        let mut analyst = Analyst::new(AnalysisConfig::default(), Vec::new()).unwrap();
        assert!(analyst.ttest_ind(&cols).is_err());
        assert!(report_text(analyst).is_empty());
    }
}
