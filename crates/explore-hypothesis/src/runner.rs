//! Run a test over named columns, applying the missing-value policy

use crate::nonparametric::{friedman, kruskal_wallis, mann_whitney, wilcoxon, wilcoxon_paired};
use crate::normality::shapiro_wilk;
use crate::parametric::{one_way_anova, ttest_independent, ttest_paired};
use crate::types::{StatTest, TestOptions, TestOutcome};
use crate::variance::levene;
use explore_core::{complete_rows, Error, NamedColumn, Result};
use serde::Serialize;
use tracing::instrument;

/// Outcome of a single-column test, labelled with the column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnOutcome {
    pub column: String,
    pub outcome: TestOutcome,
}

fn observed(columns: &[NamedColumn]) -> Vec<Vec<f64>> {
    columns.iter().map(NamedColumn::observed).collect()
}

fn as_slices(samples: &[Vec<f64>]) -> Vec<&[f64]> {
    samples.iter().map(Vec::as_slice).collect()
}

/// Run `test` on `columns`
///
/// Independent-sample tests drop missing values per column; paired and
/// repeated-measures tests drop every row with a missing entry in any column.
/// Shapiro-Wilk takes exactly one column; see [`shapiro_each`] for a whole
/// frame.
#[instrument(skip(columns, options), fields(columns = columns.len()))]
pub fn run_test(
    test: StatTest,
    columns: &[NamedColumn],
    options: &TestOptions,
) -> Result<TestOutcome> {
    test.check_arity(columns.len())?;
    let alternative = options.alternative;

    match test {
        StatTest::ShapiroWilk => shapiro_wilk(columns[0].values()),
        StatTest::Levene => {
            let samples = observed(columns);
            levene(&as_slices(&samples), options.levene_center)
        }
        StatTest::TTestIndependent => {
            let samples = observed(columns);
            ttest_independent(
                &samples[0],
                &samples[1],
                options.equal_variances,
                alternative,
            )
        }
        StatTest::TTestPaired => {
            let rows = complete_rows(columns, test.name())?;
            ttest_paired(&rows[0], &rows[1], alternative)
        }
        StatTest::OneWayAnova => {
            let samples = observed(columns);
            one_way_anova(&as_slices(&samples))
        }
        StatTest::Wilcoxon => {
            let rows = complete_rows(columns, test.name())?;
            match rows.as_slice() {
                [differences] => wilcoxon(differences, alternative),
                [a, b] => wilcoxon_paired(a, b, alternative),
                other => Err(Error::arity(test.name(), "1 or 2", other.len())),
            }
        }
        StatTest::MannWhitney => {
            let samples = observed(columns);
            mann_whitney(&samples[0], &samples[1], alternative)
        }
        StatTest::Friedman => {
            let rows = complete_rows(columns, test.name())?;
            friedman(&as_slices(&rows))
        }
        StatTest::KruskalWallis => {
            let samples = observed(columns);
            kruskal_wallis(&as_slices(&samples))
        }
    }
}

/// Shapiro-Wilk on every column, in column order; stops at the first failure
pub fn shapiro_each(columns: &[NamedColumn]) -> Result<Vec<ColumnOutcome>> {
    columns
        .iter()
        .map(|column| {
            Ok(ColumnOutcome {
                column: column.name().to_string(),
                outcome: shapiro_wilk(column.values())?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use explore_core::Alternative;

    fn column(name: &str, values: &[f64]) -> NamedColumn {
        NamedColumn::from_observations(name, values)
    }

    #[test]
    fn test_arity_checked_before_computation() {
        let cols = [column("a", &[1.0, 2.0, 3.0])];
        for test in [StatTest::TTestIndependent, StatTest::Levene, StatTest::Friedman] {
            let err = run_test(test, &cols, &TestOptions::default()).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)), "{test:?}");
        }
    }

    #[test]
    fn test_paired_tests_drop_incomplete_rows() {
        let a = column("before", &[1.0, 2.0, f64::NAN, 4.0, 5.0, 6.5]);
        let b = column("after", &[1.5, 2.0, 3.0, f64::NAN, 6.0, 8.0]);
        let via_columns = run_test(StatTest::TTestPaired, &[a, b], &TestOptions::default()).unwrap();
        let direct =
            ttest_paired(&[1.0, 2.0, 5.0, 6.5], &[1.5, 2.0, 6.0, 8.0], Alternative::TwoSided)
                .unwrap();
        assert_eq!(via_columns, direct);
    }

    #[test]
    fn test_independent_tests_drop_per_column() {
        let a = column("x", &[1.0, f64::NAN, 3.0, 4.0]);
        let b = column("y", &[2.0, 6.0, 7.0, 9.0, 11.0]);
        let via_columns =
            run_test(StatTest::MannWhitney, &[a, b], &TestOptions::default()).unwrap();
        let direct = mann_whitney(
            &[1.0, 3.0, 4.0],
            &[2.0, 6.0, 7.0, 9.0, 11.0],
            Alternative::TwoSided,
        )
        .unwrap();
        assert_eq!(via_columns, direct);
    }

    #[test]
    fn test_wilcoxon_one_column_is_differences() {
        let d = column("diff", &[1.5, -0.5, 2.0, 3.0, 0.7]);
        let outcome = run_test(StatTest::Wilcoxon, &[d], &TestOptions::default()).unwrap();
        assert_eq!(outcome.test, StatTest::Wilcoxon);
        assert_eq!(outcome.statistic, 1.0);
    }

    #[test]
    fn test_shapiro_each_keeps_column_order() {
        let cols = [
            column("first", &[2.1, 3.4, 1.9, 5.6, 4.4]),
            column("second", &[1.0, 1.2, 0.9, 1.1, 9.0]),
        ];
        let outcomes = shapiro_each(&cols).unwrap();
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].column, "first");
        assert_eq!(outcomes[1].column, "second");
        assert!(outcomes[1].outcome.statistic < outcomes[0].outcome.statistic);
    }
}
