//! Extension trait for exploratory analysis on Polars DataFrames

use crate::Result;
use explore_core::NamedColumn;
use explore_frequency::FrequencyMode;
use explore_hypothesis::{ColumnOutcome, StatTest, TestOptions, TestOutcome};
use explore_spread::{IqrFences, Summary};
use explore_viz::ChartOptions;
use polars::prelude::*;

/// Exploratory statistics on the columns of a DataFrame
///
/// Nulls and float `NaN` are treated as missing. Numeric work accepts every
/// integer and float dtype; frequency tables also accept string and boolean
/// keys.
pub trait ExploreFrameExt {
    /// Frequency table of one column
    ///
    /// # Arguments
    /// * `column` - Column to tabulate
    /// * `mode` - `RawValues` counts distinct values; `PreAggregated` reads
    ///   the column as counts and labels buckets by row position
    ///
    /// # Returns
    /// DataFrame with the key column followed by `frequency`,
    /// `relative_frequency`, `cumulative_frequency` and
    /// `cumulative_relative_frequency`
    fn frequency_table(&self, column: &str, mode: FrequencyMode) -> Result<DataFrame>;

    /// Pre-aggregated frequency table with explicit bucket labels
    ///
    /// Rows whose count is missing are dropped; the label column keeps its
    /// dtype.
    fn frequency_table_by(&self, label_column: &str, count_column: &str) -> Result<DataFrame>;

    /// Keep-mask of `column` for the fences `[Q1 - k·IQR, Q3 + k·IQR]`
    fn outlier_mask(&self, column: &str, k: f64) -> Result<BooleanChunked>;

    /// Observed values of `column` inside the fences, in row order
    fn trim_outliers(&self, column: &str, k: f64) -> Result<Series>;

    /// Rows whose `column` value lies inside the fences
    fn trim_outlier_rows(&self, column: &str, k: f64) -> Result<DataFrame>;

    fn iqr_fences(&self, column: &str, k: f64) -> Result<IqrFences>;

    fn summary(&self, column: &str) -> Result<Summary>;

    /// Numeric columns by name, converted for the hypothesis tests
    fn named_columns(&self, columns: &[&str]) -> Result<Vec<NamedColumn>>;

    /// Every numeric column, in frame order; other dtypes are skipped
    fn numeric_columns(&self) -> Result<Vec<NamedColumn>>;

    /// Run a hypothesis test on the named columns, in the given order
    fn hypothesis_test(
        &self,
        test: StatTest,
        columns: &[&str],
        options: &TestOptions,
    ) -> Result<TestOutcome>;

    /// Run a hypothesis test on every numeric column, in frame order
    fn hypothesis_test_all(&self, test: StatTest, options: &TestOptions) -> Result<TestOutcome>;

    /// Shapiro-Wilk on every numeric column
    fn shapiro_each(&self) -> Result<Vec<ColumnOutcome>>;

    /// Boxplot and histogram of one column as an SVG document
    ///
    /// The x axis is labelled with the column name unless the options set one.
    fn plot_hist_box(&self, column: &str, options: &ChartOptions) -> Result<String>;
}
