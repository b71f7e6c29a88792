mod analysis;
pub(crate) mod columns;
pub(crate) mod frequency;
mod spread;

use crate::{ExploreFrameExt, Result};
use explore_core::NamedColumn;
use explore_frequency::FrequencyMode;
use explore_hypothesis::{ColumnOutcome, StatTest, TestOptions, TestOutcome};
use explore_spread::{IqrFences, Summary};
use explore_viz::ChartOptions;
use polars::prelude::*;

impl ExploreFrameExt for DataFrame {
    fn frequency_table(&self, column: &str, mode: FrequencyMode) -> Result<DataFrame> {
        frequency::frequency_table_impl(self, column, mode)
    }

    fn frequency_table_by(&self, label_column: &str, count_column: &str) -> Result<DataFrame> {
        frequency::frequency_table_by_impl(self, label_column, count_column)
    }

    fn outlier_mask(&self, column: &str, k: f64) -> Result<BooleanChunked> {
        spread::outlier_mask_impl(self, column, k)
    }

    fn trim_outliers(&self, column: &str, k: f64) -> Result<Series> {
        spread::trim_outliers_impl(self, column, k)
    }

    fn trim_outlier_rows(&self, column: &str, k: f64) -> Result<DataFrame> {
        spread::trim_outlier_rows_impl(self, column, k)
    }

    fn iqr_fences(&self, column: &str, k: f64) -> Result<IqrFences> {
        spread::iqr_fences_impl(self, column, k)
    }

    fn summary(&self, column: &str) -> Result<Summary> {
        spread::summary_impl(self, column)
    }

    fn named_columns(&self, columns: &[&str]) -> Result<Vec<NamedColumn>> {
        columns::named_columns(self, columns)
    }

    fn numeric_columns(&self) -> Result<Vec<NamedColumn>> {
        columns::numeric_columns(self)
    }

    fn hypothesis_test(
        &self,
        test: StatTest,
        columns: &[&str],
        options: &TestOptions,
    ) -> Result<TestOutcome> {
        analysis::hypothesis_test_impl(self, test, columns, options)
    }

    fn hypothesis_test_all(&self, test: StatTest, options: &TestOptions) -> Result<TestOutcome> {
        analysis::hypothesis_test_all_impl(self, test, options)
    }

    fn shapiro_each(&self) -> Result<Vec<ColumnOutcome>> {
        analysis::shapiro_each_impl(self)
    }

    fn plot_hist_box(&self, column: &str, options: &ChartOptions) -> Result<String> {
        analysis::plot_hist_box_impl(self, column, options)
    }
}
