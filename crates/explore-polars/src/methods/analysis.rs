//! Hypothesis tests and charts over frame columns

use super::columns::{lookup, named_columns, numeric_columns, numeric_values};
use crate::Result;
use explore_hypothesis::{
    run_test, shapiro_each, ColumnOutcome, StatTest, TestOptions, TestOutcome,
};
use explore_viz::{ChartOptions, HistBoxChart};
use polars::prelude::*;

pub(crate) fn hypothesis_test_impl(
    df: &DataFrame,
    test: StatTest,
    columns: &[&str],
    options: &TestOptions,
) -> Result<TestOutcome> {
    let columns = named_columns(df, columns)?;
    Ok(run_test(test, &columns, options)?)
}

pub(crate) fn hypothesis_test_all_impl(
    df: &DataFrame,
    test: StatTest,
    options: &TestOptions,
) -> Result<TestOutcome> {
    let columns = numeric_columns(df)?;
    Ok(run_test(test, &columns, options)?)
}

pub(crate) fn shapiro_each_impl(df: &DataFrame) -> Result<Vec<ColumnOutcome>> {
    let columns = numeric_columns(df)?;
    Ok(shapiro_each(&columns)?)
}

pub(crate) fn plot_hist_box_impl(
    df: &DataFrame,
    column: &str,
    options: &ChartOptions,
) -> Result<String> {
    let values = numeric_values(lookup(df, column)?)?;
    let mut options = options.clone();
    if options.x_label.is_none() {
        options.x_label = Some(column.to_string());
    }
    Ok(HistBoxChart::new(options)?.render(&values)?)
}
