//! Outlier trimming and summaries of a single column

use super::columns::{lookup, numeric_values};
use crate::Result;
use explore_spread::{outlier_mask, IqrFences, Summary};
use polars::prelude::*;
use tracing::debug;

pub(crate) fn outlier_mask_impl(df: &DataFrame, column: &str, k: f64) -> Result<BooleanChunked> {
    let values = numeric_values(lookup(df, column)?)?;
    let mask = outlier_mask(&values, k)?;
    Ok(BooleanChunked::from_slice(column.into(), &mask))
}

/// Observed values inside the fences, keeping the column's dtype
pub(crate) fn trim_outliers_impl(df: &DataFrame, column: &str, k: f64) -> Result<Series> {
    let mask = outlier_mask_impl(df, column, k)?;
    let series = lookup(df, column)?.as_materialized_series();
    let trimmed = series.filter(&mask)?;
    debug!(column, input = series.len(), kept = trimmed.len(), "trimmed column");
    Ok(trimmed)
}

/// Rows of the frame whose `column` value lies inside the fences
pub(crate) fn trim_outlier_rows_impl(df: &DataFrame, column: &str, k: f64) -> Result<DataFrame> {
    let mask = outlier_mask_impl(df, column, k)?;
    Ok(df.filter(&mask)?)
}

pub(crate) fn iqr_fences_impl(df: &DataFrame, column: &str, k: f64) -> Result<IqrFences> {
    let values = numeric_values(lookup(df, column)?)?;
    Ok(IqrFences::from_sample(&values, k)?)
}

pub(crate) fn summary_impl(df: &DataFrame, column: &str) -> Result<Summary> {
    let values = numeric_values(lookup(df, column)?)?;
    Ok(Summary::from_sample(&values)?)
}
