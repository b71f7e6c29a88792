//! Frequency tables as data frames

use super::columns::{lookup, numeric_values};
use crate::{Error, Result};
use explore_frequency::{FrequencyMode, FrequencyTable, OrderedFloat};
use polars::prelude::*;
use tracing::debug;

pub const FREQUENCY: &str = "frequency";
pub const RELATIVE_FREQUENCY: &str = "relative_frequency";
pub const CUMULATIVE_FREQUENCY: &str = "cumulative_frequency";
pub const CUMULATIVE_RELATIVE_FREQUENCY: &str = "cumulative_relative_frequency";
/// Key column of a pre-aggregated table labelled by row position
pub const BUCKET: &str = "bucket";

/// Key column followed by the four frequency columns
fn table_frame<K>(table: &FrequencyTable<K>, key: Column) -> Result<DataFrame> {
    let columns: Vec<Column> = vec![
        key,
        Series::new(FREQUENCY.into(), table.frequencies()).into(),
        Series::new(RELATIVE_FREQUENCY.into(), table.relative_frequencies()).into(),
        Series::new(CUMULATIVE_FREQUENCY.into(), table.cumulative_frequencies()).into(),
        Series::new(
            CUMULATIVE_RELATIVE_FREQUENCY.into(),
            table.cumulative_relative_frequencies(),
        )
        .into(),
    ];
    Ok(DataFrame::new(columns)?)
}

fn keyed_frame<K, V>(
    table: &FrequencyTable<K>,
    name: PlSmallStr,
    key: impl Fn(&K) -> V,
) -> Result<DataFrame>
where
    Series: NamedFrom<Vec<V>, [V]>,
{
    let keys: Vec<V> = table.keys().map(key).collect();
    table_frame(table, Series::new(name, keys).into())
}

/// Count distinct values of a column, ascending
///
/// Integer and float keys are widened for counting and cast back, so the key
/// column keeps the dtype of the source column.
fn raw_values_table(column: &Column) -> Result<DataFrame> {
    let name = column.name().clone();
    let mut frame = match column.dtype() {
        DataType::Boolean => {
            let table = FrequencyTable::from_values(column.bool()?.into_iter());
            keyed_frame(&table, name.clone(), |k| *k)
        }
        DataType::String => {
            let table = FrequencyTable::from_values(column.str()?.into_iter());
            keyed_frame(&table, name.clone(), |k| *k)
        }
        DataType::Int64 | DataType::Int32 | DataType::Int16 | DataType::Int8 => {
            let ints = column.cast(&DataType::Int64)?;
            let table = FrequencyTable::from_values(ints.i64()?.into_iter());
            keyed_frame(&table, name.clone(), |k| *k)
        }
        DataType::UInt64 | DataType::UInt32 | DataType::UInt16 | DataType::UInt8 => {
            let ints = column.cast(&DataType::UInt64)?;
            let table = FrequencyTable::from_values(ints.u64()?.into_iter());
            keyed_frame(&table, name.clone(), |k| *k)
        }
        DataType::Float64 | DataType::Float32 => {
            let values = numeric_values(column)?;
            let table =
                FrequencyTable::from_values(values.into_iter().map(|v| v.map(OrderedFloat)));
            keyed_frame(&table, name.clone(), |k| k.into_inner())
        }
        dt => Err(Error::TypeMismatch {
            expected: "integer, float, string or boolean".to_string(),
            got: format!("{dt:?}"),
        }),
    }?;

    let key = frame.column(name.as_str())?;
    if key.dtype() != column.dtype() {
        let key = key.cast(column.dtype())?;
        frame.with_column(key)?;
    }
    Ok(frame)
}

/// Validated `(row, count)` pairs of a count column; missing counts are dropped
fn counts_table(counts: &Column) -> Result<FrequencyTable<IdxSize>> {
    let values = numeric_values(counts)?;
    let pairs = values
        .into_iter()
        .enumerate()
        .map(|(row, count)| (row as IdxSize, count.unwrap_or(f64::NAN)));
    Ok(FrequencyTable::from_float_counts(pairs)?)
}

fn pre_aggregated_table(counts: &Column) -> Result<DataFrame> {
    let table = counts_table(counts)?;
    keyed_frame(&table, BUCKET.into(), |row| *row as u64)
}

pub(crate) fn frequency_table_impl(
    df: &DataFrame,
    column: &str,
    mode: FrequencyMode,
) -> Result<DataFrame> {
    let column = lookup(df, column)?;
    let frame = match mode {
        FrequencyMode::RawValues => raw_values_table(column)?,
        FrequencyMode::PreAggregated => pre_aggregated_table(column)?,
    };
    debug!(column = %column.name(), %mode, rows = frame.height(), "frequency table");
    Ok(frame)
}

pub(crate) fn frequency_table_by_impl(
    df: &DataFrame,
    label_column: &str,
    count_column: &str,
) -> Result<DataFrame> {
    let labels = lookup(df, label_column)?;
    let counts = lookup(df, count_column)?;
    let table = counts_table(counts)?;

    // Rows whose count was missing are gone; take the surviving labels
    let rows: Vec<IdxSize> = table.keys().copied().collect();
    let indices = IdxCa::from_vec("rows".into(), rows);
    let keys = labels.as_materialized_series().take(&indices)?;
    let frame = table_frame(&table, Column::from(keys))?;
    debug!(
        labels = label_column,
        counts = count_column,
        rows = frame.height(),
        "frequency table by label"
    );
    Ok(frame)
}
