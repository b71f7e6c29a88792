//! Column lookup and numeric conversion

use crate::{Error, Result};
use explore_core::{NamedColumn, Observation};
use polars::prelude::*;

pub(crate) fn lookup<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name)
        .map_err(|_| Error::InvalidColumn(name.to_string()))
}

pub(crate) fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float64
            | DataType::Float32
            | DataType::Int64
            | DataType::Int32
            | DataType::Int16
            | DataType::Int8
            | DataType::UInt64
            | DataType::UInt32
            | DataType::UInt16
            | DataType::UInt8
    )
}

/// Values of a numeric column as `f64`; nulls and `NaN` become `None`
pub(crate) fn numeric_values(column: &Column) -> Result<Vec<Option<f64>>> {
    let dtype = column.dtype();
    if !is_numeric(dtype) {
        return Err(Error::TypeMismatch {
            expected: "numeric".to_string(),
            got: format!("{dtype:?}"),
        });
    }
    let float_column = match dtype {
        DataType::Float64 => column.clone(),
        _ => column.cast(&DataType::Float64)?,
    };
    let ca = float_column.f64()?;
    Ok(ca.into_iter().map(|v| v.and_then(|x| x.observed())).collect())
}

pub(crate) fn named_column(df: &DataFrame, name: &str) -> Result<NamedColumn> {
    let column = lookup(df, name)?;
    Ok(NamedColumn::new(name, numeric_values(column)?))
}

pub(crate) fn named_columns(df: &DataFrame, names: &[&str]) -> Result<Vec<NamedColumn>> {
    names.iter().map(|name| named_column(df, name)).collect()
}

/// Names of every numeric column, in frame order
pub(crate) fn numeric_column_names(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|c| is_numeric(c.dtype()))
        .map(|c| c.name().to_string())
        .collect()
}

pub(crate) fn numeric_columns(df: &DataFrame) -> Result<Vec<NamedColumn>> {
    let names = numeric_column_names(df);
    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    named_columns(df, &names)
}
