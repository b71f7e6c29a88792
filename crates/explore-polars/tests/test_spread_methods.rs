//! Outlier trimming and summaries on DataFrame columns

mod common;

use approx::assert_relative_eq;
use common::*;
use explore_polars::{Error, ExploreFrameExt};
use polars::prelude::*;
use proptest::prelude::*;

#[test]
fn test_trim_drops_extreme_value() {
    let df = df!["x" => [1.0, 2.0, 3.0, 4.0, 5.0, 100.0]].unwrap();
    let trimmed = df.trim_outliers("x", 1.5).unwrap();
    let values: Vec<f64> = trimmed.f64().unwrap().into_no_null_iter().collect();
    assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(trimmed.name().as_str(), "x");
}

#[test]
fn test_trim_keeps_integer_dtype_and_drops_nulls() {
    let df = df!["n" => [Some(3i32), None, Some(4), Some(5), Some(4), Some(90)]].unwrap();
    let trimmed = df.trim_outliers("n", 1.5).unwrap();
    assert_eq!(trimmed.dtype(), &DataType::Int32);
    assert_eq!(trimmed.null_count(), 0);
    let values: Vec<i32> = trimmed.i32().unwrap().into_no_null_iter().collect();
    assert_eq!(values, vec![3, 4, 5, 4]);
}

#[test]
fn test_mask_aligned_with_rows() {
    let df = df!["x" => [Some(1.0), None, Some(2.0), Some(3.0), Some(-50.0)]].unwrap();
    let mask = df.outlier_mask("x", 1.5).unwrap();
    let mask: Vec<bool> = mask.into_no_null_iter().collect();
    assert_eq!(mask, vec![true, false, true, true, false]);
}

#[test]
fn test_trim_rows_filters_whole_frame() {
    let df = batches_df();
    let rows = df.trim_outlier_rows("c", 1.5).unwrap();
    assert_eq!(rows.height(), 9);
    assert_eq!(rows.width(), 3);
    assert!(f64_values(rows.column("c").unwrap()).iter().all(|&v| v < 10.0));
}

#[test]
fn test_fences_and_summary() {
    let df = df!["x" => [1.0, 2.0, 3.0, 4.0, 5.0, 100.0]].unwrap();
    let fences = df.iqr_fences("x", 1.5).unwrap();
    assert_relative_eq!(fences.lower, -1.5);
    assert_relative_eq!(fences.upper, 8.5);

    let summary = df.summary("x").unwrap();
    assert_eq!(summary.count, 6);
    assert_relative_eq!(summary.median, 3.5);
    assert_relative_eq!(summary.max, 100.0);
}

#[test]
fn test_negative_width_is_invalid_argument() {
    let df = df!["x" => [1.0, 2.0, 3.0]].unwrap();
    let err = df.trim_outliers("x", -0.5).unwrap_err();
    assert!(matches!(err.as_core(), Some(explore_core::Error::InvalidArgument(_))));
}

#[test]
fn test_non_numeric_column_rejected() {
    let df = df!["s" => ["a", "b", "c"]].unwrap();
    assert!(matches!(df.trim_outliers("s", 1.5), Err(Error::TypeMismatch { .. })));
    assert!(matches!(df.summary("nope"), Err(Error::InvalidColumn(_))));
}

#[test]
fn test_empty_column_trims_to_empty() {
    let df = DataFrame::new(vec![Series::new("x".into(), Vec::<f64>::new()).into()]).unwrap();
    assert_eq!(df.trim_outliers("x", 1.5).unwrap().len(), 0);
}

#[test]
fn test_trimmed_rows_keep_other_columns() -> anyhow::Result<()> {
    let df = df![
        "id" => ["a", "b", "c", "d", "e", "f"],
        "x" => [1.0, 2.0, 3.0, 4.0, 5.0, 100.0],
    ]?;
    let rows = df.trim_outlier_rows("x", 1.5)?;
    let ids: Vec<&str> = rows.column("id")?.str()?.into_no_null_iter().collect();
    assert_eq!(ids, vec!["a", "b", "c", "d", "e"]);
    Ok(())
}

proptest! {
    #[test]
    fn prop_frame_trim_matches_slice_trim(
        values in prop::collection::vec(-1e3f64..1e3, 1..60),
        k in 0.0f64..3.0,
    ) {
        let df = df!["x" => values.clone()].unwrap();
        let from_frame: Vec<f64> = df
            .trim_outliers("x", k)
            .unwrap()
            .f64()
            .unwrap()
            .into_no_null_iter()
            .collect();
        prop_assert_eq!(from_frame, explore_spread::trim_outliers(&values, k).unwrap());

        let mask = df.outlier_mask("x", k).unwrap();
        prop_assert_eq!(mask.len(), values.len());
    }
}
