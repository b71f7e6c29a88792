//! Common test utilities for explore-polars tests

#![allow(dead_code)]

use polars::prelude::*;

/// Ratings from a small survey, with one missing answer
pub fn ratings_df() -> DataFrame {
    df![
        "rating" => [Some(1i64), Some(2), Some(2), Some(3), None, Some(3), Some(3), Some(4), Some(5)],
        "channel" => ["web", "app", "app", "web", "store", "web", "app", "web", "web"],
    ]
    .unwrap()
}

/// Three groups of fill weights; the last one has a wild reading
pub fn batches_df() -> DataFrame {
    df![
        "a" => [8.88, 9.12, 9.04, 8.98, 9.00, 9.08, 9.01, 8.85, 9.06, 8.99],
        "b" => [8.88, 8.95, 9.29, 9.44, 9.15, 9.58, 8.36, 9.18, 8.67, 9.05],
        "c" => [8.95, 9.12, 8.95, 8.85, 9.03, 8.84, 9.07, 8.98, 8.86, 98.98],
    ]
    .unwrap()
}

pub fn f64_values(column: &Column) -> Vec<f64> {
    column.f64().unwrap().into_no_null_iter().collect()
}

pub fn u64_values(column: &Column) -> Vec<u64> {
    column.u64().unwrap().into_no_null_iter().collect()
}
