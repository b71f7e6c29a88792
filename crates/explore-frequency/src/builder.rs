//! Frequency table construction from raw values or pre-aggregated counts

use crate::types::FrequencyTable;
use explore_core::{Error, Observation, Result};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// How the input of a frequency table should be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrequencyMode {
    /// Count occurrences of each distinct value; rows sorted by value
    RawValues,
    /// Input already maps buckets to counts; rows kept in input order
    PreAggregated,
}

impl FrequencyMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::RawValues => "raw_values",
            Self::PreAggregated => "pre_aggregated",
        }
    }
}

impl fmt::Display for FrequencyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FrequencyMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raw" | "values" | "raw_values" => Ok(Self::RawValues),
            "pre_aggregated" | "preaggregated" | "counts" => Ok(Self::PreAggregated),
            other => Err(Error::InvalidArgument(format!(
                "unknown frequency table mode '{other}'"
            ))),
        }
    }
}

/// Input of a frequency table
#[derive(Debug, Clone, PartialEq)]
pub enum FrequencySource<K> {
    /// A column of values; `None` entries are missing
    Values(Vec<Option<K>>),
    /// `(bucket, count)` pairs; `None` counts are missing
    Counts(Vec<(K, Option<u64>)>),
}

/// Build a frequency table, checking that the source matches the mode
///
/// `RawValues` requires [`FrequencySource::Values`] and `PreAggregated`
/// requires [`FrequencySource::Counts`]; any other pairing is an
/// `InvalidArgument`.
pub fn build_frequency_table<K: Ord>(
    source: FrequencySource<K>,
    mode: FrequencyMode,
) -> Result<FrequencyTable<K>> {
    match (source, mode) {
        (FrequencySource::Values(values), FrequencyMode::RawValues) => {
            Ok(FrequencyTable::from_values(values))
        }
        (FrequencySource::Counts(counts), FrequencyMode::PreAggregated) => {
            Ok(FrequencyTable::from_counts(counts))
        }
        (FrequencySource::Values(_), FrequencyMode::PreAggregated) => Err(Error::InvalidArgument(
            "pre_aggregated mode needs (bucket, count) pairs, got raw values".to_string(),
        )),
        (FrequencySource::Counts(_), FrequencyMode::RawValues) => Err(Error::InvalidArgument(
            "raw_values mode needs a column of values, got (bucket, count) pairs".to_string(),
        )),
    }
}

impl<K: Ord> FrequencyTable<K> {
    /// Count occurrences of each distinct observed value, sorted ascending
    ///
    /// Missing (`None`) entries are dropped before counting, so the relative
    /// frequencies are shares of the observed values.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<K>>,
    {
        let mut counts: BTreeMap<K, u64> = BTreeMap::new();
        let mut missing = 0usize;
        for value in values {
            match value {
                Some(v) => *counts.entry(v).or_insert(0) += 1,
                None => missing += 1,
            }
        }
        debug!(distinct = counts.len(), missing, "counted raw values");
        Self::from_ordered_counts(counts.into_iter().collect())
    }
}

impl<K> FrequencyTable<K> {
    /// Take pre-aggregated counts in the given order
    ///
    /// Pairs whose count is missing are dropped.
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (K, Option<u64>)>,
    {
        let kept: Vec<(K, u64)> = counts
            .into_iter()
            .filter_map(|(k, c)| c.map(|c| (k, c)))
            .collect();
        debug!(buckets = kept.len(), "took pre-aggregated counts");
        Self::from_ordered_counts(kept)
    }

    /// Take pre-aggregated counts stored as floats
    ///
    /// `NaN` counts are missing and dropped; every other count must be a
    /// finite, non-negative integer.
    pub fn from_float_counts<I>(counts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
    {
        let mut kept = Vec::new();
        for (key, count) in counts {
            let Some(count) = count.observed() else {
                continue;
            };
            if !count.is_finite() || count < 0.0 || count.fract() != 0.0 {
                return Err(Error::InvalidInput(format!(
                    "pre-aggregated count {count} is not a non-negative integer"
                )));
            }
            kept.push((key, count as u64));
        }
        Ok(Self::from_ordered_counts(kept))
    }
}

impl FrequencyTable<OrderedFloat<f64>> {
    /// Frequency table of a numeric sample; missing entries are dropped
    pub fn from_observations<T: Observation>(sample: &[T]) -> Self {
        Self::from_values(sample.iter().map(|v| v.observed().map(OrderedFloat)))
    }
}
