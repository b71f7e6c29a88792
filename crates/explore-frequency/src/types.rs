//! Core types for frequency table representation

use serde::Serialize;
use std::fmt;

/// A single row of a frequency distribution table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyRow<K> {
    /// Distinct value or pre-aggregated bucket
    pub key: K,
    /// Absolute frequency
    pub frequency: u64,
    /// `frequency / total`
    pub relative_frequency: f64,
    /// Running sum of `frequency` in row order
    pub cumulative_frequency: u64,
    /// Running sum of `relative_frequency` in row order
    pub cumulative_relative_frequency: f64,
}

/// A frequency distribution table
///
/// Rows are kept in the order the cumulative sums were taken: ascending key
/// order for raw values, caller order for pre-aggregated counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyTable<K> {
    rows: Vec<FrequencyRow<K>>,
    total: u64,
}

impl<K> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            total: 0,
        }
    }
}

impl<K> FrequencyTable<K> {
    /// Build a table from `(key, count)` pairs already in row order
    ///
    /// A zero total leaves every relative field at 0.0.
    pub fn from_ordered_counts(counts: Vec<(K, u64)>) -> Self {
        let total: u64 = counts.iter().map(|(_, c)| c).sum();
        let total_f = total as f64;

        let mut rows = Vec::with_capacity(counts.len());
        let mut cumulative = 0u64;
        let mut cumulative_relative = 0.0;
        for (key, frequency) in counts {
            let relative_frequency = if total > 0 {
                frequency as f64 / total_f
            } else {
                0.0
            };
            cumulative += frequency;
            cumulative_relative += relative_frequency;
            rows.push(FrequencyRow {
                key,
                frequency,
                relative_frequency,
                cumulative_frequency: cumulative,
                cumulative_relative_frequency: cumulative_relative,
            });
        }

        Self { rows, total }
    }

    /// Get the rows
    pub fn rows(&self) -> &[FrequencyRow<K>] {
        &self.rows
    }

    /// Consume the table, returning its rows
    pub fn into_rows(self) -> Vec<FrequencyRow<K>> {
        self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of all absolute frequencies
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FrequencyRow<K>> {
        self.rows.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.rows.iter().map(|r| &r.key)
    }

    pub fn frequencies(&self) -> Vec<u64> {
        self.rows.iter().map(|r| r.frequency).collect()
    }

    pub fn relative_frequencies(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.relative_frequency).collect()
    }

    pub fn cumulative_frequencies(&self) -> Vec<u64> {
        self.rows.iter().map(|r| r.cumulative_frequency).collect()
    }

    pub fn cumulative_relative_frequencies(&self) -> Vec<f64> {
        self.rows
            .iter()
            .map(|r| r.cumulative_relative_frequency)
            .collect()
    }

    /// Look up the row for a key
    pub fn get(&self, key: &K) -> Option<&FrequencyRow<K>>
    where
        K: PartialEq,
    {
        self.rows.iter().find(|r| &r.key == key)
    }

    /// Map keys to another type, keeping every frequency column
    pub fn map_keys<U>(self, mut f: impl FnMut(K) -> U) -> FrequencyTable<U> {
        FrequencyTable {
            rows: self
                .rows
                .into_iter()
                .map(|r| FrequencyRow {
                    key: f(r.key),
                    frequency: r.frequency,
                    relative_frequency: r.relative_frequency,
                    cumulative_frequency: r.cumulative_frequency,
                    cumulative_relative_frequency: r.cumulative_relative_frequency,
                })
                .collect(),
            total: self.total,
        }
    }
}

impl<'a, K> IntoIterator for &'a FrequencyTable<K> {
    type Item = &'a FrequencyRow<K>;
    type IntoIter = std::slice::Iter<'a, FrequencyRow<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl<K: fmt::Display> fmt::Display for FrequencyTable<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<String> = self.rows.iter().map(|r| r.key.to_string()).collect();
        let key_width = keys.iter().map(String::len).max().unwrap_or(0).max(5);

        writeln!(
            f,
            "{:>key_width$} {:>10} {:>10} {:>10} {:>10}",
            "value", "freq", "rel", "cum", "cum_rel"
        )?;
        for (key, row) in keys.iter().zip(&self.rows) {
            writeln!(
                f,
                "{:>key_width$} {:>10} {:>10.4} {:>10} {:>10.4}",
                key,
                row.frequency,
                row.relative_frequency,
                row.cumulative_frequency,
                row.cumulative_relative_frequency
            )?;
        }
        Ok(())
    }
}
