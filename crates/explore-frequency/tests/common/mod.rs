//! Common test utilities for explore-frequency tests

use explore_frequency::FrequencyTable;

/// Tolerance for sums of relative frequencies
pub const TOLERANCE: f64 = 1e-9;

/// Build a raw-mode table from plain integers
pub fn table_of(values: &[i64]) -> FrequencyTable<i64> {
    FrequencyTable::from_values(values.iter().copied().map(Some))
}

/// Sum of the relative frequency column
pub fn relative_sum<K>(table: &FrequencyTable<K>) -> f64 {
    table.relative_frequencies().iter().sum()
}
