//! Missing-value aware sample elements
//!
//! Every computation in the workspace follows one policy: missing entries are
//! dropped before anything is computed and never imputed. `Observation` is the
//! single place that decides what "missing" means for an element type.

use crate::{Error, Result};
use num_traits::ToPrimitive;

/// A sample element that may be missing
///
/// - `f64`/`f32`: `NaN` is missing
/// - integers: never missing
/// - `Option<T>`: `None` is missing, otherwise defers to `T`
pub trait Observation: Copy {
    /// The observed value, or `None` when the entry is missing
    fn observed(self) -> Option<f64>;

    /// Whether the entry is missing
    fn is_missing(self) -> bool {
        self.observed().is_none()
    }
}

impl Observation for f64 {
    #[inline]
    fn observed(self) -> Option<f64> {
        if self.is_nan() {
            None
        } else {
            Some(self)
        }
    }
}

impl Observation for f32 {
    #[inline]
    fn observed(self) -> Option<f64> {
        if self.is_nan() {
            None
        } else {
            Some(f64::from(self))
        }
    }
}

macro_rules! impl_integer_observation {
    ($($t:ty),*) => {
        $(
            impl Observation for $t {
                #[inline]
                fn observed(self) -> Option<f64> {
                    self.to_f64()
                }
            }
        )*
    };
}

impl_integer_observation!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<T: Observation> Observation for Option<T> {
    #[inline]
    fn observed(self) -> Option<f64> {
        self.and_then(Observation::observed)
    }
}

/// Collect the observed values of a sample, preserving order
pub fn observed_values<T: Observation>(sample: &[T]) -> Vec<f64> {
    sample.iter().filter_map(|v| v.observed()).collect()
}

/// Collect the observed values of a sample in ascending order
pub fn sorted_observed<T: Observation>(sample: &[T]) -> Vec<f64> {
    let mut values = observed_values(sample);
    values.sort_by(f64::total_cmp);
    values
}

/// A named numeric column, the unit the hypothesis tests operate on
#[derive(Debug, Clone, PartialEq)]
pub struct NamedColumn {
    name: String,
    values: Vec<Option<f64>>,
}

impl NamedColumn {
    /// Create a column from raw optional values
    pub fn new(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Create a column from any observation type, normalising missing entries to `None`
    pub fn from_observations<T: Observation>(name: impl Into<String>, values: &[T]) -> Self {
        Self::new(name, values.iter().map(|v| v.observed()).collect())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw values including missing entries
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Number of rows including missing entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Observed values in row order
    pub fn observed(&self) -> Vec<f64> {
        observed_values(&self.values)
    }

    /// Number of missing entries
    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_missing()).count()
    }
}

/// Listwise deletion for paired/repeated-measures data
///
/// All columns must have the same length. Any row with a missing entry in any
/// column is dropped from every column. Returns one vector per column.
pub fn complete_rows(columns: &[NamedColumn], context: &str) -> Result<Vec<Vec<f64>>> {
    let Some(first) = columns.first() else {
        return Ok(Vec::new());
    };
    let rows = first.len();
    for column in &columns[1..] {
        if column.len() != rows {
            return Err(Error::size_mismatch(rows, column.len(), context));
        }
    }

    let mut out: Vec<Vec<f64>> = vec![Vec::with_capacity(rows); columns.len()];
    for row in 0..rows {
        let values: Option<Vec<f64>> = columns
            .iter()
            .map(|c| c.values[row].observed())
            .collect();
        if let Some(values) = values {
            for (dst, v) in out.iter_mut().zip(values) {
                dst.push(v);
            }
        }
    }

    tracing::trace!(
        context,
        rows,
        complete = out.first().map_or(0, Vec::len),
        "listwise deletion"
    );
    Ok(out)
}
