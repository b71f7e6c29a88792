//! Tail probabilities of the reference distributions

use explore_core::{Alternative, Error, Result};
use statrs::distribution::{ChiSquared, ContinuousCDF, FisherSnedecor, Normal, StudentsT};

/// P-value of a statistic with a symmetric null distribution
///
/// `cdf` is the null CDF; `Less` and `Greater` refer to the direction of the
/// first sample relative to the second.
fn symmetric_p_value(statistic: f64, alternative: Alternative, cdf: impl Fn(f64) -> f64) -> f64 {
    match alternative {
        Alternative::TwoSided => 2.0 * cdf(-statistic.abs()),
        Alternative::Less => cdf(statistic),
        Alternative::Greater => cdf(-statistic),
    }
}

/// P-value of a t statistic with `df` degrees of freedom
pub fn t_p_value(t: f64, df: f64, alternative: Alternative) -> Result<f64> {
    let dist = StudentsT::new(0.0, 1.0, df).map_err(Error::distribution)?;
    Ok(symmetric_p_value(t, alternative, |x| dist.cdf(x)))
}

/// P-value of a standard normal score
pub fn z_p_value(z: f64, alternative: Alternative) -> Result<f64> {
    let dist = standard_normal()?;
    Ok(symmetric_p_value(z, alternative, |x| dist.cdf(x)))
}

/// Upper tail of F(d1, d2)
pub fn f_upper_tail(f: f64, d1: f64, d2: f64) -> Result<f64> {
    let dist = FisherSnedecor::new(d1, d2).map_err(Error::distribution)?;
    Ok(1.0 - dist.cdf(f))
}

/// Upper tail of a chi-square distribution
pub fn chi_squared_upper_tail(x: f64, df: f64) -> Result<f64> {
    let dist = ChiSquared::new(df).map_err(Error::distribution)?;
    Ok(1.0 - dist.cdf(x))
}

/// Upper tail of the standard normal
pub fn normal_upper_tail(z: f64) -> Result<f64> {
    Ok(standard_normal()?.cdf(-z))
}

pub(crate) fn standard_normal() -> Result<Normal> {
    Normal::new(0.0, 1.0).map_err(Error::distribution)
}
