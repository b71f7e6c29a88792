//! Student's t tests and one-way ANOVA

use crate::distributions::{f_upper_tail, t_p_value};
use crate::types::{StatTest, TestOutcome};
use explore_core::{Alternative, Error, Result};
use statrs::statistics::Statistics;
use tracing::debug;

fn require(n: usize, expected: usize) -> Result<()> {
    if n < expected {
        Err(Error::InsufficientData {
            expected,
            actual: n,
        })
    } else {
        Ok(())
    }
}

/// Two-sample t test on independent samples
///
/// With `equal_variances` the pooled-variance Student test is used, otherwise
/// Welch's test with Welch-Satterthwaite degrees of freedom.
pub fn ttest_independent(
    a: &[f64],
    b: &[f64],
    equal_variances: bool,
    alternative: Alternative,
) -> Result<TestOutcome> {
    require(a.len(), 2)?;
    require(b.len(), 2)?;
    let (n1, n2) = (a.len() as f64, b.len() as f64);
    let (v1, v2) = (a.iter().variance(), b.iter().variance());

    let (denominator, df) = if equal_variances {
        let df = n1 + n2 - 2.0;
        let pooled = ((n1 - 1.0) * v1 + (n2 - 1.0) * v2) / df;
        ((pooled * (1.0 / n1 + 1.0 / n2)).sqrt(), df)
    } else {
        let (vn1, vn2) = (v1 / n1, v2 / n2);
        let df = (vn1 + vn2).powi(2) / (vn1 * vn1 / (n1 - 1.0) + vn2 * vn2 / (n2 - 1.0));
        ((vn1 + vn2).sqrt(), df)
    };
    if denominator <= 0.0 {
        return Err(Error::Computation(
            "t statistic undefined: both samples have zero variance".to_string(),
        ));
    }

    let t = (a.iter().mean() - b.iter().mean()) / denominator;
    let p_value = t_p_value(t, df, alternative)?;
    debug!(n1, n2, equal_variances, t, df, p_value, "independent t test");
    Ok(TestOutcome::new(StatTest::TTestIndependent, t, p_value))
}

/// t test on paired samples (a one-sample test of `a - b` against zero)
pub fn ttest_paired(a: &[f64], b: &[f64], alternative: Alternative) -> Result<TestOutcome> {
    if a.len() != b.len() {
        return Err(Error::size_mismatch(a.len(), b.len(), "paired t test"));
    }
    let differences: Vec<f64> = a.iter().zip(b).map(|(x, y)| x - y).collect();
    require(differences.len(), 2)?;

    let n = differences.len() as f64;
    let sd = differences.iter().std_dev();
    if sd <= 0.0 {
        return Err(Error::Computation(
            "t statistic undefined: the paired differences are constant".to_string(),
        ));
    }
    let t = differences.iter().mean() / (sd / n.sqrt());
    let p_value = t_p_value(t, n - 1.0, alternative)?;
    debug!(n, t, p_value, "paired t test");
    Ok(TestOutcome::new(StatTest::TTestPaired, t, p_value))
}

/// F statistic and degrees of freedom of a one-way layout
pub(crate) fn anova_f(groups: &[&[f64]]) -> Result<(f64, f64, f64)> {
    if groups.len() < 2 {
        return Err(Error::arity(
            StatTest::OneWayAnova.name(),
            "at least 2",
            groups.len(),
        ));
    }
    for group in groups {
        require(group.len(), 1)?;
    }
    let k = groups.len() as f64;
    let total: usize = groups.iter().map(|g| g.len()).sum();
    let n = total as f64;
    if total <= groups.len() {
        return Err(Error::InsufficientData {
            expected: groups.len() + 1,
            actual: total,
        });
    }

    let grand_mean = groups.iter().flat_map(|g| g.iter()).sum::<f64>() / n;
    let mut ss_between = 0.0;
    let mut ss_within = 0.0;
    for group in groups {
        let mean = group.iter().sum::<f64>() / group.len() as f64;
        ss_between += group.len() as f64 * (mean - grand_mean).powi(2);
        ss_within += group.iter().map(|x| (x - mean).powi(2)).sum::<f64>();
    }
    if ss_within <= 0.0 {
        return Err(Error::Computation(
            "F statistic undefined: every group is constant".to_string(),
        ));
    }

    let (df_between, df_within) = (k - 1.0, n - k);
    let f = (ss_between / df_between) / (ss_within / df_within);
    Ok((f, df_between, df_within))
}

/// One-way analysis of variance
pub fn one_way_anova(groups: &[&[f64]]) -> Result<TestOutcome> {
    let (f, d1, d2) = anova_f(groups)?;
    let p_value = f_upper_tail(f, d1, d2)?;
    debug!(groups = groups.len(), f, d1, d2, p_value, "one-way anova");
    Ok(TestOutcome::new(StatTest::OneWayAnova, f, p_value))
}
