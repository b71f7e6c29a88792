//! Levene's test for homogeneity of variances

use crate::distributions::f_upper_tail;
use crate::parametric::anova_f;
use crate::types::{StatTest, TestOutcome};
use explore_core::{Error, LeveneCenter, Result};
use explore_quantile::median_sorted;
use tracing::debug;

/// Cut `proportion` of the observations from each end of sorted data
fn trim_both(sorted: &[f64], proportion: f64) -> &[f64] {
    let cut = (proportion * sorted.len() as f64).floor() as usize;
    &sorted[cut..sorted.len() - cut]
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Levene's test; the F test of the absolute deviations from each group's centre
///
/// With [`LeveneCenter::Trimmed`] the groups themselves are trimmed first and
/// deviations are taken from the trimmed mean.
pub fn levene(groups: &[&[f64]], center: LeveneCenter) -> Result<TestOutcome> {
    StatTest::Levene.check_arity(groups.len())?;
    if let LeveneCenter::Trimmed(p) = center {
        if !(0.0..0.5).contains(&p) {
            return Err(Error::InvalidArgument(format!(
                "trim proportion {p} must be in [0, 0.5)"
            )));
        }
    }

    let mut deviations: Vec<Vec<f64>> = Vec::with_capacity(groups.len());
    for group in groups {
        if group.is_empty() {
            return Err(Error::empty_input());
        }
        let mut sorted = group.to_vec();
        sorted.sort_by(f64::total_cmp);

        let (values, centre) = match center {
            LeveneCenter::Mean => (&sorted[..], mean(&sorted)),
            LeveneCenter::Median => (&sorted[..], median_sorted(&sorted)?),
            LeveneCenter::Trimmed(p) => {
                let kept = trim_both(&sorted, p);
                (kept, mean(kept))
            }
        };
        deviations.push(values.iter().map(|x| (x - centre).abs()).collect());
    }

    let refs: Vec<&[f64]> = deviations.iter().map(Vec::as_slice).collect();
    let (w, d1, d2) = anova_f(&refs)?;
    let p_value = f_upper_tail(w, d1, d2)?;
    debug!(groups = groups.len(), center = center.name(), w, p_value, "levene");
    Ok(TestOutcome::new(StatTest::Levene, w, p_value))
}
