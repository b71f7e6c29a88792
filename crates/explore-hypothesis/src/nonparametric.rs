//! Rank-based tests: Wilcoxon signed-rank, Mann-Whitney U, Friedman, Kruskal-Wallis

use crate::distributions::{chi_squared_upper_tail, normal_upper_tail, z_p_value};
use crate::ranks::{average_ranks, has_ties, tie_term};
use crate::types::{StatTest, TestOutcome};
use explore_core::{Alternative, Error, Result};
use tracing::debug;

/// Largest number of non-zero differences for the exact signed-rank distribution
pub const WILCOXON_EXACT_MAX_N: usize = 50;

/// Exact Mann-Whitney distribution applies when either sample is this small
pub const MANN_WHITNEY_EXACT_MAX_N: usize = 8;

/// Number of subsets of `{1, ..., n}` with each possible sum
fn signed_rank_counts(n: usize) -> Vec<f64> {
    let max = n * (n + 1) / 2;
    let mut counts = vec![0.0; max + 1];
    counts[0] = 1.0;
    for rank in 1..=n {
        for sum in (rank..=max).rev() {
            counts[sum] += counts[sum - rank];
        }
    }
    counts
}

/// Wilcoxon signed-rank test on differences
///
/// Zero differences are discarded. The two-sided statistic is
/// `min(T+, T-)`; the one-sided ones report `T+`.
pub fn wilcoxon(differences: &[f64], alternative: Alternative) -> Result<TestOutcome> {
    let d: Vec<f64> = differences.iter().copied().filter(|&x| x != 0.0).collect();
    let zeros = differences.len() - d.len();
    let n = d.len();
    if n == 0 {
        return Err(Error::InsufficientData {
            expected: 1,
            actual: 0,
        });
    }

    let magnitudes: Vec<f64> = d.iter().map(|x| x.abs()).collect();
    let ranks = average_ranks(&magnitudes);
    let r_plus: f64 = d.iter().zip(&ranks).filter(|(x, _)| **x > 0.0).map(|(_, r)| r).sum();
    let r_minus: f64 = d.iter().zip(&ranks).filter(|(x, _)| **x < 0.0).map(|(_, r)| r).sum();
    let statistic = match alternative {
        Alternative::TwoSided => r_plus.min(r_minus),
        _ => r_plus,
    };

    if n <= WILCOXON_EXACT_MAX_N && zeros == 0 && !has_ties(&magnitudes) {
        let counts = signed_rank_counts(n);
        let total = 2f64.powi(n as i32);
        // r_plus is an integer without ties
        let t = r_plus.round() as usize;
        let p_less = counts[..=t].iter().sum::<f64>() / total;
        let p_greater = counts[t..].iter().sum::<f64>() / total;
        let p_value = match alternative {
            Alternative::TwoSided => 2.0 * p_less.min(p_greater),
            Alternative::Less => p_less,
            Alternative::Greater => p_greater,
        };
        debug!(n, r_plus, p_value, "wilcoxon exact");
        return Ok(TestOutcome::exact(StatTest::Wilcoxon, statistic, p_value));
    }

    let nf = n as f64;
    let mean = nf * (nf + 1.0) / 4.0;
    let variance = (nf * (nf + 1.0) * (2.0 * nf + 1.0) - 0.5 * tie_term(&magnitudes)) / 24.0;
    if variance <= 0.0 {
        return Err(Error::Computation(
            "signed-rank variance is zero".to_string(),
        ));
    }
    let z = (statistic - mean) / variance.sqrt();
    let p_value = z_p_value(z, alternative)?;
    debug!(n, zeros, z, p_value, "wilcoxon normal approximation");
    Ok(TestOutcome::new(StatTest::Wilcoxon, statistic, p_value))
}

/// Wilcoxon signed-rank test of two paired samples (`a - b`)
pub fn wilcoxon_paired(a: &[f64], b: &[f64], alternative: Alternative) -> Result<TestOutcome> {
    if a.len() != b.len() {
        return Err(Error::size_mismatch(a.len(), b.len(), "Wilcoxon signed-rank test"));
    }
    let differences: Vec<f64> = a.iter().zip(b).map(|(x, y)| x - y).collect();
    wilcoxon(&differences, alternative)
}

/// Number of arrangements giving each value of U for samples of sizes `m` and `n`
///
/// These are the coefficients of the Gaussian binomial `[m + n choose m]_q`,
/// built one factor `(1 - q^(n+i)) / (1 - q^i)` at a time.
fn mann_whitney_counts(m: usize, n: usize) -> Vec<f64> {
    let (m, n) = (m.min(n), m.max(n));
    let mut counts = vec![0.0; m * n + 1];
    counts[0] = 1.0;
    for i in 1..=m {
        let up = n + i;
        for u in (up..counts.len()).rev() {
            counts[u] -= counts[u - up];
        }
        for u in i..counts.len() {
            counts[u] += counts[u - i];
        }
    }
    counts
}

/// Mann-Whitney U test; the statistic is U of the first sample
pub fn mann_whitney(a: &[f64], b: &[f64], alternative: Alternative) -> Result<TestOutcome> {
    for sample in [a, b] {
        if sample.is_empty() {
            return Err(Error::empty_input());
        }
    }
    let (n1, n2) = (a.len(), b.len());
    let combined: Vec<f64> = a.iter().chain(b).copied().collect();
    let ranks = average_ranks(&combined);

    let (n1f, n2f) = (n1 as f64, n2 as f64);
    let r1: f64 = ranks[..n1].iter().sum();
    let u1 = r1 - n1f * (n1f + 1.0) / 2.0;
    let u2 = n1f * n2f - u1;
    let u = match alternative {
        Alternative::Greater => u1,
        Alternative::Less => u2,
        Alternative::TwoSided => u1.max(u2),
    };
    let two_sided = alternative == Alternative::TwoSided;

    let exact = n1.min(n2) <= MANN_WHITNEY_EXACT_MAX_N && !has_ties(&combined);
    let p_value = if exact {
        let counts = mann_whitney_counts(n1, n2);
        let total: f64 = counts.iter().sum();
        let start = (u.round() as usize).min(counts.len());
        let p = counts[start..].iter().sum::<f64>() / total;
        if two_sided {
            2.0 * p
        } else {
            p
        }
    } else {
        let n = n1f + n2f;
        let sigma = (n1f * n2f / 12.0 * ((n + 1.0) - tie_term(&combined) / (n * (n - 1.0)))).sqrt();
        if sigma.is_nan() || sigma <= 0.0 {
            return Err(Error::Computation(
                "Mann-Whitney variance is zero; all values are identical".to_string(),
            ));
        }
        let z = (u - n1f * n2f / 2.0 - 0.5) / sigma;
        let p = normal_upper_tail(z)?;
        if two_sided {
            2.0 * p
        } else {
            p
        }
    };

    debug!(n1, n2, u1, exact, p_value, "mann-whitney");
    let outcome = if exact {
        TestOutcome::exact(StatTest::MannWhitney, u1, p_value)
    } else {
        TestOutcome::new(StatTest::MannWhitney, u1, p_value)
    };
    Ok(outcome)
}

/// Kruskal-Wallis H test
pub fn kruskal_wallis(groups: &[&[f64]]) -> Result<TestOutcome> {
    StatTest::KruskalWallis.check_arity(groups.len())?;
    if groups.iter().any(|g| g.is_empty()) {
        return Err(Error::empty_input());
    }

    let combined: Vec<f64> = groups.iter().flat_map(|g| g.iter().copied()).collect();
    let n = combined.len() as f64;
    let ranks = average_ranks(&combined);

    let mut offset = 0;
    let mut weighted = 0.0;
    for group in groups {
        let rank_sum: f64 = ranks[offset..offset + group.len()].iter().sum();
        weighted += rank_sum * rank_sum / group.len() as f64;
        offset += group.len();
    }
    let correction = 1.0 - tie_term(&combined) / (n * n * n - n);
    if correction <= 0.0 {
        return Err(Error::Computation(
            "Kruskal-Wallis is undefined when all values are identical".to_string(),
        ));
    }
    let h = (12.0 / (n * (n + 1.0)) * weighted - 3.0 * (n + 1.0)) / correction;
    let df = (groups.len() - 1) as f64;
    let p_value = chi_squared_upper_tail(h, df)?;
    debug!(groups = groups.len(), h, p_value, "kruskal-wallis");
    Ok(TestOutcome::new(StatTest::KruskalWallis, h, p_value))
}

/// Friedman test for repeated measures
///
/// `treatments[j][i]` is the measurement of subject `i` under treatment `j`;
/// every treatment must cover the same subjects.
pub fn friedman(treatments: &[&[f64]]) -> Result<TestOutcome> {
    StatTest::Friedman.check_arity(treatments.len())?;
    let k = treatments.len();
    let n = treatments[0].len();
    for treatment in &treatments[1..] {
        if treatment.len() != n {
            return Err(Error::size_mismatch(n, treatment.len(), "Friedman test"));
        }
    }
    if n == 0 {
        return Err(Error::empty_input());
    }

    let mut rank_sums = vec![0.0; k];
    let mut ties = 0.0;
    for i in 0..n {
        let row: Vec<f64> = treatments.iter().map(|t| t[i]).collect();
        for (sum, rank) in rank_sums.iter_mut().zip(average_ranks(&row)) {
            *sum += rank;
        }
        ties += tie_term(&row);
    }

    let (kf, nf) = (k as f64, n as f64);
    let correction = 1.0 - ties / (kf * (kf * kf - 1.0) * nf);
    if correction <= 0.0 {
        return Err(Error::Computation(
            "Friedman test is undefined when every row is constant".to_string(),
        ));
    }
    let ss: f64 = rank_sums.iter().map(|r| r * r).sum();
    let chi2 = (12.0 / (kf * nf * (kf + 1.0)) * ss - 3.0 * nf * (kf + 1.0)) / correction;
    let p_value = chi_squared_upper_tail(chi2, kf - 1.0)?;
    debug!(k, n, chi2, p_value, "friedman");
    Ok(TestOutcome::new(StatTest::Friedman, chi2, p_value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PValueMethod;
    use approx::assert_relative_eq;

    #[test]
    fn test_signed_rank_counts() {
        // Subsets of {1, 2, 3}: sums 0,1,2,3,3,4,5,6
        assert_eq!(signed_rank_counts(3), vec![1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0]);
        let total: f64 = signed_rank_counts(10).iter().sum();
        assert_eq!(total, 1024.0);
    }

    #[test]
    fn test_mann_whitney_counts() {
        // [4 choose 2]_q = 1 + q + 2q^2 + q^3 + q^4
        assert_eq!(mann_whitney_counts(2, 2), vec![1.0, 1.0, 2.0, 1.0, 1.0]);
        let total: f64 = mann_whitney_counts(3, 5).iter().sum();
        assert_eq!(total, 56.0);
        assert_eq!(mann_whitney_counts(3, 5), mann_whitney_counts(5, 3));
    }

    #[test]
    fn test_wilcoxon_exact_all_positive() {
        let d = [1.0, 2.0, 3.0, 4.0, 5.0];
        let outcome = wilcoxon(&d, Alternative::TwoSided).unwrap();
        assert_eq!(outcome.method, PValueMethod::Exact);
        assert_eq!(outcome.statistic, 0.0);
        assert_relative_eq!(outcome.p_value, 2.0 / 32.0, epsilon = 1e-12);

        let greater = wilcoxon(&d, Alternative::Greater).unwrap();
        assert_eq!(greater.statistic, 15.0);
        assert_relative_eq!(greater.p_value, 1.0 / 32.0, epsilon = 1e-12);
    }

    #[test]
    fn test_wilcoxon_zeros_force_normal_approximation() {
        let outcome = wilcoxon(&[0.0, 1.0, -2.0, 3.0, 4.0], Alternative::TwoSided).unwrap();
        assert_eq!(outcome.method, PValueMethod::Asymptotic);
        assert_eq!(outcome.statistic, 2.0);
        assert!(wilcoxon(&[0.0, 0.0], Alternative::TwoSided).is_err());
    }

    #[test]
    fn test_wilcoxon_paired_length_check() {
        assert!(matches!(
            wilcoxon_paired(&[1.0, 2.0], &[1.0], Alternative::TwoSided),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_mann_whitney_exact_separated() {
        let outcome =
            mann_whitney(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], Alternative::TwoSided).unwrap();
        assert_eq!(outcome.method, PValueMethod::Exact);
        assert_eq!(outcome.statistic, 0.0);
        // P(U >= 9) = 1/20, doubled
        assert_relative_eq!(outcome.p_value, 0.1, epsilon = 1e-12);

        let less = mann_whitney(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], Alternative::Less).unwrap();
        assert_relative_eq!(less.p_value, 0.05, epsilon = 1e-12);
    }

    #[test]
    fn test_mann_whitney_identical_values() {
        assert!(matches!(
            mann_whitney(&[2.0, 2.0], &[2.0, 2.0], Alternative::TwoSided),
            Err(Error::Computation(_))
        ));
    }

    #[test]
    fn test_kruskal_identical_values() {
        assert!(matches!(
            kruskal_wallis(&[&[1.0, 1.0], &[1.0]]),
            Err(Error::Computation(_))
        ));
    }

    #[test]
    fn test_friedman_perfect_agreement() {
        // Every subject ranks the treatments identically
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [2.0, 3.0, 4.0, 5.0];
        let c = [3.0, 4.0, 5.0, 6.0];
        let outcome = friedman(&[&a, &b, &c]).unwrap();
        // 12/(k n (k+1)) * (16 + 64 + 144) - 3 n (k+1) = 56 - 48
        assert_relative_eq!(outcome.statistic, 8.0, epsilon = 1e-12);
        assert_relative_eq!(outcome.p_value, (-4.0f64).exp(), epsilon = 1e-9);
    }

    #[test]
    fn test_friedman_shape_checks() {
        assert!(matches!(
            friedman(&[&[1.0], &[2.0]]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            friedman(&[&[1.0, 2.0], &[2.0], &[3.0, 1.0]]),
            Err(Error::InvalidInput(_))
        ));
    }
}
