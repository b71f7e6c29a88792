//! Shapiro-Wilk normality test
//!
//! W is computed with Royston's approximation to the coefficients (algorithm
//! AS R94) and its p-value from Royston's normalising transformation. The
//! approximation is calibrated for `3 <= n <= 5000`; larger samples are still
//! tested but the p-value may be inaccurate.

use crate::distributions::{normal_upper_tail, standard_normal};
use crate::types::{StatTest, TestOutcome};
use explore_core::{sorted_observed, Error, Observation, Result};
use statrs::distribution::ContinuousCDF;
use std::f64::consts::{FRAC_1_SQRT_2, PI};
use tracing::{debug, warn};

const MAX_CALIBRATED_N: usize = 5000;

// Polynomial coefficients, lowest order first
const C1: [f64; 6] = [0.0, 0.221157, -0.147981, -2.071190, 4.434685, -2.706056];
const C2: [f64; 6] = [0.0, 0.042981, -0.293762, -1.752461, 5.682633, -3.582633];
const C3: [f64; 4] = [0.5440, -0.39978, 0.025054, -6.714e-4];
const C4: [f64; 4] = [1.3822, -0.77857, 0.062767, -0.0020322];
const C5: [f64; 4] = [-1.5861, -0.31082, -0.083751, 0.0038915];
const C6: [f64; 3] = [-0.4803, -0.082676, 0.0030302];
const G: [f64; 2] = [-2.273, 0.459];

fn poly(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Shapiro-Wilk test of a sample; missing entries are ignored
pub fn shapiro_wilk<T: Observation>(sample: &[T]) -> Result<TestOutcome> {
    shapiro_wilk_sorted(&sorted_observed(sample))
}

/// Shapiro-Wilk test of sorted, missing-free data
pub fn shapiro_wilk_sorted(x: &[f64]) -> Result<TestOutcome> {
    let n = x.len();
    if n < 3 {
        return Err(Error::InsufficientData {
            expected: 3,
            actual: n,
        });
    }
    if n > MAX_CALIBRATED_N {
        warn!(n, "Shapiro-Wilk p-value may be inaccurate for n > 5000");
    }
    let range = x[n - 1] - x[0];
    if range <= 0.0 {
        return Err(Error::Computation(
            "Shapiro-Wilk is undefined for a sample with zero range".to_string(),
        ));
    }

    let (w, p_value) = if n == 3 {
        exact_three(x)
    } else {
        let a = coefficients(n)?;
        let w = statistic(x, &a).min(1.0);
        (w, p_value(w, n)?)
    };

    debug!(n, w, p_value, "shapiro-wilk");
    Ok(TestOutcome::new(StatTest::ShapiroWilk, w, p_value))
}

/// n = 3 has an exact null distribution
fn exact_three(x: &[f64]) -> (f64, f64) {
    let mean = (x[0] + x[1] + x[2]) / 3.0;
    let ss: f64 = x.iter().map(|v| (v - mean).powi(2)).sum();
    let numerator = FRAC_1_SQRT_2 * (x[2] - x[0]);
    let w = (numerator * numerator / ss).clamp(0.75, 1.0);
    let p = (6.0 / PI) * (w.sqrt().asin() - (0.75f64).sqrt().asin());
    (w, p.clamp(0.0, 1.0))
}

/// Coefficients for the lower half of the order statistics
fn coefficients(n: usize) -> Result<Vec<f64>> {
    let half = n / 2;
    let normal = standard_normal()?;
    let nf = n as f64;

    let m: Vec<f64> = (0..half)
        .map(|i| normal.inverse_cdf((i as f64 + 1.0 - 0.375) / (nf + 0.25)))
        .collect();
    let summ2 = 2.0 * m.iter().map(|v| v * v).sum::<f64>();
    let ssumm2 = summ2.sqrt();
    let rsn = 1.0 / nf.sqrt();

    let a1 = poly(&C1, rsn) - m[0] / ssumm2;
    let mut a = vec![0.0; half];
    a[0] = a1;

    // n <= 5 corrects the first coefficient only, larger n the first two
    let (first_free, fac_num, fac_den) = if n > 5 {
        let a2 = poly(&C2, rsn) - m[1] / ssumm2;
        a[1] = a2;
        (
            2,
            summ2 - 2.0 * m[0] * m[0] - 2.0 * m[1] * m[1],
            1.0 - 2.0 * a1 * a1 - 2.0 * a2 * a2,
        )
    } else {
        (1, summ2 - 2.0 * m[0] * m[0], 1.0 - 2.0 * a1 * a1)
    };
    if fac_num <= 0.0 || fac_den <= 0.0 {
        return Err(Error::Computation(format!(
            "Shapiro-Wilk coefficients undefined for n = {n}"
        )));
    }
    let fac = (fac_num / fac_den).sqrt();
    for (ai, mi) in a.iter_mut().zip(&m).skip(first_free) {
        *ai = -mi / fac;
    }
    Ok(a)
}

fn statistic(x: &[f64], a: &[f64]) -> f64 {
    let n = x.len();
    let numerator: f64 = a
        .iter()
        .enumerate()
        .map(|(i, ai)| ai * (x[n - 1 - i] - x[i]))
        .sum();
    let mean = x.iter().sum::<f64>() / n as f64;
    let ss: f64 = x.iter().map(|v| (v - mean).powi(2)).sum();
    numerator * numerator / ss
}

fn p_value(w: f64, n: usize) -> Result<f64> {
    let nf = n as f64;
    let w1 = 1.0 - w;
    if w1 <= 0.0 {
        return Ok(1.0);
    }
    let y = w1.ln();

    let z = if n <= 11 {
        let gamma = poly(&G, nf);
        if y >= gamma {
            return Ok(0.0);
        }
        let y = -(gamma - y).ln();
        (y - poly(&C3, nf)) / poly(&C4, nf).exp()
    } else {
        let ln_n = nf.ln();
        (y - poly(&C5, ln_n)) / poly(&C6, ln_n).exp()
    };
    normal_upper_tail(z)
}
