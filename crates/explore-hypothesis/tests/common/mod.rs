//! Shared datasets for the hypothesis integration tests

#![allow(dead_code)]

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

/// Absolute tolerance for statistics and p-values checked against
/// independently computed references
pub const TOLERANCE: f64 = 1e-7;

/// Heights (cm) with a long right tail
pub const HEIGHTS: [f64; 11] = [
    148.0, 154.0, 158.0, 160.0, 161.0, 162.0, 166.0, 170.0, 182.0, 195.0, 236.0,
];

/// Symmetric, bell-shaped scores
pub const NEAR_NORMAL: [f64; 20] = [
    2.5, 3.1, 2.8, 3.6, 4.0, 2.2, 3.3, 2.9, 3.0, 3.8, 2.7, 3.2, 3.5, 2.4, 3.1, 2.6, 3.4, 2.9, 3.7,
    3.0,
];

/// Paired differences with two negative values and no ties
pub const SIGNED_DIFFERENCES: [f64; 15] = [
    6.0, 8.0, 14.0, 16.0, 23.0, 24.0, 28.0, 29.0, 41.0, -48.0, 49.0, 56.0, 60.0, -67.0, 75.0,
];

/// Shell length over height of mussels from five sites
pub fn mussel_sites() -> Vec<Vec<f64>> {
    vec![
        vec![
            0.0571, 0.0813, 0.0831, 0.0976, 0.0817, 0.0859, 0.0735, 0.0659, 0.0923, 0.0836,
        ],
        vec![0.0873, 0.0662, 0.0672, 0.0819, 0.0749, 0.0649, 0.0835, 0.0725],
        vec![0.0974, 0.1352, 0.0817, 0.1016, 0.0968, 0.1064, 0.1050],
        vec![0.1033, 0.0915, 0.0781, 0.0685, 0.0677, 0.0697, 0.0764, 0.0689],
        vec![0.0703, 0.1026, 0.0956, 0.0973, 0.1039, 0.1045],
    ]
}

/// Three batches of a filled product; the third has one wild reading
pub fn fill_batches() -> Vec<Vec<f64>> {
    vec![
        vec![8.88, 9.12, 9.04, 8.98, 9.00, 9.08, 9.01, 8.85, 9.06, 8.99],
        vec![8.88, 8.95, 9.29, 9.44, 9.15, 9.58, 8.36, 9.18, 8.67, 9.05],
        vec![8.95, 9.12, 8.95, 8.85, 9.03, 8.84, 9.07, 8.98, 8.86, 98.98],
    ]
}

/// Three scores from each of seven subjects
pub fn repeated_scores() -> Vec<Vec<f64>> {
    vec![
        vec![72.0, 96.0, 88.0, 92.0, 74.0, 76.0, 82.0],
        vec![120.0, 120.0, 132.0, 120.0, 101.0, 96.0, 112.0],
        vec![76.0, 95.0, 104.0, 96.0, 84.0, 72.0, 76.0],
    ]
}

pub fn normal_sample(n: usize, mean: f64, sd: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dist = Normal::new(mean, sd).unwrap();
    (0..n).map(|_| dist.sample(&mut rng)).collect()
}

pub fn slices(groups: &[Vec<f64>]) -> Vec<&[f64]> {
    groups.iter().map(Vec::as_slice).collect()
}
