#![allow(dead_code)]

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, LogNormal, Normal};

pub fn normal_sample(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dist = Normal::new(50.0, 10.0).unwrap();
    (0..n).map(|_| dist.sample(&mut rng)).collect()
}

/// Right-skewed sample, so mean, median and mode separate
pub fn skewed_sample(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dist = LogNormal::<f64>::new(3.0, 0.6).unwrap();
    (0..n).map(|_| dist.sample(&mut rng).round()).collect()
}

/// Lower-case `#rrggbb`, for matching against a lower-cased document
pub fn hex(color: plotters::style::RGBColor) -> String {
    format!("#{:02x}{:02x}{:02x}", color.0, color.1, color.2)
}
