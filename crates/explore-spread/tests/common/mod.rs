//! Common test utilities for explore-spread tests

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

/// Seeded normal sample with a few planted far outliers at the end
pub fn contaminated_normal(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let normal = Normal::new(10.0, 2.0).unwrap();
    let mut data: Vec<f64> = (0..n).map(|_| normal.sample(&mut rng)).collect();
    data.extend([1_000.0, -1_000.0, 500.0]);
    data
}

/// Linear-interpolation quartiles computed independently of the crate
pub fn reference_quartiles(data: &[f64]) -> (f64, f64) {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    let at = |p: f64| {
        let h = p * (sorted.len() - 1) as f64;
        let lo = h.floor() as usize;
        let hi = h.ceil() as usize;
        sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
    };
    (at(0.25), at(0.75))
}
