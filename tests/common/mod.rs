//! Shared fixtures for the end-to-end tests

#![allow(dead_code)]

use polars::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

/// Delivery times (minutes) from three depots; depot `c` is slower and has
/// a couple of stragglers
pub fn depots_df(n: usize, seed: u64) -> DataFrame {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let a = Normal::new(30.0, 4.0).unwrap();
    let b = Normal::new(31.0, 4.0).unwrap();
    let c = Normal::new(38.0, 4.0).unwrap();

    let col_a: Vec<f64> = (0..n).map(|_| a.sample(&mut rng)).collect();
    let col_b: Vec<f64> = (0..n).map(|_| b.sample(&mut rng)).collect();
    let mut col_c: Vec<f64> = (0..n).map(|_| c.sample(&mut rng)).collect();
    col_c[0] = 120.0;
    col_c[1] = 95.0;

    df!["a" => col_a, "b" => col_b, "c" => col_c].unwrap()
}
