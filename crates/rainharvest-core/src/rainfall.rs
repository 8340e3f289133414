//! Synthetic daily rainfall.
//!
//! Each day is an independent normal draw (Box-Muller over two open-interval
//! uniforms) clipped at zero. No autocorrelation or seasonality is modelled.

use std::f64::consts::TAU;

use rand::distributions::{Distribution, Open01};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Source of independent uniforms on the open interval (0, 1).
pub trait UniformSource {
    fn next_open01(&mut self) -> f64;
}

impl<R: Rng> UniformSource for R {
    fn next_open01(&mut self) -> f64 {
        Open01.sample(self)
    }
}

/// Box-Muller transform: two uniforms → one standard normal variate.
///
/// `u1` is clamped to the smallest positive `f64` so a zero draw from an
/// injected source yields a large finite value instead of infinity.
#[inline]
pub fn box_muller(u1: f64, u2: f64) -> f64 {
    let u1 = u1.max(f64::MIN_POSITIVE);
    (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
}

/// One day of rainfall [mm]: `max(0, mean + std_dev * z)`.
pub fn sample_day<S: UniformSource + ?Sized>(mean: f64, std_dev: f64, source: &mut S) -> f64 {
    let u1 = source.next_open01();
    let u2 = source.next_open01();
    (mean + std_dev * box_muller(u1, u2)).max(0.0)
}

/// Generate `days` of rainfall [mm].
///
/// Inputs are not validated here: a negative `std_dev` mirrors the
/// distribution and `days == 0` yields an empty series.
pub fn simulate<S: UniformSource + ?Sized>(
    days: usize,
    mean: f64,
    std_dev: f64,
    source: &mut S,
) -> Vec<f64> {
    let series: Vec<f64> = (0..days)
        .map(|_| sample_day(mean, std_dev, &mut *source))
        .collect();
    debug!(days, mean, std_dev, "rainfall generated");
    series
}

/// Reproducible rainfall from a `u64` seed.
pub fn simulate_seeded(days: usize, mean: f64, std_dev: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    simulate(days, mean, std_dev, &mut rng)
}
