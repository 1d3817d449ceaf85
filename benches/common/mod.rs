#![allow(dead_code)]

use criterion::PlotConfiguration;
use rand::distributions::{Distribution, Uniform};
use rand::prelude::ThreadRng;

pub const SIZES: [usize; 9] = [
    1 << 8,
    1 << 10,
    1 << 12,
    1 << 14,
    1 << 16,
    1 << 18,
    1 << 20,
    1 << 22,
    1 << 24,
];

pub fn fill_random_vec(rng: &mut ThreadRng, len: usize) -> Vec<u64> {
    let sample = Uniform::new(0, u64::MAX);

    let mut vec = Vec::with_capacity(len);
    for _ in 0..len {
        vec.push(sample.sample(rng));
    }

    vec
}

/// Draws a random non-empty half-open range `[l, r)`, where `sample` draws positions of the
/// queried sequence.
pub fn random_range(rng: &mut ThreadRng, sample: &Uniform<usize>) -> (usize, usize) {
    let a = sample.sample(rng);
    let b = sample.sample(rng);
    if a < b {
        (a, b + 1)
    } else {
        (b, a + 1)
    }
}

pub fn plot_config() -> PlotConfiguration {
    PlotConfiguration::default().summary_scale(criterion::AxisScale::Logarithmic)
}
