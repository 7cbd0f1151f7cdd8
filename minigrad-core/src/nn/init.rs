use crate::ops::activation::Activation;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Half-width of the uniform interval used for a neuron's weights.
///
/// `sqrt(2 / fan_in)` for ReLU (He-style), `sqrt(1 / fan_in)` otherwise.
pub fn weight_bound(fan_in: usize, activation: Activation) -> f64 {
    let gain = match activation {
        Activation::ReLU => 2.0,
        _ => 1.0,
    };
    (gain / fan_in as f64).sqrt()
}

/// Initial bias: `0.1` for ReLU so units start active, `0.0` otherwise.
pub fn initial_bias(activation: Activation) -> f64 {
    match activation {
        Activation::ReLU => 0.1,
        _ => 0.0,
    }
}

/// Draws `n` samples uniformly from `[-bound, bound]`.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, n: usize, bound: f64) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let dist = Uniform::new_inclusive(-bound, bound);
    (0..n).map(|_| dist.sample(rng)).collect()
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
