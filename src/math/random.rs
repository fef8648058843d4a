//! Injected random provider.
//!
//! The field engine, the entity subsystem and the scene compositor all draw
//! their randomness through [`RandomSource`], so a seeded or fixed source
//! makes every update reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform random numbers.
pub trait RandomSource {
    /// Uniform float in [min, max). Returns `min` when the range is empty.
    fn uniform_float(&mut self, min: f32, max: f32) -> f32;

    /// Uniform integer in [min, max] (inclusive). Returns `min` when
    /// `max < min`.
    fn uniform_int(&mut self, min: i32, max: i32) -> i32;

    /// True with probability `p`.
    fn chance(&mut self, p: f32) -> bool {
        self.uniform_float(0.0, 1.0) < p
    }

    /// Opaque colour with uniformly random RGB channels.
    fn random_color(&mut self) -> u32 {
        let r = self.uniform_int(0, 255) as u32;
        let g = self.uniform_int(0, 255) as u32;
        let b = self.uniform_int(0, 255) as u32;
        0xFF00_0000 | (r << 16) | (g << 8) | b
    }
}

/// `StdRng`-backed provider; identical seeds give identical sequences.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Seed from the host: `Math.random()` in the browser, the system
    /// clock elsewhere.
    pub fn from_entropy() -> Self {
        Self::new(entropy_seed())
    }
}

impl RandomSource for SeededRandom {
    fn uniform_float(&mut self, min: f32, max: f32) -> f32 {
        if !(max > min) {
            return min;
        }
        self.rng.gen_range(min..max)
    }

    fn uniform_int(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..=max)
    }
}

#[cfg(target_arch = "wasm32")]
fn entropy_seed() -> u64 {
    let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (hi << 32) | lo
}

#[cfg(not(target_arch = "wasm32"))]
fn entropy_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5EED)
}

/// Test provider that always answers the same fraction of the requested
/// range.
#[cfg(test)]
#[derive(Clone, Copy, Debug)]
pub(crate) struct FixedRandom(pub f32);

#[cfg(test)]
impl RandomSource for FixedRandom {
    fn uniform_float(&mut self, min: f32, max: f32) -> f32 {
        if !(max > min) {
            return min;
        }
        min + self.0 * (max - min)
    }

    fn uniform_int(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        min + (self.0 * (max - min) as f32).round() as i32
    }
}
