//! Weighted Price Generator
//! Turns a uniform draw into a skewed PAWScoin price in `[0, 99]`.

use crate::config::constants::simulation::MAX_PRICE;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Map a uniform `r` in `[0, 1)` to a price via `floor((1 - sqrt(r)) * 100)`.
///
/// The transform is monotonically decreasing: `r = 0` gives 100, which is
/// clamped to 99, and `r -> 1` gives 0. Out-of-range input is clamped into
/// `[0, 1]` first and NaN is treated as 1.
pub fn skewed_value(r: f64) -> u8 {
    let r = if r.is_nan() { 1.0 } else { r.clamp(0.0, 1.0) };
    let raw = ((1.0 - r.sqrt()) * 100.0).floor() as i64;
    raw.clamp(0, MAX_PRICE as i64) as u8
}

/// One skewed draw from any uniform source.
pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    skewed_value(rng.gen::<f64>())
}

/// Closed-form probability (as a fraction) that a skewed draw lands in `lo..=hi`.
///
/// `P(v >= k) = (1 - k/100)^2`, so a range is the difference of two tails.
pub fn exact_share(lo: u8, hi: u8) -> f64 {
    if lo > hi {
        return 0.0;
    }
    tail_share(lo as u32) - tail_share(hi as u32 + 1)
}

fn tail_share(k: u32) -> f64 {
    if k > MAX_PRICE as u32 {
        return 0.0;
    }
    let q = 1.0 - k as f64 / 100.0;
    q * q
}

/// Price source owning its uniform random generator.
pub struct PriceGenerator<R: Rng = StdRng> {
    rng: R,
}

impl PriceGenerator<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> PriceGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw the next price.
    pub fn next_price(&mut self) -> u8 {
        draw(&mut self.rng)
    }

    /// Borrow the underlying source, e.g. to feed the probability estimator.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}
