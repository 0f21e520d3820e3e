//! Random number generation for pixel supersampling.
//!
//! Thread-local ChaCha20 PRNG so rayon workers never contend on a shared generator.

use rand::{rng, Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::cell::RefCell;

thread_local! {
    static RNG: RefCell<ChaCha20Rng> = RefCell::new(ChaCha20Rng::from_rng(&mut rng()));
}

/// Generate a random f64 in [0.0, 1.0)
pub fn random_f64() -> f64 {
    RNG.with(|rng| rng.borrow_mut().random())
}

/// Random offset in [-0.5, 0.5) on both axes, for jittering inside a pixel.
pub fn sample_square() -> (f64, f64) {
    (random_f64() - 0.5, random_f64() - 0.5)
}
