//! Per-vertex random source for the spike deformation.

use rand::{Rng, RngCore};

/// Supplies one centred random offset per vertex.
///
/// Implementations must return values in `[-0.5, 0.5)`. Every
/// [`rand::RngCore`] is a noise source, so callers pick between the thread
/// RNG and a seeded generator for reproducible output.
pub trait NoiseSource {
    fn next_offset(&mut self) -> f64;
}

impl<R: RngCore + ?Sized> NoiseSource for R {
    fn next_offset(&mut self) -> f64 {
        self.random::<f64>() - 0.5
    }
}
