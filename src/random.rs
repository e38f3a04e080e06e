//! The randomness seam used by every generation step.
//!
//! Generation only ever needs two things from a random number generator: a uniform integer
//! from a half-open range and a uniform float in `[0, 1)`. Any `rand::Rng` provides both, so
//! a seeded `StdRng` gives reproducible mazes and tests can script exact sequences.

use rand::Rng;

pub trait RandomSource {
    /// Uniform integer in `[low, high)`. An empty range yields `low`.
    fn range(&mut self, low: usize, high: usize) -> usize;

    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn range(&mut self, low: usize, high: usize) -> usize {
        if high <= low {
            low
        } else {
            self.gen_range(low..high)
        }
    }

    #[inline]
    fn unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}
