//! Injectable randomness for maze division and agent moves.

use rand::rngs::{SmallRng, ThreadRng};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// The two random draws the simulation needs.
pub trait RandomSource {
    /// Uniform integer in `low..=high`.
    fn range_inclusive(&mut self, low: usize, high: usize) -> usize;

    /// Shuffle `items` in place.
    fn shuffle<T>(&mut self, items: &mut [T]);
}

macro_rules! impl_random_source {
    ($($rng:ty),*) => {
        $(
            impl RandomSource for $rng {
                fn range_inclusive(&mut self, low: usize, high: usize) -> usize {
                    self.random_range(low..=high)
                }

                fn shuffle<T>(&mut self, items: &mut [T]) {
                    items.shuffle(self);
                }
            }
        )*
    };
}

impl_random_source!(SmallRng, ThreadRng);

/// Seeded when `seed` is given, otherwise seeded from entropy.
pub fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => {
            let seed: u64 = rand::random();
            SmallRng::seed_from_u64(seed)
        }
    }
}
