//! The `random` module provides the random number generator plumbing and
//! the engine-scoped `RandomSource` that refreshes the per-individual
//! random pools consumed by selection, crossover and mutation.

use rand::rngs::OsRng;
use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256Plus;

pub use rand::Rng;

/// The PRNG used by this crate.
pub type Prng = Xoshiro256Plus;

/// The seed type of the `Prng` used by this crate.
pub type Seed = <Prng as SeedableRng>::Seed;

/// Generates a random seed from operating-system entropy.
pub fn random_seed() -> Seed {
    let mut seed = Seed::default();
    OsRng.fill_bytes(&mut seed);
    seed
}

/// Returns a new `Prng` initialized with the given seed.
pub fn get_rng(seed: Seed) -> Prng {
    Prng::from_seed(seed)
}

/// Buffers below this length are filled sequentially; larger buffers are
/// split and filled on the rayon pool.
const SEQUENTIAL_FILL_LIMIT: usize = 1024;

/// The process-scoped source of uniform random floats.
///
/// A `RandomSource` is created when the engine is initialized and dropped
/// with it. It refreshes the random pool of a population once per
/// generation; the migration layer never draws from it.
///
/// Refills of the same length from the same seed are deterministic: large
/// buffers are split recursively, with the right half handed a `jump()`ed
/// clone of the generator, so the work parallelizes without perturbing the
/// values.
#[derive(Clone, Debug)]
pub struct RandomSource {
    rng: Prng,
}

impl RandomSource {
    /// Creates a `RandomSource` seeded from operating-system entropy.
    pub fn new() -> Self {
        Self::from_seed(random_seed())
    }

    /// Creates a `RandomSource` with the given seed, for reproducible runs.
    pub fn from_seed(seed: Seed) -> Self {
        RandomSource { rng: get_rng(seed) }
    }

    /// Fills the given buffer with uniform floats in `[0, 1)`.
    pub fn refill(&mut self, buffer: &mut [f32]) {
        let rng = self.rng.clone();
        self.rng.jump();
        fill_uniform(rng, buffer);
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

fn fill_uniform(mut rng: Prng, buffer: &mut [f32]) {
    if buffer.len() <= SEQUENTIAL_FILL_LIMIT {
        for slot in buffer.iter_mut() {
            *slot = rng.gen();
        }
    } else {
        let mut right_rng = rng.clone();
        right_rng.jump();
        let middle = buffer.len() / 2;
        let (left, right) = buffer.split_at_mut(middle);
        rayon::join(
            || fill_uniform(rng, left),
            || fill_uniform(right_rng, right),
        );
    }
}
