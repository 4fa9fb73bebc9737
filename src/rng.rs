//! Thread-local RNG facade.
//!
//! The driver owns one [`ChaCha8Rng`] for its serial phases (selection preparation,
//! archive bookkeeping, niching tie-breaks) seeded the way the source's `get_rng`
//! seeds its single algorithm-wide generator. Parallel phases (crossover, mutation,
//! per-candidate association) must not share that generator across threads, so each
//! `rayon` worker derives its own stream from a splitmix64 expansion of a single u64
//! seed, keeping the whole generation reproducible from one seed without contention.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Build the driver's serial-phase RNG. With no seed, falls back to the zero seed
/// (deterministic, matching the source's `ChaCha8Rng::from_seed(Default::default())`
/// behaviour when no seed is requested). Returned concretely, not boxed: the driver
/// owns exactly one generator type for its whole lifetime, so there is no need to
/// pay for dynamic dispatch on every `gen_range` call in the generation loop.
pub(crate) fn get_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        None => ChaCha8Rng::from_seed(Default::default()),
        Some(s) => ChaCha8Rng::seed_from_u64(s),
    }
}

/// A cheap, deterministic 64-bit mixer used to fan a single seed out into many
/// independent per-worker streams without needing a second source of randomness.
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// Derive `n` independent per-worker seeds from a single base seed, for use by
/// parallel phases that need one RNG per rayon task without contending on a shared
/// generator.
pub(crate) fn worker_seeds(base_seed: u64, n: usize) -> Vec<u64> {
    let mut state = base_seed;
    (0..n).map(|_| splitmix64(&mut state)).collect()
}

/// Build a fresh RNG for one parallel worker from a derived seed.
pub(crate) fn worker_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
