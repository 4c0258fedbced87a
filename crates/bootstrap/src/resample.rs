//! Uniform with-replacement resampling and per-replicate RNG streams.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::dataset::Dataset;

/// Returns the RNG for one replicate's draws.
///
/// Each replicate gets its own sub-stream derived from the base seed and
/// its index, so results are identical regardless of the order in which
/// replicates are executed.
pub(crate) fn replicate_rng(base_seed: u64, replicate: usize) -> StdRng {
    StdRng::seed_from_u64(base_seed.wrapping_add(replicate as u64))
}

/// Draws a resample of `dataset`: same row count, rows picked
/// independently and uniformly with replacement.
pub(crate) fn draw_resample(dataset: &Dataset, rng: &mut impl Rng) -> Dataset {
    let n = dataset.n_rows();
    let indices: Vec<usize> = (0..n).map(|_| rng.random_range(0..n)).collect();
    dataset.gather(&indices)
}
