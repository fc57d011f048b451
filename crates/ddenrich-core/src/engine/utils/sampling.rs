use crate::core::models::interaction::Side;
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use tracing::instrument;

/// Draws a uniformly random permutation of whole rows, without replacement.
///
/// Rows are permuted as units; the labels inside a row keep their order.
#[instrument(level = "trace", skip_all, fields(rows = rows.len()))]
pub fn permute_rows<T: Copy>(rows: &[T], rng: &mut impl Rng) -> Vec<T> {
    let mut permuted = rows.to_vec();
    permuted.shuffle(rng);
    permuted
}

/// The generator used to shuffle one side.
///
/// With a seed, X draws from `seed` and Y from `seed + 1`; without one, each side is seeded
/// from OS entropy.
pub fn side_rng(seed: Option<u64>, side: Side) -> StdRng {
    let offset = match side {
        Side::X => 0,
        Side::Y => 1,
    };
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(offset)),
        None => StdRng::from_entropy(),
    }
}
