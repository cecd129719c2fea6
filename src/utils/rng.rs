use rand::{prelude::*, rngs::StdRng};

/// Seeded source for every random decision a search makes.
///
/// A fixed seed reproduces a search exactly; without one the seed is drawn
/// from the thread-local generator.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    StdRng::seed_from_u64(seed)
}
