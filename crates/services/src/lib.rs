//! # Generation Services
//!
//! The batch logic behind the four binaries: product and user generation,
//! behavior simulation, initial-likes seeding, and best-effort mirroring to
//! the recommendation API. Every component takes an explicit [`rand::rngs::StdRng`]
//! so runs are reproducible under a fixed seed.

pub mod likes;
pub mod mirror;
pub mod product_gen;
pub mod simulator;
pub mod user_gen;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Builds the random source for a run: seeded when configured, fresh otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    tracing::debug!(seed, "initializing random source");
    StdRng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_rngs_agree() {
        let mut a = rng_from_seed(Some(7));
        let mut b = rng_from_seed(Some(7));
        let xs: Vec<f64> = (0..8).map(|_| a.gen()).collect();
        let ys: Vec<f64> = (0..8).map(|_| b.gen()).collect();
        assert_eq!(xs, ys);
    }
}
