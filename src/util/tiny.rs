//! Reproducible random number generators, so random tests and generated positions are stable between runs.

use rand::SeedableRng;
use rand_xoshiro::Xoroshiro64StarStar;

pub fn seeded_rng(seed: u64) -> Xoroshiro64StarStar {
    Xoroshiro64StarStar::seed_from_u64(seed)
}
