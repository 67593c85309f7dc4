//! Per-hash seed generation
//!
//! A filter draws its k seeds once, at construction, from a small
//! non-cryptographic PRNG. The PRNG is initialised from an explicit seed when
//! the caller supplies one, otherwise from the wall clock, in which case the
//! seeds are not reproducible.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use crate::error::FilterError;

/// Initial PRNG seed derived from the current wall-clock time
///
/// Uses the low 64 bits of the nanoseconds since the Unix epoch. A clock set
/// before the epoch yields 0.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

/// Endless stream of 64-bit seeds from a seeded PRNG
#[derive(Clone, Debug)]
pub struct SeedGenerator {
    rng: SmallRng,
}

impl SeedGenerator {
    pub fn new(initial_seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(initial_seed),
        }
    }

    /// Generator initialised from [`clock_seed`]
    pub fn from_clock() -> Self {
        Self::new(clock_seed())
    }

    pub fn next_seed(&mut self) -> u64 {
        self.rng.next_u64()
    }

    /// Draw `count` consecutive seeds into a freshly reserved vector
    pub fn draw(&mut self, count: usize) -> Result<Vec<u64>, FilterError> {
        let mut seeds = Vec::new();
        seeds
            .try_reserve_exact(count)
            .map_err(|_| FilterError::allocation::<u64>("hash seeds", count))?;
        seeds.extend(self.by_ref().take(count));
        Ok(seeds)
    }
}

impl Iterator for SeedGenerator {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        Some(self.next_seed())
    }
}
