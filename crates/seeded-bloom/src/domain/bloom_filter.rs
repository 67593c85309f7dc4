//! Core Bloom filter implementation
//!
//! INVARIANTS:
//! - No false negatives: after `insert(x)` and until the next `zero()`,
//!   `query(x)` returns true.
//! - `hash_count == seeds.len()`, fixed at construction.
//! - Every touched position is `< bit_capacity` (modulo reduction).

use tracing::{debug, trace, warn};

use super::bit_store::BitStore;
use super::config::FilterConfig;
use super::hash_functions::{position_for, SeededHash, Xxh3Hash};
use super::parameters::{self, calculate_fpr};
use super::seeds::SeedGenerator;
use crate::error::FilterError;

/// Bloom filter for probabilistic membership testing
///
/// A Bloom filter is a space-efficient probabilistic data structure that
/// can test whether an element is a member of a set. False positives are
/// possible, but false negatives are not.
///
/// Each of the `hash_count` bit positions of an element is
/// `H::hash(element, seeds[i]) % bit_capacity`. Insertion needs `&mut self`,
/// so concurrent writers must be serialised by the caller; shared `&self`
/// queries are safe from any number of threads.
#[derive(Clone, Debug)]
pub struct BloomFilter<H = Xxh3Hash> {
    /// Bit array storing the filter state
    bits: BitStore,
    /// One seed per hash position (k = seeds.len())
    seeds: Vec<u64>,
    /// Size in bits (m)
    bit_capacity: usize,
    /// Sizing parameter (n), kept for diagnostics
    expected_elements: usize,
    hasher: H,
}

impl BloomFilter {
    /// Create a filter with clock-derived seeds and the default hash
    ///
    /// # Arguments
    /// * `bit_capacity` - Size in bits (m)
    /// * `expected_elements` - Expected number of elements (n)
    pub fn create(bit_capacity: usize, expected_elements: usize) -> Result<Self, FilterError> {
        Self::build(bit_capacity, expected_elements, None, Xxh3Hash)
    }

    /// Create a filter whose seeds are derived from `seed`
    ///
    /// Two filters built with the same arguments set the same bits for the
    /// same elements.
    pub fn with_seed(
        bit_capacity: usize,
        expected_elements: usize,
        seed: u64,
    ) -> Result<Self, FilterError> {
        Self::build(bit_capacity, expected_elements, Some(seed), Xxh3Hash)
    }

    pub fn from_config(config: &FilterConfig) -> Result<Self, FilterError> {
        Self::with_hasher(config, Xxh3Hash)
    }
}

impl<H: SeededHash> BloomFilter<H> {
    /// Create a filter from `config` that hashes with `hasher`
    pub fn with_hasher(config: &FilterConfig, hasher: H) -> Result<Self, FilterError> {
        config.validate()?;
        Self::build(
            config.bit_capacity,
            config.expected_elements,
            config.seed,
            hasher,
        )
    }

    fn build(
        bit_capacity: usize,
        expected_elements: usize,
        seed: Option<u64>,
        hasher: H,
    ) -> Result<Self, FilterError> {
        let hash_count = parameters::hash_count(bit_capacity, expected_elements)?;

        let mut generator = match seed {
            Some(initial_seed) => SeedGenerator::new(initial_seed),
            None => SeedGenerator::from_clock(),
        };
        let seeds = generator
            .draw(hash_count)
            .inspect_err(|e| warn!(hash_count, error = %e, "Seed allocation failed"))?;

        // `seeds` is dropped on this error path
        let bits = BitStore::new(bit_capacity)
            .inspect_err(|e| warn!(bit_capacity, error = %e, "Bit store allocation failed"))?;

        let mut filter = Self {
            bits,
            seeds,
            bit_capacity,
            expected_elements,
            hasher,
        };
        filter.zero();

        debug!(
            bit_capacity,
            expected_elements,
            hash_count,
            explicit_seed = seed.is_some(),
            "Bloom filter created"
        );

        Ok(filter)
    }

    /// Insert an element into the filter
    ///
    /// After insertion, `query(element)` is guaranteed to return true.
    pub fn insert(&mut self, element: &[u8]) {
        for &seed in &self.seeds {
            let position = position_for(&self.hasher, element, seed, self.bit_capacity);
            self.bits.set(position);
        }
    }

    /// Test if an element might be in the filter
    ///
    /// Returns:
    /// - `true` if the element might be in the set (could be false positive)
    /// - `false` if the element is definitely NOT in the set (never false negative)
    ///
    /// Stops at the first unset bit.
    pub fn query(&self, element: &[u8]) -> bool {
        self.seeds.iter().all(|&seed| {
            self.bits
                .get(position_for(&self.hasher, element, seed, self.bit_capacity))
        })
    }

    /// Same answer as [`query`](Self::query), but always tests all
    /// `hash_count` bits
    ///
    /// Use this when the filter is queried by external parties and timing
    /// must not reveal how many leading positions matched.
    pub fn query_constant_time(&self, element: &[u8]) -> bool {
        // Branchless accumulator - always accesses all positions
        let mut result: u8 = 1;
        for &seed in &self.seeds {
            let position = position_for(&self.hasher, element, seed, self.bit_capacity);
            result &= self.bits.get(position) as u8;
        }

        result == 1
    }

    /// Clear the filter (reset all bits to 0)
    ///
    /// Keeps the allocation and the seeds.
    pub fn zero(&mut self) {
        self.bits.clear_all();
        trace!(bit_capacity = self.bit_capacity, "Bloom filter zeroed");
    }

    /// Release the seeds and the bit store
    ///
    /// Takes the filter by value, so it cannot be used afterwards. Dropping
    /// the filter releases the same resources.
    pub fn destroy(self) {
        trace!(
            bit_capacity = self.bit_capacity,
            hash_count = self.hash_count(),
            "Bloom filter destroyed"
        );
    }

    /// Get the filter size in bits
    pub fn bit_capacity(&self) -> usize {
        self.bit_capacity
    }

    /// Get the sizing parameter supplied at construction
    pub fn expected_elements(&self) -> usize {
        self.expected_elements
    }

    /// Get the number of hash positions per element
    pub fn hash_count(&self) -> usize {
        self.seeds.len()
    }

    pub fn seeds(&self) -> &[u64] {
        &self.seeds
    }

    /// Get the number of bits set in the filter
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Fraction of bits set, in `[0, 1]`
    pub fn fill_ratio(&self) -> f64 {
        self.bits_set() as f64 / self.bit_capacity as f64
    }

    /// Bytes held by the seeds and the (word-padded) bit store
    pub fn memory_bytes(&self) -> usize {
        self.bits.memory_bytes() + std::mem::size_of_val(self.seeds.as_slice())
    }

    /// Theoretical false positive rate after `elements_inserted` distinct
    /// insertions
    ///
    /// Formula: FPR = (1 - e^(-kn/m))^k
    pub fn estimated_false_positive_rate(&self, elements_inserted: usize) -> f64 {
        calculate_fpr(self.bit_capacity, elements_inserted, self.hash_count())
    }

    /// Theoretical false positive rate at `expected_elements`
    pub fn expected_false_positive_rate(&self) -> f64 {
        self.estimated_false_positive_rate(self.expected_elements)
    }
}
