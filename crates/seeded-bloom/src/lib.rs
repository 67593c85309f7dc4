//! # Seeded Bloom
//!
//! A fixed-size Bloom filter: answers "is this element definitely absent, or
//! possibly present?" from a fixed bit budget instead of storing elements.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `BloomFilter`: create / insert / query / zero / destroy
//!   - `BitStore`: packed bit array backing the filter
//!   - `SeededHash`: hash primitive (`Xxh3Hash`, `Murmur3Hash`, `SipHash13`)
//!   - `SeedGenerator`: PRNG drawing one seed per hash position
//!   - `FilterConfig` / `FilterConfigBuilder`: validated configuration
//!
//! ## Sizing
//!
//! The number of hash positions per element is fixed at construction:
//!
//! ```text
//! k = ceil(9 * bit_capacity / (13 * expected_elements))
//! ```
//!
//! 9/13 approximates ln(2), so k tracks the textbook optimum `(m/n) ln 2`.
//!
//! ## Invariants
//!
//! - No false negatives: an inserted element is reported present until the
//!   next `zero()`.
//! - FPR after n distinct insertions ≈ (1 - e^(-kn/m))^k. Positions come from
//!   one primitive under k seeds, so independence is approximate.
//!
//! ## Usage Example
//!
//! ```
//! use seeded_bloom::BloomFilter;
//!
//! let mut filter = BloomFilter::create(1000, 100)?;
//! assert_eq!(filter.hash_count(), 7);
//!
//! assert!(!filter.query(b"xyz"));
//! filter.insert(b"xyz");
//! assert!(filter.query(b"xyz"));
//!
//! filter.destroy();
//! # Ok::<(), seeded_bloom::FilterError>(())
//! ```
//!
//! Pass a seed to make the filter reproducible:
//!
//! ```
//! use seeded_bloom::BloomFilter;
//!
//! let a = BloomFilter::with_seed(1000, 100, 42)?;
//! let b = BloomFilter::with_seed(1000, 100, 42)?;
//! assert_eq!(a.seeds(), b.seeds());
//! # Ok::<(), seeded_bloom::FilterError>(())
//! ```

pub mod domain;
pub mod error;

// Re-exports for convenience
pub use domain::{
    BitStore, BloomFilter, FilterConfig, FilterConfigBuilder, Murmur3Hash, SeedGenerator,
    SeededHash, SipHash13, Xxh3Hash,
};
pub use error::FilterError;
