//! Domain Layer - Pure filter logic
//!
//! This layer contains:
//! - Packed bit store
//! - Seeded hash primitives and position derivation
//! - Seed generation
//! - Parameter calculations
//! - Configuration
//! - Core Bloom filter
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - No interior mutability; writers need `&mut`

pub mod bit_store;
pub mod bloom_filter;
pub mod config;
pub mod hash_functions;
pub mod parameters;
pub mod seeds;

pub use bit_store::BitStore;
pub use bloom_filter::BloomFilter;
pub use config::{FilterConfig, FilterConfigBuilder};
pub use hash_functions::{position_for, Murmur3Hash, SeededHash, SipHash13, Xxh3Hash};
pub use parameters::{calculate_fpr, hash_count};
pub use seeds::{clock_seed, SeedGenerator};
