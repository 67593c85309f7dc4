//! Seeded hash primitives for the Bloom filter
//!
//! Every bit position is derived from one primitive evaluated under a
//! different 64-bit seed. The k positions are therefore only as independent
//! as the primitive's seeding makes them; the false positive formula in
//! [`super::parameters::calculate_fpr`] assumes full independence.

use std::hash::Hasher;
use std::io::Cursor;

use siphasher::sip::SipHasher13;

/// A fast, well-mixed hash of a byte buffer under a 64-bit seed
///
/// Must be defined for every buffer length (including zero) and every seed,
/// and must be deterministic: the same `(bytes, seed)` always yields the
/// same value.
pub trait SeededHash {
    fn hash(&self, bytes: &[u8], seed: u64) -> u64;
}

/// XXH3 64-bit with a native 64-bit seed. The default primitive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Xxh3Hash;

impl SeededHash for Xxh3Hash {
    #[inline]
    fn hash(&self, bytes: &[u8], seed: u64) -> u64 {
        xxhash_rust::xxh3::xxh3_64_with_seed(bytes, seed)
    }
}

/// MurmurHash3 x64_128, lower 64 bits
///
/// Murmur3 takes a 32-bit seed, so the two halves of the 64-bit seed are
/// folded together with XOR.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Murmur3Hash;

impl SeededHash for Murmur3Hash {
    fn hash(&self, bytes: &[u8], seed: u64) -> u64 {
        let folded = (seed as u32) ^ ((seed >> 32) as u32);
        let mut cursor = Cursor::new(bytes);

        // Reading from an in-memory cursor cannot fail
        let hash = murmur3::murmur3_x64_128(&mut cursor, folded).unwrap_or(0);
        hash as u64
    }
}

/// SipHash-1-3 keyed with `(seed, 0)`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SipHash13;

impl SeededHash for SipHash13 {
    fn hash(&self, bytes: &[u8], seed: u64) -> u64 {
        let mut hasher = SipHasher13::new_with_keys(seed, 0);
        hasher.write(bytes);
        hasher.finish()
    }
}

/// Map `bytes` to a bit index in `0..bit_capacity` under `seed`
///
/// Plain modulo reduction: slightly biased toward low indices when
/// `bit_capacity` is not a power of two.
///
/// # Panics
/// Panics if `bit_capacity` is zero.
#[inline]
pub fn position_for<H: SeededHash + ?Sized>(
    hasher: &H,
    bytes: &[u8],
    seed: u64,
    bit_capacity: usize,
) -> usize {
    (hasher.hash(bytes, seed) % bit_capacity as u64) as usize
}
