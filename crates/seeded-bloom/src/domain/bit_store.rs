//! Packed bit array backing the filter
//!
//! Bits are stored in `u64` words, so the backing buffer is `bit_capacity`
//! rounded up to the next multiple of 64. Only the first `bit_capacity`
//! bits are addressable; the padding is never read or counted.

use bitvec::prelude::*;

use crate::error::FilterError;

const WORD_BITS: usize = u64::BITS as usize;

/// Fixed-size packed bit array
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitStore {
    bits: BitVec<u64, Lsb0>,
}

impl BitStore {
    /// Allocate a zeroed store of `nbits` addressable bits
    ///
    /// Fails with [`FilterError::AllocationFailure`] instead of aborting when
    /// the backing words cannot be reserved.
    pub fn new(nbits: usize) -> Result<Self, FilterError> {
        let words = nbits.div_ceil(WORD_BITS);

        if words.saturating_mul(WORD_BITS) > BitSlice::<u64, Lsb0>::MAX_BITS {
            return Err(FilterError::allocation::<u64>("bit store", words));
        }

        let mut raw: Vec<u64> = Vec::new();
        raw.try_reserve_exact(words)
            .map_err(|_| FilterError::allocation::<u64>("bit store", words))?;
        raw.resize(words, 0);

        let mut bits = BitVec::from_vec(raw);
        bits.truncate(nbits);
        Ok(Self { bits })
    }

    /// Number of addressable bits
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Read bit `index`
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    pub fn get(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// Set bit `index`
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    pub fn set(&mut self, index: usize) {
        self.bits.set(index, true);
    }

    /// Clear every bit, keeping the allocation
    pub fn clear_all(&mut self) {
        self.bits.as_raw_mut_slice().fill(0);
    }

    /// Number of addressable bits currently set
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Size of the backing buffer in bytes, including word padding
    pub fn memory_bytes(&self) -> usize {
        std::mem::size_of_val(self.bits.as_raw_slice())
    }
}
