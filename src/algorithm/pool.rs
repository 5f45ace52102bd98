//! Bitset over the unplaced tile pool
//!
//! Branching in the search clones the pool; keeping it as a bitmask over
//! tile indices makes that clone a handful of words instead of a vector
//! of tiles.

use bitvec::prelude::{BitVec, bitvec};

/// Fixed-size bitset tracking which tiles are still unplaced
///
/// Indices are positions into the parsed tile slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolMask {
    bits: BitVec,
}

impl PoolMask {
    /// Create a pool containing every tile index below `len`
    pub fn full(len: usize) -> Self {
        Self {
            bits: bitvec![1; len],
        }
    }

    /// Test tile membership
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Remove a tile index in place
    pub fn remove(&mut self, index: usize) {
        if index < self.bits.len() {
            self.bits.set(index, false);
        }
    }

    /// A copy of the pool with one tile index removed
    #[must_use]
    pub fn without(&self, index: usize) -> Self {
        let mut next = self.clone();
        next.remove(index);
        next
    }

    /// Test if no tiles remain
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count remaining tiles
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate remaining tile indices in ascending order
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }
}
