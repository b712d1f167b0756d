//! Atomic bit array used as filter storage.
//!
//! A [`BitVec`] is a fixed-length array of bits packed into `AtomicU64`
//! words. The surface is write-once: bits can be set and read, never
//! cleared. A bit that has gone to 1 stays 1 for the lifetime of the vector,
//! so nothing in the storage layer can un-record an insertion.
//!
//! Bit `i` lives at bit offset `i % 64` of word `i / 64`, and the vector
//! holds `⌈len/64⌉` words. Trailing bits of the last word beyond `len` stay
//! zero and never count toward [`BitVec::count_ones`].
//!
//! # Memory Ordering
//!
//! [`BitVec::set`] publishes with `Release`; [`BitVec::get`] and
//! [`BitVec::count_ones`] read with `Acquire`. A reader that observes a set
//! bit therefore also observes everything the writer did before setting it.
//!
//! # Examples
//!
//! ```
//! use bloomsieve::core::bitvec::BitVec;
//!
//! let bv = BitVec::new(100).unwrap();
//! bv.set(42);
//! assert!(bv.get(42));
//! assert!(!bv.get(43));
//! assert_eq!(bv.count_ones(), 1);
//! ```

use crate::error::{BloomSieveError, Result};
use std::sync::atomic::{AtomicU64, Ordering};

/// Fixed-length bit array over `AtomicU64` words.
///
/// `BitVec` is `Send + Sync`; concurrent `set` and `get` calls are safe
/// without external locking. [`Clone`] produces an independent snapshot.
#[derive(Debug)]
pub struct BitVec {
    /// Backing words, 64 bits each.
    words: Box<[AtomicU64]>,

    /// Number of addressable bits.
    len: usize,
}

impl BitVec {
    /// Allocate a vector of `num_bits` zeroed bits.
    ///
    /// # Arguments
    ///
    /// * `num_bits` - Number of bits to address (must be > 0)
    ///
    /// # Errors
    ///
    /// Returns [`BloomSieveError::InvalidParameters`] when `num_bits` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomsieve::core::bitvec::BitVec;
    ///
    /// let bv = BitVec::new(1000).unwrap();
    /// assert_eq!(bv.len(), 1000);
    /// assert_eq!(bv.count_ones(), 0);
    /// ```
    pub fn new(num_bits: usize) -> Result<Self> {
        if num_bits == 0 {
            return Err(BloomSieveError::invalid_parameters(
                "BitVec size must be greater than 0",
            ));
        }

        let words = std::iter::repeat_with(|| AtomicU64::new(0))
            .take((num_bits + 63) / 64)
            .collect();

        Ok(Self {
            words,
            len: num_bits,
        })
    }

    /// Number of addressable bits.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the vector holds zero bits.
    ///
    /// Construction rejects zero-length vectors, so this returns `false`
    /// for every `BitVec` that exists; provided for API completeness.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Set bit `index` to 1.
    ///
    /// Idempotent: re-setting a set bit changes nothing. There is no
    /// clearing operation.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`, matching slice indexing behavior.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomsieve::core::bitvec::BitVec;
    ///
    /// let bv = BitVec::new(64).unwrap();
    /// bv.set(10);
    /// bv.set(10); // Idempotent
    /// assert!(bv.get(10));
    /// ```
    #[inline]
    pub fn set(&self, index: usize) {
        assert!(
            index < self.len,
            "BitVec index out of bounds: index={} len={}",
            index,
            self.len
        );

        let mask = 1u64 << (index % 64);

        // Release pairs with the Acquire in get/count_ones
        self.words[index / 64].fetch_or(mask, Ordering::Release);
    }

    /// Read bit `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomsieve::core::bitvec::BitVec;
    ///
    /// let bv = BitVec::new(64).unwrap();
    /// assert!(!bv.get(10));
    /// bv.set(10);
    /// assert!(bv.get(10));
    /// ```
    #[must_use]
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        assert!(
            index < self.len,
            "BitVec index out of bounds: index={} len={}",
            index,
            self.len
        );

        let mask = 1u64 << (index % 64);

        (self.words[index / 64].load(Ordering::Acquire) & mask) != 0
    }

    /// Number of set bits, O(⌈len/64⌉) via per-word popcount.
    ///
    /// Under concurrent writes the result is a lower bound on the count at
    /// return time; bits set before the call are always included.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomsieve::core::bitvec::BitVec;
    ///
    /// let bv = BitVec::new(100).unwrap();
    /// bv.set(0);
    /// bv.set(50);
    /// bv.set(99);
    /// assert_eq!(bv.count_ones(), 3);
    /// ```
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.words
            .iter()
            .map(|w| w.load(Ordering::Acquire).count_ones() as usize)
            .sum()
    }

    /// Heap plus inline size of this vector, in bytes.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.words.len() * std::mem::size_of::<AtomicU64>() + std::mem::size_of::<Self>()
    }

    /// Number of 64-bit words backing the vector.
    #[must_use]
    #[inline]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

impl Clone for BitVec {
    /// Snapshot the vector into an independent copy.
    ///
    /// Bits set on either copy after the clone are not visible to the other.
    fn clone(&self) -> Self {
        let words = self
            .words
            .iter()
            .map(|w| AtomicU64::new(w.load(Ordering::Acquire)))
            .collect();

        Self {
            words,
            len: self.len,
        }
    }
}
