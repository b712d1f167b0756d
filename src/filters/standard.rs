//! The classic fixed-size Bloom filter.
//!
//! A Bloom filter answers set membership with one-sided error in a fraction
//! of the space an exact set would need. Inserting is irreversible, and
//! `contains` can err only toward `true`: a hit means the key *might* have
//! been inserted, a miss is definitive. Both operations cost O(k) hashing
//! work, and a 1% error budget runs about 9.6 bits per expected key no
//! matter how large the keys themselves are.
//!
//! # Sizing
//!
//! From the expected capacity `n` and the target rate `p`, construction
//! derives:
//!
//! - bit count `m = ⌈-n × ln(p) / (ln 2)²⌉`
//! - probe count `k = ⌈-log₂(p)⌉`, a function of `p` alone
//!
//! After `n` insert calls the false positive rate is estimated as
//! `p_est = (1 - e^(-kn/m))^k`.
//!
//! The estimate is computed from the stored parameters and the insert
//! counter, never from bit occupancy. It counts every `insert` call, so
//! re-inserting the same key nudges the estimate upward even though the
//! underlying bits do not change. The estimate errs on the conservative
//! side; it never understates the risk.
//!
//! # Index Derivation
//!
//! Each operation hashes the item once to a 64-bit base value, then probes
//! the k positions `(base + i) mod m` for `i in 0..k`. Every probe index is
//! a pure function of the item and `i`: no per-filter randomness, no stored
//! closures, nothing to reseed. Two filters built with the same parameters
//! and fed the same insert sequence hold identical bit arrays.
//!
//! # Concurrency Contract
//!
//! The bit storage is atomic, so `insert` and `contains` take `&self` and a
//! single writer may run alongside any number of concurrent readers without
//! locking:
//!
//! ```
//! use bloomsieve::filters::StandardBloomFilter;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let filter = Arc::new(StandardBloomFilter::<u64>::new(10_000, 0.01)?);
//!
//! for i in 0..100 {
//!     filter.insert(&i);
//! }
//!
//! let f = Arc::clone(&filter);
//! let reader = std::thread::spawn(move || (0..100).all(|i| f.contains(&i)));
//!
//! // The single writer keeps going while the reader runs.
//! for i in 100..200 {
//!     filter.insert(&i);
//! }
//!
//! assert!(reader.join().unwrap());
//! # Ok(())
//! # }
//! ```
//!
//! The structure promises nothing stronger. The insert counter and the bit
//! array are updated by separate atomic operations, so concurrent writers
//! must be serialized externally:
//!
//! ```
//! use bloomsieve::filters::StandardBloomFilter;
//! use std::sync::{Arc, RwLock};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let filter = Arc::new(RwLock::new(StandardBloomFilter::<String>::new(1000, 0.01)?));
//!
//! // Writers serialize through the write lock.
//! {
//!     let guard = filter.write().unwrap();
//!     guard.insert(&"first".to_string());
//! }
//!
//! // Readers share the read lock.
//! let reader = {
//!     let f = Arc::clone(&filter);
//!     std::thread::spawn(move || f.read().unwrap().contains(&"first".to_string()))
//! };
//! assert!(reader.join().unwrap());
//! # Ok(())
//! # }
//! ```
//!
//! No operation blocks, performs I/O, or allocates after construction.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use bloomsieve::filters::StandardBloomFilter;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let filter = StandardBloomFilter::<String>::new(10_000, 0.01)?;
//!
//! filter.insert(&"hello".to_string());
//! filter.insert(&"world".to_string());
//!
//! assert!(filter.contains(&"hello".to_string()));
//! assert!(filter.contains(&"world".to_string()));
//! assert!(!filter.contains(&"goodbye".to_string()));
//! # Ok(())
//! # }
//! ```
//!
//! ## Batch Operations
//!
//! ```
//! use bloomsieve::filters::StandardBloomFilter;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let filter = StandardBloomFilter::<String>::new(1000, 0.01)?;
//!
//! let items = vec!["a".to_string(), "b".to_string(), "c".to_string()];
//! filter.insert_batch(&items);
//!
//! let queries = vec!["a".to_string(), "b".to_string(), "x".to_string()];
//! let results = filter.contains_batch(&queries);
//! assert_eq!(results, vec![true, true, false]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Tracking the Estimated Rate
//!
//! ```
//! use bloomsieve::filters::StandardBloomFilter;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let filter = StandardBloomFilter::<u64>::new(1000, 0.01)?;
//! assert_eq!(filter.estimated_false_positive_rate(), 0.0);
//!
//! for i in 0..500 {
//!     filter.insert(&i);
//! }
//!
//! let estimate = filter.estimated_false_positive_rate();
//! assert!(estimate > 0.0 && estimate < 0.01);
//! # Ok(())
//! # }
//! ```
//!
//! # References
//!
//! - Bloom, B. H. (1970). "Space/time trade-offs in hash coding with allowable errors"
//! - Broder, A., & Mitzenmacher, M. (2004). "Network Applications of Bloom Filters: A Survey"

#![allow(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use crate::core::bitvec::BitVec;
use crate::core::filter::BloomFilter;
use crate::core::params::{calculate_filter_params, expected_fp_rate};
use crate::error::Result;
use crate::hash::{BloomHasher, StdHasher};

use std::hash::Hash;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Bridge from generic `T: Hash` to the byte-oriented [`BloomHasher`] API.
///
/// Runs the item through `DefaultHasher` (fixed keys, stable within a
/// build) and hands back the resulting u64 as little-endian bytes.
#[inline]
fn hash_item_to_bytes<T: Hash>(item: &T) -> [u8; 8] {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::Hasher;
    let mut hasher = DefaultHasher::new();
    item.hash(&mut hasher);
    hasher.finish().to_le_bytes()
}

/// Standard Bloom filter with parameters derived from the target rate.
///
/// Internally the filter pairs an atomic bit vector with an insert counter.
/// The atomic storage gives torn-free reads alongside a single writer, one
/// base hash per operation expands into the k probe indices
/// `(base + i) mod m`, and the counter feeds the running false positive
/// estimate.
///
/// `T` is the key type (anything `Hash`); `H` is the hash algorithm,
/// defaulting to [`StdHasher`].
///
/// # Thread Safety
///
/// One writer plus any number of readers is safe without locking. Multiple
/// writers must serialize externally (e.g. `RwLock`), since the insert
/// counter and the bit array are not updated as one transaction.
///
/// # What This Filter Does Not Do
///
/// There is no deletion, no reset, and no resizing: a bit once set stays
/// set, and the insert counter only grows. Build a new filter when the
/// workload outgrows this one.
pub struct StandardBloomFilter<T, H = StdHasher>
where
    H: BloomHasher + Clone,
{
    /// m bits of atomic storage
    bits: BitVec,

    /// Probes per operation (k)
    k: usize,

    /// Number of insert calls (n), duplicates included
    count: AtomicUsize,

    /// Capacity the geometry was sized for
    expected_items: usize,

    /// Rate the geometry was sized for
    target_fp_rate: f64,

    /// The filter's fixed hash family
    hasher: H,

    _phantom: PhantomData<T>,
}

impl<T, H> Clone for StandardBloomFilter<T, H>
where
    T: Hash,
    H: BloomHasher + Clone,
{
    fn clone(&self) -> Self {
        Self {
            bits: self.bits.clone(),
            k: self.k,
            count: AtomicUsize::new(self.count.load(Ordering::Relaxed)),
            expected_items: self.expected_items,
            target_fp_rate: self.target_fp_rate,
            hasher: self.hasher.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T, H> std::fmt::Debug for StandardBloomFilter<T, H>
where
    H: BloomHasher + Clone,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardBloomFilter")
            .field("bit_count", &self.bits.len())
            .field("hash_count", &self.k)
            .field("len", &self.count.load(Ordering::Relaxed))
            .field("expected_items", &self.expected_items)
            .field("target_fp_rate", &self.target_fp_rate)
            .field("hasher", &self.hasher.name())
            .finish()
    }
}

impl<T> StandardBloomFilter<T, StdHasher>
where
    T: Hash,
{
    /// Build a filter sized for `expected_items` keys at rate `fp_rate`.
    ///
    /// Derives the filter size and hash count from the expected number of
    /// items and the desired false positive rate:
    ///
    /// - `m = ⌈-n × ln(p) / (ln 2)²⌉`
    /// - `k = ⌈-log₂(p)⌉`
    ///
    /// The filter starts with every bit zero and an insert count of zero,
    /// and its hash family is fixed for its whole lifetime.
    ///
    /// # Errors
    ///
    /// - [`BloomSieveError::InvalidItemCount`] if `expected_items == 0`
    /// - [`BloomSieveError::FalsePositiveRateOutOfBounds`] if `fp_rate` not in (0, 1)
    /// - [`BloomSieveError::InvalidParameters`] if the computed size is degenerate
    ///
    /// No silently degenerate filter is ever produced: every failure is an
    /// error at construction time, and the three query operations cannot
    /// fail afterwards.
    ///
    /// [`BloomSieveError::InvalidItemCount`]: crate::error::BloomSieveError::InvalidItemCount
    /// [`BloomSieveError::FalsePositiveRateOutOfBounds`]: crate::error::BloomSieveError::FalsePositiveRateOutOfBounds
    /// [`BloomSieveError::InvalidParameters`]: crate::error::BloomSieveError::InvalidParameters
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomsieve::filters::StandardBloomFilter;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// // Ten thousand keys at a 1% budget
    /// let filter = StandardBloomFilter::<String>::new(10_000, 0.01)?;
    ///
    /// // A million keys at a 0.1% budget
    /// let filter = StandardBloomFilter::<u64>::new(1_000_000, 0.001)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(expected_items: usize, fp_rate: f64) -> Result<Self> {
        Self::with_hasher(expected_items, fp_rate, StdHasher::new())
    }
}

impl<T, H> StandardBloomFilter<T, H>
where
    T: Hash,
    H: BloomHasher + Clone,
{
    /// Build a filter that hashes with `hasher` instead of the default.
    ///
    /// Same sizing and validation as [`new`](StandardBloomFilter::new),
    /// with the base hash supplied by `hasher` instead of the default
    /// [`StdHasher`]. Seeded hashers give each filter an independent hash
    /// family while keeping every other guarantee.
    ///
    /// # Errors
    ///
    /// Same conditions as [`new`](StandardBloomFilter::new).
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomsieve::filters::StandardBloomFilter;
    /// use bloomsieve::hash::StdHasher;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let hasher = StdHasher::with_seed(42);
    /// let filter = StandardBloomFilter::<String, _>::with_hasher(10_000, 0.01, hasher)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_hasher(expected_items: usize, fp_rate: f64, hasher: H) -> Result<Self> {
        let (m, k) = calculate_filter_params(expected_items, fp_rate)?;

        Ok(Self {
            bits: BitVec::new(m)?,
            k,
            count: AtomicUsize::new(0),
            expected_items,
            target_fp_rate: fp_rate,
            hasher,
            _phantom: PhantomData,
        })
    }

    /// Derive the i-th probe index from the base hash.
    ///
    /// `index_i = (base + i) mod m`, with the addition wrapping mod 2^64.
    /// The result is always in bounds for the bit vector.
    #[inline]
    fn probe_index(&self, base: u64, i: u64) -> usize {
        (base.wrapping_add(i) % self.bits.len() as u64) as usize
    }

    /// Add a key to the set.
    ///
    /// Hashes the key once, sets the k probe bits, and increments the
    /// insert counter. The counter is incremented unconditionally: the
    /// filter cannot tell a duplicate from a fresh key, so re-inserting
    /// the same item still counts toward `len()` and the rate estimate.
    ///
    /// This operation cannot fail and accepts any key.
    #[inline]
    pub fn insert(&self, item: &T) {
        let bytes = hash_item_to_bytes(item);
        let base = self.hasher.hash_bytes(&bytes);

        for i in 0..self.k as u64 {
            self.bits.set(self.probe_index(base, i));
        }

        self.count.fetch_add(1, Ordering::Relaxed);
    }

    /// Test whether a key may have been inserted.
    ///
    /// Probes the same k positions `insert` would set, returning `false`
    /// at the first unset bit. A `true` answer means the key was inserted
    /// or happens to collide with keys that were; a `false` answer is
    /// definitive.
    ///
    /// Repeated queries without intervening inserts always agree: this is
    /// a pure read.
    #[must_use]
    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        let bytes = hash_item_to_bytes(item);
        let base = self.hasher.hash_bytes(&bytes);

        (0..self.k as u64).all(|i| self.bits.get(self.probe_index(base, i)))
    }

    /// Insert every key in a slice.
    ///
    /// Equivalent to calling [`insert`](Self::insert) for each element:
    /// every element counts toward `len()` and the rate estimate.
    pub fn insert_batch(&self, items: &[T]) {
        for item in items {
            self.insert(item);
        }
    }

    /// Run [`contains`](Self::contains) over a slice.
    ///
    /// Returns one answer per input key, in input order.
    #[must_use]
    pub fn contains_batch(&self, items: &[T]) -> Vec<bool> {
        items.iter().map(|item| self.contains(item)).collect()
    }

    /// Estimate the false positive probability of the next query.
    ///
    /// Uses the standard formula `(1 - e^(-kn/m))^k` with the stored hash
    /// count `k`, bit count `m`, and insert counter `n`. Bit occupancy is
    /// never inspected.
    ///
    /// Because `n` counts every insert call, duplicates included, the
    /// estimate can overstate the risk for duplicate-heavy workloads. It
    /// never understates it.
    ///
    /// # Returns
    ///
    /// A probability in `[0, 1]`: `0.0` before the first insert,
    /// non-decreasing as inserts accumulate, approaching 1 under
    /// saturation.
    #[must_use]
    pub fn estimated_false_positive_rate(&self) -> f64 {
        expected_fp_rate(self.bits.len(), self.len(), self.k)
    }

    /// Get the number of insert calls made against this filter.
    ///
    /// Duplicates are included: the filter has no way to recognize a
    /// repeated key, so this is an upper bound on the number of distinct
    /// items inserted.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }

    /// Check if the filter has never been inserted into.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Length of the bit array (m).
    #[must_use]
    #[inline]
    pub fn bit_count(&self) -> usize {
        self.bits.len()
    }

    /// Probe count per operation (k).
    #[must_use]
    #[inline]
    pub fn hash_count(&self) -> usize {
        self.k
    }

    /// Alias for [`hash_count`](Self::hash_count).
    #[must_use]
    #[inline]
    pub fn num_hashes(&self) -> usize {
        self.k
    }

    /// Capacity this filter was sized for (n̂).
    #[must_use]
    #[inline]
    pub fn expected_items(&self) -> usize {
        self.expected_items
    }

    /// Rate this filter was sized for (p).
    #[must_use]
    #[inline]
    pub fn target_fp_rate(&self) -> f64 {
        self.target_fp_rate
    }

    /// Population count of the bit array.
    ///
    /// Reflects actual occupancy, unlike [`len`](Self::len) which counts
    /// insert operations.
    #[must_use]
    pub fn count_set_bits(&self) -> usize {
        self.bits.count_ones()
    }

    /// Fraction of bits set, in [0, 1].
    #[must_use]
    pub fn fill_rate(&self) -> f64 {
        self.count_set_bits() as f64 / self.bits.len() as f64
    }

    /// Total footprint in bytes: the bit array plus the fixed fields.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.bits.memory_usage()
            + std::mem::size_of::<usize>() * 2 // k, expected_items
            + std::mem::size_of::<AtomicUsize>() // count
            + std::mem::size_of::<f64>() // target_fp_rate
            + std::mem::size_of::<H>() // hasher
    }

    /// Name of the hash algorithm, for diagnostics.
    #[must_use]
    pub fn hasher_name(&self) -> &'static str {
        self.hasher.name()
    }
}

impl<T, H> BloomFilter<T> for StandardBloomFilter<T, H>
where
    T: Hash + Send + Sync,
    H: BloomHasher + Clone,
{
    fn insert(&mut self, item: &T) {
        StandardBloomFilter::insert(self, item);
    }

    fn contains(&self, item: &T) -> bool {
        StandardBloomFilter::contains(self, item)
    }

    fn len(&self) -> usize {
        StandardBloomFilter::len(self)
    }

    fn false_positive_rate(&self) -> f64 {
        self.estimated_false_positive_rate()
    }

    fn expected_items(&self) -> usize {
        self.expected_items
    }

    fn bit_count(&self) -> usize {
        self.bits.len()
    }

    fn hash_count(&self) -> usize {
        self.k
    }
}
