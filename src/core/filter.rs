//! The membership-filter contract.
//!
//! Implementations answer "have I seen this key?" with one-sided error: a
//! `false` from [`BloomFilter::contains`] is definitive, a `true` may be a
//! false positive at a rate bounded by the construction parameters.
//!
//! # Mutability Contract
//!
//! The trait takes `&mut self` for `insert`, expressing the intended
//! topology: one writer at a time.
//! [`StandardBloomFilter`](crate::filters::StandardBloomFilter) additionally
//! exposes inherent `&self` methods backed by atomic storage, so readers may
//! run concurrently with the single writer without external locks. For
//! several writers, wrap the filter in `Mutex` or `RwLock`; the filter
//! itself does not arbitrate between them.

#![allow(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use std::hash::Hash;

/// Probabilistic set membership over items of type `T`.
///
/// Every implementation upholds three promises:
///
/// * **No false negatives**: once `insert(&x)` returns, `contains(&x)` is
///   `true` for the rest of the filter's life.
/// * **Determinism**: the same construction parameters and insert sequence
///   produce the same answers, across runs and across instances.
/// * **Sharability**: implementations are `Send + Sync`.
///
/// The generic parameter keeps key types honest: a `BloomFilter<String>`
/// cannot be queried with an `i32`, and the compiler says so.
///
/// # Examples
///
/// ```
/// use bloomsieve::filters::StandardBloomFilter;
/// use bloomsieve::core::BloomFilter;
///
/// let mut filter = StandardBloomFilter::<String>::new(1000, 0.01).unwrap();
/// BloomFilter::insert(&mut filter, &"hello".to_string());
/// assert!(filter.contains(&"hello".to_string()));
/// ```
pub trait BloomFilter<T: Hash>: Send + Sync {
    /// Record an item.
    ///
    /// Afterwards `contains(item)` returns `true`, unconditionally. Inserting
    /// an item that is already present leaves the bits as they were but still
    /// counts as an operation; [`len`](Self::len) tracks insert calls, not
    /// distinct keys.
    ///
    /// Runs in O(k) for k hash probes, with no allocation.
    fn insert(&mut self, item: &T);

    /// Query an item.
    ///
    /// * `true` - the item **might** have been inserted (or this is a false
    ///   positive)
    /// * `false` - the item was **definitely never** inserted
    ///
    /// Queries are pure: they never change the filter, and repeated calls
    /// with the same key return the same answer. Worst case O(k) probes;
    /// stops at the first clear bit.
    #[must_use]
    fn contains(&self, item: &T) -> bool;

    /// Number of insert operations performed so far.
    ///
    /// Duplicates count every time. The filter cannot tell a re-insertion
    /// from a fresh key and does not try.
    #[must_use]
    fn len(&self) -> usize;

    /// Whether no insert has happened yet.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current theoretical false positive probability, in [0.0, 1.0].
    ///
    /// Evaluates `(1 - e^(-kn/m))^k` from the geometry (m bits, k probes)
    /// and the insert counter n. Bit occupancy is never inspected. Because n
    /// counts duplicates, heavy re-insertion drives the estimate above the
    /// true rate, erring conservative.
    #[must_use]
    fn false_positive_rate(&self) -> f64;

    /// Capacity the filter was sized for.
    ///
    /// Inserting past this count is allowed; the false positive rate then
    /// climbs past the configured target.
    #[must_use]
    fn expected_items(&self) -> usize;

    /// Size of the bit array.
    #[must_use]
    fn bit_count(&self) -> usize;

    /// Number of hash probes per operation.
    #[must_use]
    fn hash_count(&self) -> usize;

    /// Insert every item the iterator yields.
    ///
    /// Same effect as looping over [`insert`](Self::insert); implementations
    /// may override with something faster.
    fn insert_batch<'a, I>(&mut self, items: I)
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        for item in items {
            self.insert(item);
        }
    }

    /// `true` when every item might be present. Short-circuits on the first
    /// definite miss.
    #[must_use]
    fn contains_all<'a, I>(&self, items: I) -> bool
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        items.into_iter().all(|item| self.contains(item))
    }

    /// `true` when at least one item might be present. Short-circuits on the
    /// first possible hit.
    #[must_use]
    fn contains_any<'a, I>(&self, items: I) -> bool
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        items.into_iter().any(|item| self.contains(item))
    }
}
