//! Type-state builder for [`StandardBloomFilter`].
//!
//! The builder walks through marker states, and each required parameter
//! unlocks the next step:
//!
//! ```text
//! Initial --expected_items()--> WithItems --false_positive_rate()--> Complete --build()--> filter
//! ```
//!
//! Forgetting a parameter is a compile error, not a runtime surprise;
//! only *values* (zero items, a rate outside (0, 1)) are left for
//! [`build`](StandardBloomFilterBuilder::build) to reject.
//!
//! # Examples
//!
//! ```
//! use bloomsieve::builder::StandardBloomFilterBuilder;
//! use bloomsieve::filters::StandardBloomFilter;
//!
//! let filter: StandardBloomFilter<&str> = StandardBloomFilterBuilder::new()
//!     .expected_items(10_000)
//!     .false_positive_rate(0.01)
//!     .build()
//!     .unwrap();
//! ```
//!
//! Value errors surface at the end of the chain:
//!
//! ```
//! use bloomsieve::builder::StandardBloomFilterBuilder;
//! use bloomsieve::filters::StandardBloomFilter;
//!
//! let result: Result<StandardBloomFilter<&str>, _> = StandardBloomFilterBuilder::new()
//!     .expected_items(0)  // Invalid!
//!     .false_positive_rate(0.01)
//!     .build();
//!
//! assert!(result.is_err());
//! ```

use crate::error::Result;
use crate::filters::standard::StandardBloomFilter;
use crate::hash::{BloomHasher, DefaultHasher};
use std::hash::Hash;
use std::marker::PhantomData;

/// Type-state marker: nothing configured yet.
pub struct Initial;

/// Type-state marker: item count configured.
pub struct WithItems;

/// Type-state marker: ready to build.
pub struct Complete;

/// Step-by-step filter construction, with required parameters tracked in
/// the `State` type parameter.
///
/// `H` picks the hash function ([`DefaultHasher`] unless overridden). The
/// builder is a throwaway value, consumed by each step; build filters, then
/// share those.
pub struct StandardBloomFilterBuilder<State, H = DefaultHasher> {
    expected_items: Option<usize>,
    fp_rate: Option<f64>,
    _state: PhantomData<State>,
    _hasher: PhantomData<H>,
}

impl StandardBloomFilterBuilder<Initial, DefaultHasher> {
    /// Start a fresh builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomsieve::builder::StandardBloomFilterBuilder;
    ///
    /// let builder = StandardBloomFilterBuilder::new();
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            expected_items: None,
            fp_rate: None,
            _state: PhantomData,
            _hasher: PhantomData,
        }
    }
}

impl<H> StandardBloomFilterBuilder<Initial, H> {
    /// Set the expected number of insertions and advance to `WithItems`.
    ///
    /// Must be greater than zero; zero is rejected when the chain ends in
    /// [`build`](StandardBloomFilterBuilder::build).
    #[must_use]
    pub fn expected_items(self, items: usize) -> StandardBloomFilterBuilder<WithItems, H> {
        StandardBloomFilterBuilder {
            expected_items: Some(items),
            fp_rate: self.fp_rate,
            _state: PhantomData,
            _hasher: PhantomData,
        }
    }
}

impl<H> StandardBloomFilterBuilder<WithItems, H> {
    /// Set the target false positive probability and advance to `Complete`.
    ///
    /// Must lie strictly between 0 and 1; anything else is rejected when the
    /// chain ends in [`build`](StandardBloomFilterBuilder::build).
    #[must_use]
    pub fn false_positive_rate(self, fp_rate: f64) -> StandardBloomFilterBuilder<Complete, H> {
        StandardBloomFilterBuilder {
            expected_items: self.expected_items,
            fp_rate: Some(fp_rate),
            _state: PhantomData,
            _hasher: PhantomData,
        }
    }
}

impl<H: BloomHasher + Default + Clone> StandardBloomFilterBuilder<Complete, H> {
    /// Pull out and validate the configured values.
    fn validated(self) -> Result<(usize, f64)> {
        // Both fields are Some in the Complete state
        let expected_items = self.expected_items.expect("items set in Complete state");
        let fp_rate = self.fp_rate.expect("rate set in Complete state");

        super::validation::validate_items(expected_items)?;
        super::validation::validate_fp_rate(fp_rate)?;

        Ok((expected_items, fp_rate))
    }

    /// Construct the filter.
    ///
    /// The (m, k) derivation lives in the filter itself; the builder only
    /// forwards validated inputs.
    ///
    /// # Errors
    ///
    /// Returns an error when `expected_items == 0` or `fp_rate` is not in
    /// (0, 1).
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomsieve::builder::StandardBloomFilterBuilder;
    /// use bloomsieve::filters::StandardBloomFilter;
    ///
    /// let filter: StandardBloomFilter<&str> = StandardBloomFilterBuilder::new()
    ///     .expected_items(10_000)
    ///     .false_positive_rate(0.01)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert!(filter.is_empty());
    /// ```
    pub fn build<T: Hash>(self) -> Result<StandardBloomFilter<T, H>> {
        let (expected_items, fp_rate) = self.validated()?;
        StandardBloomFilter::with_hasher(expected_items, fp_rate, H::default())
    }

    /// Construct the filter and report the derived geometry alongside it.
    ///
    /// Handy for logging and capacity planning: the returned
    /// [`FilterMetadata`] records what the sizing math decided.
    ///
    /// # Errors
    ///
    /// Same conditions as [`build`](Self::build).
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomsieve::builder::StandardBloomFilterBuilder;
    /// use bloomsieve::builder::standard::FilterMetadata;
    /// use bloomsieve::filters::StandardBloomFilter;
    ///
    /// let (filter, metadata): (StandardBloomFilter<&str>, FilterMetadata) =
    ///     StandardBloomFilterBuilder::new()
    ///         .expected_items(10_000)
    ///         .false_positive_rate(0.01)
    ///         .build_with_metadata()
    ///         .unwrap();
    ///
    /// assert!(filter.is_empty());
    /// println!("{} bits, {} hashes", metadata.filter_size, metadata.num_hashes);
    /// ```
    pub fn build_with_metadata<T: Hash>(
        self,
    ) -> Result<(StandardBloomFilter<T, H>, FilterMetadata)> {
        let (expected_items, fp_rate) = self.validated()?;

        let filter = StandardBloomFilter::with_hasher(expected_items, fp_rate, H::default())?;
        let metadata = FilterMetadata {
            expected_items,
            fp_rate,
            filter_size: filter.bit_count(),
            num_hashes: filter.hash_count(),
            bits_per_item: filter.bit_count() as f64 / expected_items as f64,
        };

        Ok((filter, metadata))
    }
}

impl Default for StandardBloomFilterBuilder<Initial, DefaultHasher> {
    fn default() -> Self {
        Self::new()
    }
}

/// Derived geometry of a constructed filter.
#[derive(Debug, Clone)]
pub struct FilterMetadata {
    /// Capacity the filter was sized for (n)
    pub expected_items: usize,
    /// Requested false positive rate (p)
    pub fp_rate: f64,
    /// Bit array length the sizing math chose (m)
    pub filter_size: usize,
    /// Hash probes per operation (k)
    pub num_hashes: usize,
    /// Storage cost per expected item, m / n
    pub bits_per_item: f64,
}

impl FilterMetadata {
    /// Bit array size rounded up to whole bytes.
    #[must_use]
    pub fn memory_bytes(&self) -> usize {
        (self.filter_size + 7) / 8
    }

    /// Bit array size in kilobytes.
    #[must_use]
    pub fn memory_kb(&self) -> f64 {
        self.memory_bytes() as f64 / 1024.0
    }

    /// Bit array size in megabytes.
    #[must_use]
    pub fn memory_mb(&self) -> f64 {
        self.memory_bytes() as f64 / (1024.0 * 1024.0)
    }
}
