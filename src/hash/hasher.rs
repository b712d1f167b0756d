//! The [`BloomHasher`] trait and the default FNV-1a implementation.
//!
//! A hasher turns a byte slice into one 64-bit base value; the filter layer
//! owns everything after that, deriving the i-th probe as `(base + i) mod m`.
//! Keeping the trait byte-oriented (rather than generic over `T: Hash`)
//! leaves serialization with the caller and keeps algorithms decoupled from
//! Rust's `Hash` machinery, so pre-serialized data hashes without a copy.
//!
//! Every hasher here is deterministic. Identically configured filters must
//! agree on where a key lands, run after run, which rules out the
//! per-process random keying of `std::collections::hash_map::RandomState`.
//!
//! # Examples
//!
//! ```
//! use bloomsieve::hash::hasher::{BloomHasher, StdHasher};
//!
//! let hasher = StdHasher::new();
//! let data = b"hello world";
//!
//! let h1 = hasher.hash_bytes(data);
//! let h2 = hasher.hash_bytes(data);
//! assert_eq!(h1, h2); // Deterministic
//! ```

#![allow(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// A deterministic 64-bit hash over byte slices.
///
/// Implementations are interchangeable behind this trait; the crate ships
/// FNV-1a by default and XXH3 behind the `xxhash` feature.
///
/// An implementation must satisfy:
///
/// - **Determinism**: equal bytes hash equal, across calls, instances with
///   the same configuration, and process runs
/// - **Purity**: hashing reads no interior state and mutates nothing
/// - **Distribution**: output spread evenly over the `u64` range, with a
///   single flipped input bit changing about half the output bits
/// - **`Send + Sync`**: filters share their hasher across threads
pub trait BloomHasher: Send + Sync {
    /// Hash `bytes` to a 64-bit value.
    ///
    /// Runs in O(len) time; everything else in the trait derives from this
    /// one operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomsieve::hash::hasher::{BloomHasher, StdHasher};
    ///
    /// let hasher = StdHasher::new();
    /// let h1 = hasher.hash_bytes(b"hello");
    /// let h2 = hasher.hash_bytes(b"hello");
    /// assert_eq!(h1, h2); // Deterministic
    /// ```
    fn hash_bytes(&self, bytes: &[u8]) -> u64;

    /// Hash `bytes` under an explicit per-call seed.
    ///
    /// Distinct seeds must yield statistically independent outputs for the
    /// same input. The default XORs the seed into [`hash_bytes`], which
    /// meets the contract; algorithms with native seeding should override
    /// it.
    ///
    /// [`hash_bytes`]: BloomHasher::hash_bytes
    fn hash_bytes_with_seed(&self, bytes: &[u8], seed: u64) -> u64 {
        self.hash_bytes(bytes) ^ seed
    }

    /// Static name of the algorithm, surfaced in filter diagnostics.
    fn name(&self) -> &'static str;
}

/// FNV-1a state machine implementing [`std::hash::Hasher`].
///
/// FNV-1a is a byte-at-a-time xor-multiply hash with fixed constants, so two
/// runs of the same program always compute the same value for the same
/// input. That reproducibility is the reason it backs [`StdHasher`] instead
/// of the standard library's randomly keyed default.
///
/// # Examples
///
/// ```
/// use bloomsieve::hash::hasher::Fnv1aHasher;
/// use std::hash::Hasher;
///
/// let mut h1 = Fnv1aHasher::new();
/// let mut h2 = Fnv1aHasher::new();
/// h1.write(b"abc");
/// h2.write(b"abc");
/// assert_eq!(h1.finish(), h2.finish());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Fnv1aHasher {
    state: u64,
}

impl Fnv1aHasher {
    /// FNV-1a 64-bit offset basis.
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;

    /// FNV-1a 64-bit prime.
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    /// State initialized to the FNV-1a offset basis.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Self::OFFSET_BASIS,
        }
    }
}

impl std::hash::Hasher for Fnv1aHasher {
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.state ^= byte as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }

    fn finish(&self) -> u64 {
        self.state
    }
}

/// The crate's default [`BloomHasher`]: seeded FNV-1a.
///
/// Every hash mixes in an instance seed before the payload, so filters built
/// with different seeds draw from independent hash families while filters
/// with the same configuration agree exactly, even across process restarts.
///
/// FNV-1a trades raw throughput for simplicity; when hashing long keys
/// dominates, enable the `xxhash` feature and use
/// [`XxHasher`](crate::hash::XxHasher) instead.
///
/// # Examples
///
/// ```
/// use bloomsieve::hash::hasher::{BloomHasher, StdHasher};
///
/// let hasher = StdHasher::new();
/// let hash = hasher.hash_bytes(b"test data");
/// assert!(hash != 0);
/// ```
#[derive(Debug, Clone)]
pub struct StdHasher {
    seed: u64,
}

impl StdHasher {
    /// Hasher with the built-in default seed.
    ///
    /// The seed is the compile-time constant `0x517c_c1b7_2722_0a95`, so
    /// default-constructed hashers are equivalent everywhere.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomsieve::hash::hasher::StdHasher;
    ///
    /// let hasher = StdHasher::new();
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            seed: 0x517c_c1b7_2722_0a95,
        }
    }

    /// Hasher with a caller-chosen seed.
    ///
    /// Each seed selects a distinct hash function from the family.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomsieve::hash::hasher::{BloomHasher, StdHasher};
    ///
    /// let hasher1 = StdHasher::with_seed(0);
    /// let hasher2 = StdHasher::with_seed(42);
    ///
    /// let h1 = hasher1.hash_bytes(b"test");
    /// let h2 = hasher2.hash_bytes(b"test");
    /// assert_ne!(h1, h2);
    /// ```
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }
}

impl Default for StdHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl BloomHasher for StdHasher {
    #[inline]
    fn hash_bytes(&self, bytes: &[u8]) -> u64 {
        use std::hash::Hasher;

        let mut hasher = Fnv1aHasher::new();
        hasher.write_u64(self.seed);
        hasher.write(bytes);
        hasher.finish()
    }

    #[inline]
    fn hash_bytes_with_seed(&self, bytes: &[u8], seed: u64) -> u64 {
        use std::hash::Hasher;

        let mut hasher = Fnv1aHasher::new();
        // The per-call seed folds into the instance seed before the payload
        hasher.write_u64(self.seed ^ seed);
        hasher.write(bytes);
        hasher.finish()
    }

    #[inline]
    fn name(&self) -> &'static str {
        "StdHasher"
    }
}
