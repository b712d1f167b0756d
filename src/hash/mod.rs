//! Hashing layer: one deterministic 64-bit digest per key.
//!
//! Filters ask this module for a single base value per item and then spread
//! it over the bit array themselves, probing `(base + i) mod m` for
//! `i in 0..k`. That is the Kirsch-Mitzenmacher construction: one real hash
//! invocation, k cheap modular offsets, and the offsets stay distinct
//! because the sizing math guarantees `k ≤ m`.
//!
//! ```
//! use bloomsieve::hash::{StdHasher, BloomHasher};
//!
//! let hasher = StdHasher::new();
//! let hash = hasher.hash_bytes(b"hello");
//! ```
//!
//! Two algorithms are available. [`StdHasher`] (seeded FNV-1a) is the
//! default: small, dependency-free, and reproducible across runs. Building
//! with `--features xxhash` adds [`XxHasher`] (XXH3), which wins on keys
//! past roughly a hundred bytes; the [`recommended_hasher`] factory picks
//! whichever of the two the build enables. Both are deterministic, which is
//! a hard requirement here: filters configured alike must probe the same
//! bits for the same key on every run.
//!
//! # References
//!
//! - Kirsch & Mitzenmacher (2006): "Less Hashing, Same Performance: Building a Better Bloom Filter"
//! - Yann Collet: "XXHash - Extremely fast non-cryptographic hash algorithm"

pub mod hasher;

#[cfg(feature = "xxhash")]
pub mod xxhash;

pub use hasher::{BloomHasher, Fnv1aHasher, StdHasher};

#[cfg(feature = "xxhash")]
pub use xxhash::XxHasher;

/// The hasher filters fall back on when none is supplied.
///
/// A stable name for downstream code; the concrete type behind it is
/// currently [`StdHasher`].
pub type DefaultHasher = StdHasher;

/// One-line import for the hashing layer.
///
/// ```
/// use bloomsieve::hash::prelude::*;
///
/// let hasher = StdHasher::new();
/// let hash = hasher.hash_bytes(b"test");
/// ```
pub mod prelude {
    pub use super::hasher::{BloomHasher, StdHasher};

    #[cfg(feature = "xxhash")]
    pub use super::xxhash::XxHasher;
}

/// The best hasher this build can offer, statically dispatched.
///
/// Resolves to [`XxHasher`] when the `xxhash` feature is on and to
/// [`StdHasher`] otherwise; the choice happens at compile time.
///
/// # Examples
///
/// ```
/// use bloomsieve::hash::{recommended_hasher, BloomHasher};
///
/// let hasher = recommended_hasher();
/// let hash = hasher.hash_bytes(b"test");
/// ```
#[must_use]
pub fn recommended_hasher() -> impl BloomHasher {
    #[cfg(feature = "xxhash")]
    {
        XxHasher::new()
    }

    #[cfg(not(feature = "xxhash"))]
    {
        StdHasher::new()
    }
}

/// A seeded instance of the build's best hasher.
///
/// Same compile-time selection as [`recommended_hasher`]; the seed picks an
/// independent member of the hash family, so two filters seeded differently
/// do not share false positives.
///
/// # Examples
///
/// ```
/// use bloomsieve::hash::{hasher_with_seed, BloomHasher};
///
/// let hasher1 = hasher_with_seed(1);
/// let hasher2 = hasher_with_seed(2);
///
/// let h1 = hasher1.hash_bytes(b"test");
/// let h2 = hasher2.hash_bytes(b"test");
/// assert_ne!(h1, h2);
/// ```
#[must_use]
pub fn hasher_with_seed(seed: u64) -> impl BloomHasher {
    #[cfg(feature = "xxhash")]
    {
        XxHasher::with_seed(seed)
    }

    #[cfg(not(feature = "xxhash"))]
    {
        StdHasher::with_seed(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_hashers_are_deterministic() {
        let recommended = recommended_hasher();
        assert_eq!(
            recommended.hash_bytes(b"test"),
            recommended.hash_bytes(b"test")
        );
        assert_ne!(recommended.hash_bytes(b"test"), 0);

        let seeded = hasher_with_seed(42);
        assert_eq!(seeded.hash_bytes(b"test"), seeded.hash_bytes(b"test"));
    }

    #[test]
    fn test_factory_seeds_are_independent() {
        assert_ne!(
            hasher_with_seed(1).hash_bytes(b"test"),
            hasher_with_seed(2).hash_bytes(b"test")
        );
    }

    #[test]
    fn test_default_hasher_alias_matches_std_hasher() {
        let aliased: DefaultHasher = DefaultHasher::new();

        assert_eq!(
            aliased.hash_bytes(b"alias check"),
            StdHasher::new().hash_bytes(b"alias check")
        );
    }

    #[test]
    fn test_prelude_covers_common_names() {
        use prelude::*;

        let hasher = StdHasher::new();
        assert_ne!(hasher.hash_bytes(b"test"), 0);
    }

    #[test]
    fn test_every_reexport_resolves() {
        let _ = StdHasher::new();
        let _ = Fnv1aHasher::new();

        #[cfg(feature = "xxhash")]
        {
            // The optional algorithm is held to the same determinism contract
            let xx = XxHasher::new();
            assert_eq!(xx.hash_bytes(b"test"), xx.hash_bytes(b"test"));
            assert_ne!(xx.hash_bytes(b"test"), 0);
        }
    }
}
