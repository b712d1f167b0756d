//! bloomsieve: a standard Bloom filter library for Rust.
//!
//! One carefully specified filter, parameters derived from the target false
//! positive rate, a deterministic hash family, and a rate estimate driven by
//! the insert count.
//!
//! # The Data Structure
//!
//! A Bloom filter trades exactness for space. Its membership answers are
//! one-sided: `contains` may wrongly answer yes, at a rate chosen when the
//! filter is built, but it never wrongly answers no. In exchange, a filter
//! budgeted for 1% false positives spends under 10 bits per expected key,
//! where an exact set would store every key in full.
//!
//! # Quick Start
//!
//! ```
//! use bloomsieve::filters::StandardBloomFilter;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Sized for 10,000 keys at a 1% false positive rate
//! let filter: StandardBloomFilter<&str> = StandardBloomFilter::new(10_000, 0.01)?;
//!
//! filter.insert(&"hello");
//! filter.insert(&"world");
//!
//! assert!(filter.contains(&"hello"));    // inserted keys always hit
//! assert!(!filter.contains(&"goodbye")); // a miss is definitive
//!
//! // Track the estimated false positive probability
//! println!("estimated rate: {}", filter.estimated_false_positive_rate());
//! # Ok(())
//! # }
//! ```
//!
//! # Parameters
//!
//! Construction takes the expected item count `n` and the target false
//! positive rate `p`, and derives:
//!
//! - filter size `m = ⌈-n × ln(p) / (ln 2)²⌉` bits
//! - hash count `k = ⌈-log₂(p)⌉`
//!
//! Both inputs are validated up front: `n = 0` or `p` outside `(0, 1)` is a
//! construction error, never a silently degenerate filter. After
//! construction nothing is revalidated; `insert`, `contains`, and the rate
//! estimate cannot fail.
//!
//! # Concurrency
//!
//! The filter stores its bits in atomics, so `insert` and `contains` take
//! `&self` and one writer may run alongside concurrent readers without
//! locking. Nothing stronger is promised: multiple writers must be
//! serialized externally (wrap the filter in a `Mutex` or `RwLock`). See
//! [`filters::standard`] for the full contract.
//!
//! # Using the Builder
//!
//! ```
//! use bloomsieve::builder::StandardBloomFilterBuilder;
//! use bloomsieve::filters::StandardBloomFilter;
//!
//! // Parameters named at the call site, checked at compile time
//! let filter: StandardBloomFilter<&str> = StandardBloomFilterBuilder::new()
//!     .expected_items(10_000)
//!     .false_positive_rate(0.01)
//!     .build()
//!     .unwrap();
//! ```
//!
//! # Beyond the Basics
//!
//! Batch insert and query calls, occupancy diagnostics, and sizing helpers
//! ship in the box. The `xxhash` cargo feature swaps the default FNV-1a
//! hash family for XXH3 when key hashing dominates the profile; everything
//! else is always enabled.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::len_zero)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(html_root_url = "https://docs.rs/bloomsieve/0.2.0")]

/// Bit storage, sizing math, and the [`BloomFilter`] trait
pub mod core;

/// Construction errors and the crate-wide [`Result`]
pub mod error;

/// The filter type itself
pub mod filters;

/// Deterministic hash family
pub mod hash;

/// Compile-time-checked construction
pub mod builder;

// The working set most callers touch, lifted to the crate root
pub use builder::StandardBloomFilterBuilder;
pub use core::filter::BloomFilter;
pub use error::{BloomSieveError, Result};
pub use filters::StandardBloomFilter;
pub use hash::BloomHasher;

/// Everything most callers need, one `use` away.
///
/// # Examples
///
/// ```
/// use bloomsieve::prelude::*;
///
/// # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
/// let filter: StandardBloomFilter<&str> = StandardBloomFilter::new(1000, 0.01)?;
/// filter.insert(&"hello");
/// assert!(filter.contains(&"hello"));
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::builder::StandardBloomFilterBuilder;
    pub use crate::core::filter::BloomFilter;
    pub use crate::error::{BloomSieveError, Result};
    pub use crate::filters::StandardBloomFilter;
    pub use crate::hash::BloomHasher;

    #[cfg(feature = "xxhash")]
    pub use crate::hash::XxHasher;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_covers_a_round_trip() {
        let filter = StandardBloomFilter::<String>::new(100, 0.01).unwrap();
        filter.insert(&"crate root".to_string());
        assert!(filter.contains(&"crate root".to_string()));
    }

    #[test]
    fn test_filter_works_behind_the_trait() {
        fn exercise<F: BloomFilter<String>>(filter: &mut F) {
            filter.insert(&"item".to_string());
            assert!(filter.contains(&"item".to_string()));
        }

        let mut filter = StandardBloomFilter::<String>::new(100, 0.01).unwrap();
        exercise(&mut filter);
    }

    #[test]
    fn test_builder_reachable_from_root() {
        let filter: StandardBloomFilter<String> = StandardBloomFilterBuilder::new()
            .expected_items(1000)
            .false_positive_rate(0.01)
            .build()
            .unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_root_error_reexport() {
        let err = StandardBloomFilter::<String>::new(0, 0.01).unwrap_err();
        assert!(matches!(err, BloomSieveError::InvalidItemCount { .. }));
    }

    #[test]
    fn test_estimate_smoke() {
        let filter = StandardBloomFilter::<u64>::new(1000, 0.01).unwrap();
        assert_eq!(filter.estimated_false_positive_rate(), 0.0);

        filter.insert(&1);
        let estimate = filter.estimated_false_positive_rate();
        assert!(estimate > 0.0 && estimate < 1.0);
    }
}
