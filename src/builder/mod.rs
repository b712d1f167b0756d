//! Fluent construction for Bloom filters.
//!
//! [`StandardBloomFilterBuilder`] front-ends the filter constructors with a
//! type-state chain: required parameters are tracked in the type, so a
//! half-configured builder has no `build()` to call. Out-of-range *values*
//! still fail at runtime, with the same errors the constructors raise.
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

#![allow(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod standard;

pub use standard::StandardBloomFilterBuilder;

use crate::error::{BloomSieveError, Result};

/// Shared input checks, one source of truth for every build path.
mod validation {
    use super::*;

    /// Reject a zero item count.
    #[inline]
    pub fn validate_items(items: usize) -> Result<()> {
        if items == 0 {
            return Err(BloomSieveError::invalid_item_count(items));
        }
        Ok(())
    }

    /// Reject a rate that is not a finite value in (0, 1).
    #[inline]
    pub fn validate_fp_rate(fp_rate: f64) -> Result<()> {
        if !fp_rate.is_finite() || fp_rate <= 0.0 || fp_rate >= 1.0 {
            return Err(BloomSieveError::fp_rate_out_of_bounds(fp_rate));
        }
        Ok(())
    }
}

/// Prelude for convenient builder imports.
pub mod prelude {
    pub use super::StandardBloomFilterBuilder;
}
