//! Construction errors and the crate-wide [`Result`] alias.
//!
//! The error surface is deliberately narrow: every fallible path in this
//! crate is a construction path. Once a filter exists, `insert`, `contains`,
//! and `estimated_false_positive_rate` cannot fail, so application code
//! handles errors exactly once, where the filter is built.
//!
//! ```
//! use bloomsieve::{Result, StandardBloomFilter};
//!
//! fn cache_filter(capacity: usize) -> Result<StandardBloomFilter<String>> {
//!     StandardBloomFilter::new(capacity, 0.01)
//! }
//! # assert!(cache_filter(10_000).is_ok());
//! # assert!(cache_filter(0).is_err());
//! ```

#![allow(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use std::fmt;

/// Shorthand for `std::result::Result<T, BloomSieveError>`, used by every
/// fallible function in the crate.
pub type Result<T> = std::result::Result<T, BloomSieveError>;

/// Why a filter could not be built.
///
/// A bad `(expected_items, fp_rate)` pair is rejected at the API boundary
/// instead of producing a degenerate filter with a zero-length or unbounded
/// bit array, and each variant keeps the offending value so callers can
/// report it.
///
/// The type is `Clone + PartialEq` so tests and callers can compare errors
/// structurally rather than by message text.
#[derive(Debug, Clone, PartialEq)]
pub enum BloomSieveError {
    /// Valid-looking inputs produced an unrepresentable filter, such as a
    /// bit count past what `usize` can address on this platform.
    InvalidParameters {
        /// What made the parameters unusable.
        message: String,
    },

    /// The requested false positive rate falls outside the open interval
    /// (0, 1).
    ///
    /// Exactly 0 would demand infinite memory, exactly 1 divides the sizing
    /// formulas through `ln(1) = 0`, and anything beyond `[0, 1]` or
    /// non-finite is not a probability.
    FalsePositiveRateOutOfBounds {
        /// The rejected rate.
        fp_rate: f64,
    },

    /// The expected item count was zero, which would size the bit array to
    /// nothing.
    InvalidItemCount {
        /// The rejected count.
        count: usize,
    },
}

impl fmt::Display for BloomSieveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameters { message } => {
                write!(f, "unusable filter parameters: {message}")
            }
            Self::FalsePositiveRateOutOfBounds { fp_rate } => {
                write!(
                    f,
                    "false positive rate {fp_rate} must lie strictly between 0 and 1"
                )
            }
            Self::InvalidItemCount { count } => {
                write!(f, "expected item count must be at least 1, got {count}")
            }
        }
    }
}

impl std::error::Error for BloomSieveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        // No nested errors
        None
    }
}

impl BloomSieveError {
    /// An [`InvalidParameters`](Self::InvalidParameters) error from any
    /// string-ish message.
    ///
    /// # Examples
    /// ```
    /// use bloomsieve::BloomSieveError;
    ///
    /// let err = BloomSieveError::invalid_parameters(
    ///     format!("bit count {} does not fit in memory", u64::MAX)
    /// );
    /// ```
    #[must_use]
    pub fn invalid_parameters(message: impl Into<String>) -> Self {
        Self::InvalidParameters {
            message: message.into(),
        }
    }

    /// A [`FalsePositiveRateOutOfBounds`](Self::FalsePositiveRateOutOfBounds)
    /// error recording the rejected rate.
    #[must_use]
    pub fn fp_rate_out_of_bounds(fp_rate: f64) -> Self {
        Self::FalsePositiveRateOutOfBounds { fp_rate }
    }

    /// An [`InvalidItemCount`](Self::InvalidItemCount) error recording the
    /// rejected count.
    #[must_use]
    pub fn invalid_item_count(count: usize) -> Self {
        Self::InvalidItemCount { count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_bad_value() {
        let cases: Vec<(BloomSieveError, &[&str])> = vec![
            (
                BloomSieveError::invalid_parameters("bit count overflow"),
                &["unusable filter parameters", "bit count overflow"],
            ),
            (
                BloomSieveError::fp_rate_out_of_bounds(1.5),
                &["1.5", "strictly between 0 and 1"],
            ),
            (
                BloomSieveError::invalid_item_count(0),
                &["at least 1", "got 0"],
            ),
        ];

        for (err, fragments) in cases {
            let rendered = err.to_string();
            for fragment in fragments {
                assert!(
                    rendered.contains(fragment),
                    "{:?} rendered as {:?}, missing {:?}",
                    err,
                    rendered,
                    fragment
                );
            }
        }
    }

    #[test]
    fn test_boxes_as_std_error_without_source() {
        use std::error::Error;

        let err: Box<dyn Error> = Box::new(BloomSieveError::invalid_item_count(0));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_equality_distinguishes_variants() {
        let original = BloomSieveError::fp_rate_out_of_bounds(0.0);

        assert_eq!(original, original.clone());
        assert_ne!(original, BloomSieveError::invalid_item_count(0));
        assert_ne!(original, BloomSieveError::fp_rate_out_of_bounds(1.0));
    }

    #[test]
    fn test_question_mark_propagates() {
        fn reject() -> Result<()> {
            Err(BloomSieveError::invalid_item_count(0))
        }

        fn forward() -> Result<u32> {
            reject()?;
            Ok(42)
        }

        assert!(matches!(
            forward().unwrap_err(),
            BloomSieveError::InvalidItemCount { count: 0 }
        ));
    }
}
