//! Building blocks under the filter types.
//!
//! Three concerns live here, deliberately kept independent of each other:
//!
//! - [`filter`] - the [`BloomFilter`] membership contract
//! - [`bitvec`] - atomic bit storage
//! - [`params`] - sizing math mapping `(n, ε)` to `(m, k)`
//!
//! Everything is `Send + Sync`, and invalid configurations fail at
//! construction, never later.
//!
//! # Examples
//!
//! Sizing a filter by hand:
//!
//! ```
//! use bloomsieve::core::params::{optimal_bit_count, optimal_hash_count};
//!
//! let m = optimal_bit_count(10_000, 0.01).unwrap();
//! let k = optimal_hash_count(0.01).unwrap();
//! assert_eq!((m, k), (95_851, 7));
//! ```
//!
//! Driving the storage layer directly:
//!
//! ```
//! use bloomsieve::core::BitVec;
//!
//! let bv = BitVec::new(1000).unwrap();
//! bv.set(42);
//! bv.set(999);
//!
//! assert!(bv.get(42));
//! assert!(!bv.get(43));
//! assert_eq!(bv.count_ones(), 2);
//! ```

#![allow(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod bitvec;
pub mod filter;
pub mod params;

pub use filter::BloomFilter;

pub use bitvec::BitVec;

pub use params::{
    bits_per_element, calculate_filter_params, expected_fp_rate, optimal_bit_count,
    optimal_hash_count,
};

/// Prelude module for convenient imports.
///
/// ```
/// use bloomsieve::core::prelude::*;
///
/// let (m, k) = calculate_filter_params(10_000, 0.01).unwrap();
/// assert!(m > 0 && k > 0);
/// ```
pub mod prelude {
    pub use super::filter::BloomFilter;
    pub use super::params::{calculate_filter_params, optimal_bit_count, optimal_hash_count};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prelude_compiles() {
        use prelude::*;

        let (m, k) = calculate_filter_params(1000, 0.01).unwrap();
        assert_eq!((m, k), (9586, 7));
    }

    #[test]
    fn test_reexported_names_resolve() {
        let bv = BitVec::new(100).unwrap();
        assert_eq!(bv.len(), 100);

        assert_eq!(optimal_bit_count(1000, 0.01).unwrap(), 9586);
        assert_eq!(optimal_hash_count(0.01).unwrap(), 7);
    }

    #[test]
    fn test_bitvec_sized_from_params() {
        let (m, k) = calculate_filter_params(1000, 0.01).unwrap();

        let bv = BitVec::new(m).unwrap();
        assert_eq!(bv.len(), m);

        assert!(k <= m);
        assert!(k >= 5 && k <= 10);
    }

    #[test]
    fn test_analytic_rate_near_target_at_design_load() {
        // At exactly n inserts the ceilinged geometry should land close to
        // the requested rate; the ceilings only push it below.
        for target in [0.01, 0.005] {
            let n = 5000;
            let (m, k) = calculate_filter_params(n, target).unwrap();
            let analytic = expected_fp_rate(m, n, k);

            let relative_error = (analytic - target).abs() / target;
            assert!(
                relative_error < 0.15,
                "target {} gave analytic {} ({}% off)",
                target,
                analytic,
                relative_error * 100.0
            );
        }
    }

    #[test]
    fn test_bits_per_element_agrees_with_bit_count() {
        let bpe = bits_per_element(0.01).unwrap();
        assert!((bpe - 9.585).abs() < 0.01);

        // Scaling bits-per-element back up reproduces the direct formula
        let n = 10_000;
        let m = optimal_bit_count(n, 0.001).unwrap();
        let scaled = (n as f64 * bits_per_element(0.001).unwrap()).ceil() as usize;
        assert_eq!(m, scaled);
    }

    #[test]
    fn test_estimate_edges() {
        // No inserts, no false positives
        assert_eq!(expected_fp_rate(1000, 0, 7), 0.0);

        // One insert per bit saturates the filter
        assert!(expected_fp_rate(1000, 1000, 7) > 0.5);
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        assert!(optimal_bit_count(0, 0.01).is_err());

        for bad_rate in [0.0, 1.0, -0.1, 1.5] {
            assert!(optimal_bit_count(1000, bad_rate).is_err());
            assert!(optimal_hash_count(bad_rate).is_err());
        }
    }

    #[test]
    fn test_shared_bitvec_across_threads() {
        use std::sync::Arc;
        use std::thread;

        let bv = Arc::new(BitVec::new(1000).unwrap());

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let bv = Arc::clone(&bv);
                thread::spawn(move || {
                    for i in 0..125 {
                        bv.set(t * 125 + i);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(bv.count_ones(), 1000);
    }
}
