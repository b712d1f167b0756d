//! Sizing math: from `(n, ε)` to `(m, k)` and back.
//!
//! The formulas are the classic ones from Bloom's 1970 paper. Given the
//! expected element count `n` and the target false positive rate `ε`:
//!
//! - `m = ⌈-n × ln(ε) / (ln 2)²⌉` (bits in filter)
//! - `k = ⌈-log₂(ε)⌉` (number of hash functions)
//!
//! For an optimally sized filter the two classic formulas for `k` coincide:
//! `(m/n) × ln 2 = -log₂(ε)` when `m` takes its optimal value, so `k` is
//! computed directly from `ε`. Both ceilings round toward the conservative
//! side: never fewer bits or hashes than the target rate demands.
//!
//! The inverse direction, the expected false positive rate after `n`
//! insertions, is `p = (1 - e^(-kn/m))^k`.
//!
//! # Derived Invariants
//!
//! For every accepted `(n, ε)` pair:
//! - `m ≥ 1` and `k ≥ 1` (each is the ceiling of a positive quantity)
//! - `k ≤ m` (the raw bit count is `n × k × (1/ln 2)` before ceiling, and
//!   `1/ln 2 > 1`)
//!
//! # References
//!
//! - Bloom, Burton H. (1970). "Space/Time Trade-offs in Hash Coding with Allowable Errors"
//! - Kirsch & Mitzenmacher (2006). "Less Hashing, Same Performance: Building a Better Bloom Filter"

#![allow(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use crate::error::{BloomSieveError, Result};
use std::f64::consts::LN_2;

/// (ln 2)² ≈ 0.4804530139182014, the shared denominator of the sizing math.
const LN2_SQUARED: f64 = LN_2 * LN_2;

/// Number of bits needed for `n` elements at target rate `fp_rate`.
///
/// Implements `m = ⌈-n × ln(ε) / (ln 2)²⌉`, the exact ceiling of the
/// real-valued optimum. No artificial floor is applied: `m = 1` is a legal
/// (if useless) filter size when the target rate is lax enough, and the
/// ceiling guarantees `m ≥ 1` for every accepted input.
///
/// # Errors
///
/// - [`BloomSieveError::InvalidItemCount`] if `n == 0`
/// - [`BloomSieveError::FalsePositiveRateOutOfBounds`] if `fp_rate` not in (0, 1)
/// - [`BloomSieveError::InvalidParameters`] if the bit count overflows `usize`
///
/// # Examples
///
/// ```
/// use bloomsieve::core::params::optimal_bit_count;
///
/// // For 1000 items with 1% false positive rate
/// let bits = optimal_bit_count(1000, 0.01).unwrap();
/// assert_eq!(bits, 9586); // ⌈9585.06⌉
///
/// // For 1M items with a one-in-a-billion rate: large but finite
/// let bits = optimal_bit_count(1_000_000, 1e-9).unwrap();
/// assert!(bits > 43_000_000 && bits < 44_000_000);
/// ```
pub fn optimal_bit_count(n: usize, fp_rate: f64) -> Result<usize> {
    if n == 0 {
        return Err(BloomSieveError::invalid_item_count(n));
    }

    if !fp_rate.is_finite() || fp_rate <= 0.0 || fp_rate >= 1.0 {
        return Err(BloomSieveError::fp_rate_out_of_bounds(fp_rate));
    }

    let n_f64 = n as f64;
    let numerator = -n_f64 * fp_rate.ln();
    let m = numerator / LN2_SQUARED;

    // Check for overflow before casting to usize
    if !m.is_finite() || m > usize::MAX as f64 {
        return Err(BloomSieveError::invalid_parameters(format!(
            "bit count {:.0} does not fit in usize (max {})",
            m,
            usize::MAX
        )));
    }

    // Round up to ensure we meet (or exceed) the target FP rate. The max(1.0)
    // guards the one-ulp-from-1 case where ln rounds the numerator to zero.
    let m_final = m.ceil().max(1.0) as usize;

    if m_final > usize::MAX / 2 {
        return Err(BloomSieveError::invalid_parameters(format!(
            "bit count {} is past practical limits; raise the false positive \
             rate or lower the item count",
            m_final
        )));
    }

    Ok(m_final)
}

/// Number of hash functions for target rate `fp_rate`.
///
/// Implements `k = ⌈-log₂(ε)⌉`. The hash count depends only on the target
/// false positive rate, not on the element count: for an optimally sized
/// filter, `(m/n) × ln 2` reduces to `-log₂(ε)` exactly. The ceiling keeps
/// `k` on the conservative side and guarantees `k ≥ 1` for every rate in
/// (0, 1). No upper clamp is applied; extreme rates legitimately demand many
/// hash passes (`ε = 10⁻⁹` gives `k = 30`).
///
/// # Errors
///
/// - [`BloomSieveError::FalsePositiveRateOutOfBounds`] if `fp_rate` not in (0, 1)
///
/// # Examples
///
/// ```
/// use bloomsieve::core::params::optimal_hash_count;
///
/// assert_eq!(optimal_hash_count(0.01).unwrap(), 7);   // ⌈6.64⌉
/// assert_eq!(optimal_hash_count(0.1).unwrap(), 4);    // ⌈3.32⌉
/// assert_eq!(optimal_hash_count(0.5).unwrap(), 1);    // ⌈1.0⌉
/// assert_eq!(optimal_hash_count(0.99).unwrap(), 1);   // ⌈0.0145⌉
/// ```
pub fn optimal_hash_count(fp_rate: f64) -> Result<usize> {
    if !fp_rate.is_finite() || fp_rate <= 0.0 || fp_rate >= 1.0 {
        return Err(BloomSieveError::fp_rate_out_of_bounds(fp_rate));
    }

    // k = ⌈-log₂(ε)⌉. The max(1.0) guards the one-ulp-from-1 case where
    // log₂ rounds to zero.
    let k = (-fp_rate.log2()).ceil().max(1.0) as usize;

    Ok(k)
}

/// Both sizing outputs at once: `(m, k)` for `(n, fp_rate)`.
///
/// # Errors
///
/// Same conditions as [`optimal_bit_count`].
///
/// # Examples
///
/// ```
/// use bloomsieve::core::params::calculate_filter_params;
///
/// let (m, k) = calculate_filter_params(1000, 0.01).unwrap();
/// assert_eq!(m, 9586);
/// assert_eq!(k, 7);
/// ```
pub fn calculate_filter_params(n: usize, fp_rate: f64) -> Result<(usize, usize)> {
    let m = optimal_bit_count(n, fp_rate)?;
    let k = optimal_hash_count(fp_rate)?;
    Ok((m, k))
}

/// Theoretical false positive probability after `n` insertions.
///
/// Evaluates `p = (1 - e^(-kn/m))^k` for a filter of `m` bits probed by `k`
/// hash functions, assuming uniformly distributed indices and a query for an
/// element **not** in the set.
///
/// Pure arithmetic on the three counters; it cannot fail. A filter built
/// through this crate always satisfies `m ≥ k ≥ 1`, and the remaining edge
/// cases degrade gracefully: `n = 0` yields exactly 0.0 and unbounded `n`
/// saturates at 1.0.
///
/// The input `n` is a count of insert operations, not distinct keys, so
/// re-inserting a duplicate raises the result even though no new bits go to
/// 1; in that case the answer overstates the true rate.
///
/// # Examples
///
/// ```
/// use bloomsieve::core::params::expected_fp_rate;
///
/// // Empty filter: nothing can collide
/// assert_eq!(expected_fp_rate(9586, 0, 7), 0.0);
///
/// // At design capacity the rate lands on the configured target
/// let fp = expected_fp_rate(9586, 1000, 7);
/// assert!((fp - 0.01).abs() < 0.001);
/// ```
#[must_use]
pub fn expected_fp_rate(m: usize, n: usize, k: usize) -> f64 {
    // Edge case: empty filter has zero false positive rate
    if n == 0 {
        return 0.0;
    }

    let m_f64 = m as f64;
    let n_f64 = n as f64;
    let k_f64 = k as f64;

    let exponent = -(k_f64 * n_f64) / m_f64;
    let prob_bit_zero = exponent.exp();
    let prob_bit_one = 1.0 - prob_bit_zero;

    // Probability all k probed bits are 1 → false positive
    let fp_rate = prob_bit_one.powf(k_f64);

    // Clamp to [0, 1] to handle floating-point rounding
    fp_rate.clamp(0.0, 1.0)
}

/// Storage cost of a target rate, in bits per element.
///
/// Evaluates `-ln(ε) / (ln 2)²`, which is [`optimal_bit_count`] divided by
/// `n` before the ceiling. A 1% rate costs about 9.6 bits per element, 0.1%
/// about 14.4.
///
/// # Errors
///
/// Returns [`BloomSieveError::FalsePositiveRateOutOfBounds`] if `fp_rate`
/// is not in (0, 1).
///
/// # Examples
///
/// ```
/// use bloomsieve::core::params::bits_per_element;
///
/// let bpe = bits_per_element(0.01).unwrap();
/// assert!((bpe - 9.6).abs() < 0.1);
/// ```
pub fn bits_per_element(fp_rate: f64) -> Result<f64> {
    if !fp_rate.is_finite() || fp_rate <= 0.0 || fp_rate >= 1.0 {
        return Err(BloomSieveError::fp_rate_out_of_bounds(fp_rate));
    }

    let bpe = -fp_rate.ln() / LN2_SQUARED;
    Ok(bpe)
}
