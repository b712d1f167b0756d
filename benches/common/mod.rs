//! Shared data generators and constants for the benchmark suite.
//!
//! Pre-generating inputs here keeps allocation and RNG work out of the
//! measured loops, so the numbers reflect filter operations rather than
//! input construction.
#![allow(dead_code)]

use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use std::collections::HashSet;

/// A random alphanumeric string of exactly `len` bytes.
#[inline]
pub fn random_string(len: usize) -> String {
    let mut rng = thread_rng();
    (0..len).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}

/// Numbered keys with a fixed format, stable across runs.
///
/// Format: "key-00000000", "key-00000001", ...
pub fn generate_sequential_strings(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("key-{i:08}")).collect()
}

/// URL-shaped keys for the crawler scenario.
///
/// Spread over a handful of hosts with random article slugs.
pub fn generate_urls(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("https://site-{}.example/articles/{}", i % 50, random_string(12)))
        .collect()
}

/// Two sets of random string keys with no key in common.
///
/// Returns `(present, absent)`: the first set goes into the filter, the
/// second is guaranteed never inserted, so queries against it measure the
/// miss path.
pub fn create_disjoint_sets(
    present_count: usize,
    absent_count: usize,
    item_size: usize,
) -> (Vec<String>, Vec<String>) {
    let mut pool = HashSet::with_capacity(present_count + absent_count);
    while pool.len() < present_count + absent_count {
        pool.insert(random_string(item_size));
    }

    let mut keys = pool.into_iter();
    let present = keys.by_ref().take(present_count).collect();
    let absent = keys.collect();
    (present, absent)
}

/// Filter capacities from cache-resident to memory-bound.
pub const SIZES: &[usize] = &[1_000, 10_000, 100_000, 1_000_000];

/// Common target false positive rates.
pub const FP_RATES: &[f64] = &[0.1, 0.01, 0.001, 0.0001];

/// Batch sizes for bulk operations.
pub const BATCH_SIZES: &[usize] = &[10, 100, 1_000, 10_000];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_string_shape() {
        let s = random_string(32);
        assert_eq!(s.len(), 32);
        assert!(s.chars().all(|c| c.is_alphanumeric()));
    }

    #[test]
    fn test_sequential_strings_are_numbered() {
        let keys = generate_sequential_strings(5);
        assert_eq!(keys[0], "key-00000000");
        assert_eq!(keys[4], "key-00000004");
    }

    #[test]
    fn test_disjoint_sets_share_nothing() {
        let (present, absent) = create_disjoint_sets(100, 100, 16);
        assert_eq!(present.len(), 100);
        assert_eq!(absent.len(), 100);

        let present_set: HashSet<_> = present.iter().collect();
        assert!(absent.iter().all(|key| !present_set.contains(key)));
    }
}
