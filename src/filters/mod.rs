//! The filter types bloomsieve ships.
//!
//! There is exactly one: [`StandardBloomFilter`], the classic fixed-geometry
//! filter with capacity and target rate chosen up front. Variants that
//! delete, grow, or merge need machinery this data model rules out, such as
//! counter arrays or sub-filter chains; here a bit once set is never cleared
//! and the size never moves after construction.
//!
//! # Examples
//!
//! ```
//! use bloomsieve::filters::StandardBloomFilter;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let filter: StandardBloomFilter<String> = StandardBloomFilter::new(10_000, 0.01)?;
//! filter.insert(&"hello".to_string());
//! assert!(filter.contains(&"hello".to_string()));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![allow(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod standard;
pub use standard::StandardBloomFilter;
