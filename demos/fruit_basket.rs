//! Fruit-basket walkthrough of the standard Bloom filter.
//!
//! Run with: cargo run --example fruit_basket

use bloomsieve::filters::StandardBloomFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Sized for 1000 expected items at a 1% false positive target
    let filter = StandardBloomFilter::<&str>::new(1000, 0.01)?;

    println!("Bloom filter sized for 1000 items at a 1% false positive rate");
    println!(
        "  bits: {}, hash functions: {}, memory: {} bytes\n",
        filter.bit_count(),
        filter.hash_count(),
        filter.memory_usage()
    );

    let basket = ["apple", "banana", "cherry"];
    for fruit in &basket {
        filter.insert(fruit);
        println!("inserted {:?}", fruit);
    }

    println!();
    for fruit in ["apple", "banana", "cherry", "durian"] {
        let verdict = if filter.contains(&fruit) {
            "maybe in the basket"
        } else {
            "definitely not in the basket"
        };
        println!("{:>8}: {}", fruit, verdict);
    }

    println!(
        "\nafter {} inserts the estimated false positive rate is {:.2e}",
        filter.len(),
        filter.estimated_false_positive_rate()
    );
    println!(
        "bits set: {} of {}",
        filter.count_set_bits(),
        filter.bit_count()
    );

    Ok(())
}
