// lendpool - bounded, thread-safe object pool
// Eager and lazy population with blocking acquisition

// This is just a binary wrapper - the actual library is in lib.rs
// Run examples with: cargo run --example basic

use lendpool::ObjectPool;

fn main() {
    println!("=== lendpool v1.0.0 ===");
    println!("See demos/ directory for usage examples");
    println!("Run: cargo run --example basic");
    println!();

    // Quick demo
    println!("Quick Demo:");
    let pool = ObjectPool::create_eager(3, || Ok(String::from("resource"))).unwrap();

    {
        let item = pool.acquire().unwrap();
        println!("  Got object: {}", *item);
    }

    println!("  Available after return: {}", pool.available_count());
}
