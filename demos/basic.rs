//! Basic usage examples for lendpool

use lendpool::{ObjectPool, PoolError};

fn main() {
    println!("=== lendpool - Basic Examples ===\n");

    // Example 1: Eager pool
    eager_pool();

    // Example 2: Lazy pool with growth
    lazy_pool();

    // Example 3: Exhaustion
    exhaustion();

    // Example 4: Manual release after detach
    detach_and_release();
}

fn eager_pool() {
    println!("1. Eager Pool:");
    let pool = ObjectPool::create_eager(3, || Ok(String::from("connection"))).unwrap();

    {
        let item = pool.acquire().unwrap();
        println!("   Got object: {}", *item);
        // Object automatically returned when dropped
    }

    println!("   Available after return: {}\n", pool.available_count());
}

fn lazy_pool() {
    println!("2. Lazy Pool:");
    let pool = ObjectPool::create_lazy(1, 4, || Ok(vec![0u8; 256])).unwrap();

    println!("   Initial size: {}", pool.current_size());

    let a = pool.acquire().unwrap();
    let b = pool.acquire().unwrap();
    println!("   After two acquires - size: {}", pool.current_size());
    println!("   On loan: {}", pool.active_count());

    drop(a);
    drop(b);
    println!("   Available after returns: {}\n", pool.available_count());
}

fn exhaustion() {
    println!("3. Exhaustion:");
    let pool = ObjectPool::create_eager(1, || Ok(42u32)).unwrap();

    let held = pool.acquire().unwrap();
    println!("   First acquire: {}", *held);

    match pool.acquire() {
        Err(PoolError::Exhausted) => println!("   Second acquire: pool exhausted"),
        Err(other) => println!("   Second acquire: unexpected error {other}"),
        Ok(_) => println!("   Second acquire: unexpected success"),
    }

    drop(held);
    println!("   After return: {} available\n", pool.available_count());
}

fn detach_and_release() {
    println!("4. Detach and Manual Release:");
    let pool = ObjectPool::create_eager(2, || Ok(String::from("worker"))).unwrap();

    let item = pool.acquire().unwrap().detach();
    println!("   Detached: {}", item);
    println!("   On loan while detached: {}", pool.active_count());

    pool.release(item);
    println!("   Available after manual release: {}", pool.available_count());
}
