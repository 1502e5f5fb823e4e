//! Contention, timeouts, and factory failures

use lendpool::{ObjectPool, PoolError};
use std::thread;
use std::time::Duration;

#[derive(Debug)]
struct Connection {
    id: usize,
    endpoint: String,
}

impl Connection {
    fn open(id: usize) -> Self {
        Self {
            id,
            endpoint: format!("db://replica-{}", id % 3),
        }
    }
}

fn main() {
    println!("=== lendpool - Advanced Features ===\n");

    // Example 1: Waiting for a release under contention
    bounded_wait();

    // Example 2: Timeout expiry
    timeout_expiry();

    // Example 3: Factory failures propagate
    factory_failure();

    // Example 4: Sharing a pool across threads
    shared_pool();
}

fn bounded_wait() {
    println!("1. Bounded Wait:");

    let pool = ObjectPool::create_eager(1, || Ok(Connection::open(0))).unwrap();
    let held = pool.acquire().unwrap();

    thread::scope(|s| {
        let waiter = s.spawn(|| pool.acquire_timeout(Duration::from_secs(2)));

        thread::sleep(Duration::from_millis(20));
        println!("   Releasing from the main thread...");
        drop(held);

        match waiter.join().unwrap() {
            Ok(conn) => println!("   Waiter got: {:?}", *conn),
            Err(e) => println!("   Waiter failed: {e}"),
        }
    });

    println!();
}

fn timeout_expiry() {
    println!("2. Timeout Expiry:");

    let pool = ObjectPool::create_eager(1, || Ok(Connection::open(1))).unwrap();
    let _held = pool.acquire().unwrap();

    match pool.acquire_timeout(Duration::from_millis(50)) {
        Err(PoolError::AcquireTimeout { waited }) => {
            println!("   Gave up after {waited:?}");
        }
        Err(other) => println!("   Unexpected error: {other}"),
        Ok(_) => println!("   Unexpected success"),
    }

    println!();
}

fn factory_failure() {
    println!("3. Factory Failure:");

    let result: Result<ObjectPool<Connection>, _> =
        ObjectPool::create_eager(2, || Err("replica unreachable".into()));

    match result {
        Err(e) => println!("   Pool creation failed: {e}"),
        Ok(_) => println!("   Unexpected success"),
    }

    println!();
}

fn shared_pool() {
    println!("4. Shared Pool:");

    let counter = std::sync::atomic::AtomicUsize::new(0);
    let pool = ObjectPool::create_lazy(0, 4, move || {
        let id = counter.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        Ok(Connection::open(id))
    })
    .unwrap();

    thread::scope(|s| {
        for worker in 0..8 {
            s.spawn({
                let pool = &pool;
                move || {
                    let conn = pool.acquire_timeout(Duration::from_secs(2)).unwrap();
                    println!("   Worker {worker} using connection {} -> {}", conn.id, conn.endpoint);
                    thread::sleep(Duration::from_millis(5));
                }
            });
        }
    });

    println!("   Constructed {} connections for 8 workers", pool.current_size());
}
