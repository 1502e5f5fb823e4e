//! Acquire/release cycle benchmarks

use criterion::{criterion_group, criterion_main, Criterion};
use lendpool::ObjectPool;
use std::hint::black_box;
use std::thread;
use std::time::Duration;

fn bench_acquire_release(c: &mut Criterion) {
    let pool = ObjectPool::create_eager(16, || Ok(vec![0u8; 1024])).unwrap();

    c.bench_function("acquire_release_uncontended", |b| {
        b.iter(|| {
            let item = pool.acquire().unwrap();
            black_box(item.len());
        })
    });
}

fn bench_acquire_release_contended(c: &mut Criterion) {
    let pool = ObjectPool::create_eager(4, || Ok(vec![0u8; 1024])).unwrap();

    c.bench_function("acquire_release_contended", |b| {
        b.iter(|| {
            thread::scope(|s| {
                for _ in 0..4 {
                    s.spawn(|| {
                        for _ in 0..16 {
                            let item = pool
                                .acquire_timeout(Duration::from_secs(1))
                                .unwrap();
                            black_box(item.len());
                        }
                    });
                }
            });
        })
    });
}

criterion_group!(benches, bench_acquire_release, bench_acquire_release_contended);
criterion_main!(benches);
