use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lorawan_band::{BandOptions, Region, Registry};

use std::alloc::System;
use std::sync::atomic::{AtomicU64, Ordering};

#[global_allocator]
static GLOBAL: trallocator::Trallocator = trallocator::Trallocator::new(System);

const FREQUENCIES: [u64; 8] = [
    868_100_000,
    923_200_000,
    922_300_000,
    902_300_000,
    915_200_000,
    470_300_000,
    868_800_000,
    1,
];

fn bench_guess(c: &mut Criterion) {
    let registry = Registry::new(BandOptions::default());
    registry.initialize_tables();

    let cnt = AtomicU64::new(0);
    GLOBAL.reset();
    c.bench_function("guess", |b| {
        b.iter(|| {
            cnt.fetch_add(1u64, Ordering::SeqCst);
            for frequency in FREQUENCIES {
                black_box(registry.guess(black_box(frequency)));
            }
        })
    });
    let n = cnt.load(Ordering::SeqCst);
    println!("Approximate memory usage per iteration: {} from {}", GLOBAL.get_sum() / n, n);

    GLOBAL.reset();
    for frequency in FREQUENCIES {
        black_box(registry.guess(frequency));
    }
    assert_eq!(GLOBAL.get_sum(), 0, "guess allocated");
}

fn bench_get(c: &mut Criterion) {
    let registry = Registry::new(BandOptions::default());
    registry.initialize_tables();

    let cnt = AtomicU64::new(0);
    GLOBAL.reset();
    c.bench_function("get_initialized", |b| {
        b.iter(|| {
            cnt.fetch_add(1u64, Ordering::SeqCst);
            black_box(registry.get(black_box(Region::US_902_928)).unwrap());
        })
    });
    let n = cnt.load(Ordering::SeqCst);
    println!("Approximate memory usage per iteration: {} from {}", GLOBAL.get_sum() / n, n);
}

fn bench_initialize(c: &mut Criterion) {
    let cnt = AtomicU64::new(0);
    GLOBAL.reset();
    c.bench_function("initialize_tables", |b| {
        b.iter(|| {
            cnt.fetch_add(1u64, Ordering::SeqCst);
            let registry = Registry::new(BandOptions::default());
            registry.initialize_tables();
            black_box(registry.channel_index().map(|index| index.len()));
        })
    });
    let n = cnt.load(Ordering::SeqCst);
    println!("Approximate memory usage per iteration: {} from {}", GLOBAL.get_sum() / n, n);
}

criterion_group!(benches, bench_guess, bench_get, bench_initialize);
criterion_main!(benches);
