//! Criterion throughput benchmark for single-threaded and SPSC ring usage.

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use ringqueue::{Behavior, Flags, Ring};
use std::hint::black_box;
use std::sync::Arc;
use std::thread;

const RING_SIZE: u32 = 1 << 16;
const BATCH_SIZE: usize = 256;
const TOTAL_ITEMS: u64 = 2_000_000;

fn bench_single_threaded_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_threaded_push_pop");
    group.throughput(Throughput::Elements(TOTAL_ITEMS));

    group.bench_function("fixed_batches", |b| {
        b.iter(|| {
            let ring = Ring::<u64>::new(RING_SIZE, Flags::SPSC).unwrap();
            let batch = [0u64; BATCH_SIZE];
            let mut out = [0u64; BATCH_SIZE];
            let mut items = 0u64;
            while items < TOTAL_ITEMS {
                black_box(ring.push(&batch, Behavior::Fixed));
                black_box(ring.pop(&mut out, Behavior::Fixed));
                items += BATCH_SIZE as u64;
            }
        });
    });

    group.finish();
}

fn bench_spsc_threaded(c: &mut Criterion) {
    let mut group = c.benchmark_group("spsc_threaded");
    group.throughput(Throughput::Elements(TOTAL_ITEMS));
    group.sample_size(20);

    group.bench_function("producer_consumer_threads", |b| {
        b.iter(|| {
            let ring = Arc::new(Ring::<u64>::new(RING_SIZE, Flags::SPSC).unwrap());
            let ring_cons = Arc::clone(&ring);

            let consumer = thread::spawn(move || {
                let mut out = [0u64; BATCH_SIZE];
                let mut received = 0u64;
                while received < TOTAL_ITEMS {
                    let n = ring_cons.pop(&mut out, Behavior::Variable);
                    received += n as u64;
                }
            });

            let batch = [0u64; BATCH_SIZE];
            let mut sent = 0u64;
            while sent < TOTAL_ITEMS {
                let n = ring.push(&batch, Behavior::Variable);
                sent += n as u64;
            }
            consumer.join().unwrap();
        });
    });

    group.finish();
}

criterion_group!(benches, bench_single_threaded_push_pop, bench_spsc_threaded);
criterion_main!(benches);
