//! Minimal single-producer/single-consumer usage of `Ring`.

use ringqueue::{Behavior, Flags, Ring};
use std::thread;

fn main() {
    tracing_subscriber::fmt::init();

    let ring = Ring::<u64>::new(1 << 16, Flags::SPSC).unwrap();
    let ring = std::sync::Arc::new(ring);

    const TOTAL: u64 = 1_000_000;
    let ring_cons = ring.clone();
    let consumer = thread::spawn(move || {
        let mut out = [0u64; 256];
        let mut sum = 0u64;
        let mut received = 0u64;
        while received < TOTAL {
            let n = ring_cons.pop(&mut out, Behavior::Variable);
            for &value in &out[..n as usize] {
                sum += value;
            }
            received += n as u64;
        }
        sum
    });

    let mut sent = 0u64;
    while sent < TOTAL {
        let remaining = TOTAL - sent;
        let batch_len = remaining.min(256) as usize;
        let batch: Vec<u64> = (sent..sent + batch_len as u64).collect();
        let n = ring.push(&batch, Behavior::Variable) as u64;
        sent += n;
    }

    let sum = consumer.join().unwrap();
    let expected: u64 = (0..TOTAL).sum();
    println!("pushed and popped {TOTAL} items, sum = {sum} (expected {expected})");
    assert_eq!(sum, expected);
}
