//! Multiple producers and multiple consumers sharing one ring.

use ringqueue::{Behavior, Flags, Ring};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;

const PRODUCERS: u32 = 4;
const CONSUMERS: u32 = 4;
const ITEMS_PER_PRODUCER: u64 = 250_000;

fn main() {
    tracing_subscriber::fmt::init();

    let ring = Arc::new(Ring::<u64>::new(1 << 14, Flags::MPMC).unwrap());
    let produced_total = PRODUCERS as u64 * ITEMS_PER_PRODUCER;
    let consumed = Arc::new(AtomicU64::new(0));

    let producers: Vec<_> = (0..PRODUCERS)
        .map(|_| {
            let ring = ring.clone();
            thread::spawn(move || {
                for i in 0..ITEMS_PER_PRODUCER {
                    loop {
                        if ring.push(&[i], Behavior::Fixed) == 1 {
                            break;
                        }
                        thread::yield_now();
                    }
                }
            })
        })
        .collect();

    let consumers: Vec<_> = (0..CONSUMERS)
        .map(|_| {
            let ring = ring.clone();
            let consumed = consumed.clone();
            thread::spawn(move || {
                let mut out = [0u64; 1];
                while consumed.load(Ordering::Relaxed) < produced_total {
                    if ring.pop(&mut out, Behavior::Fixed) == 1 {
                        consumed.fetch_add(1, Ordering::Relaxed);
                    } else {
                        thread::yield_now();
                    }
                }
            })
        })
        .collect();

    for p in producers {
        p.join().unwrap();
    }
    for c in consumers {
        c.join().unwrap();
    }

    println!(
        "{PRODUCERS} producers and {CONSUMERS} consumers moved {} items through a ring of capacity {}",
        consumed.load(Ordering::Relaxed),
        ring.capacity()
    );
}
