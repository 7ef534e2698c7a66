//! A bounded, lock-free, multi-producer/multi-consumer FIFO ring queue.
//!
//! The ring holds opaque, `Copy` pointer-sized-or-smaller items in a
//! power-of-two circular array. Producer and consumer sides are
//! independently configurable as single- or multi-sided: a single-sided
//! declaration lets that side skip its compare-and-swap and take a plain
//! load/store fast path, while a multi-sided declaration supports any number
//! of concurrent callers on that side. Every reservation is followed by a
//! strict-in-order publication barrier, so items always become visible to
//! the opposite side in the order they were reserved, regardless of how
//! reservations themselves interleave.
//!
//! ```
//! use ringqueue::{Behavior, Flags, Ring};
//!
//! let ring = Ring::<u64>::new(16, Flags::SPSC).unwrap();
//! assert_eq!(ring.push(&[1, 2, 3], Behavior::Fixed), 3);
//!
//! let mut out = [0u64; 3];
//! assert_eq!(ring.pop(&mut out, Behavior::Fixed), 3);
//! assert_eq!(out, [1, 2, 3]);
//! ```

mod backoff;
mod config;
mod constants;
mod error;
mod layout;
mod reservation;
mod ring;
mod slots;

pub use config::{Behavior, Flags, RingConfig, Sidedness};
pub use error::{Result, RingError};
pub use ring::Ring;

/// Crate version, exposed for diagnostics.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
