//! Spin helpers for the multi-side publication barrier.
//!
//! The reservation engine's CAS retry loop (`std::hint::spin_loop()` on
//! failure, then immediately re-read and retry) is inlined at the call site
//! in `reservation.rs` — it is lock-free by construction (some CAS in the
//! round must succeed) and needs no policy beyond the pause hint. The
//! publication barrier is different: a multi-side commit can be stuck behind
//! a *preempted* earlier reservation holder, so it additionally supports
//! yielding to the OS scheduler after a configurable number of pauses.

use std::hint;
use std::sync::atomic::{AtomicU32, Ordering};
use std::thread;

/// Spins until `tail` reaches `expected`, i.e. until every reservation on
/// this side that was granted before ours has published. Used by the
/// multi-producer and multi-consumer publication barriers.
///
/// Pauses with [`hint::spin_loop`] on every iteration; after `pause_rep`
/// pauses (if nonzero) yields the thread via [`thread::yield_now`] and emits
/// a `trace!` event so contention is visible to a `tracing` subscriber
/// without costing anything when none is installed.
#[inline]
pub(crate) fn spin_until_turn(tail: &AtomicU32, expected: u32, pause_rep: u32) {
    let mut pauses = 0u32;
    while tail.load(Ordering::Relaxed) != expected {
        hint::spin_loop();
        pauses += 1;
        if pause_rep != 0 && pauses >= pause_rep {
            pauses = 0;
            tracing::trace!(expected, "publication barrier yielding after pause budget");
            thread::yield_now();
        }
    }
}
