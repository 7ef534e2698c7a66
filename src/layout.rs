//! Cache-line-isolated metadata blocks for the two sides of a ring.

use crate::constants::CACHE_LINE_SIZE;
use std::sync::atomic::{AtomicU32, Ordering};

/// Wrapper that pads its contents out to a full cache line so that the
/// producer and consumer metadata blocks never share a line with each other
/// (or with the slot array). Neglecting this isolation is called out in the
/// design notes as losing the primary performance benefit of the layout.
#[repr(align(64))]
pub(crate) struct CacheAligned<T>(pub(crate) T);

static_assertions::const_assert_eq!(std::mem::align_of::<CacheAligned<u8>>(), CACHE_LINE_SIZE);

/// One side's reservation/publication counters: `{ single, size, mask, head, tail }`.
///
/// `size` and `mask` are duplicated on both the producer and consumer blocks
/// (rather than shared) so that a hot reservation loop never has to touch a
/// cache line outside its own side's block just to read them.
pub(crate) struct SideMeta {
    pub(crate) single: bool,
    pub(crate) size: u32,
    pub(crate) mask: u32,
    pub(crate) head: AtomicU32,
    pub(crate) tail: AtomicU32,
}

impl SideMeta {
    pub(crate) fn new(size: u32, mask: u32, single: bool) -> Self {
        Self {
            single,
            size,
            mask,
            head: AtomicU32::new(0),
            tail: AtomicU32::new(0),
        }
    }

    #[inline]
    pub(crate) fn tail_acquire(&self) -> u32 {
        self.tail.load(Ordering::Acquire)
    }

    #[inline]
    pub(crate) fn tail_relaxed(&self) -> u32 {
        self.tail.load(Ordering::Relaxed)
    }
}
