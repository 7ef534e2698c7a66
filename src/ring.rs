//! The bounded lock-free MPMC ring queue.

use crate::config::{Behavior, Flags, RingConfig};
use crate::constants::{CACHE_LINE_SIZE, SIZE_MASK};
use crate::error::Result;
use crate::layout::{CacheAligned, SideMeta};
use crate::reservation::{publish, reserve};
use crate::slots::SlotArray;

static_assertions::const_assert!(std::mem::size_of::<CacheAligned<SideMeta>>() % 64 == 0);

/// A bounded, lock-free, FIFO ring queue of `T` over a power-of-two backing
/// array, with independently configurable producer/consumer concurrency.
///
/// One slot of the configured capacity is always sacrificed to disambiguate
/// full from empty, so a ring built with capacity `N` holds at most `N - 1`
/// items at once.
pub struct Ring<T> {
    producer: CacheAligned<SideMeta>,
    consumer: CacheAligned<SideMeta>,
    slots: SlotArray<T>,
    pause_rep: u32,
}

// SAFETY: all access to `slots` is gated by the CAS/publication protocol in
// `reservation.rs`; a `Ring<T>` can be shared across threads whenever `T`
// itself can move between them.
unsafe impl<T: Send> Send for Ring<T> {}
unsafe impl<T: Send> Sync for Ring<T> {}

impl<T: Copy> Ring<T> {
    /// Builds a ring from an already-validated [`RingConfig`].
    pub fn with_config(config: RingConfig) -> Self {
        let mask = config.mask();
        let single_producer = config.flags().producer.is_single();
        let single_consumer = config.flags().consumer.is_single();
        tracing::debug!(
            capacity = config.capacity(),
            flags = ?config.flags(),
            "constructing ring"
        );
        Self {
            producer: CacheAligned(SideMeta::new(config.capacity(), mask, single_producer)),
            consumer: CacheAligned(SideMeta::new(config.capacity(), mask, single_consumer)),
            slots: SlotArray::with_capacity(config.capacity()),
            pause_rep: config.pause_rep(),
        }
    }

    /// Builds a ring of `capacity` slots with the given concurrency flags.
    ///
    /// Equivalent to `Ring::with_config(RingConfig::new(capacity)?.with_flags(flags))`.
    pub fn new(capacity: u32, flags: Flags) -> Result<Self> {
        let config = RingConfig::new(capacity)?.with_flags(flags);
        Ok(Self::with_config(config))
    }

    /// Bytes the backing allocation for a ring of `capacity` slots of `T`
    /// would occupy: the two cache-line-isolated metadata blocks plus
    /// `capacity * size_of::<T>()`, rounded up to a whole number of cache
    /// lines. Purely informational: unlike the layout this crate was adapted
    /// from, construction does not take caller-supplied memory, so this is
    /// never required before calling [`Ring::new`].
    pub fn memory_footprint(capacity: u32) -> Option<usize> {
        if capacity == 0 || !capacity.is_power_of_two() || capacity > SIZE_MASK {
            return None;
        }
        let header = 2 * CACHE_LINE_SIZE;
        let payload = (capacity as usize).checked_mul(std::mem::size_of::<T>())?;
        let rounded_payload = payload.div_ceil(CACHE_LINE_SIZE) * CACHE_LINE_SIZE;
        header.checked_add(rounded_payload)
    }

    /// Pushes up to `items.len()` items. Returns the number actually
    /// transferred: under [`Behavior::Fixed`] this is either `items.len()` or
    /// `0`; under [`Behavior::Variable`] it is `min(items.len(), avail())`.
    pub fn push(&self, items: &[T], behavior: Behavior) -> u32 {
        if items.is_empty() {
            return 0;
        }
        let requested = items.len() as u32;
        let Some(reservation) = reserve(
            &self.producer.0,
            &self.consumer.0,
            requested,
            self.producer.0.mask,
            behavior,
        ) else {
            return 0;
        };
        // SAFETY: `reservation` grants exclusive ownership of
        // `[reservation.head, reservation.head + reservation.n)` until we publish it.
        unsafe {
            self.slots
                .copy_in(reservation.head, &items[..reservation.n as usize]);
        }
        publish(&self.producer.0, &reservation, self.pause_rep);
        reservation.n
    }

    /// Pops up to `out.len()` items. Returns the number actually transferred,
    /// with the same [`Behavior`] semantics as [`Ring::push`].
    pub fn pop(&self, out: &mut [T], behavior: Behavior) -> u32 {
        if out.is_empty() {
            return 0;
        }
        let requested = out.len() as u32;
        let Some(reservation) = reserve(&self.consumer.0, &self.producer.0, requested, 0, behavior)
        else {
            return 0;
        };
        // SAFETY: `reservation` grants exclusive ownership of
        // `[reservation.head, reservation.head + reservation.n)` until we publish it.
        unsafe {
            self.slots
                .copy_out(reservation.head, &mut out[..reservation.n as usize]);
        }
        publish(&self.consumer.0, &reservation, self.pause_rep);
        reservation.n
    }

    /// Number of items currently queued.
    pub fn count(&self) -> u32 {
        self.producer
            .0
            .tail_acquire()
            .wrapping_sub(self.consumer.0.tail_acquire())
    }

    /// Number of additional items that could be pushed right now.
    pub fn avail(&self) -> u32 {
        self.producer
            .0
            .mask
            .wrapping_add(self.consumer.0.tail_acquire())
            .wrapping_sub(self.producer.0.tail_acquire())
    }

    /// Whether the ring currently holds no items.
    pub fn empty(&self) -> bool {
        self.count() == 0
    }

    /// Whether the ring currently has no room to push.
    pub fn full(&self) -> bool {
        self.avail() == 0
    }

    /// The ring's configured capacity (including the one sacrificed slot).
    pub fn capacity(&self) -> u32 {
        self.producer.0.size
    }
}
