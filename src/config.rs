//! Construction-time configuration: concurrency flags, bulk-transfer behavior,
//! and the [`RingConfig`] builder.

use crate::constants::{DEFAULT_PAUSE_REP, SIZE_MASK};
use crate::error::{Result, RingError};

/// Concurrency flags for the two sides of a [`crate::Ring`].
///
/// Absence of a flag means the corresponding side is *multi*: concurrent
/// callers reserve slots via compare-and-swap. Setting a flag tells the ring
/// that at most one caller will ever operate on that side, letting it skip
/// the CAS and take a plain-load/plain-store fast path. Honoring a `Single`
/// declaration is the caller's responsibility — a concurrent caller on a side
/// declared `Single` is undefined behavior in the same sense as a data race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    pub producer: Sidedness,
    pub consumer: Sidedness,
}

/// Whether a side of the ring has at most one concurrent caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sidedness {
    /// Concurrent callers reserve slots via CAS.
    #[default]
    Multi,
    /// At most one caller; reservation is a plain load/store.
    Single,
}

impl Sidedness {
    #[inline]
    pub(crate) fn is_single(self) -> bool {
        matches!(self, Sidedness::Single)
    }
}

impl Flags {
    /// Single producer, single consumer.
    pub const SPSC: Flags = Flags {
        producer: Sidedness::Single,
        consumer: Sidedness::Single,
    };
    /// Multi producer, single consumer.
    pub const MPSC: Flags = Flags {
        producer: Sidedness::Multi,
        consumer: Sidedness::Single,
    };
    /// Single producer, multi consumer.
    pub const SPMC: Flags = Flags {
        producer: Sidedness::Single,
        consumer: Sidedness::Multi,
    };
    /// Multi producer, multi consumer.
    pub const MPMC: Flags = Flags {
        producer: Sidedness::Multi,
        consumer: Sidedness::Multi,
    };
}

/// Bulk-transfer behavior for [`crate::Ring::push`] / [`crate::Ring::pop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    /// All-or-nothing: transfer exactly `n` items, or none at all.
    Fixed,
    /// Best-effort: transfer as many of the `n` items as there is room for.
    Variable,
}

/// Builder for constructing a [`crate::Ring`].
///
/// ```
/// use ringqueue::{Flags, RingConfig};
///
/// let config = RingConfig::new(1024).unwrap().with_flags(Flags::MPMC);
/// assert_eq!(config.capacity(), 1024);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RingConfig {
    capacity: u32,
    flags: Flags,
    pause_rep: u32,
}

impl RingConfig {
    /// Creates a configuration for a ring of `capacity` slots.
    ///
    /// `capacity` must be a power of two no greater than
    /// [`crate::constants::SIZE_MASK`]; one slot of `capacity` is sacrificed
    /// to disambiguate full from empty, so the ring holds at most
    /// `capacity - 1` items.
    pub fn new(capacity: u32) -> Result<Self> {
        validate_capacity(capacity)?;
        Ok(Self {
            capacity,
            flags: Flags::default(),
            pause_rep: DEFAULT_PAUSE_REP,
        })
    }

    /// Sets the producer/consumer concurrency flags.
    #[must_use]
    pub fn with_flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    /// Sets the number of publication-barrier pause-hint spins before
    /// yielding to the OS scheduler (`0` disables yielding).
    #[must_use]
    pub fn with_pause_rep(mut self, pause_rep: u32) -> Self {
        self.pause_rep = pause_rep;
        self
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    #[inline]
    pub fn mask(&self) -> u32 {
        self.capacity - 1
    }

    #[inline]
    pub fn flags(&self) -> Flags {
        self.flags
    }

    #[inline]
    pub fn pause_rep(&self) -> u32 {
        self.pause_rep
    }
}

impl Default for RingConfig {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_CAPACITY).expect("DEFAULT_CAPACITY is valid")
    }
}

pub(crate) fn validate_capacity(capacity: u32) -> Result<()> {
    if capacity == 0 || !capacity.is_power_of_two() {
        return Err(RingError::config(format!(
            "capacity {capacity} is not a power of two"
        )));
    }
    if capacity > SIZE_MASK {
        return Err(RingError::config(format!(
            "capacity {capacity} exceeds SIZE_MASK ({SIZE_MASK})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_power_of_two() {
        assert!(RingConfig::new(100).is_err());
    }

    #[test]
    fn rejects_oversized_capacity() {
        assert!(RingConfig::new(SIZE_MASK + 1).is_err());
    }

    #[test]
    fn accepts_power_of_two() {
        let config = RingConfig::new(64).unwrap();
        assert_eq!(config.capacity(), 64);
        assert_eq!(config.mask(), 63);
    }

    #[test]
    fn builder_sets_flags_and_pause_rep() {
        let config = RingConfig::new(16)
            .unwrap()
            .with_flags(Flags::MPMC)
            .with_pause_rep(1024);
        assert_eq!(config.flags(), Flags::MPMC);
        assert_eq!(config.pause_rep(), 1024);
    }

    #[test]
    fn default_config_is_valid() {
        let config = RingConfig::default();
        assert!(config.capacity().is_power_of_two());
    }
}
