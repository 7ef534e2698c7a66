//! Ring queue sizing and layout constants.

/// Default ring capacity used by [`crate::RingConfig::default`] (must be a power of two).
pub const DEFAULT_CAPACITY: u32 = 1024;

/// Largest capacity the 28-bit size/mask fields can represent.
pub const SIZE_MASK: u32 = 0x0FFF_FFFF;

/// Cache line size used to isolate producer and consumer metadata blocks.
pub const CACHE_LINE_SIZE: usize = 64;

/// Default number of pause-hint spins in the publication barrier before
/// yielding to the OS scheduler. `0` disables yielding entirely.
pub const DEFAULT_PAUSE_REP: u32 = 0;
