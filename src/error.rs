//! Error types for ring construction.
//!
//! Push and pop never fail in the operational sense — a return of `0` is the
//! normal "not enough room / not enough entries" outcome (see
//! [`crate::Ring::push`] and [`crate::Ring::pop`]). The only checked failure
//! mode is an invalid capacity at construction time.

use thiserror::Error;

/// Result type alias for ring construction.
pub type Result<T> = std::result::Result<T, RingError>;

/// Errors produced while building a [`crate::Ring`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RingError {
    /// `capacity` was not a power of two, or exceeded [`crate::constants::SIZE_MASK`].
    #[error("invalid ring capacity: {message}")]
    Config {
        /// Description of why the capacity was rejected.
        message: String,
    },
}

impl RingError {
    /// Creates a configuration error with the given message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_carries_message() {
        let err = RingError::config("capacity must be a power of two");
        assert!(matches!(err, RingError::Config { .. }));
        assert_eq!(
            err.to_string(),
            "invalid ring capacity: capacity must be a power of two"
        );
    }
}
