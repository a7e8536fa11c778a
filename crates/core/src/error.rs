//! Error types for palletload.

use thiserror::Error;

/// Result type alias for palletload operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading pallets.
///
/// A pallet that does not fit is not an error; it is reported in the
/// `unpacked` list of the result. Only caller-contract violations end up here.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid container provided.
    #[error("Invalid container: {0}")]
    InvalidContainer(String),

    /// Invalid pallet descriptor provided.
    #[error("Invalid pallet: {0}")]
    InvalidPallet(String),

    /// Two pallets in one invocation share a serial.
    #[error("Duplicate pallet serial: {0}")]
    DuplicateSerial(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A layout broke the containment or non-overlap invariant.
    #[error("Layout violation: {0}")]
    LayoutViolation(String),

    /// Serialization error.
    #[cfg(feature = "serde")]
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::DuplicateSerial("P-001".into());
        assert_eq!(err.to_string(), "Duplicate pallet serial: P-001");

        let err = Error::InvalidContainer("All dimensions must be positive".into());
        assert_eq!(
            err.to_string(),
            "Invalid container: All dimensions must be positive"
        );
    }
}
