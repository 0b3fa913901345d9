//! Error types for the stealth engine.

use chameleon_core::{Address, CoreError};
use thiserror::Error;

/// Errors that can occur during stealth operations.
///
/// Every variant is scoped to the request that raised it. None is retried
/// internally and none leaves the engine or registry in a different state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StealthError {
    /// The recipient's address is sanctioned. No key material was produced.
    #[error("address is sanctioned: {0}")]
    SanctionedAddress(Address),

    /// Key decoding, curve validation, or randomness failed.
    #[error("key error: {0}")]
    Core(#[from] CoreError),
}

/// Flat classification of [`StealthError`], for mapping to transport statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    SanctionedAddress,
    InvalidKeyEncoding,
    PointNotOnCurve,
    RandomnessFailure,
    InvalidAddress,
}

impl StealthError {
    /// The flat kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StealthError::SanctionedAddress(_) => ErrorKind::SanctionedAddress,
            StealthError::Core(CoreError::InvalidKeyEncoding(_)) => ErrorKind::InvalidKeyEncoding,
            StealthError::Core(CoreError::PointNotOnCurve) => ErrorKind::PointNotOnCurve,
            StealthError::Core(CoreError::RandomnessFailure(_)) => ErrorKind::RandomnessFailure,
            StealthError::Core(CoreError::InvalidAddress(_)) => ErrorKind::InvalidAddress,
        }
    }
}

/// Result type for stealth operations.
pub type Result<T> = std::result::Result<T, StealthError>;

/// Errors loading a [`crate::ChameleonConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the configuration file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration is not valid JSON or has a malformed address.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        let sanctioned = StealthError::SanctionedAddress(Address::from_bytes([1; 20]));
        assert_eq!(sanctioned.kind(), ErrorKind::SanctionedAddress);

        let cases = [
            (CoreError::InvalidKeyEncoding("x".into()), ErrorKind::InvalidKeyEncoding),
            (CoreError::PointNotOnCurve, ErrorKind::PointNotOnCurve),
            (CoreError::RandomnessFailure("x".into()), ErrorKind::RandomnessFailure),
            (CoreError::InvalidAddress("x".into()), ErrorKind::InvalidAddress),
        ];
        for (core, kind) in cases {
            assert_eq!(StealthError::from(core).kind(), kind);
        }
    }

    #[test]
    fn test_sanctioned_message_shows_checksum() {
        let address = Address::from_hex("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap();
        let err = StealthError::SanctionedAddress(address);
        assert_eq!(
            err.to_string(),
            "address is sanctioned: 0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
        );
    }
}
