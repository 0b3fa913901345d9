//! Error types for Chameleon Core.

use thiserror::Error;

/// Errors raised while decoding or deriving key material.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Input is not a 65-byte uncompressed point or a 32-byte scalar.
    #[error("invalid key encoding: {0}")]
    InvalidKeyEncoding(String),

    /// Coordinates are off the curve, or the point is the identity.
    #[error("point is not on the curve")]
    PointNotOnCurve,

    /// The secure random source could not produce a scalar.
    #[error("randomness failure: {0}")]
    RandomnessFailure(String),

    /// Input is not a 20-byte hex address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
