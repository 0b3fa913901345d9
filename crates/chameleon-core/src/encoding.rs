//! Hex boundary for key material.
//!
//! Everything crossing the boundary is lowercase hex. Inputs may carry a
//! `0x` prefix in either case.

use crate::error::{CoreError, Result};

/// Length of an uncompressed SEC1 point: tag + X + Y.
pub const UNCOMPRESSED_POINT_LEN: usize = 65;

/// Leading tag byte of an uncompressed SEC1 point.
pub const UNCOMPRESSED_TAG: u8 = 0x04;

/// Length of an encoded scalar.
pub const SCALAR_LEN: usize = 32;

/// Strip an optional `0x` / `0X` prefix.
pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Decode hex with an optional prefix into exactly `N` bytes.
///
/// Failures are reported as [`CoreError::InvalidKeyEncoding`]; address
/// parsing remaps them.
pub fn decode_fixed<const N: usize>(s: &str) -> Result<[u8; N]> {
    let bytes = hex::decode(strip_hex_prefix(s))
        .map_err(|e| CoreError::InvalidKeyEncoding(e.to_string()))?;
    bytes.as_slice().try_into().map_err(|_| {
        CoreError::InvalidKeyEncoding(format!("expected {} bytes, got {}", N, bytes.len()))
    })
}

/// Encode bytes as `0x`-prefixed lowercase hex.
pub fn to_prefixed_hex(bytes: impl AsRef<[u8]>) -> String {
    format!("0x{}", hex::encode(bytes))
}
