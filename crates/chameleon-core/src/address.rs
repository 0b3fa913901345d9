//! Account addresses used for sanction lookups.
//!
//! An address is the last 20 bytes of `Keccak256(X || Y)` over the
//! uncompressed public point. It is never used as derivation input.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::crypto::Keccak256Hash;
use crate::encoding::strip_hex_prefix;
use crate::error::CoreError;
use crate::keys::PublicPoint;

/// Length of an address in bytes.
pub const ADDRESS_LEN: usize = 20;

/// A 20-byte account address.
///
/// Equality is on the bytes, so `0xABC...` and `0xabc...` are the same
/// address. `Display` renders the EIP-55 checksummed form.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(pub [u8; ADDRESS_LEN]);

impl Address {
    /// Derive the address of a public point.
    pub fn from_public_point(point: &PublicPoint) -> Self {
        let encoded = point.to_bytes();
        let digest = Keccak256Hash::hash(&encoded[1..]);
        let mut out = [0u8; ADDRESS_LEN];
        out.copy_from_slice(&digest.as_bytes()[12..]);
        Self(out)
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Parse from hex. The `0x` prefix is optional and case is ignored.
    pub fn from_hex(s: &str) -> Result<Self, CoreError> {
        let bytes = hex::decode(strip_hex_prefix(s))
            .map_err(|e| CoreError::InvalidAddress(format!("{}: {}", s, e)))?;
        let arr: [u8; ADDRESS_LEN] = bytes.as_slice().try_into().map_err(|_| {
            CoreError::InvalidAddress(format!(
                "{}: expected {} bytes, got {}",
                s,
                ADDRESS_LEN,
                bytes.len()
            ))
        })?;
        Ok(Self(arr))
    }

    /// `0x`-prefixed lowercase hex.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// `0x`-prefixed EIP-55 mixed-case checksum form.
    pub fn to_checksum(&self) -> String {
        let lower = hex::encode(self.0);
        let digest = Keccak256Hash::hash(lower.as_bytes());
        let hash = digest.as_bytes();

        let mut out = String::with_capacity(2 + lower.len());
        out.push_str("0x");
        for (i, c) in lower.chars().enumerate() {
            let byte = hash[i / 2];
            let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
            if nibble >= 8 {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
        }
        out
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_checksum())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_checksum())
    }
}

impl FromStr for Address {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Address {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.to_checksum()
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::PrivateScalar;

    fn key(v: u8) -> PrivateScalar {
        let mut b = [0u8; 32];
        b[31] = v;
        PrivateScalar::from_bytes(&b).unwrap()
    }

    #[test]
    fn test_address_of_private_key_one() {
        let address = key(1).public_point().address();
        assert_eq!(address.to_hex(), "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf");
    }

    #[test]
    fn test_eip55_vectors() {
        for expected in [
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        ] {
            let parsed = Address::from_hex(&expected.to_lowercase()).unwrap();
            assert_eq!(parsed.to_checksum(), expected);
            assert_eq!(parsed.to_string(), expected);
        }
    }

    #[test]
    fn test_parse_ignores_case_and_prefix() {
        let a = Address::from_hex("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").unwrap();
        let b = Address::from_hex("5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED").unwrap();
        let c: Address = "0X5aaeb6053f3e94c9b9a09f33669435e7ef1beaed".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(Address::from_hex("0xAbc123"), Err(CoreError::InvalidAddress(_))));
        assert!(matches!(Address::from_hex("0xzz"), Err(CoreError::InvalidAddress(_))));
        assert!(matches!(Address::from_hex(""), Err(CoreError::InvalidAddress(_))));
    }

    #[test]
    fn test_distinct_keys_distinct_addresses() {
        assert_ne!(key(1).public_point().address(), key(2).public_point().address());
    }

    #[test]
    fn test_serde_uses_checksum_string() {
        let address = Address::from_hex("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, "\"0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed\"");

        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);

        assert!(serde_json::from_str::<Address>("\"0x1234\"").is_err());
    }
}
