//! ECDH shared secrets.
//!
//! ```text
//! shared_point = private · other_public
//! secret       = Keccak256(X(shared_point))      32 bytes, pre-reduction
//! offset       = secret mod n
//! ```
//!
//! Both parties reach the same point, `a·(b·G) = b·(a·G)`, so the secret is
//! byte-identical whichever side computes it.

use k256::Scalar;
use std::fmt;

use crate::crypto::Keccak256Hash;
use crate::curve;
use crate::keys::{PrivateScalar, PublicPoint};

/// The Keccak-256 digest of an ECDH shared point's X coordinate.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SharedSecret([u8; 32]);

impl SharedSecret {
    /// Create from raw digest bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw digest bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// The digest reduced modulo the group order.
    pub fn to_scalar(&self) -> Scalar {
        curve::reduce_mod_order(&self.0)
    }

    /// Lowercase hex of the digest.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret(<redacted>)")
    }
}

/// Compute the shared secret between `private` and `other_public`.
pub fn shared_secret(private: &PrivateScalar, other_public: &PublicPoint) -> SharedSecret {
    let shared = curve::scalar_multiply(private.as_scalar(), other_public.as_affine());
    // Non-zero scalar times a non-identity point of a prime-order group.
    let shared = PublicPoint::from_projective(shared)
        .map(|p| p.x_bytes())
        .unwrap_or([0u8; 32]);
    SharedSecret(*Keccak256Hash::hash(&shared).as_bytes())
}
