//! secp256k1 key material with strong types.
//!
//! A [`PrivateScalar`] is always in [1, n). A [`PublicPoint`] is always on
//! the curve and never the identity. Both invariants are enforced at
//! construction, so everything downstream can assume them.

use k256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use k256::elliptic_curve::PrimeField;
use k256::{AffinePoint, EncodedPoint, FieldBytes, ProjectivePoint, Scalar};
use std::fmt;

use crate::address::Address;
use crate::curve;
use crate::encoding::{
    decode_fixed, to_prefixed_hex, SCALAR_LEN, UNCOMPRESSED_POINT_LEN, UNCOMPRESSED_TAG,
};
use crate::error::{CoreError, Result};
use crate::rng::ScalarSource;

/// A non-zero scalar modulo the group order, used as a private key.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PrivateScalar(Scalar);

impl PrivateScalar {
    /// Wrap a scalar, rejecting zero.
    pub fn new(scalar: Scalar) -> Result<Self> {
        if bool::from(scalar.is_zero()) {
            return Err(CoreError::InvalidKeyEncoding("zero scalar".into()));
        }
        Ok(Self(scalar))
    }

    /// Decode a 32-byte big-endian scalar. Values >= n and zero are rejected.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SCALAR_LEN {
            return Err(CoreError::InvalidKeyEncoding(format!(
                "scalar must be {} bytes, got {}",
                SCALAR_LEN,
                bytes.len()
            )));
        }
        let repr = FieldBytes::clone_from_slice(bytes);
        let scalar: Option<Scalar> = Scalar::from_repr(repr).into();
        let scalar = scalar
            .ok_or_else(|| CoreError::InvalidKeyEncoding("scalar out of range".into()))?;
        Self::new(scalar)
    }

    /// Parse from hex, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes: [u8; SCALAR_LEN] = decode_fixed(s)?;
        Self::from_bytes(&bytes)
    }

    /// 32-byte big-endian encoding.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes().into()
    }

    /// `0x`-prefixed lowercase hex, always 64 digits.
    pub fn to_hex(&self) -> String {
        to_prefixed_hex(self.to_bytes())
    }

    /// The underlying curve scalar.
    pub fn as_scalar(&self) -> &Scalar {
        &self.0
    }

    /// `self · G`.
    pub fn public_point(&self) -> PublicPoint {
        // A non-zero scalar never maps to the identity in a prime-order group.
        PublicPoint(curve::base_point_multiply(&self.0).to_affine())
    }
}

impl fmt::Debug for PrivateScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateScalar(<redacted>)")
    }
}

/// A point on secp256k1 other than the identity, used as a public key.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PublicPoint(AffinePoint);

impl PublicPoint {
    /// Convert from projective form, rejecting the identity.
    pub fn from_projective(point: ProjectivePoint) -> Result<Self> {
        if curve::is_identity(&point) {
            return Err(CoreError::PointNotOnCurve);
        }
        Ok(Self(point.to_affine()))
    }

    /// Decode the 65-byte uncompressed SEC1 form `0x04 || X || Y`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != UNCOMPRESSED_POINT_LEN {
            return Err(CoreError::InvalidKeyEncoding(format!(
                "point must be {} bytes, got {}",
                UNCOMPRESSED_POINT_LEN,
                bytes.len()
            )));
        }
        if bytes[0] != UNCOMPRESSED_TAG {
            return Err(CoreError::InvalidKeyEncoding(format!(
                "expected tag 0x04, got {:#04x}",
                bytes[0]
            )));
        }
        let encoded = EncodedPoint::from_bytes(bytes)
            .map_err(|e| CoreError::InvalidKeyEncoding(e.to_string()))?;
        let point: Option<AffinePoint> = AffinePoint::from_encoded_point(&encoded).into();
        point.map(Self).ok_or(CoreError::PointNotOnCurve)
    }

    /// Parse from hex, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes: [u8; UNCOMPRESSED_POINT_LEN] = decode_fixed(s)?;
        Self::from_bytes(&bytes)
    }

    /// 65-byte uncompressed SEC1 encoding.
    pub fn to_bytes(&self) -> [u8; 65] {
        let encoded = self.0.to_encoded_point(false);
        let mut out = [0u8; UNCOMPRESSED_POINT_LEN];
        out.copy_from_slice(encoded.as_bytes());
        out
    }

    /// `0x`-prefixed lowercase hex of the uncompressed encoding.
    pub fn to_hex(&self) -> String {
        to_prefixed_hex(self.to_bytes())
    }

    /// Big-endian X coordinate, zero-padded to 32 bytes.
    pub fn x_bytes(&self) -> [u8; 32] {
        let mut x = [0u8; 32];
        x.copy_from_slice(&self.to_bytes()[1..33]);
        x
    }

    /// The sanction-lookup identifier for this key.
    pub fn address(&self) -> Address {
        Address::from_public_point(self)
    }

    /// The underlying affine point.
    pub fn as_affine(&self) -> &AffinePoint {
        &self.0
    }

    /// Projective form, for arithmetic.
    pub fn to_projective(&self) -> ProjectivePoint {
        ProjectivePoint::from(self.0)
    }
}

impl fmt::Debug for PublicPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicPoint({}...)", &self.to_hex()[..18])
    }
}

/// A private scalar together with its public point.
///
/// The public half is always computed from the private half; there is no
/// constructor that accepts both.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    private: PrivateScalar,
    public: PublicPoint,
}

impl KeyPair {
    /// Build a keypair from its private scalar.
    pub fn from_private(private: PrivateScalar) -> Self {
        let public = private.public_point();
        Self { private, public }
    }

    /// Draw a fresh keypair from a scalar source.
    pub fn generate<S: ScalarSource + ?Sized>(source: &S) -> Result<Self> {
        Ok(Self::from_private(source.random_scalar()?))
    }

    /// The private scalar.
    pub fn private(&self) -> &PrivateScalar {
        &self.private
    }

    /// The public point.
    pub fn public(&self) -> &PublicPoint {
        &self.public
    }

    /// Address of the public point.
    pub fn address(&self) -> Address {
        self.public.address()
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyPair({:?})", self.public)
    }
}
