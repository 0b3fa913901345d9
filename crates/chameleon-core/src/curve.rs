//! secp256k1 primitive provider.
//!
//! Every decode, range check and derivation in the workspace goes through
//! this module, so there is exactly one curve in play.

use k256::elliptic_curve::ops::Reduce;
use k256::elliptic_curve::sec1::FromEncodedPoint;
use k256::elliptic_curve::{Curve, Group};
use k256::{AffinePoint, EncodedPoint, FieldBytes, ProjectivePoint, Scalar, Secp256k1, U256};

/// Group order n of secp256k1, big-endian.
pub const GROUP_ORDER_BE: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
    0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36, 0x41, 0x41,
];

/// The group order n.
pub fn group_order() -> U256 {
    Secp256k1::ORDER
}

/// `scalar · point`.
pub fn scalar_multiply(scalar: &Scalar, point: &AffinePoint) -> ProjectivePoint {
    ProjectivePoint::from(*point) * scalar
}

/// `a + b`.
pub fn add_points(a: &ProjectivePoint, b: &ProjectivePoint) -> ProjectivePoint {
    *a + b
}

/// `scalar · G`.
pub fn base_point_multiply(scalar: &Scalar) -> ProjectivePoint {
    ProjectivePoint::GENERATOR * scalar
}

/// Whether (x, y) satisfies the curve equation.
///
/// The identity has no affine coordinates, so it is never on the curve here.
pub fn is_on_curve(x: &[u8; 32], y: &[u8; 32]) -> bool {
    let encoded = EncodedPoint::from_affine_coordinates(
        &FieldBytes::from(*x),
        &FieldBytes::from(*y),
        false,
    );
    AffinePoint::from_encoded_point(&encoded).is_some().into()
}

/// Whether a projective point is the point at infinity.
pub fn is_identity(point: &ProjectivePoint) -> bool {
    point.is_identity().into()
}

/// Interpret 32 big-endian bytes as an integer and reduce it mod n.
pub fn reduce_mod_order(bytes: &[u8; 32]) -> Scalar {
    <Scalar as Reduce<U256>>::reduce_bytes(&FieldBytes::from(*bytes))
}
