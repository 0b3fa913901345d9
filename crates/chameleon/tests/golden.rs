//! Golden vectors for cross-implementation verification.
//!
//! Small multiples of G and their account addresses are public knowledge,
//! so any secp256k1 + Keccak-256 implementation must agree with these.

use std::sync::Arc;

use chameleon::core::{Keccak256Hash, Result as CoreResult};
use chameleon::{
    KeyPair, PrivateScalar, PublicPoint, SanctionRegistry, ScalarSource, StealthEngine,
};

struct KnownKey {
    scalar: u8,
    public_x: &'static str,
    public_y: &'static str,
    address: &'static str,
}

const KNOWN_KEYS: &[KnownKey] = &[
    KnownKey {
        scalar: 1,
        public_x: "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
        public_y: "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
        address: "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf",
    },
    KnownKey {
        scalar: 2,
        public_x: "c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5",
        public_y: "1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a",
        address: "0x2b5ad5c4795c026514f8317c7a215e218dccd6cf",
    },
    KnownKey {
        scalar: 3,
        public_x: "f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9",
        public_y: "388f7b0f632de8140fe337e62a37f3566500a99934c2231b6cb9fd7584b8e672",
        address: "0x6813eb9362372eef6200f3b1dbc3f819671cba69",
    },
];

fn small_key(v: u8) -> PrivateScalar {
    let mut bytes = [0u8; 32];
    bytes[31] = v;
    PrivateScalar::from_bytes(&bytes).unwrap()
}

/// Hands out a fixed list of scalars in order.
struct ScriptedEntropy(std::sync::Mutex<Vec<PrivateScalar>>);

impl ScriptedEntropy {
    fn new(mut scalars: Vec<PrivateScalar>) -> Self {
        scalars.reverse();
        Self(std::sync::Mutex::new(scalars))
    }
}

impl ScalarSource for ScriptedEntropy {
    fn random_scalar(&self) -> CoreResult<PrivateScalar> {
        Ok(self.0.lock().unwrap().pop().expect("script exhausted"))
    }
}

#[test]
fn test_known_public_keys() {
    for k in KNOWN_KEYS {
        let public = small_key(k.scalar).public_point();
        assert_eq!(
            public.to_hex(),
            format!("0x04{}{}", k.public_x, k.public_y),
            "public key mismatch for scalar {}",
            k.scalar
        );
    }
}

#[test]
fn test_known_addresses() {
    for k in KNOWN_KEYS {
        let address = small_key(k.scalar).public_point().address();
        assert_eq!(address.to_hex(), k.address, "address mismatch for scalar {}", k.scalar);
    }
}

#[test]
fn test_known_checksum_address() {
    let address = small_key(1).public_point().address();
    assert_eq!(address.to_string(), "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf");
}

#[test]
fn test_scripted_derivation() {
    // Recipient d = 2, ephemeral r = 3. Shared point is 6·G either way.
    let engine = StealthEngine::with_entropy(
        Arc::new(SanctionRegistry::new()),
        ScriptedEntropy::new(vec![small_key(3)]),
    );
    let recipient = KeyPair::from_private(small_key(2));

    let stealth = engine.generate_stealth_address(recipient.public()).unwrap();
    assert_eq!(stealth.ephemeral_private, small_key(3));
    assert_eq!(stealth.ephemeral_public(), small_key(3).public_point());

    let secret = engine.generate_shared_secret(recipient.private(), &stealth.ephemeral_public());
    let expected_secret = Keccak256Hash::hash(&small_key(6).public_point().x_bytes());
    assert_eq!(secret.as_bytes(), expected_secret.as_bytes());

    // P' = (2 + s)·G
    let expected_private = PrivateScalar::new(*small_key(2).as_scalar() + secret.to_scalar()).unwrap();
    assert_eq!(stealth.stealth_public, expected_private.public_point());

    let recovered = engine
        .recover_stealth_private_key(recipient.private(), &stealth.ephemeral_public())
        .unwrap();
    assert_eq!(*recovered.private(), expected_private);
    assert_eq!(*recovered.public(), stealth.stealth_public);
}

#[test]
fn test_scripted_derivation_is_reproducible() {
    let run = || {
        let engine = StealthEngine::with_entropy(
            Arc::new(SanctionRegistry::new()),
            ScriptedEntropy::new(vec![small_key(3)]),
        );
        engine
            .generate_stealth_address(&small_key(2).public_point())
            .unwrap()
            .stealth_public
            .to_hex()
    };
    assert_eq!(run(), run());
}

// =============================================================================
// REJECTION VECTORS
// =============================================================================

#[test]
fn test_reject_wrong_length_point() {
    let g = small_key(1).public_point().to_bytes();
    assert!(PublicPoint::from_bytes(&g[..64]).is_err());

    let mut long = g.to_vec();
    long.push(0);
    assert!(PublicPoint::from_bytes(&long).is_err());
}

#[test]
fn test_reject_hybrid_tags() {
    let mut g = small_key(1).public_point().to_bytes();
    for tag in [0x00, 0x02, 0x03, 0x06, 0x07] {
        g[0] = tag;
        assert!(
            matches!(
                PublicPoint::from_bytes(&g),
                Err(chameleon::CoreError::InvalidKeyEncoding(_))
            ),
            "tag {:#04x} must be rejected",
            tag
        );
    }
}

#[test]
fn test_reject_x_at_field_modulus() {
    // p = 2^256 - 2^32 - 977 is not a valid coordinate.
    let p = "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f";
    let y = KNOWN_KEYS[0].public_y;
    let hex = format!("04{}{}", p, y);
    assert_eq!(
        PublicPoint::from_hex(&hex),
        Err(chameleon::CoreError::PointNotOnCurve)
    );
}
