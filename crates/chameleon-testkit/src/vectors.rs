//! Golden test vectors for deterministic verification.
//!
//! Each vector fixes the recipient private scalar and the ephemeral scalar
//! the sender draws; everything else follows. The expected values pin the
//! hash-then-add construction with Keccak-256 over the 32-byte big-endian
//! x-coordinate of the shared point.

use std::sync::Arc;

use serde::Serialize;

use chameleon::{StealthAddress, StealthEngine};
use chameleon_core::{CoreError, KeyPair, PrivateScalar, ScalarSource};
use chameleon_sanctions::SanctionRegistry;

/// A golden test vector.
#[derive(Debug, Clone, Serialize)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Recipient private scalar (hex).
    pub recipient_private: &'static str,
    /// Ephemeral private scalar the sender draws (hex).
    pub ephemeral_private: &'static str,
    /// Expected Keccak-256 of the shared x-coordinate (hex, no prefix).
    pub expected_shared_secret: &'static str,
    /// Expected stealth private scalar (hex).
    pub expected_stealth_private: &'static str,
    /// Expected uncompressed stealth public point (hex).
    pub expected_stealth_public: &'static str,
    /// Expected EIP-55 stealth address.
    pub expected_address: &'static str,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "small scalars d=2 r=3",
            recipient_private: "0x0000000000000000000000000000000000000000000000000000000000000002",
            ephemeral_private: "0x0000000000000000000000000000000000000000000000000000000000000003",
            expected_shared_secret: "e127983aecf7ce0550ce1f2bead20ded26051484f84ce98e45fc35197794ef35",
            expected_stealth_private: "0xe127983aecf7ce0550ce1f2bead20ded26051484f84ce98e45fc35197794ef37",
            expected_stealth_public: "0x0470a0f9512f7c589b9191706cd8a95e0f3bb85a412d78b15f5fc401deb2fc44a179267e8cb7d38d4db12d85821ee3eaf0bc0fc837b10c89d518c61cbc52a8c3ce",
            expected_address: "0x7C5022C4FE75b4c511b7702546DC458897E082b0",
        },
        GoldenVector {
            name: "stealth scalar wraps the group order",
            recipient_private: "0xc85ef7d79691fe79573b1a7064c19c1a9819ebdbd1faaab1a8ec92344438aaf4",
            ephemeral_private: "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318",
            expected_shared_secret: "6f1e4f8b7458e5f5d409b73fc389630004e2c7b547aaa9f22250db94fc7534ad",
            expected_stealth_private: "0x377d47630aeae46f2b44d1b0284aff1be24dd6aa6a5cb4680b6b0f3c70779e60",
            expected_stealth_public: "0x040bfa097bcece8cbf6c3b008069b7215de274275e5012933cc7be30b7d07df304600bdb1cc16e1c8c450e478c5b957b95786f02bbf4072f4016896984753e79c9",
            expected_address: "0x7d3Aa9Be22E87B972C2290286A7e3137f76D854F",
        },
        GoldenVector {
            name: "recipient n-1 ephemeral 1",
            recipient_private: "0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364140",
            ephemeral_private: "0x0000000000000000000000000000000000000000000000000000000000000001",
            expected_shared_secret: "bd48405ed3251dbb9f783c5a51cbf46016252921b268ebd47d0a0389f7b93cc0",
            expected_stealth_private: "0xbd48405ed3251dbb9f783c5a51cbf46016252921b268ebd47d0a0389f7b93cbf",
            expected_stealth_public: "0x042d93166658ad1f41b19bd4dc30fdf7147d95552427d0cc0e52f50170a174461fdef33c25bbd4d5437c11deade682c4c112cb37883772f41ad887d144c61371e3",
            expected_address: "0xFf0fbF6C008B66786245aFC441abd95261a186Db",
        },
    ]
}

/// Yields the same scalar on every draw.
#[derive(Debug, Clone, Copy)]
pub struct FixedEntropy(pub PrivateScalar);

impl ScalarSource for FixedEntropy {
    fn random_scalar(&self) -> chameleon_core::Result<PrivateScalar> {
        Ok(self.0)
    }
}

/// The recipient keypair of a vector.
pub fn recipient_from_vector(vector: &GoldenVector) -> Result<KeyPair, CoreError> {
    Ok(KeyPair::from_private(PrivateScalar::from_hex(
        vector.recipient_private,
    )?))
}

/// Derive the stealth address a sender produces for a vector.
pub fn derive_from_vector(vector: &GoldenVector) -> chameleon::Result<StealthAddress> {
    let recipient = recipient_from_vector(vector)?;
    let ephemeral = PrivateScalar::from_hex(vector.ephemeral_private)?;
    let engine = StealthEngine::with_entropy(
        Arc::new(SanctionRegistry::new()),
        FixedEntropy(ephemeral),
    );
    engine.generate_stealth_address(recipient.public())
}

/// Verify all golden vectors.
///
/// Returns (name, matches, derived stealth public hex) per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| match derive_from_vector(v) {
            Ok(stealth) => {
                let hex = stealth.stealth_public.to_hex();
                let matches = hex == v.expected_stealth_public
                    && stealth.stealth_public.address().to_checksum() == v.expected_address;
                (v.name.to_string(), matches, hex)
            }
            Err(e) => (v.name.to_string(), false, e.to_string()),
        })
        .collect()
}

/// All vectors as pretty JSON, for feeding other implementations.
pub fn vectors_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&all_vectors())
}
