//! Proptest generators for property-based testing.

use std::sync::Arc;

use proptest::prelude::*;

use chameleon::StealthEngine;
use chameleon_core::{Address, KeyPair, PrivateScalar, PublicPoint, SeededEntropy};
use chameleon_sanctions::{SanctionListExt, SanctionRegistry};

/// Generate a private scalar in [1, n-1].
///
/// Out-of-range byte strings are rejected; they are rare enough that the
/// filter almost never fires.
pub fn private_scalar() -> impl Strategy<Value = PrivateScalar> {
    any::<[u8; 32]>().prop_filter_map("scalar out of range", |bytes| {
        PrivateScalar::from_bytes(&bytes).ok()
    })
}

/// Generate a keypair.
pub fn keypair() -> impl Strategy<Value = KeyPair> {
    private_scalar().prop_map(KeyPair::from_private)
}

/// Generate a valid public point.
pub fn public_point() -> impl Strategy<Value = PublicPoint> {
    private_scalar().prop_map(|s| s.public_point())
}

/// Generate an arbitrary address. Most have no known preimage.
pub fn address() -> impl Strategy<Value = Address> {
    any::<[u8; 20]>().prop_map(Address::from_bytes)
}

/// Generate an address as hex in mixed formatting: with or without the
/// `0x` prefix, lowercase, uppercase, or checksummed.
pub fn address_hex() -> impl Strategy<Value = (Address, String)> {
    (address(), 0u8..6).prop_map(|(address, style)| {
        let lower = address.to_hex();
        let text = match style {
            0 => lower,
            1 => lower[2..].to_string(),
            2 => format!("0x{}", lower[2..].to_uppercase()),
            3 => lower[2..].to_uppercase(),
            4 => address.to_checksum(),
            _ => format!("0X{}", &lower[2..]),
        };
        (address, text)
    })
}

/// Parameters for one derivation against a pre-populated registry.
#[derive(Debug, Clone)]
pub struct StealthParams {
    pub recipient: KeyPair,
    pub entropy_seed: [u8; 32],
    pub sanctioned: Vec<Address>,
}

impl Arbitrary for StealthParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            keypair(),
            any::<[u8; 32]>(),
            prop::collection::vec(address(), 0..16),
        )
            .prop_map(|(recipient, entropy_seed, sanctioned)| StealthParams {
                recipient,
                entropy_seed,
                sanctioned,
            })
            .boxed()
    }
}

/// Build the engine described by `params`.
pub fn engine_from_params(params: &StealthParams) -> StealthEngine<SanctionRegistry, SeededEntropy> {
    let registry = SanctionRegistry::new();
    registry.add_all(params.sanctioned.iter().copied());
    StealthEngine::with_entropy(
        Arc::new(registry),
        SeededEntropy::from_seed(params.entropy_seed),
    )
}
