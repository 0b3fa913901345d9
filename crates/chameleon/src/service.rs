//! Hex-string interface for transport shells.
//!
//! Every input is hex with an optional `0x` prefix (either case); every
//! output is `0x`-prefixed lowercase hex, except addresses, which use the
//! EIP-55 checksum form. Response types serialize to the JSON field names
//! HTTP clients of this service already expect.

use std::sync::Arc;

use chameleon_core::{Address, KeyPair, OsEntropy, PrivateScalar, PublicPoint, ScalarSource};
use chameleon_sanctions::{SanctionList, SanctionRegistry};
use serde::{Deserialize, Serialize};

use crate::config::ChameleonConfig;
use crate::engine::StealthEngine;
use crate::error::Result;

/// Result of deriving a stealth address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StealthAddressHex {
    #[serde(rename = "stealth_pub_key")]
    pub stealth_public_key: String,
    #[serde(rename = "ephemeral_priv_key")]
    pub ephemeral_private_key: String,
    #[serde(rename = "ephemeral_pub_key")]
    pub ephemeral_public_key: String,
}

/// Result of recovering a stealth keypair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveredKeyHex {
    #[serde(rename = "recovered_priv_key_hex")]
    pub private_key: String,
    #[serde(rename = "recovered_pub_key_hex")]
    pub public_key: String,
    #[serde(rename = "recovered_address")]
    pub address: String,
}

/// A freshly generated account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountHex {
    pub private_key: String,
    pub public_key: String,
    pub address: String,
}

impl From<&KeyPair> for AccountHex {
    fn from(keypair: &KeyPair) -> Self {
        Self {
            private_key: keypair.private().to_hex(),
            public_key: keypair.public().to_hex(),
            address: keypair.address().to_checksum(),
        }
    }
}

/// The engine behind a string-in, string-out facade.
pub struct StealthService<L: SanctionList = SanctionRegistry, E: ScalarSource = OsEntropy> {
    engine: StealthEngine<L, E>,
}

impl StealthService<SanctionRegistry, OsEntropy> {
    /// Wire a service from configuration: seeded registry, OS randomness.
    pub fn from_config(config: &ChameleonConfig) -> Self {
        let registry = Arc::new(config.build_registry());
        Self::new(StealthEngine::new(registry))
    }
}

impl<L: SanctionList, E: ScalarSource> StealthService<L, E> {
    /// Wrap an engine.
    pub fn new(engine: StealthEngine<L, E>) -> Self {
        Self { engine }
    }

    /// Get the engine.
    pub fn engine(&self) -> &StealthEngine<L, E> {
        &self.engine
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Sanctions
    // ─────────────────────────────────────────────────────────────────────────

    /// Whether `address_hex` is sanctioned.
    pub fn is_sanctioned(&self, address_hex: &str) -> Result<bool> {
        let address = Address::from_hex(address_hex)?;
        Ok(self.engine.sanctions().is_sanctioned(&address))
    }

    /// Sanction `address_hex`.
    pub fn add_sanctioned(&self, address_hex: &str) -> Result<()> {
        let address = Address::from_hex(address_hex)?;
        self.engine.sanctions().add(address);
        Ok(())
    }

    /// Lift the sanction on `address_hex`.
    pub fn remove_sanctioned(&self, address_hex: &str) -> Result<()> {
        let address = Address::from_hex(address_hex)?;
        self.engine.sanctions().remove(&address);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Keys
    // ─────────────────────────────────────────────────────────────────────────

    /// Derive a stealth address for an uncompressed recipient public key.
    pub fn generate_stealth_address(&self, recipient_public_hex: &str) -> Result<StealthAddressHex> {
        let recipient = PublicPoint::from_hex(recipient_public_hex)?;
        let stealth = self.engine.generate_stealth_address(&recipient)?;
        Ok(StealthAddressHex {
            stealth_public_key: stealth.stealth_public.to_hex(),
            ephemeral_private_key: stealth.ephemeral_private.to_hex(),
            ephemeral_public_key: stealth.ephemeral_public().to_hex(),
        })
    }

    /// Recover the stealth keypair for a recipient.
    pub fn recover_stealth_private_key(
        &self,
        recipient_private_hex: &str,
        ephemeral_public_hex: &str,
    ) -> Result<RecoveredKeyHex> {
        let recipient = PrivateScalar::from_hex(recipient_private_hex)?;
        let ephemeral = PublicPoint::from_hex(ephemeral_public_hex)?;
        let keypair = self.engine.recover_stealth_private_key(&recipient, &ephemeral)?;
        Ok(RecoveredKeyHex {
            private_key: keypair.private().to_hex(),
            public_key: keypair.public().to_hex(),
            address: keypair.address().to_checksum(),
        })
    }

    /// Generate a fresh account.
    pub fn generate_account(&self) -> Result<AccountHex> {
        let keypair = self.engine.generate_account()?;
        Ok(AccountHex::from(&keypair))
    }

    /// Whether two encoded public keys denote the same point.
    pub fn verify_stealth_keys(&self, generated_hex: &str, recovered_hex: &str) -> Result<bool> {
        let generated = PublicPoint::from_hex(generated_hex)?;
        let recovered = PublicPoint::from_hex(recovered_hex)?;
        Ok(generated == recovered)
    }
}
