//! Configuration for wiring a service.

use std::path::Path;

use chameleon_core::Address;
use chameleon_sanctions::SanctionRegistry;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Service configuration.
///
/// ```json
/// { "sanctioned_addresses": ["0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChameleonConfig {
    /// Addresses sanctioned at startup.
    pub sanctioned_addresses: Vec<Address>,
}

impl ChameleonConfig {
    /// Parse from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Build a registry seeded with the configured addresses.
    pub fn build_registry(&self) -> SanctionRegistry {
        SanctionRegistry::from_seed(self.sanctioned_addresses.iter().copied())
    }
}
