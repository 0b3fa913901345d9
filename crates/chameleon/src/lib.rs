//! # Chameleon
//!
//! Sanction-gated stealth addresses over secp256k1.
//!
//! ## Overview
//!
//! A payer derives, from a recipient's long-term public key, a one-time
//! stealth public key. Only the recipient can turn it into a private key,
//! and nothing public links the two. Derivation is refused for recipients
//! whose address is on the sanction list.
//!
//! ## Key Concepts
//!
//! - **Stealth address**: `P' = P + H(X(r·P))·G`, a fresh point per payment
//! - **Ephemeral key**: `r`, drawn per payment; `R = r·G` goes to the recipient
//! - **Recovery**: `d' = d + H(X(d·R)) mod n`, with `d'·G = P'`
//! - **Sanction list**: addresses for which no stealth key is ever produced
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use chameleon::{StealthEngine, SanctionRegistry};
//!
//! let engine = StealthEngine::new(Arc::new(SanctionRegistry::new()));
//!
//! let recipient = engine.generate_account().unwrap();
//! let stealth = engine.generate_stealth_address(recipient.public()).unwrap();
//!
//! let recovered = engine
//!     .recover_stealth_private_key(recipient.private(), &stealth.ephemeral_public())
//!     .unwrap();
//! assert_eq!(*recovered.public(), stealth.stealth_public);
//! ```
//!
//! Transport shells that speak hex strings use [`StealthService`] instead.
//!
//! ## Re-exports
//!
//! - `chameleon::core` - Key material, curve, hashing, randomness
//! - `chameleon::sanctions` - The sanction list trait and registry

pub mod config;
pub mod engine;
pub mod error;
pub mod service;

// Re-export component crates
pub use chameleon_core as core;
pub use chameleon_sanctions as sanctions;

// Re-export main types for convenience
pub use config::ChameleonConfig;
pub use engine::{StealthAddress, StealthEngine};
pub use error::{ConfigError, ErrorKind, Result, StealthError};
pub use service::{AccountHex, RecoveredKeyHex, StealthAddressHex, StealthService};

// Re-export commonly used component types
pub use chameleon_core::{
    Address, CoreError, KeyPair, OsEntropy, PrivateScalar, PublicPoint, ScalarSource,
    SeededEntropy, SharedSecret,
};
pub use chameleon_sanctions::{SanctionList, SanctionListExt, SanctionRegistry};
