//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::sync::Arc;

use chameleon::{Result, StealthAddress, StealthEngine};
use chameleon_core::{Keccak256Hash, KeyPair, SeededEntropy};
use chameleon_sanctions::{SanctionList, SanctionRegistry};

/// A recipient keypair plus an engine that sends to it.
pub struct TestFixture {
    pub recipient: KeyPair,
    pub registry: Arc<SanctionRegistry>,
    pub engine: StealthEngine<SanctionRegistry, SeededEntropy>,
}

impl TestFixture {
    /// Create a new test fixture from a random seed.
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Create with a deterministic recipient and engine from seed.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        Self::with_registry(seed, Arc::new(SanctionRegistry::new()))
    }

    /// Create with a deterministic recipient, sharing `registry`.
    pub fn with_registry(seed: [u8; 32], registry: Arc<SanctionRegistry>) -> Self {
        // The engine draws ephemerals from a stream separate from the one
        // that produced the recipient key.
        let engine_seed = *Keccak256Hash::hash(&seed).as_bytes();
        Self {
            recipient: keypair_from_seed(seed),
            engine: StealthEngine::with_entropy(
                Arc::clone(&registry),
                SeededEntropy::from_seed(engine_seed),
            ),
            registry,
        }
    }

    /// Derive a stealth address for this fixture's recipient.
    pub fn send(&self) -> Result<StealthAddress> {
        self.engine.generate_stealth_address(self.recipient.public())
    }

    /// Recover the stealth keypair as this fixture's recipient.
    pub fn receive(&self, stealth: &StealthAddress) -> Result<KeyPair> {
        self.engine
            .recover_stealth_private_key(self.recipient.private(), &stealth.ephemeral_public())
    }

    /// Sanction this fixture's recipient.
    pub fn sanction_recipient(&self) {
        self.registry.add(self.recipient.address());
    }

    /// Lift the sanction on this fixture's recipient.
    pub fn clear_recipient(&self) {
        self.registry.remove(&self.recipient.address());
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic keypair from a seed.
pub fn keypair_from_seed(seed: [u8; 32]) -> KeyPair {
    KeyPair::generate(&SeededEntropy::from_seed(seed))
        .expect("seeded StdRng never exhausts rejection sampling")
}

/// Create fixtures for multi-party tests. All parties share one registry.
pub fn multi_party_fixtures(count: usize) -> Vec<TestFixture> {
    let registry = Arc::new(SanctionRegistry::new());
    (0..count)
        .map(|i| {
            let mut seed = [0u8; 32];
            seed[..8].copy_from_slice(&(i as u64).to_le_bytes());
            TestFixture::with_registry(seed, Arc::clone(&registry))
        })
        .collect()
}
