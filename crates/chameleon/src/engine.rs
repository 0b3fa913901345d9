//! The stealth engine: sanction-gated derivation and recovery.
//!
//! ```text
//! payer                                   recipient (d, P = d·G)
//! r  <- random [1, n-1]
//! s   = Keccak256(X(r·P)) mod n           s = Keccak256(X(d·R)) mod n
//! P'  = P + s·G                            d' = d + s mod n,  P' = d'·G
//! publish R = r·G
//! ```
//!
//! The engine holds no per-request state. The only shared resource it
//! touches is the sanction list, and only for a read.

use std::fmt;
use std::sync::Arc;

use chameleon_core::{
    curve, shared_secret, KeyPair, OsEntropy, PrivateScalar, PublicPoint, ScalarSource,
    SharedSecret,
};
use chameleon_sanctions::SanctionList;

use crate::error::{Result, StealthError};

/// Output of [`StealthEngine::generate_stealth_address`].
///
/// The payer pays to `stealth_public` and hands the recipient
/// [`ephemeral_public`](Self::ephemeral_public).
#[derive(Clone, PartialEq, Eq)]
pub struct StealthAddress {
    /// The one-time public key.
    pub stealth_public: PublicPoint,
    /// The ephemeral private scalar. Fresh for every call.
    pub ephemeral_private: PrivateScalar,
}

impl StealthAddress {
    /// The ephemeral public point the recipient needs for recovery.
    pub fn ephemeral_public(&self) -> PublicPoint {
        self.ephemeral_private.public_point()
    }
}

impl fmt::Debug for StealthAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StealthAddress")
            .field("stealth_public", &self.stealth_public)
            .field("ephemeral_public", &self.ephemeral_public())
            .finish()
    }
}

/// The stealth address engine.
///
/// Generic over the sanction list so a persistent store can be swapped in,
/// and over the scalar source so tests can be reproducible.
pub struct StealthEngine<L: SanctionList, E: ScalarSource = OsEntropy> {
    /// The sanction list consulted before every derivation.
    sanctions: Arc<L>,
    /// Source of ephemeral and account scalars.
    entropy: E,
}

impl<L: SanctionList> StealthEngine<L, OsEntropy> {
    /// Create an engine backed by operating-system randomness.
    pub fn new(sanctions: Arc<L>) -> Self {
        Self::with_entropy(sanctions, OsEntropy)
    }
}

impl<L: SanctionList, E: ScalarSource> StealthEngine<L, E> {
    /// Create an engine with an explicit scalar source.
    pub fn with_entropy(sanctions: Arc<L>, entropy: E) -> Self {
        Self { sanctions, entropy }
    }

    /// Get the sanction list.
    pub fn sanctions(&self) -> &Arc<L> {
        &self.sanctions
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Derivation
    // ─────────────────────────────────────────────────────────────────────────

    /// Derive a one-time stealth public key for `recipient`.
    ///
    /// Fails with [`StealthError::SanctionedAddress`] before drawing any
    /// randomness if the recipient's address is sanctioned.
    pub fn generate_stealth_address(&self, recipient: &PublicPoint) -> Result<StealthAddress> {
        let address = recipient.address();
        if self.sanctions.is_sanctioned(&address) {
            tracing::warn!(%address, "refusing stealth derivation for sanctioned address");
            return Err(StealthError::SanctionedAddress(address));
        }

        let ephemeral_private = self.entropy.random_scalar()?;
        let offset = self.generate_shared_secret(&ephemeral_private, recipient).to_scalar();

        let stealth = curve::add_points(
            &recipient.to_projective(),
            &curve::base_point_multiply(&offset),
        );
        let stealth_public = PublicPoint::from_projective(stealth)?;

        tracing::debug!(stealth = %stealth_public.address(), "stealth address derived");
        Ok(StealthAddress {
            stealth_public,
            ephemeral_private,
        })
    }

    /// ECDH shared secret between `private` and `other_public`.
    ///
    /// Returns the digest before reduction; the same bytes come out whether
    /// called as (ephemeral, recipient) or (recipient, ephemeral).
    pub fn generate_shared_secret(
        &self,
        private: &PrivateScalar,
        other_public: &PublicPoint,
    ) -> SharedSecret {
        shared_secret(private, other_public)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Recovery
    // ─────────────────────────────────────────────────────────────────────────

    /// Reconstruct the stealth keypair from the recipient's private scalar
    /// and the published ephemeral public point.
    ///
    /// The returned public point is recomputed from the stealth private
    /// scalar, never copied from an input.
    pub fn recover_stealth_private_key(
        &self,
        recipient_private: &PrivateScalar,
        ephemeral_public: &PublicPoint,
    ) -> Result<KeyPair> {
        let offset = self
            .generate_shared_secret(recipient_private, ephemeral_public)
            .to_scalar();
        let stealth_private = PrivateScalar::new(*recipient_private.as_scalar() + offset)?;
        let keypair = KeyPair::from_private(stealth_private);

        tracing::debug!(stealth = %keypair.address(), "stealth key recovered");
        Ok(keypair)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accounts
    // ─────────────────────────────────────────────────────────────────────────

    /// Generate a fresh long-term keypair. Not sanction-gated.
    pub fn generate_account(&self) -> Result<KeyPair> {
        let keypair = KeyPair::generate(&self.entropy)?;
        tracing::debug!(address = %keypair.address(), "account generated");
        Ok(keypair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chameleon_core::{CoreError, SeededEntropy};
    use chameleon_sanctions::SanctionRegistry;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts draws so tests can assert none happened.
    struct CountingEntropy {
        inner: SeededEntropy,
        draws: AtomicUsize,
    }

    impl ScalarSource for CountingEntropy {
        fn random_scalar(&self) -> chameleon_core::Result<PrivateScalar> {
            self.draws.fetch_add(1, Ordering::SeqCst);
            self.inner.random_scalar()
        }
    }

    struct FailingEntropy;

    impl ScalarSource for FailingEntropy {
        fn random_scalar(&self) -> chameleon_core::Result<PrivateScalar> {
            Err(CoreError::RandomnessFailure("source offline".into()))
        }
    }

    fn engine(seed: u8) -> StealthEngine<SanctionRegistry, SeededEntropy> {
        StealthEngine::with_entropy(
            Arc::new(SanctionRegistry::new()),
            SeededEntropy::from_seed([seed; 32]),
        )
    }

    #[test]
    fn test_roundtrip() {
        let engine = engine(1);
        let recipient = engine.generate_account().unwrap();

        let stealth = engine.generate_stealth_address(recipient.public()).unwrap();
        let recovered = engine
            .recover_stealth_private_key(recipient.private(), &stealth.ephemeral_public())
            .unwrap();

        assert_eq!(*recovered.public(), stealth.stealth_public);
        assert_eq!(recovered.private().public_point(), stealth.stealth_public);
    }

    #[test]
    fn test_stealth_differs_from_recipient_and_ephemeral() {
        let engine = engine(2);
        let recipient = engine.generate_account().unwrap();
        let stealth = engine.generate_stealth_address(recipient.public()).unwrap();

        assert_ne!(stealth.stealth_public, *recipient.public());
        assert_ne!(stealth.stealth_public, stealth.ephemeral_public());
    }

    #[test]
    fn test_not_plain_point_addition() {
        let engine = engine(3);
        let recipient = engine.generate_account().unwrap();
        let stealth = engine.generate_stealth_address(recipient.public()).unwrap();

        let naive = PublicPoint::from_projective(
            recipient.public().to_projective() + stealth.ephemeral_public().to_projective(),
        )
        .unwrap();
        assert_ne!(stealth.stealth_public, naive);
    }

    #[test]
    fn test_each_call_uses_fresh_ephemeral() {
        let engine = engine(4);
        let recipient = engine.generate_account().unwrap();

        let a = engine.generate_stealth_address(recipient.public()).unwrap();
        let b = engine.generate_stealth_address(recipient.public()).unwrap();

        assert_ne!(a.ephemeral_private, b.ephemeral_private);
        assert_ne!(a.stealth_public, b.stealth_public);
    }

    #[test]
    fn test_sanctioned_recipient_draws_no_randomness() {
        let registry = Arc::new(SanctionRegistry::new());
        let engine = StealthEngine::with_entropy(
            Arc::clone(&registry),
            CountingEntropy {
                inner: SeededEntropy::from_seed([5; 32]),
                draws: AtomicUsize::new(0),
            },
        );

        let recipient = KeyPair::generate(&SeededEntropy::from_seed([6; 32])).unwrap();
        registry.add(recipient.address());

        let result = engine.generate_stealth_address(recipient.public());
        assert_eq!(result, Err(StealthError::SanctionedAddress(recipient.address())));
        assert_eq!(engine.entropy.draws.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unsanction_restores_derivation() {
        let engine = engine(7);
        let recipient = engine.generate_account().unwrap();

        engine.sanctions().add(recipient.address());
        assert!(engine.generate_stealth_address(recipient.public()).is_err());

        engine.sanctions().remove(&recipient.address());
        assert!(engine.generate_stealth_address(recipient.public()).is_ok());
    }

    #[test]
    fn test_randomness_failure_is_reported() {
        let registry = Arc::new(SanctionRegistry::new());
        let engine = StealthEngine::with_entropy(Arc::clone(&registry), FailingEntropy);
        let recipient = KeyPair::generate(&SeededEntropy::from_seed([8; 32])).unwrap();

        let result = engine.generate_stealth_address(recipient.public());
        assert!(matches!(
            result,
            Err(StealthError::Core(CoreError::RandomnessFailure(_)))
        ));
        assert!(engine.generate_account().is_err());

        // Registry untouched.
        assert!(registry.is_empty());
    }

    #[test]
    fn test_shared_secret_symmetric_through_engine() {
        let engine = engine(9);
        let a = engine.generate_account().unwrap();
        let b = engine.generate_account().unwrap();

        assert_eq!(
            engine.generate_shared_secret(a.private(), b.public()),
            engine.generate_shared_secret(b.private(), a.public())
        );
    }

    #[test]
    fn test_recovery_matches_manual_formula() {
        let engine = engine(10);
        let recipient = engine.generate_account().unwrap();
        let stealth = engine.generate_stealth_address(recipient.public()).unwrap();

        let secret =
            engine.generate_shared_secret(recipient.private(), &stealth.ephemeral_public());
        let expected = *recipient.private().as_scalar() + secret.to_scalar();

        let recovered = engine
            .recover_stealth_private_key(recipient.private(), &stealth.ephemeral_public())
            .unwrap();
        assert_eq!(*recovered.private().as_scalar(), expected);
    }

    #[test]
    fn test_wrong_recipient_recovers_different_key() {
        let engine = engine(11);
        let recipient = engine.generate_account().unwrap();
        let stranger = engine.generate_account().unwrap();
        let stealth = engine.generate_stealth_address(recipient.public()).unwrap();

        let recovered = engine
            .recover_stealth_private_key(stranger.private(), &stealth.ephemeral_public())
            .unwrap();
        assert_ne!(*recovered.public(), stealth.stealth_public);
    }

    #[test]
    fn test_debug_hides_ephemeral_private() {
        let engine = engine(12);
        let recipient = engine.generate_account().unwrap();
        let stealth = engine.generate_stealth_address(recipient.public()).unwrap();

        let debug = format!("{:?}", stealth);
        assert!(debug.contains("ephemeral_public"));
        assert!(!debug.contains(&stealth.ephemeral_private.to_hex()[2..]));
    }
}
