//! Injectable sources of private scalars.
//!
//! Production code uses [`OsEntropy`]. Tests use [`SeededEntropy`], which is
//! deterministic but draws through the same rejection sampler, so its
//! output has the same distribution.

use k256::elliptic_curve::PrimeField;
use k256::{FieldBytes, Scalar};
use rand::rngs::{OsRng, StdRng};
use rand::{CryptoRng, RngCore, SeedableRng};
use std::sync::{Mutex, PoisonError};

use crate::error::{CoreError, Result};
use crate::keys::PrivateScalar;

/// Rejected draws tolerated before the source is declared broken.
///
/// A healthy 256-bit source rejects a candidate with probability below
/// 2^-127, so hitting this bound means the generator is stuck.
pub const MAX_REJECTIONS: usize = 64;

/// A source of private scalars uniform over [1, n-1].
pub trait ScalarSource: Send + Sync {
    /// Draw one scalar.
    fn random_scalar(&self) -> Result<PrivateScalar>;
}

/// Rejection-sample a scalar in [1, n-1] from `rng`.
pub fn sample_scalar<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Result<PrivateScalar> {
    let mut candidate = [0u8; 32];
    for _ in 0..MAX_REJECTIONS {
        rng.try_fill_bytes(&mut candidate)
            .map_err(|e| CoreError::RandomnessFailure(e.to_string()))?;

        let scalar: Option<Scalar> = Scalar::from_repr(FieldBytes::from(candidate)).into();
        if let Some(scalar) = scalar {
            if let Ok(private) = PrivateScalar::new(scalar) {
                return Ok(private);
            }
        }
    }
    Err(CoreError::RandomnessFailure(format!(
        "no valid scalar after {} draws",
        MAX_REJECTIONS
    )))
}

/// Operating-system randomness.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl ScalarSource for OsEntropy {
    fn random_scalar(&self) -> Result<PrivateScalar> {
        sample_scalar(&mut OsRng)
    }
}

/// Deterministic randomness from a 32-byte seed.
pub struct SeededEntropy {
    rng: Mutex<StdRng>,
}

impl SeededEntropy {
    /// Create from a seed.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            rng: Mutex::new(StdRng::from_seed(seed)),
        }
    }
}

impl ScalarSource for SeededEntropy {
    fn random_scalar(&self) -> Result<PrivateScalar> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        sample_scalar(&mut *rng)
    }
}

impl std::fmt::Debug for SeededEntropy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SeededEntropy")
    }
}
