//! In-memory implementation of the SanctionList trait.
//!
//! Lives for the lifetime of the process. Thread-safe via RwLock.

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chameleon_core::Address;

use crate::traits::SanctionList;

/// In-memory sanction registry.
///
/// Readers share the lock; `add` and `remove` hold it exclusively for a
/// single `HashSet` call. A poisoned lock is recovered rather than
/// propagated, since no mutation can leave the set half-written.
#[derive(Debug, Default)]
pub struct SanctionRegistry {
    inner: RwLock<HashSet<Address>>,
}

impl SanctionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the given seed addresses.
    pub fn from_seed<I>(seed: I) -> Self
    where
        I: IntoIterator<Item = Address>,
    {
        let set: HashSet<Address> = seed.into_iter().collect();
        tracing::info!(count = set.len(), "sanction registry initialized");
        Self {
            inner: RwLock::new(set),
        }
    }

    /// Number of sanctioned addresses.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether no address is sanctioned.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// A sorted copy of the current set.
    pub fn snapshot(&self) -> Vec<Address> {
        let mut addresses: Vec<Address> = self.read().iter().copied().collect();
        addresses.sort();
        addresses
    }

    fn read(&self) -> RwLockReadGuard<'_, HashSet<Address>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashSet<Address>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SanctionList for SanctionRegistry {
    fn add(&self, address: Address) {
        if self.write().insert(address) {
            tracing::info!(%address, "address sanctioned");
        }
    }

    fn remove(&self, address: &Address) {
        if self.write().remove(address) {
            tracing::info!(%address, "address removed from sanctions");
        }
    }

    fn is_sanctioned(&self, address: &Address) -> bool {
        self.read().contains(address)
    }
}
