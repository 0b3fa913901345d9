//! SanctionList trait: the abstract interface for the blocked-address set.
//!
//! The engine only needs membership queries and add/remove. A persistent or
//! remote store can implement this trait without touching the engine.

use std::sync::Arc;

use chameleon_core::Address;

/// A concurrency-safe set of sanctioned addresses.
///
/// None of the operations can fail. Implementations must make every write
/// atomic with respect to reads: a query observes the set either entirely
/// before or entirely after a given mutation.
pub trait SanctionList: Send + Sync {
    /// Insert an address. Idempotent.
    fn add(&self, address: Address);

    /// Remove an address if present. Removing an absent address is a no-op.
    fn remove(&self, address: &Address);

    /// Whether the address is currently sanctioned.
    fn is_sanctioned(&self, address: &Address) -> bool;
}

impl<L: SanctionList + ?Sized> SanctionList for Arc<L> {
    fn add(&self, address: Address) {
        (**self).add(address)
    }

    fn remove(&self, address: &Address) {
        (**self).remove(address)
    }

    fn is_sanctioned(&self, address: &Address) -> bool {
        (**self).is_sanctioned(address)
    }
}

/// Extension trait for common registry patterns.
pub trait SanctionListExt: SanctionList {
    /// Add every address from an iterator.
    ///
    /// Each insert is individually atomic; the batch as a whole is not.
    fn add_all<I>(&self, addresses: I)
    where
        I: IntoIterator<Item = Address>,
    {
        for address in addresses {
            self.add(address);
        }
    }

    /// Remove every address from an iterator.
    fn remove_all<'a, I>(&self, addresses: I)
    where
        I: IntoIterator<Item = &'a Address>,
    {
        for address in addresses {
            self.remove(address);
        }
    }
}

impl<L: SanctionList + ?Sized> SanctionListExt for L {}
