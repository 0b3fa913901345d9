//! # Chameleon Sanctions
//!
//! The sanction registry: an authoritative, thread-safe answer to "is this
//! address currently blocked?".
//!
//! ## Overview
//!
//! The registry is abstracted behind the [`SanctionList`] trait so the
//! stealth engine does not care where the set lives. [`SanctionRegistry`]
//! is the in-memory implementation, seeded from a caller-supplied list.
//!
//! ## Usage
//!
//! ```rust
//! use chameleon_core::Address;
//! use chameleon_sanctions::{SanctionList, SanctionRegistry};
//!
//! let blocked = Address::from_bytes([0xaa; 20]);
//! let registry = SanctionRegistry::from_seed([blocked]);
//!
//! assert!(registry.is_sanctioned(&blocked));
//! registry.remove(&blocked);
//! assert!(!registry.is_sanctioned(&blocked));
//! ```
//!
//! ## Design Notes
//!
//! - **Idempotent mutations**: adding a present address or removing an absent
//!   one is a no-op, not an error
//! - **Reader/writer discipline**: queries share the lock, mutations take it
//!   exclusively, and every mutation is a single set operation
//! - **No expiry**: entries live until removed

pub mod memory;
pub mod traits;

pub use memory::SanctionRegistry;
pub use traits::{SanctionList, SanctionListExt};
