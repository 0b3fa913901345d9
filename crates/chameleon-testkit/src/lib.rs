//! # Chameleon Testkit
//!
//! Testing utilities for Chameleon.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Fixed recipient/ephemeral scalars with the expected stealth outputs
//! - **Generators**: Proptest strategies for keys, addresses and engine setups
//! - **Fixtures**: Helper structs for setting up sender/recipient scenarios
//!
//! ## Golden Vectors
//!
//! Golden vectors pin the derivation so other implementations can check
//! byte-for-byte agreement:
//!
//! ```rust
//! use chameleon_testkit::vectors::{all_vectors, derive_from_vector};
//!
//! for vector in all_vectors() {
//!     let derived = derive_from_vector(&vector).unwrap();
//!     println!("{}: {}", vector.name, derived.stealth_public.to_hex());
//! }
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use chameleon_testkit::generators::{engine_from_params, StealthParams};
//!
//! proptest! {
//!     #[test]
//!     fn recovery_matches(params: StealthParams) {
//!         let engine = engine_from_params(&params);
//!         let stealth = engine.generate_stealth_address(params.recipient.public()).unwrap();
//!         let recovered = engine
//!             .recover_stealth_private_key(params.recipient.private(), &stealth.ephemeral_public())
//!             .unwrap();
//!         prop_assert_eq!(*recovered.public(), stealth.stealth_public);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! Quickly set up test scenarios:
//!
//! ```rust
//! use chameleon_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let stealth = fixture.send().unwrap();
//! let recovered = fixture.receive(&stealth).unwrap();
//! assert_eq!(*recovered.public(), stealth.stealth_public);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{keypair_from_seed, multi_party_fixtures, TestFixture};
pub use generators::{engine_from_params, StealthParams};
pub use vectors::{
    all_vectors, derive_from_vector, verify_all_vectors, FixedEntropy, GoldenVector,
};
