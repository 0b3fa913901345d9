//! # Chameleon Core
//!
//! Pure primitives for stealth-address derivation over secp256k1.
//!
//! This crate contains no I/O and no shared state. It is pure computation
//! over key material, plus an injectable source of randomness.
//!
//! ## Key Types
//!
//! - [`PrivateScalar`] - A non-zero scalar modulo the group order
//! - [`PublicPoint`] - A non-identity point on secp256k1
//! - [`KeyPair`] - A private scalar with its recomputed public point
//! - [`Address`] - The 20-byte Keccak-derived identifier of a public point
//! - [`SharedSecret`] - Keccak-256 of an ECDH shared point's X coordinate
//!
//! ## Encoding
//!
//! Points travel as 65-byte uncompressed SEC1 (`0x04 || X || Y`), scalars as
//! 32 big-endian bytes, both as lowercase hex with an optional `0x` prefix.
//! See [`encoding`].

pub mod address;
pub mod crypto;
pub mod curve;
pub mod ecdh;
pub mod encoding;
pub mod error;
pub mod keys;
pub mod rng;

pub use address::Address;
pub use crypto::Keccak256Hash;
pub use ecdh::{shared_secret, SharedSecret};
pub use error::{CoreError, Result};
pub use keys::{KeyPair, PrivateScalar, PublicPoint};
pub use rng::{OsEntropy, ScalarSource, SeededEntropy};
