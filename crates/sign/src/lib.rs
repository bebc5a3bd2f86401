//! ECDSA over prehashed message digests
//!
//! Signing and verification are parameterized by a runtime
//! [`DomainParams`](primecurve_algorithms::ec::DomainParams), so one
//! implementation serves every registered or ad-hoc curve. Hashing is the
//! caller's concern; every entry point takes digest bytes.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod ecdsa;
pub mod error;

pub use ecdsa::{DigestPolicy, Ecdsa, EcdsaKeyPair, EcdsaPublicKey, EcdsaSecretKey, Signature};
pub use error::{Error, Result};
