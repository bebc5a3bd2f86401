//! Static elliptic curve key agreement
//!
//! Both parties hold long-term key pairs on one runtime-configured
//! [`DomainParams`](primecurve_algorithms::ec::DomainParams); the shared
//! secret is the x-coordinate of the combined point at the curve's fixed
//! field width. The raw coordinate is not uniformly distributed, so
//! callers should pass it through a KDF before using it as key material.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod eckaeg;
pub mod error;

pub use eckaeg::{agree, Eckaeg, EckaegKeyPair, EckaegPublicKey, EckaegSecretKey};
pub use error::{Error, Result};
