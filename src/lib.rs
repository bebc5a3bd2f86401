//! # primecurve
//!
//! An elliptic curve library built around runtime curve parameters: one
//! arithmetic core serves every short-Weierstrass prime curve, whether it
//! comes from the built-in SEC registry or is constructed on the fly.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! primecurve = "0.1"
//! ```
//!
//! Sign a prehashed digest:
//!
//! ```
//! use primecurve::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let domain = DomainParams::from_name("secp256r1")?;
//! let scheme = Ecdsa::new(domain)?;
//! let keypair = scheme.keypair(&mut OsRng)?;
//!
//! let digest = [0x42u8; 32]; // a SHA-256 output in practice
//! let sig = scheme.sign(&digest, &scheme.secret_key(&keypair), &mut OsRng)?;
//! scheme.verify(&digest, &sig, &scheme.public_key(&keypair))?;
//! # Ok::<(), primecurve::api::Error>(())
//! ```
//!
//! Agree on a shared secret:
//!
//! ```
//! use primecurve::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let domain = DomainParams::from_name("secp256r1")?;
//! let alice = EckaegKeyPair::generate(&domain, &mut OsRng)?;
//! let bob = EckaegKeyPair::generate(&domain, &mut OsRng)?;
//!
//! let ab = primecurve::ka::agree(alice.secret(), bob.public())?;
//! let ba = primecurve::ka::agree(bob.secret(), alice.public())?;
//! assert_eq!(*ab, *ba);
//! # Ok::<(), primecurve::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `sign` (default): ECDSA over prehashed digests
//! - `ka` (default): static elliptic curve key agreement
//! - `std` (default): standard library support
//! - `full`: everything enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`api`]: shared error type and scheme traits
//! - [`params`]: constants for the registered SEC curves
//! - [`algorithms`]: field, curve, point and encoding arithmetic
//! - [`sign`]: ECDSA
//! - [`ka`]: static key agreement

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use primecurve_algorithms as algorithms;
pub use primecurve_api as api;
pub use primecurve_params as params;

// Feature-gated re-exports
#[cfg(feature = "ka")]
pub use primecurve_ka as ka;

#[cfg(feature = "sign")]
pub use primecurve_sign as sign;

/// Common imports for primecurve users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{KeyAgreement, Signature};

    // Re-export security types
    pub use crate::api::SecretVec;

    // The arithmetic surface
    pub use crate::algorithms::ec::{
        decode_point, encode_point, CurveParams, DomainParams, FieldElement, Point, PointEncoding,
    };

    // Scheme entry points. The ECDSA signature struct stays behind the
    // crate path so it cannot shadow the api trait of the same name.
    #[cfg(feature = "sign")]
    pub use crate::sign::{DigestPolicy, Ecdsa, EcdsaKeyPair};

    #[cfg(feature = "ka")]
    pub use crate::ka::{Eckaeg, EckaegKeyPair};

    // Callers need these to drive conditional swaps and hold secrets
    pub use subtle::Choice;
    pub use zeroize::Zeroizing;
}
