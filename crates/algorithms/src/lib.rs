//! Elliptic curve arithmetic over runtime-chosen prime fields
//!
//! This crate implements short Weierstrass curve cryptography where the
//! curve itself is a runtime value: field elements, curve descriptions,
//! Jacobian projective points, SEC1 point serialization and the named
//! domain parameter registry. Field elements carry an optional
//! Montgomery representation that accelerates repeated multiplication
//! without changing any observable value.
//!
//! The scalar multiplication used on secret scalars is a fixed-shape
//! Montgomery ladder; the variable-time path is reserved for public
//! inputs such as signature verification.
//!
//! The crate is usable in both `std` and `no_std` environments; the
//! arbitrary-precision arithmetic requires `alloc` in either case.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Elliptic curve arithmetic
pub mod ec;
pub use ec::{
    decode_point, encode_point, CurveParams, DomainParams, FieldElement, Point, PointEncoding,
};
