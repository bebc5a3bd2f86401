//! Public API traits and types for the primecurve library
//!
//! This crate provides the public API surface shared by the primecurve
//! workspace: trait definitions, error types, secret-byte containers and
//! the constant-time helpers the other crates build on.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod ct;
pub mod error;
pub mod traits;
#[cfg(feature = "alloc")]
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
#[cfg(feature = "alloc")]
pub use types::*;

pub use traits::{KeyAgreement, Signature};
#[cfg(feature = "alloc")]
pub use traits::{Serialize, SerializeSecret};

// Re-export trait modules for direct access
pub use traits::{key_agreement, signature};
#[cfg(feature = "alloc")]
pub use traits::serialize;
