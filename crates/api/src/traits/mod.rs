//! Trait definitions shared across the primecurve workspace

pub mod key_agreement;
#[cfg(feature = "alloc")]
pub mod serialize;
pub mod signature;

pub use key_agreement::KeyAgreement;
#[cfg(feature = "alloc")]
pub use serialize::{Serialize, SerializeSecret};
pub use signature::Signature;
