//! Core types with security guarantees for the primecurve library

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::fmt;
use core::ops::Deref;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::ct::ct_eq;
use crate::traits::serialize::SerializeSecret;
use crate::Result;

/// A variable-length vector of bytes that is securely zeroed when dropped
///
/// Widths in this library are dictated by runtime curve parameters, so
/// secret scalars live in a heap buffer rather than a const-generic array.
/// The container provides:
/// - Secure zeroing when dropped
/// - Constant-time equality comparison
/// - A Debug implementation that hides the actual bytes
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretVec {
    data: Vec<u8>,
}

impl SecretVec {
    /// Create a new instance from an existing vector
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Create by copying from a slice
    pub fn from_slice(slice: &[u8]) -> Self {
        Self {
            data: slice.to_vec(),
        }
    }

    /// Create filled with zeros
    pub fn zeroed(len: usize) -> Self {
        let mut data = Vec::new();
        data.resize(len, 0u8);
        Self { data }
    }

    /// Generate a random instance
    pub fn random<R: rand::RngCore + rand::CryptoRng>(rng: &mut R, len: usize) -> Self {
        let mut this = Self::zeroed(len);
        rng.fill_bytes(&mut this.data);
        this
    }

    /// Get the length of the contained data
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the container is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl AsRef<[u8]> for SecretVec {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl Deref for SecretVec {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl PartialEq for SecretVec {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(&self.data, &other.data)
    }
}

impl Eq for SecretVec {}

impl fmt::Debug for SecretVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretVec[{} bytes REDACTED]", self.data.len())
    }
}

impl SerializeSecret for SecretVec {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self::from_slice(bytes))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.data.clone())
    }
}
