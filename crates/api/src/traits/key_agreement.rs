//! Trait definition for static key agreement schemes
//!
//! Unlike an encapsulation mechanism, a static agreement scheme derives
//! the same shared secret on both sides from (own secret, peer public)
//! with no ciphertext in flight. The interface is instance-based so one
//! implementation covers every runtime-configured parameter set.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for static-static key agreement
pub trait KeyAgreement {
    /// Public key type
    type PublicKey: Clone;

    /// Secret key type with security guarantees
    ///
    /// Implements `Zeroize` for secure memory cleanup.
    type SecretKey: Zeroize + Clone;

    /// Shared secret type
    ///
    /// Implements `Zeroize`; callers should feed it into a KDF and drop
    /// it promptly.
    type SharedSecret: Zeroize;

    /// Keypair type for efficient storage of related keys
    type KeyPair;

    /// Returns the agreement scheme name
    fn name(&self) -> &'static str;

    /// Generate a new keypair
    ///
    /// Must use the provided CSPRNG for all randomness.
    fn keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract public key from keypair
    fn public_key(&self, keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract secret key from keypair
    fn secret_key(&self, keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Derive the shared secret from own secret key and the peer's public key
    ///
    /// Implementations must validate the peer key (group membership) before
    /// any secret-dependent computation.
    fn agree(
        &self,
        secret_key: &Self::SecretKey,
        peer: &Self::PublicKey,
    ) -> Result<Self::SharedSecret>;
}
