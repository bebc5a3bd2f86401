//! Digital signature traits
//!
//! The signature interface is instance-based: an implementor value carries
//! the parameter set (curve, digest policy) it operates over, so one
//! implementation serves every runtime-configured curve. The design does
//! not require mutable access to secret keys.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Core trait for digital signature schemes over prehashed messages
///
/// Implementors sign message *digests*; hashing the message is the
/// caller's concern. Secret keys are opaque types that cannot be directly
/// manipulated as bytes, which prevents accidental key corruption.
pub trait Signature {
    /// Public key type for this scheme
    type PublicKey: Clone;

    /// Secret key type - must be zeroizable but not byte-accessible
    type SecretKey: Zeroize + Clone;

    /// Signature data type
    type SignatureData: Clone;

    /// Key pair type (typically a tuple of public and secret keys)
    type KeyPair;

    /// Returns the name of this signature scheme
    fn name(&self) -> &'static str;

    /// Generate a new key pair using the provided RNG
    ///
    /// Implementations must use the provided cryptographically secure RNG
    /// for all random number generation.
    fn keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract the public key from a key pair
    fn public_key(&self, keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract the secret key from a key pair
    fn secret_key(&self, keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Sign a message digest with the given secret key
    ///
    /// The RNG feeds per-signature nonces; implementations must never
    /// reuse a nonce across signatures.
    fn sign<R: CryptoRng + RngCore>(
        &self,
        digest: &[u8],
        secret_key: &Self::SecretKey,
        rng: &mut R,
    ) -> Result<Self::SignatureData>;

    /// Verify a signature against a message digest and public key
    ///
    /// Returns `Ok(())` for a valid signature and an error for any invalid
    /// or malformed one.
    fn verify(
        &self,
        digest: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<()>;
}
