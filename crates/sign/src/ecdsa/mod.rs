//! ECDSA over prehashed digests for runtime-configured prime curves
//!
//! Signature generation follows FIPS 186-4, Section 6.3 with a fresh
//! random nonce per signature; verification follows Section 6.4. The
//! caller hashes the message and passes digest bytes in, so any digest
//! width can be combined with any curve.

use crate::error::{Error, Result};
use alloc::format;
use alloc::string::ToString;
use alloc::vec::Vec;
use num_bigint::BigUint;
use num_traits::Zero;
use primecurve_algorithms::ec::{decode_point, encode_point, DomainParams, Point, PointEncoding};
use primecurve_api::{Error as ApiError, Result as ApiResult, Signature as SignatureTrait};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

mod signature;
pub use signature::Signature;

/// How digests wider than the group order are treated
///
/// FIPS 186-4 takes the leftmost bits(n) bits of the digest; some
/// protocols instead refuse mismatched digest widths outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigestPolicy {
    /// Use the leftmost bits(n) bits of the digest (FIPS 186-4 behavior)
    #[default]
    TruncateToOrder,
    /// Reject digests wider than the order's byte width
    RejectOversized,
}

/// Byte width of scalars for a group of order n
fn order_byte_len(n: &BigUint) -> usize {
    ((n.bits() as usize) + 7) / 8
}

fn require_order(domain: &DomainParams) -> Result<BigUint> {
    let n = domain.order();
    if n.is_zero() {
        return Err(Error::InvalidParameter(
            "curve order is unknown; signing requires n".into(),
        ));
    }
    Ok(n.clone())
}

/// Fixed-width big-endian encoding of a secret scalar
fn scalar_bytes(v: &BigUint, width: usize) -> Zeroizing<Vec<u8>> {
    let mut raw = v.to_bytes_be();
    let mut out = Zeroizing::new(Vec::new());
    out.resize(width, 0u8);
    let start = width - raw.len();
    out[start..].copy_from_slice(&raw);
    raw.zeroize();
    out
}

/// Convert digest bytes to the scalar e per the digest policy
fn digest_to_scalar(policy: DigestPolicy, n: &BigUint, digest: &[u8]) -> Result<BigUint> {
    let order_bits = n.bits() as usize;
    if policy == DigestPolicy::RejectOversized && digest.len() > order_byte_len(n) {
        return Err(Error::Encoding(format!(
            "digest is {} bytes but the order spans {} bytes",
            digest.len(),
            order_byte_len(n)
        )));
    }

    let mut e = BigUint::from_bytes_be(digest);
    let digest_bits = digest.len() * 8;
    if digest_bits > order_bits {
        e >>= digest_bits - order_bits;
    }
    Ok(e % n)
}

/// ECDSA public key: a validated non-identity point on the signing curve
#[derive(Clone, Debug, PartialEq)]
pub struct EcdsaPublicKey {
    domain: DomainParams,
    point: Point,
}

impl EcdsaPublicKey {
    /// Wrap an existing curve point as a public key
    pub fn from_point(domain: &DomainParams, point: Point) -> Result<Self> {
        require_order(domain)?;
        if *point.curve() != *domain.curve() {
            return Err(Error::InvalidKey(
                "public point lies on a different curve".into(),
            ));
        }
        if point.is_identity() {
            return Err(Error::InvalidKey(
                "public key cannot be the identity".into(),
            ));
        }
        Ok(EcdsaPublicKey {
            domain: domain.clone(),
            point,
        })
    }

    /// Import a SEC1-encoded public key
    pub fn from_bytes(domain: &DomainParams, bytes: &[u8]) -> Result<Self> {
        let point = decode_point(domain.curve(), bytes)
            .map_err(|err| Error::InvalidKey(err.to_string()))?;
        Self::from_point(domain, point)
    }

    /// SEC1 export in the requested format
    pub fn to_bytes(&self, format: PointEncoding) -> Result<Vec<u8>> {
        encode_point(&self.point, format).map_err(Error::from)
    }

    /// The signing domain
    pub fn domain(&self) -> &DomainParams {
        &self.domain
    }

    /// The public point
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// Verify a signature over a digest with the default policy
    pub fn verify_digest(&self, digest: &[u8], signature: &Signature) -> Result<bool> {
        self.verify_digest_with(DigestPolicy::default(), digest, signature)
    }

    /// Verify a signature over a digest
    ///
    /// Algorithm (FIPS 186-4, Section 6.4):
    /// 1. Check r, s ∈ [1, n-1]
    /// 2. e = policy(digest)
    /// 3. w = s⁻¹ mod n; u₁ = e·w mod n; u₂ = r·w mod n
    /// 4. V = u₁·G + u₂·Q; reject the identity
    /// 5. Valid iff x(V) mod n = r
    ///
    /// Cryptographic invalidity is reported as `Ok(false)`; `Err` is
    /// reserved for inputs the call cannot process at all.
    pub fn verify_digest_with(
        &self,
        policy: DigestPolicy,
        digest: &[u8],
        signature: &Signature,
    ) -> Result<bool> {
        let n = require_order(&self.domain)?;

        if signature.r.is_zero()
            || signature.s.is_zero()
            || signature.r >= n
            || signature.s >= n
        {
            return Ok(false);
        }

        let e = digest_to_scalar(policy, &n, digest)?;

        let w = match signature.s.modinv(&n) {
            Some(w) => w,
            None => return Ok(false),
        };
        let u1 = (&e * &w) % &n;
        let u2 = (&signature.r * &w) % &n;

        // Every verification input is public, so the plain ladder is used
        let v = self.domain.generator().mul(&u1).add(&self.point.mul(&u2));
        if v.is_identity() {
            return Ok(false);
        }
        let x = v.affine_x().map_err(|err| Error::Verification {
            algorithm: "ECDSA",
            details: err.to_string(),
        })?;
        Ok(x % &n == signature.r)
    }
}

/// ECDSA secret key: the scalar d ∈ [1, n-1] in a zeroizing buffer
#[derive(Clone)]
pub struct EcdsaSecretKey {
    domain: DomainParams,
    scalar: Zeroizing<Vec<u8>>,
}

impl EcdsaSecretKey {
    fn from_scalar(domain: &DomainParams, d: &BigUint, n: &BigUint) -> Self {
        EcdsaSecretKey {
            domain: domain.clone(),
            scalar: scalar_bytes(d, order_byte_len(n)),
        }
    }

    /// The signing domain
    pub fn domain(&self) -> &DomainParams {
        &self.domain
    }

    /// Fixed-width big-endian export of the secret scalar
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        self.scalar.clone()
    }

    fn to_scalar(&self) -> BigUint {
        BigUint::from_bytes_be(&self.scalar)
    }
}

impl Zeroize for EcdsaSecretKey {
    fn zeroize(&mut self) {
        self.scalar.zeroize();
    }
}

/// An ECDSA key pair over a runtime curve
#[derive(Clone)]
pub struct EcdsaKeyPair {
    public: EcdsaPublicKey,
    secret: EcdsaSecretKey,
}

impl EcdsaKeyPair {
    /// Generate a fresh key pair
    ///
    /// Draws d uniformly from [1, n-1] by rejection sampling and computes
    /// Q = d·G with the fixed-shape ladder.
    pub fn generate<R: CryptoRng + RngCore>(domain: &DomainParams, rng: &mut R) -> Result<Self> {
        let n = require_order(domain)?;
        let d = domain
            .random_scalar(rng)
            .map_err(|err| Error::KeyGeneration {
                algorithm: "ECDSA",
                details: err.to_string(),
            })?;
        Self::from_scalar(domain, &d, &n)
    }

    /// Rebuild a key pair from fixed-width secret scalar bytes
    pub fn from_secret_bytes(domain: &DomainParams, bytes: &[u8]) -> Result<Self> {
        let n = require_order(domain)?;
        let width = order_byte_len(&n);
        if bytes.len() != width {
            return Err(Error::InvalidKeySize {
                expected: width,
                actual: bytes.len(),
            });
        }
        let d = BigUint::from_bytes_be(bytes);
        if d.is_zero() || d >= n {
            return Err(Error::InvalidKey("secret scalar outside [1, n-1]".into()));
        }
        Self::from_scalar(domain, &d, &n)
    }

    fn from_scalar(domain: &DomainParams, d: &BigUint, n: &BigUint) -> Result<Self> {
        let n_minus_1 = n - 1u32;
        let q = domain.generator().mul_secure(d, n, &n_minus_1);
        let public = EcdsaPublicKey::from_point(domain, q)?;
        Ok(EcdsaKeyPair {
            public,
            secret: EcdsaSecretKey::from_scalar(domain, d, n),
        })
    }

    /// The public half
    pub fn public(&self) -> &EcdsaPublicKey {
        &self.public
    }

    /// The secret half
    pub fn secret(&self) -> &EcdsaSecretKey {
        &self.secret
    }

    /// Sign a digest with the default policy
    pub fn sign_digest<R: CryptoRng + RngCore>(
        &self,
        digest: &[u8],
        rng: &mut R,
    ) -> Result<Signature> {
        self.sign_digest_with(DigestPolicy::default(), digest, rng)
    }

    /// Sign a digest
    ///
    /// Algorithm (FIPS 186-4, Section 6.3):
    /// 1. e = policy(digest)
    /// 2. k ← random in [1, n-1]
    /// 3. R = k·G via the fixed-shape ladder; r = x(R) mod n, retry on 0
    /// 4. s = k⁻¹(e + r·d) mod n, retry on 0
    pub fn sign_digest_with<R: CryptoRng + RngCore>(
        &self,
        policy: DigestPolicy,
        digest: &[u8],
        rng: &mut R,
    ) -> Result<Signature> {
        sign_scalar(
            &self.secret.domain,
            policy,
            &self.secret.to_scalar(),
            digest,
            rng,
        )
    }
}

fn sign_scalar<R: CryptoRng + RngCore>(
    domain: &DomainParams,
    policy: DigestPolicy,
    d: &BigUint,
    digest: &[u8],
    rng: &mut R,
) -> Result<Signature> {
    let n = require_order(domain)?;
    let e = digest_to_scalar(policy, &n, digest)?;
    let n_minus_1 = &n - 1u32;

    loop {
        let k = domain
            .random_scalar(rng)
            .map_err(|err| Error::SignatureGeneration {
                algorithm: "ECDSA",
                details: err.to_string(),
            })?;

        let big_r = domain.generator().mul_secure(&k, &n, &n_minus_1);
        let r = match big_r.affine_x() {
            Ok(x) => x % &n,
            Err(_) => continue,
        };
        if r.is_zero() {
            continue;
        }

        let k_inv = match k.modinv(&n) {
            Some(inv) => inv,
            None => continue,
        };
        let s = (&k_inv * ((&e + &r * d) % &n)) % &n;
        if s.is_zero() {
            continue;
        }

        return Ok(Signature::new(r, s));
    }
}

/// Curve-generic ECDSA scheme handle
///
/// Carries the domain and digest policy; implements the workspace
/// [`Signature`](primecurve_api::Signature) trait so callers can stay
/// generic over schemes.
#[derive(Clone, Debug)]
pub struct Ecdsa {
    domain: DomainParams,
    policy: DigestPolicy,
}

impl Ecdsa {
    /// ECDSA over the given domain with the default digest policy
    pub fn new(domain: DomainParams) -> ApiResult<Self> {
        Self::with_policy(domain, DigestPolicy::default())
    }

    /// ECDSA over the given domain with an explicit digest policy
    pub fn with_policy(domain: DomainParams, policy: DigestPolicy) -> ApiResult<Self> {
        require_order(&domain)
            .map_err(|err| ApiError::from(err).with_context("ECDSA parameters"))?;
        Ok(Ecdsa { domain, policy })
    }

    /// The domain this scheme operates over
    pub fn domain(&self) -> &DomainParams {
        &self.domain
    }
}

impl SignatureTrait for Ecdsa {
    type PublicKey = EcdsaPublicKey;
    type SecretKey = EcdsaSecretKey;
    type SignatureData = Signature;
    type KeyPair = EcdsaKeyPair;

    fn name(&self) -> &'static str {
        "ECDSA"
    }

    fn keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> ApiResult<EcdsaKeyPair> {
        EcdsaKeyPair::generate(&self.domain, rng).map_err(ApiError::from)
    }

    fn public_key(&self, keypair: &EcdsaKeyPair) -> EcdsaPublicKey {
        keypair.public.clone()
    }

    fn secret_key(&self, keypair: &EcdsaKeyPair) -> EcdsaSecretKey {
        keypair.secret.clone()
    }

    fn sign<R: CryptoRng + RngCore>(
        &self,
        digest: &[u8],
        secret_key: &EcdsaSecretKey,
        rng: &mut R,
    ) -> ApiResult<Signature> {
        if secret_key.domain != self.domain {
            return Err(ApiError::InvalidKey {
                context: "ECDSA sign",
                #[cfg(feature = "std")]
                message: "secret key belongs to a different curve".into(),
            });
        }
        sign_scalar(
            &self.domain,
            self.policy,
            &secret_key.to_scalar(),
            digest,
            rng,
        )
        .map_err(ApiError::from)
    }

    fn verify(
        &self,
        digest: &[u8],
        signature: &Signature,
        public_key: &EcdsaPublicKey,
    ) -> ApiResult<()> {
        if public_key.domain != self.domain {
            return Err(ApiError::InvalidKey {
                context: "ECDSA verify",
                #[cfg(feature = "std")]
                message: "public key belongs to a different curve".into(),
            });
        }
        let ok = public_key
            .verify_digest_with(self.policy, digest, signature)
            .map_err(ApiError::from)?;
        if !ok {
            return Err(ApiError::InvalidSignature {
                context: "ECDSA",
                #[cfg(feature = "std")]
                message: "signature verification failed".into(),
            });
        }
        Ok(())
    }
}
