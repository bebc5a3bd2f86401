//! Static-static elliptic curve key agreement
//!
//! Each party combines its long-term secret scalar with the peer's
//! long-term public point: both sides of `S = d_A * Q_B = d_B * Q_A`
//! land on the same point, and the shared secret is its affine
//! x-coordinate at the curve's fixed field width. Peer points are
//! validated on import, and the scalar multiplication runs through the
//! fixed-shape ladder so its cost does not depend on the secret.

use crate::error::{Error, Result};
use alloc::vec::Vec;
use num_bigint::BigUint;
use num_traits::Zero;
use primecurve_algorithms::ec::{decode_point, encode_point, DomainParams, Point, PointEncoding};
use primecurve_algorithms::Error as CurveError;
use primecurve_api::{Error as ApiError, KeyAgreement, Result as ApiResult};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

/// Byte width of scalars for a group of order n
fn order_byte_len(n: &BigUint) -> usize {
    ((n.bits() as usize) + 7) / 8
}

fn require_order(domain: &DomainParams) -> Result<BigUint> {
    let n = domain.order();
    if n.is_zero() {
        return Err(Error::Arithmetic(CurveError::param(
            "order",
            "the curve order is required for key agreement",
        )));
    }
    Ok(n.clone())
}

/// Fixed-width big-endian encoding of a secret integer
fn fixed_width_bytes(v: &BigUint, width: usize) -> Zeroizing<Vec<u8>> {
    let mut raw = v.to_bytes_be();
    let mut out = Zeroizing::new(Vec::new());
    out.resize(width, 0u8);
    let start = width - raw.len();
    out[start..].copy_from_slice(&raw);
    raw.zeroize();
    out
}

/// Agreement public key: a validated non-identity point on the curve
#[derive(Clone, Debug, PartialEq)]
pub struct EckaegPublicKey {
    domain: DomainParams,
    point: Point,
}

impl EckaegPublicKey {
    /// Wrap an existing curve point as an agreement public key
    pub fn from_point(domain: &DomainParams, point: Point) -> Result<Self> {
        require_order(domain)?;
        if *point.curve() != *domain.curve() {
            return Err(Error::InvalidKey {
                key_type: "public",
                reason: "public point lies on a different curve",
            });
        }
        if point.is_identity() {
            return Err(Error::InvalidKey {
                key_type: "public",
                reason: "public key cannot be the identity",
            });
        }
        Ok(EckaegPublicKey {
            domain: domain.clone(),
            point,
        })
    }

    /// Import a SEC1-encoded public key
    ///
    /// The encoding is validated in full: the point must parse, lie on
    /// the curve and not be the identity.
    pub fn from_bytes(domain: &DomainParams, bytes: &[u8]) -> Result<Self> {
        let point = decode_point(domain.curve(), bytes)?;
        Self::from_point(domain, point)
    }

    /// SEC1 export in the requested format
    pub fn to_bytes(&self, format: PointEncoding) -> Result<Vec<u8>> {
        encode_point(&self.point, format).map_err(Error::from)
    }

    /// The agreement domain
    pub fn domain(&self) -> &DomainParams {
        &self.domain
    }

    /// The public point
    pub fn point(&self) -> &Point {
        &self.point
    }
}

/// Agreement secret key: the scalar d in [1, n-1] in a zeroizing buffer
#[derive(Clone)]
pub struct EckaegSecretKey {
    domain: DomainParams,
    scalar: Zeroizing<Vec<u8>>,
}

impl EckaegSecretKey {
    /// The agreement domain
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

impl Zeroize for EckaegSecretKey {
    fn zeroize(&mut self) {
        self.scalar.zeroize();
    }
}

/// A static key agreement key pair over a runtime curve
#[derive(Clone)]
pub struct EckaegKeyPair {
    public: EckaegPublicKey,
    secret: EckaegSecretKey,
}

impl EckaegKeyPair {
    /// Generate a fresh key pair
    ///
    /// Draws d uniformly from [1, n-1] by rejection sampling and computes
    /// Q = d.G with the fixed-shape ladder.
    pub fn generate<R: CryptoRng + RngCore>(domain: &DomainParams, rng: &mut R) -> Result<Self> {
        let n = require_order(domain)?;
        let d = domain.random_scalar(rng).map_err(|_| Error::KeyGeneration {
            algorithm: "ECKAEG",
            details: "drawing a secret scalar failed",
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
            return Err(Error::InvalidKey {
                key_type: "secret",
                reason: "secret scalar outside [1, n-1]",
            });
        }
        Self::from_scalar(domain, &d, &n)
    }

    fn from_scalar(domain: &DomainParams, d: &BigUint, n: &BigUint) -> Result<Self> {
        let n_minus_1 = n - 1u32;
        let q = domain.generator().mul_secure(d, n, &n_minus_1);
        let public = EckaegPublicKey::from_point(domain, q)?;
        Ok(EckaegKeyPair {
            public,
            secret: EckaegSecretKey {
                domain: domain.clone(),
                scalar: fixed_width_bytes(d, order_byte_len(n)),
            },
        })
    }

    /// The public half
    pub fn public(&self) -> &EckaegPublicKey {
        &self.public
    }

    /// The secret half
    pub fn secret(&self) -> &EckaegSecretKey {
        &self.secret
    }
}

/// Derive the shared secret from one side's secret key and the peer's public key
///
/// Steps:
/// 1. The peer key must lie on the secret key's curve
/// 2. S = d * Q_peer via the fixed-shape ladder; reject the identity
/// 3. The shared secret is x(S) as big-endian bytes at the field width
///
/// The output is a raw coordinate, not a uniformly random key; derive
/// working keys from it with a KDF.
pub fn agree(secret: &EckaegSecretKey, peer: &EckaegPublicKey) -> Result<Zeroizing<Vec<u8>>> {
    if *secret.domain.curve() != *peer.domain.curve() {
        return Err(Error::InvalidKey {
            key_type: "peer public",
            reason: "peer key lies on a different curve",
        });
    }
    let n = require_order(&secret.domain)?;
    let n_minus_1 = &n - 1u32;

    let d = secret.to_scalar();
    let shared = peer.point.mul_secure(&d, &n, &n_minus_1);
    if shared.is_identity() {
        return Err(Error::Agreement {
            algorithm: "ECKAEG",
            details: "agreement produced the identity",
        });
    }
    let x = shared.affine_x()?;
    Ok(fixed_width_bytes(
        &x,
        secret.domain.curve().field_byte_len(),
    ))
}

/// Curve-generic static key agreement scheme handle
///
/// Carries the domain; implements the workspace
/// [`KeyAgreement`](primecurve_api::KeyAgreement) trait so callers can
/// stay generic over schemes.
#[derive(Clone, Debug)]
pub struct Eckaeg {
    domain: DomainParams,
}

impl Eckaeg {
    /// Key agreement over the given domain
    pub fn new(domain: DomainParams) -> ApiResult<Self> {
        require_order(&domain)
            .map_err(|err| ApiError::from(err).with_context("ECKAEG parameters"))?;
        Ok(Eckaeg { domain })
    }

    /// The domain this scheme operates over
    pub fn domain(&self) -> &DomainParams {
        &self.domain
    }
}

impl KeyAgreement for Eckaeg {
    type PublicKey = EckaegPublicKey;
    type SecretKey = EckaegSecretKey;
    type SharedSecret = Zeroizing<Vec<u8>>;
    type KeyPair = EckaegKeyPair;

    fn name(&self) -> &'static str {
        "ECKAEG"
    }

    fn keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> ApiResult<EckaegKeyPair> {
        EckaegKeyPair::generate(&self.domain, rng).map_err(ApiError::from)
    }

    fn public_key(&self, keypair: &EckaegKeyPair) -> EckaegPublicKey {
        keypair.public.clone()
    }

    fn secret_key(&self, keypair: &EckaegKeyPair) -> EckaegSecretKey {
        keypair.secret.clone()
    }

    fn agree(
        &self,
        secret_key: &EckaegSecretKey,
        peer: &EckaegPublicKey,
    ) -> ApiResult<Zeroizing<Vec<u8>>> {
        if secret_key.domain != self.domain {
            return Err(ApiError::InvalidKey {
                context: "ECKAEG agree",
                #[cfg(feature = "std")]
                message: "secret key belongs to a different curve".into(),
            });
        }
        agree(secret_key, peer).map_err(ApiError::from)
    }
}
