//! EC domain parameter sets and the named-curve registry
//!
//! A domain bundles a curve with its base point. Sets can be ad hoc
//! (built from raw integers, no name) or looked up from the bundled
//! SECG/NIST registry by name or dotted-decimal OID. Registry constants
//! live in `primecurve-params` as hex strings and are parsed and
//! validated here on each lookup, so a `DomainParams` that exists is
//! always internally consistent: non-singular curve, base point on the
//! curve.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::fmt;

use num_bigint::BigUint;
use num_traits::{Num, Zero};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use primecurve_params::secg::{self, CurveSpec};

use crate::ec::curve::CurveParams;
use crate::ec::point::Point;
use crate::error::{Error, Result};

/// A curve together with its base point and registry identity
#[derive(Clone)]
pub struct DomainParams {
    curve: CurveParams,
    generator: Point,
    name: Option<&'static str>,
    oid: Option<&'static str>,
}

impl DomainParams {
    /// Ad-hoc domain from a curve and affine base point coordinates.
    ///
    /// The base point is checked against the curve equation; the
    /// resulting set carries no name or OID.
    pub fn new(curve: CurveParams, gx: BigUint, gy: BigUint) -> Result<Self> {
        let generator = Point::from_affine(&curve, gx, gy)?;
        Ok(DomainParams {
            curve,
            generator,
            name: None,
            oid: None,
        })
    }

    /// Registry lookup by SECG name, e.g. `"secp256r1"`.
    pub fn from_name(name: &str) -> Result<Self> {
        let spec = secg::by_name(name).ok_or(Error::param("name", "unknown curve name"))?;
        Self::from_spec(spec)
    }

    /// Registry lookup by dotted-decimal OID, e.g. `"1.2.840.10045.3.1.7"`.
    pub fn from_oid(oid: &str) -> Result<Self> {
        let spec = secg::by_oid(oid).ok_or(Error::param("oid", "unknown curve OID"))?;
        Self::from_spec(spec)
    }

    /// Names of every curve the registry can produce.
    pub fn registered() -> &'static [&'static str] {
        secg::NAMES
    }

    fn from_spec(spec: &CurveSpec) -> Result<Self> {
        let p = parse_hex(spec.p)?;
        let a = parse_hex(spec.a)?;
        let b = parse_hex(spec.b)?;
        let n = parse_hex(spec.n)?;
        let curve = CurveParams::new(p, a, b, n, BigUint::from(spec.h))?;
        let generator = Point::from_affine(&curve, parse_hex(spec.gx)?, parse_hex(spec.gy)?)?;
        Ok(DomainParams {
            curve,
            generator,
            name: Some(spec.name),
            oid: Some(spec.oid),
        })
    }

    /// The underlying curve.
    pub fn curve(&self) -> &CurveParams {
        &self.curve
    }

    /// The base point G.
    pub fn generator(&self) -> &Point {
        &self.generator
    }

    /// Group order n, zero when unknown.
    pub fn order(&self) -> &BigUint {
        self.curve.order()
    }

    /// Cofactor h.
    pub fn cofactor(&self) -> &BigUint {
        self.curve.cofactor()
    }

    /// Registry name, `None` for ad-hoc sets.
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// Registry OID, `None` for ad-hoc sets.
    pub fn oid(&self) -> Option<&'static str> {
        self.oid
    }

    /// Uniform scalar in [1, n-1] by rejection sampling.
    ///
    /// Candidates are fixed-width draws masked down to the order's bit
    /// length, so each round accepts with probability above one half.
    /// Requires a known group order.
    pub fn random_scalar<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<BigUint> {
        let n = self.curve.order();
        if n.is_zero() {
            return Err(Error::param("order", "group order unknown"));
        }
        let bits = n.bits();
        let byte_len = ((bits as usize) + 7) / 8;
        let top_mask: u8 = if bits % 8 == 0 {
            0xff
        } else {
            (1u8 << (bits % 8)) - 1
        };

        let mut buf: Vec<u8> = Vec::new();
        buf.resize(byte_len, 0u8);
        loop {
            rng.fill_bytes(&mut buf);
            buf[0] &= top_mask;
            let candidate = BigUint::from_bytes_be(&buf);
            if !candidate.is_zero() && candidate < *n {
                buf.zeroize();
                return Ok(candidate);
            }
        }
    }
}

fn parse_hex(s: &str) -> Result<BigUint> {
    BigUint::from_str_radix(s, 16).map_err(|_| Error::param("registry", "malformed hex constant"))
}

impl PartialEq for DomainParams {
    /// Domains compare by curve, base point and order; names are labels.
    fn eq(&self, other: &Self) -> bool {
        self.curve == other.curve
            && self.generator == other.generator
            && self.order() == other.order()
    }
}

impl Eq for DomainParams {}

impl fmt::Debug for DomainParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(name) => write!(f, "DomainParams({})", name),
            None => write!(f, "DomainParams(ad-hoc, p = 0x{:x})", self.curve.p()),
        }
    }
}
