//! Prime field arithmetic over a runtime modulus
//!
//! Elements carry a shared per-modulus context and an internal
//! representation flag: plain residues, or Montgomery residues (a·R mod p
//! with R a limb-aligned power of two above p). The representation is an
//! acceleration detail only; every observable value is canonical, so two
//! elements compare equal regardless of which form they are in.

#[cfg(not(feature = "std"))]
use alloc::{sync::Arc, vec::Vec};
#[cfg(feature = "std")]
use std::sync::Arc;

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{validate, Error, Result};

/// Per-modulus context: the prime itself plus the Montgomery constants
/// derived from it once at curve construction.
#[derive(Debug)]
pub(crate) struct FieldCtx {
    /// The field prime
    p: BigUint,
    /// Fixed serialization width, ceil(bits(p) / 8)
    byte_len: usize,
    /// Montgomery shift: bits(p) rounded up to a 32-bit limb boundary
    rbits: usize,
    /// R - 1, for reduction mod R by masking
    r_mask: BigUint,
    /// -p^-1 mod R
    n_prime: BigUint,
    /// R^2 mod p, used to enter Montgomery form with a single reduction
    r2: BigUint,
}

impl FieldCtx {
    /// Build the context for an odd prime modulus.
    ///
    /// Rejects moduli that cannot carry a curve group: zero, even, or
    /// below five. Primality itself is the caller's contract.
    pub(crate) fn new(p: BigUint) -> Result<Self> {
        validate::parameter(p.is_odd(), "p", "field modulus must be an odd prime")?;
        validate::parameter(p >= BigUint::from(5u32), "p", "field modulus too small")?;

        let bits = p.bits() as usize;
        let byte_len = (bits + 7) / 8;
        let rbits = ((bits + 31) / 32) * 32;
        let r_mask = (BigUint::one() << rbits) - 1u32;
        let p_inv = Self::inv_mod_power_of_two(&p, rbits);
        // p odd implies the inverse is nonzero, so R - inv stays below R
        let n_prime = (BigUint::one() << rbits) - &p_inv;
        let r2 = (BigUint::one() << (2 * rbits)) % &p;

        Ok(FieldCtx {
            p,
            byte_len,
            rbits,
            r_mask,
            n_prime,
            r2,
        })
    }

    /// Inverse of an odd `p` modulo 2^rbits by Hensel lifting, doubling
    /// the known precision each round.
    fn inv_mod_power_of_two(p: &BigUint, rbits: usize) -> BigUint {
        let mut inv = BigUint::one();
        let mut bits = 1usize;
        while bits < rbits {
            bits *= 2;
            let mask = (BigUint::one() << bits) - 1u32;
            let t = (p * &inv) & &mask;
            // inv <- inv * (2 - p*inv) mod 2^bits, with the subtraction
            // lifted by 2^bits to stay in unsigned territory
            let correction = ((BigUint::one() << bits) + 2u32 - t) & &mask;
            inv = (&inv * &correction) & &mask;
        }
        inv & ((BigUint::one() << rbits) - 1u32)
    }

    /// Montgomery reduction: t * R^-1 mod p, valid for t < R*p.
    pub(crate) fn redc(&self, t: BigUint) -> BigUint {
        let m = ((&t & &self.r_mask) * &self.n_prime) & &self.r_mask;
        let mut u = (t + m * &self.p) >> self.rbits;
        if u >= self.p {
            u -= &self.p;
        }
        u
    }

    /// Map a canonical residue into Montgomery form: a*R mod p.
    fn to_mont(&self, v: &BigUint) -> BigUint {
        self.redc(v * &self.r2)
    }

    pub(crate) fn modulus(&self) -> &BigUint {
        &self.p
    }

    pub(crate) fn byte_len(&self) -> usize {
        self.byte_len
    }
}

/// Internal representation of a field element's stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Repr {
    Standard,
    Montgomery,
}

/// An element of GF(p) for a runtime modulus
///
/// Cheap to clone; the per-modulus context is shared behind an `Arc`.
/// Binary operations require both operands to belong to the same field
/// and abort the process otherwise: mixing fields is a programming error,
/// not a recoverable condition.
#[derive(Clone)]
pub struct FieldElement {
    ctx: Arc<FieldCtx>,
    value: BigUint,
    repr: Repr,
}

impl FieldElement {
    /// Canonical element from an arbitrary integer, reduced mod p.
    pub(crate) fn new(ctx: Arc<FieldCtx>, value: BigUint) -> Self {
        let value = value % ctx.modulus();
        FieldElement {
            ctx,
            value,
            repr: Repr::Standard,
        }
    }

    /// The additive identity of this field.
    pub(crate) fn zero(ctx: Arc<FieldCtx>) -> Self {
        FieldElement {
            ctx,
            value: BigUint::zero(),
            repr: Repr::Standard,
        }
    }

    /// The multiplicative identity of this field.
    pub(crate) fn one(ctx: Arc<FieldCtx>) -> Self {
        FieldElement {
            ctx,
            value: BigUint::one(),
            repr: Repr::Standard,
        }
    }

    /// Small-constant element, for formula coefficients.
    pub(crate) fn from_u32(ctx: Arc<FieldCtx>, n: u32) -> Self {
        Self::new(ctx, BigUint::from(n))
    }

    /// Strict fixed-width decoder: exactly `byte_len` big-endian bytes,
    /// value strictly below the modulus.
    pub(crate) fn from_bytes(ctx: &Arc<FieldCtx>, bytes: &[u8]) -> Result<Self> {
        validate::length("field element", bytes.len(), ctx.byte_len)?;
        let value = BigUint::from_bytes_be(bytes);
        if value >= *ctx.modulus() {
            return Err(Error::param(
                "field element",
                "value not below the field modulus",
            ));
        }
        Ok(FieldElement {
            ctx: ctx.clone(),
            value,
            repr: Repr::Standard,
        })
    }

    /// The canonical integer value in [0, p), independent of the internal
    /// representation.
    pub fn value(&self) -> BigUint {
        match self.repr {
            Repr::Standard => self.value.clone(),
            Repr::Montgomery => self.ctx.redc(self.value.clone()),
        }
    }

    /// Fixed-width big-endian encoding of the canonical value.
    pub fn to_bytes(&self) -> Vec<u8> {
        let raw = self.value().to_bytes_be();
        let mut out = Vec::new();
        out.resize(self.ctx.byte_len - raw.len(), 0u8);
        out.extend_from_slice(&raw);
        out
    }

    /// The field modulus this element lives under.
    pub fn modulus(&self) -> &BigUint {
        self.ctx.modulus()
    }

    pub(crate) fn ctx(&self) -> &Arc<FieldCtx> {
        &self.ctx
    }

    /// Whether the element is currently held in Montgomery form.
    pub fn is_montgomery(&self) -> bool {
        self.repr == Repr::Montgomery
    }

    /// A copy of this element in Montgomery form. Idempotent.
    pub fn to_montgomery(&self) -> Self {
        match self.repr {
            Repr::Montgomery => self.clone(),
            Repr::Standard => FieldElement {
                ctx: self.ctx.clone(),
                value: self.ctx.to_mont(&self.value),
                repr: Repr::Montgomery,
            },
        }
    }

    /// A copy of this element in standard form. Idempotent.
    pub fn to_standard(&self) -> Self {
        match self.repr {
            Repr::Standard => self.clone(),
            Repr::Montgomery => FieldElement {
                ctx: self.ctx.clone(),
                value: self.ctx.redc(self.value.clone()),
                repr: Repr::Standard,
            },
        }
    }

    /// Switch this element to Montgomery form in place. Idempotent.
    pub fn enable_montgomery(&mut self) {
        if self.repr == Repr::Standard {
            self.value = self.ctx.to_mont(&self.value);
            self.repr = Repr::Montgomery;
        }
    }

    fn with_repr(&self, repr: Repr) -> Self {
        match repr {
            Repr::Standard => self.to_standard(),
            Repr::Montgomery => self.to_montgomery(),
        }
    }

    fn assert_same_field(&self, other: &Self) {
        assert!(
            Arc::ptr_eq(&self.ctx, &other.ctx) || self.ctx.p == other.ctx.p,
            "field element moduli differ"
        );
    }

    /// Modular addition. Operands in different representations are
    /// aligned to the left operand's form first.
    pub fn add(&self, other: &Self) -> Self {
        self.assert_same_field(other);
        let rhs = other.with_repr(self.repr);
        let mut value = &self.value + &rhs.value;
        if value >= self.ctx.p {
            value -= &self.ctx.p;
        }
        FieldElement {
            ctx: self.ctx.clone(),
            value,
            repr: self.repr,
        }
    }

    /// Modular subtraction, never underflowing.
    pub fn sub(&self, other: &Self) -> Self {
        self.assert_same_field(other);
        let rhs = other.with_repr(self.repr);
        let value = if self.value >= rhs.value {
            &self.value - &rhs.value
        } else {
            &self.ctx.p - &rhs.value + &self.value
        };
        FieldElement {
            ctx: self.ctx.clone(),
            value,
            repr: self.repr,
        }
    }

    /// Modular multiplication.
    ///
    /// Two standard operands multiply with a plain reduction. If either
    /// operand is in Montgomery form the other is promoted and the product
    /// is a single Montgomery reduction, so the result stays in Montgomery
    /// form. Mixed-form operands therefore cost one extra conversion but
    /// always produce the correct canonical value.
    pub fn mul(&self, other: &Self) -> Self {
        self.assert_same_field(other);
        match (self.repr, other.repr) {
            (Repr::Standard, Repr::Standard) => FieldElement {
                ctx: self.ctx.clone(),
                value: (&self.value * &other.value) % &self.ctx.p,
                repr: Repr::Standard,
            },
            _ => {
                let a = self.with_repr(Repr::Montgomery);
                let b = other.with_repr(Repr::Montgomery);
                FieldElement {
                    ctx: self.ctx.clone(),
                    value: self.ctx.redc(&a.value * &b.value),
                    repr: Repr::Montgomery,
                }
            }
        }
    }

    /// Modular squaring.
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Additive inverse: p - a for nonzero a, zero for zero. Preserves
    /// the representation (the Montgomery map commutes with negation).
    pub fn negate(&self) -> Self {
        if self.value.is_zero() {
            self.clone()
        } else {
            FieldElement {
                ctx: self.ctx.clone(),
                value: &self.ctx.p - &self.value,
                repr: self.repr,
            }
        }
    }

    /// Multiplicative inverse via Fermat: a^(p-2) mod p.
    ///
    /// The result carries the same representation as the input. Zero has
    /// no inverse and is rejected.
    pub fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::param("field element", "inverse of zero"));
        }
        let exp = &self.ctx.p - 2u32;
        let inv = self.value().modpow(&exp, &self.ctx.p);
        let out = FieldElement {
            ctx: self.ctx.clone(),
            value: inv,
            repr: Repr::Standard,
        };
        Ok(out.with_repr(self.repr))
    }

    /// Modular square root, if one exists.
    ///
    /// Uses the (p+1)/4 exponent shortcut when p = 3 (mod 4) and full
    /// Tonelli-Shanks otherwise. The candidate is verified by squaring,
    /// so a quadratic non-residue yields `None`.
    pub fn sqrt(&self) -> Option<Self> {
        if self.is_zero() {
            return Some(self.clone());
        }
        let p = &self.ctx.p;
        let a = self.value();
        let three = BigUint::from(3u32);
        let root = if (p & &three) == three {
            let exp = (p + 1u32) >> 2;
            a.modpow(&exp, p)
        } else {
            tonelli_shanks(&a, p)?
        };
        if (&root * &root) % p != a {
            return None;
        }
        let out = FieldElement {
            ctx: self.ctx.clone(),
            value: root,
            repr: Repr::Standard,
        };
        Some(out.with_repr(self.repr))
    }

    /// Whether this element is the additive identity.
    pub fn is_zero(&self) -> bool {
        // zero maps to zero under the Montgomery map
        self.value.is_zero()
    }

    /// Whether this element is the multiplicative identity.
    pub fn is_one(&self) -> bool {
        self.value().is_one()
    }

    /// Parity of the canonical value. Drives compressed-point prefixes.
    pub fn is_odd(&self) -> bool {
        self.value().is_odd()
    }
}

/// Tonelli-Shanks square root for primes with p = 1 (mod 4).
fn tonelli_shanks(n: &BigUint, p: &BigUint) -> Option<BigUint> {
    let one = BigUint::one();
    let p_minus_1 = p - &one;
    let legendre_exp = &p_minus_1 >> 1;
    if n.modpow(&legendre_exp, p) != one {
        return None;
    }

    // p - 1 = q * 2^s with q odd
    let mut q = p_minus_1.clone();
    let mut s = 0usize;
    while q.is_even() {
        q >>= 1;
        s += 1;
    }

    // find a quadratic non-residue z
    let mut z = BigUint::from(2u32);
    while z.modpow(&legendre_exp, p) != p_minus_1 {
        z += 1u32;
    }

    let mut m = s;
    let mut c = z.modpow(&q, p);
    let mut t = n.modpow(&q, p);
    let mut r = n.modpow(&((&q + 1u32) >> 1), p);

    while !t.is_one() {
        // least i with t^(2^i) == 1
        let mut i = 0usize;
        let mut t2 = t.clone();
        while !t2.is_one() {
            t2 = (&t2 * &t2) % p;
            i += 1;
            if i == m {
                return None;
            }
        }

        let mut b = c.clone();
        for _ in 0..(m - i - 1) {
            b = (&b * &b) % p;
        }

        m = i;
        c = (&b * &b) % p;
        t = (&t * &c) % p;
        r = (&r * &b) % p;
    }

    Some(r)
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ctx.p == other.ctx.p && self.value() == other.value()
    }
}

impl Eq for FieldElement {}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x{:x})", self.value())
    }
}

impl Add for &FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: Self) -> FieldElement {
        FieldElement::add(self, rhs)
    }
}

impl Sub for &FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: Self) -> FieldElement {
        FieldElement::sub(self, rhs)
    }
}

impl Mul for &FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: Self) -> FieldElement {
        FieldElement::mul(self, rhs)
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        self.negate()
    }
}
