//! Jacobian projective point arithmetic
//!
//! Points live in Jacobian coordinates (X : Y : Z) with affine
//! x = X/Z^2 and y = Y/Z^3. The identity is any triple with Z = 0; the
//! canonical identity constructed here is (0 : 1 : 0). Addition and
//! doubling leave results projective so chained formulas stay
//! inversion-free; the scalar multiplication entry points normalize
//! their result to Z = 1 before returning it.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use num_bigint::BigUint;
use num_traits::Zero;
use subtle::Choice;

use crate::ec::curve::CurveParams;
use crate::ec::field::FieldElement;
use crate::error::{Error, Result};

/// A point on a short Weierstrass curve, Jacobian projective
///
/// Carries a handle to its curve; binary operations on points of
/// different curves are programming errors and abort the process.
#[derive(Clone)]
pub struct Point {
    curve: CurveParams,
    x: FieldElement,
    y: FieldElement,
    z: FieldElement,
}

impl Point {
    /// The group identity (point at infinity) of `curve`.
    pub fn identity(curve: &CurveParams) -> Self {
        let ctx = curve.ctx().clone();
        Point {
            curve: curve.clone(),
            x: FieldElement::zero(ctx.clone()),
            y: FieldElement::one(ctx.clone()),
            z: FieldElement::zero(ctx),
        }
    }

    /// Validated affine construction.
    ///
    /// Rejects coordinates at or above the field modulus, and pairs that
    /// do not satisfy the curve equation. The result has Z = 1.
    pub fn from_affine(curve: &CurveParams, x: BigUint, y: BigUint) -> Result<Self> {
        if x >= *curve.p() || y >= *curve.p() {
            return Err(Error::point("coordinate not below the field modulus"));
        }
        let x = curve.field_element(x);
        let y = curve.field_element(y);
        Self::from_affine_elements(curve, x, y)
    }

    /// Affine construction from already-reduced field elements, still
    /// checked against the curve equation.
    pub(crate) fn from_affine_elements(
        curve: &CurveParams,
        x: FieldElement,
        y: FieldElement,
    ) -> Result<Self> {
        if y.square() != curve.equation_rhs(&x) {
            return Err(Error::point("coordinates do not satisfy the curve equation"));
        }
        Ok(Self::from_affine_unchecked(curve, x, y))
    }

    /// Affine construction without the equation check, for coordinates
    /// already known to lie on the curve.
    pub(crate) fn from_affine_unchecked(
        curve: &CurveParams,
        x: FieldElement,
        y: FieldElement,
    ) -> Self {
        let one = FieldElement::one(curve.ctx().clone());
        Point {
            curve: curve.clone(),
            x,
            y,
            z: one,
        }
    }

    fn from_parts(&self, x: FieldElement, y: FieldElement, z: FieldElement) -> Self {
        Point {
            curve: self.curve.clone(),
            x,
            y,
            z,
        }
    }

    /// The curve this point belongs to.
    pub fn curve(&self) -> &CurveParams {
        &self.curve
    }

    /// Whether this point is the group identity.
    pub fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    /// Raw projective X, as a canonical integer.
    pub fn x(&self) -> BigUint {
        self.x.value()
    }

    /// Raw projective Y, as a canonical integer.
    pub fn y(&self) -> BigUint {
        self.y.value()
    }

    /// Raw projective Z, as a canonical integer.
    pub fn z(&self) -> BigUint {
        self.z.value()
    }

    /// Affine x-coordinate X/Z^2. The identity has no affine form.
    pub fn affine_x(&self) -> Result<BigUint> {
        if self.is_identity() {
            return Err(Error::param("point", "cannot convert the identity to affine"));
        }
        let zinv = self.z.invert()?;
        Ok((&self.x * &zinv.square()).value())
    }

    /// Affine y-coordinate Y/Z^3. The identity has no affine form.
    pub fn affine_y(&self) -> Result<BigUint> {
        if self.is_identity() {
            return Err(Error::param("point", "cannot convert the identity to affine"));
        }
        let zinv = self.z.invert()?;
        Ok((&self.y * &(&zinv.square() * &zinv)).value())
    }

    /// Both affine coordinates with a single field inversion.
    pub fn to_affine(&self) -> Result<(BigUint, BigUint)> {
        if self.is_identity() {
            return Err(Error::param("point", "cannot convert the identity to affine"));
        }
        let zinv = self.z.invert()?;
        let zinv2 = zinv.square();
        let x = (&self.x * &zinv2).value();
        let y = (&self.y * &(&zinv2 * &zinv)).value();
        Ok((x, y))
    }

    /// Rescale in place to Z = 1. No-op for the identity.
    pub fn normalize(&mut self) {
        if self.is_identity() || self.z.is_one() {
            return;
        }
        // z is nonzero here, so the inversion cannot fail
        if let Ok(zinv) = self.z.invert() {
            let zinv2 = zinv.square();
            let was_mont = self.z.is_montgomery();
            self.x = &self.x * &zinv2;
            self.y = &self.y * &(&zinv2 * &zinv);
            self.z = FieldElement::one(self.curve.ctx().clone());
            if was_mont {
                self.z.enable_montgomery();
            }
        }
    }

    /// Point doubling.
    ///
    /// M = 3X^2 + aZ^4, S = 4XY^2, X3 = M^2 - 2S,
    /// Y3 = M(S - X3) - 8Y^4, Z3 = 2YZ. The identity and points with
    /// Y = 0 (order two) double to the identity.
    pub fn double(&self) -> Point {
        if self.is_identity() || self.y.is_zero() {
            return Point::identity(&self.curve);
        }

        let a = if self.x.is_montgomery() {
            self.curve.a_mont()
        } else {
            self.curve.a()
        };

        let x2 = self.x.square();
        let z2 = self.z.square();
        let z4 = z2.square();
        let m = &(&(&x2 + &x2) + &x2) + &(a * &z4);

        let y2 = self.y.square();
        let xy2 = &self.x * &y2;
        let s = {
            let t = &xy2 + &xy2;
            &t + &t
        };

        let x3 = &m.square() - &(&s + &s);

        let y4 = y2.square();
        let eight_y4 = {
            let t = &y4 + &y4;
            let t = &t + &t;
            &t + &t
        };
        let y3 = &(&m * &(&s - &x3)) - &eight_y4;

        let yz = &self.y * &self.z;
        let z3 = &yz + &yz;

        self.from_parts(x3, y3, z3)
    }

    /// Point addition, `self` as the left operand.
    ///
    /// U1 = X1 Z2^2, U2 = X2 Z1^2, S1 = Y1 Z2^3, S2 = Y2 Z1^3,
    /// H = U2 - U1, r = S2 - S1; equal inputs fall through to `double`,
    /// inverse inputs to the identity. Otherwise V = U1 H^2,
    /// X3 = r^2 - H^3 - 2V, Y3 = r(V - X3) - S1 H^3, Z3 = Z1 Z2 H.
    pub fn add(&self, other: &Point) -> Point {
        self.assert_same_curve(other);

        if self.is_identity() {
            return other.clone();
        }
        if other.is_identity() {
            return self.clone();
        }

        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let u1 = &self.x * &z2z2;
        let u2 = &other.x * &z1z1;
        let s1 = &self.y * &(&z2z2 * &other.z);
        let s2 = &other.y * &(&z1z1 * &self.z);

        let h = &u2 - &u1;
        let r = &s2 - &s1;

        if h.is_zero() {
            if r.is_zero() {
                return self.double();
            }
            return Point::identity(&self.curve);
        }

        let h2 = h.square();
        let h3 = &h2 * &h;
        let v = &u1 * &h2;

        let x3 = &(&r.square() - &h3) - &(&v + &v);
        let y3 = &(&r * &(&v - &x3)) - &(&s1 * &h3);
        let z3 = &(&self.z * &other.z) * &h;

        self.from_parts(x3, y3, z3)
    }

    /// Point subtraction: `self + (-other)`.
    pub fn sub(&self, other: &Point) -> Point {
        self.add(&other.negate())
    }

    /// Additive inverse (X, p - Y, Z). The identity is its own inverse.
    pub fn negate(&self) -> Point {
        if self.is_identity() {
            return self.clone();
        }
        Point {
            curve: self.curve.clone(),
            x: self.x.clone(),
            y: self.y.negate(),
            z: self.z.clone(),
        }
    }

    /// Variable-time scalar multiplication by double-and-add, MSB first.
    ///
    /// Runtime follows the bit pattern of `k`; use [`Point::mul_secure`]
    /// when `k` is secret. The result is normalized to Z = 1 (the
    /// identity for k = 0 or an identity base).
    pub fn mul(&self, k: &BigUint) -> Point {
        let mut acc = Point::identity(&self.curve);
        if self.is_identity() || k.is_zero() {
            return acc;
        }
        for byte in k.to_bytes_be() {
            for bit in (0..8).rev() {
                acc = acc.double();
                if (byte >> bit) & 1 == 1 {
                    acc = acc.add(self);
                }
            }
        }
        acc.normalize();
        acc
    }

    /// Fixed-shape scalar multiplication by Montgomery ladder.
    ///
    /// The ladder runs max(bits(bound_lo), bits(bound_hi), bits(k))
    /// iterations, each performing one addition and one doubling with
    /// its arms selected through [`Point::conditional_swap`]. The bounds
    /// size the ladder only; the result equals `self.mul(k)` for every
    /// choice of bounds. Normalized to Z = 1 like `mul`.
    ///
    /// Iterations above the top set bit of `k` operate on identity
    /// accumulators and take the short paths in `add` and `double`, so
    /// the per-iteration cost is uniform only from bits(k) downward.
    /// Callers hiding the bit length of `k` must widen the scalar
    /// before the call, for a base of order n by rewriting `k` to
    /// `k + n` or `k + 2n`, whichever lands on the fixed width.
    pub fn mul_secure(&self, k: &BigUint, bound_lo: &BigUint, bound_hi: &BigUint) -> Point {
        if self.is_identity() || k.is_zero() {
            return Point::identity(&self.curve);
        }

        let iterations = core::cmp::max(
            core::cmp::max(bound_lo.bits(), bound_hi.bits()),
            k.bits(),
        ) as usize;
        let kb = k.to_bytes_be();

        let mut r0 = Point::identity(&self.curve);
        let mut r1 = self.clone();
        for i in (0..iterations).rev() {
            let bit = scalar_bit(&kb, i);
            let choice = Choice::from(bit);
            Point::conditional_swap(&mut r0, &mut r1, choice);
            r1 = r0.add(&r1);
            r0 = r0.double();
            Point::conditional_swap(&mut r0, &mut r1, choice);
        }

        r0.normalize();
        r0
    }

    /// Exchange the full internal state of two points, curve handle
    /// included, in constant overhead.
    pub fn swap(&mut self, other: &mut Point) {
        core::mem::swap(self, other);
    }

    /// Swap the coordinates of two same-curve points when `choice` is
    /// set.
    ///
    /// Driven by a `subtle::Choice` so ladder call sites keep a
    /// data-independent structure. The coordinate containers are heap
    /// integers, so this is a structural measure, not a memory-level
    /// constant-time guarantee.
    pub fn conditional_swap(a: &mut Point, b: &mut Point, choice: Choice) {
        a.assert_same_curve(b);
        if bool::from(choice) {
            core::mem::swap(&mut a.x, &mut b.x);
            core::mem::swap(&mut a.y, &mut b.y);
            core::mem::swap(&mut a.z, &mut b.z);
        }
    }

    /// Switch all three coordinates to Montgomery representation in
    /// place. Idempotent; every observable value stays canonical.
    pub fn enable_montgomery(&mut self) {
        self.x.enable_montgomery();
        self.y.enable_montgomery();
        self.z.enable_montgomery();
    }

    /// A copy of this point with Montgomery-form coordinates.
    pub fn to_montgomery(&self) -> Point {
        let mut p = self.clone();
        p.enable_montgomery();
        p
    }

    /// Projective curve membership: Y^2 = X^3 + aXZ^4 + bZ^6. The
    /// identity is considered on every curve.
    pub fn is_on_curve(&self) -> bool {
        if self.is_identity() {
            return true;
        }
        let (a, b) = if self.x.is_montgomery() {
            (self.curve.a_mont(), self.curve.b_mont())
        } else {
            (self.curve.a(), self.curve.b())
        };
        let z2 = self.z.square();
        let z4 = z2.square();
        let z6 = &z4 * &z2;
        let x3 = &self.x.square() * &self.x;
        let rhs = &(&x3 + &(&(a * &self.x) * &z4)) + &(b * &z6);
        self.y.square() == rhs
    }

    fn assert_same_curve(&self, other: &Point) {
        assert!(
            self.curve.same_curve(&other.curve),
            "points on different curves"
        );
    }
}

/// Bit `i` (counting from the least significant) of a big-endian byte
/// string, zero beyond its end.
fn scalar_bit(bytes_be: &[u8], i: usize) -> u8 {
    let back = i / 8;
    if back >= bytes_be.len() {
        return 0;
    }
    (bytes_be[bytes_be.len() - 1 - back] >> (i % 8)) & 1
}

impl PartialEq for Point {
    /// Projective equality by cross-multiplication:
    /// X1 Z2^2 = X2 Z1^2 and Y1 Z2^3 = Y2 Z1^3. The identity equals
    /// only the identity; points on different curves are never equal.
    fn eq(&self, other: &Self) -> bool {
        if !self.curve.same_curve(&other.curve) {
            return false;
        }
        match (self.is_identity(), other.is_identity()) {
            (true, true) => return true,
            (true, false) | (false, true) => return false,
            _ => {}
        }
        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        if &self.x * &z2z2 != &other.x * &z1z1 {
            return false;
        }
        &self.y * &(&z2z2 * &other.z) == &other.y * &(&z1z1 * &self.z)
    }
}

impl Eq for Point {}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity() {
            return write!(f, "Point(identity)");
        }
        write!(
            f,
            "Point(X: 0x{:x}, Y: 0x{:x}, Z: 0x{:x})",
            self.x(),
            self.y(),
            self.z()
        )
    }
}

impl Add for &Point {
    type Output = Point;

    fn add(self, rhs: Self) -> Point {
        Point::add(self, rhs)
    }
}

impl Sub for &Point {
    type Output = Point;

    fn sub(self, rhs: Self) -> Point {
        Point::sub(self, rhs)
    }
}

impl Neg for &Point {
    type Output = Point;

    fn neg(self) -> Point {
        self.negate()
    }
}

impl Mul<&BigUint> for &Point {
    type Output = Point;

    fn mul(self, k: &BigUint) -> Point {
        Point::mul(self, k)
    }
}

impl AddAssign<&Point> for Point {
    fn add_assign(&mut self, rhs: &Point) {
        *self = Point::add(self, rhs);
    }
}

impl SubAssign<&Point> for Point {
    fn sub_assign(&mut self, rhs: &Point) {
        *self = Point::sub(self, rhs);
    }
}
