//! Short Weierstrass curve descriptions over GF(p)
//!
//! A curve is y^2 = x^3 + ax + b with p, a, b chosen at runtime. The
//! constructor is the single validation gate: any `CurveParams` that
//! exists has an odd prime-sized modulus, reduced coefficients, and a
//! non-singular equation. Montgomery copies of the coefficients are
//! cached at construction so the projective formulas can run entirely in
//! Montgomery form without re-deriving them.

#[cfg(not(feature = "std"))]
use alloc::sync::Arc;
#[cfg(feature = "std")]
use std::sync::Arc;

use core::fmt;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::ec::field::{FieldCtx, FieldElement};
use crate::error::{validate, Result};

struct CurveInner {
    ctx: Arc<FieldCtx>,
    a: FieldElement,
    b: FieldElement,
    a_mont: FieldElement,
    b_mont: FieldElement,
    order: BigUint,
    cofactor: BigUint,
}

/// Immutable domain description of a short Weierstrass curve
///
/// Cheap to clone; all state lives behind an `Arc`. The group order may
/// be zero, meaning unknown; consumers that need an order (signing, the
/// fixed-shape ladder bound) check for that themselves.
#[derive(Clone)]
pub struct CurveParams {
    inner: Arc<CurveInner>,
}

impl CurveParams {
    /// Validate and build a curve from raw integers.
    ///
    /// `a` and `b` are reduced mod p. A singular equation, one with
    /// discriminant zero (4a^3 + 27b^2 = 0 mod p), is rejected because
    /// its point set is not a group.
    pub fn new(
        p: BigUint,
        a: BigUint,
        b: BigUint,
        order: BigUint,
        cofactor: BigUint,
    ) -> Result<Self> {
        let ctx = Arc::new(FieldCtx::new(p)?);
        let a = FieldElement::new(ctx.clone(), a);
        let b = FieldElement::new(ctx.clone(), b);

        let four = FieldElement::from_u32(ctx.clone(), 4);
        let twenty_seven = FieldElement::from_u32(ctx.clone(), 27);
        let discriminant = &(&four * &(&a.square() * &a)) + &(&twenty_seven * &b.square());
        validate::parameter(
            !discriminant.is_zero(),
            "curve",
            "singular curve: 4a^3 + 27b^2 = 0",
        )?;
        validate::parameter(!cofactor.is_zero(), "cofactor", "cofactor must be positive")?;

        let a_mont = a.to_montgomery();
        let b_mont = b.to_montgomery();

        Ok(CurveParams {
            inner: Arc::new(CurveInner {
                ctx,
                a,
                b,
                a_mont,
                b_mont,
                order,
                cofactor,
            }),
        })
    }

    /// The field modulus p.
    pub fn p(&self) -> &BigUint {
        self.inner.ctx.modulus()
    }

    /// Bit length of the field modulus.
    pub fn p_bits(&self) -> usize {
        self.p().bits() as usize
    }

    /// Fixed serialization width of one field element in bytes.
    pub fn field_byte_len(&self) -> usize {
        self.inner.ctx.byte_len()
    }

    /// Coefficient a, standard representation.
    pub fn a(&self) -> &FieldElement {
        &self.inner.a
    }

    /// Coefficient b, standard representation.
    pub fn b(&self) -> &FieldElement {
        &self.inner.b
    }

    /// Cached Montgomery copy of a.
    pub fn a_mont(&self) -> &FieldElement {
        &self.inner.a_mont
    }

    /// Cached Montgomery copy of b.
    pub fn b_mont(&self) -> &FieldElement {
        &self.inner.b_mont
    }

    /// Group order n, zero when unknown.
    pub fn order(&self) -> &BigUint {
        &self.inner.order
    }

    /// Cofactor h.
    pub fn cofactor(&self) -> &BigUint {
        &self.inner.cofactor
    }

    pub(crate) fn ctx(&self) -> &Arc<FieldCtx> {
        &self.inner.ctx
    }

    /// An element of this curve's field, reduced mod p.
    pub fn field_element(&self, v: BigUint) -> FieldElement {
        FieldElement::new(self.inner.ctx.clone(), v)
    }

    /// Strict fixed-width decoder into this curve's field.
    pub fn field_from_bytes(&self, bytes: &[u8]) -> Result<FieldElement> {
        FieldElement::from_bytes(&self.inner.ctx, bytes)
    }

    /// The curve equation right-hand side x^3 + ax + b.
    pub(crate) fn equation_rhs(&self, x: &FieldElement) -> FieldElement {
        let x3 = &x.square() * x;
        &(&x3 + &(&self.inner.a * x)) + &self.inner.b
    }

    pub(crate) fn same_curve(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self == other
    }
}

impl PartialEq for CurveParams {
    /// Curves compare by equation only: same p, a, b. Order and cofactor
    /// are metadata about the group, not the equation.
    fn eq(&self, other: &Self) -> bool {
        self.p() == other.p() && self.a() == other.a() && self.b() == other.b()
    }
}

impl Eq for CurveParams {}

impl fmt::Debug for CurveParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurveParams")
            .field("p", &format_args!("0x{:x}", self.p()))
            .field("a", self.a())
            .field("b", self.b())
            .finish()
    }
}
