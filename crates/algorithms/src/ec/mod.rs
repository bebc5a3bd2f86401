//! Elliptic curve arithmetic over runtime prime fields
//!
//! Short Weierstrass curves y^2 = x^3 + ax + b with p, a, b supplied at
//! runtime as arbitrary-precision integers. The layers build on each
//! other: field elements with an optional Montgomery representation,
//! validated curve descriptions, Jacobian projective points with
//! variable-time and fixed-shape scalar multiplication, SEC1 wire
//! encoding, and named domain parameter sets.

pub mod curve;
pub mod domain;
pub mod encoding;
pub mod field;
pub mod point;

pub use curve::CurveParams;
pub use domain::DomainParams;
pub use encoding::{decode_point, encode_point, PointEncoding};
pub use field::FieldElement;
pub use point::Point;
