//! SEC1 point encoding and decoding
//!
//! Uncompressed (0x04 || X || Y), compressed (0x02/0x03 || X) and hybrid
//! (0x06/0x07 || X || Y) formats, with coordinates serialized as
//! fixed-width big-endian field elements. The group identity encodes to
//! the single byte 0x00 in every format, and that byte alone decodes
//! back to the identity.
//!
//! Decoding is strict: length and prefix are checked before any
//! arithmetic, coordinates must lie below the field modulus, and every
//! non-identity result satisfies the curve equation.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use num_integer::Integer;

use crate::ec::curve::CurveParams;
use crate::ec::field::FieldElement;
use crate::ec::point::Point;
use crate::error::{Error, Result};

/// Wire format selector for [`encode_point`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointEncoding {
    /// `04 || X || Y`
    Uncompressed,
    /// `02 || X` for even y, `03 || X` for odd y
    Compressed,
    /// `06 || X || Y` for even y, `07 || X || Y` for odd y
    Hybrid,
}

/// Serialize a point in the requested SEC1 format.
///
/// The identity becomes `[0x00]` regardless of the format argument.
pub fn encode_point(point: &Point, format: PointEncoding) -> Result<Vec<u8>> {
    if point.is_identity() {
        return Ok([0x00u8].to_vec());
    }

    let curve = point.curve();
    let (x, y) = point.to_affine()?;
    let y_odd = y.is_odd();
    let x_bytes = curve.field_element(x).to_bytes();
    let y_bytes = curve.field_element(y).to_bytes();

    let mut out = Vec::with_capacity(1 + 2 * curve.field_byte_len());
    match format {
        PointEncoding::Uncompressed => {
            out.push(0x04);
            out.extend_from_slice(&x_bytes);
            out.extend_from_slice(&y_bytes);
        }
        PointEncoding::Compressed => {
            out.push(if y_odd { 0x03 } else { 0x02 });
            out.extend_from_slice(&x_bytes);
        }
        PointEncoding::Hybrid => {
            out.push(if y_odd { 0x07 } else { 0x06 });
            out.extend_from_slice(&x_bytes);
            out.extend_from_slice(&y_bytes);
        }
    }
    Ok(out)
}

/// Parse a SEC1 point encoding against `curve`.
pub fn decode_point(curve: &CurveParams, bytes: &[u8]) -> Result<Point> {
    if bytes.is_empty() {
        return Err(Error::point("empty encoding"));
    }

    let flen = curve.field_byte_len();
    match bytes[0] {
        0x00 => {
            if bytes.len() != 1 {
                return Err(Error::point("identity encoding carries trailing bytes"));
            }
            Ok(Point::identity(curve))
        }
        0x02 | 0x03 => {
            if bytes.len() != 1 + flen {
                return Err(Error::point("wrong length for a compressed point"));
            }
            let x = decode_coordinate(curve, &bytes[1..])?;
            let rhs = curve.equation_rhs(&x);
            let mut y = rhs
                .sqrt()
                .ok_or(Error::point("compressed x has no matching y"))?;
            let want_odd = bytes[0] == 0x03;
            if y.is_odd() != want_odd {
                y = y.negate();
            }
            Ok(Point::from_affine_unchecked(curve, x, y))
        }
        0x04 => {
            if bytes.len() != 1 + 2 * flen {
                return Err(Error::point("wrong length for an uncompressed point"));
            }
            let x = decode_coordinate(curve, &bytes[1..1 + flen])?;
            let y = decode_coordinate(curve, &bytes[1 + flen..])?;
            Point::from_affine_elements(curve, x, y)
        }
        0x06 | 0x07 => {
            if bytes.len() != 1 + 2 * flen {
                return Err(Error::point("wrong length for a hybrid point"));
            }
            let x = decode_coordinate(curve, &bytes[1..1 + flen])?;
            let y = decode_coordinate(curve, &bytes[1 + flen..])?;
            let want_odd = bytes[0] == 0x07;
            if y.is_odd() != want_odd {
                return Err(Error::point("hybrid prefix disagrees with the y parity"));
            }
            Point::from_affine_elements(curve, x, y)
        }
        _ => Err(Error::point("unknown encoding prefix")),
    }
}

/// Fixed-width coordinate parse, widened to a point-level error.
fn decode_coordinate(curve: &CurveParams, bytes: &[u8]) -> Result<FieldElement> {
    curve
        .field_from_bytes(bytes)
        .map_err(|_| Error::point("field element exceeds the curve field"))
}
