//! ECDSA signature container with DER and fixed-width codecs

use crate::error::{Error, Result};
use alloc::format;
use alloc::vec::Vec;
use num_bigint::BigUint;
use primecurve_api::{Result as ApiResult, Serialize};

/// An ECDSA signature pair (r, s)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    /// The r component, x(k·G) mod n
    pub r: BigUint,
    /// The s component, k⁻¹(e + r·d) mod n
    pub s: BigUint,
}

impl Signature {
    /// Assemble a signature from its components
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Signature { r, s }
    }

    /// Serialize as ASN.1 DER: `SEQUENCE { INTEGER r, INTEGER s }`
    pub fn to_der(&self) -> Vec<u8> {
        let r = encode_integer(&self.r);
        let s = encode_integer(&self.s);
        let content_len = r.len() + s.len();

        let mut der = Vec::with_capacity(content_len + 3);
        der.push(0x30);
        push_length(&mut der, content_len);
        der.extend_from_slice(&r);
        der.extend_from_slice(&s);
        der
    }

    /// Parse a DER-encoded signature
    ///
    /// Strict: trailing bytes, non-minimal integer or length encodings,
    /// and negative integers are all rejected.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let mut reader = Reader::new(der);

        if reader.byte()? != 0x30 {
            return Err(Error::Encoding("missing DER SEQUENCE tag".into()));
        }
        let seq_len = reader.length()?;
        if seq_len != reader.remaining() {
            return Err(Error::Encoding(
                "SEQUENCE length disagrees with the input".into(),
            ));
        }

        let r = read_integer(&mut reader)?;
        let s = read_integer(&mut reader)?;

        if reader.remaining() != 0 {
            return Err(Error::Encoding("trailing bytes after the signature".into()));
        }
        Ok(Signature { r, s })
    }

    /// Fixed-width encoding: r and s big-endian, `width` bytes each
    pub fn to_raw(&self, width: usize) -> Result<Vec<u8>> {
        let r = self.r.to_bytes_be();
        let s = self.s.to_bytes_be();
        if r.len() > width || s.len() > width {
            return Err(Error::Encoding(format!(
                "signature component exceeds the {}-byte width",
                width
            )));
        }

        let mut out = Vec::new();
        out.resize(2 * width, 0u8);
        out[width - r.len()..width].copy_from_slice(&r);
        out[2 * width - s.len()..].copy_from_slice(&s);
        Ok(out)
    }

    /// Parse a fixed-width `r || s` encoding of `width` bytes apiece
    pub fn from_raw(bytes: &[u8], width: usize) -> Result<Self> {
        if bytes.len() != 2 * width {
            return Err(Error::InvalidSignatureSize {
                expected: 2 * width,
                actual: bytes.len(),
            });
        }
        Ok(Signature {
            r: BigUint::from_bytes_be(&bytes[..width]),
            s: BigUint::from_bytes_be(&bytes[width..]),
        })
    }
}

impl Serialize for Signature {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Self::from_der(bytes).map_err(Into::into)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.to_der()
    }
}

/// `INTEGER` TLV with minimal-length content; a leading zero octet is
/// added only when the high bit would read as a sign bit
fn encode_integer(v: &BigUint) -> Vec<u8> {
    // to_bytes_be renders zero as a single 0x00 octet, which is already
    // its minimal DER content
    let body = v.to_bytes_be();
    let pad = body[0] & 0x80 != 0;

    let mut out = Vec::with_capacity(body.len() + 3);
    out.push(0x02);
    push_length(&mut out, body.len() + usize::from(pad));
    if pad {
        out.push(0x00);
    }
    out.extend_from_slice(&body);
    out
}

/// DER length octets; components of supported curves never exceed the
/// single-byte long form
fn push_length(out: &mut Vec<u8>, len: usize) {
    if len < 0x80 {
        out.push(len as u8);
    } else {
        out.push(0x81);
        out.push(len as u8);
    }
}

fn read_integer(reader: &mut Reader<'_>) -> Result<BigUint> {
    if reader.byte()? != 0x02 {
        return Err(Error::Encoding("missing DER INTEGER tag".into()));
    }
    let len = reader.length()?;
    if len == 0 {
        return Err(Error::Encoding("empty DER INTEGER".into()));
    }
    let content = reader.take(len)?;
    if content[0] & 0x80 != 0 {
        return Err(Error::Encoding("negative DER INTEGER".into()));
    }
    if len > 1 && content[0] == 0x00 && content[1] & 0x80 == 0 {
        return Err(Error::Encoding("non-minimal DER INTEGER".into()));
    }
    Ok(BigUint::from_bytes_be(content))
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Reader { bytes, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    fn byte(&mut self) -> Result<u8> {
        let b = *self
            .bytes
            .get(self.pos)
            .ok_or_else(|| Error::Encoding("truncated DER input".into()))?;
        self.pos += 1;
        Ok(b)
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(Error::Encoding("truncated DER input".into()));
        }
        let slice = &self.bytes[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Short form, or the one-byte long form `0x81` carrying 128..=255
    fn length(&mut self) -> Result<usize> {
        let first = self.byte()?;
        if first < 0x80 {
            return Ok(first as usize);
        }
        if first == 0x81 {
            let value = self.byte()?;
            if value < 0x80 {
                return Err(Error::Encoding("non-minimal DER length".into()));
            }
            return Ok(value as usize);
        }
        Err(Error::Encoding("unsupported DER length form".into()))
    }
}

impl core::fmt::Display for Signature {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "(r = {:x}, s = {:x})", self.r, self.s)
    }
}
