//! SECG/NIST prime-field curve parameters
//!
//! Hex strings are big-endian and parsed by the domain registry at lookup
//! time. Every entry has been checked against the generator equation and
//! group order before inclusion.

/// A named curve description: all values are big-endian hex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveSpec {
    /// Canonical SECG name
    pub name: &'static str,
    /// Dotted-decimal object identifier
    pub oid: &'static str,
    /// Field prime
    pub p: &'static str,
    /// Curve coefficient a
    pub a: &'static str,
    /// Curve coefficient b
    pub b: &'static str,
    /// Generator x-coordinate
    pub gx: &'static str,
    /// Generator y-coordinate
    pub gy: &'static str,
    /// Group order
    pub n: &'static str,
    /// Cofactor
    pub h: u32,
}

/// secp112r1: 112-bit prime field (OID 1.3.132.0.6)
pub const SECP112R1: CurveSpec = CurveSpec {
    name: "secp112r1",
    oid: "1.3.132.0.6",
    p: "DB7C2ABF62E35E668076BEAD208B",
    a: "DB7C2ABF62E35E668076BEAD2088",
    b: "659EF8BA043916EEDE8911702B22",
    gx: "09487239995A5EE76B55F9C2F098",
    gy: "A89CE5AF8724C0A23E0E0FF77500",
    n: "DB7C2ABF62E35E7628DFAC6561C5",
    h: 1,
};

/// secp128r1: 128-bit prime field (OID 1.3.132.0.28)
pub const SECP128R1: CurveSpec = CurveSpec {
    name: "secp128r1",
    oid: "1.3.132.0.28",
    p: "FFFFFFFDFFFFFFFFFFFFFFFFFFFFFFFF",
    a: "FFFFFFFDFFFFFFFFFFFFFFFFFFFFFFFC",
    b: "E87579C11079F43DD824993C2CEE5ED3",
    gx: "161FF7528B899B2D0C28607CA52C5B86",
    gy: "CF5AC8395BAFEB13C02DA292DDED7A83",
    n: "FFFFFFFE0000000075A30D1B9038A115",
    h: 1,
};

/// secp160r1: 160-bit prime field (OID 1.3.132.0.8)
pub const SECP160R1: CurveSpec = CurveSpec {
    name: "secp160r1",
    oid: "1.3.132.0.8",
    p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF7FFFFFFF",
    a: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF7FFFFFFC",
    b: "1C97BEFC54BD7A8B65ACF89F81D4D4ADC565FA45",
    gx: "4A96B5688EF573284664698968C38BB913CBFC82",
    gy: "23A628553168947D59DCC912042351377AC5FB32",
    n: "0100000000000000000001F4C8F927AED3CA752257",
    h: 1,
};

/// secp192r1: 192-bit prime field (OID 1.2.840.10045.3.1.1)
pub const SECP192R1: CurveSpec = CurveSpec {
    name: "secp192r1",
    oid: "1.2.840.10045.3.1.1",
    p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFF",
    a: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFC",
    b: "64210519E59C80E70FA7E9AB72243049FEB8DEECC146B9B1",
    gx: "188DA80EB03090F67CBF20EB43A18800F4FF0AFD82FF1012",
    gy: "07192B95FFC8DA78631011ED6B24CDD573F977A11E794811",
    n: "FFFFFFFFFFFFFFFFFFFFFFFF99DEF836146BC9B1B4D22831",
    h: 1,
};

/// secp224r1: 224-bit prime field (OID 1.3.132.0.33)
pub const SECP224R1: CurveSpec = CurveSpec {
    name: "secp224r1",
    oid: "1.3.132.0.33",
    p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000001",
    a: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFE",
    b: "B4050A850C04B3ABF54132565044B0B7D7BFD8BA270B39432355FFB4",
    gx: "B70E0CBD6BB4BF7F321390B94A03C1D356C21122343280D6115C1D21",
    gy: "BD376388B5F723FB4C22DFE6CD4375A05A07476444D5819985007E34",
    n: "FFFFFFFFFFFFFFFFFFFFFFFFFFFF16A2E0B8F03E13DD29455C5C2A3D",
    h: 1,
};

/// secp256r1: 256-bit prime field (OID 1.2.840.10045.3.1.7)
pub const SECP256R1: CurveSpec = CurveSpec {
    name: "secp256r1",
    oid: "1.2.840.10045.3.1.7",
    p: "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF",
    a: "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFC",
    b: "5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B",
    gx: "6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296",
    gy: "4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5",
    n: "FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551",
    h: 1,
};

/// secp384r1: 384-bit prime field (OID 1.3.132.0.34)
pub const SECP384R1: CurveSpec = CurveSpec {
    name: "secp384r1",
    oid: "1.3.132.0.34",
    p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFF0000000000000000FFFFFFFF",
    a: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFF0000000000000000FFFFFFFC",
    b: "B3312FA7E23EE7E4988E056BE3F82D19181D9C6EFE8141120314088F5013875AC656398D8A2ED19D2A85C8EDD3EC2AEF",
    gx: "AA87CA22BE8B05378EB1C71EF320AD746E1D3B628BA79B9859F741E082542A385502F25DBF55296C3A545E3872760AB7",
    gy: "3617DE4A96262C6F5D9E98BF9292DC29F8F41DBD289A147CE9DA3113B5F0B8C00A60B1CE1D7E819D7A431D7C90EA0E5F",
    n: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFC7634D81F4372DDF581A0DB248B0A77AECEC196ACCC52973",
    h: 1,
};

/// secp521r1: 521-bit prime field (OID 1.3.132.0.35)
pub const SECP521R1: CurveSpec = CurveSpec {
    name: "secp521r1",
    oid: "1.3.132.0.35",
    p: "01FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF",
    a: "01FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFC",
    b: "0051953EB9618E1C9A1F929A21A0B68540EEA2DA725B99B315F3B8B489918EF109E156193951EC7E937B1652C0BD3BB1BF073573DF883D2C34F1EF451FD46B503F00",
    gx: "00C6858E06B70404E9CD9E3ECB662395B4429C648139053FB521F828AF606B4D3DBAA14B5E77EFE75928FE1DC127A2FFA8DE3348B3C1856A429BF97E7E31C2E5BD66",
    gy: "011839296A789A3BC0045C8A5FB42C7D1BD998F54449579B446817AFBD17273E662C97EE72995EF42640C550B9013FAD0761353C7086A272C24088BE94769FD16650",
    n: "01FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFA51868783BF2F966B7FCC0148F709A5D03BB5C9B8899C47AEBB6FB71E91386409",
    h: 1,
};

/// Every curve this registry knows about
pub const REGISTRY: &[CurveSpec] = &[
    SECP112R1,
    SECP128R1,
    SECP160R1,
    SECP192R1,
    SECP224R1,
    SECP256R1,
    SECP384R1,
    SECP521R1,
];

/// Names of every registered curve, in registry order
pub const NAMES: &[&str] = &[
    "secp112r1",
    "secp128r1",
    "secp160r1",
    "secp192r1",
    "secp224r1",
    "secp256r1",
    "secp384r1",
    "secp521r1",
];

/// Look up a curve by its SECG name
pub fn by_name(name: &str) -> Option<&'static CurveSpec> {
    REGISTRY.iter().find(|c| c.name == name)
}

/// Look up a curve by dotted-decimal OID
pub fn by_oid(oid: &str) -> Option<&'static CurveSpec> {
    REGISTRY.iter().find(|c| c.oid == oid)
}
