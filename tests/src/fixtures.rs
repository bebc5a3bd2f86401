//! Known answers and helpers shared across the integration suites

use num_bigint::BigUint;
use num_traits::Num;
use once_cell::sync::Lazy;
use primecurve_algorithms::ec::DomainParams;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Parse a big-endian hex string into a `BigUint`
pub fn biguint(hex: &str) -> BigUint {
    BigUint::from_str_radix(hex, 16).expect("fixture hex")
}

/// Deterministic RNG so randomized suites reproduce failures
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Every registered domain, built once per process
pub static REGISTERED: Lazy<Vec<DomainParams>> = Lazy::new(|| {
    DomainParams::registered()
        .iter()
        .map(|name| DomainParams::from_name(name).expect("registry entry"))
        .collect()
});

/// An ECDSA known answer: key pair, 32-byte digest and a valid signature
pub struct EcdsaVector {
    /// Registry name of the curve
    pub curve: &'static str,
    /// Secret scalar, big-endian hex
    pub d: &'static str,
    /// Public point x-coordinate
    pub qx: &'static str,
    /// Public point y-coordinate
    pub qy: &'static str,
    /// Prehashed message digest
    pub digest: &'static str,
    /// Signature component r
    pub r: &'static str,
    /// Signature component s
    pub s: &'static str,
}

/// A valid secp256r1 signature over a fixed digest
pub const ECDSA_P256: EcdsaVector = EcdsaVector {
    curve: "secp256r1",
    d: "c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721",
    qx: "60fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6",
    qy: "7903fe1008b8bc99a41ae9e95628bc64f2f1b20c2d7e9f5177a3c294d4462299",
    digest: "44acf6b7e36c1342c2c5897204fe09504e1e2efb1a900377dbc4e7a6a133ec56",
    r: "efd48b2aacb6a8fd1140dd9cd45e81d69d2c877b56aaf991c34d0ea84eaf3716",
    s: "60557d87371d1f0e9bf4bbfb8191810f9f2c74f1abd83179d80983cd8f9f9dd7",
};

/// A static agreement known answer: two key pairs and the shared x-coordinate
pub struct AgreementVector {
    /// Registry name of the curve
    pub curve: &'static str,
    /// First party's secret scalar
    pub da: &'static str,
    /// Second party's secret scalar
    pub db: &'static str,
    /// Shared secret, the x-coordinate both sides derive
    pub shared_x: &'static str,
}

/// secp256r1 agreement answer
pub const AGREEMENT_P256: AgreementVector = AgreementVector {
    curve: "secp256r1",
    da: "81db1ee100150ff2ea338d708271be38300cb54241d79950f77b063039804f1d",
    db: "55e40bc41e37e3e2ad25c3c6654511ffa8474a91a0032087593852d3e7d76bd3",
    shared_x: "2103b26567aa0d4a1af8c7bb24d395f7ff2370178d51e932857d67e803091f2b",
};
