//! Property-based checks for the arithmetic and scheme layers

use num_bigint::BigUint;
use primecurve_algorithms::ec::{decode_point, encode_point, DomainParams, PointEncoding};
use primecurve_ka::{agree, EckaegKeyPair};
use primecurve_sign::EcdsaKeyPair;
use primecurve_tests::fixtures::{seeded_rng, REGISTERED};
use proptest::prelude::*;

/// Any registered domain
fn registered_domain() -> impl Strategy<Value = &'static DomainParams> {
    (0..REGISTERED.len()).prop_map(|i| &REGISTERED[i])
}

/// Map raw bytes into a scalar in [1, n-1]
fn scalar_for(n: &BigUint, seed: [u8; 66]) -> BigUint {
    let span = n - 1u32;
    BigUint::from_bytes_be(&seed) % span + 1u32
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn scalar_multiplication_distributes(
        dom in registered_domain(),
        a in any::<[u8; 66]>(),
        b in any::<[u8; 66]>(),
    ) {
        let n = dom.order();
        let ka = scalar_for(n, a);
        let kb = scalar_for(n, b);
        let sum = (&ka + &kb) % n;

        let lhs = dom.generator().mul(&sum);
        let rhs = dom.generator().mul(&ka).add(&dom.generator().mul(&kb));
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn fixed_shape_ladder_matches_double_and_add(
        dom in registered_domain(),
        seed in any::<[u8; 66]>(),
    ) {
        let n = dom.order();
        let k = scalar_for(n, seed);
        let bound = n - 1u32;

        let fast = dom.generator().mul(&k);
        let fixed = dom.generator().mul_secure(&k, n, &bound);
        prop_assert_eq!(fast, fixed);
    }

    #[test]
    fn sec1_round_trips(
        dom in registered_domain(),
        seed in any::<[u8; 66]>(),
        format in prop::sample::select(vec![
            PointEncoding::Uncompressed,
            PointEncoding::Compressed,
            PointEncoding::Hybrid,
        ]),
    ) {
        let k = scalar_for(dom.order(), seed);
        let point = dom.generator().mul(&k);

        let wire = encode_point(&point, format).unwrap();
        let back = decode_point(dom.curve(), &wire).unwrap();
        prop_assert_eq!(back, point);
    }

    #[test]
    fn field_inversion_cancels(
        dom in registered_domain(),
        seed in any::<[u8; 66]>(),
    ) {
        let a = dom.curve().field_element(BigUint::from_bytes_be(&seed));
        prop_assume!(!a.is_zero());

        let inv = a.invert().unwrap();
        prop_assert!((&a * &inv).is_one());
    }

    #[test]
    fn sqrt_inverts_squaring(
        dom in registered_domain(),
        seed in any::<[u8; 66]>(),
    ) {
        let a = dom.curve().field_element(BigUint::from_bytes_be(&seed));
        let root = a.square().sqrt().unwrap();
        prop_assert!(root == a || root == a.negate());
    }

    #[test]
    fn montgomery_form_is_transparent(
        dom in registered_domain(),
        x in any::<[u8; 66]>(),
        y in any::<[u8; 66]>(),
    ) {
        let a = dom.curve().field_element(BigUint::from_bytes_be(&x));
        let b = dom.curve().field_element(BigUint::from_bytes_be(&y));

        let plain = &a * &b;
        let mixed = &a.to_montgomery() * &b;
        prop_assert_eq!(plain, mixed);
    }

    #[test]
    fn signing_round_trips(
        seed in any::<u64>(),
        digest in prop::collection::vec(any::<u8>(), 0..80),
    ) {
        let mut rng = seeded_rng(seed);
        let dom = &REGISTERED[(seed % REGISTERED.len() as u64) as usize];

        let keypair = EcdsaKeyPair::generate(dom, &mut rng).unwrap();
        let sig = keypair.sign_digest(&digest, &mut rng).unwrap();
        prop_assert!(keypair.public().verify_digest(&digest, &sig).unwrap());
    }

    #[test]
    fn agreement_is_symmetric(seed in any::<u64>()) {
        let mut rng = seeded_rng(seed);
        let dom = &REGISTERED[(seed % REGISTERED.len() as u64) as usize];

        let alice = EckaegKeyPair::generate(dom, &mut rng).unwrap();
        let bob = EckaegKeyPair::generate(dom, &mut rng).unwrap();

        let ab = agree(alice.secret(), bob.public()).unwrap();
        let ba = agree(bob.secret(), alice.public()).unwrap();
        prop_assert_eq!(&*ab, &*ba);
    }
}
