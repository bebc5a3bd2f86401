//! End-to-end signing flows across the registry

use primecurve_api::Signature as SignatureScheme;
use primecurve_sign::{DigestPolicy, Ecdsa, EcdsaKeyPair, EcdsaPublicKey, Signature};
use primecurve_tests::fixtures::{biguint, seeded_rng, ECDSA_P256, REGISTERED};

#[test]
fn sign_verify_on_every_registered_curve() {
    let mut rng = seeded_rng(0x5160);
    for dom in REGISTERED.iter() {
        let keypair = EcdsaKeyPair::generate(dom, &mut rng).unwrap();
        let digest = [0xC3; 32];

        let sig = keypair.sign_digest(&digest, &mut rng).unwrap();
        assert!(
            keypair.public().verify_digest(&digest, &sig).unwrap(),
            "round trip failed on {:?}",
            dom
        );

        let mut tampered = digest;
        tampered[7] ^= 0x10;
        assert!(
            !keypair.public().verify_digest(&tampered, &sig).unwrap(),
            "tampered digest accepted on {:?}",
            dom
        );
    }
}

#[test]
fn known_answer_verifies() {
    let dom = primecurve_algorithms::ec::DomainParams::from_name(ECDSA_P256.curve).unwrap();
    let keypair =
        EcdsaKeyPair::from_secret_bytes(&dom, &hex::decode(ECDSA_P256.d).unwrap()).unwrap();

    assert_eq!(
        keypair.public().point().affine_x().unwrap(),
        biguint(ECDSA_P256.qx)
    );
    assert_eq!(
        keypair.public().point().affine_y().unwrap(),
        biguint(ECDSA_P256.qy)
    );

    let digest = hex::decode(ECDSA_P256.digest).unwrap();
    let sig = Signature::new(biguint(ECDSA_P256.r), biguint(ECDSA_P256.s));
    assert!(keypair.public().verify_digest(&digest, &sig).unwrap());
}

#[test]
fn any_corrupted_signature_byte_fails_verification() {
    let dom = primecurve_algorithms::ec::DomainParams::from_name(ECDSA_P256.curve).unwrap();
    let keypair =
        EcdsaKeyPair::from_secret_bytes(&dom, &hex::decode(ECDSA_P256.d).unwrap()).unwrap();
    let digest = hex::decode(ECDSA_P256.digest).unwrap();
    let sig = Signature::new(biguint(ECDSA_P256.r), biguint(ECDSA_P256.s));
    assert!(keypair.public().verify_digest(&digest, &sig).unwrap());

    let width = ((dom.order().bits() as usize) + 7) / 8;
    let wire = sig.to_raw(width).unwrap();
    for i in 0..wire.len() {
        let mut corrupted = wire.clone();
        corrupted[i] ^= 0xFF;
        let bad = Signature::from_raw(&corrupted, width).unwrap();
        assert!(
            !keypair.public().verify_digest(&digest, &bad).unwrap(),
            "flip at byte {} accepted",
            i
        );
    }
}

#[test]
fn der_survives_transport() {
    let mut rng = seeded_rng(0xDE4);
    for name in ["secp112r1", "secp256r1", "secp521r1"] {
        let dom = primecurve_algorithms::ec::DomainParams::from_name(name).unwrap();
        let keypair = EcdsaKeyPair::generate(&dom, &mut rng).unwrap();
        let digest = [0x11; 24];

        let sig = keypair.sign_digest(&digest, &mut rng).unwrap();
        let wire = sig.to_der();
        let restored = Signature::from_der(&wire).unwrap();
        assert_eq!(restored, sig);
        assert!(keypair.public().verify_digest(&digest, &restored).unwrap());
    }
}

#[test]
fn public_keys_survive_transport() {
    use primecurve_algorithms::ec::PointEncoding;

    let mut rng = seeded_rng(0x9B);
    for dom in REGISTERED.iter() {
        let keypair = EcdsaKeyPair::generate(dom, &mut rng).unwrap();
        let digest = [0x3C; 32];
        let sig = keypair.sign_digest(&digest, &mut rng).unwrap();

        for format in [
            PointEncoding::Uncompressed,
            PointEncoding::Compressed,
            PointEncoding::Hybrid,
        ] {
            let wire = keypair.public().to_bytes(format).unwrap();
            let imported = EcdsaPublicKey::from_bytes(dom, &wire).unwrap();
            assert!(imported.verify_digest(&digest, &sig).unwrap(), "{:?}", dom);
        }
    }
}

#[test]
fn digest_policy_is_enforced_end_to_end() {
    let dom = primecurve_algorithms::ec::DomainParams::from_name("secp160r1").unwrap();
    let mut rng = seeded_rng(0xF00);
    let keypair = EcdsaKeyPair::generate(&dom, &mut rng).unwrap();

    // 32 bytes against a 21-byte order: truncation accepts, strict rejects
    let digest = [0x6E; 32];
    let sig = keypair
        .sign_digest_with(DigestPolicy::TruncateToOrder, &digest, &mut rng)
        .unwrap();
    assert!(keypair.public().verify_digest(&digest, &sig).unwrap());
    assert!(keypair
        .sign_digest_with(DigestPolicy::RejectOversized, &digest, &mut rng)
        .is_err());
}

#[test]
fn scheme_trait_spans_curves() {
    let mut rng = seeded_rng(0x7001);
    for dom in REGISTERED.iter() {
        let scheme = Ecdsa::new(dom.clone()).unwrap();
        let keypair = scheme.keypair(&mut rng).unwrap();
        let digest = [0x55; 20];

        let sig = scheme
            .sign(&digest, &scheme.secret_key(&keypair), &mut rng)
            .unwrap();
        scheme
            .verify(&digest, &sig, &scheme.public_key(&keypair))
            .unwrap();
        assert_eq!(scheme.name(), "ECDSA");
    }
}
