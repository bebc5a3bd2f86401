//! End-to-end key agreement flows across the registry

use primecurve_algorithms::ec::{DomainParams, PointEncoding};
use primecurve_api::KeyAgreement;
use primecurve_ka::{agree, Eckaeg, EckaegKeyPair, EckaegPublicKey};
use primecurve_sign::EcdsaKeyPair;
use primecurve_tests::fixtures::{seeded_rng, AGREEMENT_P256, REGISTERED};

#[test]
fn agreement_on_every_registered_curve() {
    let mut rng = seeded_rng(0xA6EE);
    for dom in REGISTERED.iter() {
        let alice = EckaegKeyPair::generate(dom, &mut rng).unwrap();
        let bob = EckaegKeyPair::generate(dom, &mut rng).unwrap();

        let ab = agree(alice.secret(), bob.public()).unwrap();
        let ba = agree(bob.secret(), alice.public()).unwrap();
        assert_eq!(*ab, *ba, "sides disagree on {:?}", dom);
        assert_eq!(ab.len(), dom.curve().field_byte_len(), "{:?}", dom);
    }
}

#[test]
fn known_answer_agrees() {
    let dom = DomainParams::from_name(AGREEMENT_P256.curve).unwrap();
    let alice =
        EckaegKeyPair::from_secret_bytes(&dom, &hex::decode(AGREEMENT_P256.da).unwrap()).unwrap();
    let bob =
        EckaegKeyPair::from_secret_bytes(&dom, &hex::decode(AGREEMENT_P256.db).unwrap()).unwrap();

    let ab = agree(alice.secret(), bob.public()).unwrap();
    assert_eq!(hex::encode(&*ab), AGREEMENT_P256.shared_x);
}

#[test]
fn peer_keys_survive_transport() {
    let mut rng = seeded_rng(0x9EE8);
    let dom = DomainParams::from_name("secp384r1").unwrap();
    let alice = EckaegKeyPair::generate(&dom, &mut rng).unwrap();
    let bob = EckaegKeyPair::generate(&dom, &mut rng).unwrap();

    // Bob only ever sees Alice's compressed wire encoding
    let wire = alice.public().to_bytes(PointEncoding::Compressed).unwrap();
    let alice_for_bob = EckaegPublicKey::from_bytes(&dom, &wire).unwrap();

    let ab = agree(alice.secret(), bob.public()).unwrap();
    let ba = agree(bob.secret(), &alice_for_bob).unwrap();
    assert_eq!(*ab, *ba);
}

#[test]
fn signing_and_agreement_keys_share_a_public_point() {
    // one secret scalar yields the same public point in both schemes
    let dom = DomainParams::from_name("secp256r1").unwrap();
    let secret = hex::decode(AGREEMENT_P256.da).unwrap();

    let signing = EcdsaKeyPair::from_secret_bytes(&dom, &secret).unwrap();
    let agreeing = EckaegKeyPair::from_secret_bytes(&dom, &secret).unwrap();
    assert_eq!(signing.public().point(), agreeing.public().point());
}

#[test]
fn cross_curve_agreement_is_rejected() {
    let mut rng = seeded_rng(0xBAD);
    let alice = EckaegKeyPair::generate(
        &DomainParams::from_name("secp256r1").unwrap(),
        &mut rng,
    )
    .unwrap();
    let stranger = EckaegKeyPair::generate(
        &DomainParams::from_name("secp224r1").unwrap(),
        &mut rng,
    )
    .unwrap();

    assert!(agree(alice.secret(), stranger.public()).is_err());
}

#[test]
fn scheme_trait_spans_curves() {
    let mut rng = seeded_rng(0x70A6);
    for dom in REGISTERED.iter() {
        let scheme = Eckaeg::new(dom.clone()).unwrap();
        let alice = scheme.keypair(&mut rng).unwrap();
        let bob = scheme.keypair(&mut rng).unwrap();

        let ab = scheme
            .agree(&scheme.secret_key(&alice), &scheme.public_key(&bob))
            .unwrap();
        let ba = scheme
            .agree(&scheme.secret_key(&bob), &scheme.public_key(&alice))
            .unwrap();
        assert_eq!(*ab, *ba, "{:?}", dom);
        assert_eq!(scheme.name(), "ECKAEG");
    }
}
