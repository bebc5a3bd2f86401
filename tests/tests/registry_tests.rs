//! Registry-wide checks over every bundled curve

use num_traits::One;
use primecurve_algorithms::ec::DomainParams;
use primecurve_tests::fixtures::REGISTERED;

#[test]
fn registry_lists_the_expected_curves() {
    let names = DomainParams::registered();
    assert_eq!(names.len(), 8);
    for name in [
        "secp112r1",
        "secp128r1",
        "secp160r1",
        "secp192r1",
        "secp224r1",
        "secp256r1",
        "secp384r1",
        "secp521r1",
    ] {
        assert!(names.contains(&name), "missing {}", name);
    }
}

#[test]
fn every_generator_has_the_stated_order() {
    for dom in REGISTERED.iter() {
        let product = dom.generator().mul(dom.order());
        assert!(product.is_identity(), "n*G != O on {:?}", dom);
    }
}

#[test]
fn every_registered_curve_has_cofactor_one() {
    for dom in REGISTERED.iter() {
        assert!(dom.cofactor().is_one(), "cofactor != 1 on {:?}", dom);
    }
}

#[test]
fn generators_satisfy_the_curve_equation() {
    // from_affine inside the registry loader already checks this; here we
    // recheck through public accessors
    for dom in REGISTERED.iter() {
        let x = dom.curve().field_element(dom.generator().affine_x().unwrap());
        let y = dom.curve().field_element(dom.generator().affine_y().unwrap());
        let lhs = y.square();
        let rhs = &(&(&x.square() * &x) + &(dom.curve().a() * &x)) + dom.curve().b();
        assert_eq!(lhs, rhs, "G off curve on {:?}", dom);
    }
}

#[test]
fn oid_lookup_agrees_with_name_lookup() {
    for dom in REGISTERED.iter() {
        let oid = dom.oid().expect("registered curves carry an OID");
        let again = DomainParams::from_oid(oid).unwrap();
        assert_eq!(again, *dom);
        assert_eq!(again.name(), dom.name());
        assert_eq!(again.oid(), Some(oid));
    }
}

#[test]
fn known_oids_resolve() {
    let p256 = DomainParams::from_oid("1.2.840.10045.3.1.7").unwrap();
    assert_eq!(p256.name(), Some("secp256r1"));

    let p384 = DomainParams::from_oid("1.3.132.0.34").unwrap();
    assert_eq!(p384.name(), Some("secp384r1"));

    assert!(DomainParams::from_oid("1.2.3.4").is_err());
    assert!(DomainParams::from_name("secp999r1").is_err());
}

#[test]
fn field_widths_track_the_modulus() {
    for dom in REGISTERED.iter() {
        let expected = (dom.curve().p_bits() + 7) / 8;
        assert_eq!(dom.curve().field_byte_len(), expected, "{:?}", dom);
    }
}

#[test]
fn orders_can_exceed_the_field_width() {
    // secp160r1 is the classic case: a 160-bit field with a 161-bit order
    let dom = DomainParams::from_name("secp160r1").unwrap();
    assert_eq!(dom.curve().p_bits(), 160);
    assert_eq!(dom.order().bits(), 161);
}
