//! SEC1 wire format checks across the registry

use primecurve_algorithms::ec::{decode_point, encode_point, DomainParams, Point, PointEncoding};
use primecurve_tests::fixtures::{seeded_rng, REGISTERED};

const FORMATS: [PointEncoding; 3] = [
    PointEncoding::Uncompressed,
    PointEncoding::Compressed,
    PointEncoding::Hybrid,
];

#[test]
fn every_format_round_trips_on_every_curve() {
    let mut rng = seeded_rng(0x5EC1);
    for dom in REGISTERED.iter() {
        for _ in 0..4 {
            let k = dom.random_scalar(&mut rng).unwrap();
            let point = dom.generator().mul(&k);

            for format in FORMATS {
                let wire = encode_point(&point, format).unwrap();
                let back = decode_point(dom.curve(), &wire).unwrap();
                assert_eq!(back, point, "{:?} via {:?}", dom, format);
            }
        }
    }
}

#[test]
fn wire_widths_are_fixed_per_curve() {
    for dom in REGISTERED.iter() {
        let w = dom.curve().field_byte_len();
        let g = dom.generator();

        let unc = encode_point(g, PointEncoding::Uncompressed).unwrap();
        assert_eq!(unc.len(), 1 + 2 * w);
        assert_eq!(unc[0], 0x04);

        let cmp = encode_point(g, PointEncoding::Compressed).unwrap();
        assert_eq!(cmp.len(), 1 + w);
        assert!(cmp[0] == 0x02 || cmp[0] == 0x03);

        let hyb = encode_point(g, PointEncoding::Hybrid).unwrap();
        assert_eq!(hyb.len(), 1 + 2 * w);
        assert!(hyb[0] == 0x06 || hyb[0] == 0x07);
    }
}

#[test]
fn identity_is_a_single_zero_byte() {
    for dom in REGISTERED.iter() {
        let identity = Point::identity(dom.curve());
        for format in FORMATS {
            assert_eq!(encode_point(&identity, format).unwrap(), [0x00]);
        }
        let decoded = decode_point(dom.curve(), &[0x00]).unwrap();
        assert!(decoded.is_identity());
    }
}

#[test]
fn compressed_prefix_tracks_y_parity() {
    for dom in REGISTERED.iter() {
        let g = dom.generator();
        let minus_g = g.negate();

        let enc = encode_point(g, PointEncoding::Compressed).unwrap();
        let neg = encode_point(&minus_g, PointEncoding::Compressed).unwrap();

        // same x-coordinate, opposite parity octets
        assert_eq!(enc[1..], neg[1..], "{:?}", dom);
        assert_ne!(enc[0], neg[0], "{:?}", dom);
        assert_eq!(enc[0] ^ neg[0], 0x01);

        // both decode back to the points they came from
        assert_eq!(decode_point(dom.curve(), &enc).unwrap(), *g);
        assert_eq!(decode_point(dom.curve(), &neg).unwrap(), minus_g);
    }
}

#[test]
fn foreign_width_encodings_are_rejected() {
    let p256 = DomainParams::from_name("secp256r1").unwrap();
    let p384 = DomainParams::from_name("secp384r1").unwrap();

    let wire = encode_point(p384.generator(), PointEncoding::Uncompressed).unwrap();
    assert!(decode_point(p256.curve(), &wire).is_err());

    let wire = encode_point(p256.generator(), PointEncoding::Compressed).unwrap();
    assert!(decode_point(p384.curve(), &wire).is_err());
}

#[test]
fn malformed_encodings_are_rejected() {
    let dom = DomainParams::from_name("secp256r1").unwrap();
    let good = encode_point(dom.generator(), PointEncoding::Uncompressed).unwrap();

    // empty input
    assert!(decode_point(dom.curve(), &[]).is_err());

    // unknown prefix octet
    let mut bad = good.clone();
    bad[0] = 0x05;
    assert!(decode_point(dom.curve(), &bad).is_err());

    // truncated and padded forms
    assert!(decode_point(dom.curve(), &good[..good.len() - 1]).is_err());
    let mut padded = good.clone();
    padded.push(0x00);
    assert!(decode_point(dom.curve(), &padded).is_err());

    // an identity encoding may not carry trailing bytes
    assert!(decode_point(dom.curve(), &[0x00, 0x00]).is_err());

    // flip one bit of y so the pair leaves the curve
    let mut off = good;
    let last = off.len() - 1;
    off[last] ^= 0x01;
    assert!(decode_point(dom.curve(), &off).is_err());
}

#[test]
fn hybrid_parity_must_match_y() {
    let dom = DomainParams::from_name("secp224r1").unwrap();
    let mut wire = encode_point(dom.generator(), PointEncoding::Hybrid).unwrap();

    // claim the opposite parity without touching the coordinates
    wire[0] ^= 0x01;
    assert!(decode_point(dom.curve(), &wire).is_err());
}

#[test]
fn oversized_coordinates_are_rejected() {
    // x = p is one past the largest legal coordinate
    let dom = DomainParams::from_name("secp128r1").unwrap();
    let w = dom.curve().field_byte_len();

    let mut wire = vec![0u8; 1 + 2 * w];
    wire[0] = 0x04;
    let p_bytes = dom.curve().p().to_bytes_be();
    wire[1 + w - p_bytes.len()..1 + w].copy_from_slice(&p_bytes);
    assert!(decode_point(dom.curve(), &wire).is_err());
}
