// File: crates/algorithms/benches/ec_ops.rs
// Benchmarks for field, point and encoding operations on a 256-bit curve

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use num_bigint::BigUint;
use primecurve_algorithms::ec::{
    decode_point, encode_point, DomainParams, FieldElement, Point, PointEncoding,
};
use rand::rngs::OsRng;

fn domain() -> DomainParams {
    DomainParams::from_name("secp256r1").unwrap()
}

/// Generate a random scalar below the group order
fn random_scalar(dom: &DomainParams) -> BigUint {
    dom.random_scalar(&mut OsRng).unwrap()
}

/// Generate a random field element for benchmarking
fn random_field_element(dom: &DomainParams) -> FieldElement {
    dom.curve().field_element(random_scalar(dom))
}

/// Generate a random point on the curve
fn random_point(dom: &DomainParams) -> Point {
    dom.generator().mul(&random_scalar(dom))
}

/// Benchmark field element operations
fn bench_field_operations(c: &mut Criterion) {
    let dom = domain();
    let mut group = c.benchmark_group("ec-field");

    // Field element addition
    group.bench_function("addition", |b| {
        b.iter_batched(
            || (random_field_element(&dom), random_field_element(&dom)),
            |(a, b)| black_box(a.add(&b)),
            BatchSize::SmallInput,
        )
    });

    // Field element multiplication in the standard representation
    group.bench_function("multiplication", |b| {
        b.iter_batched(
            || (random_field_element(&dom), random_field_element(&dom)),
            |(a, b)| black_box(a.mul(&b)),
            BatchSize::SmallInput,
        )
    });

    // Field element multiplication with both operands in Montgomery form
    group.bench_function("multiplication_montgomery", |b| {
        b.iter_batched(
            || {
                (
                    random_field_element(&dom).to_montgomery(),
                    random_field_element(&dom).to_montgomery(),
                )
            },
            |(a, b)| black_box(a.mul(&b)),
            BatchSize::SmallInput,
        )
    });

    // Field element squaring
    group.bench_function("squaring", |b| {
        b.iter_batched(
            || random_field_element(&dom),
            |a| black_box(a.square()),
            BatchSize::SmallInput,
        )
    });

    // Field element inversion
    group.bench_function("inversion", |b| {
        b.iter_batched(
            || random_field_element(&dom),
            |a| black_box(a.invert().unwrap()),
            BatchSize::SmallInput,
        )
    });

    // Field element square root
    group.bench_function("sqrt", |b| {
        b.iter_batched(
            || random_field_element(&dom).square(),
            |a| black_box(a.sqrt()),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

/// Benchmark point operations
fn bench_point_operations(c: &mut Criterion) {
    let dom = domain();
    let mut group = c.benchmark_group("ec-point");

    // Point addition
    group.bench_function("addition", |b| {
        b.iter_batched(
            || (random_point(&dom), random_point(&dom)),
            |(p1, p2)| black_box(p1.add(&p2)),
            BatchSize::SmallInput,
        )
    });

    // Point doubling
    group.bench_function("doubling", |b| {
        b.iter_batched(
            || random_point(&dom),
            |p| black_box(p.double()),
            BatchSize::SmallInput,
        )
    });

    // Variable-time scalar multiplication
    group.bench_function("scalar_mult", |b| {
        b.iter_batched(
            || (random_point(&dom), random_scalar(&dom)),
            |(p, k)| black_box(p.mul(&k)),
            BatchSize::SmallInput,
        )
    });

    // Fixed-shape ladder multiplication with the usual blinding bounds
    group.bench_function("scalar_mult_fixed_shape", |b| {
        let n = dom.order().clone();
        let n_minus_1 = &n - 1u32;
        b.iter_batched(
            || (random_point(&dom), random_scalar(&dom)),
            |(p, k)| black_box(p.mul_secure(&k, &n, &n_minus_1)),
            BatchSize::SmallInput,
        )
    });

    // Affine coordinate validation
    group.bench_function("validation", |b| {
        b.iter_batched(
            || {
                let p = random_point(&dom);
                (p.affine_x().unwrap(), p.affine_y().unwrap())
            },
            |(x, y)| black_box(Point::from_affine(dom.curve(), x, y).unwrap()),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

/// Benchmark point encoding and decoding
fn bench_serialization(c: &mut Criterion) {
    let dom = domain();
    let mut group = c.benchmark_group("ec-serialization");

    group.bench_function("encode_uncompressed", |b| {
        b.iter_batched(
            || random_point(&dom),
            |p| black_box(encode_point(&p, PointEncoding::Uncompressed).unwrap()),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("decode_uncompressed", |b| {
        b.iter_batched(
            || encode_point(&random_point(&dom), PointEncoding::Uncompressed).unwrap(),
            |bytes| black_box(decode_point(dom.curve(), &bytes).unwrap()),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("encode_compressed", |b| {
        b.iter_batched(
            || random_point(&dom),
            |p| black_box(encode_point(&p, PointEncoding::Compressed).unwrap()),
            BatchSize::SmallInput,
        )
    });

    // Decompression pays for a square root per point
    group.bench_function("decode_compressed", |b| {
        b.iter_batched(
            || encode_point(&random_point(&dom), PointEncoding::Compressed).unwrap(),
            |bytes| black_box(decode_point(dom.curve(), &bytes).unwrap()),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_field_operations,
    bench_point_operations,
    bench_serialization
);

criterion_main!(benches);