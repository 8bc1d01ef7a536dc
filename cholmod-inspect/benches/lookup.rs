//! Lookup and enumeration benchmarks over a synthetic memory image

use std::hint::black_box;

use cholmod_inspect::{lookup, ImageBuilder, MemoryImage, OwnedValue, SPARSE_TYPE_TAG};
use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn banded_fixture(n: usize) -> (OwnedValue, MemoryImage) {
    let mut rng = StdRng::seed_from_u64(42);

    // Tridiagonal band, sorted within each column
    let mut p = vec![0i64];
    let mut i = Vec::new();
    let mut x = Vec::new();
    for col in 0..n {
        for row in col.saturating_sub(1)..(col + 2).min(n) {
            i.push(row as i64);
            x.push(rng.gen_range(-1.0..1.0));
        }
        p.push(i.len() as i64);
    }

    let mut builder = ImageBuilder::new(0x7f40_0000_0000);
    let p_addr = builder.push_i64s(&p).unwrap();
    let i_addr = builder.push_i64s(&i).unwrap();
    let x_addr = builder.push_f64s(&x).unwrap();

    let value = OwnedValue::structure(SPARSE_TYPE_TAG)
        .with_field("nrow", OwnedValue::int(n as i64))
        .with_field("ncol", OwnedValue::int(n as i64))
        .with_field("p", OwnedValue::address(p_addr))
        .with_field("i", OwnedValue::address(i_addr))
        .with_field("x", OwnedValue::address(x_addr))
        .with_field("stype", OwnedValue::int(0))
        .with_field("itype", OwnedValue::int(2))
        .with_field("xtype", OwnedValue::int(1))
        .with_field("dtype", OwnedValue::int(0))
        .with_field("packed", OwnedValue::int(1))
        .with_field("sorted", OwnedValue::int(1));

    (value, builder.finish())
}

fn bench_lookup(c: &mut Criterion) {
    let (value, image) = banded_fixture(10_000);

    c.bench_function("dispatch_and_bind", |b| {
        b.iter(|| lookup(black_box(&value), black_box(&image)).unwrap().unwrap())
    });

    let printer = lookup(&value, &image).unwrap().unwrap();
    let view = printer.view();
    c.bench_function("value_at_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for k in 0..10_000usize {
                acc += view.value_at(k % 10_000, (k * 7) % 10_000).unwrap();
            }
            black_box(acc)
        })
    });

    let (small_value, small_image) = banded_fixture(100);
    let small = lookup(&small_value, &small_image).unwrap().unwrap();
    c.bench_function("enumerate_100x100", |b| {
        b.iter(|| {
            small
                .entries()
                .map(|entry| entry.unwrap().1)
                .sum::<f64>()
        })
    });
}

criterion_group!(benches, bench_lookup);
criterion_main!(benches);
