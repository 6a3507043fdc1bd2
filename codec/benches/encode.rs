use codec::{BigUint, Codec, Options};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_codec(c: &mut Criterion) {
    let codec = Codec::new(Options::default()).unwrap();

    let small: Vec<BigUint> = [1u32, 2, 3].iter().copied().map(BigUint::from).collect();
    c.bench_function("encode_three_small_numbers", |b| {
        b.iter(|| codec.encode(black_box(&small)).unwrap());
    });

    let id = codec.encode(&small).unwrap();
    c.bench_function("decode_three_small_numbers", |b| {
        b.iter(|| codec.decode(black_box(&id)));
    });

    let big: Vec<BigUint> = (0..8u32)
        .map(|i| BigUint::from(2u32).pow(200 + i))
        .collect();
    c.bench_function("encode_eight_big_numbers", |b| {
        b.iter(|| codec.encode(black_box(&big)).unwrap());
    });

    let padded = Codec::new(Options {
        min_length: 255,
        ..Options::default()
    })
    .unwrap();
    c.bench_function("encode_with_max_padding", |b| {
        b.iter(|| padded.encode(black_box(&small)).unwrap());
    });
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
