use longint::primitives::BigInt;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_divide(c: &mut Criterion) {
    let dividend = BigInt::from_hex(&"F1E2D3C4B5A69788".repeat(16)).unwrap();
    let divisor = BigInt::from_hex(&"123456789ABCDEF".repeat(4)).unwrap();

    c.bench_function("div_rem 128 / 30 digits", |b| {
        b.iter(|| black_box(&dividend).div_rem(black_box(&divisor)))
    });

    let square = BigInt::from_hex(&"ABCDEF01".repeat(8)).unwrap();

    c.bench_function("isqrt 32 digits", |b| b.iter(|| black_box(&square).isqrt()));
}

criterion_group!(benches, bench_divide);
criterion_main!(benches);
