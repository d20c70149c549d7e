use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use prime_share::SecretSharing;

fn benchmark_split(c: &mut Criterion) {
    let sharing = SecretSharing::default();
    // 1024 bytes spans 35 chunks under the default prime
    let secret = vec![0x55u8; 1024];
    c.bench_function("split 1024 bytes 3-of-5", |b| {
        b.iter(|| {
            let shares = sharing.split(black_box(&secret), 3, 5).unwrap();
            black_box(shares);
        })
    });
}

fn benchmark_combine(c: &mut Criterion) {
    let sharing = SecretSharing::default();
    let secret = vec![0x55u8; 1024];
    let shares = sharing.split(&secret, 3, 5).unwrap();
    let quorum: Vec<_> = shares.shares()[0..3].to_vec();
    c.bench_function("combine 1024 bytes from 3 shares", |b| {
        b.iter(|| {
            let result = sharing.combine(black_box(quorum.clone())).unwrap();
            black_box(result);
        })
    });
}

criterion_group!(benches, benchmark_split, benchmark_combine);
criterion_main!(benches);
