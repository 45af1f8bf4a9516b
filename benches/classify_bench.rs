//! Performance benchmarks

use branchwise::classify;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn dense_tree(len: usize) -> Vec<f64> {
    (0..len).map(|i| ((i % 17) as f64) - 8.0).collect()
}

fn benchmark_classify(c: &mut Criterion) {
    for len in [1_024usize, 65_536, 1_048_576] {
        let values = dense_tree(len);
        c.bench_function(&format!("classify_n={len}"), |b| {
            b.iter(|| classify(black_box(&values)).unwrap());
        });
    }
}

criterion_group!(benches, benchmark_classify);
criterion_main!(benches);
