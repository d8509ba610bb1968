use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mertens_arith::{mertens_sequence, Method};

fn bench_sequences(c: &mut Criterion) {
    let mut group = c.benchmark_group("mertens_sequence");
    for upper in [500u64, 10_000, 100_000] {
        for method in [Method::TrialDivision, Method::Sieve] {
            group.bench_with_input(
                BenchmarkId::new(method.as_str(), upper),
                &upper,
                |b, &upper| {
                    b.iter(|| mertens_sequence(black_box(upper), method).expect("sequence"));
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_sequences);
criterion_main!(benches);
