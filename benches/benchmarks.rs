// benches/benchmarks.rs
//
// Direct vs recursive basis construction, and normal form vs Kalla's zero test.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vanishing_ideal::core::static_random::StaticRandom;
use vanishing_ideal::core::RingContext;
use vanishing_ideal::{build_vanishing_basis_direct, build_vanishing_basis_recursive, is_zero_function, normal_form};

fn bench_basis_builders(c: &mut Criterion) {
    let mut group = c.benchmark_group("basis");

    for &(m, n) in &[(12u64, 2usize), (36, 2), (60, 2), (24, 3)] {
        let ring = RingContext::new(m, n);
        let label = format!("m{}_n{}", m, n);

        group.bench_with_input(BenchmarkId::new("direct", &label), &ring, |b, ring| {
            b.iter(|| black_box(build_vanishing_basis_direct(black_box(ring))))
        });

        group.bench_with_input(BenchmarkId::new("recursive", &label), &ring, |b, ring| {
            b.iter(|| black_box(build_vanishing_basis_recursive(black_box(ring))))
        });
    }

    group.finish();
}

fn bench_zero_tests(c: &mut Criterion) {
    let mut group = c.benchmark_group("zero_test");
    let mut random = StaticRandom::with_seed(2024);

    for &(m, n) in &[(8u64, 2usize), (12, 3), (30, 2)] {
        let ring = RingContext::new(m, n);
        let label = format!("m{}_n{}", m, n);
        let inputs: Vec<_> = (0..16).map(|_| random.next_polynomial(ring, 10, 14)).collect();

        group.bench_with_input(BenchmarkId::new("normal_form", &label), &inputs, |b, inputs| {
            b.iter(|| {
                for f in inputs {
                    black_box(normal_form(f).is_zero());
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("kalla", &label), &inputs, |b, inputs| {
            b.iter(|| {
                for f in inputs {
                    black_box(is_zero_function(f));
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_basis_builders, bench_zero_tests);
criterion_main!(benches);
