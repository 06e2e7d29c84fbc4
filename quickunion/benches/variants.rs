use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use quickunion::forest::{DepthWeighted, HeightWeighted, SizeWeighted};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// A fixed pair list long enough to connect n sites with high probability
/// (the benchmark measures union/find cost, not connectivity).
fn pair_list(n: usize) -> Vec<(usize, usize)> {
    let mut rng = Pcg32::seed_from_u64(42);
    (0..4 * n)
        .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
        .collect()
}

fn bench_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_connects");
    for &n in &[1_000usize, 10_000] {
        let pairs = pair_list(n);

        group.bench_with_input(BenchmarkId::new("height_halving", n), &pairs, |b, pairs| {
            b.iter(|| {
                let mut uf = HeightWeighted::new(n, true);
                for &(p, q) in pairs {
                    uf.connect(p, q).unwrap();
                }
                uf.components()
            })
        });

        group.bench_with_input(BenchmarkId::new("height_plain", n), &pairs, |b, pairs| {
            b.iter(|| {
                let mut uf = HeightWeighted::new(n, false);
                for &(p, q) in pairs {
                    uf.connect(p, q).unwrap();
                }
                uf.components()
            })
        });

        group.bench_with_input(BenchmarkId::new("depth", n), &pairs, |b, pairs| {
            b.iter(|| {
                let mut uf = DepthWeighted::new(n);
                for &(p, q) in pairs {
                    uf.connect(p, q).unwrap();
                }
                uf.components()
            })
        });

        group.bench_with_input(BenchmarkId::new("size", n), &pairs, |b, pairs| {
            b.iter(|| {
                let mut uf = SizeWeighted::new(n);
                for &(p, q) in pairs {
                    uf.connect(p, q).unwrap();
                }
                uf.components()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_variants);
criterion_main!(benches);
