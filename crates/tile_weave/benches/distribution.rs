mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tile_weave::distribution::ALL_DISTRIBUTIONS;

const CATEGORY_COUNTS: [usize; 4] = [4, 16, 64, 256];

fn distribution_weight_benches(c: &mut Criterion) {
    for policy in ALL_DISTRIBUTIONS {
        let mut group = c.benchmark_group(format!("distribution/{policy}"));

        for &count in &CATEGORY_COUNTS {
            group.throughput(Throughput::Elements(count as u64));

            let mut rng = StdRng::seed_from_u64(0x7EA5_u64 ^ count as u64);
            group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &n| {
                b.iter(|| {
                    let w = policy.weights(n, &mut rng);
                    black_box(w.len());
                });
            });
        }

        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = distribution_weight_benches
}
criterion_main!(benches);
