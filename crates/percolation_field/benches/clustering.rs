mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use percolation_field::clustering::{ClusterLabeler, HoshenKopelman};
use percolation_field::generator::{Correlated, CorrelatedConfig, SITE_PERCOLATION_THRESHOLD};
use percolation_field::sampling::draw_bernoulli;

const SIZES: [usize; 3] = [64, 256, 1024];
const PROBABILITIES: [f64; 3] = [0.3, SITE_PERCOLATION_THRESHOLD, 0.8];

fn hoshen_kopelman_benches(c: &mut Criterion) {
    for &p in &PROBABILITIES {
        let mut group = c.benchmark_group(format!("clustering/hoshen_kopelman/p_{p:.3}"));

        for &size in &SIZES {
            let shape = common::square(size);
            let mut rng = common::lattice_rng(0xC1, shape);
            let occupation = draw_bernoulli(shape, p, &mut rng).expect("occupation");
            let labeler = HoshenKopelman::new();
            group.throughput(common::lattice_throughput(shape, 1));

            group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
                b.iter(|| {
                    let clusters = labeler.label_clusters(&occupation);
                    black_box(labeler.aggregate_masses(&clusters).len());
                });
            });
        }

        group.finish();
    }
}

fn level_sweep_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("clustering/level_sweep");
    let levels: Vec<f64> = (-10..=10).map(|i| i as f64 * 0.2).collect();

    for &size in &SIZES[..2] {
        let config = CorrelatedConfig::new(size, size).with_hurst(0.5);
        let mut perc = Correlated::from_seed(config, 0xBEEF).expect("correlated");
        group.throughput(common::lattice_throughput(common::square(size), levels.len()));

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let summaries = perc.sweep_levels(&levels).expect("sweep");
                black_box(summaries.len());
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::lattice_criterion();
    targets = hoshen_kopelman_benches, level_sweep_benches
}
criterion_main!(benches);
