mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use percolation_field::sampling::NoiseDistribution;
use percolation_field::spectral::{build_kernel, SpectralSynthesizer};

const SIZES: [usize; 4] = [64, 128, 256, 512];
const HURSTS: [f64; 3] = [-1.0, 0.0, 0.5];

fn kernel_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("spectral/kernel");

    for &size in &SIZES {
        let shape = common::square(size);
        group.throughput(common::lattice_throughput(shape, 1));
        group.bench_with_input(BenchmarkId::from_parameter(size), &shape, |b, &shape| {
            b.iter(|| {
                let kernel = build_kernel(shape, 0.5).expect("kernel");
                black_box(kernel.norm());
            });
        });
    }

    group.finish();
}

fn synthesis_benches(c: &mut Criterion) {
    for &hurst in &HURSTS {
        let mut group = c.benchmark_group(format!("spectral/synthesize/hurst_{hurst:.1}"));

        for &size in &SIZES {
            let shape = common::square(size);
            let synth = SpectralSynthesizer::new(shape, hurst).expect("synthesizer");
            let mut rng = common::lattice_rng(0x5EED, shape);
            group.throughput(common::lattice_throughput(shape, 1));

            group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
                b.iter(|| {
                    let field = synth.synthesize(NoiseDistribution::Gaussian, &mut rng);
                    black_box(field.len());
                });
            });
        }

        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = common::lattice_criterion();
    targets = kernel_benches, synthesis_benches
}
criterion_main!(benches);
