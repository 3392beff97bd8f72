//! Lattice helpers shared by the benchmark binaries.
use std::time::Duration;

use criterion::{Criterion, Throughput};
use percolation_field::lattice::GridShape;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// FFT and labeling cost grows past linear on the larger lattices; keep runs short.
pub fn lattice_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(20)
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(2))
}

pub fn square(size: usize) -> GridShape {
    GridShape::new(size, size)
}

/// Sites visited when `passes` maps of `shape` are processed per iteration.
pub fn lattice_throughput(shape: GridShape, passes: usize) -> Throughput {
    Throughput::Elements((shape.len() * passes).max(1) as u64)
}

/// Per-lattice rng so each size sees its own, reproducible input.
pub fn lattice_rng(salt: u64, shape: GridShape) -> StdRng {
    StdRng::seed_from_u64(salt ^ (((shape.rows as u64) << 32) | shape.cols as u64))
}
