#![forbid(unsafe_code)]
//! percolation_field: correlated and uncorrelated percolation on 2D lattices.
//!
//! Modules:
//! - lattice: grid shapes, row-major grids and field moments
//! - sampling: injectable random draws (white noise, Bernoulli maps, ensemble seeds)
//! - spectral: Fourier Filtering Method (power-law kernel, 2D FFT, unit-variance synthesis)
//! - clustering: cluster labeling contract, Hoshen-Kopelman, cluster statistics
//! - generator: `Uncorrelated` and `Correlated` generators behind the `Percolation` trait
pub mod clustering;
pub mod error;
pub mod generator;
pub mod lattice;
pub mod sampling;
pub mod spectral;

/// Convenient re-exports for common types. Import with `use percolation_field::prelude::*;`.
pub mod prelude {
    pub use crate::clustering::{
        count_masses, spanning_labels, ClusterLabeler, ClusterLabels, ClusterStatistics,
        HoshenKopelman, SpanAxis,
    };
    pub use crate::error::{Error, Result};
    pub use crate::generator::{
        aggregate_masses, ClusterPhase, Correlated, CorrelatedConfig, LabeledClusters,
        LevelSummary, Percolation, Uncorrelated, SITE_PERCOLATION_THRESHOLD,
    };
    pub use crate::lattice::{FieldStatistics, Grid, GridShape};
    pub use crate::sampling::{
        draw_bernoulli, draw_noise, seed_for_realization, NoiseDistribution,
    };
    pub use crate::spectral::{
        build_kernel, synthesize, Kernel, SpectralSynthesizer, DEFAULT_HURST,
    };
}
