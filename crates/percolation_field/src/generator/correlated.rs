//! Long-range correlated percolation via level sets of a Fourier-filtered field.
use rand::rngs::StdRng;
use rand::{Rng as RngCore, SeedableRng};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clustering::{ClusterLabeler, ClusterLabels};
use crate::error::{Error, Result};
use crate::generator::{ClusterAccess, ClusterCache, Percolation};
use crate::lattice::{Grid, GridShape};
use crate::sampling::NoiseDistribution;
use crate::spectral::{SpectralSynthesizer, DEFAULT_HURST};

/// Configuration for a [`Correlated`] generator.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelatedConfig {
    /// Number of rows (`M`).
    pub rows: usize,
    /// Number of columns (`N`).
    pub cols: usize,
    /// Site distribution of the input white noise.
    pub distribution: NoiseDistribution,
    /// Hurst exponent of the power-law kernel.
    pub hurst: f64,
}

impl Default for CorrelatedConfig {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            distribution: NoiseDistribution::Gaussian,
            hurst: DEFAULT_HURST,
        }
    }
}

impl CorrelatedConfig {
    /// Creates a new [`CorrelatedConfig`] for a `rows` x `cols` lattice.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Default::default()
        }
    }

    /// Sets the noise distribution.
    pub fn with_distribution(mut self, distribution: NoiseDistribution) -> Self {
        self.distribution = distribution;
        self
    }

    /// Sets the Hurst exponent.
    pub fn with_hurst(mut self, hurst: f64) -> Self {
        self.hurst = hurst;
        self
    }

    pub fn shape(&self) -> GridShape {
        GridShape::new(self.rows, self.cols)
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        self.shape().validate()?;
        if !self.hurst.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "hurst exponent must be finite, got {}",
                self.hurst
            )));
        }
        Ok(())
    }
}

/// Correlated percolation: a synthesized field thresholded at a level `h`.
///
/// The field is synthesized once at construction. Each [`Correlated::get_clusters`] call
/// rebuilds the occupation map `sample > h` and relabels it without redrawing the field.
#[derive(Debug)]
pub struct Correlated {
    config: CorrelatedConfig,
    sample: Grid<f64>,
    level: Option<f64>,
    occupation: Option<Grid<bool>>,
    cache: ClusterCache,
}

impl Correlated {
    /// Validates `config` and synthesizes the field from `rng`.
    pub fn new(config: CorrelatedConfig, rng: &mut dyn RngCore) -> Result<Self> {
        config.validate()?;
        let synthesizer = SpectralSynthesizer::new(config.shape(), config.hurst)?;
        let sample = synthesizer.synthesize(config.distribution, rng);
        debug!(
            rows = config.rows,
            cols = config.cols,
            hurst = config.hurst,
            distribution = %config.distribution,
            "synthesized correlated sample"
        );
        Ok(Self {
            config,
            sample,
            level: None,
            occupation: None,
            cache: ClusterCache::default(),
        })
    }

    /// Like [`Correlated::new`] with a `StdRng` seeded from `seed`.
    pub fn from_seed(config: CorrelatedConfig, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new(config, &mut rng)
    }

    /// Replace the cluster labeler. Discards any computed clusters.
    pub fn with_labeler(mut self, labeler: impl ClusterLabeler + 'static) -> Self {
        self.cache = ClusterCache::new(Box::new(labeler));
        self
    }

    pub fn config(&self) -> &CorrelatedConfig {
        &self.config
    }

    pub fn hurst(&self) -> f64 {
        self.config.hurst
    }

    pub fn distribution(&self) -> NoiseDistribution {
        self.config.distribution
    }

    /// The synthesized unit-variance field.
    pub fn sample(&self) -> &Grid<f64> {
        &self.sample
    }

    /// Level used by the most recent [`Correlated::get_clusters`] call.
    pub fn level(&self) -> Option<f64> {
        self.level
    }

    /// Occupation map `sample > level`. Does not touch cached clusters.
    pub fn threshold(&self, level: f64) -> Grid<bool> {
        self.sample.map(|&v| v > level)
    }

    /// Thresholds the sample at `level`, records the level and labels the resulting map.
    ///
    /// A NaN level is rejected with [`Error::InvalidConfig`].
    pub fn get_clusters(&mut self, level: f64) -> Result<&ClusterLabels> {
        if level.is_nan() {
            return Err(Error::InvalidConfig("level must not be NaN".into()));
        }
        let occupation = self.threshold(level);
        let occupation = self.occupation.insert(occupation);
        self.level = Some(level);

        let clusters = self.cache.label(occupation);
        debug!(
            level,
            occupied = occupation.count_true(),
            clusters = clusters.count(),
            "labeled level set"
        );
        Ok(clusters)
    }
}

impl Percolation for Correlated {
    fn shape(&self) -> GridShape {
        self.sample.shape()
    }

    fn occupation(&self) -> Option<&Grid<bool>> {
        self.occupation.as_ref()
    }
}

impl ClusterAccess for Correlated {
    fn cluster_cache(&self) -> &ClusterCache {
        &self.cache
    }

    fn cluster_cache_mut(&mut self) -> &mut ClusterCache {
        &mut self.cache
    }
}
