//! Uncorrelated (Bernoulli) site percolation.
use rand::rngs::StdRng;
use rand::{Rng as RngCore, SeedableRng};
use tracing::debug;

use crate::clustering::{ClusterLabeler, ClusterLabels};
use crate::error::Result;
use crate::generator::{ClusterAccess, ClusterCache, Percolation, SITE_PERCOLATION_THRESHOLD};
use crate::lattice::{Grid, GridShape};
use crate::sampling::draw_bernoulli;

/// Site percolation with independent occupation probability `p`.
///
/// The occupation map is drawn once at construction and never changes.
#[derive(Debug)]
pub struct Uncorrelated {
    probability: f64,
    occupation: Grid<bool>,
    cache: ClusterCache,
}

impl Uncorrelated {
    /// Draws a `rows` x `cols` Bernoulli(`p`) occupation map from `rng`.
    pub fn new(rows: usize, cols: usize, p: f64, rng: &mut dyn RngCore) -> Result<Self> {
        let shape = GridShape::checked(rows, cols)?;
        let occupation = draw_bernoulli(shape, p, rng)?;
        debug!(
            rows,
            cols,
            p,
            occupied = occupation.count_true(),
            "drew uncorrelated occupation map"
        );
        Ok(Self {
            probability: p,
            occupation,
            cache: ClusterCache::default(),
        })
    }

    /// Like [`Uncorrelated::new`] with a `StdRng` seeded from `seed`.
    pub fn from_seed(rows: usize, cols: usize, p: f64, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new(rows, cols, p, &mut rng)
    }

    /// Occupation at the square-lattice site percolation threshold.
    pub fn at_threshold(rows: usize, cols: usize, rng: &mut dyn RngCore) -> Result<Self> {
        Self::new(rows, cols, SITE_PERCOLATION_THRESHOLD, rng)
    }

    /// Replace the cluster labeler. Discards any computed clusters.
    pub fn with_labeler(mut self, labeler: impl ClusterLabeler + 'static) -> Self {
        self.cache = ClusterCache::new(Box::new(labeler));
        self
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Labels the occupation map.
    pub fn get_clusters(&mut self) -> &ClusterLabels {
        self.cache.label(&self.occupation)
    }
}

impl Percolation for Uncorrelated {
    fn shape(&self) -> GridShape {
        self.occupation.shape()
    }

    fn occupation(&self) -> Option<&Grid<bool>> {
        Some(&self.occupation)
    }
}

impl ClusterAccess for Uncorrelated {
    fn cluster_cache(&self) -> &ClusterCache {
        &self.cache
    }

    fn cluster_cache_mut(&mut self) -> &mut ClusterCache {
        &mut self.cache
    }
}
