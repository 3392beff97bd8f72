//! Percolation generators: uncorrelated Bernoulli maps and thresholded correlated fields.
//!
//! Both generators implement [`Percolation`]. Each owns its occupation data and a
//! [`ClusterCache`] whose [`ClusterPhase`] advances as follows:
//!
//! ```text
//! Constructed --get_clusters--> ClustersComputed --get_masses--> MassesComputed
//!                                      ^                               |
//!                                      +---------get_clusters----------+
//! ```
//!
//! Mass aggregation is the free function [`aggregate_masses`] over the cached labels.
use std::fmt;

use tracing::debug;

use crate::clustering::{ClusterLabeler, ClusterLabels, ClusterStatistics, HoshenKopelman};
use crate::error::{Error, Result};
use crate::lattice::{Grid, GridShape};

pub mod correlated;
pub mod sweep;
pub mod uncorrelated;

pub use correlated::{Correlated, CorrelatedConfig};
pub use sweep::LevelSummary;
pub use uncorrelated::Uncorrelated;

/// Site percolation threshold of the square lattice; default occupation probability
/// for [`Uncorrelated::at_threshold`].
pub const SITE_PERCOLATION_THRESHOLD: f64 = 0.59274;

/// Progress of a generator through clustering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClusterPhase {
    Constructed,
    ClustersComputed,
    MassesComputed,
}

/// Labels of one occupation map and, once aggregated, their masses.
#[derive(Clone, Debug, PartialEq)]
pub struct LabeledClusters {
    clusters: ClusterLabels,
    masses: Option<Vec<usize>>,
}

impl LabeledClusters {
    pub fn new(clusters: ClusterLabels) -> Self {
        Self {
            clusters,
            masses: None,
        }
    }

    pub fn clusters(&self) -> &ClusterLabels {
        &self.clusters
    }

    pub fn masses(&self) -> Option<&[usize]> {
        self.masses.as_deref()
    }
}

/// Phase of an optional labeling: `None` has not been clustered yet.
pub fn phase_of(labeled: Option<&LabeledClusters>) -> ClusterPhase {
    match labeled {
        None => ClusterPhase::Constructed,
        Some(LabeledClusters { masses: None, .. }) => ClusterPhase::ClustersComputed,
        Some(LabeledClusters { masses: Some(_), .. }) => ClusterPhase::MassesComputed,
    }
}

/// Aggregates masses for the labels held in `labeled`, caching them in place.
///
/// Fails with [`Error::Precondition`] when no clusters have been computed yet.
pub fn aggregate_masses<'a>(
    labeled: &'a mut Option<LabeledClusters>,
    labeler: &dyn ClusterLabeler,
) -> Result<&'a [usize]> {
    let LabeledClusters { clusters, masses } = labeled
        .as_mut()
        .ok_or_else(|| Error::Precondition("no clusters computed yet".into()))?;

    let masses = masses.get_or_insert_with(|| {
        let masses = labeler.aggregate_masses(clusters);
        debug!(clusters = masses.len(), "aggregated cluster masses");
        masses
    });
    Ok(masses.as_slice())
}

/// Labeler plus clustering results owned by one generator.
///
/// Only the owning generator's `get_clusters` writes new labels.
pub struct ClusterCache {
    labeler: Box<dyn ClusterLabeler>,
    labeled: Option<LabeledClusters>,
}

impl Default for ClusterCache {
    fn default() -> Self {
        Self::new(Box::new(HoshenKopelman::default()))
    }
}

impl fmt::Debug for ClusterCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClusterCache")
            .field("labeled", &self.labeled)
            .finish_non_exhaustive()
    }
}

impl ClusterCache {
    pub fn new(labeler: Box<dyn ClusterLabeler>) -> Self {
        Self {
            labeler,
            labeled: None,
        }
    }

    pub fn phase(&self) -> ClusterPhase {
        phase_of(self.labeled.as_ref())
    }

    pub fn labeled(&self) -> Option<&LabeledClusters> {
        self.labeled.as_ref()
    }

    pub fn labeler(&self) -> &dyn ClusterLabeler {
        self.labeler.as_ref()
    }

    /// Labels `occupation`, replacing any earlier labels and masses.
    pub(crate) fn label(&mut self, occupation: &Grid<bool>) -> &ClusterLabels {
        let clusters = self.labeler.label_clusters(occupation);
        self.labeled
            .insert(LabeledClusters::new(clusters))
            .clusters()
    }

    pub(crate) fn masses(&mut self) -> Result<&[usize]> {
        aggregate_masses(&mut self.labeled, self.labeler.as_ref())
    }
}

mod sealed {
    use super::ClusterCache;

    /// Access to a generator's cluster cache. Not nameable outside this crate, so labels
    /// can only be written through the generators' own `get_clusters`.
    pub trait ClusterAccess {
        fn cluster_cache(&self) -> &ClusterCache;

        fn cluster_cache_mut(&mut self) -> &mut ClusterCache;
    }
}

pub(crate) use sealed::ClusterAccess;

/// Shared contract of percolation generators.
///
/// Implemented by [`Uncorrelated`] and [`Correlated`] only; labels always describe the
/// generator's own occupation map.
///
/// ```compile_fail
/// use percolation_field::prelude::*;
///
/// let mut perc = Uncorrelated::from_seed(4, 4, 0.0, 1).unwrap();
/// let full = Grid::filled(GridShape::new(4, 4), true);
/// perc.cluster_cache_mut().label(&full);
/// ```
pub trait Percolation: sealed::ClusterAccess {
    fn shape(&self) -> GridShape;

    /// Current occupation map, if one has been produced.
    fn occupation(&self) -> Option<&Grid<bool>>;

    fn phase(&self) -> ClusterPhase {
        self.cluster_cache().phase()
    }

    /// Labels from the most recent `get_clusters` call.
    fn clusters(&self) -> Option<&ClusterLabels> {
        self.cluster_cache().labeled().map(LabeledClusters::clusters)
    }

    fn cluster_count(&self) -> Option<usize> {
        self.clusters().map(ClusterLabels::count)
    }

    fn occupied_sites(&self) -> usize {
        self.occupation().map_or(0, |o| o.count_true())
    }

    /// Masses of the current clusters, ordered by label.
    ///
    /// Requires a prior `get_clusters` call; fails with [`Error::Precondition`] otherwise.
    fn get_masses(&mut self) -> Result<&[usize]> {
        self.cluster_cache_mut().masses()
    }

    fn statistics(&mut self) -> Result<ClusterStatistics> {
        Ok(ClusterStatistics::from_masses(self.get_masses()?))
    }
}
