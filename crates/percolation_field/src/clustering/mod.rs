//! Connected-component labeling of occupation maps.
//!
//! Generators hand their binary map to a [`ClusterLabeler`] and receive [`ClusterLabels`]:
//! a label grid where `0` marks unoccupied sites and `1..=count` identify clusters. Mass
//! aggregation then turns labels into one site count per cluster.
//!
//! [`HoshenKopelman`] is the default labeler; any other implementation can be injected
//! into a generator as long as it keeps the labeling contract.
use crate::lattice::Grid;

pub mod hoshen_kopelman;
pub mod stats;

pub use hoshen_kopelman::HoshenKopelman;
pub use stats::{spanning_labels, ClusterStatistics, SpanAxis};

/// Label grid produced by a [`ClusterLabeler`].
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterLabels {
    labels: Grid<u32>,
    count: usize,
}

impl ClusterLabels {
    /// `labels` must use `0` for empty sites and every value in `1..=count` at least once.
    pub fn new(labels: Grid<u32>, count: usize) -> Self {
        debug_assert!(labels.iter().all(|&l| (l as usize) <= count));
        Self { labels, count }
    }

    pub fn labels(&self) -> &Grid<u32> {
        &self.labels
    }

    /// Number of distinct clusters.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn into_labels(self) -> Grid<u32> {
        self.labels
    }
}

/// Backend that labels connected clusters and aggregates their masses.
pub trait ClusterLabeler: Send + Sync {
    /// Labels every occupied site with its cluster id.
    fn label_clusters(&self, occupation: &Grid<bool>) -> ClusterLabels;

    /// One mass per cluster, ordered by label.
    fn aggregate_masses(&self, clusters: &ClusterLabels) -> Vec<usize> {
        count_masses(clusters)
    }
}

/// Counts sites per label. Entry `i` is the mass of label `i + 1`.
pub fn count_masses(clusters: &ClusterLabels) -> Vec<usize> {
    let mut masses = vec![0usize; clusters.count()];
    for &label in clusters.labels().iter() {
        if label > 0 {
            masses[label as usize - 1] += 1;
        }
    }
    masses
}
