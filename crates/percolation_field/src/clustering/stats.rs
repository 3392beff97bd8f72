//! Cluster statistics used in percolation analysis.
//!
//! [`ClusterStatistics`] summarizes a mass vector; [`spanning_labels`] finds clusters that
//! connect opposite edges of the lattice.
use std::collections::{BTreeMap, BTreeSet};

use crate::clustering::{ClusterLabeler, ClusterLabels, HoshenKopelman};

/// Summary of the cluster masses of one occupation map.
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterStatistics {
    /// Number of clusters.
    pub cluster_count: usize,
    /// Sum of all masses (labeled sites).
    pub total_mass: usize,
    /// Mass of the largest cluster, 0 when there are none.
    pub largest: usize,
    /// Mean cluster size `sum(s^2) / sum(s)` over all clusters except one largest.
    pub mean_finite_size: f64,
    /// Cluster-size distribution: mass `s` -> number of clusters with that mass.
    pub size_distribution: BTreeMap<usize, usize>,
}

impl ClusterStatistics {
    pub fn from_masses(masses: &[usize]) -> Self {
        let mut size_distribution = BTreeMap::new();
        for &s in masses {
            *size_distribution.entry(s).or_insert(0) += 1;
        }

        let total_mass: usize = masses.iter().sum();
        let largest = masses.iter().copied().max().unwrap_or(0);

        let rest = total_mass - largest;
        let rest_sq: usize = masses.iter().map(|&s| s * s).sum::<usize>() - largest * largest;
        let mean_finite_size = if rest > 0 {
            rest_sq as f64 / rest as f64
        } else {
            0.0
        };

        Self {
            cluster_count: masses.len(),
            total_mass,
            largest,
            mean_finite_size,
            size_distribution,
        }
    }

    /// Fraction of `sites` that belong to the largest cluster.
    pub fn largest_fraction(&self, sites: usize) -> f64 {
        if sites == 0 {
            0.0
        } else {
            self.largest as f64 / sites as f64
        }
    }
}

/// Direction along which a cluster spans the lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpanAxis {
    /// Touches both the first and the last row.
    Rows,
    /// Touches both the first and the last column.
    Cols,
    /// Either of the above.
    Any,
}

/// Labels of clusters that connect opposite edges along `axis`.
///
/// A cluster spans only through a path inside the lattice. Links across the periodic
/// seam of a [`HoshenKopelman::periodic`] labeling do not count, so a cluster that merely
/// wraps around touches both edges without spanning.
pub fn spanning_labels(clusters: &ClusterLabels, axis: SpanAxis) -> BTreeSet<u32> {
    let labels = clusters.labels();
    let open = HoshenKopelman::new().label_clusters(&labels.map(|&l| l != 0));
    let open_labels = open.labels();
    let (m, n) = (open_labels.rows(), open_labels.cols());

    let rows = || {
        shared_labels(
            open_labels.row(0).iter().copied(),
            open_labels.row(m - 1).iter().copied(),
        )
    };
    let cols = || {
        shared_labels(
            (0..m).map(|r| open_labels[(r, 0)]),
            (0..m).map(|r| open_labels[(r, n - 1)]),
        )
    };

    let spanning = match axis {
        SpanAxis::Rows => rows(),
        SpanAxis::Cols => cols(),
        SpanAxis::Any => {
            let mut all = rows();
            all.extend(cols());
            all
        }
    };
    if spanning.is_empty() {
        return spanning;
    }

    // Open clusters are subsets of the caller's clusters.
    open_labels
        .iter()
        .zip(labels.iter())
        .filter(|(o, _)| spanning.contains(o))
        .map(|(_, &l)| l)
        .collect()
}

fn shared_labels(
    a: impl Iterator<Item = u32>,
    b: impl Iterator<Item = u32>,
) -> BTreeSet<u32> {
    let first: BTreeSet<u32> = a.filter(|&l| l != 0).collect();
    b.filter(|l| first.contains(l)).collect()
}
