//! Level sweeps over a fixed correlated sample.
use tracing::{info, warn};

use crate::clustering::{spanning_labels, ClusterStatistics, SpanAxis};
use crate::error::Result;
use crate::generator::{Correlated, Percolation};

/// Cluster summary of one level set.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelSummary {
    /// Threshold `h`; sites with `sample > h` are occupied.
    pub level: f64,
    /// Fraction of occupied sites.
    pub occupied_fraction: f64,
    /// Masses and derived statistics of the level set.
    pub statistics: ClusterStatistics,
    /// Whether some cluster connects opposite edges of the lattice.
    pub spans: bool,
}

impl Correlated {
    /// Labels the sample at each level in turn and summarizes the clusters.
    ///
    /// The generator is left labeled at the last level of `levels`.
    pub fn sweep_levels(&mut self, levels: &[f64]) -> Result<Vec<LevelSummary>> {
        if levels.is_empty() {
            warn!("Level sweep called with no levels.");
            return Ok(Vec::new());
        }

        let sites = self.shape().len() as f64;
        let mut out = Vec::with_capacity(levels.len());
        for &level in levels {
            let spans = !spanning_labels(self.get_clusters(level)?, SpanAxis::Any).is_empty();
            let occupied_fraction = self.occupied_sites() as f64 / sites;
            let statistics = self.statistics()?;
            out.push(LevelSummary {
                level,
                occupied_fraction,
                statistics,
                spans,
            });
        }

        info!(
            levels = levels.len(),
            hurst = self.hurst(),
            spanning = out.iter().filter(|s| s.spans).count(),
            "level sweep finished"
        );
        Ok(out)
    }
}
