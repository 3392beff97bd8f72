//! Hoshen-Kopelman cluster labeling.
//!
//! Single raster scan over the occupation map with 4-neighbour adjacency. Each occupied
//! site looks at its upper and left neighbours: a fresh provisional label is issued when
//! both are empty, otherwise the site joins them and the two labels are merged with a
//! union-find. A second pass resolves provisional labels to their roots and renumbers
//! them `1..=count` in order of first appearance.
use tracing::trace;

use crate::clustering::{ClusterLabeler, ClusterLabels};
use crate::lattice::Grid;

/// Hoshen-Kopelman labeler with optional periodic boundaries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoshenKopelman {
    /// If true, opposite edges are adjacent (the lattice is a torus).
    pub periodic: bool,
}

impl HoshenKopelman {
    /// Open boundaries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Periodic boundaries in both directions.
    pub fn periodic() -> Self {
        Self { periodic: true }
    }

    /// Enable/disable periodic boundaries (builder-style).
    pub fn with_periodic(mut self, periodic: bool) -> Self {
        self.periodic = periodic;
        self
    }
}

/// Union-find over provisional labels. Index 0 is the empty-site sentinel.
struct LabelForest {
    parent: Vec<u32>,
}

impl LabelForest {
    fn new() -> Self {
        Self { parent: vec![0] }
    }

    fn make(&mut self) -> u32 {
        let label = self.parent.len() as u32;
        self.parent.push(label);
        label
    }

    fn find(&mut self, mut x: u32) -> u32 {
        while self.parent[x as usize] != x {
            let grandparent = self.parent[self.parent[x as usize] as usize];
            self.parent[x as usize] = grandparent;
            x = grandparent;
        }
        x
    }

    fn union(&mut self, a: u32, b: u32) -> u32 {
        let ra = self.find(a);
        let rb = self.find(b);
        let (lo, hi) = if ra <= rb { (ra, rb) } else { (rb, ra) };
        self.parent[hi as usize] = lo;
        lo
    }
}

impl ClusterLabeler for HoshenKopelman {
    fn label_clusters(&self, occupation: &Grid<bool>) -> ClusterLabels {
        let shape = occupation.shape();
        let (m, n) = (shape.rows, shape.cols);
        let mut provisional: Grid<u32> = Grid::filled(shape, 0);
        let mut forest = LabelForest::new();

        for r in 0..m {
            for c in 0..n {
                if !occupation[(r, c)] {
                    continue;
                }
                let up = if r > 0 { provisional[(r - 1, c)] } else { 0 };
                let left = if c > 0 { provisional[(r, c - 1)] } else { 0 };
                provisional[(r, c)] = match (up, left) {
                    (0, 0) => forest.make(),
                    (l, 0) | (0, l) => forest.find(l),
                    (u, l) => forest.union(u, l),
                };
            }
        }

        if self.periodic {
            for r in 0..m {
                let (a, b) = (provisional[(r, 0)], provisional[(r, n - 1)]);
                if a != 0 && b != 0 {
                    forest.union(a, b);
                }
            }
            for c in 0..n {
                let (a, b) = (provisional[(0, c)], provisional[(m - 1, c)]);
                if a != 0 && b != 0 {
                    forest.union(a, b);
                }
            }
        }

        // Root label -> final consecutive label.
        let mut relabel = vec![0u32; forest.parent.len()];
        let mut count = 0u32;
        for label in provisional.as_mut_slice() {
            if *label == 0 {
                continue;
            }
            let root = forest.find(*label) as usize;
            if relabel[root] == 0 {
                count += 1;
                relabel[root] = count;
            }
            *label = relabel[root];
        }

        trace!(
            rows = m,
            cols = n,
            provisional = forest.parent.len() - 1,
            clusters = count,
            periodic = self.periodic,
            "labeled clusters"
        );

        ClusterLabels::new(provisional, count as usize)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::clustering::count_masses;
    use crate::lattice::GridShape;
    use crate::sampling::draw_bernoulli;

    fn map(rows: &[&str]) -> Grid<bool> {
        let shape = GridShape::new(rows.len(), rows[0].len());
        Grid::from_fn(shape, |r, c| rows[r].as_bytes()[c] == b'#')
    }

    #[test]
    fn empty_map_has_no_clusters() {
        let clusters = HoshenKopelman::new().label_clusters(&map(&["...", "..."]));
        assert_eq!(clusters.count(), 0);
        assert!(clusters.labels().iter().all(|&l| l == 0));
        assert!(count_masses(&clusters).is_empty());
    }

    #[test]
    fn full_map_is_one_cluster() {
        let clusters = HoshenKopelman::new().label_clusters(&map(&["####"; 4]));
        assert_eq!(clusters.count(), 1);
        assert!(clusters.labels().iter().all(|&l| l == 1));
        assert_eq!(count_masses(&clusters), vec![16]);
    }

    #[test]
    fn diagonal_sites_are_not_connected() {
        let clusters =
            HoshenKopelman::new().label_clusters(&map(&["#.#.", ".#.#", "#.#.", ".#.#"]));
        assert_eq!(clusters.count(), 8);
        assert_eq!(count_masses(&clusters), vec![1; 8]);
    }

    #[test]
    fn branches_joined_late_share_one_label() {
        let clusters = HoshenKopelman::new().label_clusters(&map(&[
            "#.#.#", //
            "#.#.#", //
            "#####",
        ]));
        assert_eq!(clusters.count(), 1);
        assert_eq!(count_masses(&clusters), vec![11]);
    }

    #[test]
    fn labels_follow_raster_order_of_first_appearance() {
        let clusters = HoshenKopelman::new().label_clusters(&map(&[
            "..##", //
            "#...", //
            "#.##",
        ]));
        assert_eq!(clusters.count(), 3);
        let labels = clusters.labels();
        assert_eq!(labels[(0, 2)], 1);
        assert_eq!(labels[(0, 3)], 1);
        assert_eq!(labels[(1, 0)], 2);
        assert_eq!(labels[(2, 0)], 2);
        assert_eq!(labels[(2, 2)], 3);
        assert_eq!(count_masses(&clusters), vec![2, 2, 2]);
    }

    #[test]
    fn periodic_boundaries_join_opposite_edges() {
        let occupation = map(&[
            "#..#", //
            "#..#", //
            "....", //
            "#...",
        ]);
        let open = HoshenKopelman::new().label_clusters(&occupation);
        assert_eq!(open.count(), 3);

        let torus = HoshenKopelman::periodic().label_clusters(&occupation);
        assert_eq!(torus.count(), 1);
        assert_eq!(count_masses(&torus), vec![5]);
    }

    #[test]
    fn every_occupied_site_is_labeled() {
        let mut rng = StdRng::seed_from_u64(31);
        let occupation = draw_bernoulli(GridShape::new(40, 30), 0.55, &mut rng).unwrap();
        for labeler in [HoshenKopelman::new(), HoshenKopelman::periodic()] {
            let clusters = labeler.label_clusters(&occupation);
            for (occupied, label) in occupation.iter().zip(clusters.labels().iter()) {
                assert_eq!(*occupied, *label != 0);
            }
            let masses = labeler.aggregate_masses(&clusters);
            assert_eq!(masses.len(), clusters.count());
            assert!(masses.iter().all(|&m| m > 0));
            assert_eq!(masses.iter().sum::<usize>(), occupation.count_true());
        }
    }

    #[test]
    fn neighbours_share_labels() {
        let mut rng = StdRng::seed_from_u64(8);
        let occupation = draw_bernoulli(GridShape::new(25, 25), 0.6, &mut rng).unwrap();
        let clusters = HoshenKopelman::new().label_clusters(&occupation);
        let labels = clusters.labels();
        for r in 0..25 {
            for c in 0..25 {
                if !occupation[(r, c)] {
                    continue;
                }
                if r + 1 < 25 && occupation[(r + 1, c)] {
                    assert_eq!(labels[(r, c)], labels[(r + 1, c)]);
                }
                if c + 1 < 25 && occupation[(r, c + 1)] {
                    assert_eq!(labels[(r, c)], labels[(r, c + 1)]);
                }
            }
        }
    }
}
