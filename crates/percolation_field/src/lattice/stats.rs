//! Moments of a real-valued field.
use crate::lattice::Grid;

/// Summary moments of a scalar field sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldStatistics {
    pub mean: f64,
    /// Population variance about `mean`.
    pub variance: f64,
    /// Mean of squared values; equals the variance about zero.
    pub mean_square: f64,
    pub min: f64,
    pub max: f64,
}

impl FieldStatistics {
    /// Computes moments over every site. Returns `None` for an empty field.
    pub fn of(field: &Grid<f64>) -> Option<Self> {
        Self::of_slice(field.as_slice())
    }

    pub fn of_slice(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let n = values.len() as f64;
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in values {
            sum += v;
            sum_sq += v * v;
            min = min.min(v);
            max = max.max(v);
        }
        let mean = sum / n;
        let mean_square = sum_sq / n;
        Some(Self {
            mean,
            variance: (mean_square - mean * mean).max(0.0),
            mean_square,
            min,
            max,
        })
    }

    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }
}
