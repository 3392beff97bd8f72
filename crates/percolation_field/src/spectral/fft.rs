//! Two-dimensional FFT over row-major lattices.
//!
//! Rows are transformed in place with one planned 1D FFT of length `cols`, then each column
//! is gathered into a scratch buffer and transformed with a plan of length `rows`.
//! rustfft does not normalize; [`Fft2::inverse`] divides by `rows * cols`.
use std::sync::Arc;

use rustfft::num_complex::Complex;
use rustfft::{Fft, FftPlanner};

use crate::lattice::GridShape;

/// Planned forward and inverse 2D transforms for one grid shape.
pub struct Fft2 {
    shape: GridShape,
    row_forward: Arc<dyn Fft<f64>>,
    row_inverse: Arc<dyn Fft<f64>>,
    col_forward: Arc<dyn Fft<f64>>,
    col_inverse: Arc<dyn Fft<f64>>,
}

impl Fft2 {
    pub fn new(shape: GridShape) -> Self {
        let mut planner = FftPlanner::<f64>::new();
        Self {
            shape,
            row_forward: planner.plan_fft_forward(shape.cols),
            row_inverse: planner.plan_fft_inverse(shape.cols),
            col_forward: planner.plan_fft_forward(shape.rows),
            col_inverse: planner.plan_fft_inverse(shape.rows),
        }
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Unnormalized forward transform in place.
    pub fn forward(&self, buf: &mut [Complex<f64>]) {
        self.transform(buf, &self.row_forward, &self.col_forward);
    }

    /// Inverse transform in place, scaled by `1 / (rows * cols)`.
    pub fn inverse(&self, buf: &mut [Complex<f64>]) {
        self.transform(buf, &self.row_inverse, &self.col_inverse);
        let scale = 1.0 / self.shape.len() as f64;
        for v in buf.iter_mut() {
            *v *= scale;
        }
    }

    fn transform(
        &self,
        buf: &mut [Complex<f64>],
        rows: &Arc<dyn Fft<f64>>,
        cols: &Arc<dyn Fft<f64>>,
    ) {
        let GridShape { rows: m, cols: n } = self.shape;
        debug_assert_eq!(buf.len(), m * n, "buffer must match grid shape");

        // Every row is one contiguous chunk of length n.
        rows.process(buf);

        let mut column = vec![Complex::new(0.0, 0.0); m];
        for c in 0..n {
            for r in 0..m {
                column[r] = buf[r * n + c];
            }
            cols.process(&mut column);
            for r in 0..m {
                buf[r * n + c] = column[r];
            }
        }
    }
}
