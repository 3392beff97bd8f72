//! Frequency-space kernel for power-law correlated fields.
//!
//! For grid shape `(M, N)` and Hurst exponent `H` the power kernel is
//!
//! ```text
//! K[k1, k2] = |2 cos(2 pi k1 / M) + 2 cos(2 pi k2 / N) - 4| ^ -(H + 1)
//! ```
//!
//! with the origin pinned to `1` before exponentiation. The dispersion term is even in
//! each frequency, so negative frequencies `k - M` share the value of index `k` and the
//! kernel is evaluated directly over the DFT index range `0..M x 0..N`.
use std::f64::consts::TAU;

use tracing::debug;

use crate::error::{Error, Result};
use crate::lattice::{Grid, GridShape};

/// Hurst exponent of the uncorrelated regime: the kernel is flat and synthesis returns
/// the input noise unchanged.
pub const DEFAULT_HURST: f64 = -1.0;

/// Spectral filter and normalization for one `(shape, hurst)` pair.
#[derive(Clone, Debug)]
pub struct Kernel {
    hurst: f64,
    power: Grid<f64>,
    amplitude: Grid<f64>,
    norm: f64,
}

impl Kernel {
    pub fn hurst(&self) -> f64 {
        self.hurst
    }

    pub fn shape(&self) -> GridShape {
        self.power.shape()
    }

    /// Power kernel `K` (before the square root).
    pub fn power(&self) -> &Grid<f64> {
        &self.power
    }

    /// Amplitude filter `sqrt(K)` applied to the noise spectrum.
    pub fn amplitude(&self) -> &Grid<f64> {
        &self.amplitude
    }

    /// `sqrt(M * N / sum(K))`; scales the filtered field to unit variance.
    pub fn norm(&self) -> f64 {
        self.norm
    }
}

/// Unsigned lattice dispersion `|2 cos(2 pi k1 / M) + 2 cos(2 pi k2 / N) - 4|`.
#[inline]
fn dispersion(shape: GridShape, k1: usize, k2: usize) -> f64 {
    let a = (TAU * k1 as f64 / shape.rows as f64).cos();
    let b = (TAU * k2 as f64 / shape.cols as f64).cos();
    (2.0 * a + 2.0 * b - 4.0).abs()
}

/// Builds the power kernel, its amplitude filter and the normalization constant.
///
/// Fails with [`Error::InvalidConfig`] for an empty shape or non-finite `hurst`, and with
/// [`Error::NumericDomain`] if exponentiation overflows.
pub fn build_kernel(shape: GridShape, hurst: f64) -> Result<Kernel> {
    shape.validate()?;
    if !hurst.is_finite() {
        return Err(Error::InvalidConfig(format!(
            "hurst exponent must be finite, got {hurst}"
        )));
    }

    let exponent = -(hurst + 1.0);
    let mut power = Grid::from_fn(shape, |k1, k2| dispersion(shape, k1, k2));
    // Pin before exponentiation: 0^negative is infinite.
    power[(0, 0)] = 1.0;

    for (i, v) in power.as_mut_slice().iter_mut().enumerate() {
        *v = v.powf(exponent);
        if !v.is_finite() || *v < 0.0 {
            let (k1, k2) = shape.coords_of(i);
            return Err(Error::NumericDomain(format!(
                "kernel entry ({k1}, {k2}) is {v} for hurst {hurst}"
            )));
        }
    }

    let total: f64 = power.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return Err(Error::NumericDomain(format!(
            "kernel energy {total} is not a positive finite value for hurst {hurst}"
        )));
    }
    let norm = (shape.len() as f64 / total).sqrt();
    let amplitude = power.map(|v| v.sqrt());

    debug!(
        rows = shape.rows,
        cols = shape.cols,
        hurst,
        norm,
        "built spectral kernel"
    );

    Ok(Kernel {
        hurst,
        power,
        amplitude,
        norm,
    })
}
