//! Random draws for lattice fields.
//!
//! Every draw takes an explicit `&mut dyn RngCore` so callers own the random source
//! and can reproduce a field from a seed. This module provides:
//! - [`NoiseDistribution`]: zero-mean, unit-variance site noise (uniform or gaussian).
//! - [`draw_noise`]: white-noise field input to spectral synthesis.
//! - [`draw_bernoulli`]: i.i.d. site occupation for uncorrelated percolation.
//! - [`seed_for_realization`]: independent seeds for ensembles of realizations.
use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use rand::Rng as RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::lattice::{Grid, GridShape};

pub mod seed;

pub use seed::seed_for_realization;

/// Half-width of the unit-variance uniform distribution.
const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Site distribution of the white noise fed into spectral synthesis.
///
/// Both variants have mean 0 and variance 1.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NoiseDistribution {
    /// Uniform on `[-sqrt(3), sqrt(3)]`.
    Uniform,
    /// Standard normal.
    #[default]
    Gaussian,
}

impl NoiseDistribution {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoiseDistribution::Uniform => "uniform",
            NoiseDistribution::Gaussian => "gaussian",
        }
    }
}

impl fmt::Display for NoiseDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoiseDistribution {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "uniform" => Ok(NoiseDistribution::Uniform),
            "gaussian" | "normal" => Ok(NoiseDistribution::Gaussian),
            other => Err(Error::InvalidConfig(format!(
                "unknown noise distribution '{other}', expected 'uniform' or 'gaussian'"
            ))),
        }
    }
}

/// Generate a random float in the range [0, 1).
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Two independent standard normal draws (Box-Muller).
pub(crate) fn box_muller_pair(rng: &mut dyn RngCore) -> (f64, f64) {
    let u1 = (1.0 - rand01(rng)).clamp(f64::MIN_POSITIVE, 1.0);
    let u2 = rand01(rng);

    let r = (-2.0 * u1.ln()).sqrt();
    let theta = TAU * u2;

    (r * theta.cos(), r * theta.sin())
}

/// Draw an i.i.d. noise field with mean 0 and variance 1.
pub fn draw_noise(
    shape: GridShape,
    distribution: NoiseDistribution,
    rng: &mut dyn RngCore,
) -> Grid<f64> {
    match distribution {
        NoiseDistribution::Uniform => {
            Grid::from_fn(shape, |_, _| SQRT_3 * (2.0 * rand01(rng) - 1.0))
        }
        NoiseDistribution::Gaussian => {
            let mut spare: Option<f64> = None;
            Grid::from_fn(shape, |_, _| match spare.take() {
                Some(v) => v,
                None => {
                    let (a, b) = box_muller_pair(rng);
                    spare = Some(b);
                    a
                }
            })
        }
    }
}

/// Draw a Bernoulli(`p`) occupation map. `p` must lie in `[0, 1]`.
pub fn draw_bernoulli(shape: GridShape, p: f64, rng: &mut dyn RngCore) -> Result<Grid<bool>> {
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::InvalidConfig(format!(
            "occupation probability must be in [0, 1], got {p}"
        )));
    }
    Ok(Grid::from_fn(shape, |_, _| rand01(rng) < p))
}
