//! Fourier filtering of white noise into a correlated field.
use rand::Rng as RngCore;
use rustfft::num_complex::Complex;
use tracing::{debug, warn};

use crate::error::Result;
use crate::lattice::{Grid, GridShape};
use crate::sampling::{draw_noise, NoiseDistribution};
use crate::spectral::fft::Fft2;
use crate::spectral::kernel::{build_kernel, Kernel};

/// Largest tolerated ratio between the imaginary residual and the real field scale
/// before a warning is emitted.
const IMAGINARY_RESIDUAL_TOLERANCE: f64 = 1e-8;

/// Synthesizes unit-variance correlated fields for a fixed `(shape, hurst)`.
///
/// The kernel and FFT plans are built once in [`SpectralSynthesizer::new`] and reused by
/// every call to [`SpectralSynthesizer::synthesize`].
pub struct SpectralSynthesizer {
    kernel: Kernel,
    fft: Fft2,
}

impl SpectralSynthesizer {
    pub fn new(shape: GridShape, hurst: f64) -> Result<Self> {
        let kernel = build_kernel(shape, hurst)?;
        Ok(Self {
            kernel,
            fft: Fft2::new(shape),
        })
    }

    pub fn shape(&self) -> GridShape {
        self.fft.shape()
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    /// Draws noise from `distribution`, filters its spectrum by the kernel amplitude, and
    /// returns the real part of the inverse transform scaled by the kernel norm.
    pub fn synthesize(
        &self,
        distribution: NoiseDistribution,
        rng: &mut dyn RngCore,
    ) -> Grid<f64> {
        let shape = self.shape();
        let noise = draw_noise(shape, distribution, rng);

        // The noise grid is consumed here; only the spectrum buffer stays alive.
        let mut spectrum: Vec<Complex<f64>> = noise
            .into_vec()
            .into_iter()
            .map(|v| Complex::new(v, 0.0))
            .collect();

        self.fft.forward(&mut spectrum);
        for (s, a) in spectrum.iter_mut().zip(self.kernel.amplitude().iter()) {
            *s *= *a;
        }
        self.fft.inverse(&mut spectrum);

        let norm = self.kernel.norm();
        let mut max_real = 0.0_f64;
        let mut max_imag = 0.0_f64;
        let field = Grid::from_fn(shape, |r, c| {
            let v = spectrum[r * shape.cols + c];
            max_real = max_real.max(v.re.abs());
            max_imag = max_imag.max(v.im.abs());
            v.re * norm
        });

        let residual = if max_real > 0.0 {
            max_imag / max_real
        } else {
            max_imag
        };
        if residual > IMAGINARY_RESIDUAL_TOLERANCE {
            warn!(
                residual,
                hurst = self.kernel.hurst(),
                "imaginary residual after inverse transform exceeds tolerance"
            );
        } else {
            debug!(
                rows = shape.rows,
                cols = shape.cols,
                %distribution,
                residual,
                "synthesized correlated field"
            );
        }

        field
    }
}

/// One-shot synthesis: builds the kernel for `(shape, hurst)` and draws a single field.
pub fn synthesize(
    shape: GridShape,
    hurst: f64,
    distribution: NoiseDistribution,
    rng: &mut dyn RngCore,
) -> Result<Grid<f64>> {
    let synthesizer = SpectralSynthesizer::new(shape, hurst)?;
    Ok(synthesizer.synthesize(distribution, rng))
}
