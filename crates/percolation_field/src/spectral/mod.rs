//! Fourier Filtering Method (FFM) for long-range correlated fields.
//!
//! - [`kernel`]: power-law kernel in frequency space and its normalization.
//! - [`fft`]: planned 2D transforms over row-major grids.
//! - [`synthesis`]: noise draw, spectral shaping, inverse transform, unit-variance scaling.
pub mod fft;
pub mod kernel;
pub mod synthesis;

pub use kernel::{build_kernel, Kernel, DEFAULT_HURST};
pub use synthesis::{synthesize, SpectralSynthesizer};
