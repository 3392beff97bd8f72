//! Lattice storage shared by every field, occupation map and label array.
//!
//! [`GridShape`] fixes the `(rows, cols)` dimensions of a generator instance and
//! [`Grid`] stores one value per site in row-major order.
pub mod grid;
pub mod stats;

pub use grid::{Grid, GridShape};
pub use stats::FieldStatistics;
