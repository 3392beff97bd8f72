//! Row-major 2D grid storage.
//!
//! Rows index the first lattice axis (`M`), columns the second (`N`). Site `(r, c)`
//! lives at `r * cols + c`.
use std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Dimensions of a lattice: `rows` x `cols` sites.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridShape {
    /// Number of rows (`M`).
    pub rows: usize,
    /// Number of columns (`N`).
    pub cols: usize,
}

impl GridShape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Creates a shape and checks that both dimensions are positive.
    pub fn checked(rows: usize, cols: usize) -> Result<Self> {
        let shape = Self::new(rows, cols);
        shape.validate()?;
        Ok(shape)
    }

    /// Total number of sites.
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an error if either dimension is zero.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(Error::InvalidConfig(format!(
                "grid dimensions must be > 0, got {}x{}",
                self.rows, self.cols
            )));
        }
        Ok(())
    }

    /// Flat index of site `(r, c)`, or `None` when out of bounds.
    #[inline]
    pub fn index_of(&self, r: usize, c: usize) -> Option<usize> {
        (r < self.rows && c < self.cols).then(|| r * self.cols + c)
    }

    /// Site coordinates of a flat index.
    #[inline]
    pub fn coords_of(&self, i: usize) -> (usize, usize) {
        (i / self.cols, i % self.cols)
    }
}

/// A lattice of values stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    shape: GridShape,
    data: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every site set to `value`.
    pub fn filled(shape: GridShape, value: T) -> Self {
        Self {
            shape,
            data: vec![value; shape.len()],
        }
    }
}

impl<T> Grid<T> {
    /// Wrap row-major `data`, failing if its length does not match `shape`.
    pub fn from_vec(shape: GridShape, data: Vec<T>) -> Result<Self> {
        if data.len() != shape.len() {
            return Err(Error::InvalidConfig(format!(
                "grid data has {} values, expected {} for {}x{}",
                data.len(),
                shape.len(),
                shape.rows,
                shape.cols
            )));
        }
        Ok(Self { shape, data })
    }

    /// Build a grid by evaluating `f(r, c)` at every site.
    pub fn from_fn(shape: GridShape, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(shape.len());
        for r in 0..shape.rows {
            for c in 0..shape.cols {
                data.push(f(r, c));
            }
        }
        Self { shape, data }
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    pub fn rows(&self) -> usize {
        self.shape.rows
    }

    pub fn cols(&self) -> usize {
        self.shape.cols
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the value at `(r, c)`, or `None` if out of bounds.
    pub fn get(&self, r: usize, c: usize) -> Option<&T> {
        self.shape.index_of(r, c).map(|i| &self.data[i])
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// One row as a slice.
    pub fn row(&self, r: usize) -> &[T] {
        let start = r * self.shape.cols;
        &self.data[start..start + self.shape.cols]
    }

    /// Apply `f` to every site, keeping the shape.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            shape: self.shape,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl Grid<bool> {
    /// Number of `true` sites.
    pub fn count_true(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (r, c): (usize, usize)) -> &T {
        debug_assert!(r < self.shape.rows && c < self.shape.cols);
        &self.data[r * self.shape.cols + c]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
        debug_assert!(r < self.shape.rows && c < self.shape.cols);
        &mut self.data[r * self.shape.cols + c]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_rejects_zero_dimensions() {
        assert!(GridShape::checked(0, 4).is_err());
        assert!(GridShape::checked(4, 0).is_err());
        let shape = GridShape::checked(3, 5).unwrap();
        assert_eq!(shape.len(), 15);
    }

    #[test]
    fn index_and_coords_roundtrip() {
        let shape = GridShape::new(3, 4);
        let i = shape.index_of(2, 1).unwrap();
        assert_eq!(i, 9);
        assert_eq!(shape.coords_of(i), (2, 1));
        assert_eq!(shape.index_of(3, 0), None);
        assert_eq!(shape.index_of(0, 4), None);
    }

    #[test]
    fn from_fn_is_row_major() {
        let grid = Grid::from_fn(GridShape::new(2, 3), |r, c| r * 10 + c);
        assert_eq!(grid.as_slice(), &[0, 1, 2, 10, 11, 12]);
        assert_eq!(grid[(1, 2)], 12);
        assert_eq!(grid.row(1), &[10, 11, 12]);
        assert_eq!(grid.get(2, 0), None);
    }

    #[test]
    fn from_vec_checks_length() {
        let shape = GridShape::new(2, 2);
        assert!(Grid::from_vec(shape, vec![1, 2, 3]).is_err());
        let grid = Grid::from_vec(shape, vec![true, false, true, true]).unwrap();
        assert_eq!(grid.count_true(), 3);
    }

    #[test]
    fn map_keeps_shape() {
        let grid = Grid::filled(GridShape::new(2, 5), 1.5_f64);
        let mask = grid.map(|v| *v > 1.0);
        assert_eq!(mask.shape(), grid.shape());
        assert_eq!(mask.count_true(), 10);
    }
}
